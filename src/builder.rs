//! Plain-text receipt builder
//!
//! Accumulates finished receipt lines as a string. The output carries no
//! control bytes; rendering it on any fixed-width medium reproduces the
//! layout as built.

use crate::columns::format_columns;
use crate::error::LayoutResult;
use crate::field::{Alignment, Field};
use crate::row::format_row;

/// Receipt text builder
///
/// Composes raw lines, rule lines, and formatted rows into one string.
/// Every formatted line is exactly the configured width.
pub struct ReceiptBuilder {
    buf: String,
    width: usize,
}

impl ReceiptBuilder {
    /// Create a builder for the given paper width in characters
    ///
    /// Common widths:
    /// - built-in 58mm printers: 32 characters
    /// - hub-attached printers: 39 characters
    pub fn new(width: usize) -> Self {
        Self {
            buf: String::new(),
            width,
        }
    }

    /// Get the configured paper width
    pub fn width(&self) -> usize {
        self.width
    }

    // === Text Output ===

    /// Write a raw line
    pub fn line(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self.buf.push('\n');
        self
    }

    /// Write an empty line
    pub fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    // === Separators ===

    /// Write a line of '-' characters
    pub fn sep_dash(&mut self) -> &mut Self {
        let rule = "-".repeat(self.width);
        self.line(&rule)
    }

    /// Write a line of '=' characters
    pub fn sep_eq(&mut self) -> &mut Self {
        let rule = "=".repeat(self.width);
        self.line(&rule)
    }

    /// Write a line of '_' characters
    pub fn sep_underscore(&mut self) -> &mut Self {
        let rule = "_".repeat(self.width);
        self.line(&rule)
    }

    // === Layout ===

    /// Write a left/right justified row, wrapping if it does not fit
    pub fn row(&mut self, left: &str, right: &str) -> LayoutResult<&mut Self> {
        let row = format_row(left, right, self.width)?;
        self.buf.push_str(&row);
        if !row.ends_with('\n') {
            self.buf.push('\n');
        }
        Ok(self)
    }

    /// Write a weighted column row
    pub fn columns(&mut self, fields: &[Field], separator: &str) -> LayoutResult<&mut Self> {
        let block = format_columns(fields, separator, self.width)?;
        Ok(self.line(&block))
    }

    /// Write a line centered in the paper width
    pub fn centered(&mut self, s: &str) -> LayoutResult<&mut Self> {
        let fields = [Field::new(s).with_alignment(Alignment::Center)];
        let block = format_columns(&fields, "", self.width)?;
        Ok(self.line(&block))
    }

    // === Build ===

    /// Finalize and return the accumulated text
    pub fn finish(self) -> String {
        self.buf
    }

    /// Get the current buffer contents
    pub fn as_str(&self) -> &str {
        &self.buf
    }
}

impl Default for ReceiptBuilder {
    fn default() -> Self {
        Self::new(crate::BUILT_IN_PRINTER_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators_span_the_width() {
        let mut b = ReceiptBuilder::new(5);
        b.sep_dash().sep_eq().sep_underscore();
        assert_eq!(b.finish(), "-----\n=====\n_____\n");
    }

    #[test]
    fn test_receipt_lines_are_paper_width() {
        let mut b = ReceiptBuilder::new(32);
        b.centered("CORNER CAFE").unwrap();
        b.sep_eq();
        b.columns(
            &[
                Field::new("Qty"),
                Field::new("Item").with_weight(3),
                Field::new("Price").with_alignment(Alignment::Right),
            ],
            " ",
        )
        .unwrap();
        b.sep_dash();
        b.row("2x Flat White", "7.00").unwrap();
        b.row("Total", "7.00").unwrap();

        let receipt = b.finish();
        for line in receipt.lines() {
            assert_eq!(line.chars().count(), 32);
        }
    }

    #[test]
    fn test_centered_line() {
        let mut b = ReceiptBuilder::new(11);
        b.centered("hello").unwrap();
        assert_eq!(b.as_str(), "   hello   \n");
    }

    #[test]
    fn test_wrapped_row_is_not_double_terminated() {
        let mut b = ReceiptBuilder::new(16);
        b.row("A very long label that overflows", "9.99").unwrap();
        assert!(!b.as_str().ends_with("\n\n"));
        assert_eq!(b.as_str().lines().count(), 3);
    }

    #[test]
    fn test_row_error_leaves_buffer_untouched() {
        let mut b = ReceiptBuilder::new(5);
        b.line("head");
        assert!(b.row("abcdef", "ghijkl").is_err());
        assert_eq!(b.as_str(), "head\n");
    }

    #[test]
    fn test_default_builder_uses_built_in_width() {
        let b = ReceiptBuilder::default();
        assert_eq!(b.width(), crate::BUILT_IN_PRINTER_WIDTH);
    }
}
