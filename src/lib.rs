//! # receipt-layout
//!
//! Fixed-width text layout for receipt-style output.
//!
//! ## Scope
//!
//! This crate handles WHERE text lands on a fixed-width line:
//! - Weighted N-column rows with per-field alignment and overflow wrapping
//! - Left/right justified label/value rows with proportional wrapping
//! - Plain-text receipt composition
//!
//! Encoding and device transport stay out of scope: the crate consumes
//! strings and widths and returns strings sized exactly to the line width.
//!
//! ## Example
//!
//! ```
//! use receipt_layout::{Alignment, Field, ReceiptBuilder};
//!
//! let mut b = ReceiptBuilder::new(32);
//! b.centered("CORNER CAFE")?;
//! b.sep_eq();
//! b.columns(
//!     &[
//!         Field::new("Qty"),
//!         Field::new("Item").with_weight(3),
//!         Field::new("Price").with_alignment(Alignment::Right),
//!     ],
//!     " ",
//! )?;
//! b.sep_dash();
//! b.row("2x Flat White", "7.00")?;
//! b.row("Total", "7.00")?;
//!
//! let receipt = b.finish();
//! assert!(receipt.lines().all(|line| line.chars().count() == 32));
//! # Ok::<(), receipt_layout::LayoutError>(())
//! ```

mod builder;
mod columns;
mod error;
mod field;
mod row;

// Re-exports
pub use builder::ReceiptBuilder;
pub use columns::format_columns;
pub use error::{LayoutError, LayoutResult};
pub use field::{Alignment, Field};
pub use row::format_row;

/// Line width of a built-in 58mm receipt printer, in characters
pub const BUILT_IN_PRINTER_WIDTH: usize = 32;

/// Line width of a hub-attached receipt printer, in characters
pub const HUB_PRINTER_WIDTH: usize = 39;
