//! Two-column row layout
//!
//! Left/right justified label and value rows, with proportional wrapping
//! across multiple lines when the pair does not fit.

use tracing::instrument;

use crate::error::{LayoutError, LayoutResult};

/// Narrowest column a wrapped side may be squeezed to.
const MIN_COLUMN_WIDTH: usize = 4;

/// Format a label/value pair into a row of exactly `max_chars_per_line`
/// characters.
///
/// When the pair fits on one line, the label is left-justified and the
/// value right-justified with space fill between them. When it does not,
/// one column is reserved as a separator and the rest is split between
/// the two sides by the ratio of their text lengths; both sides then wrap
/// across as many newline-terminated lines as they need.
///
/// Fails with [`LayoutError::InvalidArgument`] on a zero width, or when
/// wrapping is required on a line too narrow to fit both columns.
#[instrument(skip(left, right), fields(left_len = left.len(), right_len = right.len(), width = max_chars_per_line))]
pub fn format_row(left: &str, right: &str, max_chars_per_line: usize) -> LayoutResult<String> {
    if max_chars_per_line == 0 {
        return Err(LayoutError::InvalidArgument("zero line width".into()));
    }

    let left_len = left.chars().count();
    let right_len = right.chars().count();

    if left_len + right_len <= max_chars_per_line {
        let mut row = String::with_capacity(max_chars_per_line);
        row.push_str(left);
        row.push_str(&" ".repeat(max_chars_per_line - left_len - right_len));
        row.push_str(right);
        return Ok(row);
    }

    // Wrapping reserves one separating column and squeezes each side to no
    // less than MIN_COLUMN_WIDTH, so narrower lines cannot make progress.
    if max_chars_per_line < 2 * MIN_COLUMN_WIDTH + 1 {
        return Err(LayoutError::InvalidArgument(format!(
            "width {} is too narrow to wrap a two-column row",
            max_chars_per_line
        )));
    }

    let working = max_chars_per_line - 1;
    let ratio = left_len as f32 / (left_len + right_len) as f32;
    let mut chars_for_left = (ratio * working as f32).round() as usize;

    if chars_for_left < MIN_COLUMN_WIDTH {
        chars_for_left = MIN_COLUMN_WIDTH.min(left_len);
    } else if chars_for_left > working - MIN_COLUMN_WIDTH {
        chars_for_left = working - MIN_COLUMN_WIDTH.min(right_len);
    }
    let chars_for_right = working - chars_for_left;

    let mut left: Vec<char> = left.chars().collect();
    let mut right: Vec<char> = right.chars().collect();
    let mut out = String::new();

    while !left.is_empty() || !right.is_empty() {
        trim(&mut left);
        trim(&mut right);

        if left.len() < chars_for_left {
            left.resize(chars_for_left, ' ');
        }
        if right.len() < chars_for_right {
            let mut padded = vec![' '; chars_for_right - right.len()];
            padded.append(&mut right);
            right = padded;
        }

        out.extend(&left[..chars_for_left]);
        out.push(' ');
        out.extend(&right[..chars_for_right]);
        out.push('\n');

        left.drain(..chars_for_left);
        right.drain(..chars_for_right);
    }

    Ok(out)
}

/// Strip leading and trailing whitespace in place.
fn trim(text: &mut Vec<char>) {
    while text.last().is_some_and(|c| c.is_whitespace()) {
        text.pop();
    }
    let leading = text.iter().take_while(|c| c.is_whitespace()).count();
    text.drain(..leading);
}
