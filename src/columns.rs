//! Weighted column layout
//!
//! Lays out N text fields into fixed-width lines. Each field gets a share
//! of the available width proportional to its weight; text that does not
//! fit its share carries over onto continuation lines at the same column.

use tracing::instrument;

use crate::error::{LayoutError, LayoutResult};
use crate::field::{Alignment, Field};

/// Format fields into one or more lines of exactly `max_chars_per_line`
/// characters each.
///
/// The separator is inserted between consecutive fields. Widths are
/// counted in characters, not bytes. Field text longer than its allotted
/// width wraps onto continuation lines, joined by `'\n'`.
///
/// Fails with [`LayoutError::InvalidArgument`] when `fields` is empty, a
/// weight is zero, the separators alone fill the line, or a field's share
/// rounds to zero while it still has text to place.
#[instrument(skip(fields), fields(field_count = fields.len(), width = max_chars_per_line))]
pub fn format_columns(
    fields: &[Field],
    separator: &str,
    max_chars_per_line: usize,
) -> LayoutResult<String> {
    if fields.is_empty() {
        return Err(LayoutError::InvalidArgument("no fields".into()));
    }
    if fields.iter().any(|f| f.weight == 0) {
        return Err(LayoutError::InvalidArgument(
            "field weights must be at least 1".into(),
        ));
    }

    let sep: Vec<char> = separator.chars().collect();
    let overhead = sep.len() * (fields.len() - 1);
    if max_chars_per_line <= overhead {
        return Err(LayoutError::InvalidArgument(format!(
            "width {} leaves no room after {} separator characters",
            max_chars_per_line, overhead
        )));
    }

    let total_weight: u64 = fields.iter().map(|f| u64::from(f.weight)).sum();
    let available = max_chars_per_line - overhead;

    // Fractional shares are rounded per field so that rounding error is
    // spread across the row instead of landing on one field.
    let chars_per_weight = available as f64 / total_weight as f64;

    // Target widths stay the same on every continuation line.
    let targets: Vec<usize> = fields
        .iter()
        .map(|f| (f64::from(f.weight) * chars_per_weight).round() as usize)
        .collect();

    for (field, &target) in fields.iter().zip(&targets) {
        if target == 0 && !field.text.is_empty() {
            return Err(LayoutError::InvalidArgument(format!(
                "field {:?} is allotted zero width, its text can never be placed",
                field.text
            )));
        }
    }

    let mut lines: Vec<String> = Vec::new();
    let mut pending: Vec<Vec<char>> = fields.iter().map(|f| f.text.chars().collect()).collect();

    loop {
        let mut line: Vec<char> = Vec::with_capacity(max_chars_per_line);
        let mut next: Vec<Vec<char>> = Vec::with_capacity(fields.len());
        let mut index_of_first_space: Option<usize> = None;
        let mut overflowed = false;

        for (i, field) in fields.iter().enumerate() {
            let target = targets[i];
            let text = &pending[i];

            let (shown, rest): (&[char], &[char]) = if text.len() > target {
                overflowed = true;
                text.split_at(target)
            } else {
                (text, &[])
            };
            next.push(rest.to_vec());

            let padding = target - shown.len();
            match field.alignment {
                Alignment::Left => {
                    line.extend_from_slice(shown);
                    line.extend(std::iter::repeat_n(' ', padding));
                    if index_of_first_space.is_none() && padding > 0 {
                        index_of_first_space = Some(shown.len());
                    }
                }
                Alignment::Center => {
                    line.extend(std::iter::repeat_n(' ', padding / 2));
                    line.extend_from_slice(shown);
                    line.extend(std::iter::repeat_n(' ', padding - padding / 2));
                    if index_of_first_space.is_none() && padding > 1 {
                        index_of_first_space = Some(0);
                    }
                }
                Alignment::Right => {
                    line.extend(std::iter::repeat_n(' ', padding));
                    line.extend_from_slice(shown);
                    if index_of_first_space.is_none() && padding > 0 {
                        index_of_first_space = Some(0);
                    }
                }
            }

            if i < fields.len() - 1 {
                line.extend_from_slice(&sep);
            }
        }

        fit_line(&mut line, max_chars_per_line, index_of_first_space);
        lines.push(line.into_iter().collect());

        if !overflowed {
            break;
        }
        pending = next;
    }

    Ok(lines.join("\n"))
}

/// Bring an assembled line to exactly `width` characters.
///
/// Per-field rounding can leave the row a few characters long or short.
/// Characters are removed or inserted one at a time, preferring the
/// recorded first-space position, then the first space anywhere, then
/// position 0. A line that already has the right length is untouched.
fn fit_line(line: &mut Vec<char>, width: usize, index_of_first_space: Option<usize>) {
    while line.len() > width {
        let index = match index_of_first_space {
            Some(i) if i < line.len() && line[i] == ' ' => i,
            _ => line.iter().position(|&c| c == ' ').unwrap_or(0),
        };
        line.remove(index);
    }

    while line.len() < width {
        let index = match index_of_first_space {
            Some(i) if i <= line.len() => i,
            _ => line.iter().position(|&c| c == ' ').unwrap_or(0),
        };
        line.insert(index, ' ');
    }
}
