//! Tuple formatting for where-parts: `@xxx-yyy-zzz`.

use crate::alphabet::{CODE_LENGTH, PADDING_CHAR};

/// Separator between the what-part and the where-part.
pub const PART_SEPARATOR: char = '@';

/// Separator between tuples.
pub const TUPLE_SEPARATOR: char = '-';

/// Symbols per tuple.
pub const TUPLE_LENGTH: usize = 3;

/// Pad a filtered code to [`CODE_LENGTH`], group it, and prefix `@`.
///
/// Codes longer than [`CODE_LENGTH`] are grouped as they are.
pub fn format_where(code: &str) -> String {
    let pad = CODE_LENGTH.saturating_sub(code.chars().count());
    let mut padded = String::with_capacity(CODE_LENGTH.max(code.len()));
    padded.extend(std::iter::repeat_n(PADDING_CHAR as char, pad));
    padded.push_str(code);

    let mut out = String::with_capacity(1 + padded.len() + padded.len() / TUPLE_LENGTH);
    out.push(PART_SEPARATOR);
    for (i, symbol) in padded.chars().enumerate() {
        if i > 0 && i % TUPLE_LENGTH == 0 {
            out.push(TUPLE_SEPARATOR);
        }
        out.push(symbol);
    }
    out
}

/// Strip `@`, separators, and padding, leaving the filtered code.
pub fn strip_where(where_part: &str) -> String {
    where_part
        .chars()
        .filter(|&c| c != PART_SEPARATOR && c != TUPLE_SEPARATOR && c != PADDING_CHAR as char)
        .collect()
}
