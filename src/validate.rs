//! Shape validation for what- and where-parts.
//!
//! These checks look at characters and grouping only. Whether a where-part
//! points at a real cell is the provider's call; see
//! [`PlaceKeyCodec::format_is_valid`](crate::PlaceKeyCodec::format_is_valid).

use std::sync::OnceLock;

use regex::Regex;

use crate::alphabet::{ALPHABET, PADDING_CHAR, REPLACEMENT_CHARS};
use crate::tuple::{PART_SEPARATOR, TUPLE_LENGTH, TUPLE_SEPARATOR};

fn ascii(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// `xxx-yyy-zzz`: padding allowed only in the first tuple.
fn where_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let code = format!("{}{}", ascii(ALPHABET), ascii(REPLACEMENT_CHARS));
        let first = format!("[{}{}]{{{}}}", code, PADDING_CHAR as char, TUPLE_LENGTH);
        let rest = format!("[{}]{{{}}}", code, TUPLE_LENGTH);
        Regex::new(&format!(
            "^{first}{sep}{rest}{sep}{rest}$",
            sep = TUPLE_SEPARATOR
        ))
        .expect("where-part pattern is valid")
    })
}

/// `xxx` or `xxx-yyy`: alphabet symbols only.
fn what_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let tuple = format!("[{}]{{{}}}", ascii(ALPHABET), TUPLE_LENGTH);
        Regex::new(&format!("^{tuple}({sep}{tuple})?$", sep = TUPLE_SEPARATOR))
            .expect("what-part pattern is valid")
    })
}

/// Shape check for a where-part, with or without its leading `@`.
pub fn where_shape_is_valid(where_part: &str) -> bool {
    let bare = where_part.strip_prefix(PART_SEPARATOR).unwrap_or(where_part);
    where_pattern().is_match(bare)
}

/// Shape check for a what-part.
pub fn what_shape_is_valid(what: &str) -> bool {
    what_pattern().is_match(what)
}
