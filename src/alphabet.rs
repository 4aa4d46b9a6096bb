//! Base-28 numerals over a vowel-free, lookalike-free alphabet.
//!
//! The alphabet drops `0`, `1`, vowels, and `l`, so codes cannot spell most
//! words and cannot be misread. `a`, `e`, and `u` are kept out of it on
//! purpose: `a` pads short codes and `e`/`u` appear only as profanity-filter
//! replacements.

use crate::error::{PlaceKeyError, Result};

/// Symbols in ascending order of value.
pub const ALPHABET: &[u8; 28] = b"23456789bcdfghjkmnpqrstvwxyz";

/// Radix of the numeral system.
pub const ALPHABET_LEN: u64 = ALPHABET.len() as u64;

/// Number of symbols in a full where-code.
pub const CODE_LENGTH: usize = 9;

/// Left-padding character for codes shorter than [`CODE_LENGTH`].
pub const PADDING_CHAR: u8 = b'a';

/// Characters introduced by the profanity filter.
pub const REPLACEMENT_CHARS: &[u8; 2] = b"eu";

/// Value of a symbol, or `None` if it is not in the alphabet.
#[inline]
pub const fn symbol_value(symbol: u8) -> Option<u64> {
    let mut i = 0;
    while i < ALPHABET.len() {
        if ALPHABET[i] == symbol {
            return Some(i as u64);
        }
        i += 1;
    }
    None
}

/// Render a payload, most significant symbol first. Zero renders as `"2"`.
pub fn encode_short(mut value: u64) -> String {
    if value == 0 {
        return (ALPHABET[0] as char).to_string();
    }
    let mut symbols = Vec::with_capacity(CODE_LENGTH);
    while value > 0 {
        symbols.push(ALPHABET[(value % ALPHABET_LEN) as usize]);
        value /= ALPHABET_LEN;
    }
    symbols.reverse();
    // Every symbol is ASCII.
    symbols.into_iter().map(char::from).collect()
}

/// Parse a base-28 numeral back into its payload.
///
/// Rejects empty input, symbols outside the alphabet, and numerals that do
/// not fit in 64 bits.
pub fn decode_short(code: &str) -> Result<u64> {
    if code.is_empty() {
        return Err(PlaceKeyError::InvalidFormat("empty code".into()));
    }
    code.bytes().try_fold(0u64, |acc, symbol| {
        let digit = symbol_value(symbol).ok_or_else(|| {
            PlaceKeyError::InvalidFormat(format!(
                "'{}' is not a code symbol in '{}'",
                symbol as char, code
            ))
        })?;
        acc.checked_mul(ALPHABET_LEN)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| PlaceKeyError::InvalidFormat(format!("code '{}' overflows", code)))
    })
}
