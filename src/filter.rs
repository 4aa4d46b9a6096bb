//! Profanity filter over raw codes.
//!
//! Each naughty substring maps to a replacement that differs in one
//! character, chosen from `e`/`u` so it can never collide with a real code
//! symbol. Substitutions are applied in table order in both directions.
//!
//! A code touched by a single substitution is restored exactly by [`dirty`].
//! Chained substitutions can lose information: `dykkk` cleans to `dyeke`,
//! and `dirty` turns that into `dykke`, which no longer decodes.

/// Ordered (naughty, replacement) table.
pub const SUBSTITUTIONS: [(&str, &str); 13] = [
    ("prn", "pre"),
    ("f4nny", "f4nne"),
    ("tw4t", "tw4e"),
    ("ngr", "ngu"), // 'u' avoids introducing 'gey'
    ("dck", "dce"),
    ("vjn", "vju"), // 'u' avoids introducing 'jew'
    ("fck", "fce"),
    ("pns", "pne"),
    ("sht", "she"),
    ("kkk", "kke"),
    ("fgt", "fgu"), // 'u' avoids introducing 'gey'
    ("dyk", "dye"),
    ("bch", "bce"),
];

/// Replace naughty substrings in a freshly encoded code.
pub fn clean(code: &str) -> String {
    substitute(code, SUBSTITUTIONS.iter().copied())
}

/// Reverse the substitutions of [`clean`] on a code read back from a
/// where-part.
///
/// Exact when `clean` applied at most one substitution; see the module docs
/// for the chained case.
pub fn dirty(code: &str) -> String {
    substitute(code, SUBSTITUTIONS.iter().map(|&(naughty, nice)| (nice, naughty)))
}

fn substitute<'a>(code: &str, pairs: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    let mut out = code.to_string();
    for (from, to) in pairs {
        if out.contains(from) {
            out = out.replace(from, to);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{ALPHABET, REPLACEMENT_CHARS};

    #[test]
    fn replacements_differ_by_one_character() {
        for (naughty, nice) in SUBSTITUTIONS {
            assert_eq!(naughty.len(), nice.len());
            let changed = naughty.bytes().zip(nice.bytes()).filter(|(a, b)| a != b).count();
            assert_eq!(changed, 1, "{} -> {}", naughty, nice);
        }
    }

    #[test]
    fn replacements_use_reserved_characters() {
        for (_, nice) in SUBSTITUTIONS {
            let last = nice.as_bytes()[nice.len() - 1];
            assert!(REPLACEMENT_CHARS.contains(&last), "{}", nice);
            assert!(!ALPHABET.contains(&last));
        }
    }

    #[test]
    fn clean_replaces_every_occurrence() {
        assert_eq!(clean("prn2prn"), "pre2pre");
        assert_eq!(clean("x2bchz"), "x2bcez");
        assert_eq!(clean("dvtsmptvz"), "dvtsmptvz");
    }

    #[test]
    fn dirty_restores() {
        assert_eq!(dirty("pre2pre"), "prn2prn");
        assert_eq!(dirty("x2bcez"), "x2bchz");
    }

    #[test]
    fn several_words_in_one_code() {
        let code = "shtkkkfgt";
        let cleaned = clean(code);
        assert_eq!(cleaned, "shekkefgu");
        assert_eq!(dirty(&cleaned), code);
    }

    #[test]
    fn overlapping_words_apply_in_table_order() {
        // "dckkk" holds both "dck" and "kkk"; "dck" is earlier in the table.
        let cleaned = clean("dckkk");
        assert_eq!(cleaned, "dcekk");
        assert_eq!(dirty(&cleaned), "dckkk");
    }

    #[test]
    fn chained_substitutions_are_lossy() {
        // "kkk" is cleaned first; "dyk" then rewrites the leading 'k' of its
        // replacement, so dirty no longer sees "kke".
        let cleaned = clean("dykkk");
        assert_eq!(cleaned, "dyeke");
        assert_eq!(dirty(&cleaned), "dykke");
    }
}
