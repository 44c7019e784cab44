//! Boundary-safe key matching.
//!
//! A region key is "present" in a name according to the run's
//! [`BoundaryMode`]:
//!
//! ```text
//! Off ─▶ literal substring, case-sensitive
//! En  ─┬▶ two-letter code: case-insensitive, flanked by non-letters
//!      └▶ anything else: literal substring
//! All ─┬▶ ASCII word key: flanked by non-alphanumerics
//!      └▶ other keys: flanked by neither CJK ideographs nor ASCII alphanumerics
//! ```
//!
//! The decision depends only on the key and the mode, so the index compiles
//! one [`KeyMatcher`] per key up front instead of per record.

use crate::BoundaryMode;
use crate::rules::regions::CODE;
use regex::Regex;
use tracing::warn;

/// A compiled presence test for one key.
#[derive(Debug, Clone)]
pub enum KeyMatcher {
    /// Plain substring test.
    Substring(String),
    /// Case-insensitive test with flank checks.
    Bounded(Regex),
}

impl KeyMatcher {
    /// Compile the matcher for `key`. `is_code` marks keys of the two-letter
    /// code vocabulary, which `BoundaryMode::En` checks strictly.
    pub fn compile(key: &str, mode: BoundaryMode, is_code: bool) -> Self {
        let escaped = regex::escape(key);
        let pattern = match mode {
            BoundaryMode::Off => None,
            BoundaryMode::En if is_code => Some(format!("(?i)(?:^|[^A-Za-z]){escaped}(?:[^A-Za-z]|$)")),
            BoundaryMode::En => None,
            BoundaryMode::All if is_ascii_word(key) => {
                Some(format!("(?i)(?:^|[^A-Za-z0-9]){escaped}(?:[^A-Za-z0-9]|$)"))
            }
            BoundaryMode::All => Some(format!(
                r"(?i)(?:^|[^\x{{4e00}}-\x{{9fff}}A-Za-z0-9]){escaped}(?:[^\x{{4e00}}-\x{{9fff}}A-Za-z0-9]|$)"
            )),
        };

        let Some(pattern) = pattern else {
            return KeyMatcher::Substring(key.to_string());
        };
        match Regex::new(&pattern) {
            Ok(re) => KeyMatcher::Bounded(re),
            Err(err) => {
                warn!(key, %err, "boundary pattern failed to compile, falling back to substring match");
                KeyMatcher::Substring(key.to_string())
            }
        }
    }

    pub fn is_match(&self, name: &str) -> bool {
        match self {
            KeyMatcher::Substring(key) => name.contains(key.as_str()),
            KeyMatcher::Bounded(re) => re.is_match(name),
        }
    }
}

/// One-off presence test of `key` in `name`, using the built-in code
/// vocabulary to decide which keys count as codes.
///
/// Blank keys never match.
pub fn matches(name: &str, key: &str, mode: BoundaryMode) -> bool {
    if key.trim().is_empty() {
        return false;
    }
    KeyMatcher::compile(key, mode, CODE.contains(&key)).is_match(name)
}

fn is_ascii_word(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn codes_inside_longer_words_need_substring_mode() {
        assert!(!matches("USA node", "US", BoundaryMode::En));
        assert!(!matches("USA node", "US", BoundaryMode::All));
        assert!(matches("USA node", "US", BoundaryMode::Off));
    }

    #[test]
    fn en_mode_accepts_codes_between_separators() {
        let cases = vec![
            ("HK01", true),
            ("hk-01", true),
            ("[HK] IEPL", true),
            ("🇭🇰HK", true),
            ("SHK 01", false),
            ("HKT", false),
        ];
        for (name, expected) in cases {
            assert_eq!(matches(name, "HK", BoundaryMode::En), expected, "HK in {name:?}");
        }
    }

    #[test]
    fn en_mode_leaves_full_names_as_substrings() {
        assert!(matches("HongKong香港01", "香港", BoundaryMode::En));
        assert!(matches("xJapanx", "Japan", BoundaryMode::En));
        assert!(!matches("japan", "Japan", BoundaryMode::En));
    }

    #[test]
    fn all_mode_checks_every_key() {
        assert!(!matches("xJapanx", "Japan", BoundaryMode::All));
        assert!(matches("japan 01", "Japan", BoundaryMode::All));
        assert!(matches("[香港]01", "香港", BoundaryMode::All));
        assert!(!matches("深香港", "香港", BoundaryMode::All));
        assert!(matches("United States-01", "United States", BoundaryMode::All));
    }

    #[test]
    fn off_mode_is_case_sensitive() {
        assert!(!matches("hk01", "HK", BoundaryMode::Off));
        assert!(matches("HK01", "HK", BoundaryMode::Off));
    }

    #[test]
    fn blank_keys_never_match() {
        for mode in [BoundaryMode::Off, BoundaryMode::En, BoundaryMode::All] {
            assert!(!matches("anything", "", mode));
            assert!(!matches("", "", mode));
            assert!(!matches("a b", " ", mode));
        }
    }

    proptest! {
        #[test]
        fn codes_never_match_inside_letter_runs(
            before in "[A-Za-z]{1,4}",
            after in "[A-Za-z]{0,4}",
            code in prop::sample::select(CODE.to_vec()),
        ) {
            // At least three letters: every occurrence has a letter on one side.
            let name = format!("{before}{code}{after}");
            prop_assert!(!matches(&name, code, BoundaryMode::En));
            prop_assert!(!matches(&name, code, BoundaryMode::All));
        }

        #[test]
        fn empty_name_matches_nothing(code in prop::sample::select(CODE.to_vec())) {
            for mode in [BoundaryMode::Off, BoundaryMode::En, BoundaryMode::All] {
                prop_assert!(!matches("", code, mode));
            }
        }
    }
}
