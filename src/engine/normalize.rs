//! Name normalization.
//!
//! Every rewrite is tried in declaration order against the evolving name and
//! replaces all of its occurrences. There is no first-match-wins: any number
//! of rewrites may fire on one name. After the table, a hard lock turns
//! `<mainland city>港` into `香港` no matter what the table did.

use crate::Rewrite;
use regex::Captures;
use tracing::trace;

impl Rewrite {
    /// Replace every occurrence of the pattern in `text`.
    ///
    /// Returns `None` when nothing was replaced, including when the guard
    /// kept every occurrence.
    pub fn apply(&self, text: &str) -> Option<String> {
        if !self.pattern.is_match(text) {
            return None;
        }

        let mut replaced = false;
        let out = self.pattern.replace_all(text, |caps: &Captures<'_>| match (caps.get(0), self.keep) {
            (Some(m), Some(keep)) if keep(text, &m) => m.as_str().to_string(),
            _ => {
                replaced = true;
                self.canonical.to_string()
            }
        });

        replaced.then(|| out.into_owned())
    }
}

/// Normalize `name` with `rules`, then apply the Hong Kong hard lock.
pub fn normalize(name: &str, rules: &[Rewrite]) -> String {
    normalize_with(name, rules, |_, _| {})
}

/// Like [`normalize`], calling `on_rewrite` after each rewrite that fired.
/// The callback may append to the working name; later rewrites see it.
pub(crate) fn normalize_with(
    name: &str,
    rules: &[Rewrite],
    mut on_rewrite: impl FnMut(&Rewrite, &mut String),
) -> String {
    let mut current = name.to_string();
    for rule in rules {
        if let Some(mut next) = rule.apply(&current) {
            trace!(from = %current, to = %next, canonical = rule.canonical, "rewrite fired");
            on_rewrite(rule, &mut next);
            current = next;
        }
    }
    hard_lock(&current)
}

fn hard_lock(name: &str) -> String {
    regex!(r"(深|沪|呼|京|广|杭)港").replace_all(name, "香港").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::rewrites;

    fn run(name: &str) -> String {
        normalize(name, &rewrites::get())
    }

    #[test]
    fn rewrite_examples() {
        let cases = vec![
            ("UK London 01", "GB United Kingdom London 01"),
            ("HK IEPL", "HK I-E-P-L"),
            ("HK iplc", "HK I-P-L-C"),
            ("HONGKONG 02", "Hong Kong 02"),
            ("Tokyo 03", "Japan 03"),
            ("狮城 01", "新加坡 01"),
            ("沪日 IPLC", "日本 I-P-L-C"),
            ("USA Seattle", "United States Seattle"),
            ("剩余 100GB", "剩余 10G"),
            ("HK BGP", "HK B-G-P"),
        ];
        for (input, expected) in cases {
            assert_eq!(run(input), expected, "normalizing {input:?}");
        }
    }

    #[test]
    fn mainland_entry_prefix_is_locked_to_hong_kong() {
        assert_eq!(run("深港 IEPL 01"), "香港 I-E-P-L 01");
        assert_eq!(run("广港02"), "香港02");
        // Applies even with an empty rule table.
        assert_eq!(normalize("杭港 01", &[]), "香港 01");
    }

    #[test]
    fn bare_tai_before_line_marker_is_kept() {
        let rule = rewrites::get().into_iter().find(|r| r.canonical == "台湾").unwrap();
        assert_eq!(rule.apply("台北"), Some("台湾北".to_string()));
        assert_eq!(rule.apply("新北 台线"), Some("台湾 台线".to_string()));
        assert_eq!(rule.apply("台线"), None);
    }

    #[test]
    fn later_rules_see_earlier_output() {
        // UK -> GB, then the quota rule reads "1GB" as traffic.
        assert_eq!(run("1UK"), "G");

        let mut seen = Vec::new();
        let out = normalize_with("Moscow 首尔", &rewrites::get(), |rule, _| seen.push(rule.canonical));
        assert_eq!(out, "Russia Moscow 韩国");
        assert_eq!(seen, vec!["Russia Moscow", "韩国"]);
    }

    #[test]
    fn callback_appends_are_visible_downstream() {
        let out = normalize_with("Moscow", &rewrites::get(), |rule, name| {
            if rule.canonical == "Russia Moscow" {
                name.push_str(" 深港");
            }
        });
        assert_eq!(out, "Russia Moscow 香港");
    }
}
