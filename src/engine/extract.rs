//! Secondary signals pulled out of a (normalized) name.
//!
//! - Multiplier tag: a rate such as `2x`, `倍率 0.5` or `3倍`, rendered as `2×`.
//! - Category tag: a fixed label from the category table; the last matching
//!   entry wins.
//! - Retained keywords: user-declared words (or `trigger>replacement` pairs)
//!   that survive into the final name.

use crate::{Category, Rewrite};
use tracing::trace;

/// Rate multiplier found in `name`, as `<value>×`. A rate of exactly `1` is
/// not worth showing and yields `None`.
pub fn multiplier_tag(name: &str) -> Option<String> {
    let found = regex!(r"((倍率|X|x|×)[^0-9]?(([0-9]{1,3}\.)?[0-9]+)[^0-9]?)|(([0-9]{1,3}\.)?[0-9]+)(倍|X|x|×)")
        .find(name)?;
    let value = regex!(r"[0-9][0-9.]*").find(found.as_str())?.as_str();
    (value != "1").then(|| format!("{value}×"))
}

/// Label of the last category whose pattern matches `name`.
pub fn category_tag(name: &str, categories: &[Category]) -> Option<&'static str> {
    categories.iter().rev().find(|category| category.pattern.is_match(name)).map(|category| category.label)
}

/// One entry of the `+`-separated retain list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetainKeyword {
    /// Kept verbatim when present.
    Literal(String),
    /// `trigger>replacement`: when `trigger` is present, `replacement` is
    /// emitted instead of the keyword list.
    Substitute { raw: String, trigger: String, replacement: String },
}

impl RetainKeyword {
    fn parse(raw: &str) -> Self {
        if !raw.contains('>') {
            return RetainKeyword::Literal(raw.to_string());
        }
        let mut parts = raw.split('>');
        let trigger = parts.next().unwrap_or_default().to_string();
        let replacement = parts.next().unwrap_or_default().to_string();
        RetainKeyword::Substitute { raw: raw.to_string(), trigger, replacement }
    }

    /// The keyword exactly as configured.
    pub fn raw(&self) -> &str {
        match self {
            RetainKeyword::Literal(raw) | RetainKeyword::Substitute { raw, .. } => raw,
        }
    }
}

/// The configured retain list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetainKeywords(Vec<RetainKeyword>);

impl RetainKeywords {
    /// Parse a `+`-separated list such as `"IPLC+游戏>Game"`. Empty segments
    /// are skipped.
    pub fn parse(raw: &str) -> Self {
        Self(raw.split('+').filter(|segment| !segment.is_empty()).map(RetainKeyword::parse).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RetainKeyword> {
        self.0.iter()
    }
}

/// Per-record retain state.
///
/// There are two paths, chosen by whether any rewrite fired on the record:
///
/// ```text
/// rewrite fired ─▶ on_rewrite: triggers tested against the ORIGINAL name,
///                  matching keywords appended to the working name
/// nothing fired ─▶ finish: substitutions tested against the CURRENT name
/// ```
///
/// Either way `finish` returns the replacement of the last matching
/// substitution, or else every configured keyword present in the final
/// working name.
#[derive(Debug)]
pub(crate) struct RetainScan<'k> {
    keywords: &'k RetainKeywords,
    fired: bool,
    appended: Vec<&'k str>,
    replacement: Option<&'k str>,
}

impl<'k> RetainScan<'k> {
    pub(crate) fn new(keywords: &'k RetainKeywords) -> Self {
        Self { keywords, fired: false, appended: Vec::new(), replacement: None }
    }

    /// Record that `rewrite` just fired, producing `name`.
    pub(crate) fn on_rewrite(&mut self, rewrite: &Rewrite, original: &str, name: &mut String) {
        if self.keywords.is_empty() {
            return;
        }
        self.fired = true;

        let keywords = self.keywords;
        for keyword in keywords.iter() {
            match keyword {
                RetainKeyword::Substitute { trigger, replacement, .. } if original.contains(trigger.as_str()) => {
                    if rewrite.pattern.is_match(trigger) {
                        self.append(name, trigger);
                    }
                    if !replacement.is_empty() {
                        self.replacement = Some(replacement.as_str());
                    }
                }
                RetainKeyword::Literal(word) if original.contains(word.as_str()) => self.append(name, word),
                _ => {}
            }
        }
    }

    fn append(&mut self, name: &mut String, text: &'k str) {
        if self.appended.contains(&text) {
            return;
        }
        trace!(keyword = text, "appending retained keyword to working name");
        name.push(' ');
        name.push_str(text);
        self.appended.push(text);
    }

    /// Resolve the retained components against the final working name.
    pub(crate) fn finish(mut self, name: &str) -> Vec<String> {
        let keywords = self.keywords;
        if !self.fired {
            for keyword in keywords.iter() {
                match keyword {
                    RetainKeyword::Substitute { trigger, replacement, .. }
                        if name.contains(trigger.as_str()) && !replacement.is_empty() =>
                    {
                        self.replacement = Some(replacement.as_str());
                    }
                    _ => {}
                }
            }
        }

        match self.replacement {
            Some(replacement) => vec![replacement.to_string()],
            None => keywords
                .iter()
                .map(RetainKeyword::raw)
                .filter(|raw| name.contains(raw))
                .map(str::to_string)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{patterns, rewrites};

    #[test]
    fn multiplier_examples() {
        let cases: Vec<(&str, Option<&str>)> = vec![
            ("HK01 IEPL 2×", Some("2×")),
            ("香港 x2", Some("2×")),
            ("日本 0.5x", Some("0.5×")),
            ("美国 倍率:3", Some("3×")),
            ("新加坡 10倍", Some("10×")),
            ("台湾 1x", None),
            ("香港 01", None),
        ];
        for (name, expected) in cases {
            assert_eq!(multiplier_tag(name).as_deref(), expected, "multiplier of {name:?}");
        }
    }

    #[test]
    fn last_matching_category_wins() {
        let categories = patterns::categories();
        assert_eq!(category_tag("香港 专线 I-E-P-L", &categories), Some("IEPL"));
        assert_eq!(category_tag("香港 家宽 游戏", &categories), Some("Game"));
        assert_eq!(category_tag("香港 ˣ²⁰", &categories), Some("20×"));
        assert_eq!(category_tag("香港 01", &categories), None);
    }

    #[test]
    fn retain_list_parsing() {
        let keywords = RetainKeywords::parse("IPLC++游戏>Game+x>");
        let parsed: Vec<_> = keywords.iter().cloned().collect();
        assert_eq!(
            parsed,
            vec![
                RetainKeyword::Literal("IPLC".into()),
                RetainKeyword::Substitute {
                    raw: "游戏>Game".into(),
                    trigger: "游戏".into(),
                    replacement: "Game".into(),
                },
                RetainKeyword::Substitute { raw: "x>".into(), trigger: "x".into(), replacement: String::new() },
            ]
        );
        assert!(RetainKeywords::parse("").is_empty());
    }

    fn scan(raw_keywords: &str, original: &str) -> (String, Vec<String>) {
        let keywords = RetainKeywords::parse(raw_keywords);
        let rules = rewrites::get();
        let mut retain = RetainScan::new(&keywords);
        let name = crate::engine::normalize::normalize_with(original, &rules, |rule, name| {
            retain.on_rewrite(rule, original, name)
        });
        let retained = retain.finish(&name);
        (name, retained)
    }

    #[test]
    fn literal_keywords_are_appended_when_a_rewrite_fires() {
        // "Tokyo" fires the Japan rewrite; "Tokyo" itself is rewritten away,
        // but the keyword is appended back onto the working name.
        let (name, retained) = scan("Tokyo", "Tokyo 01");
        assert_eq!(name, "Japan 01 Tokyo");
        assert_eq!(retained, vec!["Tokyo"]);
    }

    #[test]
    fn substitution_replaces_the_keyword_list() {
        let (_, retained) = scan("家宽>Home+Tokyo", "Tokyo 家宽");
        assert_eq!(retained, vec!["Home"]);
    }

    #[test]
    fn without_rewrites_keywords_are_read_from_the_current_name() {
        let (name, retained) = scan("Premium+Lite", "HK Premium 01");
        assert_eq!(name, "HK Premium 01");
        assert_eq!(retained, vec!["Premium"]);

        let (_, retained) = scan("Premium>高级", "HK Premium 01");
        assert_eq!(retained, vec!["高级"]);
    }

    #[test]
    fn no_keywords_means_nothing_retained() {
        let (name, retained) = scan("", "Tokyo 01");
        assert_eq!(name, "Japan 01");
        assert!(retained.is_empty());
    }
}
