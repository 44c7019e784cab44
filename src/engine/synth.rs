//! Final name assembly.

/// Components of a renamed node, in output order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NameParts<'a> {
    /// The `name` option when it is placed in front.
    pub prefix: &'a str,
    pub flag: &'a str,
    /// The `name` option when it is placed after the flag.
    pub suffix: &'a str,
    pub region: &'a str,
    pub retained: &'a [String],
    pub multiplier: Option<&'a str>,
    pub category: Option<&'a str>,
}

/// Join the non-empty components with `separator`.
///
/// Order is fixed: prefix, flag, suffix, region, retained keywords,
/// multiplier, category.
pub fn synthesize(parts: &NameParts<'_>, separator: &str) -> String {
    let NameParts { prefix, flag, suffix, region, retained, multiplier, category } = *parts;
    [prefix, flag, suffix, region]
        .into_iter()
        .chain(retained.iter().map(String::as_str))
        .chain(multiplier)
        .chain(category)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Name used when no region was found and fallback is enabled: the `name`
/// option, the separator, then the working name. The separator is kept even
/// when `label` is empty.
pub(crate) fn fallback(label: &str, name: &str, separator: &str) -> String {
    format!("{label}{separator}{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_non_empty_parts_in_order() {
        let retained = vec!["Tokyo".to_string(), String::new()];
        let parts = NameParts {
            prefix: "",
            flag: "🇯🇵",
            suffix: "Air",
            region: "日本",
            retained: &retained,
            multiplier: Some("2×"),
            category: Some("IEPL"),
        };
        assert_eq!(synthesize(&parts, " "), "🇯🇵 Air 日本 Tokyo 2× IEPL");
        assert_eq!(synthesize(&parts, "|"), "🇯🇵|Air|日本|Tokyo|2×|IEPL");
    }

    #[test]
    fn region_alone() {
        let parts = NameParts { region: "香港", ..NameParts::default() };
        assert_eq!(synthesize(&parts, " "), "香港");
        assert_eq!(synthesize(&NameParts::default(), " "), "");
    }

    #[test]
    fn fallback_always_writes_the_separator() {
        let cases = vec![
            (("Air", "Mars 01", " "), "Air Mars 01"),
            (("", "Mars 01", " "), " Mars 01"),
            (("", "Mars", "-"), "-Mars"),
            (("Air", "", "|"), "Air|"),
        ];
        for ((label, name, separator), expected) in cases {
            assert_eq!(fallback(label, name, separator), expected);
        }
    }
}
