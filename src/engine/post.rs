//! Whole-list passes, run after every record has been renamed.
//!
//! Order matters and is fixed by the renamer: numbering, then the optional
//! singleton collapse, then the optional resort, then the optional
//! overloaded-node filter.

use crate::ProxyRecord;
use crate::rules::patterns;
use indexmap::IndexMap;
use std::collections::HashMap;
use tracing::debug;

/// Append `separator` plus a two-digit, 1-based sequence number to every
/// record, counting per distinct name.
///
/// Groups are emitted in order of first appearance with each group's members
/// kept together in their original relative order.
pub fn number_duplicates(records: Vec<ProxyRecord>, separator: &str) -> Vec<ProxyRecord> {
    let mut groups: IndexMap<String, Vec<ProxyRecord>> = IndexMap::new();
    for record in records {
        groups.entry(record.name.clone()).or_default().push(record);
    }

    debug!(groups = groups.len(), "numbering duplicate names");
    groups
        .into_values()
        .flat_map(|members| {
            members.into_iter().enumerate().map(|(i, mut record)| {
                record.name = format!("{}{separator}{:02}", record.name, i + 1);
                record
            })
        })
        .collect()
}

/// Strip the `<separator>01` suffix from records that are alone under their
/// base name.
pub fn collapse_singletons(records: &mut [ProxyRecord], separator: &str) {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for record in records.iter() {
        *counts.entry(base_name(&record.name, separator).to_string()).or_default() += 1;
    }

    let suffix = format!("{separator}01");
    let mut collapsed = 0usize;
    for record in records.iter_mut() {
        if counts.get(base_name(&record.name, separator)) != Some(&1) {
            continue;
        }
        if let Some(stripped) = record.name.strip_suffix(suffix.as_str()) {
            record.name.truncate(stripped.len());
            collapsed += 1;
        }
    }
    debug!(collapsed, "collapsed singleton sequence numbers");
}

/// Name without its trailing sequence number.
fn base_name<'n>(name: &'n str, separator: &str) -> &'n str {
    let without_digits = name.trim_end_matches(|c: char| c.is_ascii_digit());
    without_digits.strip_suffix(separator).unwrap_or(without_digits)
}

/// Move "special" records (rate or line/tier tags) behind the normal ones.
///
/// Normal records keep their relative order. Special records are ordered by
/// the rank of the first special pattern they match, then case-insensitively
/// by name.
pub fn resort_by_category(records: Vec<ProxyRecord>) -> Vec<ProxyRecord> {
    let ranks = patterns::special_ranks();
    let (normal, mut special): (Vec<_>, Vec<_>) = records
        .into_iter()
        .map(|record| (ranks.iter().position(|re| re.is_match(&record.name)), record))
        .partition(|(rank, _)| rank.is_none());

    special.sort_by(|(a_rank, a), (b_rank, b)| {
        a_rank
            .cmp(b_rank)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.name.cmp(&b.name))
    });

    debug!(normal = normal.len(), special = special.len(), "resorted by category");
    normal.into_iter().chain(special).map(|(_, record)| record).collect()
}

/// Remove records whose final name looks like an overloaded or legacy node.
pub fn drop_overloaded(records: &mut Vec<ProxyRecord>) {
    let before = records.len();
    records.retain(|record| !patterns::overloaded().is_match(&record.name));
    debug!(dropped = before - records.len(), "dropped overloaded nodes");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(names: &[&str]) -> Vec<ProxyRecord> {
        names.iter().map(|name| ProxyRecord::new(*name)).collect()
    }

    fn names(records: &[ProxyRecord]) -> Vec<&str> {
        records.iter().map(|record| record.name.as_str()).collect()
    }

    #[test]
    fn duplicates_are_numbered_per_name() {
        let out = number_duplicates(records(&["X", "X", "X"]), "·");
        assert_eq!(names(&out), vec!["X·01", "X·02", "X·03"]);
    }

    #[test]
    fn numbering_groups_by_first_appearance() {
        let input = vec![
            ProxyRecord::new("香港").with_field("server", "a"),
            ProxyRecord::new("日本").with_field("server", "b"),
            ProxyRecord::new("香港").with_field("server", "c"),
        ];
        let out = number_duplicates(input, " ");
        assert_eq!(names(&out), vec!["香港 01", "香港 02", "日本 01"]);
        let servers: Vec<_> = out.iter().map(|r| r.field("server").and_then(|v| v.as_str()).unwrap()).collect();
        assert_eq!(servers, vec!["a", "c", "b"]);
    }

    #[test]
    fn only_lone_records_are_collapsed() {
        let mut out = number_duplicates(records(&["X", "Y", "X"]), " ");
        collapse_singletons(&mut out, " ");
        assert_eq!(names(&out), vec!["X 01", "X 02", "Y"]);
    }

    #[test]
    fn collapse_respects_the_separator() {
        let mut out = number_duplicates(records(&["香港 IEPL"]), "-");
        collapse_singletons(&mut out, "-");
        assert_eq!(names(&out), vec!["香港 IEPL"]);

        // A different separator leaves the suffix alone.
        let mut out = records(&["香港 IEPL-01"]);
        collapse_singletons(&mut out, " ");
        assert_eq!(names(&out), vec!["香港 IEPL-01"]);
    }

    #[test]
    fn special_records_move_behind_normal_ones() {
        let input = records(&["香港 01", "日本 2× 01", "美国 01", "新加坡 2× 01"]);
        let out = resort_by_category(input);
        assert_eq!(names(&out), vec!["香港 01", "美国 01", "新加坡 2× 01", "日本 2× 01"]);
    }

    #[test]
    fn resort_orders_by_rank_then_name() {
        let input = records(&["b IEPL", "Z 2×", "a IEPL", "plain", "a 3×"]);
        let out = resort_by_category(input);
        assert_eq!(names(&out), vec!["plain", "a 3×", "Z 2×", "a IEPL", "b IEPL"]);
    }

    #[test]
    fn overloaded_heuristic() {
        let mut out = records(&["香港 02", "香港 07", "日本 02", "日本 04", "美国 15", "德国 05"]);
        drop_overloaded(&mut out);
        assert_eq!(names(&out), vec!["香港 02", "日本 02", "德国 05"]);
    }
}
