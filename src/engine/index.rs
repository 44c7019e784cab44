//! Region vocabularies and the lookup index built from them.
//!
//! ## Invariants
//!
//! - All four vocabularies of a [`RegionTables`] have the same length; index
//!   `i` names the same region in each of them.
//! - Blank entries are valid table cells but never become lookup keys (an
//!   empty key would match every name).
//! - Index iteration order is insertion order: vocabularies in input-mode
//!   order, then table position. When a later vocabulary repeats a key, its
//!   label replaces the earlier one but the key keeps its original position.

use super::matcher::KeyMatcher;
use crate::rules::regions::{CODE, ENGLISH, FLAG, NATIVE};
use crate::{BoundaryMode, InputMode, Vocabulary};
use indexmap::IndexMap;
use indexmap::map::Entry;
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("{vocabulary} vocabulary has {found} entries, expected {expected}")]
    LengthMismatch { vocabulary: Vocabulary, expected: usize, found: usize },
}

/// Four parallel region vocabularies.
#[derive(Debug, Clone, Copy)]
pub struct RegionTables<'a> {
    native: &'a [&'a str],
    english: &'a [&'a str],
    code: &'a [&'a str],
    flag: &'a [&'a str],
}

impl<'a> RegionTables<'a> {
    /// Bundle externally supplied vocabularies, checking that they line up.
    pub fn new(
        native: &'a [&'a str],
        english: &'a [&'a str],
        code: &'a [&'a str],
        flag: &'a [&'a str],
    ) -> Result<Self, TableError> {
        let expected = native.len();
        for (vocabulary, table) in
            [(Vocabulary::English, english), (Vocabulary::Code, code), (Vocabulary::Flag, flag)]
        {
            if table.len() != expected {
                return Err(TableError::LengthMismatch { vocabulary, expected, found: table.len() });
            }
        }
        Ok(Self { native, english, code, flag })
    }

    pub fn get(&self, vocabulary: Vocabulary) -> &'a [&'a str] {
        match vocabulary {
            Vocabulary::Native => self.native,
            Vocabulary::English => self.english,
            Vocabulary::Code => self.code,
            Vocabulary::Flag => self.flag,
        }
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.native.len()
    }

    pub fn is_empty(&self) -> bool {
        self.native.is_empty()
    }
}

impl RegionTables<'static> {
    /// The tables shipped with the crate (`src/rules/regions.rs`).
    pub fn builtin() -> Self {
        Self { native: &NATIVE, english: &ENGLISH, code: &CODE, flag: &FLAG }
    }
}

/// A region found in a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detected<'a> {
    /// The key that matched.
    pub key: &'a str,
    /// The output-vocabulary label for that region.
    pub label: &'a str,
}

#[derive(Debug)]
struct IndexEntry<'a> {
    label: &'a str,
    matcher: KeyMatcher,
}

/// Ordered key → label mapping, built once per run.
#[derive(Debug)]
pub struct LookupIndex<'a> {
    entries: IndexMap<&'a str, IndexEntry<'a>>,
    output: &'a [&'a str],
    flags: &'a [&'a str],
}

impl<'a> LookupIndex<'a> {
    pub fn build(tables: &RegionTables<'a>, input: InputMode, output: Vocabulary, boundary: BoundaryMode) -> Self {
        let codes: HashSet<&str> = tables.code.iter().copied().collect();
        let labels = tables.get(output);
        let mut entries: IndexMap<&'a str, IndexEntry<'a>> = IndexMap::new();

        for vocabulary in input.vocabularies() {
            for (position, key) in tables.get(*vocabulary).iter().enumerate() {
                if key.trim().is_empty() {
                    continue;
                }
                let label = labels.get(position).copied().unwrap_or("");
                match entries.entry(*key) {
                    Entry::Occupied(mut slot) => slot.get_mut().label = label,
                    Entry::Vacant(slot) => {
                        let matcher = KeyMatcher::compile(key, boundary, codes.contains(key));
                        slot.insert(IndexEntry { label, matcher });
                    }
                }
            }
        }

        debug!(keys = entries.len(), ?input, %output, ?boundary, "built region lookup index");
        Self { entries, output: labels, flags: tables.flag }
    }

    /// First key, in index order, present in `name`.
    ///
    /// A first match whose output label is blank counts as no match.
    pub fn find(&self, name: &str) -> Option<Detected<'a>> {
        let (key, entry) = self.entries.iter().find(|(_, entry)| entry.matcher.is_match(name))?;
        if entry.label.is_empty() {
            return None;
        }
        Some(Detected { key: *key, label: entry.label })
    }

    /// Flag glyph at the position of `label` in the output vocabulary; empty
    /// when the label or the glyph is missing.
    pub fn flag_for(&self, label: &str) -> &'a str {
        self.output.iter().position(|l| *l == label).and_then(|pos| self.flags.get(pos)).copied().unwrap_or("")
    }

    /// Keys in match-priority order.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
