//! Short alphanumeric tags standing in for subgroup values.
//!
//! trackDb subgroup declarations take the form `tag=value`, and each child
//! track refers to its subgroup values by tag. Tags are derived from the value
//! itself (see the `*_tag()` functions), which can map two distinct values to
//! the same tag, e.g. `H3K4me3_Lab-1` and `H3K4me3_Lab1` both clean to
//! `msH3K4me3Lab1`. A [`TagTable`] detects this and appends `v2`, `v3`, ... to
//! later values until the tag is unique within the table.

use indexmap::IndexMap;
use std::{collections::HashSet, hash::Hash};

use crate::parsers::FactorSource;

/// Maximum number of characters of the factor name in a factor/source tag.
pub const FACTOR_TAG_LEN: usize = 10;
/// Maximum number of characters of the source in a factor/source tag.
pub const SOURCE_TAG_LEN: usize = 5;

/// Remove every character that is not an ASCII letter or digit.
pub fn alphanumeric(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

/// The first `len` characters of `value`.
pub fn truncate(value: &str, len: usize) -> String {
    value.chars().take(len).collect()
}

/// `t` and the hours of a timepoint, e.g. `t10` for `10hpi`.
pub fn timepoint_tag(timepoint: &str) -> String {
    let len = timepoint.len();
    let hours = if len >= 3 && timepoint.is_char_boundary(len - 3)
        && timepoint[len - 3..].eq_ignore_ascii_case("hpi")
    {
        &timepoint[..len - 3]
    } else {
        timepoint
    };
    format!("t{}", alphanumeric(hours))
}

/// `ms` and the alphanumeric characters of a mark/source value.
pub fn mark_source_tag(mark_source: &str) -> String {
    format!("ms{}", alphanumeric(mark_source))
}

/// `fs`, then the factor and source with non-alphanumeric characters removed,
/// truncated to [`FACTOR_TAG_LEN`] and [`SOURCE_TAG_LEN`] characters.
pub fn factor_source_tag(factor_source: &FactorSource) -> String {
    format!(
        "fs{}{}",
        truncate(&alphanumeric(&factor_source.factor), FACTOR_TAG_LEN),
        truncate(&alphanumeric(&factor_source.source), SOURCE_TAG_LEN)
    )
}

/// An ordered, injective mapping from subgroup values to tags.
#[derive(Clone, Debug)]
pub struct TagTable<K> {
    tags: IndexMap<K, String>,
}

impl<K: Hash + Eq> TagTable<K> {
    /// Assign tags to `values` in the given order. Duplicate values are ignored.
    pub fn new<F>(values: Vec<K>, tag_fn: F) -> Self
    where
        F: Fn(&K) -> String,
    {
        let mut tags = IndexMap::new();
        let mut taken = HashSet::new();
        for value in values {
            if tags.contains_key(&value) {
                continue;
            }
            let base = tag_fn(&value);
            let mut tag = base.clone();
            let mut suffix = 2;
            while taken.contains(&tag) {
                tag = format!("{}v{}", base, suffix);
                suffix += 1;
            }
            taken.insert(tag.clone());
            tags.insert(value, tag);
        }
        Self { tags }
    }

    /// The tag of `value`.
    ///
    /// # Panics
    /// If `value` was not one of the values the table was built from.
    pub fn tag(&self, value: &K) -> &str {
        &self.tags[value]
    }

    pub fn get(&self, value: &K) -> Option<&str> {
        self.tags.get(value).map(|tag| tag.as_str())
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterate over `(value, tag)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &str)> {
        self.tags.iter().map(|(value, tag)| (value, tag.as_str()))
    }

    /// The space-separated `tag=value` list of a subgroup declaration.
    pub fn declaration<F>(&self, display: F) -> String
    where
        F: Fn(&K) -> String,
    {
        self.iter()
            .map(|(value, tag)| format!("{}={}", tag, display(value)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
