//! Collecting the distinct values of each subgroup dimension, and ordering
//! them for declaration.
//!
//! Values are gathered in input order with [`ValueSet`], and ordered with one
//! of the comparison functions below before tags are assigned:
//!
//!  - timepoints by their number of hours, so `20hpi` precedes `100hpi`;
//!  - other text values case-insensitively.
//!
//! Ties (e.g. `10hpi` and `10HPI`) fall back to comparing the raw text, so the
//! order is total and runs on the same input are reproducible.

use indexmap::IndexSet;
use std::{cmp::Ordering, hash::Hash};

use crate::parsers::{FactorSource, SignalRecord, TfRecord};

/// The unique values seen for one subgroup dimension.
#[derive(Clone, Debug)]
pub struct ValueSet<K> {
    values: IndexSet<K>,
}

impl<K> Default for ValueSet<K> {
    fn default() -> Self {
        Self {
            values: IndexSet::new(),
        }
    }
}

impl<K: Hash + Eq + Clone> ValueSet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, returning `false` if it was already present.
    pub fn insert(&mut self, value: K) -> bool {
        self.values.insert(value)
    }

    pub fn contains(&self, value: &K) -> bool {
        self.values.contains(value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consume the set into a vector ordered by `compare`.
    pub fn into_sorted_by<F>(self, compare: F) -> Vec<K>
    where
        F: FnMut(&K, &K) -> Ordering,
    {
        let mut values: Vec<K> = self.values.into_iter().collect();
        values.sort_by(compare);
        values
    }
}

/// The digits of a timepoint, without leading zeros, e.g. `"10"` for `10hpi`.
fn timepoint_digits(timepoint: &str) -> &str {
    let start = timepoint
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(timepoint.len());
    let digits = &timepoint[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].trim_start_matches('0')
}

/// Order timepoints numerically by their embedded number of hours.
///
/// Numbers are compared as digit strings, so there is no overflow for very long
/// values.
pub fn compare_timepoints(a: &str, b: &str) -> Ordering {
    let (da, db) = (timepoint_digits(a), timepoint_digits(b));
    da.len()
        .cmp(&db.len())
        .then_with(|| da.cmp(db))
        .then_with(|| a.cmp(b))
}

/// Order text case-insensitively.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Order factor/source pairs by factor, then source, both case-insensitively.
pub fn compare_factor_sources(a: &FactorSource, b: &FactorSource) -> Ordering {
    compare_text(&a.factor, &b.factor).then_with(|| compare_text(&a.source, &b.source))
}

/// The subgroup dimensions of the signal composite.
#[derive(Clone, Debug, Default)]
pub struct SignalSubgroups {
    pub timepoints: ValueSet<String>,
    pub mark_sources: ValueSet<String>,
}

impl SignalSubgroups {
    pub fn add(&mut self, record: &SignalRecord) {
        self.timepoints.insert(record.timepoint.clone());
        self.mark_sources.insert(record.mark_source());
    }
}

/// The data-derived subgroup dimensions of the TF composite. Views are a fixed
/// enumeration, see [`ViewType::ALL`].
///
/// [`ViewType::ALL`]: crate::parsers::ViewType::ALL
#[derive(Clone, Debug, Default)]
pub struct TfSubgroups {
    pub timepoints: ValueSet<String>,
    pub factor_sources: ValueSet<FactorSource>,
}

impl TfSubgroups {
    pub fn add(&mut self, record: &TfRecord) {
        self.timepoints.insert(record.timepoint.clone());
        self.factor_sources.insert(record.factor_source());
    }
}
