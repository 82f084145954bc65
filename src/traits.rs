//! Traits used by the trackhubs library.
//!

use crate::{config::HubConfig, error::HubError, parsers::Category, trackdb::TrackBlock};

/// The [`ParseFilename`] trait defines how a data file's base name is turned
/// into a typed record for one track category.
pub trait ParseFilename: Sized {
    /// The category whose naming scheme this record parses.
    const CATEGORY: Category;

    /// Parse a base name (no directory components). Filenames that do not
    /// follow the category's naming scheme return an error for which
    /// [`HubError::is_skip()`] is true.
    fn parse_filename(filename: &str) -> Result<Self, HubError>;
}

/// The [`TsvSerialize`] trait defines how to convert a record to a line of
/// tab-separated values.
pub trait TsvSerialize {
    /// Column names, in the same order as the values of [`TsvSerialize::to_tsv()`].
    fn tsv_header() -> &'static [&'static str];
    fn to_tsv(&self) -> String;
}

/// The [`CompositeTrack`] trait connects a record type to the composite track
/// it is declared under.
///
/// Building a composite is a two-phase process: [`CompositeTrack::from_records()`]
/// consumes the complete record list and finalizes every subgroup tag table, and
/// only then are the parent and child stanzas rendered.
pub trait CompositeTrack: Sized {
    type Record: ParseFilename + TsvSerialize;

    /// Build the composite from all records of a category, in input order.
    /// `records` is never empty.
    fn from_records(records: Vec<Self::Record>) -> Self;

    /// The parent (composite) stanza, including any subgroup declarations.
    fn parent_block(&self, config: &HubConfig) -> TrackBlock;

    /// One stanza per record, in input order.
    fn child_blocks(&self, config: &HubConfig) -> Vec<TrackBlock>;
}
