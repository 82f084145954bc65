//! Composite track generation for each category.
//!
//! [`generate_category()`] drives one category from its list file to trackDb
//! stanzas:
//!
//!  1. *collect*: every list line is parsed into a record. Lines that do not
//!     follow the category's naming scheme are reported and skipped.
//!  2. *tag*: [`CompositeTrack::from_records()`] builds the subgroup tag tables
//!     from the complete record list.
//!  3. *render*: the parent stanza, then one child stanza per record in input
//!     order.
//!
//! A missing list file, a read error, or a category with no valid records ends
//! that category after a single comment line; no other category is affected.

pub mod chrom_state;
pub mod signal;
pub mod tf;

pub use chrom_state::ChromStateComposite;
pub use signal::SignalComposite;
pub use tf::TfComposite;

use std::io;
use std::path::Path;

use crate::{
    config::HubConfig,
    error::HubError,
    io::InputFile,
    reporting::Report,
    trackdb::TrackDb,
    traits::{CompositeTrack, ParseFilename},
};

/// Parse every line of a file list into records of type `R`.
///
/// Skipped lines are added to `trackdb` as warning comments as they are
/// encountered, and to `report`. Errors that end the category are returned.
pub fn collect_records<R: ParseFilename>(
    list: &Path,
    trackdb: &mut TrackDb,
    report: &mut Report,
) -> Result<Vec<R>, HubError> {
    let category = R::CATEGORY;
    let base_names = InputFile::new(list).base_names().map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            HubError::ListFileNotFound(category, list.to_path_buf())
        } else {
            HubError::IOError(e)
        }
    })?;

    let mut records = Vec::new();
    for result in base_names {
        let filename = result?;
        match R::parse_filename(&filename) {
            Ok(record) => {
                log::debug!("parsed {} file {}", category, filename);
                records.push(record);
            }
            Err(e) if e.is_skip() => {
                log::debug!("skipping {}: {}", filename, e);
                trackdb.comment(e.to_comment());
                report.add_issue(&e);
            }
            Err(e) => return Err(e),
        }
    }

    if records.is_empty() {
        return Err(HubError::EmptyCategory(category, list.to_path_buf()));
    }
    Ok(records)
}

/// Generate the banner, parent stanza and child stanzas of one category.
///
/// Never fails: any error is reported as a comment in `trackdb` and recorded in
/// `report`, and output for the category stops there.
pub fn generate_category<C: CompositeTrack>(
    list: &Path,
    config: &HubConfig,
    trackdb: &mut TrackDb,
    report: &mut Report,
) {
    let category = <C::Record as ParseFilename>::CATEGORY;
    trackdb.comment(category.banner());

    let records = match collect_records::<C::Record>(list, trackdb, report) {
        Ok(records) => records,
        Err(e) => {
            log::warn!("no {} stanzas generated: {}", category, e);
            trackdb.comment(e.to_comment());
            report.add_issue(&e);
            return;
        }
    };
    let num_records = records.len();

    let composite = C::from_records(records);
    trackdb.push_block(&composite.parent_block(config));
    for block in composite.child_blocks(config) {
        trackdb.push_block(&block);
    }
    log::info!(
        "generated {} {} stanzas from {}",
        num_records,
        category,
        list.display()
    );
}
