//! # trackhubs
//!
//! Generate [UCSC track hub](https://genome.ucsc.edu/goldenPath/help/hgTrackHubHelp.html)
//! `trackDb` stanzas from plain lists of data files.
//!
//! Experiment metadata (timepoint, mark or factor, source lab, view) is
//! recovered from each file's name, and files are grouped into composite
//! tracks with subgroups, so that the browser can present them as a matrix.
//!
//! ```no_run
//! use std::path::Path;
//! use trackhubs::prelude::*;
//!
//! let mut trackdb = TrackDb::new();
//! let mut report = Report::new();
//! generate_category::<SignalComposite>(
//!     Path::new("lists/signal.txt"),
//!     &HubConfig::default(),
//!     &mut trackdb,
//!     &mut report,
//! );
//! for line in trackdb.lines() {
//!     println!("{}", line);
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod io;
pub mod parsers;
pub mod reporting;
pub mod style;
pub mod subgroups;
pub mod tags;
pub mod test_utilities;
pub mod trackdb;
pub mod tracks;
pub mod traits;

pub mod prelude {
    pub use crate::config::HubConfig;
    pub use crate::error::HubError;
    pub use crate::parsers::{Category, ChromStateRecord, SignalRecord, TfRecord, ViewType};
    pub use crate::reporting::Report;
    pub use crate::trackdb::{TrackBlock, TrackDb};
    pub use crate::tracks::{
        generate_category, ChromStateComposite, SignalComposite, TfComposite,
    };
    pub use crate::traits::{CompositeTrack, ParseFilename, TsvSerialize};
}
