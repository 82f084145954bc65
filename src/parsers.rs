//! Filename parsers for the three track categories.
//!
//! Every category has its own naming scheme, and all of them embed a timepoint
//! token of the form `<hours>hpi` (hours post-infection). Matching is
//! case-insensitive and anchored to the whole base name, except for chromatin
//! states where only a leading timepoint is required.
//!
//! | Category         | Scheme                                        |
//! |------------------|-----------------------------------------------|
//! | chromatin states | `<tp>...`, e.g. `10hpi_chrom-states.bb`        |
//! | signal           | `<mark>_<tp>_<source>_<source id>.bw`         |
//! | TF               | `<tf>_<tp>_<source>_<source id>.bw`, or with `.narrowPeak.bb` |
//!
//! Filenames that do not follow their scheme are reported with an error for
//! which [`HubError::is_skip()`] holds; they never abort a category.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::fmt;

use crate::{
    error::HubError,
    traits::{ParseFilename, TsvSerialize},
};

lazy_static! {
    static ref CHROM_STATE_RE: Regex = Regex::new(r"(?i)^([0-9]+hpi)").unwrap();
    static ref SIGNAL_RE: Regex =
        Regex::new(r"(?i)^(.*?)_([0-9]+hpi)_(.*?)_(.*?)\.bw$").unwrap();
    static ref TF_SIGNAL_RE: Regex =
        Regex::new(r"(?i)^(.*?)_([0-9]+hpi)_([a-zA-Z0-9]+)_(.*?)\.bw$").unwrap();
    static ref TF_SIGNAL_RELAXED_RE: Regex =
        Regex::new(r"(?i)^(.*?)_([0-9]+hpi)_([a-zA-Z0-9]+)_(.*)\.bw$").unwrap();
    static ref TF_PEAKS_RE: Regex =
        Regex::new(r"(?i)^(.*?)_([0-9]+hpi)_([a-zA-Z0-9]+)_(.*?)\.narrowPeak\.bb$").unwrap();
    static ref TF_PEAKS_RELAXED_RE: Regex =
        Regex::new(r"(?i)^(.*?)_([0-9]+hpi)_([a-zA-Z0-9]+)_(.*)\.narrowPeak\.bb$").unwrap();
}

/// The track categories of the hub.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Category {
    /// Chromatin state segmentations (bigBed).
    #[value(name = "chrom-state")]
    ChromState,
    /// Histone mark and accessibility signal (bigWig).
    Signal,
    /// Transcription factor ChIP-seq signal (bigWig) and peaks (bigBed).
    #[value(name = "tf")]
    TranscriptionFactor,
}

impl Category {
    /// Capitalized form, for the start of a sentence.
    pub fn title(&self) -> &'static str {
        match self {
            Category::ChromState => "Chromatin state",
            Category::Signal => "Signal track",
            Category::TranscriptionFactor => "TF track",
        }
    }

    /// The section banner comment that starts a category's output.
    pub fn banner(&self) -> &'static str {
        match self {
            Category::ChromState => "# --- Chromatin State Tracks ---",
            Category::Signal => "# --- Histone Mark / Signal Tracks (with Subgroups) ---",
            Category::TranscriptionFactor => {
                "# --- Transcription Factor (TF) Tracks (with combined Factor_Source subgroup) ---"
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::ChromState => "chromatin state",
            Category::Signal => "signal track",
            Category::TranscriptionFactor => "TF track",
        };
        write!(f, "{}", label)
    }
}

/// The two kinds of TF data file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewType {
    Signal,
    Peaks,
}

impl ViewType {
    pub const ALL: [ViewType; 2] = [ViewType::Signal, ViewType::Peaks];

    /// The view's subgroup tag.
    pub fn tag(&self) -> &'static str {
        match self {
            ViewType::Signal => "sig",
            ViewType::Peaks => "pk",
        }
    }

    /// Abbreviation used in short labels.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            ViewType::Signal => "Sig",
            ViewType::Peaks => "Pks",
        }
    }

    /// Determine the view from the file suffix. `.narrowPeak.bb` is checked
    /// first, and suffixes are case-sensitive.
    pub fn from_filename(filename: &str) -> Option<Self> {
        if filename.ends_with(".narrowPeak.bb") {
            Some(ViewType::Peaks)
        } else if filename.ends_with(".bw") {
            Some(ViewType::Signal)
        } else {
            None
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewType::Signal => write!(f, "Signal"),
            ViewType::Peaks => write!(f, "Peaks"),
        }
    }
}

fn group(captures: &Captures, i: usize) -> String {
    captures
        .get(i)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// A chromatin state segmentation file, e.g. `10hpi_chrom-states.bb`.
#[derive(Clone, Debug, PartialEq)]
pub struct ChromStateRecord {
    pub filename: String,
    /// The leading timepoint token, as written in the filename.
    pub identifier: String,
}

impl ParseFilename for ChromStateRecord {
    const CATEGORY: Category = Category::ChromState;

    fn parse_filename(filename: &str) -> Result<Self, HubError> {
        let captures = CHROM_STATE_RE
            .captures(filename)
            .ok_or_else(|| HubError::UnidentifiedFilename(filename.to_string()))?;
        Ok(Self {
            filename: filename.to_string(),
            identifier: group(&captures, 1),
        })
    }
}

impl TsvSerialize for ChromStateRecord {
    fn tsv_header() -> &'static [&'static str] {
        &["filename", "identifier"]
    }

    fn to_tsv(&self) -> String {
        format!("{}\t{}", self.filename, self.identifier)
    }
}

/// A histone mark or accessibility signal file,
/// e.g. `H3K4me3_10hpi_Stunnenberg_GSM123.bw`.
#[derive(Clone, Debug, PartialEq)]
pub struct SignalRecord {
    pub filename: String,
    /// The mark, with every `-` replaced by `.` (`H2A-Z` is `H2A.Z`).
    pub mark: String,
    pub timepoint: String,
    pub source: String,
    pub source_id: String,
}

impl SignalRecord {
    /// The combined mark and source subgroup value, e.g. `H3K4me3_Stunnenberg`.
    pub fn mark_source(&self) -> String {
        format!("{}_{}", self.mark, self.source)
    }
}

impl ParseFilename for SignalRecord {
    const CATEGORY: Category = Category::Signal;

    fn parse_filename(filename: &str) -> Result<Self, HubError> {
        let captures = SIGNAL_RE.captures(filename).ok_or_else(|| {
            HubError::MalformedFilename(Self::CATEGORY, filename.to_string())
        })?;
        Ok(Self {
            filename: filename.to_string(),
            mark: group(&captures, 1).replace('-', "."),
            timepoint: group(&captures, 2),
            source: group(&captures, 3),
            source_id: group(&captures, 4),
        })
    }
}

impl TsvSerialize for SignalRecord {
    fn tsv_header() -> &'static [&'static str] {
        &["filename", "mark", "timepoint", "source", "source_id"]
    }

    fn to_tsv(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            self.filename, self.mark, self.timepoint, self.source, self.source_id
        )
    }
}

/// The combined factor and source subgroup value of a TF record.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FactorSource {
    pub factor: String,
    pub source: String,
}

impl fmt::Display for FactorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.factor, self.source)
    }
}

/// A transcription factor signal or peaks file,
/// e.g. `AP2-G_30hpi_Llinas_unpublished.narrowPeak.bb`.
#[derive(Clone, Debug, PartialEq)]
pub struct TfRecord {
    pub filename: String,
    pub tf_name: String,
    pub timepoint: String,
    /// Alphanumeric only.
    pub source: String,
    pub source_id: String,
    pub view: ViewType,
}

impl TfRecord {
    pub fn factor_source(&self) -> FactorSource {
        FactorSource {
            factor: self.tf_name.clone(),
            source: self.source.clone(),
        }
    }
}

impl ParseFilename for TfRecord {
    const CATEGORY: Category = Category::TranscriptionFactor;

    fn parse_filename(filename: &str) -> Result<Self, HubError> {
        let view = ViewType::from_filename(filename)
            .ok_or_else(|| HubError::UnknownFileType(filename.to_string()))?;

        let (strict, relaxed): (&Regex, &Regex) = match view {
            ViewType::Signal => (&*TF_SIGNAL_RE, &*TF_SIGNAL_RELAXED_RE),
            ViewType::Peaks => (&*TF_PEAKS_RE, &*TF_PEAKS_RELAXED_RE),
        };

        // The relaxed pattern lets the source id run to the suffix unconstrained.
        let captures = strict
            .captures(filename)
            .or_else(|| relaxed.captures(filename))
            .ok_or_else(|| HubError::MalformedFilename(Self::CATEGORY, filename.to_string()))?;

        Ok(Self {
            filename: filename.to_string(),
            tf_name: group(&captures, 1),
            timepoint: group(&captures, 2),
            source: group(&captures, 3),
            source_id: group(&captures, 4),
            view,
        })
    }
}

impl TsvSerialize for TfRecord {
    fn tsv_header() -> &'static [&'static str] {
        &["filename", "tf_name", "timepoint", "source", "source_id", "view"]
    }

    fn to_tsv(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.filename, self.tf_name, self.timepoint, self.source, self.source_id, self.view
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chrom_state_identifier() {
        let record = ChromStateRecord::parse_filename("10hpi_chrom-states.bb").unwrap();
        assert_eq!(record.identifier, "10hpi");
        assert_eq!(record.filename, "10hpi_chrom-states.bb");

        let record = ChromStateRecord::parse_filename("40HPI_states.bb").unwrap();
        assert_eq!(record.identifier, "40HPI");
    }

    #[test]
    fn test_chrom_state_requires_leading_timepoint() {
        let result = ChromStateRecord::parse_filename("states_v2.bb");
        assert!(matches!(result, Err(HubError::UnidentifiedFilename(ref f)) if f == "states_v2.bb"));
        assert!(result.unwrap_err().is_skip());

        assert!(ChromStateRecord::parse_filename("chrom_10hpi.bb").is_err());
        assert!(ChromStateRecord::parse_filename("hpi_states.bb").is_err());
    }

    #[test]
    fn test_signal_fields() {
        let record = SignalRecord::parse_filename("H3K4me3_10hpi_Lab_abc123.bw").unwrap();
        assert_eq!(record.mark, "H3K4me3");
        assert_eq!(record.timepoint, "10hpi");
        assert_eq!(record.source, "Lab");
        assert_eq!(record.source_id, "abc123");
        assert_eq!(record.mark_source(), "H3K4me3_Lab");
    }

    #[test]
    fn test_signal_mark_normalization() {
        let record = SignalRecord::parse_filename("H2A-Z_10hpi_Lab_x.bw").unwrap();
        assert_eq!(record.mark, "H2A.Z");

        // already normalized marks are left alone
        let record = SignalRecord::parse_filename("H2A.Z_10hpi_Lab_x.bw").unwrap();
        assert_eq!(record.mark, "H2A.Z");
    }

    #[test]
    fn test_signal_lazy_segments() {
        // the mark extends up to the first `_<digits>hpi_`
        let record = SignalRecord::parse_filename("ATAC_INPUT_20hpi_Bartfai_rep1_x.bw").unwrap();
        assert_eq!(record.mark, "ATAC_INPUT");
        assert_eq!(record.timepoint, "20hpi");
        assert_eq!(record.source, "Bartfai");
        assert_eq!(record.source_id, "rep1_x");
    }

    #[test]
    fn test_signal_malformed() {
        for filename in [
            "H3K4me3_10hpi_Lab_abc123.bigwig",
            "H3K4me3_10hpi_Lab_abc123",
            "H3K4me3_10hpi_Lab.bw",
            "H3K4me3_late_Lab_abc.bw",
            "10hpi_chrom-states.bb",
        ] {
            let result = SignalRecord::parse_filename(filename);
            assert!(
                matches!(result, Err(HubError::MalformedFilename(Category::Signal, _))),
                "{} should not parse",
                filename
            );
        }
    }

    #[test]
    fn test_signal_case_insensitive() {
        let record = SignalRecord::parse_filename("H3K9me3_30HPI_Lab_1.BW").unwrap();
        assert_eq!(record.timepoint, "30HPI");
    }

    #[test]
    fn test_tf_views() {
        let record = TfRecord::parse_filename("AP2-G_30hpi_Llinas_GSM1.bw").unwrap();
        assert_eq!(record.view, ViewType::Signal);
        assert_eq!(record.tf_name, "AP2-G");
        assert_eq!(record.source, "Llinas");
        assert_eq!(record.source_id, "GSM1");

        let record = TfRecord::parse_filename("AP2-G_30hpi_Llinas_GSM1.narrowPeak.bb").unwrap();
        assert_eq!(record.view, ViewType::Peaks);
        assert_eq!(record.source_id, "GSM1");
        assert_eq!(
            record.factor_source(),
            FactorSource {
                factor: "AP2-G".to_string(),
                source: "Llinas".to_string()
            }
        );
    }

    #[test]
    fn test_tf_source_id_with_underscores() {
        let record = TfRecord::parse_filename("HP1_40hpi_Bozdech_unpublished_rep_2.bw").unwrap();
        assert_eq!(record.source, "Bozdech");
        assert_eq!(record.source_id, "unpublished_rep_2");
    }

    #[test]
    fn test_tf_unknown_file_type() {
        let result = TfRecord::parse_filename("AP2-G_30hpi_Llinas_GSM1.bed");
        assert!(matches!(result, Err(HubError::UnknownFileType(_))));
        // suffixes are case-sensitive
        let result = TfRecord::parse_filename("AP2-G_30hpi_Llinas_GSM1.narrowpeak.bb");
        assert!(matches!(result, Err(HubError::UnknownFileType(_))));
    }

    #[test]
    fn test_tf_malformed() {
        // the source must be alphanumeric
        let result = TfRecord::parse_filename("AP2-G_30hpi_Llinas-lab_GSM1.bw");
        assert!(matches!(
            result,
            Err(HubError::MalformedFilename(Category::TranscriptionFactor, _))
        ));
        let result = TfRecord::parse_filename("AP2-G_Llinas_GSM1.narrowPeak.bb");
        assert!(result.unwrap_err().is_skip());
    }

    #[test]
    fn test_tsv() {
        let record = SignalRecord::parse_filename("H3K4me3_10hpi_Lab_abc123.bw").unwrap();
        assert_eq!(record.to_tsv(), "H3K4me3_10hpi_Lab_abc123.bw\tH3K4me3\t10hpi\tLab\tabc123");
        assert_eq!(SignalRecord::tsv_header().len(), 5);

        let record = TfRecord::parse_filename("HP1_40hpi_Bozdech_x.narrowPeak.bb").unwrap();
        assert!(record.to_tsv().ends_with("\tPeaks"));
    }
}
