//! Test cases and test utility functions.
//!

use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// A chromatin state list, including a line without a leading timepoint.
pub const CHROM_STATE_LIST: &[&str] = &[
    "data/10hpi_chrom-states.bb",
    "data/20hpi_chrom-states.bb",
    "data/states_v2.bb",
    "data/40hpi_chrom-states.bb",
];

/// A signal list with timepoints out of order, and one malformed line.
pub const SIGNAL_LIST: &[&str] = &[
    "/hub/data/H3K4me3_100hpi_Stunnenberg_GSM1.bw",
    "/hub/data/H3K4me3_20hpi_Stunnenberg_GSM2.bw",
    "/hub/data/ATAC_20hpi_Bartfai_GSM3.bw",
    "/hub/data/H2A-Z_40hpi_Bartfai_GSM4.bw",
    "/hub/data/notes.txt",
];

/// A TF list with both views and an unknown file type.
pub const TF_LIST: &[&str] = &[
    "data/AP2-G_30hpi_Llinas_GSM5.bw",
    "data/AP2-G_30hpi_Llinas_GSM5.narrowPeak.bb",
    "data/HP1_40hpi_Bozdech_unpublished.bw",
    "data/HP1_40hpi_Bozdech_unpublished.bed",
];

/// Write `lines` to a temporary file list, one per line.
pub fn temp_list_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("could not create temporary file");
    for line in lines {
        writeln!(file, "{}", line).expect("could not write temporary file");
    }
    file.flush().expect("could not flush temporary file");
    file
}

/// A temporary output path (the file is created empty).
pub fn temp_output_file() -> NamedTempFile {
    NamedTempFile::new().expect("could not create temporary file")
}

/// Get the path to the `trackhubs` binary built for integration tests.
pub fn trackhubs_binary_path() -> PathBuf {
    let mut path = std::env::current_exe().expect("could not get current executable path");
    path.pop(); // the test binary itself
    if path.ends_with("deps") {
        path.pop();
    }
    path.push(format!("trackhubs{}", std::env::consts::EXE_SUFFIX));
    path
}
