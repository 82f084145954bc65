//! Hub-wide settings: where the data files are served from and the identifiers
//! of the composite parent tracks.

use serde::Deserialize;
use std::path::PathBuf;

use crate::error::HubError;
use crate::io::InputFile;

pub const DEFAULT_BASE_URL: &str =
    "http://e1-lugh2.science.psu.edu/data/ucsc_tracks/mahony/plasmodium-chrom-states/data";
pub const DEFAULT_CHROM_STATE_PARENT: &str = "PfalChromStates";
pub const DEFAULT_SIGNAL_PARENT: &str = "PfalHistoneMarks";
pub const DEFAULT_TF_PARENT: &str = "PfalTFs";
pub const DEFAULT_ORGANISM: &str = "P. falciparum";

/// Settings consumed when rendering trackDb stanzas.
///
/// Every field has a default, so a YAML config only needs the keys it changes:
///
/// ```yaml
/// base_url: https://example.org/hub/data
/// signal_parent: MyHistoneMarks
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct HubConfig {
    pub base_url: String,
    pub chrom_state_parent: String,
    pub signal_parent: String,
    pub tf_parent: String,
    pub organism: String,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            chrom_state_parent: DEFAULT_CHROM_STATE_PARENT.to_string(),
            signal_parent: DEFAULT_SIGNAL_PARENT.to_string(),
            tf_parent: DEFAULT_TF_PARENT.to_string(),
            organism: DEFAULT_ORGANISM.to_string(),
        }
    }
}

impl HubConfig {
    /// Load a config from a YAML file. Missing keys keep their defaults.
    pub fn from_yaml(filepath: impl Into<PathBuf>) -> Result<Self, HubError> {
        let reader = InputFile::new(filepath).reader()?;
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Replace the base URL, e.g. from a command line override.
    pub fn with_base_url(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url.to_string();
        }
        self
    }

    /// The `bigDataUrl` of a data file.
    pub fn data_url(&self, filename: &str) -> String {
        format!("{}/{}", self.base_url, filename)
    }
}
