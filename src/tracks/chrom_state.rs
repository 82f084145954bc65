//! Chromatin state segmentations: a flat composite of bigBed tracks, one per
//! timepoint, without subgroups.

use crate::{
    config::HubConfig,
    parsers::ChromStateRecord,
    style::Visibility,
    trackdb::TrackBlock,
    traits::CompositeTrack,
};

/// Priority of the first child track.
pub const FIRST_PRIORITY: usize = 1;

pub struct ChromStateComposite {
    records: Vec<ChromStateRecord>,
}

impl CompositeTrack for ChromStateComposite {
    type Record = ChromStateRecord;

    fn from_records(records: Vec<ChromStateRecord>) -> Self {
        Self { records }
    }

    fn parent_block(&self, config: &HubConfig) -> TrackBlock {
        TrackBlock::new(&config.chrom_state_parent)
            .set("compositeTrack", "on")
            .set("shortLabel", "IDC Chromatin States")
            .set(
                "longLabel",
                format!("{} chromatin states during the IDC", config.organism),
            )
            .set("type", "bigBed")
            .set("visibility", Visibility::Dense)
    }

    fn child_blocks(&self, config: &HubConfig) -> Vec<TrackBlock> {
        let parent = &config.chrom_state_parent;
        self.records
            .iter()
            .zip(FIRST_PRIORITY..)
            .map(|(record, priority)| {
                let id = &record.identifier;
                TrackBlock::new(format!("{}_{}", parent, id))
                    .set("parent", format!("{} on", parent))
                    .set("type", "bigBed 9 +")
                    .set("shortLabel", format!("{} States", id))
                    .set("longLabel", format!("Chromatin States for {}", id))
                    .set("visibility", Visibility::Dense)
                    .set("itemRgb", "on")
                    .set("bigDataUrl", config.data_url(&record.filename))
                    .set("priority", priority)
            })
            .collect()
    }
}
