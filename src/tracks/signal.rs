//! Histone mark and accessibility signal: a bigWig composite with a timepoint
//! by mark/source subgroup matrix.

use crate::{
    config::HubConfig,
    parsers::SignalRecord,
    style::{signal_style, Visibility},
    subgroups::{compare_text, compare_timepoints, SignalSubgroups},
    tags::{mark_source_tag, timepoint_tag, TagTable},
    trackdb::{track_id, TrackBlock, CHILD_INDENT},
    traits::CompositeTrack,
};

/// Priority of the parent track. Priorities up to this are reserved for it.
pub const PARENT_PRIORITY: usize = 20;
/// Priority of the first child track.
pub const FIRST_PRIORITY: usize = 21;
/// Maximum length of a child track identifier.
pub const MAX_ID_LEN: usize = 50;

pub struct SignalComposite {
    records: Vec<SignalRecord>,
    timepoint_tags: TagTable<String>,
    mark_source_tags: TagTable<String>,
}

impl SignalComposite {
    pub fn timepoint_tags(&self) -> &TagTable<String> {
        &self.timepoint_tags
    }

    pub fn mark_source_tags(&self) -> &TagTable<String> {
        &self.mark_source_tags
    }
}

impl CompositeTrack for SignalComposite {
    type Record = SignalRecord;

    fn from_records(records: Vec<SignalRecord>) -> Self {
        let mut subgroups = SignalSubgroups::default();
        for record in &records {
            subgroups.add(record);
        }

        let timepoints = subgroups
            .timepoints
            .into_sorted_by(|a, b| compare_timepoints(a, b));
        let mark_sources = subgroups
            .mark_sources
            .into_sorted_by(|a, b| compare_text(a, b));

        Self {
            records,
            timepoint_tags: TagTable::new(timepoints, |tp| timepoint_tag(tp)),
            mark_source_tags: TagTable::new(mark_sources, |ms| mark_source_tag(ms)),
        }
    }

    fn parent_block(&self, config: &HubConfig) -> TrackBlock {
        TrackBlock::new(&config.signal_parent)
            .set("compositeTrack", "on")
            .set("shortLabel", "Histone Marks")
            .set(
                "longLabel",
                format!("{} Histone Marks and Accessibility", config.organism),
            )
            .set("type", "bigWig")
            .set("visibility", Visibility::Full)
            .set("autoScale", "off")
            .set("groupAutoScale", "on")
            .set("group", "regulation")
            .set("priority", PARENT_PRIORITY)
            .set("dragAndDrop", "subTracks")
            .set("noInherit", "on")
            .set(
                "subGroup1",
                format!(
                    "timepoint Timepoint {}",
                    self.timepoint_tags.declaration(|tp| tp.clone())
                ),
            )
            .set(
                "subGroup2",
                format!(
                    "markSource Mark_Source {}",
                    self.mark_source_tags.declaration(|ms| ms.clone())
                ),
            )
            .set("dimensions", "dimX=timepoint dimY=markSource")
            .set("sortOrder", "timepoint=+ markSource=+")
    }

    fn child_blocks(&self, config: &HubConfig) -> Vec<TrackBlock> {
        let parent = &config.signal_parent;
        self.records
            .iter()
            .zip(FIRST_PRIORITY..)
            .map(|(record, priority)| {
                let style = signal_style(&record.mark);
                let suffix = format!(
                    "{}_{}_{}",
                    record.mark.replace('.', "z"),
                    record.timepoint,
                    record.source
                );
                TrackBlock::new(track_id(parent, &suffix, MAX_ID_LEN))
                    .indented(CHILD_INDENT)
                    .set("parent", format!("{} on", parent))
                    .set(
                        "subGroups",
                        format!(
                            "timepoint={} markSource={}",
                            self.timepoint_tags.tag(&record.timepoint),
                            self.mark_source_tags.tag(&record.mark_source())
                        ),
                    )
                    .set("type", "bigWig")
                    .set(
                        "shortLabel",
                        format!("{} {} ({})", record.mark, record.timepoint, record.source),
                    )
                    .set(
                        "longLabel",
                        format!(
                            "{} signal at {} from {} ({})",
                            record.mark, record.timepoint, record.source, record.source_id
                        ),
                    )
                    .set("visibility", style.visibility)
                    .set("color", style.color)
                    .set("autoScale", "off")
                    .set("bigDataUrl", config.data_url(&record.filename))
                    .set("priority", priority)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ParseFilename;

    fn composite(filenames: &[&str]) -> SignalComposite {
        let records = filenames
            .iter()
            .map(|f| SignalRecord::parse_filename(f).unwrap())
            .collect();
        SignalComposite::from_records(records)
    }

    #[test]
    fn test_shared_mark_source_tag() {
        let composite = composite(&["H3K4me3_10hpi_Lab_a.bw", "H3K4me3_20hpi_Lab_b.bw"]);
        let blocks = composite.child_blocks(&HubConfig::default());
        assert_eq!(
            blocks[0].get("subGroups"),
            Some("timepoint=t10 markSource=msH3K4me3Lab")
        );
        assert_eq!(
            blocks[1].get("subGroups"),
            Some("timepoint=t20 markSource=msH3K4me3Lab")
        );
    }

    #[test]
    fn test_subgroup_declarations_sorted() {
        let composite = composite(&[
            "H3K9me3_100hpi_Lab_a.bw",
            "ATAC_20hpi_Bartfai_b.bw",
            "H3K9me3_20hpi_Lab_c.bw",
        ]);
        let parent = composite.parent_block(&HubConfig::default());
        assert_eq!(
            parent.get("subGroup1"),
            Some("timepoint Timepoint t20=20hpi t100=100hpi")
        );
        assert_eq!(
            parent.get("subGroup2"),
            Some("markSource Mark_Source msATACBartfai=ATAC_Bartfai msH3K9me3Lab=H3K9me3_Lab")
        );
        assert_eq!(parent.get("priority"), Some("20"));
    }

    #[test]
    fn test_priorities_follow_input_order() {
        let composite = composite(&[
            "H3K9me3_100hpi_Lab_a.bw",
            "ATAC_20hpi_Bartfai_b.bw",
            "H3K9me3_20hpi_Lab_c.bw",
        ]);
        let blocks = composite.child_blocks(&HubConfig::default());
        let priorities: Vec<&str> = blocks.iter().filter_map(|b| b.get("priority")).collect();
        assert_eq!(priorities, vec!["21", "22", "23"]);
        assert_eq!(blocks[0].id(), "PfalHistoneMarks_H3K9me3_100hpi_Lab");
    }

    #[test]
    fn test_child_block() {
        let config = HubConfig::default().with_base_url(Some("http://host/data"));
        let composite = composite(&["H2A-Z_10hpi_Bartfai_GSM1.bw"]);
        let lines: Vec<String> = composite.child_blocks(&config)[0].lines().collect();
        assert_eq!(
            lines,
            vec![
                "    track PfalHistoneMarks_H2AzZ_10hpi_Bartfai",
                "    parent PfalHistoneMarks on",
                "    subGroups timepoint=t10 markSource=msH2AZBartfai",
                "    type bigWig",
                "    shortLabel H2A.Z 10hpi (Bartfai)",
                "    longLabel H2A.Z signal at 10hpi from Bartfai (GSM1)",
                "    visibility hide",
                "    color 0,0,255",
                "    autoScale off",
                "    bigDataUrl http://host/data/H2A-Z_10hpi_Bartfai_GSM1.bw",
                "    priority 21",
                "",
            ]
        );
    }

    #[test]
    fn test_atac_visibility() {
        let composite = composite(&["ATAC_INPUT_10hpi_Lab_x.bw", "INPUT_10hpi_Lab_y.bw"]);
        let blocks = composite.child_blocks(&HubConfig::default());
        assert_eq!(blocks[0].get("visibility"), Some("full"));
        assert_eq!(blocks[0].get("color"), Some("153,50,204"));
        assert_eq!(blocks[1].get("visibility"), Some("hide"));
        assert_eq!(blocks[1].get("color"), Some("150,150,150"));
    }

    #[test]
    fn test_track_id_truncated() {
        let composite = composite(&["H3K27me3_100hpi_AVeryLongLaboratoryName_x.bw"]);
        let blocks = composite.child_blocks(&HubConfig::default());
        assert_eq!(blocks[0].id().chars().count(), MAX_ID_LEN);
    }
}
