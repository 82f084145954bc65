//! Transcription factor ChIP-seq: signal (bigWig) and peak (bigBed) tracks,
//! organized by view, factor/source and timepoint.

use crate::{
    config::HubConfig,
    parsers::{FactorSource, TfRecord, ViewType},
    style::{Color, Visibility},
    subgroups::{compare_factor_sources, compare_timepoints, TfSubgroups},
    tags::{factor_source_tag, timepoint_tag, TagTable},
    trackdb::{track_id, TrackBlock, CHILD_INDENT},
    traits::CompositeTrack,
};

pub const PARENT_PRIORITY: usize = 30;
/// Priority of the first child track.
pub const FIRST_PRIORITY: usize = 1;
/// Maximum length of a child track identifier.
pub const MAX_ID_LEN: usize = 60;

const SIGNAL_COLOR: Color = Color(0, 0, 170);
const PEAKS_COLOR: Color = Color(0, 0, 0);

pub struct TfComposite {
    records: Vec<TfRecord>,
    timepoint_tags: TagTable<String>,
    factor_source_tags: TagTable<FactorSource>,
}

impl TfComposite {
    pub fn timepoint_tags(&self) -> &TagTable<String> {
        &self.timepoint_tags
    }

    pub fn factor_source_tags(&self) -> &TagTable<FactorSource> {
        &self.factor_source_tags
    }
}

fn view_declaration() -> String {
    ViewType::ALL
        .iter()
        .map(|view| format!("{}={}", view.tag(), view))
        .collect::<Vec<_>>()
        .join(" ")
}

impl CompositeTrack for TfComposite {
    type Record = TfRecord;

    fn from_records(records: Vec<TfRecord>) -> Self {
        let mut subgroups = TfSubgroups::default();
        for record in &records {
            subgroups.add(record);
        }

        let timepoints = subgroups
            .timepoints
            .into_sorted_by(|a, b| compare_timepoints(a, b));
        let factor_sources = subgroups.factor_sources.into_sorted_by(compare_factor_sources);

        Self {
            records,
            timepoint_tags: TagTable::new(timepoints, |tp| timepoint_tag(tp)),
            factor_source_tags: TagTable::new(factor_sources, factor_source_tag),
        }
    }

    fn parent_block(&self, config: &HubConfig) -> TrackBlock {
        TrackBlock::new(&config.tf_parent)
            .set("compositeTrack", "on")
            .set("shortLabel", "TFs")
            .set(
                "longLabel",
                format!("{} Transcription Factor ChIP-seq", config.organism),
            )
            .set("visibility", Visibility::Dense)
            .set("group", "regulation")
            .set("priority", PARENT_PRIORITY)
            .set("dragAndDrop", "subTracks")
            .set("noInherit", "on")
            .set("subGroup1", format!("view Views {}", view_declaration()))
            .set(
                "subGroup2",
                format!(
                    "timepoint Timepoint {}",
                    self.timepoint_tags.declaration(|tp| tp.clone())
                ),
            )
            .set(
                "subGroup3",
                format!(
                    "factorSource Factor_Source {}",
                    self.factor_source_tags.declaration(|fs| fs.to_string())
                ),
            )
            .set("dimensions", "dimX=factorSource dimY=timepoint dimA=view")
            .set("sortOrder", "view=+ factorSource=+ timepoint=+")
            .set(
                "visibilityViewDefaults",
                format!(
                    "{}={} {}={}",
                    ViewType::Signal.tag(),
                    Visibility::Full,
                    ViewType::Peaks.tag(),
                    Visibility::Hide
                ),
            )
    }

    fn child_blocks(&self, config: &HubConfig) -> Vec<TrackBlock> {
        let parent = &config.tf_parent;
        self.records
            .iter()
            .zip(FIRST_PRIORITY..)
            .map(|(record, priority)| {
                let view_tag = record.view.tag();
                let suffix = format!(
                    "{}_{}_{}_{}",
                    record.tf_name, record.source, record.timepoint, view_tag
                );
                let short_label = format!(
                    "{} ({}) {} {}",
                    record.tf_name,
                    record.source,
                    record.timepoint,
                    record.view.abbreviation()
                );
                let long_label = format!(
                    "TF {} ({}) at {} from {} - {}",
                    record.tf_name, record.source, record.timepoint, record.source_id, record.view
                );

                let block = TrackBlock::new(track_id(parent, &suffix, MAX_ID_LEN))
                    .indented(CHILD_INDENT)
                    .set("parent", format!("{} on", parent))
                    .set(
                        "subGroups",
                        format!(
                            "view={} factorSource={} timepoint={}",
                            view_tag,
                            self.factor_source_tags.tag(&record.factor_source()),
                            self.timepoint_tags.tag(&record.timepoint)
                        ),
                    );
                let block = match record.view {
                    ViewType::Signal => block
                        .set("type", "bigWig")
                        .set("shortLabel", short_label)
                        .set("longLabel", long_label)
                        .set("color", SIGNAL_COLOR)
                        .set("autoScale", "off")
                        .set("groupAutoScale", "on"),
                    ViewType::Peaks => block
                        .set("type", "bigBed 6 +")
                        .set("shortLabel", short_label)
                        .set("longLabel", long_label)
                        .set("color", PEAKS_COLOR),
                };
                block
                    .set("bigDataUrl", config.data_url(&record.filename))
                    .set("priority", priority)
            })
            .collect()
    }
}
