use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{
    io::OutputFile,
    prelude::*,
    reporting::CommandOutput,
    tracks::collect_records,
};

/// The file lists to generate a hub's trackDb from.
#[derive(Clone, Debug)]
pub struct TrackLists {
    pub chrom_state: PathBuf,
    pub signal: PathBuf,
    pub tf: PathBuf,
    /// Whether to generate TF tracks from `tf`.
    pub include_tf: bool,
}

/// Build the trackDb document for all categories: chromatin states, then
/// signal tracks, then (if requested) TF tracks.
pub fn build_trackdb(lists: &TrackLists, config: &HubConfig) -> CommandOutput<TrackDb> {
    let mut trackdb = TrackDb::new();
    let mut report = Report::new();

    generate_category::<ChromStateComposite>(&lists.chrom_state, config, &mut trackdb, &mut report);
    generate_category::<SignalComposite>(&lists.signal, config, &mut trackdb, &mut report);
    if lists.include_tf {
        generate_category::<TfComposite>(&lists.tf, config, &mut trackdb, &mut report);
    } else {
        log::debug!("TF tracks not requested, skipping {}", lists.tf.display());
    }

    CommandOutput::new(trackdb, report)
}

/// Generate trackDb stanzas and write them to `output` (standard output if
/// `None`).
pub fn hub_generate(
    lists: &TrackLists,
    config: &HubConfig,
    output: Option<&PathBuf>,
) -> Result<CommandOutput<()>, HubError> {
    let CommandOutput {
        value: trackdb,
        report,
    } = build_trackdb(lists, config);

    let output_stream = output.map_or(OutputFile::new_stdout(), OutputFile::new);
    let mut writer = output_stream.writer()?;
    trackdb.write_to(&mut writer)?;

    Ok(CommandOutput::new((), report))
}

fn inspect_records<R: ParseFilename + TsvSerialize>(
    list: &Path,
    lines: &mut Vec<String>,
    report: &mut Report,
) -> Result<(), HubError> {
    let mut trackdb = TrackDb::new();
    let result = collect_records::<R>(list, &mut trackdb, report);
    // skipped lines first, as comments
    lines.extend(trackdb.lines().iter().cloned());
    let records = match result {
        Ok(records) => records,
        Err(e @ HubError::EmptyCategory(..)) => {
            report.add_issue(&e);
            lines.push(e.to_comment());
            Vec::new()
        }
        Err(e) => return Err(e),
    };
    lines.push(format!("#{}", R::tsv_header().join("\t")));
    lines.extend(records.iter().map(|record| record.to_tsv()));
    Ok(())
}

/// Parse a file list and write the parsed fields of each file as TSV, to check
/// a list before generating stanzas from it.
pub fn hub_inspect(
    list: &Path,
    category: Category,
    output: Option<&PathBuf>,
) -> Result<CommandOutput<()>, HubError> {
    let mut report = Report::new();
    let mut lines = Vec::new();

    match category {
        Category::ChromState => inspect_records::<ChromStateRecord>(list, &mut lines, &mut report)?,
        Category::Signal => inspect_records::<SignalRecord>(list, &mut lines, &mut report)?,
        Category::TranscriptionFactor => {
            inspect_records::<TfRecord>(list, &mut lines, &mut report)?
        }
    }

    let output_stream = output.map_or(OutputFile::new_stdout(), OutputFile::new);
    let mut writer = output_stream.writer()?;
    for line in &lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;

    Ok(CommandOutput::new((), report))
}
