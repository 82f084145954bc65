//! End-to-end tests of the `trackhubs` binary.

use std::process::Command;
use trackhubs::test_utilities::{
    temp_list_file, temp_output_file, trackhubs_binary_path, CHROM_STATE_LIST, SIGNAL_LIST,
    TF_LIST,
};

/// Split trackDb output into its stanzas (blank-line separated, comments removed).
fn stanzas(output: &str) -> Vec<Vec<&str>> {
    output
        .split("\n\n")
        .map(|chunk| {
            chunk
                .lines()
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .collect::<Vec<_>>()
        })
        .filter(|lines| !lines.is_empty())
        .collect()
}

fn value<'a>(stanza: &[&'a str], key: &str) -> Option<&'a str> {
    stanza
        .iter()
        .copied()
        .map(str::trim_start)
        .find_map(|line| line.strip_prefix(key).and_then(|rest| rest.strip_prefix(' ')))
}

#[test]
fn test_generate_default_run() {
    let chrom_states = temp_list_file(CHROM_STATE_LIST);
    let signal = temp_list_file(SIGNAL_LIST);
    let tf = temp_list_file(TF_LIST);

    let output = Command::new(trackhubs_binary_path())
        .arg("generate")
        .arg(chrom_states.path())
        .arg(signal.path())
        .arg(tf.path())
        .arg("--base-url")
        .arg("https://example.org/hub")
        .output()
        .expect("trackhubs generate failed");

    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains(
        "# Warning: Could not extract identifier from filename: states_v2.bb. Skipping."
    ));
    assert!(!stdout.contains("PfalTFs"));

    let stanzas = stanzas(&stdout);
    assert_eq!(stanzas.len(), 9);

    // chromatin states: parent, then 3 children with priorities 1..=3
    assert_eq!(stanzas[0][0], "track PfalChromStates");
    let priorities: Vec<&str> = stanzas[1..4]
        .iter()
        .filter_map(|s| value(s, "priority"))
        .collect();
    assert_eq!(priorities, vec!["1", "2", "3"]);
    assert_eq!(
        value(&stanzas[3], "bigDataUrl"),
        Some("https://example.org/hub/40hpi_chrom-states.bb")
    );

    // signal: parent with sorted subgroups, then children in input order from 21
    assert_eq!(value(&stanzas[4], "track"), Some("PfalHistoneMarks"));
    assert_eq!(
        value(&stanzas[4], "subGroup1"),
        Some("timepoint Timepoint t20=20hpi t40=40hpi t100=100hpi")
    );
    let children: Vec<(&str, &str)> = stanzas[5..]
        .iter()
        .map(|s| (value(s, "track").unwrap(), value(s, "priority").unwrap()))
        .collect();
    assert_eq!(
        children,
        vec![
            ("PfalHistoneMarks_H3K4me3_100hpi_Stunnenberg", "21"),
            ("PfalHistoneMarks_H3K4me3_20hpi_Stunnenberg", "22"),
            ("PfalHistoneMarks_ATAC_20hpi_Bartfai", "23"),
            ("PfalHistoneMarks_H2AzZ_40hpi_Bartfai", "24"),
        ]
    );
    assert_eq!(value(&stanzas[7], "visibility"), Some("full"));
}

#[test]
fn test_generate_with_tf_and_config() {
    let chrom_states = temp_list_file(CHROM_STATE_LIST);
    let signal = temp_list_file(SIGNAL_LIST);
    let tf = temp_list_file(TF_LIST);
    let config = temp_list_file(&["tf_parent: MyTFs", "organism: P. berghei"]);
    let out = temp_output_file();

    let output = Command::new(trackhubs_binary_path())
        .arg("generate")
        .arg(chrom_states.path())
        .arg(signal.path())
        .arg(tf.path())
        .arg("--include-tf")
        .arg("--config")
        .arg(config.path())
        .arg("--output")
        .arg(out.path())
        .output()
        .expect("trackhubs generate failed");
    assert!(output.status.success(), "{:?}", output);

    let text = std::fs::read_to_string(out.path()).unwrap();
    assert!(text.contains("# Warning: Unknown file type for TF track: HP1_40hpi_Bozdech_unpublished.bed. Skipping."));

    let stanzas = stanzas(&text);
    assert_eq!(stanzas.len(), 13);
    let tf_parent = &stanzas[9];
    assert_eq!(value(tf_parent, "track"), Some("MyTFs"));
    assert_eq!(
        value(tf_parent, "longLabel"),
        Some("P. berghei Transcription Factor ChIP-seq")
    );
    assert_eq!(
        value(&stanzas[11], "subGroups"),
        Some("view=pk factorSource=fsAP2GLlina timepoint=t30")
    );
    assert_eq!(value(&stanzas[12], "priority"), Some("3"));
}

#[test]
fn test_generate_missing_and_empty_lists() {
    let empty = temp_list_file(&[]);
    let tf = temp_list_file(TF_LIST);

    let output = Command::new(trackhubs_binary_path())
        .arg("generate")
        .arg("no/such/chrom_states.txt")
        .arg(empty.path())
        .arg(tf.path())
        .output()
        .expect("trackhubs generate failed");

    // per-category failures are reported in the output, not as a failed run
    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("# Error: Chromatin state input file not found at no/such/chrom_states.txt"));
    assert!(stdout.contains("# No valid signal track data found in "));
    assert!(stanzas(&stdout).is_empty());
}

#[test]
fn test_generate_bad_config_fails() {
    let list = temp_list_file(CHROM_STATE_LIST);
    let config = temp_list_file(&["base_url: [unterminated"]);

    let output = Command::new(trackhubs_binary_path())
        .arg("generate")
        .arg(list.path())
        .arg(list.path())
        .arg(list.path())
        .arg("--config")
        .arg(config.path())
        .output()
        .expect("trackhubs generate failed");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: "));
}

#[test]
fn test_inspect_tf() {
    let tf = temp_list_file(TF_LIST);

    let output = Command::new(trackhubs_binary_path())
        .arg("inspect")
        .arg(tf.path())
        .arg("--category")
        .arg("tf")
        .output()
        .expect("trackhubs inspect failed");

    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let rows: Vec<&str> = stdout.lines().filter(|l| !l.starts_with('#')).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows[2],
        "HP1_40hpi_Bozdech_unpublished.bw\tHP1\t40hpi\tBozdech\tunpublished\tSignal"
    );
}
