use std::path::PathBuf;

use clap::{Parser, Subcommand};
use trackhubs::{
    commands::{hub_generate, hub_inspect, TrackLists},
    prelude::{Category, HubConfig, HubError},
    reporting::CommandOutput,
};

const INFO: &str = "\
trackhubs: UCSC track hub trackDb stanzas from lists of data files
usage: trackhubs [--help] <subcommand>

Subcommands:

  generate: write composite track stanzas for chromatin state, signal,
            and (optionally) TF file lists.
  inspect:  show how the files in one list are parsed.

";

#[derive(Parser)]
#[clap(name = "trackhubs")]
#[clap(about = INFO)]
struct Cli {
    /// increase logging verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    debug: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    Generate {
        /// a list of chromatin state bigBed files (e.g. data/10hpi_chrom-states.bb)
        #[arg(required = true)]
        chrom_state_list: PathBuf,

        /// a list of histone mark signal bigWig files (e.g. data/MARK_10hpi_SOURCE_ID.bw)
        #[arg(required = true)]
        signal_list: PathBuf,

        /// a list of TF signal bigWig and narrowPeak bigBed files (e.g. data/TF_10hpi_SOURCE_ID.bw)
        #[arg(required = true)]
        tf_list: PathBuf,

        /// also generate the TF composite from the TF list
        #[arg(long)]
        include_tf: bool,

        /// a YAML file with the base URL and parent track identifiers
        #[arg(long)]
        config: Option<PathBuf>,

        /// the URL the data files are served from (overrides the config file)
        #[arg(long)]
        base_url: Option<String>,

        /// an optional output file (standard output will be used if not specified)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    Inspect {
        /// a list of data files
        #[arg(required = true)]
        list: PathBuf,

        /// the naming scheme of the files in the list
        #[arg(long, value_enum, required = true)]
        category: Category,

        /// an optional output file (standard output will be used if not specified)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn init_logging(debug: u8) {
    let level = match debug {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn run() -> Result<(), HubError> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let result = match &cli.command {
        Some(Commands::Generate {
            chrom_state_list,
            signal_list,
            tf_list,
            include_tf,
            config,
            base_url,
            output,
        }) => {
            let config = match config {
                Some(path) => HubConfig::from_yaml(path)?,
                None => HubConfig::default(),
            }
            .with_base_url(base_url.as_deref());
            log::debug!("hub config: {:?}", config);

            let lists = TrackLists {
                chrom_state: chrom_state_list.clone(),
                signal: signal_list.clone(),
                tf: tf_list.clone(),
                include_tf: *include_tf,
            };
            hub_generate(&lists, &config, output.as_ref())
        }
        Some(Commands::Inspect {
            list,
            category,
            output,
        }) => hub_inspect(list, *category, output.as_ref()),
        None => {
            println!("{}\n", INFO);
            std::process::exit(1);
        }
    };
    let CommandOutput { report, .. } = result?;
    for warning in report.warnings() {
        log::debug!("skipped: {}", warning);
    }
    if !report.is_clean() {
        log::info!(
            "{} lines skipped, {} categories incomplete",
            report.warnings().len(),
            report.errors().len()
        );
    }
    Ok(())
}

fn main() {
    match run() {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
