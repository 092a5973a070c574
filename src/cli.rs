use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::input::{DEFAULT_DATA_PATH, DataSource};
use crate::report::{DEFAULT_BUBBLE_SIZEREF, DEFAULT_TOP_N, RenderSettings};

#[derive(Debug, Parser)]
#[command(
    name = "otu-dashboard",
    version,
    about = "Render linked OTU dashboard panels for test subjects"
)]
pub struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the selectable subject names in dataset order.
    Names(SourceArgs),
    /// Render all panels for one subject.
    Render(RenderArgs),
    /// Render the first subject, then re-render for each name read from stdin.
    Session(DisplayArgs),
}

#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Dataset path (`.gz` allowed) or http(s) URL.
    #[arg(long, default_value = DEFAULT_DATA_PATH)]
    pub data: String,
}

#[derive(Debug, Args)]
pub struct DisplayArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Directory receiving the panel outputs.
    #[arg(long)]
    pub out: PathBuf,

    /// Seed for bubble colours and opacities; unseeded by default.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of OTUs in the bar panel.
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub display: DisplayArgs,

    /// Subject to render; defaults to the first name in the dataset.
    #[arg(long)]
    pub subject: Option<String>,
}

/// What to do after loading. Only the modes that render own an output
/// directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    Names,
    Render {
        out_dir: PathBuf,
        subject: Option<String>,
    },
    Session {
        out_dir: PathBuf,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub source: DataSource,
    pub mode: RunMode,
    pub settings: RenderSettings,
    pub seed: Option<u64>,
    pub verbose: bool,
}

impl RunConfig {
    fn with_display(display: DisplayArgs, mode: RunMode, verbose: bool) -> Self {
        RunConfig {
            source: DataSource::parse(&display.source.data),
            mode,
            settings: RenderSettings {
                top_n: display.top_n,
                bubble_sizeref: DEFAULT_BUBBLE_SIZEREF,
            },
            seed: display.seed,
            verbose,
        }
    }
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        match cli.command {
            Command::Names(source) => RunConfig {
                source: DataSource::parse(&source.data),
                mode: RunMode::Names,
                settings: RenderSettings::default(),
                seed: None,
                verbose: cli.verbose,
            },
            Command::Render(args) => {
                let mode = RunMode::Render {
                    out_dir: args.display.out.clone(),
                    subject: args.subject,
                };
                RunConfig::with_display(args.display, mode, cli.verbose)
            }
            Command::Session(display) => {
                let mode = RunMode::Session {
                    out_dir: display.out.clone(),
                };
                RunConfig::with_display(display, mode, cli.verbose)
            }
        }
    }
}

pub fn parse_args<I, T>(args: I) -> Result<RunConfig, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).map(RunConfig::from)
}

#[cfg(test)]
#[path = "../tests/src_inline/cli.rs"]
mod tests;
