use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "ScrewFrame CLI - Screw-frame geometry and mean-square-displacement analysis of protein backbones.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze the first chain of a PDB structure file.
    Analyze(AnalyzeArgs),
    /// Download a structure file from the RCSB archive.
    Fetch(FetchArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to the input structure file in PDB format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to the analysis configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Restrict the analysis to alpha-carbon atoms.
    #[arg(long)]
    pub calpha: bool,

    /// Skip the screw-frame rotation-center pipeline.
    #[arg(long)]
    pub no_centers: bool,

    /// Select the mean-square-displacement algorithm, overriding the config file.
    #[arg(long, value_enum, value_name = "METHOD")]
    pub msd: Option<MsdMethodArg>,

    /// Skip the mean-square-displacement computation.
    #[arg(long, conflicts_with = "msd")]
    pub no_msd: bool,

    /// Write the rotation centers to a CSV file.
    #[arg(long, value_name = "PATH")]
    pub centers_out: Option<PathBuf>,

    /// Write the MSD curve to a CSV file.
    #[arg(long, value_name = "PATH")]
    pub msd_out: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MsdMethodArg {
    /// Direct quadratic-time summation.
    Direct,
    /// Fourier-accelerated computation.
    Fft,
}

/// Arguments for the `fetch` subcommand.
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// PDB identifier to download (e.g. 1dpx or 1dpx.pdb).
    #[arg(required = true)]
    pub id: String,

    /// Directory to save the downloaded file into. Defaults to the current directory.
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}
