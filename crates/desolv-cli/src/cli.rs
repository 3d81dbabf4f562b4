use clap::{Args, Parser, Subcommand};
use desolv::core::io::bonds::{BondLayout, DuplicatePolicy};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "desolv - relate phosphorylation sites to dehydrons in macromolecular structure files.",
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

    /// Path to an analysis configuration file in TOML format
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one structure file and, optionally, its dehydron annotation file.
    Analyze(AnalyzeArgs),
    /// Analyze every structure file in a directory.
    Batch(BatchArgs),
    /// Print structural counts for one structure file.
    Info(InfoArgs),
}

/// Settings that override the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct AnalysisOverrides {
    /// Column layout of the annotation file ('standard' or 'narrow').
    #[arg(long, value_name = "LAYOUT")]
    pub bond_layout: Option<BondLayout>,

    /// How repeated annotation lines are collapsed ('exact-pair' or 'either-field').
    #[arg(long, value_name = "POLICY")]
    pub duplicate_policy: Option<DuplicatePolicy>,

    /// Residue names to test against dehydrons instead of the phosphorylation sites.
    /// Example: --residues SER,THR,TYR
    #[arg(long = "residues", value_name = "NAMES", value_delimiter = ',')]
    pub residues_of_interest: Option<Vec<String>>,
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to the structure file (PDB format).
    #[arg(short, long, value_name = "PATH")]
    pub structure: PathBuf,

    /// Path to the dehydron annotation file. Without it only structural counts are reported.
    #[arg(short, long, value_name = "PATH")]
    pub bonds: Option<PathBuf>,

    /// Directory to write CSV reports into.
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: AnalysisOverrides,
}

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Directory holding `NAME.pdb` files and their `NAME_bonds.txt` companions.
    #[arg(short, long, value_name = "DIR")]
    pub dir: PathBuf,

    /// Directory to write CSV reports into.
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: AnalysisOverrides,
}

/// Arguments for the `info` subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Path to the structure file (PDB format).
    #[arg(short, long, value_name = "PATH")]
    pub structure: PathBuf,
}
