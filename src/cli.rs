use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Kin k-nearest-neighbor credit classifier.
#[derive(Parser)]
#[command(
    name = "kin",
    version,
    about = "k-nearest-neighbor classifier with leave-one-out validation"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a raw applicant file into numeric form.
    Normalize(NormalizeArgs),
    /// Estimate the error rate of a numeric dataset by leave-one-out.
    Validate(ValidateArgs),
    /// Classify numeric queries against a numeric dataset.
    Classify(ClassifyArgs),
    /// Normalize, validate and classify raw applicant files end to end.
    Run(RunArgs),
}

/// Which raw applicant layout an input file uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FileKind {
    /// Labelled records with an `N M C` header.
    Training,
    /// Unlabelled records with an `N` header.
    Test,
}

/// Arguments for the `normalize` subcommand.
#[derive(clap::Args)]
pub struct NormalizeArgs {
    /// Layout of the raw input file.
    #[arg(long, value_enum)]
    pub kind: FileKind,

    /// Path to the raw applicant file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the numeric output file.
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Arguments for the `validate` subcommand.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the numeric dataset file.
    #[arg(short, long)]
    pub dataset: PathBuf,

    /// Number of neighbors.
    #[arg(short, default_value_t = crate::config::DEFAULT_K)]
    pub k: usize,

    /// Run the validation passes on the rayon thread pool.
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for the `classify` subcommand.
#[derive(clap::Args)]
pub struct ClassifyArgs {
    /// Path to the numeric dataset file.
    #[arg(short, long)]
    pub dataset: PathBuf,

    /// Path to the numeric query file.
    #[arg(short, long)]
    pub queries: PathBuf,

    /// Path for the class-name results file.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Number of neighbors.
    #[arg(short, default_value_t = crate::config::DEFAULT_K)]
    pub k: usize,
}

/// Arguments for the `run` subcommand.
#[derive(clap::Args)]
pub struct RunArgs {
    /// Path to TOML configuration file; defaults apply when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the raw training file.
    #[arg(long)]
    pub training: PathBuf,

    /// Path to the raw test file.
    #[arg(long)]
    pub test: PathBuf,

    /// Path for the class-name results file.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Override the neighbor count from config.
    #[arg(short)]
    pub k: Option<usize>,
}
