use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use structal::config::FileFormat;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "structal - utilities for structure-alignment tooling: FASTA sequence export and local PDB cache configuration.",
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
    /// Resolve the cached-data configuration and render it as XML.
    Config(ConfigArgs),
    /// Export sequences to FASTA with hard-wrapped residue lines.
    Export(ExportArgs),
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the resolved configuration XML to stdout.
    Show(ConfigResolveArgs),
    /// Write the resolved configuration XML to a file.
    Write(ConfigWriteArgs),
}

/// Flags shared by the `config` subcommands.
///
/// The directory flags feed the property-override tier of the resolution
/// chain, so they still go through the existing-and-writable validation; the
/// remaining flags mutate the resolved configuration directly.
#[derive(Args, Debug)]
pub struct ConfigResolveArgs {
    /// Directory of the local PDB mirror (overrides the PDB_DIR environment variable).
    #[arg(long, value_name = "DIR")]
    pub pdb_dir: Option<String>,

    /// Directory for derived data (overrides the CACHE_DIR environment variable).
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<String>,

    /// Do not fetch missing structure files automatically.
    #[arg(long)]
    pub no_autofetch: bool,

    /// Store structure files flat instead of split into subdirectories.
    #[arg(long)]
    pub no_split: bool,

    /// File format of cached structures ('PDB' or 'mmCif').
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<FileFormat>,
}

#[derive(Args, Debug)]
pub struct ConfigWriteArgs {
    #[command(flatten)]
    pub resolve: ConfigResolveArgs,

    /// Path of the XML file to write.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Input file with one `id<TAB>residues` record per line; stdin when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output FASTA file; stdout when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Column width for wrapped residue lines.
    #[arg(short, long, default_value_t = structal::core::io::fasta::DEFAULT_LINE_LENGTH, value_name = "NUM")]
    pub line_length: usize,
}
