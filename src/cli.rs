use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the forensicx snapshot tool.
///
/// A single invocation collects one snapshot and writes the three report
/// artifacts; there are no subcommands.
#[derive(Parser, Debug)]
#[clap(name = "forensicx", about = "One-shot host forensic snapshot and reporting tool")]
pub struct Args {
    /// Report directory (default: ForensicX_Report)
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Bundle archive path (default: ForensicX_Complete_Report.zip)
    #[clap(short, long)]
    pub bundle: Option<PathBuf>,

    /// Path to configuration YAML file
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Skip screen capture; the report records the failure sentinel instead
    #[clap(long)]
    pub skip_screenshot: bool,

    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,
}
