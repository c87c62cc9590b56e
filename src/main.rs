use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use forensicx::cli::Args;
use forensicx::config::ReportConfig;
use forensicx::pipeline;
use forensicx::probes::Probes;

fn main() -> Result<()> {
    let args = Args::parse();

    initialize_logging(args.verbose)?;

    info!("Starting forensic snapshot collection");

    let config = load_and_process_config(&args)?;
    let artifacts = pipeline::run(&config, Probes::host())?;

    println!("[+] JSON Report: {}", artifacts.json_path.display());
    println!("[+] PDF Report: {}", artifacts.pdf_path.display());
    println!("[+] Full ZIP Report: {}", artifacts.bundle_path.display());

    info!("Forensic snapshot completed successfully");
    Ok(())
}

/// Initialize logging with the specified verbosity level
fn initialize_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;
    Ok(())
}

/// Load configuration, apply CLI overrides, and expand path variables
fn load_and_process_config(args: &Args) -> Result<ReportConfig> {
    let mut config = ReportConfig::load_or_default(args.config.as_deref())?;

    if let Some(output) = &args.output {
        config.report_dir = output.clone();
    }
    if let Some(bundle) = &args.bundle {
        config.bundle_path = bundle.clone();
    }
    if args.skip_screenshot {
        config.skip_screenshot = true;
    }

    config.expand_paths();
    Ok(config)
}
