use anyhow::{bail, Context, Result};
use clap::Parser;
use flashprobe::cli::{Args, Command};
use flashprobe::report::{print_header, ListingReport};
use flashprobe::types::FileId;
use flashprobe::ProbeDir;
use std::io::Write;
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    if let Err(e) = args.validate() {
        bail!("Invalid arguments: {}", e);
    }

    let dir = ProbeDir::new(args.dir());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &args.command {
        Command::List { start_at, json, .. } => {
            let threshold = args.start_at();
            if let (Some(value), None) = (start_at, threshold) {
                warn!("ignoring --start-at={value}, listing every probe file");
            }

            let set = dir
                .list(threshold)
                .with_context(|| format!("Failed to list {}", dir.path().display()))?;
            let report = ListingReport::build(&dir, &set, threshold)
                .context("Failed to build listing report")?;

            if *json {
                writeln!(out, "{}", report.to_json()?)?;
            } else {
                print_header(&mut out, "list")?;
                report.write_text(&mut out)?;
            }
        }
        Command::Path { number, .. } => {
            let probe = dir.path_for(FileId::new(number - 1))?;
            writeln!(out, "{}", probe.path().display())?;
        }
    }

    Ok(())
}

fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("flashprobe=debug,warn")
        } else {
            EnvFilter::new("flashprobe=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
