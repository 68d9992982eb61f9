//! entrain-plot - render one diagnostic chart and exit

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use entrain_plot::chart::backend;
use entrain_plot::render_to_file;
use tracing::Level;

mod cli;

use cli::Cli;

/// Exit status when the text/raster backend cannot be set up
const EXIT_BACKEND_UNAVAILABLE: u8 = 2;

fn main() -> ExitCode {
    if let Err(e) = backend::init() {
        eprintln!("Plot backend unavailable: {}", e);
        return ExitCode::from(EXIT_BACKEND_UNAVAILABLE);
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let text = e.to_string();
            let line = text.lines().next().unwrap_or_default();
            eprintln!("Plot backend failed: {}", line.trim_start_matches("error: "));
            return ExitCode::FAILURE;
        }
    };

    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Plot backend failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let (request, out) = cli.command.into_request();
    let chart = render_to_file(&request, &out)
        .with_context(|| format!("{} chart", request.mode_name()))?;
    tracing::info!(
        path = %out.display(),
        width = chart.width,
        height = chart.height,
        "chart written"
    );
    Ok(())
}
