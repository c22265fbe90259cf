use clap::Parser;
use std::io;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};
use userfile::api::perform;
use userfile::error::Result;

mod args;
use args::Cli;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        error!(error = %e, "operation failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.arguments().validate()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    perform(config, &mut out)
}

/// Logs go to stderr; stdout carries only operation output.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
