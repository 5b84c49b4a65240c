//! `coursegen` - scaffold MyST course sites from a JSON course plan

use clap::Parser;

use coursegen::cli::args::Cli;
use coursegen::cli::commands;
use coursegen::error::ExitCode;
use coursegen::observability::init_logging;

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
