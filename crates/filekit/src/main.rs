mod cli; // Declare the cli module

use std::process::ExitCode;

use clap::Parser;
use log::debug;

use cli::{CliArgs, run};

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    // RUST_LOG wins over the default filter when set
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();
}

fn main() -> ExitCode {
    // Parse command-line arguments
    let args = CliArgs::parse();
    init_logging(args.verbose);
    debug!("Parsed args: {:?}", args);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("filekit: {}", e);
            ExitCode::FAILURE
        }
    }
}
