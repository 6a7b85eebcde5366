use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dotconf::{DotconfArgs, DotconfError, ops, tool_config};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(DotconfArgs::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("dotconf: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: DotconfArgs) -> Result<(), DotconfError> {
    let defaults = tool_config::load()?;
    let result = ops::handle(args.into_action(&defaults))?;
    println!("{result}");
    Ok(())
}
