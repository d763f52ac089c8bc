//! Binary entrypoint for the `pgmod` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    pgmod::logging::init_from_env();

    match pgmod::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
