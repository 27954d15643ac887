//! montepi CLI - Monte Carlo estimation of pi.

use std::process::ExitCode;

use montepi::cli::{run_cli, Args};

fn main() -> ExitCode {
    run_cli(Args::parse())
}
