//! CLI output formatting.

use crate::series::ResultSeries;

/// Print version information.
pub fn print_version() {
    println!("montepi {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message.
pub fn print_help() {
    println!(
        r"montepi - Monte Carlo estimation of pi

USAGE:
    montepi [run] [sweep.yaml] [OPTIONS]

COMMANDS:
    run [sweep.yaml]    Run a convergence sweep (default command)
        --seed <N>      Override the configured seed
        --min-n <N>     Smallest sample size (default: 10)
        --max-n <N>     Largest sample size (default: 100000)
        --points <N>    Number of sample sizes to test (default: 40)
        --output <PATH> Chart destination (default: estimation_of_pi.png)
        -v, --verbose   Enable verbose output

    help                Show this help message
    version             Show version information

EXAMPLES:
    montepi
    montepi run --min-n 10 --max-n 100000 --points 5
    montepi run sweep.yaml --seed 12345 --output charts/pi.png
"
    );
}

/// Print one legible line per sweep record.
pub fn print_series(series: &ResultSeries) {
    for record in series {
        println!(
            "n = {:>8}  estimate = {:.6}  |error| = {:.6}",
            record.samples, record.estimate, record.deviation
        );
    }
}
