//! CLI command handlers.
//!
//! Execution logic for each command, separated from parsing so command
//! behavior can be tested directly.

use std::path::Path;
use std::process::ExitCode;

use crate::config::RunConfig;
use crate::driver;
use crate::error::PiResult;
use crate::report;

use super::args::RunOverrides;
use super::output::{print_help, print_series, print_version};
use super::{Args, Command};

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Run {
            config_path,
            overrides,
            verbose,
        } => run_sweep(config_path.as_deref(), &overrides, verbose),
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Run a convergence sweep, printing per-size estimates and rendering the
/// chart.
#[must_use]
pub fn run_sweep(config_path: Option<&Path>, overrides: &RunOverrides, verbose: bool) -> ExitCode {
    match execute_sweep(config_path, overrides, verbose) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn execute_sweep(
    config_path: Option<&Path>,
    overrides: &RunOverrides,
    verbose: bool,
) -> PiResult<()> {
    let config = load_config(config_path, overrides)?;

    if verbose {
        println!(
            "Sweeping {} sample sizes in [{}, {}] with seed {}",
            config.points, config.min_samples, config.max_samples, config.seed
        );
    }

    let series = driver::run(&config)?;
    print_series(&series);

    report::render_convergence(&series, &config.output_path)?;
    println!("Wrote convergence chart to {}", config.output_path.display());

    Ok(())
}

/// Load the configuration (file or defaults) and apply flag overrides.
fn load_config(config_path: Option<&Path>, overrides: &RunOverrides) -> PiResult<RunConfig> {
    let mut config = match config_path {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };

    if let Some(seed) = overrides.seed {
        config.seed = seed;
    }
    if let Some(min) = overrides.min_samples {
        config.min_samples = min;
    }
    if let Some(max) = overrides.max_samples {
        config.max_samples = max;
    }
    if let Some(points) = overrides.points {
        config.points = points;
    }
    if let Some(ref output_path) = overrides.output_path {
        config.output_path.clone_from(output_path);
    }

    config.validate_all()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PiError;
    use std::path::PathBuf;

    #[test]
    fn test_defaults_when_no_config_file() -> PiResult<()> {
        let config = load_config(None, &RunOverrides::default())?;
        assert_eq!(config, RunConfig::default());
        Ok(())
    }

    #[test]
    fn test_overrides_applied() -> PiResult<()> {
        let overrides = RunOverrides {
            seed: Some(9),
            min_samples: Some(20),
            max_samples: Some(2_000),
            points: Some(3),
            output_path: Some(PathBuf::from("custom.png")),
        };

        let config = load_config(None, &overrides)?;
        assert_eq!(config.seed, 9);
        assert_eq!(config.min_samples, 20);
        assert_eq!(config.max_samples, 2_000);
        assert_eq!(config.points, 3);
        assert_eq!(config.output_path, PathBuf::from("custom.png"));
        Ok(())
    }

    #[test]
    fn test_override_validation_failure() {
        let overrides = RunOverrides {
            min_samples: Some(5_000),
            max_samples: Some(50),
            ..RunOverrides::default()
        };

        assert!(matches!(
            load_config(None, &overrides),
            Err(PiError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let path = Path::new("/nonexistent-montepi/sweep.yaml");
        assert!(matches!(
            load_config(Some(path), &RunOverrides::default()),
            Err(PiError::Io(_))
        ));
    }
}
