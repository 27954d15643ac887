//! CLI argument parsing.
//!
//! Hand-rolled parser that accepts any iterator of strings, not just
//! `std::env::args()`, to enable testing of the parsing logic.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Flag overrides applied on top of the loaded configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOverrides {
    /// Override the configured seed.
    pub seed: Option<u64>,
    /// Override the smallest sample size.
    pub min_samples: Option<u64>,
    /// Override the largest sample size.
    pub max_samples: Option<u64>,
    /// Override the number of sweep points.
    pub points: Option<usize>,
    /// Override the chart destination.
    pub output_path: Option<PathBuf>,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run a convergence sweep
    Run {
        /// Optional path to a YAML configuration file.
        config_path: Option<PathBuf>,
        /// Flag overrides.
        overrides: RunOverrides,
        /// Enable verbose output.
        verbose: bool,
    },
    /// Show help
    Help,
    /// Show version
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Internal parsing from a vector of strings.
    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Run {
                    config_path: None,
                    overrides: RunOverrides::default(),
                    verbose: false,
                },
            };
        }

        let command = match args[1].as_str() {
            "run" => Self::parse_run_command(args),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    /// Parse the 'run' command arguments.
    fn parse_run_command(args: &[String]) -> Command {
        let mut config_path = None;
        let mut overrides = RunOverrides::default();
        let mut verbose = false;

        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    overrides.seed = Self::parse_value(args, i);
                    i += 2;
                }
                "--min-n" => {
                    overrides.min_samples = Self::parse_value(args, i);
                    i += 2;
                }
                "--max-n" => {
                    overrides.max_samples = Self::parse_value(args, i);
                    i += 2;
                }
                "--points" => {
                    overrides.points = Self::parse_value(args, i);
                    i += 2;
                }
                "--output" => {
                    if i + 1 < args.len() {
                        overrides.output_path = Some(PathBuf::from(&args[i + 1]));
                    }
                    i += 2;
                }
                "-v" | "--verbose" => {
                    verbose = true;
                    i += 1;
                }
                value if !value.starts_with('-') && config_path.is_none() => {
                    config_path = Some(PathBuf::from(value));
                    i += 1;
                }
                unknown => {
                    eprintln!("Ignoring unknown flag: {unknown}");
                    i += 1;
                }
            }
        }

        Command::Run {
            config_path,
            overrides,
            verbose,
        }
    }

    /// Parse the value following a flag at index `i`, if present.
    fn parse_value<T: std::str::FromStr>(args: &[String], i: usize) -> Option<T> {
        args.get(i + 1).and_then(|v| v.parse().ok())
    }
}
