pub mod config;
pub mod migrations;

use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Migrate {
        candidates: Vec<String>,
        config: Option<String>,
        stdin: bool,
    },
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    pub message: String,
}

pub fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Migrate {
            candidates,
            config,
            stdin,
        } => run_migrate(candidates, config, stdin),
        Command::Help => {
            print_help();
            Ok(())
        }
    }
}

pub fn run_from_env() -> Result<(), CliError> {
    let command = parse_args(env::args().skip(1))?;
    run(command)
}

/// Installs the stderr log subscriber. The filter comes from `IRONFRAME_LOG`
/// and defaults to `warn`.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("IRONFRAME_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .try_init();
}

pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut iter = args.into_iter();
    let Some(cmd) = iter.next() else {
        return Ok(Command::Help);
    };

    match cmd.as_str() {
        "migrate" => parse_migrate_args(iter.collect()),
        "-h" | "--help" | "help" => Ok(Command::Help),
        _ => Err(CliError {
            message: format!("unknown command: {}", cmd),
        }),
    }
}

fn parse_migrate_args(args: Vec<String>) -> Result<Command, CliError> {
    let mut candidates = Vec::new();
    let mut config = None;
    let mut stdin = false;
    let mut idx = 0;

    while idx < args.len() {
        match args[idx].as_str() {
            "--config" | "-c" => {
                idx += 1;
                if idx >= args.len() {
                    return Err(CliError {
                        message: "migrate requires a value for --config".to_string(),
                    });
                }
                config = Some(args[idx].clone());
            }
            "--stdin" => {
                stdin = true;
            }
            "--" => {
                candidates.extend(args[idx + 1..].iter().cloned());
                break;
            }
            value => {
                candidates.push(value.to_string());
            }
        }
        idx += 1;
    }

    if candidates.is_empty() && !stdin {
        return Err(CliError {
            message: "migrate requires at least one candidate or --stdin".to_string(),
        });
    }

    Ok(Command::Migrate {
        candidates,
        config,
        stdin,
    })
}

fn run_migrate(
    candidates: Vec<String>,
    config_path: Option<String>,
    stdin: bool,
) -> Result<(), CliError> {
    let user_config = match config_path {
        Some(path) => config::load(Path::new(&path)).map_err(|err| CliError {
            message: err.message,
        })?,
        None => config::UserConfig::default(),
    };
    let design_system = config::design_system(&user_config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for candidate in &candidates {
        let migrated = migrations::migrate_candidate(&design_system, &user_config, candidate);
        writeln!(out, "{}", migrated).map_err(write_error)?;
    }

    if stdin {
        let input = io::stdin();
        for line in input.lock().lines() {
            let line = line.map_err(|err| CliError {
                message: format!("failed to read stdin: {}", err),
            })?;
            let migrated = migrations::migrate_class_list(&design_system, &user_config, &line);
            writeln!(out, "{}", migrated).map_err(write_error)?;
        }
    }

    Ok(())
}

fn write_error(err: io::Error) -> CliError {
    CliError {
        message: format!("failed to write output: {}", err),
    }
}

fn print_help() {
    println!("ironframe-upgrade");
    println!();
    println!("USAGE:");
    println!("  ironframe-upgrade migrate [--config <path>] [--stdin] <candidate...>");
    println!();
    println!("EXAMPLES:");
    println!("  ironframe-upgrade migrate bg-gradient-to-r hover:bg-gradient-to-tl");
    println!("  ironframe-upgrade migrate -c ironframe.toml tw:bg-gradient-to-b");
    println!("  echo \"flex bg-gradient-to-r from-red-500\" | ironframe-upgrade migrate --stdin");
    println!();
    println!("ENVIRONMENT:");
    println!("  IRONFRAME_LOG  log filter, e.g. \"debug\" (default: warn)");
}

#[cfg(test)]
mod tests {
    use super::{Command, parse_args};

    #[test]
    fn no_arguments_prints_help() {
        let command = parse_args(Vec::<String>::new()).expect("empty args should parse");
        assert_eq!(command, Command::Help);

        let command = parse_args(vec!["--help".to_string()]).expect("help should parse");
        assert_eq!(command, Command::Help);
    }

    #[test]
    fn parse_migrate_collects_candidates_and_config() {
        let command = parse_args(vec![
            "migrate".to_string(),
            "-c".to_string(),
            "ironframe.toml".to_string(),
            "bg-gradient-to-r".to_string(),
            "hover:bg-gradient-to-t".to_string(),
        ])
        .expect("migrate args should parse");

        assert_eq!(
            command,
            Command::Migrate {
                candidates: vec![
                    "bg-gradient-to-r".to_string(),
                    "hover:bg-gradient-to-t".to_string(),
                ],
                config: Some("ironframe.toml".to_string()),
                stdin: false,
            }
        );
    }

    #[test]
    fn parse_migrate_accepts_stdin_without_candidates() {
        let command = parse_args(vec!["migrate".to_string(), "--stdin".to_string()])
            .expect("stdin flag should parse");
        assert_eq!(
            command,
            Command::Migrate {
                candidates: vec![],
                config: None,
                stdin: true,
            }
        );
    }

    #[test]
    fn parse_migrate_passes_dashed_candidates_after_separator() {
        let command = parse_args(vec![
            "migrate".to_string(),
            "--".to_string(),
            "--stdin".to_string(),
            "-m-4".to_string(),
        ])
        .expect("separator should parse");
        assert_eq!(
            command,
            Command::Migrate {
                candidates: vec!["--stdin".to_string(), "-m-4".to_string()],
                config: None,
                stdin: false,
            }
        );
    }

    #[test]
    fn parse_migrate_requires_input() {
        let err = parse_args(vec!["migrate".to_string()]).expect_err("should fail");
        assert_eq!(
            err.message,
            "migrate requires at least one candidate or --stdin"
        );
    }

    #[test]
    fn parse_migrate_requires_config_value() {
        let err = parse_args(vec!["migrate".to_string(), "--config".to_string()])
            .expect_err("should fail");
        assert_eq!(err.message, "migrate requires a value for --config");
    }

    #[test]
    fn unknown_command_is_an_error() {
        let err = parse_args(vec!["build".to_string()]).expect_err("should fail");
        assert_eq!(err.message, "unknown command: build");
    }
}
