//! Command-line argument parsing for blogdeck.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use std::path::PathBuf;

use thiserror::Error;

/// Port the fixture server listens on when `--port` is not given.
pub const DEFAULT_SERVE_PORT: u16 = 3001;

/// Options for `blogdeck serve`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeOptions {
    pub port: u16,
    /// json-server style `db.json` to seed the store from
    pub data: Option<PathBuf>,
}

impl Default for ServeOptions {
    fn default() -> Self {
        Self {
            port: DEFAULT_SERVE_PORT,
            data: None,
        }
    }
}

/// Options for the TUI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TuiOptions {
    /// Overrides the configured API base URL
    pub base_url: Option<String>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the fixture API server
    Serve(ServeOptions),
    /// Run the TUI application (default)
    RunTui(TuiOptions),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid port '{0}'")]
    InvalidPort(String),

    #[error("unrecognized argument '{0}'")]
    Unknown(String),
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Examples
///
/// ```
/// use blogdeck::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["blogdeck".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    let mut args = args.skip(1).peekable();

    if args.peek().map(String::as_str) == Some("serve") {
        args.next();
        return parse_serve(args);
    }

    let mut options = TuiOptions::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--base-url" => options.base_url = Some(value_for(&arg, args.next())?),
            _ => {
                if let Some(url) = arg.strip_prefix("--base-url=") {
                    options.base_url = Some(url.to_string());
                } else {
                    return Err(ArgsError::Unknown(arg));
                }
            }
        }
    }
    Ok(CliCommand::RunTui(options))
}

fn parse_serve<I>(mut args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut options = ServeOptions::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--port" | "-p" => {
                let value = value_for(&arg, args.next())?;
                options.port = parse_port(&value)?;
            }
            "--data" | "-d" => {
                options.data = Some(PathBuf::from(value_for(&arg, args.next())?));
            }
            _ => return Err(ArgsError::Unknown(arg)),
        }
    }
    Ok(CliCommand::Serve(options))
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, ArgsError> {
    match value {
        Some(value) if !value.starts_with('-') => Ok(value),
        _ => Err(ArgsError::MissingValue(flag.to_string())),
    }
}

fn parse_port(value: &str) -> Result<u16, ArgsError> {
    value
        .parse()
        .map_err(|_| ArgsError::InvalidPort(value.to_string()))
}
