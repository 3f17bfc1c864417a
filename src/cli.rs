// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `driplaunch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "driplaunch",
    version,
    about = "Launch programs from a folder one at a time on a fixed interval.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the settings file (TOML).
    ///
    /// Default: `Driplaunch.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Driplaunch.toml")]
    pub config: String,

    /// Folder to scan for launchable programs (overrides the settings file).
    #[arg(long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Seconds to wait between launches (overrides the settings file).
    #[arg(long, value_name = "SECS")]
    pub interval: Option<u64>,

    /// Also launch `.lnk` shortcuts, after all executables.
    ///
    /// This can only enable shortcut launching; a settings file with
    /// `shortcuts_enabled = true` stays enabled when the flag is absent.
    #[arg(long)]
    pub shortcuts: bool,

    /// Print the programs that would be launched, then exit.
    #[arg(long)]
    pub list: bool,

    /// Persist the merged settings back to the settings file before running.
    #[arg(long)]
    pub save: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DRIPLAUNCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
