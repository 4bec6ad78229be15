use clap::{ArgGroup, Parser, ValueEnum};
use std::path::PathBuf;

/// projects-directory: set up or tear down a Projects folder
#[derive(Parser, Debug)]
#[command(name = "projects-directory")]
#[command(version)]
#[command(about = "Creates or removes a Projects directory with project type folders")]
#[command(
    long_about = "Prompts for a base path, then creates or removes <path>/Projects and the project type folders you pick from a checklist."
)]
#[command(group(ArgGroup::new("mode").args(["create", "remove"])))]
pub struct Cli {
    /// Creates the projects directory and project type folders
    #[arg(short, long)]
    pub create: bool,

    /// Removes the projects directory or selected project type folders
    #[arg(short, long)]
    pub remove: bool,

    /// Project type definition file (JSON or YAML) replacing the bundled list
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Log level for diagnostics written to stderr
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Which flow a parsed command line selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Remove,
    Usage,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.create {
            Mode::Create
        } else if self.remove {
            Mode::Remove
        } else {
            Mode::Usage
        }
    }
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// One-line message for a command line parsing failure
pub fn parse_error_message(error: &clap::Error) -> String {
    let rendered = error.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).trim().to_string()
}
