pub mod app;
pub mod commands;
pub mod output;
#[cfg(feature = "tui")]
pub mod tui;

pub use app::{Cli, LogLevel, Mode};

use std::io;
use tracing::info;

use crate::catalog::load_catalog;
use crate::io::paths::current_dir_or_dot;
use crate::prompt::{LinePrompter, Prompter};
use crate::Result;
use commands::{CommandHandler, CreateCommand, RemoveCommand};

/// Dispatch a parsed command line to its flow
pub fn run(cli: &Cli) -> Result<()> {
    let mut command: Box<dyn CommandHandler> = match cli.mode() {
        Mode::Usage => return output::print_usage(&mut io::stdout()),
        Mode::Create => Box::new(CreateCommand::new(
            load_catalog(cli.catalog.clone())?,
            interactive_prompter(),
            io::stdout(),
            current_dir_or_dot(),
        )),
        Mode::Remove => Box::new(RemoveCommand::new(
            load_catalog(cli.catalog.clone())?,
            interactive_prompter(),
            io::stdout(),
            current_dir_or_dot(),
        )),
    };

    info!(command = command.name(), "Running command");
    command.execute()
}

/// Stdin/stdout prompter, with the checklist when built with `tui` and
/// attached to a terminal
pub fn interactive_prompter() -> Box<dyn Prompter> {
    #[cfg(feature = "tui")]
    {
        use std::io::IsTerminal;
        if io::stdin().is_terminal() && io::stdout().is_terminal() {
            return Box::new(tui::TuiPrompter::new(LinePrompter::stdio()));
        }
    }
    Box::new(LinePrompter::stdio())
}
