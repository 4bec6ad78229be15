pub mod create;
pub mod remove;

#[cfg(test)]
pub(crate) mod testing;

pub use create::CreateCommand;
pub use remove::RemoveCommand;

use crate::Result;

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command
    fn execute(&mut self) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Question asked first by both flows
pub(crate) fn base_path_question() -> String {
    format!(
        "Enter the path where your {} directory is:",
        super::output::projects_label()
    )
}
