use super::answers::{parse_confirm, parse_selection};
use super::Prompter;
use crate::catalog::format::render_choice;
use crate::catalog::{Catalog, Selection};
use crate::io::paths::{display_path, resolve_base_path};
use crate::{ProjectsError, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Line-based prompter over any reader/writer pair
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter bound to the process stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output, mostly for inspecting what was printed
    pub fn into_output(self) -> W {
        self.output
    }

    fn question(&mut self, message: &str, hint: &str) -> Result<String> {
        write!(self.output, "{} {} {} ", "?".green(), message.bold(), hint.bright_black())?;
        self.output.flush()?;
        self.read_answer()
    }

    fn read_answer(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(ProjectsError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the question was answered",
            )));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn print_choices(&mut self, catalog: &Catalog) -> Result<()> {
        let width = catalog.len().to_string().len();
        let indent = " ".repeat(width + 4);
        for (i, project_type) in catalog.iter().enumerate() {
            writeln!(
                self.output,
                "  {:>width$}) {}",
                i + 1,
                render_choice(project_type, &indent),
                width = width
            )?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask_path(&mut self, message: &str, default: &Path) -> Result<PathBuf> {
        let hint = format!("({})", display_path(default));
        let answer = self.question(message, &hint)?;
        let path = resolve_base_path(&answer, default);
        debug!(path = %path.display(), "Base path answered");
        Ok(path)
    }

    fn ask_multi_select(&mut self, message: &str, choices: &Catalog) -> Result<Selection> {
        writeln!(self.output, "{} {}", "?".green(), message.bold())?;
        self.print_choices(choices)?;

        loop {
            let answer = self.question(
                "Choose",
                "(numbers, ranges like 2-4, names or 'all', separated by commas or spaces)",
            )?;
            match parse_selection(&answer, choices) {
                Ok(selection) => {
                    debug!(count = selection.len(), "Project types selected");
                    return Ok(selection);
                }
                Err(ProjectsError::Validation(message)) => {
                    writeln!(self.output, "  {}", message.bright_red())?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn ask_confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        let hint = if default { "(Y/n)" } else { "(y/N)" };
        loop {
            let answer = self.question(message, hint)?;
            match parse_confirm(&answer, default) {
                Some(confirmed) => return Ok(confirmed),
                None => writeln!(self.output, "  {}", "Please answer y or n.".bright_red())?,
            }
        }
    }
}
