//! Status lines and usage text

use colored::Colorize;
use std::io::Write;
use std::path::Path;

use crate::actuator::{CreateReport, RemoveReport};
use crate::Result;

pub const BIN_NAME: &str = "projects-directory";

/// The usage message shown for no flags and after any error
pub fn usage_text() -> String {
    format!(
        "{}\n  {}\tCreates the projects directory and project type folders\n  {}\tRemoves the projects directory or selected project type folders",
        format!("{} [CMD]", BIN_NAME).bright_white(),
        format!("--create {} -c", "or".bright_black()).bright_green(),
        format!("--remove {} -r", "or".bright_black()).bright_green(),
    )
}

pub fn print_usage<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", usage_text())?;
    Ok(())
}

/// `Error: <message>` line printed before the usage text
pub fn print_error<W: Write>(out: &mut W, message: &str) -> Result<()> {
    writeln!(out, "{}", format!("Error: {}", message).bright_yellow())?;
    Ok(())
}

pub fn projects_label() -> String {
    "Projects".on_bright_black().to_string()
}

fn underlined(path: &Path) -> String {
    path.display().to_string().underline().to_string()
}

pub fn print_root_created<W: Write>(out: &mut W, projects_dir: &Path) -> Result<()> {
    writeln!(
        out,
        "{} {}",
        format!("+ Created {} directory at:", "Projects".bold()).bright_green(),
        underlined(projects_dir)
    )?;
    Ok(())
}

pub fn print_root_exists<W: Write>(out: &mut W, projects_dir: &Path) -> Result<()> {
    writeln!(
        out,
        "{} {}",
        "* Projects directory already exists at:".bright_yellow(),
        underlined(projects_dir)
    )?;
    Ok(())
}

pub fn print_root_deleted<W: Write>(out: &mut W, projects_dir: &Path) -> Result<()> {
    writeln!(
        out,
        "{} {}",
        format!("- Deleted entire {} directory at:", "Projects".bold()).bright_red(),
        underlined(projects_dir)
    )?;
    Ok(())
}

pub fn print_root_missing<W: Write>(out: &mut W, projects_dir: &Path) -> Result<()> {
    writeln!(
        out,
        "{}",
        format!("* Projects directory does not exist at {}", projects_dir.display()).bright_yellow()
    )?;
    Ok(())
}

/// `in <path>` line naming the directory the batch runs in
pub fn print_location<W: Write>(out: &mut W, projects_dir: &Path) -> Result<()> {
    writeln!(out, "in {}", projects_dir.display().to_string().bright_white())?;
    Ok(())
}

pub fn print_create_report<W: Write>(out: &mut W, report: &CreateReport) -> Result<()> {
    if !report.created.is_empty() {
        writeln!(out, "{} {}", "+ Created:".bright_green(), report.created.join(", "))?;
    }
    if !report.existed.is_empty() {
        writeln!(out, "{} {}", "* Already exists:".bright_yellow(), report.existed.join(", "))?;
    }
    Ok(())
}

pub fn print_remove_report<W: Write>(out: &mut W, report: &RemoveReport) -> Result<()> {
    if !report.deleted.is_empty() {
        writeln!(out, "{} {}", "- Deleted:".bright_red(), report.deleted.join(", "))?;
    }
    if !report.already_absent.is_empty() {
        writeln!(
            out,
            "{} {}",
            "* Already deleted:".bright_yellow(),
            report.already_absent.join(", ")
        )?;
    }
    Ok(())
}
