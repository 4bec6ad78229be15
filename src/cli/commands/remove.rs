use super::{base_path_question, CommandHandler};
use crate::actuator::{self, DirectoryChange, ProjectsLayout, RemoveReport};
use crate::catalog::Catalog;
use crate::cli::output;
use crate::prompt::Prompter;
use crate::Result;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// What a remove run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The whole `Projects` tree was targeted
    WholeTree {
        layout: ProjectsLayout,
        change: DirectoryChange,
    },
    /// Only the chosen project type folders were targeted
    Selected {
        layout: ProjectsLayout,
        report: RemoveReport,
    },
}

/// Handler for `--remove`
pub struct RemoveCommand<P, W> {
    catalog: Catalog,
    prompter: P,
    out: W,
    default_base: PathBuf,
}

impl<P: Prompter, W: Write> RemoveCommand<P, W> {
    pub fn new(catalog: Catalog, prompter: P, out: W, default_base: PathBuf) -> Self {
        Self {
            catalog,
            prompter,
            out,
            default_base,
        }
    }

    /// Ask for the base path, then delete either everything or the chosen
    /// folders
    pub fn run(&mut self) -> Result<RemoveOutcome> {
        let base = self
            .prompter
            .ask_path(&base_path_question(), &self.default_base)?;
        let layout = ProjectsLayout::new(base);

        let whole_tree = self.prompter.ask_confirm(
            &format!("Delete the entire {} directory?", output::projects_label()),
            false,
        )?;
        info!(projects_dir = %layout.projects_dir.display(), whole_tree, "Remove flow started");

        if whole_tree {
            let change = actuator::remove_root(&layout.projects_dir)?;
            match change {
                DirectoryChange::Changed => output::print_root_deleted(&mut self.out, &layout.projects_dir)?,
                DirectoryChange::Unchanged => output::print_root_missing(&mut self.out, &layout.projects_dir)?,
            }
            return Ok(RemoveOutcome::WholeTree { layout, change });
        }

        let selection = self
            .prompter
            .ask_multi_select("Select project types to delete:", &self.catalog)?;

        output::print_location(&mut self.out, &layout.projects_dir)?;
        let report = actuator::remove_directories(&layout.projects_dir, selection.iter())?;
        output::print_remove_report(&mut self.out, &report)?;

        Ok(RemoveOutcome::Selected { layout, report })
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

impl<P: Prompter, W: Write> CommandHandler for RemoveCommand<P, W> {
    fn execute(&mut self) -> Result<()> {
        self.run().map(|_| ())
    }

    fn name(&self) -> &'static str {
        "remove"
    }
}
