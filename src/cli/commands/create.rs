use super::{base_path_question, CommandHandler};
use crate::actuator::{self, CreateReport, DirectoryChange, ProjectsLayout};
use crate::catalog::Catalog;
use crate::cli::output;
use crate::prompt::Prompter;
use crate::Result;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// What a create run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOutcome {
    pub layout: ProjectsLayout,
    pub root: DirectoryChange,
    pub report: CreateReport,
}

/// Handler for `--create`
pub struct CreateCommand<P, W> {
    catalog: Catalog,
    prompter: P,
    out: W,
    default_base: PathBuf,
}

impl<P: Prompter, W: Write> CreateCommand<P, W> {
    pub fn new(catalog: Catalog, prompter: P, out: W, default_base: PathBuf) -> Self {
        Self {
            catalog,
            prompter,
            out,
            default_base,
        }
    }

    /// Ask for the base path, create `Projects`, then the chosen folders
    pub fn run(&mut self) -> Result<CreateOutcome> {
        let base = self
            .prompter
            .ask_path(&base_path_question(), &self.default_base)?;
        let layout = ProjectsLayout::new(base);
        info!(projects_dir = %layout.projects_dir.display(), "Create flow started");

        let root = actuator::ensure_root(&layout.projects_dir)?;
        match root {
            DirectoryChange::Changed => output::print_root_created(&mut self.out, &layout.projects_dir)?,
            DirectoryChange::Unchanged => output::print_root_exists(&mut self.out, &layout.projects_dir)?,
        }

        let selection = self
            .prompter
            .ask_multi_select("Select project types:", &self.catalog)?;

        output::print_location(&mut self.out, &layout.projects_dir)?;
        let report = actuator::ensure_directories(&layout.projects_dir, selection.iter())?;
        output::print_create_report(&mut self.out, &report)?;

        Ok(CreateOutcome { layout, root, report })
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

impl<P: Prompter, W: Write> CommandHandler for CreateCommand<P, W> {
    fn execute(&mut self) -> Result<()> {
        self.run().map(|_| ())
    }

    fn name(&self) -> &'static str {
        "create"
    }
}
