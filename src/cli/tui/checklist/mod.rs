//! Checkbox list used for picking project types
pub mod app;
pub mod state;
pub mod theme;

use crate::catalog::{Catalog, Selection};
use crate::Result;

/// Run the checklist and return the checked project types
pub fn run(title: &str, catalog: &Catalog) -> Result<Selection> {
    app::ChecklistApp::new(title, catalog).run()
}
