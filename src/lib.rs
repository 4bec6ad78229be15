//! Create or remove a `Projects` directory and its project type folders.

pub mod actuator;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod io;
pub mod prompt;

pub use error::{ProjectsError, Result};
