//! Rebuild Use Case
//!
//! One full pass over the template directory:
//! - list the directory and pick template files by name
//! - compile each one, keeping the previous form when compilation fails
//! - bundle the registry once and write it once
//!
//! The same use case also backs the one-shot `build` and `check` commands.

mod options;
mod report;
mod use_case;
mod writer;


pub use options::RebuildOptions;
pub use report::{CheckReport, RebuildReport, TemplateFailure};
pub use use_case::RebuildUseCase;
pub use writer::BundleWriter;
