//! Domain Entities
//!
//! - `TemplateFile` - A template source read from disk during a rescan
//! - `CompiledTemplate` - The registered JavaScript form of one template
//! - `TemplateRegistry` - Latest compiled form of every known template

mod registry;
mod template;

pub use registry::TemplateRegistry;
pub use template::{CompiledTemplate, TemplateFile};
