//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure and the compiler provide concrete implementations.

pub mod file_system;
pub mod template_compiler;

pub use file_system::{FileSystem, FsError, FsResult};
pub use template_compiler::TemplateCompiler;
