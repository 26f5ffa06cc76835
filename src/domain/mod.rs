//! Domain Layer
//!
//! Pure logic of the template pipeline without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Template files, compiled templates, the template registry
//! - `value_objects/` - Immutable value types (TemplateMatcher, Separator)
//! - `services/` - Domain services (Bundler)
//! - `ports/` - Interface definitions for infrastructure (FileSystem, TemplateCompiler)

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
