//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod separator;
mod template_matcher;

pub use separator::Separator;
pub use template_matcher::{TemplateMatcher, DEFAULT_EXTENSION, DEFAULT_SUPPRESS};
