//! formpack - template bundle compiler and watcher
//!
//! formpack watches a directory of Dust templates (`<name>.form`), compiles
//! each one to its JavaScript registration form, and writes every compiled
//! template into a single bundle the browser loads.
//!
//! ## Layout
//!
//! - [`domain`] - registry, bundler, matching rules and ports
//! - [`compiler`] - the Dust compiler behind the `TemplateCompiler` port
//! - [`application`] - rebuild and watch use cases
//! - [`infrastructure`] - local file system
//! - [`config`] - `formpack.toml` and `FORMPACK_*` overrides

pub mod application;
pub mod compiler;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    RebuildOptions, RebuildReport, RebuildUseCase, WatchEvent, WatchOptions, WatchUseCase,
};
pub use compiler::{CompileError, DustCompiler};
pub use config::Config;
pub use error::{FormpackError, FormpackResult};
pub use infrastructure::LocalFs;
