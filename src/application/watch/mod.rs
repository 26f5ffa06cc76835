//! Watch Use Case
//!
//! Continuous rebuilds of the template bundle:
//! - File system monitoring (via `notify` crate)
//! - A full rebuild on every relevant change, no debouncing
//! - Rebuilds run one at a time on the watch loop thread
//!
//! ## Usage
//!
//! ```ignore
//! let options = WatchOptions::new(RebuildOptions::from_config(&config));
//! let mut use_case = WatchUseCase::new(LocalFs::new(), DustCompiler::new(), options);
//! use_case.start(running, |event| { ... })?;
//! ```

mod event;
mod use_case;

#[cfg(test)]
mod tests;

pub use event::{WatchEvent, WatchOptions, POLL_INTERVAL_MS};
pub use use_case::{is_relevant_event, WatchUseCase};
