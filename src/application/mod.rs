//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `RebuildUseCase` - Rescan, compile, bundle and write (also backs `build` and `check`)
//! - `WatchUseCase` - Rebuild on every template change

pub mod rebuild;
pub mod watch;

pub use rebuild::{
    BundleWriter, CheckReport, RebuildOptions, RebuildReport, RebuildUseCase, TemplateFailure,
};
pub use watch::{is_relevant_event, WatchEvent, WatchOptions, WatchUseCase, POLL_INTERVAL_MS};
