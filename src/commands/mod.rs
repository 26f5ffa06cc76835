//! Command handlers for the formpack binary

pub mod build;
pub mod check;
mod setup;
pub mod watch;
