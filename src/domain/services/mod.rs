//! Domain Services
//!
//! Pure services that operate on domain entities.

mod bundler;

pub use bundler::Bundler;
