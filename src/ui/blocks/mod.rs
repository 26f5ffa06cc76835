pub mod error;
pub mod header;
