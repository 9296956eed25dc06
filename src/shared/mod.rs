/// Shared kernel - Common utilities and error types
///
/// Types in this module are used across every layer of the crate.
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
