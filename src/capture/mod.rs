//! Invoke-and-capture and await-and-capture helpers.

pub mod failure;
pub mod result;
pub mod throw;
pub mod try_fn;
pub mod try_promise;

// Re-exports
pub use failure::*;
pub use result::*;
pub use throw::*;
pub use try_fn::*;
pub use try_promise::*;
