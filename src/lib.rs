//! Capture unwinding computations as values.
//!
//! [`try_fn`] runs a closure, [`try_fn_async`] runs a closure that returns a
//! future, and [`try_promise`] awaits a future you already have. Each hands
//! back a [`Captured`] value instead of letting an unwind escape:
//!
//! ```
//! use sweet_try::{try_fn, IntoPair};
//!
//! let (err, value) = try_fn(|| "42".parse::<i32>()).into_pair();
//! assert!(err.is_none());
//! assert_eq!(value.and_then(Result::ok), Some(42));
//! ```
//!
//! Capturing needs `panic = "unwind"`. Under `panic = "abort"` the process
//! ends before anything can be captured.

pub mod capture;
mod macros;

pub use capture::*;
