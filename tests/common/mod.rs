//! Common test utilities and helpers
#![allow(dead_code)]

use std::any::Any;

use sweet_try::throw;

/// Error type raised by the helpers below
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestError(pub String);

impl TestError {
    pub fn new(message: &str) -> Self {
        TestError(message.to_string())
    }
}

/// Synchronous computation that always throws `error`
pub fn fail_with<E: Any + Send>(error: E) -> i32 {
    throw(error)
}

/// Future that throws `error` on its first poll
pub async fn reject_with<E: Any + Send>(error: E) -> i32 {
    tokio::task::yield_now().await;
    throw(error)
}

/// Future that settles with `value` after yielding once
pub async fn resolve_with<T>(value: T) -> T {
    tokio::task::yield_now().await;
    value
}

/// Initialize test logging if needed
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("sweet_try=debug")
        .with_test_writer()
        .try_init();
}
