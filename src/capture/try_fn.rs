use std::future::Future;
use std::panic::{catch_unwind, AssertUnwindSafe};

use futures::FutureExt;
use tracing::{debug, trace};

use super::{Captured, Failure};

/// Call `f` once, turning a synchronous unwind into a failure.
///
/// Shared by both entry points. A nullish payload becomes [`NullishError`].
///
/// [`NullishError`]: super::NullishError
fn invoke<F, R>(f: F, operation: &'static str) -> Captured<R>
where
    F: FnOnce() -> R,
{
    catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let failure = Failure::substituting_nullish(payload, operation);
        debug!(operation, error = %failure, "callable unwound");
        failure
    })
}

/// Run a synchronous callable and capture its outcome.
///
/// ```
/// use sweet_try::{throw, try_fn};
///
/// assert_eq!(try_fn(|| 42).ok(), Some(42));
///
/// let failed = try_fn(|| -> i32 { throw("x") });
/// assert_eq!(failed.unwrap_err().message(), Some("x"));
/// ```
pub fn try_fn<F, T>(f: F) -> Captured<T>
where
    F: FnOnce() -> T,
{
    invoke(f, "try_fn")
}

/// Run a callable that returns a future and capture the outcome of both.
///
/// `f` is called right away. If the call itself unwinds the returned future
/// is already settled with that failure. Otherwise it drives the returned
/// future and captures an unwind raised while polling it. That payload is kept
/// raw: a unit payload stays `()` here, unlike in [`try_fn`] and
/// [`try_promise`](super::try_promise).
pub fn try_fn_async<F, Fut>(f: F) -> impl Future<Output = Captured<Fut::Output>>
where
    F: FnOnce() -> Fut,
    Fut: Future,
{
    let invoked = invoke(f, "try_fn_async");
    async move {
        let future = match invoked {
            Ok(future) => future,
            Err(failure) => return Err(failure),
        };
        trace!(operation = "try_fn_async", "awaiting returned future");
        AssertUnwindSafe(future).catch_unwind().await.map_err(|payload| {
            let failure = Failure::from_payload(payload);
            debug!(operation = "try_fn_async", error = %failure, "future unwound");
            failure
        })
    }
}
