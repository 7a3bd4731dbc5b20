use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tracing::{debug, trace};

use super::{Captured, Failure};

/// Await an existing future and capture its outcome.
///
/// An unwind raised while polling becomes a failure; a unit payload is
/// replaced with [`NullishError`](super::NullishError).
pub async fn try_promise<Fut>(future: Fut) -> Captured<Fut::Output>
where
    Fut: Future,
{
    trace!(operation = "try_promise", "awaiting future");
    AssertUnwindSafe(future).catch_unwind().await.map_err(|payload| {
        let failure = Failure::substituting_nullish(payload, "try_promise");
        debug!(operation = "try_promise", error = %failure, "future unwound");
        failure
    })
}
