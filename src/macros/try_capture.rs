/// Block syntax for [`try_fn`](crate::try_fn) and
/// [`try_fn_async`](crate::try_fn_async).
///
/// ```
/// use sweet_try::{throw, try_capture};
///
/// let ok = try_capture!({ 1 + 1 });
/// assert_eq!(ok.ok(), Some(2));
///
/// let failed = try_capture!({
///     if ok_to_fail() {
///         throw("nope");
///     }
///     0
/// });
/// assert!(failed.is_err());
///
/// fn ok_to_fail() -> bool { true }
/// ```
#[macro_export]
macro_rules! try_capture {
    (async move { $($body:tt)* }) => {{
        $crate::try_fn_async(move || async move { $($body)* })
    }};
    ({ $($body:tt)* }) => {{
        $crate::try_fn(|| { $($body)* })
    }};
}
