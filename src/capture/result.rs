use super::Failure;

/// Outcome of a captured computation: `Ok(value)` or `Err(Failure)`.
pub type Captured<T> = Result<T, Failure>;

/// Positional view of a [`Captured`] value.
///
/// Yields `(Some(error), None)` on failure and `(None, Some(value))` on
/// success.
pub trait IntoPair<T> {
    fn into_pair(self) -> (Option<Failure>, Option<T>);
}

impl<T> IntoPair<T> for Captured<T> {
    fn into_pair(self) -> (Option<Failure>, Option<T>) {
        match self {
            Ok(value) => (None, Some(value)),
            Err(failure) => (Some(failure), None),
        }
    }
}
