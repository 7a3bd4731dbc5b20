use std::any::Any;
use std::fmt;

use thiserror::Error;
use tracing::debug;

/// Boxed unwind payload, as handed out by `catch_unwind`.
pub type Payload = Box<dyn Any + Send + 'static>;

/// Stands in for a nullish (`()`) unwind payload.
#[derive(Error, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[error("NULLISH_ERROR")]
pub struct NullishError;

impl NullishError {
    pub const MESSAGE: &'static str = "NULLISH_ERROR";
}

/// The error slot of a [`Captured`](super::Captured) value.
///
/// Holds whatever the computation unwound with. The payload type is open:
/// `panic!` messages arrive as `&'static str` or `String`, values raised with
/// [`throw`](super::throw) or `std::panic::panic_any` keep their own type.
pub struct Failure {
    payload: Payload,
}

impl Failure {
    /// Wrap an arbitrary error value.
    pub fn new<E: Any + Send>(error: E) -> Self {
        Self::from_payload(Box::new(error))
    }

    /// Wrap a payload as-is, nullish or not.
    pub fn from_payload(payload: Payload) -> Self {
        Self { payload }
    }

    /// Wrap a payload, replacing a nullish one with [`NullishError`].
    pub(crate) fn substituting_nullish(payload: Payload, operation: &'static str) -> Self {
        if payload.is::<()>() {
            debug!(operation, "substituting NULLISH_ERROR for unit payload");
            Self::new(NullishError)
        } else {
            Self::from_payload(payload)
        }
    }

    /// True when the payload is the unit value.
    ///
    /// Only failures produced by the async path of
    /// [`try_fn_async`](super::try_fn_async) can still carry one.
    pub fn is_nullish(&self) -> bool {
        self.payload.is::<()>()
    }

    pub fn is<E: Any>(&self) -> bool {
        self.payload.is::<E>()
    }

    pub fn downcast_ref<E: Any>(&self) -> Option<&E> {
        self.payload.downcast_ref::<E>()
    }

    pub fn downcast_mut<E: Any>(&mut self) -> Option<&mut E> {
        self.payload.downcast_mut::<E>()
    }

    /// Take the payload out as `E`, or get the failure back untouched.
    pub fn downcast<E: Any>(self) -> Result<E, Self> {
        match self.payload.downcast::<E>() {
            Ok(error) => Ok(*error),
            Err(payload) => Err(Self::from_payload(payload)),
        }
    }

    pub fn into_payload(self) -> Payload {
        self.payload
    }

    /// Text of the payload when it has one.
    ///
    /// Covers `panic!` messages (`&'static str` and `String`) and
    /// [`NullishError`]. Other payload types return `None`.
    pub fn message(&self) -> Option<&str> {
        if let Some(&message) = self.payload.downcast_ref::<&'static str>() {
            Some(message)
        } else if let Some(message) = self.payload.downcast_ref::<String>() {
            Some(message.as_str())
        } else if self.payload.is::<NullishError>() {
            Some(NullishError::MESSAGE)
        } else {
            None
        }
    }

    fn describe(&self) -> &str {
        match self.message() {
            Some(message) => message,
            None if self.is_nullish() => "()",
            None => "Box<dyn Any>",
        }
    }
}

impl From<NullishError> for Failure {
    fn from(error: NullishError) -> Self {
        Self::new(error)
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Failure").field(&self.describe()).finish()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

impl std::error::Error for Failure {}
