use std::any::Any;
use std::panic;

/// Unwind with `error` as the payload.
///
/// Goes through `resume_unwind`, so the panic hook does not run and nothing is
/// printed. `throw(())` raises a nullish payload.
pub fn throw<E: Any + Send>(error: E) -> ! {
    panic::resume_unwind(Box::new(error))
}
