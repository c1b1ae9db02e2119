//! Conditional logging macros.
//!
//! With the `tracing` feature this re-exports `tracing::trace`. Without it the
//! macro expands to nothing, so hot query paths pay no cost.

#[cfg(feature = "tracing")]
pub(crate) use tracing::trace;

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use crate::trace;
