//! Optional tracing integration.
//!
//! With the `tracing-integration` feature the logging macros used across the
//! crate are `tracing`'s own. Without it they still borrow every field value,
//! so bindings that only feed a log line stay used, but nothing is recorded.
//!
//! Log events never include K1 secret bytes.

#[cfg(feature = "tracing-integration")]
pub use tracing::{debug, trace};

#[cfg(not(feature = "tracing-integration"))]
mod noop {
    /// Borrows each `key = value` field of a tracing call and drops it.
    macro_rules! noop_fields {
        () => {};
        ($msg:literal $(,)?) => {};
        ($key:ident = % $val:expr $(, $($rest:tt)*)?) => {
            let _ = &$val;
            $( $crate::tracing_compat::noop_fields!($($rest)*); )?
        };
        ($key:ident = ? $val:expr $(, $($rest:tt)*)?) => {
            let _ = &$val;
            $( $crate::tracing_compat::noop_fields!($($rest)*); )?
        };
        ($key:ident = $val:expr $(, $($rest:tt)*)?) => {
            let _ = &$val;
            $( $crate::tracing_compat::noop_fields!($($rest)*); )?
        };
    }

    macro_rules! trace {
        ($($arg:tt)*) => {{
            $crate::tracing_compat::noop_fields!($($arg)*);
        }};
    }

    macro_rules! debug {
        ($($arg:tt)*) => {{
            $crate::tracing_compat::noop_fields!($($arg)*);
        }};
    }

    pub(crate) use {debug, noop_fields, trace};
}

#[cfg(not(feature = "tracing-integration"))]
pub(crate) use noop::{debug, noop_fields, trace};
