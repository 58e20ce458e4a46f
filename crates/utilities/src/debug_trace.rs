/// Logs a trace message, but only when the `tally_debug-trace` feature is
/// enabled. Otherwise the arguments are type checked but never evaluated.
#[macro_export]
#[cfg(feature = "tally_debug-trace")]
macro_rules! debug_trace {
    ($($arg:tt)*) => {
        $crate::__log::trace!($($arg)*)
    };
}

/// Logs a trace message, but only when the `tally_debug-trace` feature is
/// enabled. Otherwise the arguments are type checked but never evaluated.
#[macro_export]
#[cfg(not(feature = "tally_debug-trace"))]
macro_rules! debug_trace {
    ($($arg:tt)*) => {
        if false {
            $crate::__log::trace!($($arg)*)
        }
    };
}
