use std::error::Error;

/// The catch-all error type used by the binaries, any error that implements
/// [`Error`] can be converted into it with `?`.
pub type TallyError = Box<dyn Error + Send + Sync>;
