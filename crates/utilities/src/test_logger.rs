use log::SetLoggerError;

/// Initialises the logger for a test, so that log messages end up in the
/// captured test output. Calling this more than once is harmless, later calls
/// return an error that can be ignored.
pub fn test_logger() -> Result<(), SetLoggerError> {
    env_logger::builder().is_test(true).try_init()
}
