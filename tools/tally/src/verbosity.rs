use clap::Args;
use log::LevelFilter;

/// Global flags selecting the log level of the tool.
///
/// Without any flag the level is `Warn`, so that the counts printed on stdout
/// are not mixed with informational messages. `--quiet` wins over all other
/// flags, and otherwise the most detailed flag that is given is used.
#[derive(Args, Debug)]
pub struct VerbosityFlag {
    #[arg(short, long, global = true, help = "Disable all log output")]
    quiet: bool,

    #[arg(short, long, global = true, help = "Also log informational messages, such as timings")]
    verbose: bool,

    #[arg(short, long, global = true, help = "Also log debug messages")]
    debug: bool,

    #[arg(short, long, global = true, help = "Log everything, including traces")]
    trace: bool,
}

impl VerbosityFlag {
    /// Returns the log level filter corresponding to the given verbosity flags.
    pub fn log_level_filter(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Off
        } else if self.trace {
            LevelFilter::Trace
        } else if self.debug {
            LevelFilter::Debug
        } else if self.verbose {
            LevelFilter::Info
        } else {
            LevelFilter::Warn
        }
    }
}
