use std::path::PathBuf;

use clap::Args;
use clap_verbosity_flag::{InfoLevel, Verbosity};

/// Logging args shared by all binaries, flatten into the top-level `Opts`.
#[derive(Args, Debug, Clone)]
pub struct LoggingArgs {
    /// Trace log file
    #[arg(long, num_args = 0..=1, default_missing_value = "trace.log")]
    pub trace: Option<PathBuf>,

    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tracing_log::log::LevelFilter;

    use super::*;

    #[derive(Parser, Debug)]
    struct TestOpts {
        #[command(flatten)]
        logging: LoggingArgs,
    }

    #[test]
    fn test_defaults() {
        // when
        let opts = TestOpts::parse_from(["test"]);

        // then
        assert_eq!(opts.logging.trace, None);
        assert_eq!(opts.logging.verbose.log_level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_trace_without_value_uses_default_file_name() {
        // when
        let opts = TestOpts::parse_from(["test", "--trace"]);

        // then
        assert_eq!(opts.logging.trace, Some(PathBuf::from("trace.log")));
    }

    #[test]
    fn test_trace_and_verbosity() {
        // when
        let opts = TestOpts::parse_from(["test", "--trace", "out.log", "-vv"]);

        // then
        assert_eq!(opts.logging.trace, Some(PathBuf::from("out.log")));
        assert_eq!(opts.logging.verbose.log_level_filter(), LevelFilter::Trace);
    }
}
