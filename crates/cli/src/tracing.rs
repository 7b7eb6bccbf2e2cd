use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use tracing_log::AsTrace;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

/// Console logging goes to stderr, stdout is reserved for program output.
///
/// When `trace` is set, everything down to TRACE level is also written to that file.
pub fn configure_tracing(trace: Option<PathBuf>, verbose: Verbosity<InfoLevel>) -> anyhow::Result<()> {
    let console_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_filter(verbose.log_level_filter().as_trace());

    let trace_layer = match &trace {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("Unable to create trace log. path: {:?}", path))?;

            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .with_filter(LevelFilter::TRACE),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(trace_layer)
        .try_init()?;

    ::tracing::debug!("tracing configured. trace: {:?}", trace);

    Ok(())
}
