#![deny(missing_docs)]

use clap::Parser;
use cli::args::LoggingArgs;

/// Check the ISO 216 A series to ISO 269 C series conversion (×2^(1/8)) against the published C series.
///
/// Prints one line per size where the rounded conversion differs from the published value.
#[derive(Parser, Debug)]
#[command(name = "paper_check")]
#[command(bin_name = "paper_check")]
#[command(version, about, long_about = None)]
pub(crate) struct Opts {
    #[command(flatten)]
    pub(crate) logging: LoggingArgs,
}
