use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use paper_sizes::Verifier;
use tracing::trace;

use crate::opts::Opts;

mod opts;

fn main() -> anyhow::Result<()> {
    let args = argfile::expand_args(argfile::parse_fromfile, argfile::PREFIX)?;

    let opts = Opts::parse_from(args);

    cli::tracing::configure_tracing(opts.logging.trace.clone(), opts.logging.verbose.clone())?;

    trace!("opts: {:?}", opts);

    let verifier = Verifier::iso_a_to_c();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // mismatches are reported, not failures; the exit code is always success
    verifier
        .run(&mut out)
        .context("Unable to write mismatches")?;
    out.flush()
        .context("Unable to flush output")?;

    Ok(())
}
