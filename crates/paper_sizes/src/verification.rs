use std::fmt;
use std::io::{self, Write};

use thiserror::Error;
use tracing::{debug, info, trace, warn};

use crate::conversion::a_to_c_scale;
use crate::dimension::DimensionPair;
use crate::series::{A_SERIES, C_SERIES};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum VerifierError {
    #[error("Table lengths differ. inputs: {inputs}, expected: {expected}")]
    LengthMismatch { inputs: usize, expected: usize },
}

/// Checks that converting each input pair and rounding it reproduces the expected pair at the same position.
#[derive(Debug, Clone, Copy)]
pub struct Verifier<'a> {
    inputs: &'a [DimensionPair<u32>],
    expected: &'a [DimensionPair<u32>],
}

impl Verifier<'static> {
    pub fn iso_a_to_c() -> Self {
        Self {
            inputs: &A_SERIES,
            expected: &C_SERIES,
        }
    }
}

impl<'a> Verifier<'a> {
    pub fn new(inputs: &'a [DimensionPair<u32>], expected: &'a [DimensionPair<u32>]) -> Result<Self, VerifierError> {
        if inputs.len() != expected.len() {
            return Err(VerifierError::LengthMismatch {
                inputs: inputs.len(),
                expected: expected.len(),
            });
        }

        Ok(Self {
            inputs,
            expected,
        })
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn verify(&self) -> VerificationReport {
        if self.is_empty() {
            warn!("no rows to verify");
        }
        debug!("verifying. rows: {}, scale: {}", self.len(), a_to_c_scale());

        let rows = self
            .inputs
            .iter()
            .zip(self.expected.iter())
            .enumerate()
            .map(|(index, (input, expected))| {
                let converted = input.to_c_series();
                let outcome = RowOutcome {
                    index,
                    input: *input,
                    converted,
                    rounded: converted.rounded(),
                    expected: *expected,
                };
                trace!("row: {:?}", outcome);
                outcome
            })
            .collect::<Vec<_>>();

        let report = VerificationReport {
            rows,
        };

        for mismatch in report.mismatches() {
            warn!("mismatch. row: {}, {}", mismatch.index, mismatch);
        }
        info!(
            "verified. rows: {}, mismatches: {}, success: {}",
            report.rows().len(),
            report.mismatch_count(),
            report.is_success()
        );

        report
    }

    /// Verify, writing one line per mismatch to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> io::Result<VerificationReport> {
        let report = self.verify();
        for mismatch in report.mismatches() {
            writeln!(out, "{}", mismatch)?;
        }
        Ok(report)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowOutcome {
    pub index: usize,
    pub input: DimensionPair<u32>,
    pub converted: DimensionPair<f64>,
    pub rounded: DimensionPair<u32>,
    pub expected: DimensionPair<u32>,
}

impl RowOutcome {
    pub fn is_match(&self) -> bool {
        self.rounded == self.expected
    }
}

/// A row whose rounded conversion differs from the expected pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch {
    pub index: usize,
    pub converted: DimensionPair<f64>,
    pub expected: DimensionPair<u32>,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} != {}", self.converted, self.expected)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VerificationReport {
    rows: Vec<RowOutcome>,
}

impl VerificationReport {
    pub fn rows(&self) -> &[RowOutcome] {
        &self.rows
    }

    pub fn mismatches(&self) -> impl Iterator<Item = Mismatch> + '_ {
        self.rows
            .iter()
            .filter(|row| !row.is_match())
            .map(|row| Mismatch {
                index: row.index,
                converted: row.converted,
                expected: row.expected,
            })
    }

    pub fn mismatch_count(&self) -> usize {
        self.mismatches().count()
    }

    pub fn is_success(&self) -> bool {
        self.mismatch_count() == 0
    }
}
