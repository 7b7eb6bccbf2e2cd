//! ISO paper size tables and the A-series to C-series conversion check.
//!
//! | Series       | Standard | Purpose    | Relationship                               |
//! |--------------|----------|------------|--------------------------------------------|
//! | **A0..A10**  | ISO 216  | paper      | A0 has an area of 1 m², aspect ratio √2    |
//! | **C0..C10**  | ISO 269  | envelopes  | Cn is the geometric mean of An and Bn      |
//!
//! Since Bn = An × 2^(1/4), the C series is the A series scaled by 2^(1/8).

pub mod conversion;
pub mod dimension;
pub mod series;
pub mod verification;

pub use conversion::{a_to_c, a_to_c_scale};
pub use dimension::DimensionPair;
pub use series::{A_SERIES, C_SERIES, SERIES_LENGTH};
pub use verification::{Mismatch, RowOutcome, VerificationReport, Verifier, VerifierError};
