use std::fmt;

use crate::conversion::a_to_c;

/// A rectangular paper size, (short side, long side) in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionPair<T> {
    pub short: T,
    pub long: T,
}

impl<T> DimensionPair<T> {
    pub const fn new(short: T, long: T) -> Self {
        Self {
            short,
            long,
        }
    }
}

impl DimensionPair<u32> {
    /// Convert both sides from the A series to the C series, unrounded.
    pub fn to_c_series(&self) -> DimensionPair<f64> {
        DimensionPair {
            short: a_to_c(self.short as f64),
            long: a_to_c(self.long as f64),
        }
    }
}

impl DimensionPair<f64> {
    /// Round both sides to the nearest millimeter, half away from zero.
    pub fn rounded(&self) -> DimensionPair<u32> {
        DimensionPair {
            short: self.short.round() as u32,
            long: self.long.round() as u32,
        }
    }
}

// Debug formatting for floats keeps at least one fractional digit, e.g. `917.0`.
impl fmt::Display for DimensionPair<f64> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}, {:?}]", self.short, self.long)
    }
}

impl fmt::Display for DimensionPair<u32> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.short, self.long)
    }
}
