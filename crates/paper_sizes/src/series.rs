use crate::dimension::DimensionPair;

pub const SERIES_LENGTH: usize = 11;

/// ISO 216 A series, A0..A10.
pub static A_SERIES: [DimensionPair<u32>; SERIES_LENGTH] = [
    DimensionPair::new(841, 1189),
    DimensionPair::new(594, 841),
    DimensionPair::new(420, 594),
    DimensionPair::new(297, 420),
    DimensionPair::new(210, 297),
    DimensionPair::new(148, 210),
    DimensionPair::new(105, 148),
    DimensionPair::new(74, 105),
    DimensionPair::new(52, 74),
    DimensionPair::new(37, 52),
    DimensionPair::new(26, 37),
];

/// ISO 269 C series, C0..C10, as published.
///
/// C5, C6 and C7 differ from the rounded A to C conversion; the published values are kept as-is.
pub static C_SERIES: [DimensionPair<u32>; SERIES_LENGTH] = [
    DimensionPair::new(917, 1297),
    DimensionPair::new(648, 917),
    DimensionPair::new(458, 648),
    DimensionPair::new(324, 458),
    DimensionPair::new(229, 324),
    DimensionPair::new(162, 229),
    DimensionPair::new(114, 162),
    DimensionPair::new(81, 114),
    DimensionPair::new(57, 81),
    DimensionPair::new(40, 57),
    DimensionPair::new(28, 40),
];
