/// The eighth root of two, ≈ 1.0905077.
pub fn a_to_c_scale() -> f64 {
    2.0_f64.powf(1.0 / 8.0)
}

/// Convert a linear A-series dimension to the matching C-series dimension.
pub fn a_to_c(dimension: f64) -> f64 {
    dimension * a_to_c_scale()
}
