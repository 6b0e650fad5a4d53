/// Absolute tolerance for floating-point comparisons
pub const TOLERANCE: f64 = 0.0000001;

/// Approximate equality of two floating-point values
///
/// Two values are equal when their absolute difference is strictly below [`TOLERANCE`]
pub fn is_equal(a: f64, b: f64) -> bool { (a - b).abs() < TOLERANCE }
