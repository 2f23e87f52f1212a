//! Percent rendering that never rounds an uncertain value to 0% or 100%.

/// Format `p` as a percentage with `digits` decimals.
///
/// Exactly 0 (or anything non-finite) renders as zero and exactly 1 as 100;
/// anything strictly between stays at least one step away from both ends.
pub fn format_percent_value(p: f64, digits: usize) -> String {
    if !p.is_finite() || p <= 0.0 {
        return format!("{:.*}", digits, 0.0);
    }
    if p >= 1.0 {
        return format!("{:.*}", digits, 100.0);
    }

    let mult = 10f64.powi(digits as i32);
    let min_step = 1.0 / mult;

    let mut val = (p * 100.0 * mult).round() / mult;
    if val <= 0.0 {
        val = min_step;
    }
    if val >= 100.0 {
        val = 100.0 - min_step;
    }
    format!("{:.*}", digits, val)
}
