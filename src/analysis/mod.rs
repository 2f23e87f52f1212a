//! Derived analytics built on the cumulative success curve.

pub mod format;
pub mod quantile;
pub mod table;

pub use format::format_percent_value;
pub use quantile::{estimate_pity_needed, find_n_for_quantile, luck_percentile, QuantileRow};
pub use table::{before_after_table, success_curve, CurvePoint, PityRow};
