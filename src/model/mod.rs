//! Probability model: per-draw rates and the cumulative success curve.

pub mod rates;
pub mod success;

pub use rates::{
    apply_tenth_draw_boost, base_category_probs, want_prob_per_category, BaseRates, DrawParams,
};
pub use success::cumulative_success;
