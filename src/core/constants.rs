use super::types::Category;

// Pity and exchange rates
pub const PITY_STEP: u32 = 200;
pub const LUNACY_PER_10: u32 = 1300;
pub const LUNACY_PER_1: u32 = 130;

// Featured-pool split: share of a tier's drops that land in the pickup pool
pub const PICKUP_SHARE: f64 = 0.5;
pub const PICKUP_SHARE_OWNED_POOL: f64 = 1.0;

// EGO exact DP is only run for pickup pools up to this size
pub const DP_PICKUP_LIMIT: u32 = 12;

// Numeric cut-offs
pub const NEGLIGIBLE_MASS: f64 = 1e-18;
pub const DP_ABSORB_EPSILON: f64 = 1e-12;
pub const LOG_Q_FLOOR: f64 = 1e-16;

// Allocation defaults
pub const DEFAULT_PRIORITY: [Category; 3] = [Category::E, Category::T, Category::A];
pub const FILLER_CATEGORY: Category = Category::E;

// Reporting
pub const PITY_ESTIMATE_QUANTILE: f64 = 0.9;
pub const DEFAULT_QUANTILES: [f64; 4] = [0.1, 0.5, 0.9, 0.99];
pub const DEFAULT_CURVE_STRIDE: u32 = 5;
pub const DEFAULT_MC_SAMPLES: u32 = 200;

// Single-run replay
pub const LUCK_CAP: f64 = 0.999;
pub const REPLAY_POINT_BUDGET: u32 = 400;
