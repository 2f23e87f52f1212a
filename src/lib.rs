//! Pity Plan - gacha banner probability engine
//!
//! Computes the chance of collecting a wanted set of featured items within a
//! draw budget, plans where the guaranteed pity draws should go, and
//! cross-checks the analytic answer by simulation.

pub mod analysis;
pub mod build_info;
pub mod core;
pub mod error;
pub mod model;
pub mod pity;
pub mod scenario;
pub mod simulator;
