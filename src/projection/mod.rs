//! Planning engine for retirement corpus and goal projections

mod annuity;
mod engine;
mod metrics;

pub use annuity::{compound, fv_annuity_factor, pv_annuity_factor};
pub use engine::PlanningEngine;
pub use metrics::DerivedMetrics;
