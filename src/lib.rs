//! Financial Planner - retirement gap and goal funding engine for a single client
//!
//! This library provides:
//! - Client profile records, range validation and CSV sheet loading
//! - Configurable economic assumptions and recommendation thresholds
//! - Retirement corpus projection, funding gap and monthly SIP sizing
//! - Threshold-based recommendations
//! - Text and JSON report rendering

pub mod error;
pub mod profile;
pub mod assumptions;
pub mod projection;
pub mod recommendation;
pub mod report;

// Re-export commonly used types
pub use error::{DomainError, PlanningError, PlanningResult};
pub use profile::ClientProfile;
pub use assumptions::{PlanningAssumptions, EconomicAssumptions, RecommendationThresholds};
pub use projection::{PlanningEngine, DerivedMetrics};
pub use recommendation::Recommendation;
pub use report::PlanReport;
