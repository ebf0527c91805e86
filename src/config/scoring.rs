//! Scoring configuration

use serde::Deserialize;

use crate::domain::session::ScoringPolicy;

/// How submitted rounds are scored for this deployment
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    /// `derived_box` (default) or `zero_sum`
    #[serde(default)]
    pub policy: ScoringPolicy,
}
