//! Runtime knobs for building embedding-backed geometry.
//!
//! The strategy itself is chosen at compile time (see
//! [`ConfiguredBackend`](crate::grid::ConfiguredBackend)); this only controls
//! validation performed while building.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Sample the metric along x3 before filling the cache.
    pub check_third_axis: bool,
    /// Allowed x3 deviation, relative to the largest metric component
    /// (floored at 1).
    pub invariance_tolerance: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            check_third_axis: true,
            invariance_tolerance: 1e-12,
        }
    }
}
