use crate::error::{FigureError, FigureResult};
use crate::geometry::EPSILON;
use serde::{Deserialize, Serialize};

/// Configuration for segment preprocessing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Per-axis distance under which an intersection is considered to hit an
    /// already registered point. Never below EPSILON, the registry's own
    /// deduplication distance
    pub lookup_tolerance: f64,
    /// Prefix for the names of synthesized implicit points
    pub implicit_prefix: String,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            lookup_tolerance: EPSILON,
            implicit_prefix: "*_".to_string(),
        }
    }
}

impl PreprocessConfig {
    pub fn validate(&self) -> FigureResult<()> {
        if self.lookup_tolerance.is_nan() || self.lookup_tolerance < EPSILON {
            return Err(FigureError::InvalidConfig(format!(
                "lookup_tolerance {} is below EPSILON {}",
                self.lookup_tolerance, EPSILON
            )));
        }
        Ok(())
    }
}
