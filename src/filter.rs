use serde::{Deserialize, Serialize};

use crate::{detection::Detection, error::ConfigError};

/// Size gate a host can run over raw detections before tracking.
///
/// Bounds are inclusive. The tracker never applies it on its own.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeFilter {
    pub min_width: f64,
    pub max_width: f64,
    pub min_height: f64,
    pub max_height: f64,
    pub min_area: f64,
}

impl Default for SizeFilter {
    fn default() -> Self {
        Self {
            min_width: 20.0,
            max_width: 100.0,
            min_height: 30.0,
            max_height: 100.0,
            min_area: 350.0,
        }
    }
}

impl SizeFilter {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_width > self.max_width {
            return Err(ConfigError::InvertedBounds {
                field: "width",
                min: self.min_width,
                max: self.max_width,
            });
        }
        if self.min_height > self.max_height {
            return Err(ConfigError::InvertedBounds {
                field: "height",
                min: self.min_height,
                max: self.max_height,
            });
        }
        Ok(())
    }

    pub fn accepts(&self, detection: &Detection) -> bool {
        (self.min_width..=self.max_width).contains(&detection.w)
            && (self.min_height..=self.max_height).contains(&detection.h)
            && detection.area() >= self.min_area
    }

    /// Keeps the accepted detections, preserving their order.
    pub fn apply(&self, detections: &[Detection]) -> Vec<Detection> {
        detections
            .iter()
            .filter(|detection| self.accepts(detection))
            .copied()
            .collect()
    }
}
