use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Centroid distance, in pixels, under which a detection is taken to be a
/// live identity seen again.
pub const EUCLIDEAN_DIST_THRESHOLD: f64 = 100.0;

/// How detections of a frame are associated to the live identities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Detections in input order each take the lowest live identity within
    /// the threshold that has not been claimed yet this frame.
    #[default]
    GreedyFirstMatch,
    /// Minimum total centroid distance over all pairs within the threshold.
    ///
    /// Resolves crossings that the greedy policy swaps, so identities can
    /// differ from [`MatchPolicy::GreedyFirstMatch`] on the same input.
    MinCostAssignment,
}

/// Configuration for [`crate::EuclideanTracker`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Maximum centroid distance (exclusive) for a match, in pixels.
    pub distance_threshold: f64,
    pub match_policy: MatchPolicy,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            distance_threshold: EUCLIDEAN_DIST_THRESHOLD,
            match_policy: MatchPolicy::default(),
        }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.distance_threshold.is_finite() || self.distance_threshold <= 0.0 {
            return Err(ConfigError::InvalidDistanceThreshold(
                self.distance_threshold,
            ));
        }
        Ok(())
    }
}
