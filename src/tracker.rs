use std::collections::BTreeMap;

use log::debug;
use nalgebra::Point2;
use serde::Serialize;

use crate::{
    associate::{greedy_first_match, min_cost_assignment},
    config::{MatchPolicy, TrackerConfig},
    detection::Detection,
    error::ConfigError,
};

/// Label shared by the detections believed to be one physical object.
///
/// Handed out in increasing order and never reused by the same tracker.
pub type Identity = u64;

/// A detection together with the identity it was assigned.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TrackedObject {
    pub detection: Detection,
    pub id: Identity,
    centroid: Point2<f64>,
}

impl TrackedObject {
    pub fn new(detection: Detection, id: Identity) -> Self {
        Self {
            detection,
            id,
            centroid: detection.centroid(),
        }
    }

    pub fn centroid(&self) -> Point2<f64> {
        self.centroid
    }

    pub fn area(&self) -> f64 {
        self.detection.area()
    }
}

/// Assigns identities to per-frame detections by nearest centroid.
///
/// Only identities matched in the latest frame are remembered: an object
/// that misses a single frame comes back under a new identity.
pub struct EuclideanTracker {
    registry: BTreeMap<Identity, Point2<f64>>,
    next_id: Identity,
    config: TrackerConfig,
}

impl Default for EuclideanTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl EuclideanTracker {
    pub fn new() -> Self {
        Self {
            registry: BTreeMap::new(),
            next_id: 0,
            config: TrackerConfig::default(),
        }
    }

    pub fn with_config(config: TrackerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Live identities with their last known centroid, in ascending order.
    pub fn registry(&self) -> impl Iterator<Item = (Identity, Point2<f64>)> + '_ {
        self.registry.iter().map(|(&id, &centroid)| (id, centroid))
    }

    /// Identity the next unmatched detection will receive.
    pub fn next_identity(&self) -> Identity {
        self.next_id
    }

    /// Forgets all live identities. The identity counter keeps counting.
    pub fn reset(&mut self) {
        self.registry.clear();
    }

    /// Assigns an identity to each detection of one frame.
    ///
    /// The output has one entry per detection, in input order, with no
    /// identity repeated. Every live identity left unmatched by this frame
    /// is dropped, so an empty frame clears the registry.
    pub fn update(&mut self, detections: &[Detection]) -> Vec<TrackedObject> {
        let centroids: Vec<Point2<f64>> = detections.iter().map(Detection::centroid).collect();

        let matches = match self.config.match_policy {
            MatchPolicy::GreedyFirstMatch => {
                greedy_first_match(&centroids, &self.registry, self.config.distance_threshold)
            }
            MatchPolicy::MinCostAssignment => {
                min_cost_assignment(&centroids, &self.registry, self.config.distance_threshold)
            }
        };

        let mut registry = BTreeMap::new();
        let tracked = detections
            .iter()
            .zip(centroids)
            .zip(matches)
            .map(|((detection, centroid), matched)| {
                let id = matched.unwrap_or_else(|| self.allocate_identity(centroid));
                registry.insert(id, centroid);
                TrackedObject {
                    detection: *detection,
                    id,
                    centroid,
                }
            })
            .collect();

        for id in self.registry.keys().filter(|id| !registry.contains_key(*id)) {
            debug!("dropping identity {id}");
        }
        self.registry = registry;

        tracked
    }

    fn allocate_identity(&mut self, centroid: Point2<f64>) -> Identity {
        let id = self.next_id;
        self.next_id += 1;
        debug!("new identity {id} at {centroid}");
        id
    }
}
