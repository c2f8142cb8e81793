use std::collections::HashSet;

use itertools::iproduct;
use log::info;
use serde::{Deserialize, Serialize};

use crate::tracker::{Identity, TrackedObject};

/// Location at which an identity was first seen to score.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub id: Identity,
    pub x: f64,
    pub y: f64,
}

/// Flags an identity as scored the first time its box grows between two
/// consecutive frames, taken as the sign of a bounce back towards the camera.
///
/// Records are append-only and an identity scores at most once for the
/// lifetime of the detector.
#[derive(Default)]
pub struct ScoreDetector {
    previous: Vec<TrackedObject>,
    records: Vec<ScoreRecord>,
    scored: HashSet<Identity>,
    newly_scored: usize,
}

impl ScoreDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compares `current` with the frame observed before it and returns
    /// every record accumulated so far.
    ///
    /// Nothing can score on the first frame. A new record takes its
    /// position from the previous frame's box.
    pub fn observe(&mut self, current: &[TrackedObject]) -> &[ScoreRecord] {
        let known = self.records.len();

        for (prev, curr) in iproduct!(self.previous.iter(), current.iter()) {
            if prev.id != curr.id || prev.area() >= curr.area() {
                continue;
            }
            if self.scored.insert(prev.id) {
                info!(
                    "identity {} scored at ({}, {})",
                    prev.id, prev.detection.x, prev.detection.y
                );
                self.records.push(ScoreRecord {
                    id: prev.id,
                    x: prev.detection.x,
                    y: prev.detection.y,
                });
            }
        }

        self.newly_scored = self.records.len() - known;
        self.previous = current.to_vec();

        &self.records
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    /// Records appended by the latest call to [`ScoreDetector::observe`].
    pub fn newly_scored(&self) -> &[ScoreRecord] {
        &self.records[self.records.len() - self.newly_scored..]
    }

    pub fn is_scored(&self, id: Identity) -> bool {
        self.scored.contains(&id)
    }

    /// Number of identities that have scored.
    pub fn score(&self) -> usize {
        self.records.len()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
