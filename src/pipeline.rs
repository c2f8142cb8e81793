use log::debug;
use serde::Serialize;

use crate::{
    detection::Detection,
    error::ConfigError,
    filter::SizeFilter,
    score::{ScoreDetector, ScoreRecord},
    tracker::{EuclideanTracker, TrackedObject},
};

/// Source of per-frame detections, e.g. background subtraction followed by
/// contour extraction.
///
/// Each call must only report what it found in the given frame.
pub trait Detector {
    type Frame;
    type Error;

    fn detect(&mut self, frame: &Self::Frame) -> Result<Vec<Detection>, Self::Error>;
}

/// What a renderer needs for one processed frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameResult {
    pub frame_index: u64,
    pub tracked: Vec<TrackedObject>,
    /// Records added by this frame. The full set lives in the score detector.
    pub newly_scored: Vec<ScoreRecord>,
}

/// Runs detection, identity tracking and scoring one frame at a time.
pub struct FramePipeline<D: Detector> {
    detector: D,
    size_filter: Option<SizeFilter>,
    tracker: EuclideanTracker,
    score_detector: ScoreDetector,
    frame_index: u64,
}

impl<D: Detector> FramePipeline<D> {
    pub fn new(detector: D, tracker: EuclideanTracker) -> Self {
        Self {
            detector,
            size_filter: None,
            tracker,
            score_detector: ScoreDetector::new(),
            frame_index: 0,
        }
    }

    pub fn with_size_filter(mut self, size_filter: SizeFilter) -> Result<Self, ConfigError> {
        size_filter.validate()?;
        self.size_filter = Some(size_filter);
        Ok(self)
    }

    pub fn process_frame(&mut self, frame: &D::Frame) -> Result<FrameResult, D::Error> {
        let detections = self.detector.detect(frame)?;
        Ok(self.process_detections(&detections))
    }

    /// Tracks and scores detections that were produced outside the pipeline.
    pub fn process_detections(&mut self, detections: &[Detection]) -> FrameResult {
        let tracked = match &self.size_filter {
            Some(size_filter) => self.tracker.update(&size_filter.apply(detections)),
            None => self.tracker.update(detections),
        };
        self.score_detector.observe(&tracked);

        let result = FrameResult {
            frame_index: self.frame_index,
            tracked,
            newly_scored: self.score_detector.newly_scored().to_vec(),
        };
        debug!(
            "frame {}: {} tracked, {} scored in total",
            self.frame_index,
            result.tracked.len(),
            self.score_detector.score()
        );
        self.frame_index += 1;

        result
    }

    pub fn score_records(&self) -> &[ScoreRecord] {
        self.score_detector.records()
    }

    pub fn score(&self) -> usize {
        self.score_detector.score()
    }

    pub fn tracker(&self) -> &EuclideanTracker {
        &self.tracker
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::distance;

    use super::*;

    /// Replays prepared frames; the frame argument is the index to replay.
    struct ReplayDetector {
        frames: Vec<Vec<Detection>>,
    }

    impl Detector for ReplayDetector {
        type Frame = usize;
        type Error = String;

        fn detect(&mut self, frame: &usize) -> Result<Vec<Detection>, String> {
            self.frames
                .get(*frame)
                .cloned()
                .ok_or_else(|| format!("no frame {frame}"))
        }
    }

    fn ball(x: f64, y: f64, size: f64) -> Detection {
        Detection::new(x, y, size, size)
    }

    #[test]
    fn test_ball_bouncing_back_scores_once() {
        let frames = vec![
            vec![ball(300.0, 200.0, 40.0)],
            vec![ball(305.0, 190.0, 30.0)],
            vec![ball(310.0, 185.0, 25.0)],
            vec![ball(312.0, 188.0, 32.0)],
            vec![ball(315.0, 195.0, 45.0)],
        ];
        let mut pipeline = FramePipeline::new(
            ReplayDetector { frames },
            EuclideanTracker::new(),
        );

        let results: Vec<FrameResult> = (0..5)
            .map(|frame| pipeline.process_frame(&frame).unwrap())
            .collect();

        assert!(results.iter().all(|result| result.tracked[0].id == 0));
        assert!(results[2].newly_scored.is_empty());
        assert_eq!(
            results[3].newly_scored,
            vec![ScoreRecord { id: 0, x: 310.0, y: 185.0 }]
        );
        assert!(results[4].newly_scored.is_empty());
        assert_eq!(pipeline.score(), 1);
        assert_eq!(results[4].frame_index, 4);
    }

    #[test]
    fn test_detector_error_is_returned() {
        let mut pipeline = FramePipeline::new(
            ReplayDetector { frames: Vec::new() },
            EuclideanTracker::new(),
        );

        assert_eq!(pipeline.process_frame(&0), Err("no frame 0".to_string()));
    }

    #[test]
    fn test_size_filter_runs_before_tracking() {
        let mut pipeline = FramePipeline::new(
            ReplayDetector { frames: Vec::new() },
            EuclideanTracker::new(),
        )
        .with_size_filter(SizeFilter::default())
        .unwrap();

        let result = pipeline.process_detections(&[ball(0.0, 0.0, 5.0), ball(50.0, 50.0, 40.0)]);

        assert_eq!(result.tracked.len(), 1);
        assert_eq!(result.tracked[0].id, 0);
        assert_eq!(result.tracked[0].detection, ball(50.0, 50.0, 40.0));
    }

    #[test]
    fn test_inverted_size_filter_is_rejected() {
        let result = FramePipeline::new(
            ReplayDetector { frames: Vec::new() },
            EuclideanTracker::new(),
        )
        .with_size_filter(SizeFilter {
            min_width: 150.0,
            ..SizeFilter::default()
        });

        assert!(matches!(
            result,
            Err(ConfigError::InvertedBounds { field: "width", .. })
        ));
    }

    #[test]
    fn test_centroids_of_consecutive_frames_are_within_threshold() {
        let mut pipeline = FramePipeline::new(
            ReplayDetector { frames: Vec::new() },
            EuclideanTracker::new(),
        );

        let first = pipeline.process_detections(&[ball(0.0, 0.0, 10.0)]);
        let second = pipeline.process_detections(&[ball(5.0, 5.0, 10.0)]);

        assert_relative_eq!(
            distance(&first.tracked[0].centroid(), &second.tracked[0].centroid()),
            50.0_f64.sqrt()
        );
        assert_eq!(second.tracked[0].id, first.tracked[0].id);
        assert_eq!(pipeline.tracker().next_identity(), 1);
    }
}
