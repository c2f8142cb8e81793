mod py_detection;
mod py_score_detector;
mod py_tracker;

pub use py_detection::{PyDetection, PyTrackedObject};
pub use py_score_detector::{PyScoreDetector, PyScoreRecord};
pub use py_tracker::PyEuclideanTracker;
