mod associate;
mod config;
mod detection;
mod error;
mod filter;
mod pipeline;
#[cfg(feature = "python")]
mod python_api;
mod score;
mod tracker;
pub use config::{EUCLIDEAN_DIST_THRESHOLD, MatchPolicy, TrackerConfig};
pub use detection::Detection;
pub use error::ConfigError;
pub use filter::SizeFilter;
pub use pipeline::{Detector, FramePipeline, FrameResult};
pub use score::{ScoreDetector, ScoreRecord};
pub use tracker::{EuclideanTracker, Identity, TrackedObject};

#[cfg(feature = "python")]
use pyo3::{
    Bound, PyResult, pymodule,
    types::{PyModule, PyModuleMethods},
};

#[cfg(feature = "python")]
use crate::python_api::{
    PyDetection, PyEuclideanTracker, PyScoreDetector, PyScoreRecord, PyTrackedObject,
};

#[cfg(feature = "python")]
#[pymodule]
fn bounce_track(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDetection>()?;
    m.add_class::<PyTrackedObject>()?;
    m.add_class::<PyEuclideanTracker>()?;
    m.add_class::<PyScoreRecord>()?;
    m.add_class::<PyScoreDetector>()?;

    Ok(())
}
