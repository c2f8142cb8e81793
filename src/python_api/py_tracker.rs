use pyo3::{PyRef, PyResult, exceptions::PyValueError, pyclass, pymethods};

use crate::{
    Detection, EUCLIDEAN_DIST_THRESHOLD, EuclideanTracker, Identity, MatchPolicy, TrackerConfig,
    python_api::{PyDetection, PyTrackedObject},
};

#[pyclass(name = "EuclideanTracker")]
pub struct PyEuclideanTracker {
    inner: EuclideanTracker,
}

#[pymethods]
impl PyEuclideanTracker {
    #[new]
    #[pyo3(signature = (distance_threshold=EUCLIDEAN_DIST_THRESHOLD, min_cost=false))]
    pub fn new(distance_threshold: f64, min_cost: bool) -> PyResult<Self> {
        let match_policy = if min_cost {
            MatchPolicy::MinCostAssignment
        } else {
            MatchPolicy::GreedyFirstMatch
        };
        let inner = EuclideanTracker::with_config(TrackerConfig {
            distance_threshold,
            match_policy,
        })
        .map_err(|err| PyValueError::new_err(err.to_string()))?;

        Ok(Self { inner })
    }

    pub fn update(&mut self, detections: Vec<PyRef<PyDetection>>) -> Vec<PyTrackedObject> {
        let inner_detections = detections
            .iter()
            .map(|detection| detection.inner)
            .collect::<Vec<Detection>>();

        self.inner
            .update(&inner_detections)
            .into_iter()
            .map(|inner| PyTrackedObject { inner })
            .collect()
    }

    pub fn registry(&self) -> Vec<(Identity, (f64, f64))> {
        self.inner
            .registry()
            .map(|(id, centroid)| (id, (centroid.x, centroid.y)))
            .collect()
    }

    #[getter]
    fn next_identity(&self) -> Identity {
        self.inner.next_identity()
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }
}
