use pyo3::{PyRef, pyclass, pymethods};

use crate::{Identity, ScoreDetector, ScoreRecord, TrackedObject, python_api::PyTrackedObject};

#[pyclass(name = "ScoreRecord")]
#[derive(Clone)]
pub struct PyScoreRecord {
    #[pyo3(get)]
    pub id: Identity,
    #[pyo3(get)]
    pub x: f64,
    #[pyo3(get)]
    pub y: f64,
}

impl From<&ScoreRecord> for PyScoreRecord {
    fn from(record: &ScoreRecord) -> Self {
        Self {
            id: record.id,
            x: record.x,
            y: record.y,
        }
    }
}

#[pymethods]
impl PyScoreRecord {
    fn __repr__(&self) -> String {
        format!("ScoreRecord(id={}, x={}, y={})", self.id, self.x, self.y)
    }
}

#[pyclass(name = "ScoreDetector")]
#[derive(Default)]
pub struct PyScoreDetector {
    inner: ScoreDetector,
}

#[pymethods]
impl PyScoreDetector {
    #[new]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, current: Vec<PyRef<PyTrackedObject>>) -> Vec<PyScoreRecord> {
        let inner_current = current
            .iter()
            .map(|tracked| tracked.inner)
            .collect::<Vec<TrackedObject>>();

        self.inner
            .observe(&inner_current)
            .iter()
            .map(PyScoreRecord::from)
            .collect()
    }

    pub fn newly_scored(&self) -> Vec<PyScoreRecord> {
        self.inner.newly_scored().iter().map(PyScoreRecord::from).collect()
    }

    #[getter]
    fn score(&self) -> usize {
        self.inner.score()
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }
}
