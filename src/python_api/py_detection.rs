use pyo3::{pyclass, pymethods};

use crate::{Detection, Identity, TrackedObject};

#[pyclass(name = "Detection")]
#[derive(Clone)]
pub struct PyDetection {
    pub inner: Detection,
}

#[pymethods]
impl PyDetection {
    #[new]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            inner: Detection::new(x, y, w, h),
        }
    }

    #[getter]
    fn x(&self) -> f64 {
        self.inner.x
    }

    #[getter]
    fn y(&self) -> f64 {
        self.inner.y
    }

    #[getter]
    fn w(&self) -> f64 {
        self.inner.w
    }

    #[getter]
    fn h(&self) -> f64 {
        self.inner.h
    }

    fn area(&self) -> f64 {
        self.inner.area()
    }

    fn __repr__(&self) -> String {
        format!(
            "Detection(x={}, y={}, w={}, h={})",
            self.inner.x, self.inner.y, self.inner.w, self.inner.h
        )
    }
}

#[pyclass(name = "TrackedObject")]
#[derive(Clone)]
pub struct PyTrackedObject {
    pub inner: TrackedObject,
}

#[pymethods]
impl PyTrackedObject {
    #[new]
    pub fn new(detection: &PyDetection, id: Identity) -> Self {
        Self {
            inner: TrackedObject::new(detection.inner, id),
        }
    }

    #[getter]
    fn id(&self) -> Identity {
        self.inner.id
    }

    #[getter]
    fn detection(&self) -> PyDetection {
        PyDetection {
            inner: self.inner.detection,
        }
    }

    #[getter]
    fn centroid(&self) -> (f64, f64) {
        let centroid = self.inner.centroid();
        (centroid.x, centroid.y)
    }

    fn __repr__(&self) -> String {
        let detection = &self.inner.detection;
        format!(
            "TrackedObject(id={}, x={}, y={}, w={}, h={})",
            self.inner.id, detection.x, detection.y, detection.w, detection.h
        )
    }
}
