use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box found in a single frame, in pixel units.
///
/// Geometry is taken as given: a negative width or height is kept as is
/// and flows through centroid and area arithmetic unchanged.
#[derive(Clone, Copy, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Detection {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Detection { x, y, w, h }
    }

    pub fn from_corners(x_1: f64, y_1: f64, x_2: f64, y_2: f64) -> Self {
        Detection {
            x: x_1,
            y: y_1,
            w: x_2 - x_1,
            h: y_2 - y_1,
        }
    }

    pub fn centroid(&self) -> Point2<f64> {
        Point2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn area(&self) -> f64 {
        self.w * self.h
    }
}

impl From<[f64; 4]> for Detection {
    fn from([x, y, w, h]: [f64; 4]) -> Self {
        Detection { x, y, w, h }
    }
}
