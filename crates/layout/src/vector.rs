//! Vector drawing primitives.
//!
//! The same type is used for the contents of a canvas node and for the
//! positioned vectors collected on a page.

use quire_types::{Color, Point};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Vector {
    Ellipse {
        x: f32,
        y: f32,
        r1: f32,
        r2: f32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<Color>,
    },
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<Color>,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        #[serde(default, rename = "lineWidth", skip_serializing_if = "Option::is_none")]
        line_width: Option<f32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<Color>,
    },
    Polyline {
        points: Vec<Point>,
        #[serde(default, rename = "closePath")]
        close_path: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<Color>,
    },
}

impl Vector {
    /// The far corner of the primitive's bounding box, measured from the
    /// canvas origin: `(right, bottom)`.
    pub fn extent(&self) -> (f32, f32) {
        match self {
            Vector::Ellipse { x, y, r1, r2, .. } => (x + r1, y + r2),
            Vector::Rect { x, y, w, h, .. } => (x + w, y + h),
            Vector::Line { x1, y1, x2, y2, .. } => (x1.max(*x2), y1.max(*y2)),
            Vector::Polyline { points, .. } => points
                .iter()
                .fold((0.0f32, 0.0f32), |(w, h), p| (w.max(p.x), h.max(p.y))),
        }
    }

    /// Moves the primitive by `(dx, dy)`.
    pub fn offset(&mut self, dx: f32, dy: f32) {
        match self {
            Vector::Ellipse { x, y, .. } | Vector::Rect { x, y, .. } => {
                *x += dx;
                *y += dy;
            }
            Vector::Line { x1, y1, x2, y2, .. } => {
                *x1 += dx;
                *x2 += dx;
                *y1 += dy;
                *y2 += dy;
            }
            Vector::Polyline { points, .. } => {
                for p in points.iter_mut() {
                    *p = p.offset(dx, dy);
                }
            }
        }
    }

    /// Returns a copy moved by `(dx, dy)`.
    pub fn offset_by(&self, dx: f32, dy: f32) -> Self {
        let mut moved = self.clone();
        moved.offset(dx, dy);
        moved
    }
}
