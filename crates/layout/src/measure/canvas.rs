use super::{DocumentMeasurer, MeasuredKind, MeasuredNode};
use crate::vector::Vector;

impl DocumentMeasurer<'_> {
    /// Canvases are rigid: min and max are both the bounding box.
    pub(super) fn measure_canvas(&self, vectors: &[Vector]) -> MeasuredNode {
        let (width, height) = vectors
            .iter()
            .map(Vector::extent)
            .fold((0.0f32, 0.0f32), |(w, h), (x, y)| (w.max(x), h.max(y)));
        MeasuredNode::new(
            MeasuredKind::Canvas {
                vectors: vectors.to_vec(),
                min_height: height,
                max_height: height,
            },
            width,
            width,
        )
    }
}
