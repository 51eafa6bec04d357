use super::{DocumentMeasurer, ListMarker, MarkerContent, MeasuredKind, MeasuredNode};
use crate::LayoutError;
use crate::node::Node;
use crate::style::StyleContext;
use crate::vector::Vector;
use quire_traits::{StringSize, StyledText};
use quire_types::Color;

/// Placeholder measured for the marker column of unordered lists.
const UNORDERED_GAP_TEXT: &str = "9. ";

impl DocumentMeasurer<'_> {
    pub(super) fn measure_list(
        &self,
        ordered: bool,
        items: &[Node],
        ctx: &StyleContext<'_>,
        depth: usize,
    ) -> Result<MeasuredNode, LayoutError> {
        let gap = self.gap_size(ordered, items.len(), ctx);

        let mut measured_items = Vec::with_capacity(items.len());
        let mut min_width = 0.0f32;
        let mut max_width = 0.0f32;

        for (index, item) in items.iter().enumerate() {
            let mut measured = self.measure_node(item, ctx, depth + 1)?;
            if !item.is_list() {
                let content = if ordered {
                    let text = match &item.counter {
                        Some(counter) => format!("{}. ", counter),
                        None => self.markers.ordered_marker(index + 1, depth),
                    };
                    self.ordered_marker(text, ctx)
                } else {
                    unordered_marker(&gap)
                };
                measured.list_marker = Some(ListMarker {
                    content,
                    min_width: gap.width,
                    max_width: gap.width,
                    min_height: gap.height,
                    max_height: gap.height,
                });
            } else if item.counter.is_some() {
                log::warn!("counter on a nested list item is ignored; nested lists carry no marker");
            }
            min_width = min_width.max(measured.min_width + gap.width);
            max_width = max_width.max(measured.max_width + gap.width);
            measured_items.push(measured);
        }

        Ok(MeasuredNode::new(
            MeasuredKind::List {
                ordered,
                items: measured_items,
                gap,
            },
            min_width,
            max_width,
        ))
    }

    /// Size of the marker column. Ordered lists reserve room for the widest
    /// number they can show ("99. " for 10 to 99 items).
    fn gap_size(&self, ordered: bool, count: usize, ctx: &StyleContext<'_>) -> StringSize {
        let text = if ordered {
            format!("{}. ", "9".repeat(count.to_string().len()))
        } else {
            UNORDERED_GAP_TEXT.to_string()
        };
        self.text.size_of_string(&text, &ctx.text_style())
    }

    fn ordered_marker(&self, text: String, ctx: &StyleContext<'_>) -> MarkerContent {
        let measurement = self.text.measure(&[StyledText::new(text, ctx.text_style())]);
        MarkerContent::Text(measurement.items)
    }
}

/// A filled circle sized from the list's font, centred on the first line.
fn unordered_marker(gap: &StringSize) -> MarkerContent {
    let radius = gap.font_size / 6.0;
    MarkerContent::Bullet(Vector::Ellipse {
        x: radius,
        y: gap.height / gap.line_height + gap.descender - gap.font_size / 3.0,
        r1: radius,
        r2: radius,
        color: Some(Color::black()),
    })
}
