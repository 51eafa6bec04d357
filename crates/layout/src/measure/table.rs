use super::{ColumnWidth, DocumentMeasurer, MeasuredKind, MeasuredNode, MeasuredTable};
use crate::LayoutError;
use crate::node::{TableSpec, TableWidths};
use crate::style::StyleContext;
use quire_style::Dimension;

impl DocumentMeasurer<'_> {
    pub(super) fn measure_table(
        &self,
        source: &TableSpec,
        ctx: &StyleContext<'_>,
        depth: usize,
    ) -> Result<MeasuredNode, LayoutError> {
        let columns = source.body.first().map_or(0, Vec::len);
        let mut widths: Vec<ColumnWidth> = normalize_widths(source.widths.as_ref(), columns)
            .into_iter()
            .map(|width| ColumnWidth {
                width,
                min_width: 0.0,
                max_width: 0.0,
            })
            .collect();

        let mut body = Vec::with_capacity(source.body.len());
        for (row_index, row) in source.body.iter().enumerate() {
            if row.len() != columns {
                return Err(LayoutError::MalformedDocument(format!(
                    "table row {} has {} cells, expected {}",
                    row_index,
                    row.len(),
                    columns
                )));
            }
            let mut measured_row = Vec::with_capacity(columns);
            for (cell, column) in row.iter().zip(widths.iter_mut()) {
                let measured = self.measure_node(cell, ctx, depth)?;
                column.min_width = column.min_width.max(measured.min_width);
                column.max_width = column.max_width.max(measured.max_width);
                measured_row.push(measured);
            }
            body.push(measured_row);
        }

        let min_width = widths.iter().map(|c| c.min_width).sum();
        let max_width = widths.iter().map(|c| c.max_width).sum();

        Ok(MeasuredNode::new(
            MeasuredKind::Table(MeasuredTable {
                widths,
                body,
                header_rows: source.header_rows,
            }),
            min_width,
            max_width,
        ))
    }
}

/// Expands a width specification to exactly one width per column.
///
/// Missing widths mean `auto` everywhere, a single width is broadcast, a short
/// list repeats its last entry, and a long list is cut to the column count.
pub(crate) fn normalize_widths(widths: Option<&TableWidths>, columns: usize) -> Vec<Dimension> {
    let mut normalized = match widths {
        None => vec![Dimension::Auto],
        Some(TableWidths::Single(width)) => vec![*width],
        Some(TableWidths::PerColumn(list)) if list.is_empty() => vec![Dimension::Auto],
        Some(TableWidths::PerColumn(list)) => list.clone(),
    };

    if normalized.len() > columns {
        if matches!(widths, Some(TableWidths::PerColumn(_))) {
            log::warn!(
                "table declares {} widths for {} columns; extra widths are ignored",
                normalized.len(),
                columns
            );
        }
        normalized.truncate(columns);
    }
    if let Some(&last) = normalized.last() {
        normalized.resize(columns, last);
    }
    normalized
}
