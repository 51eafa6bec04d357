use crate::context::LayoutContext;
use crate::paginator::PageElementWriter;
use crate::writer::DefaultElementWriter;
use quire_style::{Margins, PageLayout, PageSize};
use quire_types::Size;
use serde::{Deserialize, Serialize};

/// Margins used when the page layout does not declare any.
pub const DEFAULT_PAGE_MARGIN: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Page size and margins of every page.
    pub page: PageLayout,
    /// Slack added to the space left on a page before an element is judged
    /// not to fit.
    ///
    /// - **Higher values**: Content that overflows by a hair stays on the page.
    /// - **Lower values**: Stricter breaks, more sensitive to rounding.
    ///
    /// Defaults to `0.01`.
    pub fit_tolerance: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page: PageLayout {
                size: PageSize::A4,
                margins: Some(Margins::all(DEFAULT_PAGE_MARGIN)),
            },
            fit_tolerance: 0.01,
        }
    }
}

impl LayoutConfig {
    pub fn page_size(&self) -> Size {
        let (width, height) = self.page.size.dimensions_pt();
        Size::new(width, height)
    }

    pub fn page_margins(&self) -> Margins {
        self.page
            .margins
            .unwrap_or_else(|| Margins::all(DEFAULT_PAGE_MARGIN))
    }

    /// A fresh document context with no pages yet.
    pub fn create_context(&self) -> LayoutContext {
        LayoutContext::new(self.page_size(), self.page_margins())
    }

    pub fn create_writer(&self) -> DefaultElementWriter {
        DefaultElementWriter::new(self.fit_tolerance)
    }

    /// A paginator over a fresh context using the default writer.
    pub fn create_paginator(&self) -> PageElementWriter {
        PageElementWriter::new(self.create_context(), self.create_writer())
    }
}
