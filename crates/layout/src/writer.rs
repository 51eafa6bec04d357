//! The low-level writer: records lines, vectors and fragments on the current
//! page of a [`LayoutContext`].

use crate::algorithms::pagination::check_child_fit;
use crate::context::LayoutContext;
use crate::page::{Fragment, Line};
use crate::vector::Vector;
use quire_style::TextAlign;
use std::fmt::Debug;

/// Appends content at the cursor of the context it is handed.
///
/// The context is passed on every call so the caller decides which context
/// is current.
pub trait ElementWriter: Debug {
    /// Places `line` at the cursor. Returns false, leaving the context
    /// untouched, when the line does not fit on the current page. Unless
    /// `keep_cursor` is set, the cursor moves below the line.
    fn add_line(&mut self, ctx: &mut LayoutContext, line: &Line, keep_cursor: bool) -> bool;

    /// Places `vector` relative to the cursor without any fit check.
    fn add_vector(&mut self, ctx: &mut LayoutContext, vector: &Vector);

    /// Places every line and vector of `fragment` and moves the cursor below
    /// it. A repeatable is placed at its own `x_offset` and skips the fit
    /// check.
    fn add_fragment(&mut self, ctx: &mut LayoutContext, fragment: &Fragment, as_repeatable: bool) -> bool;
}

#[derive(Debug, Clone, Copy)]
pub struct DefaultElementWriter {
    pub fit_tolerance: f32,
}

impl Default for DefaultElementWriter {
    fn default() -> Self {
        Self {
            fit_tolerance: 0.01,
        }
    }
}

impl DefaultElementWriter {
    pub fn new(fit_tolerance: f32) -> Self {
        Self { fit_tolerance }
    }

    fn fits(&self, ctx: &LayoutContext, height: f32) -> bool {
        !check_child_fit(ctx.available_height(), height, self.fit_tolerance).should_break
    }
}

/// Horizontal shift that aligns a line of `width` inside `available`.
fn alignment_offset(alignment: TextAlign, available: f32, width: f32) -> f32 {
    match alignment {
        TextAlign::Right => available - width,
        TextAlign::Center => (available - width) / 2.0,
        TextAlign::Left | TextAlign::Justify => 0.0,
    }
}

impl ElementWriter for DefaultElementWriter {
    fn add_line(&mut self, ctx: &mut LayoutContext, line: &Line, keep_cursor: bool) -> bool {
        if ctx.current_page().is_none() || !self.fits(ctx, line.height) {
            return false;
        }
        let mut placed = line.clone();
        let dx = ctx.x() + alignment_offset(line.alignment, ctx.available_width(), line.width);
        placed.offset(dx, ctx.y());

        let height = line.height;
        if let Some(page) = ctx.current_page_mut() {
            page.lines.push(placed);
        }
        if !keep_cursor {
            ctx.move_down(height);
        }
        true
    }

    fn add_vector(&mut self, ctx: &mut LayoutContext, vector: &Vector) {
        let placed = vector.offset_by(ctx.x(), ctx.y());
        if let Some(page) = ctx.current_page_mut() {
            page.vectors.push(placed);
        }
    }

    fn add_fragment(&mut self, ctx: &mut LayoutContext, fragment: &Fragment, as_repeatable: bool) -> bool {
        if ctx.current_page().is_none() {
            return false;
        }
        if !as_repeatable && !self.fits(ctx, fragment.height) {
            return false;
        }
        let dx = if as_repeatable { fragment.x_offset } else { ctx.x() };
        let dy = ctx.y();
        if let Some(page) = ctx.current_page_mut() {
            page.lines.extend(fragment.lines.iter().map(|line| {
                let mut line = line.clone();
                line.offset(dx, dy);
                line
            }));
            page.vectors
                .extend(fragment.vectors.iter().map(|v| v.offset_by(dx, dy)));
        }
        ctx.move_down(fragment.height);
        true
    }
}
