//! Pagination state: the page collection and the write cursor.

use crate::page::Page;
use quire_style::Margins;
use quire_types::geometry::{Point, Rect, Size};

/// Outcome of [`LayoutContext::move_to_next_page`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageTransition {
    /// False when the context moved onto a page that already existed.
    pub new_page_created: bool,
    pub previous_page: Option<usize>,
    pub previous_y: f32,
}

#[derive(Debug, Clone, Copy)]
struct ColumnGroup {
    x: f32,
    y: f32,
    page: Option<usize>,
    available_width: f32,
    /// Lowest position reached by the finished columns, by page then y.
    bottom_most: Option<(Option<usize>, f32)>,
    in_column: bool,
}

/// Page collection plus a cursor in page coordinates.
///
/// Pages are created lazily: a fresh context has none, and the first call to
/// [`move_to_next_page`](Self::move_to_next_page) opens page 0. Pages are
/// only ever appended.
#[derive(Debug, Clone)]
pub struct LayoutContext {
    page_size: Size,
    /// Content area of every page.
    bounds: Rect,
    pages: Vec<Page>,
    page: Option<usize>,
    cursor: Point,
    available_width: f32,
    column_groups: Vec<ColumnGroup>,
}

impl LayoutContext {
    pub fn new(page_size: Size, margins: Margins) -> Self {
        let bounds = Rect::new(
            margins.left,
            margins.top,
            (page_size.width - margins.horizontal()).max(0.0),
            (page_size.height - margins.vertical()).max(0.0),
        );
        Self {
            page_size,
            bounds,
            pages: Vec::new(),
            page: None,
            cursor: Point::new(bounds.x, bounds.y),
            available_width: bounds.width,
            column_groups: Vec::new(),
        }
    }

    /// An empty context for tentative layout of an unbreakable block.
    ///
    /// Its page is as wide as the space left at this context's cursor and as
    /// tall as this context's content area, with no margins. The first page
    /// is already open.
    pub fn fork_unbreakable(&self) -> LayoutContext {
        let mut sub = LayoutContext::new(
            Size::new(self.available_width, self.bounds.height),
            Margins::default(),
        );
        sub.add_page();
        sub
    }

    pub fn page_size(&self) -> Size {
        self.page_size
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<Page> {
        self.pages
    }

    pub fn page_index(&self) -> Option<usize> {
        self.page
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.page.and_then(|i| self.pages.get(i))
    }

    pub fn current_page_mut(&mut self) -> Option<&mut Page> {
        match self.page {
            Some(i) => self.pages.get_mut(i),
            None => None,
        }
    }

    pub fn x(&self) -> f32 {
        self.cursor.x
    }

    pub fn y(&self) -> f32 {
        self.cursor.y
    }

    pub fn available_width(&self) -> f32 {
        self.available_width
    }

    /// Space between the cursor and the bottom margin. Negative once the
    /// cursor has been moved past it.
    pub fn available_height(&self) -> f32 {
        self.bounds.bottom() - self.cursor.y
    }

    /// Height of a page's content area.
    pub fn page_content_height(&self) -> f32 {
        self.bounds.height
    }

    /// Advances the cursor. Returns whether any space is left on the page.
    pub fn move_down(&mut self, offset: f32) -> bool {
        self.cursor.y += offset;
        self.available_height() > 0.0
    }

    pub fn move_to_page_top(&mut self) {
        self.cursor.y = self.bounds.y;
    }

    /// Narrows the writable band from both sides.
    pub fn add_margin(&mut self, left: f32, right: f32) {
        self.cursor.x += left;
        self.available_width -= left + right;
    }

    /// Moves to the page after the current one, creating it if needed, and
    /// resets the cursor to the page top.
    pub fn move_to_next_page(&mut self) -> PageTransition {
        let transition = PageTransition {
            new_page_created: false,
            previous_page: self.page,
            previous_y: self.cursor.y,
        };
        let next = self.page.map_or(0, |i| i + 1);
        let new_page_created = next >= self.pages.len();
        if new_page_created {
            self.pages.push(Page::new());
            log::debug!("created page {}", next);
        }
        self.page = Some(next);
        self.move_to_page_top();
        PageTransition {
            new_page_created,
            ..transition
        }
    }

    /// Appends a page and moves onto it, whatever the current page is.
    pub fn add_page(&mut self) -> usize {
        self.pages.push(Page::new());
        let index = self.pages.len() - 1;
        self.page = Some(index);
        self.move_to_page_top();
        log::debug!("added page {}", index);
        index
    }

    /// Starts laying out side-by-side columns from the current position.
    pub fn begin_column_group(&mut self) {
        self.column_groups.push(ColumnGroup {
            x: self.cursor.x,
            y: self.cursor.y,
            page: self.page,
            available_width: self.available_width,
            bottom_most: None,
            in_column: false,
        });
    }

    /// Starts the next column of the innermost group: `offset` from the
    /// group's left edge, `width` wide, at the group's starting position.
    pub fn begin_column(&mut self, width: f32, offset: f32) {
        let position = (self.page, self.cursor.y);
        if let Some(group) = self.column_groups.last_mut() {
            if group.in_column {
                group.record_bottom(position);
            }
            group.in_column = true;
            self.page = group.page;
            self.cursor = Point::new(group.x + offset, group.y);
            self.available_width = width;
        }
    }

    /// Ends the innermost group, leaving the cursor below its tallest column.
    pub fn complete_column_group(&mut self) {
        let position = (self.page, self.cursor.y);
        if let Some(mut group) = self.column_groups.pop() {
            group.record_bottom(position);
            let (page, y) = group.bottom_most.unwrap_or(position);
            self.page = page;
            self.cursor = Point::new(group.x, y);
            self.available_width = group.available_width;
        }
    }
}

impl ColumnGroup {
    fn record_bottom(&mut self, position: (Option<usize>, f32)) {
        let lower = match self.bottom_most {
            None => true,
            Some((page, y)) => position.0 > page || (position.0 == page && position.1 > y),
        };
        if lower {
            self.bottom_most = Some(position);
        }
    }
}
