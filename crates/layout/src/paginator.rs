//! Page-break orchestration on top of an [`ElementWriter`].
//!
//! [`PageElementWriter`] places content through the writer and moves to a
//! new page when the writer reports that something does not fit. It also
//! owns the unbreakable-block transactions and the stack of repeatable
//! fragments that are re-emitted at the top of every new page.

use crate::LayoutError;
use crate::context::LayoutContext;
use crate::page::{Fragment, Line, Page};
use crate::vector::Vector;
use crate::writer::{DefaultElementWriter, ElementWriter};

/// The sub-context of an open unbreakable block.
#[derive(Debug)]
struct UnbreakableBlock {
    context: LayoutContext,
    /// Cursor x of the outer context when the block was opened.
    original_x: f32,
}

#[derive(Debug)]
pub struct PageElementWriter<W: ElementWriter = DefaultElementWriter> {
    writer: W,
    context: LayoutContext,
    unbreakable: Option<UnbreakableBlock>,
    depth: usize,
    repeatables: Vec<Fragment>,
}

impl<W: ElementWriter> PageElementWriter<W> {
    pub fn new(context: LayoutContext, writer: W) -> Self {
        Self {
            writer,
            context,
            unbreakable: None,
            depth: 0,
            repeatables: Vec::new(),
        }
    }

    /// The context placement currently goes to: the open block's
    /// sub-context, or the document context.
    pub fn context(&self) -> &LayoutContext {
        self.unbreakable
            .as_ref()
            .map_or(&self.context, |block| &block.context)
    }

    pub fn context_mut(&mut self) -> &mut LayoutContext {
        match self.unbreakable.as_mut() {
            Some(block) => &mut block.context,
            None => &mut self.context,
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Nesting depth of unbreakable blocks.
    pub fn transaction_depth(&self) -> usize {
        self.depth
    }

    pub fn repeatables(&self) -> &[Fragment] {
        &self.repeatables
    }

    /// Splits `self` so the writer, the current context and the repeatables
    /// can be borrowed at the same time.
    fn parts(&mut self) -> (&mut W, &mut LayoutContext, &[Fragment]) {
        let context = match self.unbreakable.as_mut() {
            Some(block) => &mut block.context,
            None => &mut self.context,
        };
        (&mut self.writer, context, &self.repeatables)
    }

    pub fn add_line(&mut self, line: &Line, keep_cursor: bool) -> Result<(), LayoutError> {
        self.fit_on_page(line.height, |writer, ctx| writer.add_line(ctx, line, keep_cursor))
    }

    /// Places a vector on the current page. Vectors never cause a break.
    pub fn add_vector(&mut self, vector: &Vector) {
        if self.context().current_page().is_none() {
            self.move_to_next_page();
        }
        let (writer, ctx, _) = self.parts();
        writer.add_vector(ctx, vector);
    }

    pub fn add_fragment(&mut self, fragment: &Fragment) -> Result<(), LayoutError> {
        self.fit_on_page(fragment.height, |writer, ctx| writer.add_fragment(ctx, fragment, false))
    }

    /// Tries `place`; on failure breaks the page once and tries again.
    fn fit_on_page(
        &mut self,
        height: f32,
        mut place: impl FnMut(&mut W, &mut LayoutContext) -> bool,
    ) -> Result<(), LayoutError> {
        let (writer, ctx, _) = self.parts();
        if place(writer, ctx) {
            return Ok(());
        }
        self.move_to_next_page();
        let (writer, ctx, _) = self.parts();
        if place(writer, ctx) {
            return Ok(());
        }
        Err(LayoutError::ElementTooLarge(
            height,
            self.context().page_content_height(),
        ))
    }

    /// Moves the current context to its next page. A brand-new page gets
    /// every active repeatable, in push order. On a page that already
    /// existed the cursor skips their height instead.
    pub fn move_to_next_page(&mut self) {
        let (writer, ctx, repeatables) = self.parts();
        let transition = ctx.move_to_next_page();
        if transition.new_page_created {
            for fragment in repeatables {
                writer.add_fragment(ctx, fragment, true);
            }
        } else {
            for fragment in repeatables {
                ctx.move_down(fragment.height);
            }
        }
        log::debug!(
            "page break: {:?} -> {:?} ({} repeatable(s), new page: {})",
            transition.previous_page,
            ctx.page_index(),
            repeatables.len(),
            transition.new_page_created
        );
    }

    /// Opens an unbreakable block. Blocks nest; only the outermost one forks
    /// a sub-context.
    pub fn begin_unbreakable_block(&mut self) {
        if self.depth == 0 {
            let context = self.context.fork_unbreakable();
            self.unbreakable = Some(UnbreakableBlock {
                context,
                original_x: self.context.x(),
            });
            log::debug!("unbreakable block opened");
        }
        self.depth += 1;
    }

    /// Closes an unbreakable block. Closing the outermost block places
    /// everything written inside it as one fragment in the document context.
    pub fn commit_unbreakable_block(&mut self) -> Result<(), LayoutError> {
        if self.depth == 0 {
            return Err(LayoutError::NoActiveTransaction("commit_unbreakable_block"));
        }
        self.depth -= 1;
        if self.depth > 0 {
            return Ok(());
        }
        let block = self
            .unbreakable
            .take()
            .ok_or(LayoutError::NoActiveTransaction("commit_unbreakable_block"))?;

        let page_count = block.context.pages().len();
        if page_count > 1 {
            return Err(LayoutError::MultiPageTransaction(page_count));
        }
        let height = block.context.y();
        let Some(page) = block.context.pages().first() else {
            return Ok(());
        };
        if page.is_empty() && height == 0.0 {
            log::debug!("unbreakable block committed empty");
            return Ok(());
        }
        let fragment = Fragment::from_page(page, height, block.original_x);
        log::debug!(
            "unbreakable block committed: {} line(s), height {:.2}",
            fragment.lines.len(),
            height
        );
        self.add_fragment(&fragment)
    }

    /// Captures what the open block has written so far as a fragment,
    /// without closing the block.
    pub fn unbreakable_block_to_repeatable(&self) -> Result<Fragment, LayoutError> {
        let block = self
            .unbreakable
            .as_ref()
            .ok_or(LayoutError::NoActiveTransaction("unbreakable_block_to_repeatable"))?;
        let page_count = block.context.pages().len();
        if page_count > 1 {
            return Err(LayoutError::MultiPageTransaction(page_count));
        }
        let empty = Page::new();
        let page = block.context.pages().first().unwrap_or(&empty);
        Ok(Fragment::from_page(page, block.context.y(), block.original_x))
    }

    /// Activates `fragment` for every page break from now on.
    pub fn push_to_repeatables(&mut self, fragment: Fragment) {
        log::debug!("repeatable pushed (height {:.2})", fragment.height);
        self.repeatables.push(fragment);
    }

    /// Deactivates the most recently pushed repeatable.
    pub fn pop_from_repeatables(&mut self) -> Result<Fragment, LayoutError> {
        let fragment = self.repeatables.pop().ok_or(LayoutError::EmptyRepeatables)?;
        log::debug!("repeatable popped ({} left)", self.repeatables.len());
        Ok(fragment)
    }

    /// Ends layout and hands back the pages of the document context.
    pub fn finish(self) -> Result<Vec<Page>, LayoutError> {
        if self.depth > 0 {
            return Err(LayoutError::UnbalancedTransaction(self.depth));
        }
        Ok(self.context.into_pages())
    }
}
