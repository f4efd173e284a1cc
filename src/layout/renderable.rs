//! The pull protocol between the line breaker and the things it lays out.
//!
//! The breaker never looks at what it is packing. Instead each [Renderable] hands out a
//! [Renderator]: a cursor over its content that produces [FixedItem]s on demand, either
//! unconditionally (to start a fresh line) or only if they fit in what's left of the
//! current line.

use super::item::FixedItem;
use crate::units::Pt;

/// Anything that can be flowed into lines
pub trait Renderable {
    /// A fresh cursor positioned at the start of this renderable's content
    fn renderator(&self) -> Box<dyn Renderator<'_> + '_>;
}

/// The outcome of asking a [Renderator] for a fragment that must fit in the remaining space
#[must_use]
#[derive(Debug)]
pub enum Fit<'a> {
    /// The next fragment fits; the cursor has moved past it
    Fits(FixedItem<'a>),
    /// Nothing fits; the cursor has not moved
    DoesNotFit,
}

/// A single-use cursor over a renderable's content.
pub trait Renderator<'a> {
    /// True while there is content left to produce
    fn has_more(&self) -> bool;

    /// Produce the next fragment, as wide as `max_width` allows. If the next indivisible
    /// piece of content is wider than `max_width` on its own it is returned anyway, so that
    /// layout always makes progress. Only used to start a line.
    ///
    /// Panics if called when [has_more](Renderator::has_more) is false.
    fn get_something(&mut self, max_width: Pt) -> FixedItem<'a>;

    /// Produce the next fragment only if it fits in `remaining_width`. Only used when the
    /// line already holds something.
    fn get_if_fits(&mut self, remaining_width: Pt) -> Fit<'a>;
}

/// Whether something `width` wide fits in `remaining`. Zero-width content always fits, even
/// on a line that has already overflowed.
pub fn fits(width: Pt, remaining: Pt) -> bool {
    width == Pt(0.0) || width <= remaining
}

/// A cursor over content that is a single indivisible fragment, such as an image
pub struct SingleItemRenderator<'a> {
    item: Option<FixedItem<'a>>,
}

impl<'a> SingleItemRenderator<'a> {
    pub fn new(item: FixedItem<'a>) -> SingleItemRenderator<'a> {
        SingleItemRenderator { item: Some(item) }
    }
}

impl<'a> Renderator<'a> for SingleItemRenderator<'a> {
    fn has_more(&self) -> bool {
        self.item.is_some()
    }

    fn get_something(&mut self, _max_width: Pt) -> FixedItem<'a> {
        self.item
            .take()
            .expect("get_something called on an exhausted renderator")
    }

    fn get_if_fits(&mut self, remaining_width: Pt) -> Fit<'a> {
        match self.item.take() {
            Some(item) if fits(item.width(), remaining_width) => Fit::Fits(item),
            item => {
                self.item = item;
                Fit::DoesNotFit
            }
        }
    }
}
