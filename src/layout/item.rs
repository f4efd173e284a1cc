use crate::canvas::RenderTarget;
use crate::geometry::{XyDim, XyOffset};
use crate::units::Pt;
use crate::LayoutError;
use std::fmt;

type Painter<'a> = Box<dyn Fn(&mut dyn RenderTarget, XyOffset) -> Result<(), LayoutError> + 'a>;

/// A fragment of some renderable that has already been sized and is ready to be drawn.
///
/// The painter receives the top-left corner of the fragment; its baseline is `ascent` below
/// that point.
pub struct FixedItem<'a> {
    width: Pt,
    ascent: Pt,
    descent: Pt,
    painter: Painter<'a>,
}

impl<'a> FixedItem<'a> {
    pub fn new<F>(width: Pt, ascent: Pt, descent: Pt, painter: F) -> FixedItem<'a>
    where
        F: Fn(&mut dyn RenderTarget, XyOffset) -> Result<(), LayoutError> + 'a,
    {
        debug_assert!(
            ascent >= Pt(0.0) && descent >= Pt(0.0),
            "ascent and descent are positive distances from the baseline"
        );
        FixedItem {
            width,
            ascent,
            descent,
            painter: Box::new(painter),
        }
    }

    pub fn width(&self) -> Pt {
        self.width
    }

    /// Distance from the top of the fragment down to its baseline
    pub fn ascent(&self) -> Pt {
        self.ascent
    }

    /// Distance from the baseline down to the bottom of the fragment
    pub fn descent(&self) -> Pt {
        self.descent
    }

    pub fn xy_dim(&self) -> XyDim {
        XyDim::new(self.width, self.ascent + self.descent)
    }

    /// Draw the fragment with its top-left corner at `top_left`
    pub fn render(
        &self,
        target: &mut dyn RenderTarget,
        top_left: XyOffset,
    ) -> Result<(), LayoutError> {
        (self.painter)(target, top_left)
    }
}

impl fmt::Debug for FixedItem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedItem")
            .field("width", &self.width)
            .field("ascent", &self.ascent)
            .field("descent", &self.descent)
            .finish_non_exhaustive()
    }
}
