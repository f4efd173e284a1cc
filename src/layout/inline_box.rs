use super::item::FixedItem;
use super::renderable::{Renderable, Renderator, SingleItemRenderator};
use crate::colour::Colour;
use crate::geometry::{Rect, XyDim};
use crate::units::Pt;

/// A fixed-size box laid out inline with text, such as an image placeholder or a colour
/// swatch. Its bottom edge sits on the text baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InlineBox {
    pub width: Pt,
    pub height: Pt,
    /// Colour to fill the box with when it is rendered; unfilled boxes only take up space
    pub fill: Option<Colour>,
}

impl InlineBox {
    pub fn new(width: Pt, height: Pt) -> InlineBox {
        InlineBox {
            width,
            height,
            fill: None,
        }
    }

    pub fn with_fill(mut self, colour: Colour) -> InlineBox {
        self.fill = Some(colour);
        self
    }

    pub fn xy_dim(&self) -> XyDim {
        XyDim::new(self.width, self.height)
    }

    /// The box as a single fragment
    pub fn fixed_item(&self) -> FixedItem<'_> {
        FixedItem::new(self.width, self.height, Pt(0.0), move |target, top_left| {
            match self.fill {
                Some(colour) => {
                    target.fill_rect(Rect::from_top_left(top_left, self.xy_dim()), colour)
                }
                None => Ok(()),
            }
        })
    }
}

impl Renderable for InlineBox {
    fn renderator(&self) -> Box<dyn Renderator<'_> + '_> {
        Box::new(SingleItemRenderator::new(self.fixed_item()))
    }
}
