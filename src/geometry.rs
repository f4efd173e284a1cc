use crate::units::*;

/// A rectangle, specified by two opposite corners. Coordinates follow PDF, with y growing
/// upwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the lower-left corner.
    pub x1: Pt,
    /// The y-coordinate of the lower-left corner.
    pub y1: Pt,
    /// The x-coordinate of the upper-right corner.
    pub x2: Pt,
    /// The y-coordinate of the upper-right corner.
    pub y2: Pt,
}

impl Rect {
    /// Build a rectangle from its top-left corner and dimensions
    pub fn from_top_left(top_left: XyOffset, dim: XyDim) -> Rect {
        Rect {
            x1: top_left.x,
            y1: top_left.y - dim.height,
            x2: top_left.x + dim.width,
            y2: top_left.y,
        }
    }

    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }
}

/// A position on the page
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct XyOffset {
    pub x: Pt,
    pub y: Pt,
}

impl XyOffset {
    pub fn new(x: Pt, y: Pt) -> XyOffset {
        XyOffset { x, y }
    }
}

/// The size of something on the page
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct XyDim {
    pub width: Pt,
    pub height: Pt,
}

impl XyDim {
    pub fn new(width: Pt, height: Pt) -> XyDim {
        XyDim { width, height }
    }

    pub fn plus(self, that: XyDim) -> XyDim {
        XyDim {
            width: self.width + that.width,
            height: self.height + that.height,
        }
    }

    pub fn minus(self, that: XyDim) -> XyDim {
        XyDim {
            width: self.width - that.width,
            height: self.height - that.height,
        }
    }

    /// The smallest dimension containing both `self` and `that`
    pub fn max_xy(self, that: XyDim) -> XyDim {
        XyDim {
            width: self.width.max(that.width),
            height: self.height.max(that.height),
        }
    }

    /// True if `self` fits inside `that` in both directions
    pub fn lte(self, that: XyDim) -> bool {
        self.width <= that.width && self.height <= that.height
    }
}
