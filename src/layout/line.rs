use super::item::FixedItem;
use crate::canvas::RenderTarget;
use crate::geometry::{XyDim, XyOffset};
use crate::units::Pt;
use crate::LayoutError;

/// A row of fixed items sharing one baseline.
///
/// A line accepts everything it is given; keeping it within a width is up to whoever fills
/// it (normally [renderables_to_lines](super::renderables_to_lines)).
#[derive(Debug, Default)]
pub struct Line<'a> {
    width: Pt,
    max_ascent: Pt,
    max_descent: Pt,
    items: Vec<FixedItem<'a>>,
}

impl<'a> Line<'a> {
    pub fn new() -> Line<'a> {
        Line::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.width == Pt(0.0)
    }

    pub fn append(&mut self, item: FixedItem<'a>) -> &mut Self {
        self.max_ascent = self.max_ascent.max(item.ascent());
        self.max_descent = self.max_descent.max(item.descent());
        self.width += item.width();
        self.items.push(item);
        self
    }

    /// Total width of everything on the line
    pub fn width(&self) -> Pt {
        self.width
    }

    /// Distance from the top of the line to the shared baseline
    pub fn max_ascent(&self) -> Pt {
        self.max_ascent
    }

    /// Distance from the shared baseline to the bottom of the line
    pub fn max_descent(&self) -> Pt {
        self.max_descent
    }

    pub fn height(&self) -> Pt {
        self.max_ascent + self.max_descent
    }

    pub fn xy_dim(&self) -> XyDim {
        XyDim::new(self.width, self.height())
    }

    /// The items on the line, in the order they will be drawn
    pub fn items(&self) -> &[FixedItem<'a>] {
        &self.items
    }

    /// Draw the line left to right with its top-left corner at `top_left`. Every item sits
    /// on the line's baseline, `max_ascent` below the top, no matter how tall it is.
    ///
    /// Returns the bottom-right corner of the line.
    pub fn render(
        &self,
        target: &mut dyn RenderTarget,
        top_left: XyOffset,
    ) -> Result<XyOffset, LayoutError> {
        let baseline = top_left.y - self.max_ascent;
        let mut x = top_left.x;
        for item in self.items.iter() {
            item.render(target, XyOffset::new(x, baseline + item.ascent()))?;
            x += item.width();
        }
        Ok(XyOffset::new(x, top_left.y - self.height()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Canvas, CanvasContents};
    use crate::colours;
    use crate::geometry::Rect;
    use crate::layout::InlineBox;

    fn item(width: f32, ascent: f32, descent: f32) -> FixedItem<'static> {
        FixedItem::new(Pt(width), Pt(ascent), Pt(descent), |_, _| Ok(()))
    }

    #[test]
    fn starts_empty() {
        let line = Line::new();
        assert!(line.is_empty());
        assert_eq!(line.height(), Pt(0.0));
        assert_eq!(line.width(), Pt(0.0));
    }

    #[test]
    fn append_tracks_the_tallest_parts() {
        let mut line = Line::new();
        let mut last = (Pt(0.0), Pt(0.0));
        for (w, a, d) in [(10.0, 5.0, 1.0), (4.0, 9.0, 0.5), (6.0, 2.0, 3.0), (1.0, 1.0, 1.0)] {
            line.append(item(w, a, d));
            assert!(line.max_ascent() >= last.0);
            assert!(line.max_descent() >= last.1);
            assert_eq!(line.height(), line.max_ascent() + line.max_descent());
            last = (line.max_ascent(), line.max_descent());
        }
        assert!(!line.is_empty());
        assert_eq!(line.width(), Pt(21.0));
        assert_eq!(line.max_ascent(), Pt(9.0));
        assert_eq!(line.max_descent(), Pt(3.0));
        assert_eq!(line.xy_dim(), XyDim::new(Pt(21.0), Pt(12.0)));
        assert_eq!(line.items().len(), 4);
    }

    #[test]
    fn zero_width_item_makes_line_non_empty() {
        let mut line = Line::new();
        line.append(item(0.0, 0.0, 0.0));
        assert!(!line.is_empty());
    }

    #[test]
    fn renders_on_a_shared_baseline() {
        let short = InlineBox::new(Pt(10.0), Pt(4.0)).with_fill(colours::RED);
        let tall = InlineBox::new(Pt(20.0), Pt(12.0)).with_fill(colours::BLUE);

        let mut line = Line::new();
        line.append(short.fixed_item()).append(tall.fixed_item());

        let mut canvas = Canvas::new();
        let end = line
            .render(&mut canvas, XyOffset::new(Pt(100.0), Pt(500.0)))
            .expect("can render");

        assert_eq!(end, XyOffset::new(Pt(130.0), Pt(488.0)));
        let rects: Vec<Rect> = canvas
            .contents
            .iter()
            .map(|c| match c {
                CanvasContents::Rect(r) => r.rect,
                CanvasContents::Text(_) => panic!("only boxes were rendered"),
            })
            .collect();
        // both boxes sit on the baseline at y = 488
        assert_eq!(
            rects,
            vec![
                Rect {
                    x1: Pt(100.0),
                    y1: Pt(488.0),
                    x2: Pt(110.0),
                    y2: Pt(492.0),
                },
                Rect {
                    x1: Pt(110.0),
                    y1: Pt(488.0),
                    x2: Pt(130.0),
                    y2: Pt(500.0),
                },
            ]
        );
    }
}
