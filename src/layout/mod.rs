//! Inline layout: packing text and boxes into baseline-aligned lines.
//!
//! Content to be laid out implements [Renderable]. The line breaker pulls sized fragments
//! ([FixedItem]s) out of each renderable through its [Renderator] and packs them greedily
//! into [Line]s no wider than a given width. Lines know their own height but not where they
//! go; stacking them on a page is up to the caller.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use pdf_flow::{colours, Canvas, MonospaceMetrics, Pt, TextStyle, XyOffset};
//! use pdf_flow::layout::{renderables_to_lines, InlineBox, Renderable, Text};
//!
//! let style = TextStyle::new(Arc::new(MonospaceMetrics::courier()), Pt(12.0), colours::BLACK)
//!     .expect("valid font size");
//! let greeting = Text::new(style.clone(), "Hello, world! ");
//! let swatch = InlineBox::new(Pt(8.0), Pt(8.0)).with_fill(colours::RED);
//!
//! let items: Vec<&dyn Renderable> = vec![&greeting, &swatch];
//! let lines = renderables_to_lines(&items, Pt(72.0)).expect("valid width");
//!
//! let mut canvas = Canvas::new();
//! let mut top_left = XyOffset::new(Pt(72.0), Pt(720.0));
//! for line in lines.iter() {
//!     line.render(&mut canvas, top_left).expect("can render");
//!     top_left.y -= line.height() + style.leading();
//! }
//! ```

mod breaker;
mod inline_box;
mod item;
mod line;
mod renderable;
mod text;

pub use breaker::*;
pub use inline_box::*;
pub use item::*;
pub use line::*;
pub use renderable::*;
pub use text::*;
