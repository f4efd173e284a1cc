//! Render targets: where laid-out lines get drawn.

use crate::colour::Colour;
use crate::geometry::{Rect, XyOffset};
use crate::metrics::{FontMetricsSource, TextStyle};
use crate::units::Pt;
use crate::LayoutError;
use pdf_writer::{Content, Name, Str};
use std::io::Write;
use std::sync::Arc;

/// Something that laid-out content can be drawn onto, such as a page
pub trait RenderTarget {
    /// Draw `text` in `style` with its baseline starting at `origin`
    fn draw_text(
        &mut self,
        origin: XyOffset,
        text: &str,
        style: &TextStyle,
    ) -> Result<(), LayoutError>;

    /// Fill `rect` with a solid colour
    fn fill_rect(&mut self, rect: Rect, colour: Colour) -> Result<(), LayoutError>;
}

/// Which font a span is drawn in: an index into [Canvas::fonts] and a size
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub index: usize,
    pub size: Pt,
}

/// A run of text placed at a baseline position
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: XyOffset,
}

/// A filled rectangle
#[derive(Clone, PartialEq, Debug)]
pub struct RectLayout {
    pub rect: Rect,
    pub colour: Colour,
}

#[derive(Clone, PartialEq, Debug)]
pub enum CanvasContents {
    Text(SpanLayout),
    Rect(RectLayout),
}

/// A [RenderTarget] that records everything drawn onto it, in order, and can turn it into
/// a PDF content stream.
///
/// Fonts are told apart by identity: every distinct font source drawn with is registered
/// once and referred to in the content stream as `/F{index}`, where `index` is its position
/// in [Canvas::fonts]. Whoever writes the page is responsible for providing those font
/// resources, embedded so that they match [FontMetricsSource::encode]: a
/// [Font](crate::Font) as a Type0 font with the `Identity-H` encoding, other sources as
/// simple single-byte fonts unless they encode otherwise.
#[derive(Default)]
pub struct Canvas {
    /// Everything drawn so far
    pub contents: Vec<CanvasContents>,
    fonts: Vec<Arc<dyn FontMetricsSource>>,
}

impl Canvas {
    pub fn new() -> Canvas {
        Canvas::default()
    }

    /// The fonts used on the canvas, in resource order
    pub fn fonts(&self) -> &[Arc<dyn FontMetricsSource>] {
        &self.fonts
    }

    fn font_index(&mut self, font: &Arc<dyn FontMetricsSource>) -> usize {
        match self.fonts.iter().position(|f| Arc::ptr_eq(f, font)) {
            Some(index) => index,
            None => {
                self.fonts.push(font.clone());
                self.fonts.len() - 1
            }
        }
    }

    /// Render the recorded contents as an uncompressed PDF content stream
    pub fn to_content(&self) -> Vec<u8> {
        let mut content = Content::new();

        for item in self.contents.iter() {
            match item {
                CanvasContents::Text(span) => {
                    content.save_state();
                    set_fill(&mut content, span.colour);
                    content.begin_text();
                    content.set_font(
                        Name(format!("F{}", span.font.index).as_bytes()),
                        *span.font.size,
                    );
                    content.next_line(*span.coords.x, *span.coords.y);
                    content.show(Str(&self.encode(span)));
                    content.end_text();
                    content.restore_state();
                }
                CanvasContents::Rect(r) => {
                    content.save_state();
                    set_fill(&mut content, r.colour);
                    content.rect(
                        *r.rect.x1,
                        *r.rect.y1,
                        *r.rect.width(),
                        *r.rect.height(),
                    );
                    content.fill_nonzero();
                    content.restore_state();
                }
            }
        }

        content.finish()
    }

    fn encode(&self, span: &SpanLayout) -> Vec<u8> {
        match self.fonts.get(span.font.index) {
            Some(font) => font.encode(&span.text),
            None => {
                log::warn!(
                    "span uses unregistered font {}, writing it single-byte encoded",
                    span.font.index
                );
                span.text
                    .chars()
                    .map(|ch| u8::try_from(ch).unwrap_or(b'?'))
                    .collect()
            }
        }
    }

    /// Render the recorded contents as a zlib-compressed content stream, suitable for a
    /// stream with a `FlateDecode` filter
    pub fn to_compressed_content(&self) -> Vec<u8> {
        miniz_oxide::deflate::compress_to_vec_zlib(
            &self.to_content(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        )
    }

    /// Write the compressed content stream to `w`
    pub fn write_content<W: Write>(&self, mut w: W) -> Result<(), LayoutError> {
        w.write_all(self.to_compressed_content().as_slice())
            .map_err(Into::into)
    }
}

impl RenderTarget for Canvas {
    fn draw_text(
        &mut self,
        origin: XyOffset,
        text: &str,
        style: &TextStyle,
    ) -> Result<(), LayoutError> {
        let index = self.font_index(style.font());
        self.contents.push(CanvasContents::Text(SpanLayout {
            text: text.to_string(),
            font: SpanFont {
                index,
                size: style.size(),
            },
            colour: style.colour(),
            coords: origin,
        }));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, colour: Colour) -> Result<(), LayoutError> {
        self.contents
            .push(CanvasContents::Rect(RectLayout { rect, colour }));
        Ok(())
    }
}

fn set_fill(content: &mut Content, colour: Colour) {
    match colour {
        Colour::RGB { r, g, b } => content.set_fill_rgb(r, g, b),
        Colour::CMYK { c, m, y, k } => content.set_fill_cmyk(c, m, y, k),
        Colour::Grey { g } => content.set_fill_gray(g),
    };
}
