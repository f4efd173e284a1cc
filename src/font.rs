use crate::metrics::FontMetricsSource;
use crate::LayoutError;
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};

/// A parsed TrueType or OpenType font, used as a source of metrics for
/// [TextStyle](crate::TextStyle).
///
/// Font units are rescaled into the 1000-per-em glyph space of a PDF font descriptor, so
/// that fonts with any `units_per_em` measure the same way.
///
/// Text is encoded as big-endian two-byte glyph ids, so the font must be embedded as a
/// Type0 font with the `Identity-H` encoding.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, LayoutError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Scale from font units into 1000-per-em glyph space
    fn scaling(&self) -> f32 {
        1000.0 / self.face.as_face_ref().units_per_em() as f32
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    /// The glyph drawn for characters the font doesn't have: U+FFFD if it has one, else `?`,
    /// else `.notdef`
    pub fn replacement_glyph_id(&self) -> u16 {
        self.glyph_id('\u{FFFD}')
            .or_else(|| self.glyph_id('?'))
            .unwrap_or(0)
    }
}

impl FontMetricsSource for Font {
    fn raw_ascent(&self) -> f32 {
        self.face.as_face_ref().ascender() as f32 * self.scaling()
    }

    fn raw_descent(&self) -> f32 {
        self.face.as_face_ref().descender() as f32 * self.scaling()
    }

    fn average_glyph_width(&self) -> Result<f32, LayoutError> {
        let face = self.face.as_face_ref();
        let (sum, count) = (0..face.number_of_glyphs())
            .filter_map(|gid| face.glyph_hor_advance(GlyphId(gid)))
            .fold((0usize, 0usize), |(sum, count), w| {
                (sum + w as usize, count + 1)
            });

        if count == 0 {
            return Err(LayoutError::MetricsUnavailable("font has no horizontal advances"));
        }
        Ok(sum as f32 / count as f32 * self.scaling())
    }

    /// Fails on the first character the font has no glyph for, rather than silently
    /// substituting a replacement glyph's width
    fn string_width(&self, text: &str) -> Result<f32, LayoutError> {
        let face = self.face.as_face_ref();
        let mut width = 0u32;
        for ch in text.chars() {
            let gid = face
                .glyph_index(ch)
                .ok_or(LayoutError::MissingGlyph(ch))?;
            let advance = face
                .glyph_hor_advance(gid)
                .ok_or(LayoutError::MissingGlyph(ch))?;
            width += advance as u32;
        }
        Ok(width as f32 * self.scaling())
    }

    fn encode(&self, text: &str) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(text.len() * 2);
        for ch in text.chars() {
            let gid = self
                .glyph_id(ch)
                .unwrap_or_else(|| self.replacement_glyph_id());
            bytes.extend_from_slice(&gid.to_be_bytes());
        }
        bytes
    }
}
