//! Font metrics: vertical measurements and string widths in document units.
//!
//! ```text
//!         ----    __----__
//!         ^     ,'  ."".  `,
//!         |    /   /    \   \
//!    Ascent   (   (      )   )
//!         V    \   \_  _/   /
//!         ____  `.__ ""  _,'
//! Descent/          """\ \,.
//!        \____          '--"
//! Leading ____  _  _  _  _  _  _
//!
//! Line height = ascent + descent + leading.
//! ```

use crate::colour::Colour;
use crate::config::Calibration;
use crate::units::Pt;
use crate::LayoutError;
use std::fmt;
use std::sync::Arc;

/// Something that can report raw font metrics. All values are in glyph space, where one em
/// is 1000 units, as found in a PDF font descriptor.
pub trait FontMetricsSource: Send + Sync {
    /// Distance from the baseline to the top of the font
    fn raw_ascent(&self) -> f32;

    /// Distance from the baseline to the bottom of the font. Conventionally negative
    fn raw_descent(&self) -> f32;

    /// The average advance width of the font's glyphs
    fn average_glyph_width(&self) -> Result<f32, LayoutError>;

    /// The summed advance width of every character in `text`
    fn string_width(&self, text: &str) -> Result<f32, LayoutError>;

    /// The bytes of a PDF string showing `text` in this font.
    ///
    /// Defaults to a simple single-byte font: each character is its own code, and characters
    /// past U+00FF are shown as `?`.
    fn encode(&self, text: &str) -> Vec<u8> {
        text.chars()
            .map(|ch| u8::try_from(ch).unwrap_or(b'?'))
            .collect()
    }
}

/// A fixed-pitch font: every character has the same advance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub advance: f32,
}

impl MonospaceMetrics {
    pub fn new(ascent: f32, descent: f32, advance: f32) -> MonospaceMetrics {
        MonospaceMetrics {
            ascent,
            descent,
            advance,
        }
    }

    /// Metrics of the standard Courier font
    pub fn courier() -> MonospaceMetrics {
        MonospaceMetrics::new(629.0, -157.0, 600.0)
    }
}

impl FontMetricsSource for MonospaceMetrics {
    fn raw_ascent(&self) -> f32 {
        self.ascent
    }

    fn raw_descent(&self) -> f32 {
        self.descent
    }

    fn average_glyph_width(&self) -> Result<f32, LayoutError> {
        Ok(self.advance)
    }

    fn string_width(&self, text: &str) -> Result<f32, LayoutError> {
        Ok(text.chars().count() as f32 * self.advance)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct AscDescLead {
    ascent: Pt,
    descent: Pt,
    leading: Pt,
}

impl AscDescLead {
    fn from_leading_factor(font: &dyn FontMetricsSource, factor: f32, leading_factor: f32) -> Self {
        let ascent = Pt(font.raw_ascent() * factor);
        let descent = Pt(font.raw_descent() * -factor);
        // the descent is a good default for spacing below the line, too
        let leading = descent * leading_factor;
        AscDescLead {
            ascent,
            descent,
            leading,
        }
    }

    fn line_height(&self) -> Pt {
        self.ascent + self.descent + self.leading
    }
}

/// A font at a given size and colour, with all of its vertical metrics resolved into
/// document units. Immutable; changing the colour produces a new style sharing the same
/// metrics.
///
/// `TextStyle` is cheap to clone and may be shared between any number of layouts.
#[derive(Clone)]
pub struct TextStyle {
    font: Arc<dyn FontMetricsSource>,
    size: Pt,
    colour: Colour,
    adl: AscDescLead,
    factor: f32,
    avg_char_width: Pt,
}

impl TextStyle {
    /// Create a style with a leading of half the font's descent
    pub fn new(
        font: Arc<dyn FontMetricsSource>,
        size: Pt,
        colour: Colour,
    ) -> Result<TextStyle, LayoutError> {
        TextStyle::with_leading_factor(font, size, colour, 0.5)
    }

    /// Create a style whose leading (vertical space between lines) is `leading_factor` times
    /// the font descent. A factor of 1 gives a leading equal to the descent, 2 gives twice the
    /// descent, etc.
    pub fn with_leading_factor(
        font: Arc<dyn FontMetricsSource>,
        size: Pt,
        colour: Colour,
        leading_factor: f32,
    ) -> Result<TextStyle, LayoutError> {
        TextStyle::with_calibration(font, size, colour, leading_factor, Calibration::default())
    }

    /// Create a style using a non-default backend calibration
    pub fn with_calibration(
        font: Arc<dyn FontMetricsSource>,
        size: Pt,
        colour: Colour,
        leading_factor: f32,
        calibration: Calibration,
    ) -> Result<TextStyle, LayoutError> {
        if !size.is_positive() {
            return Err(LayoutError::InvalidFontSize(size));
        }
        calibration.validate()?;

        let factor = calibration.factor(*size);
        let adl = AscDescLead::from_leading_factor(font.as_ref(), factor, leading_factor);
        let avg_glyph_width = font.average_glyph_width().unwrap_or_else(|e| {
            log::warn!(
                "font can't report an average glyph width ({e}), assuming {}",
                calibration.default_average_glyph_width
            );
            calibration.default_average_glyph_width
        });

        Ok(TextStyle {
            font,
            size,
            colour,
            adl,
            factor,
            avg_char_width: Pt(avg_glyph_width * factor),
        })
    }

    /// The width of `text` rendered in this style. Never fails: if the font can't measure the
    /// text, the width is estimated from the average character width.
    pub fn string_width(&self, text: &str) -> Pt {
        if text.is_empty() {
            return Pt(0.0);
        }

        match self.font.string_width(text) {
            Ok(width) => Pt(width * self.factor),
            Err(e) => {
                log::debug!("can't measure {text:?} ({e}), estimating from average width");
                self.avg_char_width * text.chars().count() as f32
            }
        }
    }

    /// A copy of this style in another colour
    pub fn with_colour(&self, colour: Colour) -> TextStyle {
        TextStyle {
            colour,
            ..self.clone()
        }
    }

    pub fn font(&self) -> &Arc<dyn FontMetricsSource> {
        &self.font
    }

    pub fn size(&self) -> Pt {
        self.size
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// Average character width, as a positive number in document units
    pub fn avg_char_width(&self) -> Pt {
        self.avg_char_width
    }

    /// Ascent as a positive number in document units
    pub fn ascent(&self) -> Pt {
        self.adl.ascent
    }

    /// Descent as a positive number in document units
    pub fn descent(&self) -> Pt {
        self.adl.descent
    }

    /// Leading as a positive number in document units
    pub fn leading(&self) -> Pt {
        self.adl.leading
    }

    pub fn line_height(&self) -> Pt {
        self.adl.line_height()
    }
}

impl fmt::Debug for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextStyle")
            .field("size", &self.size)
            .field("colour", &self.colour)
            .field("ascent", &self.adl.ascent)
            .field("descent", &self.adl.descent)
            .field("leading", &self.adl.leading)
            .field("avg_char_width", &self.avg_char_width)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colours;
    use crate::config::DEFAULT_AVERAGE_GLYPH_WIDTH;

    /// A font that knows its vertical metrics but can never measure anything
    struct Unmeasurable;

    impl FontMetricsSource for Unmeasurable {
        fn raw_ascent(&self) -> f32 {
            720.0
        }

        fn raw_descent(&self) -> f32 {
            -240.0
        }

        fn average_glyph_width(&self) -> Result<f32, LayoutError> {
            Err(LayoutError::MetricsUnavailable("no widths table"))
        }

        fn string_width(&self, text: &str) -> Result<f32, LayoutError> {
            Err(LayoutError::MissingGlyph(text.chars().next().unwrap_or(' ')))
        }
    }

    fn courier(size: f32) -> TextStyle {
        TextStyle::new(
            Arc::new(MonospaceMetrics::courier()),
            Pt(size),
            colours::BLACK,
        )
        .expect("valid style")
    }

    #[test]
    fn vertical_metrics_scale_by_960() {
        let style = TextStyle::new(Arc::new(Unmeasurable), Pt(960.0), colours::BLACK)
            .expect("valid style");
        assert_eq!(style.ascent(), Pt(720.0));
        assert_eq!(style.descent(), Pt(240.0));
        assert_eq!(style.leading(), Pt(120.0));
        assert_eq!(style.line_height(), Pt(1080.0));
    }

    #[test]
    fn line_height_is_the_sum_of_its_parts() {
        for size in [5.0, 9.5, 12.0, 33.3, 200.0] {
            let style = courier(size);
            assert!(style.ascent() >= Pt(0.0));
            assert!(style.descent() >= Pt(0.0));
            assert!(style.leading() >= Pt(0.0));
            assert_eq!(
                style.line_height(),
                style.ascent() + style.descent() + style.leading()
            );
        }
    }

    #[test]
    fn leading_factor_multiplies_descent() {
        let style = TextStyle::with_leading_factor(
            Arc::new(Unmeasurable),
            Pt(960.0),
            colours::BLACK,
            2.0,
        )
        .expect("valid style");
        assert_eq!(style.leading(), Pt(480.0));
    }

    #[test]
    fn measures_with_the_font_when_it_can() {
        let style = courier(960.0);
        assert_eq!(style.string_width("abc"), Pt(1800.0));
        assert_eq!(style.string_width(""), Pt(0.0));
    }

    #[test]
    fn falls_back_to_average_width() {
        let style =
            TextStyle::new(Arc::new(Unmeasurable), Pt(96.0), colours::BLACK).expect("valid style");
        let factor = 96.0 / 960.0;
        assert_eq!(style.avg_char_width(), Pt(DEFAULT_AVERAGE_GLYPH_WIDTH * factor));
        for text in ["a", "hello", "two words", "ünïcödé"] {
            assert_eq!(
                style.string_width(text),
                style.avg_char_width() * text.chars().count() as f32
            );
        }
        assert_eq!(style.string_width(""), Pt(0.0));
    }

    #[test]
    fn calibration_is_overridable() {
        let calibration = Calibration {
            font_units_per_doc_unit: 1000.0,
            default_average_glyph_width: 400.0,
        };
        let style = TextStyle::with_calibration(
            Arc::new(Unmeasurable),
            Pt(1000.0),
            colours::BLACK,
            0.5,
            calibration,
        )
        .expect("valid style");
        assert_eq!(style.ascent(), Pt(720.0));
        assert_eq!(style.avg_char_width(), Pt(400.0));
    }

    #[test]
    fn colour_does_not_change_metrics() {
        let style = courier(12.0);
        let red = style.with_colour(colours::RED);
        assert_eq!(red.colour(), colours::RED);
        assert_eq!(style.colour(), colours::BLACK);
        assert_eq!(red.ascent(), style.ascent());
        assert_eq!(red.descent(), style.descent());
        assert_eq!(red.leading(), style.leading());
        assert_eq!(red.string_width("same"), style.string_width("same"));
        assert!(Arc::ptr_eq(red.font(), style.font()));
    }

    #[test]
    fn rejects_non_positive_sizes() {
        for size in [0.0, -1.0, f32::NAN] {
            let result = TextStyle::new(
                Arc::new(MonospaceMetrics::courier()),
                Pt(size),
                colours::BLACK,
            );
            assert!(matches!(result, Err(LayoutError::InvalidFontSize(_))));
        }
    }

    #[test]
    fn rejects_unusable_calibrations() {
        let bad = [
            (0.0, 500.0),
            (-960.0, 500.0),
            (f32::NAN, 500.0),
            (f32::INFINITY, 500.0),
            (960.0, -1.0),
            (960.0, f32::NAN),
        ];
        for (font_units_per_doc_unit, default_average_glyph_width) in bad {
            let result = TextStyle::with_calibration(
                Arc::new(Unmeasurable),
                Pt(12.0),
                colours::BLACK,
                0.5,
                Calibration {
                    font_units_per_doc_unit,
                    default_average_glyph_width,
                },
            );
            assert!(matches!(result, Err(LayoutError::InvalidCalibration(_))));
        }
    }

    #[test]
    fn single_byte_encoding_by_default() {
        let font = MonospaceMetrics::courier();
        assert_eq!(font.encode("Hi!"), b"Hi!".to_vec());
        assert_eq!(font.encode("café"), vec![b'c', b'a', b'f', 0xe9]);
        assert_eq!(font.encode("a\u{2014}b"), b"a?b".to_vec());
        assert!(font.encode("").is_empty());
    }
}
