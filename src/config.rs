use crate::LayoutError;

/// How many font units make up one document unit at font size 1.
///
/// Somewhere it says that font units are 1000 times page units, but tests with Helvetica and
/// Helvetica-Bold from size 5-200 show that 960x is pretty darn good.
/// TODO: Fix font-size for other fonts.
pub const DEFAULT_FONT_UNITS_PER_DOC_UNIT: f32 = 960.0;

/// Average glyph width, in 1000-per-em glyph space, assumed for fonts that can't report one.
pub const DEFAULT_AVERAGE_GLYPH_WIDTH: f32 = 500.0;

/// Backend calibration used to turn raw font metrics into document units.
///
/// These are tunables for the metrics model only; line breaking never reads them, so a
/// backend can be recalibrated without touching how lines are packed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    /// Divisor applied to `font_size` to get the scale factor from glyph space into document
    /// units. Defaults to [DEFAULT_FONT_UNITS_PER_DOC_UNIT].
    pub font_units_per_doc_unit: f32,
    /// Average glyph width used when the font can't provide one. Defaults to
    /// [DEFAULT_AVERAGE_GLYPH_WIDTH].
    pub default_average_glyph_width: f32,
}

impl Default for Calibration {
    fn default() -> Self {
        Calibration {
            font_units_per_doc_unit: DEFAULT_FONT_UNITS_PER_DOC_UNIT,
            default_average_glyph_width: DEFAULT_AVERAGE_GLYPH_WIDTH,
        }
    }
}

impl Calibration {
    /// Scale factor from glyph space into document units for the given font size
    pub fn factor(&self, font_size: f32) -> f32 {
        font_size / self.font_units_per_doc_unit
    }

    /// Check that the divisor is a positive number and the default width isn't negative
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !(self.font_units_per_doc_unit.is_finite() && self.font_units_per_doc_unit > 0.0) {
            return Err(LayoutError::InvalidCalibration(
                "font units per document unit must be a positive number",
            ));
        }
        if !(self.default_average_glyph_width.is_finite()
            && self.default_average_glyph_width >= 0.0)
        {
            return Err(LayoutError::InvalidCalibration(
                "default average glyph width must be a non-negative number",
            ));
        }
        Ok(())
    }
}
