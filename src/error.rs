use crate::units::Pt;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error(transparent)]
    /// An I/O error occurred while writing to a render target
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error("font size must be a positive number, got {0}")]
    /// A text style was requested with a zero, negative, or non-finite size
    InvalidFontSize(Pt),

    #[error("invalid calibration: {0}")]
    /// A backend calibration would make every metric infinite, negative, or NaN
    InvalidCalibration(&'static str),

    #[error("layout width must be a positive number, got {0}")]
    /// Lines were requested with a zero, negative, or non-finite maximum width
    InvalidWidth(Pt),

    #[error("font has no glyph for {0:?}")]
    /// The font could not measure a character
    MissingGlyph(char),

    #[error("font metrics unavailable: {0}")]
    /// The font could not provide a metric at all
    MetricsUnavailable(&'static str),
}
