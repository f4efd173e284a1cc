mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod geometry;
pub use geometry::*;

/// Packing text and boxes into lines
pub mod layout;

mod metrics;
pub use metrics::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality, mostly for embedding rendered content streams
pub use pdf_writer;
