pub mod config;
pub mod error;
pub mod geometry;
pub mod points;
pub mod preprocess;

pub use config::PreprocessConfig;
pub use error::{FigureError, FigureResult};
pub use geometry::{Point, Segment};
pub use points::PointRegistry;
pub use preprocess::{Preprocessor, SegmentCatalogue};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
