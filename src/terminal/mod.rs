//! Terminal module: where frames go and how big the place is.

mod geometry;
mod output;

pub use geometry::{FixedGeometry, Geometry, LiveGeometry, TerminalSize};
pub use output::OutputBuffer;
