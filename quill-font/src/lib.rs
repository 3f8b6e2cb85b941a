//! Font geometry queries consumed by frame layout and rendering.

mod cell;
mod metrics;

pub use cell::CellMetrics;
pub use metrics::FontMetrics;
