//! Display state and deferred visual configuration for text frames.
//!
//! A frame lays out and displays styled text inside a window region. This
//! crate owns the configurable half of that job: the color palette, the
//! background surface, the active font and its metrics, the effective tab
//! width, and the cached cursor indicator (the "tick").
//!
//! Reconfiguration is batched. Callers hand [`Frame::init`] an ordered
//! sequence of [`FrameOption`]s; every option mutates the frame and records
//! any follow-up work it requires into one shared [`OptionContext`]. After
//! the whole batch has been applied the frame settles the aggregate
//! decisions once: whether the tick image must be rebuilt, and what tab
//! width in pixels applies.
//!
//! Image and surface handles are an opaque type parameter. The frame stores
//! them verbatim and never inspects their contents, so any backend image
//! type works.

mod error;
mod font;
mod frame;
mod palette;
mod tick;

pub mod options;

pub use error::{FrameError, Result};
pub use font::FrameFont;
pub use frame::{DEFAULT_TAB_CHARS, Frame};
pub use options::{FrameOption, OptionContext};
pub use palette::{ColorRole, Palette};
pub use tick::{TICK_WIDTH, Tick};

pub use quill_font as metrics;
