//! Deferred frame configuration.
//!
//! A [`FrameOption`] is one unit of configuration: a closure that mutates
//! the frame and records into a shared [`OptionContext`] whatever follow-up
//! work its change requires. [`Frame::init`] threads a single context
//! through every option of a batch in order, then settles the aggregate
//! decisions (rebuild the cursor tick or not, and which tab width in pixels
//! applies) once, no matter how many options asked for them.
//!
//! The option set is open: anything implementing the closure shape can be
//! wrapped with [`FrameOption::new`] and mixed into a batch alongside the
//! constructors in this module.

use log::trace;

use quill_font::FontMetrics;

use crate::font::FrameFont;
use crate::frame::Frame;
use crate::palette::Palette;

/// Aggregate of follow-up work discovered while applying one batch of
/// options.
///
/// A context lives for exactly one configuration call: created fresh before
/// the first option runs, mutated by each option in turn, and consumed when
/// the frame reconciles afterwards. It is never shared across calls or
/// frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionContext {
    update_tick: bool,
    max_tab_chars: Option<usize>,
}

impl OptionContext {
    /// Whether the cached cursor tick must be rebuilt.
    pub fn update_tick(&self) -> bool {
        self.update_tick
    }

    /// Requested tab width in reference characters, if any option recorded
    /// one this call.
    pub fn max_tab_chars(&self) -> Option<usize> {
        self.max_tab_chars
    }

    /// Record that the cached tick became stale.
    ///
    /// A recorded request cannot be withdrawn by a later option in the same
    /// batch.
    pub fn request_tick_update(&mut self) {
        self.update_tick = true;
    }

    /// Record a tab width request in reference characters.
    ///
    /// The last request in a batch wins.
    pub fn request_max_tab(&mut self, chars: usize) {
        self.max_tab_chars = Some(chars);
    }

    /// Resolve the effective tab width in pixels.
    ///
    /// Returns `prior` untouched when no request was recorded this call,
    /// otherwise the requested character count times `reference_width`.
    /// Callers must resolve only after the whole batch has been applied, so
    /// that a font change in the same batch contributes its own reference
    /// width.
    pub fn resolve_max_tab(&self, prior: usize, reference_width: usize) -> usize {
        match self.max_tab_chars {
            Some(chars) => chars * reference_width,
            None => prior,
        }
    }
}

/// A single deferred configuration action.
///
/// Options are stateless beyond their captured payload, applied at most
/// once, and not retained after application.
pub struct FrameOption<I> {
    apply: Box<dyn FnOnce(&mut Frame<I>, &mut OptionContext)>,
}

impl<I> FrameOption<I> {
    /// Wrap a closure as an option.
    ///
    /// The closure observes all frame and context mutations made by options
    /// earlier in the same batch.
    pub fn new(
        apply: impl FnOnce(&mut Frame<I>, &mut OptionContext) + 'static,
    ) -> Self {
        Self {
            apply: Box::new(apply),
        }
    }

    pub(crate) fn call(self, frame: &mut Frame<I>, ctx: &mut OptionContext) {
        (self.apply)(frame, ctx);
    }
}

/// Replace the full drawing palette.
pub fn colors<I: 'static>(palette: Palette<I>) -> FrameOption<I> {
    FrameOption::new(move |frame, ctx| {
        trace!("setting frame palette");
        frame.palette = palette;
        // The tick is rasterized with the text and background colors.
        ctx.request_tick_update();
    })
}

/// Replace the background surface.
pub fn background<I: 'static>(image: I) -> FrameOption<I> {
    FrameOption::new(move |frame, ctx| {
        trace!("setting frame background");
        frame.background = Some(image);
        // The cached tick was composed against the old surface.
        ctx.request_tick_update();
    })
}

/// Set the frame font from a backend face and its metrics view.
pub fn font<I: 'static>(
    face: I,
    metrics: impl FontMetrics + 'static,
) -> FrameOption<I> {
    set_font(FrameFont::with_face(face, metrics))
}

/// Set the frame font from a metrics-only provider.
///
/// The frame can compute layout geometry but holds no face to paint with;
/// useful for headless embedders and tests.
pub fn font_metrics<I: 'static>(
    metrics: impl FontMetrics + 'static,
) -> FrameOption<I> {
    set_font(FrameFont::from_metrics(metrics))
}

fn set_font<I: 'static>(font: FrameFont<I>) -> FrameOption<I> {
    FrameOption::new(move |frame, ctx| {
        trace!("setting frame font, height {}", font.default_height());
        // The tick's geometry depends only on the line height, so a
        // same-height face swap reuses the existing artwork.
        if font.default_height() != frame.default_height {
            ctx.request_tick_update();
        }
        frame.font = Some(font);
    })
}

/// Request a tab width measured in reference characters.
///
/// Nothing on the frame changes while the batch is applied; the pixel width
/// is settled afterwards against whichever font the batch left active.
pub fn max_tab<I: 'static>(chars: usize) -> FrameOption<I> {
    FrameOption::new(move |_, ctx| {
        trace!("requesting tab width of {chars} reference characters");
        ctx.request_max_tab(chars);
    })
}
