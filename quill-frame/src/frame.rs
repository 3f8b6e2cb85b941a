//! Frame display state and the configuration entry points.

use log::debug;

use quill_font::FontMetrics;

use crate::error::{FrameError, Result};
use crate::font::FrameFont;
use crate::options::{FrameOption, OptionContext};
use crate::palette::Palette;
use crate::tick::Tick;

/// Tab width applied when a frame is first initialized without an explicit
/// request, in reference characters.
pub const DEFAULT_TAB_CHARS: usize = 8;

/// Display state for styled text inside a window region.
///
/// The frame owns the configurable half of text display: palette, background
/// surface, font and metrics, effective tab width, and the cached cursor
/// tick. All visual reconfiguration goes through [`Frame::init`], which
/// applies a batch of [`FrameOption`]s in order and reconciles the derived
/// state afterwards.
///
/// `I` is the backend image handle type; handles are stored verbatim and
/// never interpreted.
pub struct Frame<I> {
    pub(crate) palette: Palette<I>,
    pub(crate) background: Option<I>,
    pub(crate) font: Option<FrameFont<I>>,

    /// Line height recorded at the last reconciliation.
    ///
    /// Baseline for deciding whether a later font change invalidates the
    /// tick.
    pub(crate) default_height: usize,

    /// Effective tab width in pixels.
    max_tab_width: usize,

    /// Cached cursor indicator.
    tick: Tick<I>,

    /// Whether [`Frame::init`] has completed at least once.
    inited: bool,
}

impl<I> Frame<I> {
    /// A frame with nothing configured. Call [`Frame::init`] before use.
    pub fn new() -> Self {
        Self {
            palette: Palette::default(),
            background: None,
            font: None,
            default_height: 0,
            max_tab_width: 0,
            tick: Tick::new(),
            inited: false,
        }
    }

    /// Apply `opts` in order against a fresh context and return it.
    ///
    /// Each option observes the frame and context mutations of the options
    /// before it. The returned context holds the batch's aggregate
    /// decisions; nothing is reconciled here. An empty sequence yields the
    /// default context, meaning "no change requested".
    pub fn apply_options(
        &mut self,
        opts: impl IntoIterator<Item = FrameOption<I>>,
    ) -> OptionContext {
        let mut ctx = OptionContext::default();
        for opt in opts {
            opt.call(self, &mut ctx);
        }
        ctx
    }

    /// Apply a batch of options and reconcile the derived state.
    ///
    /// The single configuration entry point, callable repeatedly. The first
    /// call must configure a font through [`options::font`] or
    /// [`options::font_metrics`]; later calls reuse the stored font.
    ///
    /// After the batch is applied the frame records the new default line
    /// height, settles the tab width against the now-current font (so a
    /// font change and a tab request in the same batch use the new
    /// advance), and invalidates the tick if any option asked for it or no
    /// tick image exists yet.
    ///
    /// [`options::font`]: crate::options::font
    /// [`options::font_metrics`]: crate::options::font_metrics
    pub fn init(
        &mut self,
        opts: impl IntoIterator<Item = FrameOption<I>>,
    ) -> Result<()> {
        let ctx = self.apply_options(opts);

        let font = self.font.as_ref().ok_or(FrameError::MissingFont)?;
        self.default_height = font.default_height();

        let reference = font.tab_reference_width();
        self.max_tab_width = if !self.inited && ctx.max_tab_chars().is_none() {
            DEFAULT_TAB_CHARS * reference
        } else {
            ctx.resolve_max_tab(self.max_tab_width, reference)
        };

        if ctx.update_tick() || self.tick.needs_rebuild() {
            debug!(
                "invalidating cursor tick, height {}",
                self.default_height
            );
            self.tick.invalidate(self.default_height);
        }

        debug!(
            "frame configured: line height {}, tab width {}px",
            self.default_height, self.max_tab_width
        );
        self.inited = true;
        Ok(())
    }

    /// Current drawing palette.
    pub fn palette(&self) -> &Palette<I> {
        &self.palette
    }

    /// Current background surface, if one is configured.
    pub fn background(&self) -> Option<&I> {
        self.background.as_ref()
    }

    /// Current font, if one is configured.
    pub fn font(&self) -> Option<&FrameFont<I>> {
        self.font.as_ref()
    }

    /// Line height recorded at the last reconciliation.
    pub fn default_height(&self) -> usize {
        self.default_height
    }

    /// Effective tab width in pixels.
    pub fn max_tab_width(&self) -> usize {
        self.max_tab_width
    }

    /// Cached cursor indicator state.
    pub fn tick(&self) -> &Tick<I> {
        &self.tick
    }

    /// Store a freshly drawn tick image, rasterized at
    /// [`Tick::height`].
    pub fn install_tick(&mut self, image: I) {
        self.tick.install(image);
    }

    /// Record whether the tick is currently painted on screen.
    pub fn set_tick_visible(&mut self, visible: bool) {
        self.tick.set_visible(visible);
    }

    /// Whether [`Frame::init`] has completed at least once.
    pub fn is_inited(&self) -> bool {
        self.inited
    }
}

impl<I> Default for Frame<I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use quill_font::CellMetrics;

    use crate::options;
    use crate::palette::ColorRole;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Img(u8);

    fn metrics(cell_width: usize, line_height: usize) -> CellMetrics {
        CellMetrics::new(cell_width, line_height)
    }

    #[test]
    fn init_requires_a_font() {
        let mut frame: Frame<Img> = Frame::new();
        let err = frame
            .init(vec![options::background(Img(1))])
            .unwrap_err();
        assert!(matches!(err, FrameError::MissingFont));
        assert!(!frame.is_inited());
    }

    #[test]
    fn first_init_defaults_to_eight_character_tabs() {
        let mut frame: Frame<Img> = Frame::new();
        frame
            .init(vec![options::font_metrics(metrics(7, 14))])
            .unwrap();

        assert!(frame.is_inited());
        assert_eq!(frame.default_height(), 14);
        assert_eq!(frame.max_tab_width(), DEFAULT_TAB_CHARS * 7);
    }

    #[test]
    fn explicit_tab_request_overrides_the_default() {
        let mut frame: Frame<Img> = Frame::new();
        frame
            .init(vec![
                options::font_metrics(metrics(7, 14)),
                options::max_tab(4),
            ])
            .unwrap();

        assert_eq!(frame.max_tab_width(), 28);
    }

    #[test]
    fn reinit_without_request_preserves_tab_width() {
        let mut frame: Frame<Img> = Frame::new();
        frame
            .init(vec![
                options::font_metrics(metrics(7, 14)),
                options::max_tab(4),
            ])
            .unwrap();

        frame.init(vec![options::background(Img(1))]).unwrap();
        assert_eq!(frame.max_tab_width(), 28);
    }

    #[test]
    fn tab_request_uses_the_font_from_the_same_batch() {
        let mut frame: Frame<Img> = Frame::new();
        frame
            .init(vec![options::font_metrics(metrics(7, 14))])
            .unwrap();

        // Widen the advance and request tabs in one batch; the request must
        // resolve against the new advance, not the old one.
        frame
            .init(vec![
                options::font_metrics(metrics(9, 14)),
                options::max_tab(4),
            ])
            .unwrap();

        assert_eq!(frame.max_tab_width(), 36);
    }

    #[test]
    fn fresh_frame_always_needs_a_tick() {
        let mut frame: Frame<Img> = Frame::new();
        frame
            .init(vec![options::font_metrics(metrics(7, 14))])
            .unwrap();

        assert!(frame.tick().needs_rebuild());
        assert_eq!(frame.tick().height(), 14);
    }

    #[test]
    fn palette_change_invalidates_an_installed_tick() {
        let mut frame: Frame<Img> = Frame::new();
        frame
            .init(vec![options::font_metrics(metrics(7, 14))])
            .unwrap();
        frame.install_tick(Img(42));
        assert!(!frame.tick().needs_rebuild());

        let mut palette = Palette::default();
        palette[ColorRole::Text] = Some(Img(1));
        frame.init(vec![options::colors(palette)]).unwrap();

        assert!(frame.tick().needs_rebuild());
    }

    #[test]
    fn same_height_font_swap_preserves_the_tick() {
        let mut frame: Frame<Img> = Frame::new();
        frame
            .init(vec![options::font(Img(7), metrics(7, 14))])
            .unwrap();
        frame.install_tick(Img(42));

        frame
            .init(vec![options::font(Img(8), metrics(9, 14))])
            .unwrap();

        assert!(!frame.tick().needs_rebuild());
        assert_eq!(frame.tick().image(), Some(&Img(42)));
        assert_eq!(frame.font().and_then(FrameFont::face), Some(&Img(8)));
    }

    #[test]
    fn height_change_invalidates_and_records_the_new_height() {
        let mut frame: Frame<Img> = Frame::new();
        frame
            .init(vec![options::font_metrics(metrics(7, 14))])
            .unwrap();
        frame.install_tick(Img(42));
        frame.set_tick_visible(true);

        frame
            .init(vec![options::font_metrics(metrics(7, 18))])
            .unwrap();

        assert!(frame.tick().needs_rebuild());
        assert!(!frame.tick().visible());
        assert_eq!(frame.tick().height(), 18);
        assert_eq!(frame.default_height(), 18);
    }
}
