use quill_font::FontMetrics;

/// Font state tracked by the frame.
///
/// Pairs the metrics provider consulted for geometry with the backend face
/// handle used for glyph drawing. Metrics-only configurations leave the face
/// empty; such a frame can compute layout but cannot be painted.
pub struct FrameFont<I> {
    face: Option<I>,
    metrics: Box<dyn FontMetrics>,
}

impl<I> FrameFont<I> {
    pub(crate) fn with_face(face: I, metrics: impl FontMetrics + 'static) -> Self {
        Self {
            face: Some(face),
            metrics: Box::new(metrics),
        }
    }

    pub(crate) fn from_metrics(metrics: impl FontMetrics + 'static) -> Self {
        Self {
            face: None,
            metrics: Box::new(metrics),
        }
    }

    /// Backend face handle, if this font was configured with one.
    pub fn face(&self) -> Option<&I> {
        self.face.as_ref()
    }

    /// Metrics view of the font.
    pub fn metrics(&self) -> &dyn FontMetrics {
        self.metrics.as_ref()
    }
}

impl<I> FontMetrics for FrameFont<I> {
    fn default_height(&self) -> usize {
        self.metrics.default_height()
    }

    fn text_width(&self, text: &str) -> usize {
        self.metrics.text_width(text)
    }
}
