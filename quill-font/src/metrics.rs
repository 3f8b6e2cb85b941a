/// Read-only geometry queries against a font face.
///
/// Rendering backends implement this on their native font types. Frame code
/// consults it for line heights and tab geometry and never touches glyph
/// data.
pub trait FontMetrics {
    /// Height in pixels of a line set in this face.
    fn default_height(&self) -> usize;

    /// Width in pixels of `text` laid out on a single line.
    fn text_width(&self, text: &str) -> usize;

    /// Width in pixels of the reference digit used for tab measurement.
    ///
    /// Tab widths are expressed as multiples of the advance of `0`.
    fn tab_reference_width(&self) -> usize {
        self.text_width("0")
    }
}
