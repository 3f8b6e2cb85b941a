use quill_font::CellMetrics;
use quill_frame::{ColorRole, Frame, Palette, options};

/// Handle standing in for a backend image or surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Image(&'static str);

fn main() {
    // Initialize a frame: font plus a full palette and background.
    let mut palette = Palette::default();
    palette[ColorRole::Background] = Some(Image("paper"));
    palette[ColorRole::Highlight] = Some(Image("pale yellow"));
    palette[ColorRole::Border] = Some(Image("dark yellow"));
    palette[ColorRole::Text] = Some(Image("black"));
    palette[ColorRole::HighlightText] = Some(Image("black"));

    let mut frame = Frame::new();
    frame
        .init(vec![
            options::colors(palette),
            options::background(Image("window")),
            options::font(Image("go-mono-14"), CellMetrics::new(7, 14)),
        ])
        .expect("frame init");

    println!(
        "line height {}px, tab width {}px, tick rebuild: {}",
        frame.default_height(),
        frame.max_tab_width(),
        frame.tick().needs_rebuild(),
    );

    // The renderer would rasterize the indicator at tick().height() and
    // hand it back.
    frame.install_tick(Image("tick"));

    // Swap to a wider face of the same height and request 4-character
    // tabs in one batch. The tab width resolves against the new advance
    // and the tick survives the swap.
    frame
        .init(vec![
            options::font(Image("go-mono-wide-14"), CellMetrics::new(9, 14)),
            options::max_tab(4),
        ])
        .expect("frame reconfigure");

    println!(
        "line height {}px, tab width {}px, tick rebuild: {}",
        frame.default_height(),
        frame.max_tab_width(),
        frame.tick().needs_rebuild(),
    );
}
