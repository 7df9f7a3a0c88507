//! # Fretboard Renderer
//!
//! Draws a stylized guitar neck with the tested position highlighted.
//!
//! ## Purpose
//! Rendering is a plain function of a [`FretboardView`] snapshot, drawing onto
//! anything that implements [`Surface`]. The browser bindings implement it
//! over a canvas 2D context; tests record the calls.
//!
//! ## What gets drawn
//! 1. **Board** - dark rectangle, 700x80 logical units
//! 2. **Frets** - 15 silver lines (nut plus 14 frets)
//! 3. **Strings** - 6 lines, string 1 on top and thinnest
//! 4. **Inlays** - dots at frets 3, 5, 7, 9 and a double dot at 12, repeated
//!    as small markers along the top edge. Each edge marker sits directly
//!    above its board inlay slot, and the fret 12 pair is centred on the slot
//!    rather than starting at it.
//! 5. **Highlight** - red dot in the fret slot, or a larger green dot on the
//!    nut for an open string
//!
//! The whole surface is cleared and redrawn on every call.
//!
//! ## Example
//! ```rust
//! use fretnote::fretboard::{render_fretboard, CanvasSize, FretboardView, Point, Surface};
//!
//! struct Count(usize);
//!
//! impl Surface for Count {
//!     fn clear(&mut self, _w: f64, _h: f64) {}
//!     fn fill_rect(&mut self, _o: Point, _w: f64, _h: f64, _c: &str) { self.0 += 1; }
//!     fn stroke_line(&mut self, _a: Point, _b: Point, _w: f64, _c: &str) { self.0 += 1; }
//!     fn fill_circle(&mut self, _p: Point, _r: f64, _c: &str) { self.0 += 1; }
//! }
//!
//! let mut surface = Count(0);
//! render_fretboard(&mut surface, &FretboardView::new(Some((6, 3)), CanvasSize::default()));
//! assert!(surface.0 > 0);
//! ```

pub mod layout;


pub use layout::{CanvasSize, Point};

use crate::tuning::STRING_COUNT;
use layout::*;

/// A 2D drawing target
pub trait Surface {
    /// Erase everything inside `width` x `height`
    fn clear(&mut self, width: f64, height: f64);

    fn fill_rect(&mut self, origin: Point, width: f64, height: f64, color: &str);

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: &str);

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str);
}

/// Everything the renderer needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FretboardView {
    /// `(string, fret)` to highlight
    pub highlight: Option<(u8, u8)>,
    pub canvas: CanvasSize,
}

impl FretboardView {
    pub fn new(highlight: Option<(u8, u8)>, canvas: CanvasSize) -> Self {
        Self { highlight, canvas }
    }
}

/// Clear `surface` and draw the fretboard for `view`
pub fn render_fretboard<S: Surface + ?Sized>(surface: &mut S, view: &FretboardView) {
    let scale = Scale::for_canvas(view.canvas);

    surface.clear(view.canvas.width, view.canvas.height);

    draw_board(surface, &scale);
    draw_frets(surface, &scale);
    draw_strings(surface, &scale);
    draw_inlays(surface, &scale);

    if let Some((string, fret)) = view.highlight {
        draw_highlight(surface, &scale, string, fret);
    }
}

fn draw_board<S: Surface + ?Sized>(surface: &mut S, scale: &Scale) {
    surface.fill_rect(
        scale.point(BOARD_LEFT, BOARD_TOP),
        scale.x(BOARD_WIDTH),
        scale.y(BOARD_HEIGHT),
        BOARD_COLOR,
    );
}

fn draw_frets<S: Surface + ?Sized>(surface: &mut S, scale: &Scale) {
    let width = scale.length(FRET_LINE_WIDTH);
    for fret in 0..=FRET_COUNT {
        let x = fret_x(fret);
        surface.stroke_line(
            scale.point(x, BOARD_TOP),
            scale.point(x, BOARD_TOP + BOARD_HEIGHT),
            width,
            FRET_COLOR,
        );
    }
}

fn draw_strings<S: Surface + ?Sized>(surface: &mut S, scale: &Scale) {
    for (i, string_width) in STRING_WIDTHS.iter().enumerate() {
        let y = string_y(i as u8 + 1);
        surface.stroke_line(
            scale.point(BOARD_LEFT, y),
            scale.point(BOARD_LEFT + BOARD_WIDTH, y),
            scale.length(*string_width),
            STRING_COLOR,
        );
    }
}

fn draw_inlays<S: Surface + ?Sized>(surface: &mut S, scale: &Scale) {
    let inlay_radius = scale.length(INLAY_RADIUS);
    let edge_radius = scale.length(EDGE_MARKER_RADIUS);

    for fret in INLAY_FRETS {
        let x = slot_center_x(fret);

        if fret == DOUBLE_INLAY_FRET {
            for y in DOUBLE_INLAY_Y {
                surface.fill_circle(scale.point(x, y), inlay_radius, INLAY_COLOR);
            }
            for dx in [-EDGE_MARKER_GAP / 2.0, EDGE_MARKER_GAP / 2.0] {
                surface.fill_circle(scale.point(x + dx, EDGE_MARKER_Y), edge_radius, INLAY_COLOR);
            }
        } else {
            surface.fill_circle(scale.point(x, LOGICAL_HEIGHT / 2.0), inlay_radius, INLAY_COLOR);
            surface.fill_circle(scale.point(x, EDGE_MARKER_Y), edge_radius, INLAY_COLOR);
        }
    }
}

fn draw_highlight<S: Surface + ?Sized>(surface: &mut S, scale: &Scale, string: u8, fret: u8) {
    if !(1..=STRING_COUNT).contains(&string) || fret > FRET_COUNT {
        return;
    }

    let y = string_y(string);
    if fret == 0 {
        surface.fill_circle(
            scale.point(BOARD_LEFT, y),
            scale.length(OPEN_STRING_RADIUS),
            OPEN_STRING_COLOR,
        );
    } else {
        surface.fill_circle(
            scale.point(slot_center_x(fret), y),
            scale.length(HIGHLIGHT_RADIUS),
            HIGHLIGHT_COLOR,
        );
    }
}
