//! Fretboard geometry in logical units.
//!
//! Everything is laid out on an 800x200 logical canvas and scaled to the
//! real canvas at draw time.

use serde::Serialize;

pub const LOGICAL_WIDTH: f64 = 800.0;
pub const LOGICAL_HEIGHT: f64 = 200.0;

pub const BOARD_LEFT: f64 = 50.0;
pub const BOARD_TOP: f64 = 60.0;
pub const BOARD_WIDTH: f64 = 700.0;
pub const BOARD_HEIGHT: f64 = 80.0;

/// Frets drawn on the board, not counting the nut
pub const FRET_COUNT: u8 = 14;
pub const FRET_SPACING: f64 = BOARD_WIDTH / FRET_COUNT as f64;
pub const FRET_LINE_WIDTH: f64 = 2.0;

pub const FIRST_STRING_Y: f64 = 70.0;
pub const STRING_SPACING: f64 = 12.0;
/// Stroke width per string, string 1 first
pub const STRING_WIDTHS: [f64; 6] = [1.0, 1.2, 1.5, 2.0, 2.5, 3.0];

/// Frets with position inlays that fit on a 14-fret board
pub const INLAY_FRETS: [u8; 5] = [3, 5, 7, 9, 12];
pub const DOUBLE_INLAY_FRET: u8 = 12;
pub const INLAY_RADIUS: f64 = 5.0;
pub const DOUBLE_INLAY_Y: [f64; 2] = [85.0, 115.0];
pub const EDGE_MARKER_Y: f64 = 55.0;
pub const EDGE_MARKER_RADIUS: f64 = 3.0;
pub const EDGE_MARKER_GAP: f64 = 10.0;

pub const HIGHLIGHT_RADIUS: f64 = 8.0;
pub const OPEN_STRING_RADIUS: f64 = 10.0;

pub const BOARD_COLOR: &str = "#2b2b2b";
pub const FRET_COLOR: &str = "silver";
pub const STRING_COLOR: &str = "#ccc";
pub const INLAY_COLOR: &str = "white";
pub const HIGHLIGHT_COLOR: &str = "red";
pub const OPEN_STRING_COLOR: &str = "#1ec41e";

/// A point in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pixel size of the drawing surface, always 4:1
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    /// Fit a container, never narrower than `min_width`
    pub fn for_container(container_width: f64, min_width: f64) -> Self {
        let width = container_width.max(min_width);
        Self {
            width,
            height: width * LOGICAL_HEIGHT / LOGICAL_WIDTH,
        }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: LOGICAL_WIDTH,
            height: LOGICAL_HEIGHT,
        }
    }
}

/// Maps logical units onto a canvas
#[derive(Debug, Clone, Copy)]
pub struct Scale {
    x: f64,
    y: f64,
}

impl Scale {
    pub fn for_canvas(canvas: CanvasSize) -> Self {
        Self {
            x: canvas.width / LOGICAL_WIDTH,
            y: canvas.height / LOGICAL_HEIGHT,
        }
    }

    pub fn point(&self, x: f64, y: f64) -> Point {
        Point::new(x * self.x, y * self.y)
    }

    pub fn x(&self, x: f64) -> f64 {
        x * self.x
    }

    pub fn y(&self, y: f64) -> f64 {
        y * self.y
    }

    /// Scale a stroke width or radius
    pub fn length(&self, length: f64) -> f64 {
        length * self.x.min(self.y)
    }
}

/// Logical x of the nut-side edge of fret line `fret`
pub fn fret_x(fret: u8) -> f64 {
    BOARD_LEFT + fret as f64 * FRET_SPACING
}

/// Logical x of the middle of the space behind `fret`
pub fn slot_center_x(fret: u8) -> f64 {
    BOARD_LEFT + (fret as f64 - 0.5) * FRET_SPACING
}

/// Logical y of a string (1-indexed)
pub fn string_y(string: u8) -> f64 {
    FIRST_STRING_Y + (string as f64 - 1.0) * STRING_SPACING
}
