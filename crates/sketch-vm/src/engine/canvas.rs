//! Headless display backed by a raster.

use sketch_bytecode::{HEIGHT, Raster, Rgb, WIDTH};

use super::display::Display;

/// Renders into a 200×200 grey raster.
///
/// Colours are reduced to their luminance. `show` and `pause` only count,
/// there is nothing to present and no clock to wait on.
#[derive(Clone, Debug, Default)]
pub struct Canvas {
    raster: Raster,
    colour: u8,
    frames_shown: usize,
    paused: u64,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Luminance currently drawn with.
    pub fn colour_value(&self) -> u8 {
        self.colour
    }

    pub fn frames_shown(&self) -> usize {
        self.frames_shown
    }

    /// Sum of all pause requests.
    pub fn paused(&self) -> u64 {
        self.paused
    }

    fn plot(&mut self, x: i64, y: i64) {
        if let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y))
            && x < WIDTH
            && y < HEIGHT
        {
            self.raster.set(x, y, self.colour);
        }
    }
}

impl Display for Canvas {
    /// Bresenham over the part of the segment that lies on the canvas,
    /// both end points included.
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let Some(((mut x, mut y), (x1, y1))) = clip((x0, y0), (x1, y1)) else {
            return;
        };
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x, y);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn block(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let (left, right) = span(x, width);
        let (top, bottom) = span(y, height);
        let columns = clamp(left, WIDTH)..clamp(right, WIDTH);
        for row in clamp(top, HEIGHT)..clamp(bottom, HEIGHT) {
            self.raster.fill_span(row, columns.clone(), self.colour);
        }
    }

    fn colour(&mut self, rgba: u32) {
        self.colour = Rgb::from_rgba(rgba).luminance();
    }

    fn show(&mut self) {
        self.frames_shown += 1;
    }

    fn pause(&mut self, units: u32) {
        self.paused += units as u64;
    }
}

const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const TOP: u8 = 4;
const BOTTOM: u8 = 8;

type Point = (i64, i64);

/// Cohen–Sutherland against `[0, WIDTH) × [0, HEIGHT)`.
///
/// Registers span the whole `i32` range, so walking an unclipped segment
/// could take billions of steps.
fn clip(from: (i32, i32), to: (i32, i32)) -> Option<(Point, Point)> {
    let (max_x, max_y) = ((WIDTH - 1) as f64, (HEIGHT - 1) as f64);
    let outcode = |x: f64, y: f64| {
        let mut code = 0;
        if x < 0.0 {
            code |= LEFT;
        } else if x > max_x {
            code |= RIGHT;
        }
        if y < 0.0 {
            code |= TOP;
        } else if y > max_y {
            code |= BOTTOM;
        }
        code
    };

    let (mut x0, mut y0) = (from.0 as f64, from.1 as f64);
    let (mut x1, mut y1) = (to.0 as f64, to.1 as f64);
    let (mut code0, mut code1) = (outcode(x0, y0), outcode(x1, y1));

    loop {
        if code0 | code1 == 0 {
            let round = |v: f64| v.round() as i64;
            return Some(((round(x0), round(y0)), (round(x1), round(y1))));
        }
        if code0 & code1 != 0 {
            return None;
        }
        let code = if code0 != 0 { code0 } else { code1 };
        let (x, y) = if code & TOP != 0 {
            (x0 + (x1 - x0) * (0.0 - y0) / (y1 - y0), 0.0)
        } else if code & BOTTOM != 0 {
            (x0 + (x1 - x0) * (max_y - y0) / (y1 - y0), max_y)
        } else if code & LEFT != 0 {
            (0.0, y0 + (y1 - y0) * (0.0 - x0) / (x1 - x0))
        } else {
            (max_x, y0 + (y1 - y0) * (max_x - x0) / (x1 - x0))
        };
        if code == code0 {
            (x0, y0) = (x, y);
            code0 = outcode(x0, y0);
        } else {
            (x1, y1) = (x, y);
            code1 = outcode(x1, y1);
        }
    }
}

/// Half-open interval covered by `origin` and a signed `extent`.
fn span(origin: i32, extent: i32) -> (i64, i64) {
    let a = origin as i64;
    let b = a + extent as i64;
    (a.min(b), a.max(b))
}

fn clamp(v: i64, limit: usize) -> usize {
    v.clamp(0, limit as i64) as usize
}
