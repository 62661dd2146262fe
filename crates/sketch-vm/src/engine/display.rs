//! The collaborator a frame is drawn onto.

/// Drawing surface driven by the VM.
///
/// Coordinates are canvas pixels; anything off the canvas is the display's
/// business to clip. `colour` receives the raw accumulator, `0xRRGGBBAA`.
pub trait Display {
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32);

    /// Filled rectangle anchored at `(x, y)`. Width and height may be negative.
    fn block(&mut self, x: i32, y: i32, width: i32, height: i32);

    fn colour(&mut self, rgba: u32);

    /// Present the frame.
    fn show(&mut self);

    fn pause(&mut self, units: u32);
}

impl<D: Display + ?Sized> Display for &mut D {
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        (**self).line(x0, y0, x1, y1);
    }

    fn block(&mut self, x: i32, y: i32, width: i32, height: i32) {
        (**self).block(x, y, width, height);
    }

    fn colour(&mut self, rgba: u32) {
        (**self).colour(rgba);
    }

    fn show(&mut self) {
        (**self).show();
    }

    fn pause(&mut self, units: u32) {
        (**self).pause(units);
    }
}
