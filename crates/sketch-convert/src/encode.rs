//! Raster to sketch: one filled block per horizontal run.
//!
//! Per run the encoder emits, in order:
//! 1. the colour as six DATA fields (`ColourFields` + opacity), then `TOOL COLOUR`
//! 2. `wStart` → `TOOL TARGETX`, `hStart` → `TOOL TARGETY`
//! 3. `TOOL NONE`, `DY 0` (commit the origin without drawing)
//! 4. `wFinal` → `TOOL TARGETX`, `hFinal` → `TOOL TARGETY`
//! 5. `TOOL BLOCK`, `DY 0` (fill the rectangle)
//!
//! Coordinates below 64 take one DATA instruction, larger ones two.

use sketch_bytecode::{
    ColourFields, DY_COMMIT, HEIGHT, OPACITY_FIELD, Raster, TOOL_BLOCK, TOOL_COLOUR, TOOL_NONE,
    TOOL_TARGET_X, TOOL_TARGET_Y, WIDTH, data, pack_high2, pack_low6,
};

/// Encode a full raster.
pub fn encode(raster: &Raster) -> Vec<u8> {
    encode_samples(raster.samples().iter().copied())
}

/// Encode row-major samples, stopping early if they run out.
pub fn encode_samples<I>(samples: I) -> Vec<u8>
where
    I: IntoIterator<Item = u8>,
{
    let mut samples = samples.into_iter();
    let mut out = Emitter::default();

    let (mut w_start, mut w_final) = (0, 1);
    let (mut h_start, mut h_final) = (0, 1);

    let mut next = samples.next();
    while let Some(colour) = next
        && h_final <= HEIGHT
    {
        out.colour(colour);
        out.coordinate(w_start, TOOL_TARGET_X);
        out.coordinate(h_start, TOOL_TARGET_Y);
        out.push(TOOL_NONE);
        out.push(DY_COMMIT);

        next = samples.next();
        while next == Some(colour) && w_final < WIDTH {
            w_final += 1;
            next = samples.next();
        }

        out.coordinate(w_final, TOOL_TARGET_X);
        out.coordinate(h_final, TOOL_TARGET_Y);
        out.push(TOOL_BLOCK);
        out.push(DY_COMMIT);

        if w_final == WIDTH {
            w_start = 0;
            w_final = 1;
            h_start += 1;
            h_final += 1;
        } else {
            w_start = w_final;
            w_final += 1;
        }
    }

    out.finish()
}

#[derive(Default)]
struct Emitter {
    bytes: Vec<u8>,
}

impl Emitter {
    #[inline]
    fn push(&mut self, b: u8) {
        self.bytes.push(b);
    }

    fn colour(&mut self, v: u8) {
        for field in ColourFields::pack(v).0 {
            self.push(data(field));
        }
        self.push(data(OPACITY_FIELD));
        self.push(TOOL_COLOUR);
    }

    /// Load `v` into the accumulator, then consume it with `tool`.
    fn coordinate(&mut self, v: usize, tool: u8) {
        debug_assert!(v <= u8::MAX as usize, "coordinate overflow: {v}");
        let v = v as u8;
        if v < 64 {
            self.push(data(v));
        } else {
            self.push(data(pack_high2(v)));
            self.push(data(pack_low6(v)));
        }
        self.push(tool);
    }

    fn finish(self) -> Vec<u8> {
        self.bytes
    }
}
