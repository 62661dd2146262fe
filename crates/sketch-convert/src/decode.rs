//! Sketch to raster, for bytecode in the encoder's exact shape.
//!
//! Only three instruction shapes matter here:
//! - DATA: the first five consecutive ones are buffered as colour fields,
//!   the sixth decodes them into the current colour
//! - `TOOL COLOUR`: the next one or two bytes spell `wStart`
//! - `TOOL NONE`: skip the `DY`, the next one or two bytes spell `wFinal`,
//!   then paint `[wStart, wFinal)` of the current row
//!
//! Anything else only resets the DATA count. Nothing is validated.

use sketch_bytecode::{
    COLOUR_FIELDS, ColourFields, HEIGHT, Raster, TOOL_COLOUR, TOOL_NONE, WIDTH, is_data,
    unpack_high_low,
};

/// Instruction shapes the decoder reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shape {
    Data(u8),
    Colour,
    Origin,
    Other,
}

impl Shape {
    fn classify(b: u8) -> Self {
        match b {
            _ if is_data(b) => Self::Data(b),
            TOOL_COLOUR => Self::Colour,
            TOOL_NONE => Self::Origin,
            _ => Self::Other,
        }
    }
}

/// Rebuild a raster from encoder output.
pub fn decode(program: &[u8]) -> Raster {
    let mut decoder = RunDecoder::new(program);
    decoder.run();
    decoder.raster
}

struct RunDecoder<'p> {
    bytes: std::slice::Iter<'p, u8>,
    raster: Raster,
    row: usize,
    w_start: u8,
    colour: u8,
    fields: [u8; COLOUR_FIELDS],
    count: usize,
}

impl<'p> RunDecoder<'p> {
    fn new(program: &'p [u8]) -> Self {
        Self {
            bytes: program.iter(),
            raster: Raster::new(),
            row: 0,
            w_start: 0,
            colour: 0,
            fields: [0; COLOUR_FIELDS],
            count: 0,
        }
    }

    fn next_byte(&mut self) -> Option<u8> {
        self.bytes.next().copied()
    }

    fn run(&mut self) {
        let mut instruction = self.next_byte();

        while let Some(b) = instruction
            && self.row < HEIGHT
        {
            let mut replay = None;

            match Shape::classify(b) {
                Shape::Data(b) if self.count < COLOUR_FIELDS => {
                    self.fields[self.count] = b;
                    self.count += 1;
                }
                Shape::Data(_) => {
                    self.colour = ColourFields(self.fields).unpack().luminance();
                    self.count = 0;
                }
                Shape::Colour => {
                    let Some((w_start, leftover)) = self.coordinate() else {
                        break;
                    };
                    self.w_start = w_start;
                    replay = leftover;
                    self.count = 0;
                }
                Shape::Origin => {
                    // the DY that commits the origin
                    self.next_byte();
                    let Some((w_final, leftover)) = self.coordinate() else {
                        break;
                    };
                    replay = leftover;
                    self.count = 0;
                    self.paint(w_final);
                }
                Shape::Other => self.count = 0,
            }

            instruction = replay.or_else(|| self.next_byte());
        }
    }

    /// Read a one- or two-field coordinate.
    ///
    /// The second byte belongs to the coordinate only if it is DATA;
    /// otherwise it is handed back to be decoded as the next instruction.
    fn coordinate(&mut self) -> Option<(u8, Option<u8>)> {
        let hi = self.next_byte()?;
        match self.next_byte() {
            Some(lo) if is_data(lo) => Some((unpack_high_low(hi, lo), None)),
            lo => Some((hi & 0x3F, lo)),
        }
    }

    fn paint(&mut self, w_final: u8) {
        let w_final = w_final as usize;
        self.raster
            .fill_span(self.row, self.w_start as usize..w_final, self.colour);
        if w_final == WIDTH {
            self.row += 1;
        }
    }
}
