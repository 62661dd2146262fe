//! Fixed-size grayscale raster and its binary PGM framing.
//!
//! The canvas is always 200×200. A PGM file is a one-line ASCII header
//! (`P5 <width> <height> <maxval>\n`) followed by row-major samples.
//! The header is skipped, not validated: a file that disagrees with the
//! fixed canvas produces whatever its samples happen to spell.

use std::io::{self, BufRead, Read, Write};
use std::ops::Range;

pub const WIDTH: usize = 200;
pub const HEIGHT: usize = 200;
pub const SAMPLE_COUNT: usize = WIDTH * HEIGHT;

/// Line buffer size for the header, terminator included.
pub const HEADER_BUF_LEN: usize = 16;

/// Row-major 200×200 luminance samples.
#[derive(Clone, PartialEq, Eq)]
pub struct Raster {
    samples: Vec<u8>,
}

impl Raster {
    /// All-black raster.
    pub fn new() -> Self {
        Self {
            samples: vec![0; SAMPLE_COUNT],
        }
    }

    /// Build from row-major samples. Short input is zero-padded, long input truncated.
    pub fn from_samples(mut samples: Vec<u8>) -> Self {
        samples.resize(SAMPLE_COUNT, 0);
        Self { samples }
    }

    /// # Panics
    ///
    /// If `x >= WIDTH` or `y >= HEIGHT`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.samples[index(x, y)]
    }

    /// # Panics
    ///
    /// If `x >= WIDTH` or `y >= HEIGHT`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        self.samples[index(x, y)] = v;
    }

    pub fn row(&self, y: usize) -> &[u8] {
        &self.samples[y * WIDTH..(y + 1) * WIDTH]
    }

    /// Fill `columns` of row `y`, clipped to the row.
    pub fn fill_span(&mut self, y: usize, columns: Range<usize>, v: u8) {
        if y >= HEIGHT {
            return;
        }
        let end = columns.end.min(WIDTH);
        if columns.start >= end {
            return;
        }
        let base = y * WIDTH;
        self.samples[base + columns.start..base + end].fill(v);
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Read a PGM stream: skip the header line, then take up to 40000 samples.
    pub fn read_pgm<R: BufRead>(reader: &mut R) -> io::Result<Self> {
        read_header_line(reader)?;
        Ok(Self::from_samples(read_samples(reader)?))
    }

    /// Write as binary PGM with the fixed header.
    pub fn write_pgm<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "P5 {WIDTH} {HEIGHT} 255")?;
        writer.write_all(&self.samples)?;
        writer.flush()
    }
}

impl Default for Raster {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Raster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Raster")
            .field("width", &WIDTH)
            .field("height", &HEIGHT)
            .finish_non_exhaustive()
    }
}

#[inline]
fn index(x: usize, y: usize) -> usize {
    assert!(x < WIDTH && y < HEIGHT, "({x}, {y}) is off the canvas");
    y * WIDTH + x
}

/// Consume the header the way a 16-byte line buffer would: through the first
/// newline or 15 bytes, whichever comes first.
pub fn read_header_line<R: BufRead>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut line = Vec::with_capacity(HEADER_BUF_LEN);
    reader
        .by_ref()
        .take((HEADER_BUF_LEN - 1) as u64)
        .read_until(b'\n', &mut line)?;
    Ok(line)
}

/// Read up to one canvas worth of samples. Fewer is not an error.
pub fn read_samples<R: Read>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut samples = Vec::with_capacity(SAMPLE_COUNT);
    reader
        .by_ref()
        .take(SAMPLE_COUNT as u64)
        .read_to_end(&mut samples)?;
    Ok(samples)
}

/// Parsed `P5` header fields, for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PgmHeader {
    pub width: usize,
    pub height: usize,
    pub maxval: u16,
}

impl PgmHeader {
    pub fn parse(line: &[u8]) -> Option<Self> {
        let text = std::str::from_utf8(line).ok()?;
        let mut parts = text.split_ascii_whitespace();
        if parts.next()? != "P5" {
            return None;
        }
        let width = parts.next()?.parse().ok()?;
        let height = parts.next()?.parse().ok()?;
        let maxval = parts.next()?.parse().ok()?;
        Some(Self {
            width,
            height,
            maxval,
        })
    }

    /// Whether the header describes the fixed canvas.
    pub fn is_canvas(&self) -> bool {
        self.width == WIDTH && self.height == HEIGHT && self.maxval == 255
    }
}
