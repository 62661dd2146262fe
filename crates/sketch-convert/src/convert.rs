//! File-level conversion.
//!
//! The source is read completely before the target is created, so a
//! missing or unreadable source leaves nothing behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use sketch_bytecode::PgmHeader;
use sketch_bytecode::raster::{read_header_line, read_samples};

use crate::decode::decode;
use crate::direction::{Conversion, Direction};
use crate::encode::encode_samples;
use crate::error::ConvertError;

/// A finished conversion.
#[derive(Clone, Debug)]
pub struct Converted {
    pub conversion: Conversion,
    /// Header line of a PGM source, if it parsed. Never used to reject input.
    pub header: Option<PgmHeader>,
}

impl Converted {
    /// The source header parsed but describes something other than the
    /// 200×200 canvas, which is still read as if it were.
    pub fn header_mismatch(&self) -> Option<PgmHeader> {
        self.header.filter(|h| !h.is_canvas())
    }
}

/// Convert `path` in the direction its extension selects.
///
/// `conversion.target` is the file that was written.
pub fn convert_file(path: &Path) -> Result<Converted, ConvertError> {
    let conversion = Conversion::plan(path)?;
    let header = match conversion.direction {
        Direction::PgmToSketch => encode_file(&conversion.source, &conversion.target)?,
        Direction::SketchToPgm => {
            decode_file(&conversion.source, &conversion.target)?;
            None
        }
    };
    Ok(Converted { conversion, header })
}

/// PGM file to sketch file. Returns the source header when it parses.
pub fn encode_file(source: &Path, target: &Path) -> Result<Option<PgmHeader>, ConvertError> {
    let file = File::open(source).map_err(ConvertError::io(source))?;
    let mut reader = BufReader::new(file);
    let line = read_header_line(&mut reader).map_err(ConvertError::io(source))?;
    let samples = read_samples(&mut reader).map_err(ConvertError::io(source))?;

    let program = encode_samples(samples);
    fs::write(target, program).map_err(ConvertError::io(target))?;
    Ok(PgmHeader::parse(&line))
}

/// Sketch file to PGM file.
pub fn decode_file(source: &Path, target: &Path) -> Result<(), ConvertError> {
    let program = fs::read(source).map_err(ConvertError::io(source))?;
    let raster = decode(&program);

    let file = File::create(target).map_err(ConvertError::io(target))?;
    raster
        .write_pgm(&mut BufWriter::new(file))
        .map_err(ConvertError::io(target))
}
