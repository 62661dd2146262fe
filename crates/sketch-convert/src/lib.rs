//! Conversion between PGM rasters and sketch bytecode.
//!
//! The encoder turns each horizontal run of equal samples into a filled
//! block; the decoder recognises exactly that instruction shape and paints
//! the runs back. The pair round-trips any 200×200 raster bit for bit. The
//! decoder is not a general interpreter: bytecode from any other source
//! decodes to unspecified raster content without an error.

pub mod convert;
pub mod decode;
pub mod direction;
pub mod encode;
pub mod error;

#[cfg(test)]
mod convert_tests;
#[cfg(test)]
mod decode_tests;

pub use convert::{Converted, convert_file, decode_file, encode_file};
pub use decode::decode;
pub use direction::{Conversion, Direction};
pub use encode::{encode, encode_samples};
pub use error::{ConvertError, UsageError};
