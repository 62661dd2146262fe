//! Bytecode format and raster types for sketch files.
//!
//! This crate contains:
//! - Instruction grammar (opcodes, tool sub-opcodes, typed instruction view)
//! - DATA field packing used to carry colours and wide coordinates
//! - The fixed 200×200 grayscale raster and its PGM framing
//! - Human-readable disassembly and the ANSI palette used by it

pub mod bytecode;
pub mod colors;
pub mod raster;

// Re-export commonly used items at crate root
pub use bytecode::{
    COLOUR_FIELDS, ColourFields, DY_COMMIT, FIELD_MASK, Instruction, OPACITY_FIELD, OPERAND_MASK,
    Opcode, Rgb, SelfTestFailure, TAIL_MARKER, TOOL_BLOCK, TOOL_COLOUR, TOOL_NONE, TOOL_TARGET_X,
    TOOL_TARGET_Y, ToolOp, data, dump, is_data, pack_high2, pack_low6, pack_mid6, pack_rotate,
    pack_tail, signed_operand, unpack_high_low, unpack_mid_rotate, unpack_rotate_tail,
    verify_known_vectors,
};
pub use colors::Colors;
pub use raster::{HEADER_BUF_LEN, HEIGHT, PgmHeader, Raster, SAMPLE_COUNT, WIDTH};
