//! Sketch bytecode: one byte per instruction, no header, no framing.
//!
//! See `instructions` for the byte layout and `fields` for how values wider
//! than a single 6-bit operand are spread across DATA instructions.

mod dump;
mod fields;
mod instructions;

#[cfg(test)]
mod instructions_tests;

pub use dump::dump;
pub use fields::{
    COLOUR_FIELDS, ColourFields, FIELD_MASK, OPACITY_FIELD, Rgb, SelfTestFailure, TAIL_MARKER,
    pack_high2, pack_low6, pack_mid6, pack_rotate, pack_tail, unpack_high_low, unpack_mid_rotate,
    unpack_rotate_tail, verify_known_vectors,
};
pub use instructions::{
    DY_COMMIT, Instruction, OPERAND_MASK, Opcode, TOOL_BLOCK, TOOL_COLOUR, TOOL_NONE,
    TOOL_TARGET_X, TOOL_TARGET_Y, ToolOp, data, is_data, signed_operand,
};
