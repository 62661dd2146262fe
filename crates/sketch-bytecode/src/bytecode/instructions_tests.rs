//! Tests for instruction decoding and encoding.

use super::instructions::{
    DY_COMMIT, Instruction, Opcode, TOOL_BLOCK, TOOL_COLOUR, TOOL_NONE, TOOL_TARGET_X,
    TOOL_TARGET_Y, ToolOp, data, is_data, signed_operand,
};

#[test]
fn opcode_from_top_bits() {
    assert_eq!(Opcode::from_byte(0x00), Opcode::Dx);
    assert_eq!(Opcode::from_byte(0x7F), Opcode::Dy);
    assert_eq!(Opcode::from_byte(0x80), Opcode::Tool);
    assert_eq!(Opcode::from_byte(0xFF), Opcode::Data);
}

#[test]
fn signed_operand_range() {
    assert_eq!(signed_operand(0b00_000000), 0);
    assert_eq!(signed_operand(0b00_011111), 31);
    assert_eq!(signed_operand(0b00_100000), -32);
    assert_eq!(signed_operand(0b01_111111), -1);
    assert_eq!(signed_operand(0b01_111101), -3);
}

#[test]
fn fixed_encoder_bytes() {
    assert_eq!(TOOL_NONE, 128);
    assert_eq!(TOOL_BLOCK, 130);
    assert_eq!(TOOL_COLOUR, 131);
    assert_eq!(TOOL_TARGET_X, 132);
    assert_eq!(TOOL_TARGET_Y, 133);
    assert_eq!(DY_COMMIT, 64);
    assert_eq!(data(0), 192);
    assert_eq!(data(63), 255);
}

#[test]
fn decode_tool_ops() {
    assert_eq!(Instruction::decode(131), Instruction::Tool(ToolOp::Colour));
    assert_eq!(Instruction::decode(136), Instruction::Tool(ToolOp::NextFrame));
    assert_eq!(Instruction::decode(137), Instruction::UnknownTool(9));
    assert_eq!(Instruction::decode(191), Instruction::UnknownTool(63));
}

#[test]
fn decode_deltas_and_data() {
    assert_eq!(Instruction::decode(0b00_000101), Instruction::Dx(5));
    assert_eq!(Instruction::decode(0b01_111110), Instruction::Dy(-2));
    assert_eq!(Instruction::decode(0b11_101100), Instruction::Data(44));
}

#[test]
fn every_byte_reencodes() {
    for b in 0..=u8::MAX {
        assert_eq!(Instruction::decode(b).to_byte(), b, "byte {b:#04x}");
    }
}

#[test]
#[should_panic(expected = "delta out of range")]
fn delta_overflow_panics() {
    Instruction::Dx(32).to_byte();
}

#[test]
fn data_detection() {
    assert!(is_data(192));
    assert!(is_data(255));
    assert!(!is_data(131));
    assert!(!is_data(64));
}

#[test]
fn instruction_opcode() {
    assert_eq!(Instruction::UnknownTool(12).opcode(), Opcode::Tool);
    assert_eq!(Instruction::Dy(0).opcode(), Opcode::Dy);
    assert_eq!(Opcode::Tool.mnemonic(), "TOOL");
    assert_eq!(ToolOp::TargetY.name(), "TARGETY");
}
