//! Human-readable bytecode listing for debugging.
//!
//! One line per instruction: offset, raw byte, mnemonic, operand. TOOL
//! instructions that consume the DATA accumulator show the value they see.

use std::fmt::Write as _;

use crate::colors::Colors;

use super::instructions::{Instruction, ToolOp};

/// Generate a listing of `program`.
pub fn dump(program: &[u8], colors: Colors) -> String {
    let mut out = String::new();
    let width = offset_width(program.len());
    let mut data: u32 = 0;

    for (offset, &byte) in program.iter().enumerate() {
        let instr = Instruction::decode(byte);
        let (operand, note) = match instr {
            Instruction::Dx(d) | Instruction::Dy(d) => (d.to_string(), None),
            Instruction::Data(v) => {
                data = (data << 6) | v as u32;
                (v.to_string(), None)
            }
            Instruction::Tool(op) => {
                let note = consumed_note(op, data);
                data = 0;
                (op.name().to_string(), note)
            }
            Instruction::UnknownTool(n) => (format!("?{n}"), None),
        };

        let _ = write!(
            out,
            "{}{offset:0width$}{}  {}{byte:02x}{}  {}{:<4}{}  {operand}",
            colors.dim,
            colors.reset,
            colors.dim,
            colors.reset,
            colors.blue,
            instr.opcode().mnemonic(),
            colors.reset,
        );
        if let Some(note) = note {
            let _ = write!(out, "  {}; {note}{}", colors.green, colors.reset);
        }
        out.push('\n');
    }

    out
}

fn consumed_note(op: ToolOp, data: u32) -> Option<String> {
    match op {
        ToolOp::Colour => Some(format!("#{data:08x}")),
        ToolOp::TargetX | ToolOp::TargetY | ToolOp::Pause => Some(data.to_string()),
        _ => None,
    }
}

fn offset_width(len: usize) -> usize {
    len.saturating_sub(1).to_string().len().max(4)
}
