//! Instruction encoding for sketch bytecode.
//!
//! Byte layout:
//! - Bits 7-6: Opcode (00=DX, 01=DY, 10=TOOL, 11=DATA)
//! - Bits 5-0: Operand (signed delta for DX/DY, sub-opcode for TOOL, raw bits for DATA)

/// Mask selecting the 6-bit operand of an instruction byte.
pub const OPERAND_MASK: u8 = 0x3F;

const OPCODE_SHIFT: u8 = 6;

/// `TOOL NONE`: select no drawing tool.
pub const TOOL_NONE: u8 = 0b10_000000 | ToolOp::None as u8;
/// `TOOL BLOCK`: select the filled-block tool.
pub const TOOL_BLOCK: u8 = 0b10_000000 | ToolOp::Block as u8;
/// `TOOL COLOUR`: flush the accumulator into the current colour.
pub const TOOL_COLOUR: u8 = 0b10_000000 | ToolOp::Colour as u8;
/// `TOOL TARGETX`: load the accumulator into the target abscissa.
pub const TOOL_TARGET_X: u8 = 0b10_000000 | ToolOp::TargetX as u8;
/// `TOOL TARGETY`: load the accumulator into the target ordinate.
pub const TOOL_TARGET_Y: u8 = 0b10_000000 | ToolOp::TargetY as u8;
/// `DY 0`: draw with the current tool and commit the cursor without moving.
pub const DY_COMMIT: u8 = 0b01_000000;

/// Top-level instruction class (bits 7-6).
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Stage a horizontal delta on the target.
    Dx = 0,
    /// Stage a vertical delta, draw, then commit the cursor.
    Dy = 1,
    /// Switch tool or trigger a side effect.
    Tool = 2,
    /// Shift six more bits into the accumulator.
    Data = 3,
}

impl Opcode {
    /// Decode the opcode of an instruction byte.
    pub fn from_byte(b: u8) -> Self {
        match b >> OPCODE_SHIFT {
            0b00 => Self::Dx,
            0b01 => Self::Dy,
            0b10 => Self::Tool,
            0b11 => Self::Data,
            _ => unreachable!(),
        }
    }

    /// Opcode bits positioned for OR-ing with an operand.
    pub fn tag(self) -> u8 {
        (self as u8) << OPCODE_SHIFT
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::Dx => "DX",
            Self::Dy => "DY",
            Self::Tool => "TOOL",
            Self::Data => "DATA",
        }
    }
}

/// Sub-opcode carried by a TOOL instruction.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToolOp {
    None = 0,
    Line = 1,
    Block = 2,
    Colour = 3,
    TargetX = 4,
    TargetY = 5,
    Show = 6,
    Pause = 7,
    NextFrame = 8,
}

impl ToolOp {
    /// Decode a TOOL operand. Operands past `NextFrame` are unassigned.
    pub fn from_operand(operand: u8) -> Option<Self> {
        match operand {
            0 => Some(Self::None),
            1 => Some(Self::Line),
            2 => Some(Self::Block),
            3 => Some(Self::Colour),
            4 => Some(Self::TargetX),
            5 => Some(Self::TargetY),
            6 => Some(Self::Show),
            7 => Some(Self::Pause),
            8 => Some(Self::NextFrame),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Line => "LINE",
            Self::Block => "BLOCK",
            Self::Colour => "COLOUR",
            Self::TargetX => "TARGETX",
            Self::TargetY => "TARGETY",
            Self::Show => "SHOW",
            Self::Pause => "PAUSE",
            Self::NextFrame => "NEXTFRAME",
        }
    }
}

/// Decoded view of a single instruction byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    Dx(i8),
    Dy(i8),
    Tool(ToolOp),
    /// TOOL with an unassigned sub-opcode (9..=63).
    UnknownTool(u8),
    Data(u8),
}

impl Instruction {
    /// Decode an instruction byte. Every byte decodes.
    pub fn decode(b: u8) -> Self {
        match Opcode::from_byte(b) {
            Opcode::Dx => Self::Dx(signed_operand(b)),
            Opcode::Dy => Self::Dy(signed_operand(b)),
            Opcode::Tool => {
                let operand = b & OPERAND_MASK;
                ToolOp::from_operand(operand).map_or(Self::UnknownTool(operand), Self::Tool)
            }
            Opcode::Data => Self::Data(b & OPERAND_MASK),
        }
    }

    /// Encode back to a byte.
    ///
    /// Panics if a delta is outside `-32..=31` or a raw operand exceeds 6 bits.
    pub fn to_byte(self) -> u8 {
        match self {
            Self::Dx(d) => Opcode::Dx.tag() | encode_delta(d),
            Self::Dy(d) => Opcode::Dy.tag() | encode_delta(d),
            Self::Tool(op) => Opcode::Tool.tag() | op as u8,
            Self::UnknownTool(n) => {
                assert!(n <= OPERAND_MASK, "tool operand overflow: {n} > 63");
                Opcode::Tool.tag() | n
            }
            Self::Data(v) => {
                assert!(v <= OPERAND_MASK, "data operand overflow: {v} > 63");
                Opcode::Data.tag() | v
            }
        }
    }

    pub fn opcode(self) -> Opcode {
        match self {
            Self::Dx(_) => Opcode::Dx,
            Self::Dy(_) => Opcode::Dy,
            Self::Tool(_) | Self::UnknownTool(_) => Opcode::Tool,
            Self::Data(_) => Opcode::Data,
        }
    }
}

fn encode_delta(d: i8) -> u8 {
    assert!((-32..=31).contains(&d), "delta out of range: {d}");
    (d as u8) & OPERAND_MASK
}

/// Sign-extend the 6-bit operand of `b` (`-32..=31`).
#[inline]
pub fn signed_operand(b: u8) -> i8 {
    ((b << 2) as i8) >> 2
}

/// Wrap a 6-bit field in a DATA instruction.
#[inline]
pub const fn data(field: u8) -> u8 {
    0b11_000000 | (field & OPERAND_MASK)
}

/// Check for the DATA opcode.
#[inline]
pub const fn is_data(b: u8) -> bool {
    b & 0b11_000000 == 0b11_000000
}
