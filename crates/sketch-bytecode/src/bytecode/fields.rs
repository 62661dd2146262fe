//! DATA field packing.
//!
//! A DATA instruction carries six bits. A colour byte travels as five packed
//! fields followed by an all-ones opacity field; six fields fill 36 bits, and
//! the low 32 read back as `0xRRGGBBAA` with the colour in every channel.
//!
//! ```text
//! field   1        2        3        4        5        6
//!       ....RR   RRRRRR   GGGGGG   GGBBBB   BBBBAA   AAAAAA
//! ```
//!
//! Coordinates above 63 use the first two layouts as a high/low pair.

/// Mask of a single DATA field.
pub const FIELD_MASK: u8 = 0x3F;

/// Fixed low bits of the fifth colour field (the top of the opacity byte).
pub const TAIL_MARKER: u8 = 0b11;

/// Sixth colour field: the rest of an opaque alpha channel.
pub const OPACITY_FIELD: u8 = FIELD_MASK;

/// Number of packed fields that carry the colour byte itself.
pub const COLOUR_FIELDS: usize = 5;

/// Top two bits, right-aligned.
#[inline]
pub fn pack_high2(v: u8) -> u8 {
    (v & 0xC0) >> 6
}

/// Bottom six bits.
#[inline]
pub fn pack_low6(v: u8) -> u8 {
    v & FIELD_MASK
}

/// Top six bits, right-aligned.
#[inline]
pub fn pack_mid6(v: u8) -> u8 {
    (v & 0xFC) >> 2
}

/// Bottom two bits into bits 4-5, top four bits into bits 0-3.
#[inline]
pub fn pack_rotate(v: u8) -> u8 {
    ((v & 0x03) << 4) | ((v & 0xF0) >> 4)
}

/// Bottom four bits into bits 2-5, marker in bits 0-1.
#[inline]
pub fn pack_tail(v: u8) -> u8 {
    ((v & 0x0F) << 2) | TAIL_MARKER
}

/// Inverse of `pack_high2`/`pack_low6`: two bits from `hi`, six from `lo`.
#[inline]
pub fn unpack_high_low(hi: u8, lo: u8) -> u8 {
    ((hi & 0x03) << 6) | (lo & FIELD_MASK)
}

/// Inverse of `pack_mid6`/`pack_rotate`: six bits from `hi`, two from bits 4-5 of `lo`.
#[inline]
pub fn unpack_mid_rotate(hi: u8, lo: u8) -> u8 {
    ((hi & FIELD_MASK) << 2) | ((lo & 0x30) >> 4)
}

/// Inverse of `pack_rotate`/`pack_tail`: four bits from `hi`, four from bits 2-5 of `lo`.
#[inline]
pub fn unpack_rotate_tail(hi: u8, lo: u8) -> u8 {
    ((hi & 0x0F) << 4) | ((lo & 0x3C) >> 2)
}

/// The five packed fields of a colour byte, in emission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColourFields(pub [u8; COLOUR_FIELDS]);

impl ColourFields {
    pub fn pack(v: u8) -> Self {
        Self([
            pack_high2(v),
            pack_low6(v),
            pack_mid6(v),
            pack_rotate(v),
            pack_tail(v),
        ])
    }

    /// Recover the three channels.
    ///
    /// The fourth field straddles green and blue, so it feeds both the green
    /// and the blue unpack.
    pub fn unpack(&self) -> Rgb {
        let [f0, f1, f2, f3, f4] = self.0;
        Rgb {
            r: unpack_high_low(f0, f1),
            g: unpack_mid_rotate(f2, f3),
            b: unpack_rotate_tail(f3, f4),
        }
    }
}

/// Three colour channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn grey(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Channels of a `0xRRGGBBAA` accumulator value. Alpha is dropped.
    pub fn from_rgba(rgba: u32) -> Self {
        Self {
            r: (rgba >> 24) as u8,
            g: (rgba >> 16) as u8,
            b: (rgba >> 8) as u8,
        }
    }

    /// Relative luminance, truncated.
    ///
    /// Weights are 0.2126/0.7152/0.0722 in ten-thousandths, so grey input
    /// maps back to itself exactly.
    pub fn luminance(self) -> u8 {
        let weighted = 2126 * self.r as u32 + 7152 * self.g as u32 + 722 * self.b as u32;
        (weighted / 10_000) as u8
    }
}

/// A published pack/unpack vector that did not hold.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{function}({input}) returned {actual}, expected {expected}")]
pub struct SelfTestFailure {
    pub function: &'static str,
    pub input: String,
    pub actual: u8,
    pub expected: u8,
}

type PackVector = (&'static str, fn(u8) -> u8, [(u8, u8); 2]);
type UnpackVector = (&'static str, fn(u8, u8) -> u8, [((u8, u8), u8); 2]);

const PACK_VECTORS: [PackVector; 5] = [
    ("pack_high2", pack_high2, [(178, 2), (126, 1)]),
    ("pack_low6", pack_low6, [(178, 50), (126, 62)]),
    ("pack_mid6", pack_mid6, [(178, 44), (126, 31)]),
    ("pack_rotate", pack_rotate, [(178, 43), (126, 39)]),
    ("pack_tail", pack_tail, [(178, 11), (126, 59)]),
];

const UNPACK_VECTORS: [UnpackVector; 3] = [
    ("unpack_high_low", unpack_high_low, [((2, 50), 178), ((1, 62), 126)]),
    ("unpack_mid_rotate", unpack_mid_rotate, [((44, 32), 178), ((31, 32), 126)]),
    ("unpack_rotate_tail", unpack_rotate_tail, [((11, 8), 178), ((7, 56), 126)]),
];

/// Check every pack and unpack function against the known vectors.
pub fn verify_known_vectors() -> Result<(), SelfTestFailure> {
    for (function, pack, cases) in PACK_VECTORS {
        for (input, expected) in cases {
            let actual = pack(input);
            if actual != expected {
                return Err(SelfTestFailure {
                    function,
                    input: input.to_string(),
                    actual,
                    expected,
                });
            }
        }
    }
    for (function, unpack, cases) in UNPACK_VECTORS {
        for ((hi, lo), expected) in cases {
            let actual = unpack(hi, lo);
            if actual != expected {
                return Err(SelfTestFailure {
                    function,
                    input: format!("{hi}, {lo}"),
                    actual,
                    expected,
                });
            }
        }
    }
    Ok(())
}
