//! Guest-architecture value types for the armlet ARM JIT.
//!
//! These are the plain `Copy` types shared between the decoder, the
//! translation front-end and any downstream backend: register names,
//! condition codes, shift kinds and register-list masks. Nothing in here
//! knows about the IR.

use std::fmt;

/// An ARM general-purpose register, R0..R15.
///
/// R13/R14/R15 are SP/LR/PC by convention; the JIT front-end only treats
/// PC specially, so no aliases are defined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ArmReg {
    R0 = 0,
    R1 = 1,
    R2 = 2,
    R3 = 3,
    R4 = 4,
    R5 = 5,
    R6 = 6,
    R7 = 7,
    R8 = 8,
    R9 = 9,
    R10 = 10,
    R11 = 11,
    R12 = 12,
    Sp = 13,
    Lr = 14,
    Pc = 15,
}

impl ArmReg {
    pub const COUNT: usize = 16;

    /// Decode a 4-bit register field.
    #[inline]
    #[must_use]
    pub const fn from_u4(bits: u8) -> ArmReg {
        match bits & 0xF {
            0 => ArmReg::R0,
            1 => ArmReg::R1,
            2 => ArmReg::R2,
            3 => ArmReg::R3,
            4 => ArmReg::R4,
            5 => ArmReg::R5,
            6 => ArmReg::R6,
            7 => ArmReg::R7,
            8 => ArmReg::R8,
            9 => ArmReg::R9,
            10 => ArmReg::R10,
            11 => ArmReg::R11,
            12 => ArmReg::R12,
            13 => ArmReg::Sp,
            14 => ArmReg::Lr,
            _ => ArmReg::Pc,
        }
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_pc(self) -> bool {
        matches!(self, ArmReg::Pc)
    }
}

impl fmt::Display for ArmReg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArmReg::Sp => write!(f, "sp"),
            ArmReg::Lr => write!(f, "lr"),
            ArmReg::Pc => write!(f, "pc"),
            other => write!(f, "r{}", other.index()),
        }
    }
}

/// The 16 ARM condition codes, in encoding order.
///
/// `Al` always passes. `Nv` is the ARMv6 "unconditional space" used by
/// encodings such as BLX (immediate), not a real never-execute condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cond {
    Eq = 0,
    Ne = 1,
    Cs = 2,
    Cc = 3,
    Mi = 4,
    Pl = 5,
    Vs = 6,
    Vc = 7,
    Hi = 8,
    Ls = 9,
    Ge = 10,
    Lt = 11,
    Gt = 12,
    Le = 13,
    Al = 14,
    Nv = 15,
}

impl Cond {
    /// Decode a 4-bit condition field.
    #[inline]
    #[must_use]
    pub const fn from_u4(bits: u8) -> Cond {
        match bits & 0xF {
            0 => Cond::Eq,
            1 => Cond::Ne,
            2 => Cond::Cs,
            3 => Cond::Cc,
            4 => Cond::Mi,
            5 => Cond::Pl,
            6 => Cond::Vs,
            7 => Cond::Vc,
            8 => Cond::Hi,
            9 => Cond::Ls,
            10 => Cond::Ge,
            11 => Cond::Lt,
            12 => Cond::Gt,
            13 => Cond::Le,
            14 => Cond::Al,
            _ => Cond::Nv,
        }
    }

    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Immediate shift kinds from the instruction's `type` field.
///
/// A `Ror` with amount 0 encodes RRX; the decoder hands the raw field over
/// and the consumer applies the `DecodeImmShift` rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ShiftType {
    Lsl = 0,
    Lsr = 1,
    Asr = 2,
    Ror = 3,
}

impl ShiftType {
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u8) -> ShiftType {
        match bits & 0b11 {
            0 => ShiftType::Lsl,
            1 => ShiftType::Lsr,
            2 => ShiftType::Asr,
            _ => ShiftType::Ror,
        }
    }
}

/// Rotation applied before a sign/zero extension (SXTB/UXTH/...).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum SignExtendRotation {
    Ror0 = 0,
    Ror8 = 1,
    Ror16 = 2,
    Ror24 = 3,
}

impl SignExtendRotation {
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u8) -> SignExtendRotation {
        match bits & 0b11 {
            0 => SignExtendRotation::Ror0,
            1 => SignExtendRotation::Ror8,
            2 => SignExtendRotation::Ror16,
            _ => SignExtendRotation::Ror24,
        }
    }

    /// The rotation amount in bits.
    #[inline]
    #[must_use]
    pub const fn amount(self) -> u32 {
        (self as u32) * 8
    }
}

/// A 16-bit register-list mask (LDM/STM), bit N selecting RN.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RegList(pub u16);

impl RegList {
    #[inline]
    #[must_use]
    pub const fn contains(self, reg: ArmReg) -> bool {
        (self.0 >> reg.index()) & 1 != 0
    }

    #[inline]
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the selected registers in ascending order (the architectural
    /// transfer order for LDM/STM).
    pub fn iter(self) -> impl Iterator<Item = ArmReg> {
        (0u8..16).filter_map(move |i| {
            if (self.0 >> i) & 1 != 0 {
                Some(ArmReg::from_u4(i))
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reg_round_trips_through_4bit_field() {
        for bits in 0..16u8 {
            assert_eq!(ArmReg::from_u4(bits).index(), bits as usize);
        }
        assert!(ArmReg::from_u4(15).is_pc());
    }

    #[test]
    fn cond_round_trips_through_4bit_field() {
        for bits in 0..16u8 {
            assert_eq!(Cond::from_u4(bits).bits(), bits);
        }
    }

    #[test]
    fn reg_list_iterates_ascending() {
        let list = RegList(0b1000_0000_0000_0110);
        let regs: Vec<ArmReg> = list.iter().collect();
        assert_eq!(regs, vec![ArmReg::R1, ArmReg::R2, ArmReg::Pc]);
        assert_eq!(list.count(), 3);
        assert!(list.contains(ArmReg::Pc));
        assert!(!list.contains(ArmReg::R0));
    }
}
