use super::flags::MicroArmFlags;

/// The type of a micro-value. Register stores and other effect-only ops
/// produce `Void`; everything else in the current op set is `U32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MicroType {
    Void,
    U32,
}

/// Operations of the idealised ARM micro-machine. A single guest
/// instruction expands into zero or more of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MicroOp {
    // Simple values
    ConstU32,
    GetGpr,

    // Cleanup
    SetGpr,

    // Hints
    PushRsbHint,

    // ARM PC (ARMv6 behaviour)
    AluWritePc,
    LoadWritePc,

    // ALU
    Add,
    AddWithCarry,
    Sub,
    And,
    Eor,
    Not,
    Lsl,
    Lsr,
    Asr,
    Ror,
    Rrx,
    CountLeadingZeros,

    // Synchronisation
    ClearExclusive,

    // Memory
    Read32,
}

/// Static information about a micro-op: its return type, operand types and
/// the APSR flags it reads / writes by default.
#[derive(Clone, Copy, Debug)]
pub struct MicroOpInfo {
    pub ret: MicroType,
    pub operands: &'static [MicroType],
    pub read_flags: MicroArmFlags,
    pub default_write_flags: MicroArmFlags,
}

impl MicroOpInfo {
    #[inline]
    #[must_use]
    pub const fn num_operands(&self) -> usize {
        self.operands.len()
    }
}

const NO_ARGS: &[MicroType] = &[];
const UNARY: &[MicroType] = &[MicroType::U32];
const BINARY: &[MicroType] = &[MicroType::U32, MicroType::U32];

const fn entry(
    ret: MicroType,
    operands: &'static [MicroType],
    read_flags: MicroArmFlags,
    default_write_flags: MicroArmFlags,
) -> MicroOpInfo {
    MicroOpInfo {
        ret,
        operands,
        read_flags,
        default_write_flags,
    }
}

/// Look up the [`MicroOpInfo`] for an opcode. Total over [`MicroOp`].
#[must_use]
pub const fn micro_op_info(op: MicroOp) -> MicroOpInfo {
    use self::MicroType::{Void, U32};
    use super::flags::MicroArmFlags as F;

    match op {
        MicroOp::ConstU32 => entry(U32, NO_ARGS, F::empty(), F::empty()),
        MicroOp::GetGpr => entry(U32, NO_ARGS, F::empty(), F::empty()),
        MicroOp::SetGpr => entry(Void, UNARY, F::empty(), F::empty()),
        MicroOp::PushRsbHint => entry(Void, UNARY, F::empty(), F::empty()),
        MicroOp::AluWritePc => entry(Void, UNARY, F::empty(), F::empty()),
        MicroOp::LoadWritePc => entry(Void, UNARY, F::empty(), F::empty()),
        MicroOp::Add => entry(U32, BINARY, F::empty(), F::NZCV),
        MicroOp::AddWithCarry => entry(U32, BINARY, F::C, F::NZCV),
        MicroOp::Sub => entry(U32, BINARY, F::empty(), F::NZCV),
        MicroOp::And => entry(U32, BINARY, F::empty(), F::NZC),
        MicroOp::Eor => entry(U32, BINARY, F::empty(), F::NZC),
        MicroOp::Not => entry(U32, UNARY, F::empty(), F::empty()),
        MicroOp::Lsl => entry(U32, BINARY, F::empty(), F::C),
        MicroOp::Lsr => entry(U32, BINARY, F::empty(), F::C),
        MicroOp::Asr => entry(U32, BINARY, F::empty(), F::C),
        MicroOp::Ror => entry(U32, BINARY, F::empty(), F::C),
        MicroOp::Rrx => entry(U32, UNARY, F::C, F::empty()),
        MicroOp::CountLeadingZeros => entry(U32, UNARY, F::empty(), F::empty()),
        MicroOp::ClearExclusive => entry(Void, NO_ARGS, F::empty(), F::empty()),
        MicroOp::Read32 => entry(U32, UNARY, F::empty(), F::empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_OPS: &[MicroOp] = &[
        MicroOp::ConstU32,
        MicroOp::GetGpr,
        MicroOp::SetGpr,
        MicroOp::PushRsbHint,
        MicroOp::AluWritePc,
        MicroOp::LoadWritePc,
        MicroOp::Add,
        MicroOp::AddWithCarry,
        MicroOp::Sub,
        MicroOp::And,
        MicroOp::Eor,
        MicroOp::Not,
        MicroOp::Lsl,
        MicroOp::Lsr,
        MicroOp::Asr,
        MicroOp::Ror,
        MicroOp::Rrx,
        MicroOp::CountLeadingZeros,
        MicroOp::ClearExclusive,
        MicroOp::Read32,
    ];

    #[test]
    fn void_ops_produce_no_value() {
        for &op in ALL_OPS {
            let info = micro_op_info(op);
            let is_void = matches!(
                op,
                MicroOp::SetGpr
                    | MicroOp::PushRsbHint
                    | MicroOp::AluWritePc
                    | MicroOp::LoadWritePc
                    | MicroOp::ClearExclusive
            );
            assert_eq!(matches!(info.ret, MicroType::Void), is_void, "{op:?}");
        }
    }

    #[test]
    fn flag_defaults_match_the_architecture() {
        assert_eq!(
            micro_op_info(MicroOp::Add).default_write_flags,
            MicroArmFlags::NZCV
        );
        assert_eq!(
            micro_op_info(MicroOp::And).default_write_flags,
            MicroArmFlags::NZC
        );
        assert_eq!(
            micro_op_info(MicroOp::Lsr).default_write_flags,
            MicroArmFlags::C
        );
        assert_eq!(
            micro_op_info(MicroOp::Read32).default_write_flags,
            MicroArmFlags::empty()
        );
        assert_eq!(
            micro_op_info(MicroOp::AddWithCarry).read_flags,
            MicroArmFlags::C
        );
        assert_eq!(micro_op_info(MicroOp::Rrx).read_flags, MicroArmFlags::C);
    }

    #[test]
    fn operand_counts_are_consistent() {
        assert_eq!(micro_op_info(MicroOp::ConstU32).num_operands(), 0);
        assert_eq!(micro_op_info(MicroOp::SetGpr).num_operands(), 1);
        assert_eq!(micro_op_info(MicroOp::Add).num_operands(), 2);
        assert_eq!(micro_op_info(MicroOp::ClearExclusive).num_operands(), 0);
    }
}
