use std::fmt;
use std::slice;

use armlet_types::ArmReg;

use super::flags::MicroArmFlags;
use super::micro_op::{micro_op_info, MicroOp, MicroType};

/// Handle to a micro-value inside its owning [`MicroBlock`](super::MicroBlock).
///
/// Ids are indices into the block body in emission order, so `a < b` means
/// `a` was emitted before `b`. They are non-owning and only meaningful for
/// the block that created them.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValueId(pub(crate) u32);

impl ValueId {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ValueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.0)
    }
}

/// The variant-specific payload of a micro-value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MicroValueKind {
    /// A 32-bit immediate.
    ConstU32(u32),
    /// Read of a guest GPR.
    GetGpr(ArmReg),
    /// Store of `arg` into a guest GPR.
    SetGpr { reg: ArmReg, arg: ValueId },
    /// A generic micro-instruction with opcode-defined arity.
    Inst {
        op: MicroOp,
        args: Vec<ValueId>,
        write_flags: MicroArmFlags,
    },
}

impl MicroValueKind {
    /// Rewrite every operand position referring to `old` to refer to `new`
    /// instead, returning how many positions changed. Leaf variants have no
    /// operands and never change.
    pub(crate) fn replace_operand_refs(&mut self, old: ValueId, new: ValueId) -> usize {
        match self {
            MicroValueKind::ConstU32(_) | MicroValueKind::GetGpr(_) => 0,
            MicroValueKind::SetGpr { arg, .. } => {
                if *arg == old {
                    *arg = new;
                    1
                } else {
                    0
                }
            }
            MicroValueKind::Inst { args, .. } => {
                let mut replaced = 0;
                for arg in args.iter_mut() {
                    if *arg == old {
                        *arg = new;
                        replaced += 1;
                    }
                }
                replaced
            }
        }
    }
}

/// A node of the SSA micro-IR: its variant plus the use-list of consumers.
///
/// The use-list holds one entry per operand edge, so a consumer that uses
/// this value in two operand positions appears twice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MicroValue {
    kind: MicroValueKind,
    uses: Vec<ValueId>,
}

impl MicroValue {
    pub(crate) fn new(kind: MicroValueKind) -> Self {
        Self {
            kind,
            uses: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> &MicroValueKind {
        &self.kind
    }

    pub(crate) fn kind_mut(&mut self) -> &mut MicroValueKind {
        &mut self.kind
    }

    /// The micro-op this value represents.
    #[must_use]
    pub fn op(&self) -> MicroOp {
        match &self.kind {
            MicroValueKind::ConstU32(_) => MicroOp::ConstU32,
            MicroValueKind::GetGpr(_) => MicroOp::GetGpr,
            MicroValueKind::SetGpr { .. } => MicroOp::SetGpr,
            MicroValueKind::Inst { op, .. } => *op,
        }
    }

    /// The type this value produces.
    #[must_use]
    pub fn ty(&self) -> MicroType {
        micro_op_info(self.op()).ret
    }

    #[must_use]
    pub fn num_operands(&self) -> usize {
        self.operands().len()
    }

    /// Operand handles in position order.
    #[must_use]
    pub fn operands(&self) -> &[ValueId] {
        match &self.kind {
            MicroValueKind::ConstU32(_) | MicroValueKind::GetGpr(_) => &[],
            MicroValueKind::SetGpr { arg, .. } => slice::from_ref(arg),
            MicroValueKind::Inst { args, .. } => args,
        }
    }

    /// Operand at `index`. Out-of-range indices are a contract violation.
    #[must_use]
    pub fn operand(&self, index: usize) -> ValueId {
        let operands = self.operands();
        assert!(
            index < operands.len(),
            "operand index {index} out of range for {:?} with {} operands",
            self.op(),
            operands.len()
        );
        operands[index]
    }

    /// APSR flags this value reads.
    #[must_use]
    pub fn read_flags(&self) -> MicroArmFlags {
        micro_op_info(self.op()).read_flags
    }

    /// APSR flags this value writes. For [`MicroValueKind::Inst`] this is
    /// the stored, possibly narrowed set; leaves never write flags.
    #[must_use]
    pub fn write_flags(&self) -> MicroArmFlags {
        match &self.kind {
            MicroValueKind::Inst { write_flags, .. } => *write_flags,
            _ => MicroArmFlags::empty(),
        }
    }

    #[inline]
    #[must_use]
    pub fn has_uses(&self) -> bool {
        !self.uses.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn use_count(&self) -> usize {
        self.uses.len()
    }

    /// Consumers of this value, one entry per operand edge.
    #[must_use]
    pub fn uses(&self) -> &[ValueId] {
        &self.uses
    }

    pub(crate) fn add_use(&mut self, consumer: ValueId) {
        self.uses.push(consumer);
    }

    pub(crate) fn remove_use(&mut self, consumer: ValueId) {
        let pos = self
            .uses
            .iter()
            .position(|&u| u == consumer)
            .unwrap_or_else(|| panic!("no use-edge to remove for consumer {consumer:?}"));
        self.uses.swap_remove(pos);
    }

    pub(crate) fn clear_uses(&mut self) {
        self.uses.clear();
    }
}
