use armlet_types::ArmReg;

use super::flags::MicroArmFlags;
use super::location::LocationDescriptor;
use super::micro_op::{micro_op_info, MicroOp, MicroType};
use super::terminal::MicroTerminal;
use super::value::{MicroValue, MicroValueKind, ValueId};

/// A single-entry micro-block: an SSA body in emission order plus exactly
/// one terminal.
///
/// The body vector is the sole owner of every node; [`ValueId`]s held in
/// operand fields and use-lists are plain indices into it. Emission order is
/// a topological order by construction (an operand always refers to an
/// earlier node), which downstream consumers rely on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MicroBlock {
    pub location: LocationDescriptor,
    values: Vec<MicroValue>,
    terminal: Option<MicroTerminal>,
}

impl MicroBlock {
    #[must_use]
    pub fn new(location: LocationDescriptor) -> Self {
        Self {
            location,
            values: Vec::new(),
            terminal: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The node behind `id`. Ids from a different block are a contract
    /// violation and will panic or alias another node.
    #[must_use]
    pub fn value(&self, id: ValueId) -> &MicroValue {
        &self.values[id.index()]
    }

    /// Iterate the body in emission (= topological) order.
    pub fn iter(&self) -> impl Iterator<Item = (ValueId, &MicroValue)> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| (ValueId(i as u32), v))
    }

    // --- Construction ------------------------------------------------------

    fn push(&mut self, kind: MicroValueKind) -> ValueId {
        let id = ValueId(
            u32::try_from(self.values.len()).expect("micro-block value space exhausted"),
        );
        self.values.push(MicroValue::new(kind));
        id
    }

    /// Emit a 32-bit constant.
    pub fn const_u32(&mut self, value: u32) -> ValueId {
        self.push(MicroValueKind::ConstU32(value))
    }

    /// Emit a read of a guest GPR.
    pub fn get_gpr(&mut self, reg: ArmReg) -> ValueId {
        self.push(MicroValueKind::GetGpr(reg))
    }

    /// Emit a store of `arg` into a guest GPR.
    pub fn set_gpr(&mut self, reg: ArmReg, arg: ValueId) -> ValueId {
        assert_eq!(
            self.value(arg).ty(),
            MicroType::U32,
            "SetGpr({reg}) operand {arg:?} must be U32"
        );
        let id = self.push(MicroValueKind::SetGpr { reg, arg });
        self.values[arg.index()].add_use(id);
        id
    }

    /// Emit a generic micro-instruction with the opcode's default write
    /// flags. Operand count and types are checked against the opcode table;
    /// a mismatch is a bug in the caller and panics.
    pub fn inst(&mut self, op: MicroOp, args: &[ValueId]) -> ValueId {
        assert!(
            !matches!(op, MicroOp::ConstU32 | MicroOp::GetGpr | MicroOp::SetGpr),
            "{op:?} has a dedicated constructor"
        );
        let info = micro_op_info(op);
        assert_eq!(
            args.len(),
            info.num_operands(),
            "{op:?} expects {} operands, got {}",
            info.num_operands(),
            args.len()
        );
        for (i, (&arg, &expected)) in args.iter().zip(info.operands).enumerate() {
            assert_eq!(
                self.value(arg).ty(),
                expected,
                "{op:?} operand {i} ({arg:?}) has the wrong type"
            );
        }

        let id = self.push(MicroValueKind::Inst {
            op,
            args: args.to_vec(),
            write_flags: info.default_write_flags,
        });
        for &arg in args {
            self.values[arg.index()].add_use(id);
        }
        id
    }

    // --- Mutation ----------------------------------------------------------

    /// Narrow the write-flag set of an instruction. Widening beyond the
    /// current set (and hence beyond the opcode default) is a contract
    /// violation.
    pub fn set_write_flags(&mut self, id: ValueId, flags: MicroArmFlags) {
        let value = &mut self.values[id.index()];
        match value.kind_mut() {
            MicroValueKind::Inst { op, write_flags, .. } => {
                assert!(
                    write_flags.contains(flags),
                    "cannot widen write flags of {op:?} from {write_flags:?} to {flags:?}"
                );
                *write_flags = flags;
            }
            other => panic!("set_write_flags on non-instruction node {other:?}"),
        }
    }

    /// Point operand `index` of `consumer` at `new`, maintaining use-edges
    /// on both the old and the new producer.
    pub fn set_operand(&mut self, consumer: ValueId, index: usize, new: ValueId) {
        let old = self.value(consumer).operand(index);
        let expected = self.operand_type(consumer, index);
        assert_eq!(
            self.value(new).ty(),
            expected,
            "operand {index} of {consumer:?} must stay {expected:?}"
        );

        match self.values[consumer.index()].kind_mut() {
            MicroValueKind::SetGpr { arg, .. } => *arg = new,
            MicroValueKind::Inst { args, .. } => args[index] = new,
            leaf => panic!("set_operand on leaf node {leaf:?}"),
        }
        self.values[old.index()].remove_use(consumer);
        self.values[new.index()].add_use(consumer);
    }

    fn operand_type(&self, consumer: ValueId, index: usize) -> MicroType {
        micro_op_info(self.value(consumer).op()).operands[index]
    }

    /// Replace every use of `old` with `new`.
    ///
    /// Walks a snapshot of `old`'s use-list (the list shrinks during the
    /// walk), rewrites each consumer's matching operand positions, and moves
    /// the corresponding use-edges onto `new`. Afterwards `old` has no uses.
    /// Replacing a node with itself, or a node that is already unused, is a
    /// no-op.
    pub fn replace_all_uses_with(&mut self, old: ValueId, new: ValueId) {
        if old == new {
            return;
        }
        assert_eq!(
            self.value(old).ty(),
            self.value(new).ty(),
            "replacement {new:?} must have the same type as {old:?}"
        );

        let consumers: Vec<ValueId> = self.value(old).uses().to_vec();
        for consumer in consumers {
            let replaced = self.values[consumer.index()]
                .kind_mut()
                .replace_operand_refs(old, new);
            for _ in 0..replaced {
                self.values[new.index()].add_use(consumer);
            }
        }
        self.values[old.index()].clear_uses();
    }

    // --- Terminal ----------------------------------------------------------

    #[inline]
    #[must_use]
    pub fn has_terminal(&self) -> bool {
        self.terminal.is_some()
    }

    /// Install the block's terminal. A block has exactly one; setting it
    /// twice is a contract violation.
    pub fn set_terminal(&mut self, terminal: MicroTerminal) {
        assert!(
            self.terminal.is_none(),
            "micro-block at {} already has a terminal",
            self.location
        );
        self.terminal = Some(terminal);
    }

    /// The block's terminal. Panics if the block was never finalized.
    #[must_use]
    pub fn terminal(&self) -> &MicroTerminal {
        self.terminal
            .as_ref()
            .expect("micro-block has no terminal; translation did not finish")
    }
}
