//! Mechanical checker for the micro-block invariants a backend relies on.
//!
//! Run from tests (and debug assertions in embedders) after translation;
//! the translator itself maintains these invariants by construction.

use thiserror::Error;

use super::micro_op::micro_op_info;
use super::value::ValueId;
use super::MicroBlock;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    #[error("operand {operand:?} of {consumer:?} does not precede it in the body")]
    OperandOutOfOrder { consumer: ValueId, operand: ValueId },
    #[error("operand edge {consumer:?} -> {producer:?} missing from the producer's use-list")]
    MissingUseEdge { consumer: ValueId, producer: ValueId },
    #[error("use-list of {producer:?} names {consumer:?} more often than its operands do")]
    DanglingUseEdge { producer: ValueId, consumer: ValueId },
    #[error("{value:?} writes flags outside its opcode default")]
    WidenedWriteFlags { value: ValueId },
    #[error("block has no terminal")]
    MissingTerminal,
}

/// Check use-graph symmetry (U1/U2), topological operand order, write-flag
/// monotonicity and terminal presence.
pub fn verify_block(block: &MicroBlock) -> Result<(), VerifyError> {
    for (id, value) in block.iter() {
        for &operand in value.operands() {
            if operand >= id {
                return Err(VerifyError::OperandOutOfOrder {
                    consumer: id,
                    operand,
                });
            }
            let edges = edge_count(block, operand, id);
            let slots = operand_count(block, id, operand);
            if edges < slots {
                return Err(VerifyError::MissingUseEdge {
                    consumer: id,
                    producer: operand,
                });
            }
        }

        for &consumer in value.uses() {
            let edges = edge_count(block, id, consumer);
            let slots = operand_count(block, consumer, id);
            if edges > slots {
                return Err(VerifyError::DanglingUseEdge {
                    producer: id,
                    consumer,
                });
            }
        }

        let default = micro_op_info(value.op()).default_write_flags;
        if !default.contains(value.write_flags()) {
            return Err(VerifyError::WidenedWriteFlags { value: id });
        }
    }

    if !block.has_terminal() {
        return Err(VerifyError::MissingTerminal);
    }
    Ok(())
}

fn edge_count(block: &MicroBlock, producer: ValueId, consumer: ValueId) -> usize {
    block
        .value(producer)
        .uses()
        .iter()
        .filter(|&&u| u == consumer)
        .count()
}

fn operand_count(block: &MicroBlock, consumer: ValueId, producer: ValueId) -> usize {
    block
        .value(consumer)
        .operands()
        .iter()
        .filter(|&&o| o == producer)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{LocationDescriptor, MicroOp, MicroTerminal};
    use armlet_types::{ArmReg, Cond};

    #[test]
    fn well_formed_block_verifies() {
        let mut block =
            MicroBlock::new(LocationDescriptor::new(0x1000, false, false, Cond::Al));
        let a = block.get_gpr(ArmReg::R2);
        let b = block.const_u32(5);
        let sum = block.inst(MicroOp::Add, &[a, b]);
        block.set_gpr(ArmReg::R1, sum);
        block.set_terminal(MicroTerminal::ReturnToDispatch);

        assert_eq!(verify_block(&block), Ok(()));
    }

    #[test]
    fn missing_terminal_is_reported() {
        let block = MicroBlock::new(LocationDescriptor::new(0x1000, false, false, Cond::Al));
        assert_eq!(verify_block(&block), Err(VerifyError::MissingTerminal));
    }
}
