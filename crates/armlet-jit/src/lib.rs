//! `armlet-jit` is the ARM-to-SSA translation front-end of the armlet
//! dynamic recompiler.
//!
//! Given a [`LocationDescriptor`] (guest PC, instruction-set mode bits and
//! the static condition context), [`translate`] fetches ARMv6 instructions
//! linearly from guest memory, decodes them, and emits a [`MicroBlock`]: an
//! SSA sequence of typed micro-instructions closed by exactly one
//! [`MicroTerminal`]. The backend that lowers, interprets or links blocks
//! consumes the `MicroBlock` as its input contract; this crate neither
//! executes guest code nor allocates machine registers.

pub mod decode;
pub mod ir;

mod translate;

pub use decode::{decode_arm, ArmInst, ArmVisitor};
pub use ir::{
    micro_op_info, LocationDescriptor, MicroArmFlags, MicroBlock, MicroOp, MicroOpInfo,
    MicroTerminal, MicroType, MicroValue, MicroValueKind, ValueId,
};
pub use translate::{translate, translate_with_limits, GuestBus, TranslationLimits};
