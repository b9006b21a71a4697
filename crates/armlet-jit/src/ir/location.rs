use std::fmt;

use armlet_types::Cond;

/// Identifies a guest execution point for block-entry purposes.
///
/// Equality is structural; this is the key under which compiled blocks are
/// looked up and linked, so two descriptors that differ only in the static
/// condition context name *different* blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LocationDescriptor {
    /// Guest program counter at block entry.
    pub arm_pc: u32,
    /// Thumb instruction-set mode.
    pub t_flag: bool,
    /// Big-endian data accesses (SETEND).
    pub e_flag: bool,
    /// The condition code already established on entry to this block.
    pub cond: Cond,
}

impl LocationDescriptor {
    #[must_use]
    pub const fn new(arm_pc: u32, t_flag: bool, e_flag: bool, cond: Cond) -> Self {
        Self {
            arm_pc,
            t_flag,
            e_flag,
            cond,
        }
    }

    /// The same location with the PC moved forward by `bytes`.
    #[must_use]
    pub const fn advance(self, bytes: u32) -> Self {
        Self {
            arm_pc: self.arm_pc.wrapping_add(bytes),
            ..self
        }
    }

    /// The same location with a different PC.
    #[must_use]
    pub const fn with_pc(self, arm_pc: u32) -> Self {
        Self { arm_pc, ..self }
    }

    /// The same location entered under a different static condition.
    #[must_use]
    pub const fn with_cond(self, cond: Cond) -> Self {
        Self { cond, ..self }
    }

    /// The same location with the Thumb bit changed (BLX and friends).
    #[must_use]
    pub const fn with_t_flag(self, t_flag: bool) -> Self {
        Self { t_flag, ..self }
    }
}

impl fmt::Display for LocationDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:08x}:{}{}:{:?}",
            self.arm_pc,
            if self.t_flag { 'T' } else { 'A' },
            if self.e_flag { 'E' } else { 'e' },
            self.cond
        )
    }
}
