use bitflags::bitflags;

bitflags! {
    /// APSR flag sets consumed/published by micro-instructions.
    ///
    /// Used in two orthogonal roles: the flags an op *reads* and the flags
    /// it *writes*. A node's write set may only ever be narrowed from its
    /// opcode default, never widened.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MicroArmFlags: u8 {
        const N = 1 << 0;
        const Z = 1 << 1;
        const C = 1 << 2;
        const V = 1 << 3;
        const Q = 1 << 4;
        const GE = 1 << 5;

        const NZ = Self::N.bits() | Self::Z.bits();
        const NZC = Self::NZ.bits() | Self::C.bits();
        const NZCV = Self::NZC.bits() | Self::V.bits();
        const ANY = Self::NZCV.bits() | Self::Q.bits() | Self::GE.bits();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregates_compose() {
        assert_eq!(
            MicroArmFlags::NZCV,
            MicroArmFlags::N | MicroArmFlags::Z | MicroArmFlags::C | MicroArmFlags::V
        );
        assert!(MicroArmFlags::ANY.contains(MicroArmFlags::GE));
        assert!(MicroArmFlags::NZC.contains(MicroArmFlags::NZ));
        assert!(!MicroArmFlags::NZC.contains(MicroArmFlags::V));
    }
}
