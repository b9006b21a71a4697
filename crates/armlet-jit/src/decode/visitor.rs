use armlet_types::{ArmReg, Cond, RegList, ShiftType, SignExtendRotation};

/// Callbacks invoked by [`ArmInst::visit`](super::ArmInst::visit) with the
/// instruction's decoded fields.
///
/// Every callback has a default body routing to [`unimplemented`], so a
/// visitor only spells out the opcodes it supports; the translation visitor
/// turns `unimplemented` into an interpreter fallback.
///
/// [`unimplemented`]: ArmVisitor::unimplemented
#[allow(clippy::too_many_arguments)]
pub trait ArmVisitor {
    /// Called (directly or via a default body) for every opcode the visitor
    /// does not handle.
    fn unimplemented(&mut self);

    // Branch
    fn b(&mut self, cond: Cond, imm24: u32) {
        let _ = (cond, imm24);
        self.unimplemented();
    }
    fn bl(&mut self, cond: Cond, imm24: u32) {
        let _ = (cond, imm24);
        self.unimplemented();
    }
    fn blx_imm(&mut self, h: bool, imm24: u32) {
        let _ = (h, imm24);
        self.unimplemented();
    }
    fn blx_reg(&mut self, cond: Cond, m: ArmReg) {
        let _ = (cond, m);
        self.unimplemented();
    }
    fn bx(&mut self, cond: Cond, m: ArmReg) {
        let _ = (cond, m);
        self.unimplemented();
    }
    fn bxj(&mut self, cond: Cond, m: ArmReg) {
        let _ = (cond, m);
        self.unimplemented();
    }

    // Data processing: immediate operand
    fn and_imm(&mut self, cond: Cond, s: bool, n: ArmReg, d: ArmReg, rotate: u8, imm8: u8) {
        let _ = (cond, s, n, d, rotate, imm8);
        self.unimplemented();
    }
    fn eor_imm(&mut self, cond: Cond, s: bool, n: ArmReg, d: ArmReg, rotate: u8, imm8: u8) {
        let _ = (cond, s, n, d, rotate, imm8);
        self.unimplemented();
    }
    fn sub_imm(&mut self, cond: Cond, s: bool, n: ArmReg, d: ArmReg, rotate: u8, imm8: u8) {
        let _ = (cond, s, n, d, rotate, imm8);
        self.unimplemented();
    }
    fn rsb_imm(&mut self, cond: Cond, s: bool, n: ArmReg, d: ArmReg, rotate: u8, imm8: u8) {
        let _ = (cond, s, n, d, rotate, imm8);
        self.unimplemented();
    }
    fn add_imm(&mut self, cond: Cond, s: bool, n: ArmReg, d: ArmReg, rotate: u8, imm8: u8) {
        let _ = (cond, s, n, d, rotate, imm8);
        self.unimplemented();
    }
    fn adc_imm(&mut self, cond: Cond, s: bool, n: ArmReg, d: ArmReg, rotate: u8, imm8: u8) {
        let _ = (cond, s, n, d, rotate, imm8);
        self.unimplemented();
    }
    fn sbc_imm(&mut self, cond: Cond, s: bool, n: ArmReg, d: ArmReg, rotate: u8, imm8: u8) {
        let _ = (cond, s, n, d, rotate, imm8);
        self.unimplemented();
    }
    fn rsc_imm(&mut self, cond: Cond, s: bool, n: ArmReg, d: ArmReg, rotate: u8, imm8: u8) {
        let _ = (cond, s, n, d, rotate, imm8);
        self.unimplemented();
    }
    fn tst_imm(&mut self, cond: Cond, n: ArmReg, rotate: u8, imm8: u8) {
        let _ = (cond, n, rotate, imm8);
        self.unimplemented();
    }
    fn teq_imm(&mut self, cond: Cond, n: ArmReg, rotate: u8, imm8: u8) {
        let _ = (cond, n, rotate, imm8);
        self.unimplemented();
    }
    fn cmp_imm(&mut self, cond: Cond, n: ArmReg, rotate: u8, imm8: u8) {
        let _ = (cond, n, rotate, imm8);
        self.unimplemented();
    }
    fn cmn_imm(&mut self, cond: Cond, n: ArmReg, rotate: u8, imm8: u8) {
        let _ = (cond, n, rotate, imm8);
        self.unimplemented();
    }
    fn orr_imm(&mut self, cond: Cond, s: bool, n: ArmReg, d: ArmReg, rotate: u8, imm8: u8) {
        let _ = (cond, s, n, d, rotate, imm8);
        self.unimplemented();
    }
    fn mov_imm(&mut self, cond: Cond, s: bool, d: ArmReg, rotate: u8, imm8: u8) {
        let _ = (cond, s, d, rotate, imm8);
        self.unimplemented();
    }
    fn bic_imm(&mut self, cond: Cond, s: bool, n: ArmReg, d: ArmReg, rotate: u8, imm8: u8) {
        let _ = (cond, s, n, d, rotate, imm8);
        self.unimplemented();
    }
    fn mvn_imm(&mut self, cond: Cond, s: bool, d: ArmReg, rotate: u8, imm8: u8) {
        let _ = (cond, s, d, rotate, imm8);
        self.unimplemented();
    }

    // Data processing: immediate-shifted register operand
    fn and_reg(
        &mut self,
        cond: Cond,
        s: bool,
        n: ArmReg,
        d: ArmReg,
        imm5: u8,
        shift: ShiftType,
        m: ArmReg,
    ) {
        let _ = (cond, s, n, d, imm5, shift, m);
        self.unimplemented();
    }
    fn eor_reg(
        &mut self,
        cond: Cond,
        s: bool,
        n: ArmReg,
        d: ArmReg,
        imm5: u8,
        shift: ShiftType,
        m: ArmReg,
    ) {
        let _ = (cond, s, n, d, imm5, shift, m);
        self.unimplemented();
    }
    fn sub_reg(
        &mut self,
        cond: Cond,
        s: bool,
        n: ArmReg,
        d: ArmReg,
        imm5: u8,
        shift: ShiftType,
        m: ArmReg,
    ) {
        let _ = (cond, s, n, d, imm5, shift, m);
        self.unimplemented();
    }
    fn rsb_reg(
        &mut self,
        cond: Cond,
        s: bool,
        n: ArmReg,
        d: ArmReg,
        imm5: u8,
        shift: ShiftType,
        m: ArmReg,
    ) {
        let _ = (cond, s, n, d, imm5, shift, m);
        self.unimplemented();
    }
    fn add_reg(
        &mut self,
        cond: Cond,
        s: bool,
        n: ArmReg,
        d: ArmReg,
        imm5: u8,
        shift: ShiftType,
        m: ArmReg,
    ) {
        let _ = (cond, s, n, d, imm5, shift, m);
        self.unimplemented();
    }
    fn adc_reg(
        &mut self,
        cond: Cond,
        s: bool,
        n: ArmReg,
        d: ArmReg,
        imm5: u8,
        shift: ShiftType,
        m: ArmReg,
    ) {
        let _ = (cond, s, n, d, imm5, shift, m);
        self.unimplemented();
    }
    fn sbc_reg(
        &mut self,
        cond: Cond,
        s: bool,
        n: ArmReg,
        d: ArmReg,
        imm5: u8,
        shift: ShiftType,
        m: ArmReg,
    ) {
        let _ = (cond, s, n, d, imm5, shift, m);
        self.unimplemented();
    }
    fn rsc_reg(
        &mut self,
        cond: Cond,
        s: bool,
        n: ArmReg,
        d: ArmReg,
        imm5: u8,
        shift: ShiftType,
        m: ArmReg,
    ) {
        let _ = (cond, s, n, d, imm5, shift, m);
        self.unimplemented();
    }
    fn tst_reg(&mut self, cond: Cond, n: ArmReg, imm5: u8, shift: ShiftType, m: ArmReg) {
        let _ = (cond, n, imm5, shift, m);
        self.unimplemented();
    }
    fn teq_reg(&mut self, cond: Cond, n: ArmReg, imm5: u8, shift: ShiftType, m: ArmReg) {
        let _ = (cond, n, imm5, shift, m);
        self.unimplemented();
    }
    fn cmp_reg(&mut self, cond: Cond, n: ArmReg, imm5: u8, shift: ShiftType, m: ArmReg) {
        let _ = (cond, n, imm5, shift, m);
        self.unimplemented();
    }
    fn cmn_reg(&mut self, cond: Cond, n: ArmReg, imm5: u8, shift: ShiftType, m: ArmReg) {
        let _ = (cond, n, imm5, shift, m);
        self.unimplemented();
    }
    fn orr_reg(
        &mut self,
        cond: Cond,
        s: bool,
        n: ArmReg,
        d: ArmReg,
        imm5: u8,
        shift: ShiftType,
        m: ArmReg,
    ) {
        let _ = (cond, s, n, d, imm5, shift, m);
        self.unimplemented();
    }
    fn mov_reg(&mut self, cond: Cond, s: bool, d: ArmReg, imm5: u8, shift: ShiftType, m: ArmReg) {
        let _ = (cond, s, d, imm5, shift, m);
        self.unimplemented();
    }
    fn bic_reg(
        &mut self,
        cond: Cond,
        s: bool,
        n: ArmReg,
        d: ArmReg,
        imm5: u8,
        shift: ShiftType,
        m: ArmReg,
    ) {
        let _ = (cond, s, n, d, imm5, shift, m);
        self.unimplemented();
    }
    fn mvn_reg(&mut self, cond: Cond, s: bool, d: ArmReg, imm5: u8, shift: ShiftType, m: ArmReg) {
        let _ = (cond, s, d, imm5, shift, m);
        self.unimplemented();
    }

    // Data processing: register-shifted register operand
    fn and_rsr(
        &mut self,
        cond: Cond,
        s: bool,
        n: ArmReg,
        d: ArmReg,
        shift_reg: ArmReg,
        shift: ShiftType,
        m: ArmReg,
    ) {
        let _ = (cond, s, n, d, shift_reg, shift, m);
        self.unimplemented();
    }
    fn eor_rsr(
        &mut self,
        cond: Cond,
        s: bool,
        n: ArmReg,
        d: ArmReg,
        shift_reg: ArmReg,
        shift: ShiftType,
        m: ArmReg,
    ) {
        let _ = (cond, s, n, d, shift_reg, shift, m);
        self.unimplemented();
    }
    fn sub_rsr(
        &mut self,
        cond: Cond,
        s: bool,
        n: ArmReg,
        d: ArmReg,
        shift_reg: ArmReg,
        shift: ShiftType,
        m: ArmReg,
    ) {
        let _ = (cond, s, n, d, shift_reg, shift, m);
        self.unimplemented();
    }
    fn rsb_rsr(
        &mut self,
        cond: Cond,
        s: bool,
        n: ArmReg,
        d: ArmReg,
        shift_reg: ArmReg,
        shift: ShiftType,
        m: ArmReg,
    ) {
        let _ = (cond, s, n, d, shift_reg, shift, m);
        self.unimplemented();
    }
    fn add_rsr(
        &mut self,
        cond: Cond,
        s: bool,
        n: ArmReg,
        d: ArmReg,
        shift_reg: ArmReg,
        shift: ShiftType,
        m: ArmReg,
    ) {
        let _ = (cond, s, n, d, shift_reg, shift, m);
        self.unimplemented();
    }
    fn adc_rsr(
        &mut self,
        cond: Cond,
        s: bool,
        n: ArmReg,
        d: ArmReg,
        shift_reg: ArmReg,
        shift: ShiftType,
        m: ArmReg,
    ) {
        let _ = (cond, s, n, d, shift_reg, shift, m);
        self.unimplemented();
    }
    fn sbc_rsr(
        &mut self,
        cond: Cond,
        s: bool,
        n: ArmReg,
        d: ArmReg,
        shift_reg: ArmReg,
        shift: ShiftType,
        m: ArmReg,
    ) {
        let _ = (cond, s, n, d, shift_reg, shift, m);
        self.unimplemented();
    }
    fn rsc_rsr(
        &mut self,
        cond: Cond,
        s: bool,
        n: ArmReg,
        d: ArmReg,
        shift_reg: ArmReg,
        shift: ShiftType,
        m: ArmReg,
    ) {
        let _ = (cond, s, n, d, shift_reg, shift, m);
        self.unimplemented();
    }
    fn tst_rsr(&mut self, cond: Cond, n: ArmReg, shift_reg: ArmReg, shift: ShiftType, m: ArmReg) {
        let _ = (cond, n, shift_reg, shift, m);
        self.unimplemented();
    }
    fn teq_rsr(&mut self, cond: Cond, n: ArmReg, shift_reg: ArmReg, shift: ShiftType, m: ArmReg) {
        let _ = (cond, n, shift_reg, shift, m);
        self.unimplemented();
    }
    fn cmp_rsr(&mut self, cond: Cond, n: ArmReg, shift_reg: ArmReg, shift: ShiftType, m: ArmReg) {
        let _ = (cond, n, shift_reg, shift, m);
        self.unimplemented();
    }
    fn cmn_rsr(&mut self, cond: Cond, n: ArmReg, shift_reg: ArmReg, shift: ShiftType, m: ArmReg) {
        let _ = (cond, n, shift_reg, shift, m);
        self.unimplemented();
    }
    fn orr_rsr(
        &mut self,
        cond: Cond,
        s: bool,
        n: ArmReg,
        d: ArmReg,
        shift_reg: ArmReg,
        shift: ShiftType,
        m: ArmReg,
    ) {
        let _ = (cond, s, n, d, shift_reg, shift, m);
        self.unimplemented();
    }
    fn mov_rsr(
        &mut self,
        cond: Cond,
        s: bool,
        d: ArmReg,
        shift_reg: ArmReg,
        shift: ShiftType,
        m: ArmReg,
    ) {
        let _ = (cond, s, d, shift_reg, shift, m);
        self.unimplemented();
    }
    fn bic_rsr(
        &mut self,
        cond: Cond,
        s: bool,
        n: ArmReg,
        d: ArmReg,
        shift_reg: ArmReg,
        shift: ShiftType,
        m: ArmReg,
    ) {
        let _ = (cond, s, n, d, shift_reg, shift, m);
        self.unimplemented();
    }
    fn mvn_rsr(
        &mut self,
        cond: Cond,
        s: bool,
        d: ArmReg,
        shift_reg: ArmReg,
        shift: ShiftType,
        m: ArmReg,
    ) {
        let _ = (cond, s, d, shift_reg, shift, m);
        self.unimplemented();
    }

    // Miscellaneous
    fn clz(&mut self, cond: Cond, d: ArmReg, m: ArmReg) {
        let _ = (cond, d, m);
        self.unimplemented();
    }

    // Exception generation
    fn bkpt(&mut self, cond: Cond, imm12: u16, imm4: u8) {
        let _ = (cond, imm12, imm4);
        self.unimplemented();
    }
    fn svc(&mut self, cond: Cond, imm24: u32) {
        let _ = (cond, imm24);
        self.unimplemented();
    }
    fn udf(&mut self) {
        self.unimplemented();
    }

    // Extension (sign/zero extend, optionally accumulating)
    fn sxtab(&mut self, cond: Cond, n: ArmReg, d: ArmReg, rotate: SignExtendRotation, m: ArmReg) {
        let _ = (cond, n, d, rotate, m);
        self.unimplemented();
    }
    fn sxtah(&mut self, cond: Cond, n: ArmReg, d: ArmReg, rotate: SignExtendRotation, m: ArmReg) {
        let _ = (cond, n, d, rotate, m);
        self.unimplemented();
    }
    fn sxtb(&mut self, cond: Cond, d: ArmReg, rotate: SignExtendRotation, m: ArmReg) {
        let _ = (cond, d, rotate, m);
        self.unimplemented();
    }
    fn sxth(&mut self, cond: Cond, d: ArmReg, rotate: SignExtendRotation, m: ArmReg) {
        let _ = (cond, d, rotate, m);
        self.unimplemented();
    }
    fn uxtab(&mut self, cond: Cond, n: ArmReg, d: ArmReg, rotate: SignExtendRotation, m: ArmReg) {
        let _ = (cond, n, d, rotate, m);
        self.unimplemented();
    }
    fn uxtah(&mut self, cond: Cond, n: ArmReg, d: ArmReg, rotate: SignExtendRotation, m: ArmReg) {
        let _ = (cond, n, d, rotate, m);
        self.unimplemented();
    }
    fn uxtb(&mut self, cond: Cond, d: ArmReg, rotate: SignExtendRotation, m: ArmReg) {
        let _ = (cond, d, rotate, m);
        self.unimplemented();
    }
    fn uxth(&mut self, cond: Cond, d: ArmReg, rotate: SignExtendRotation, m: ArmReg) {
        let _ = (cond, d, rotate, m);
        self.unimplemented();
    }

    // Hints
    fn nop(&mut self) {
        self.unimplemented();
    }
    fn yield_(&mut self) {
        self.unimplemented();
    }
    fn wfe(&mut self) {
        self.unimplemented();
    }
    fn wfi(&mut self) {
        self.unimplemented();
    }
    fn sev(&mut self) {
        self.unimplemented();
    }
    fn pld(&mut self) {
        self.unimplemented();
    }

    // Load/store word and byte
    fn ldr_imm(&mut self, cond: Cond, p: bool, u: bool, w: bool, n: ArmReg, d: ArmReg, imm12: u16) {
        let _ = (cond, p, u, w, n, d, imm12);
        self.unimplemented();
    }
    fn ldr_reg(
        &mut self,
        cond: Cond,
        p: bool,
        u: bool,
        w: bool,
        n: ArmReg,
        d: ArmReg,
        imm5: u8,
        shift: ShiftType,
        m: ArmReg,
    ) {
        let _ = (cond, p, u, w, n, d, imm5, shift, m);
        self.unimplemented();
    }
    fn ldrb_imm(
        &mut self,
        cond: Cond,
        p: bool,
        u: bool,
        w: bool,
        n: ArmReg,
        d: ArmReg,
        imm12: u16,
    ) {
        let _ = (cond, p, u, w, n, d, imm12);
        self.unimplemented();
    }
    fn ldrb_reg(
        &mut self,
        cond: Cond,
        p: bool,
        u: bool,
        w: bool,
        n: ArmReg,
        d: ArmReg,
        imm5: u8,
        shift: ShiftType,
        m: ArmReg,
    ) {
        let _ = (cond, p, u, w, n, d, imm5, shift, m);
        self.unimplemented();
    }
    fn str_imm(&mut self, cond: Cond, p: bool, u: bool, w: bool, n: ArmReg, d: ArmReg, imm12: u16) {
        let _ = (cond, p, u, w, n, d, imm12);
        self.unimplemented();
    }
    fn str_reg(
        &mut self,
        cond: Cond,
        p: bool,
        u: bool,
        w: bool,
        n: ArmReg,
        d: ArmReg,
        imm5: u8,
        shift: ShiftType,
        m: ArmReg,
    ) {
        let _ = (cond, p, u, w, n, d, imm5, shift, m);
        self.unimplemented();
    }
    fn strb_imm(
        &mut self,
        cond: Cond,
        p: bool,
        u: bool,
        w: bool,
        n: ArmReg,
        d: ArmReg,
        imm12: u16,
    ) {
        let _ = (cond, p, u, w, n, d, imm12);
        self.unimplemented();
    }
    fn strb_reg(
        &mut self,
        cond: Cond,
        p: bool,
        u: bool,
        w: bool,
        n: ArmReg,
        d: ArmReg,
        imm5: u8,
        shift: ShiftType,
        m: ArmReg,
    ) {
        let _ = (cond, p, u, w, n, d, imm5, shift, m);
        self.unimplemented();
    }

    // Load/store halfword, dual and signed sub-word
    fn ldrh_imm(&mut self, cond: Cond, p: bool, u: bool, w: bool, n: ArmReg, d: ArmReg, imm8: u8) {
        let _ = (cond, p, u, w, n, d, imm8);
        self.unimplemented();
    }
    fn ldrh_reg(&mut self, cond: Cond, p: bool, u: bool, w: bool, n: ArmReg, d: ArmReg, m: ArmReg) {
        let _ = (cond, p, u, w, n, d, m);
        self.unimplemented();
    }
    fn ldrsb_imm(&mut self, cond: Cond, p: bool, u: bool, w: bool, n: ArmReg, d: ArmReg, imm8: u8) {
        let _ = (cond, p, u, w, n, d, imm8);
        self.unimplemented();
    }
    fn ldrsb_reg(
        &mut self,
        cond: Cond,
        p: bool,
        u: bool,
        w: bool,
        n: ArmReg,
        d: ArmReg,
        m: ArmReg,
    ) {
        let _ = (cond, p, u, w, n, d, m);
        self.unimplemented();
    }
    fn ldrsh_imm(&mut self, cond: Cond, p: bool, u: bool, w: bool, n: ArmReg, d: ArmReg, imm8: u8) {
        let _ = (cond, p, u, w, n, d, imm8);
        self.unimplemented();
    }
    fn ldrsh_reg(
        &mut self,
        cond: Cond,
        p: bool,
        u: bool,
        w: bool,
        n: ArmReg,
        d: ArmReg,
        m: ArmReg,
    ) {
        let _ = (cond, p, u, w, n, d, m);
        self.unimplemented();
    }
    fn ldrd_imm(&mut self, cond: Cond, p: bool, u: bool, w: bool, n: ArmReg, d: ArmReg, imm8: u8) {
        let _ = (cond, p, u, w, n, d, imm8);
        self.unimplemented();
    }
    fn ldrd_reg(&mut self, cond: Cond, p: bool, u: bool, w: bool, n: ArmReg, d: ArmReg, m: ArmReg) {
        let _ = (cond, p, u, w, n, d, m);
        self.unimplemented();
    }
    fn strh_imm(&mut self, cond: Cond, p: bool, u: bool, w: bool, n: ArmReg, d: ArmReg, imm8: u8) {
        let _ = (cond, p, u, w, n, d, imm8);
        self.unimplemented();
    }
    fn strh_reg(&mut self, cond: Cond, p: bool, u: bool, w: bool, n: ArmReg, d: ArmReg, m: ArmReg) {
        let _ = (cond, p, u, w, n, d, m);
        self.unimplemented();
    }
    fn strd_imm(&mut self, cond: Cond, p: bool, u: bool, w: bool, n: ArmReg, d: ArmReg, imm8: u8) {
        let _ = (cond, p, u, w, n, d, imm8);
        self.unimplemented();
    }
    fn strd_reg(&mut self, cond: Cond, p: bool, u: bool, w: bool, n: ArmReg, d: ArmReg, m: ArmReg) {
        let _ = (cond, p, u, w, n, d, m);
        self.unimplemented();
    }

    // Load/store multiple
    fn ldm(&mut self, cond: Cond, p: bool, u: bool, w: bool, n: ArmReg, list: RegList) {
        let _ = (cond, p, u, w, n, list);
        self.unimplemented();
    }
    fn stm(&mut self, cond: Cond, p: bool, u: bool, w: bool, n: ArmReg, list: RegList) {
        let _ = (cond, p, u, w, n, list);
        self.unimplemented();
    }

    // Multiply
    fn mul(&mut self, cond: Cond, s: bool, d: ArmReg, m: ArmReg, n: ArmReg) {
        let _ = (cond, s, d, m, n);
        self.unimplemented();
    }
    fn mla(&mut self, cond: Cond, s: bool, d: ArmReg, a: ArmReg, m: ArmReg, n: ArmReg) {
        let _ = (cond, s, d, a, m, n);
        self.unimplemented();
    }
    fn umull(&mut self, cond: Cond, s: bool, d_hi: ArmReg, d_lo: ArmReg, m: ArmReg, n: ArmReg) {
        let _ = (cond, s, d_hi, d_lo, m, n);
        self.unimplemented();
    }
    fn umlal(&mut self, cond: Cond, s: bool, d_hi: ArmReg, d_lo: ArmReg, m: ArmReg, n: ArmReg) {
        let _ = (cond, s, d_hi, d_lo, m, n);
        self.unimplemented();
    }
    fn smull(&mut self, cond: Cond, s: bool, d_hi: ArmReg, d_lo: ArmReg, m: ArmReg, n: ArmReg) {
        let _ = (cond, s, d_hi, d_lo, m, n);
        self.unimplemented();
    }
    fn smlal(&mut self, cond: Cond, s: bool, d_hi: ArmReg, d_lo: ArmReg, m: ArmReg, n: ArmReg) {
        let _ = (cond, s, d_hi, d_lo, m, n);
        self.unimplemented();
    }

    // Parallel add/subtract (modulo arithmetic)
    fn sadd8(&mut self, cond: Cond, n: ArmReg, d: ArmReg, m: ArmReg) {
        let _ = (cond, n, d, m);
        self.unimplemented();
    }
    fn sadd16(&mut self, cond: Cond, n: ArmReg, d: ArmReg, m: ArmReg) {
        let _ = (cond, n, d, m);
        self.unimplemented();
    }
    fn ssub8(&mut self, cond: Cond, n: ArmReg, d: ArmReg, m: ArmReg) {
        let _ = (cond, n, d, m);
        self.unimplemented();
    }
    fn ssub16(&mut self, cond: Cond, n: ArmReg, d: ArmReg, m: ArmReg) {
        let _ = (cond, n, d, m);
        self.unimplemented();
    }
    fn uadd8(&mut self, cond: Cond, n: ArmReg, d: ArmReg, m: ArmReg) {
        let _ = (cond, n, d, m);
        self.unimplemented();
    }
    fn uadd16(&mut self, cond: Cond, n: ArmReg, d: ArmReg, m: ArmReg) {
        let _ = (cond, n, d, m);
        self.unimplemented();
    }
    fn usub8(&mut self, cond: Cond, n: ArmReg, d: ArmReg, m: ArmReg) {
        let _ = (cond, n, d, m);
        self.unimplemented();
    }
    fn usub16(&mut self, cond: Cond, n: ArmReg, d: ArmReg, m: ArmReg) {
        let _ = (cond, n, d, m);
        self.unimplemented();
    }

    // Saturated add/subtract
    fn qadd(&mut self, cond: Cond, n: ArmReg, d: ArmReg, m: ArmReg) {
        let _ = (cond, n, d, m);
        self.unimplemented();
    }
    fn qsub(&mut self, cond: Cond, n: ArmReg, d: ArmReg, m: ArmReg) {
        let _ = (cond, n, d, m);
        self.unimplemented();
    }
    fn qdadd(&mut self, cond: Cond, n: ArmReg, d: ArmReg, m: ArmReg) {
        let _ = (cond, n, d, m);
        self.unimplemented();
    }
    fn qdsub(&mut self, cond: Cond, n: ArmReg, d: ArmReg, m: ArmReg) {
        let _ = (cond, n, d, m);
        self.unimplemented();
    }

    // Synchronization primitives
    fn clrex(&mut self) {
        self.unimplemented();
    }
    fn ldrex(&mut self, cond: Cond, n: ArmReg, d: ArmReg) {
        let _ = (cond, n, d);
        self.unimplemented();
    }
    fn ldrexb(&mut self, cond: Cond, n: ArmReg, d: ArmReg) {
        let _ = (cond, n, d);
        self.unimplemented();
    }
    fn ldrexd(&mut self, cond: Cond, n: ArmReg, d: ArmReg) {
        let _ = (cond, n, d);
        self.unimplemented();
    }
    fn ldrexh(&mut self, cond: Cond, n: ArmReg, d: ArmReg) {
        let _ = (cond, n, d);
        self.unimplemented();
    }
    fn strex(&mut self, cond: Cond, n: ArmReg, d: ArmReg, m: ArmReg) {
        let _ = (cond, n, d, m);
        self.unimplemented();
    }
    fn strexb(&mut self, cond: Cond, n: ArmReg, d: ArmReg, m: ArmReg) {
        let _ = (cond, n, d, m);
        self.unimplemented();
    }
    fn strexd(&mut self, cond: Cond, n: ArmReg, d: ArmReg, m: ArmReg) {
        let _ = (cond, n, d, m);
        self.unimplemented();
    }
    fn strexh(&mut self, cond: Cond, n: ArmReg, d: ArmReg, m: ArmReg) {
        let _ = (cond, n, d, m);
        self.unimplemented();
    }
    fn swp(&mut self, cond: Cond, n: ArmReg, d: ArmReg, m: ArmReg) {
        let _ = (cond, n, d, m);
        self.unimplemented();
    }
    fn swpb(&mut self, cond: Cond, n: ArmReg, d: ArmReg, m: ArmReg) {
        let _ = (cond, n, d, m);
        self.unimplemented();
    }

    // Status register access
    fn mrs(&mut self, cond: Cond, d: ArmReg) {
        let _ = (cond, d);
        self.unimplemented();
    }
    fn msr_imm(&mut self, cond: Cond, mask: u8, rotate: u8, imm8: u8) {
        let _ = (cond, mask, rotate, imm8);
        self.unimplemented();
    }
    fn msr_reg(&mut self, cond: Cond, mask: u8, n: ArmReg) {
        let _ = (cond, mask, n);
        self.unimplemented();
    }
    fn cps(&mut self) {
        self.unimplemented();
    }
    fn setend(&mut self, e: bool) {
        let _ = e;
        self.unimplemented();
    }
    fn rfe(&mut self) {
        self.unimplemented();
    }
    fn srs(&mut self) {
        self.unimplemented();
    }

    // Coprocessor
    fn cdp(&mut self) {
        self.unimplemented();
    }
    fn ldc(&mut self) {
        self.unimplemented();
    }
    fn mcr(&mut self) {
        self.unimplemented();
    }
    fn mcrr(&mut self) {
        self.unimplemented();
    }
    fn mrc(&mut self) {
        self.unimplemented();
    }
    fn mrrc(&mut self) {
        self.unimplemented();
    }
    fn stc(&mut self) {
        self.unimplemented();
    }
}
