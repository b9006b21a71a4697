//! Single-pass translation of guest ARM code into micro-IR blocks.
//!
//! [`translate`] walks instructions linearly from the entry location,
//! dispatching each decoded word onto [`ArmTranslator`]'s visitor callbacks.
//! Handlers emit SSA nodes through the block and keep a per-GPR cache of the
//! latest value, so repeated reads collapse to one `GetGpr` and only the
//! final value written to a register is stored back. Translation stops at
//! the first control-flow instruction, condition-context mismatch, page
//! boundary or untranslatable instruction; the last of these defers to the
//! interpreter rather than failing.

use tracing::{debug, trace};

use armlet_types::{ArmReg, Cond, RegList, ShiftType, SignExtendRotation};

use crate::decode::{decode_arm, ArmVisitor};
use crate::ir::{
    LocationDescriptor, MicroArmFlags, MicroBlock, MicroOp, MicroTerminal, ValueId,
};

/// Guest instruction memory as seen by the translator.
///
/// `read32` is called with 4-aligned addresses and must not fail; fault
/// reporting is the memory subsystem's concern, outside this front-end.
pub trait GuestBus {
    fn read32(&self, vaddr: u32) -> u32;
}

/// Safety limits for a single translation.
///
/// The architectural stop conditions (control flow, page boundary) bound
/// every block already; `max_insts` additionally caps pathological straight-
/// line runs so downstream consumers can size buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationLimits {
    pub max_insts: usize,
}

impl Default for TranslationLimits {
    fn default() -> Self {
        Self { max_insts: 64 }
    }
}

/// Translate one micro-block starting at `location`.
///
/// Never fails: any untranslatable situation ends the block with an
/// [`MicroTerminal::Interpret`] at the offending instruction.
#[must_use]
pub fn translate<B: GuestBus>(bus: &B, location: LocationDescriptor) -> MicroBlock {
    translate_with_limits(bus, location, TranslationLimits::default())
}

/// [`translate`] with explicit [`TranslationLimits`].
#[must_use]
pub fn translate_with_limits<B: GuestBus>(
    bus: &B,
    location: LocationDescriptor,
    limits: TranslationLimits,
) -> MicroBlock {
    ArmTranslator::new(bus, location, limits).translate()
}

const GPR_CACHE_SIZE: usize = 15;

struct ArmTranslator<'a, B> {
    bus: &'a B,
    block: MicroBlock,
    current: LocationDescriptor,
    limits: TranslationLimits,
    stop: bool,
    insts_translated: usize,
    /// Latest SSA value per guest GPR (PC is never cached).
    reg_values: [Option<ValueId>; GPR_CACHE_SIZE],
    /// The `GetGpr` emitted on a register's first read, used to elide
    /// writebacks of unchanged registers.
    entry_reads: [Option<ValueId>; GPR_CACHE_SIZE],
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum AluKind {
    And,
    Eor,
    Sub,
    Rsb,
    Add,
    Adc,
    Sbc,
    Rsc,
}

impl AluKind {
    /// Logical ops take C from the shifter; arithmetic ops produce NZCV
    /// themselves.
    fn is_logical(self) -> bool {
        matches!(self, AluKind::And | AluKind::Eor)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum TestKind {
    Tst,
    Teq,
    Cmp,
    Cmn,
}

impl TestKind {
    fn is_logical(self) -> bool {
        matches!(self, TestKind::Tst | TestKind::Teq)
    }
}

impl<'a, B: GuestBus> ArmTranslator<'a, B> {
    fn new(bus: &'a B, location: LocationDescriptor, limits: TranslationLimits) -> Self {
        Self {
            bus,
            block: MicroBlock::new(location),
            current: location,
            limits,
            stop: false,
            insts_translated: 0,
            reg_values: [None; GPR_CACHE_SIZE],
            entry_reads: [None; GPR_CACHE_SIZE],
        }
    }

    fn translate(mut self) -> MicroBlock {
        assert!(!self.stop, "translator reused after it produced a block");

        if self.current.t_flag {
            // Thumb decoding is not wired up yet; the interpreter handles
            // Thumb regions in full.
            self.fallback_to_interpreter();
        }

        while !self.stop {
            self.translate_single();
            self.insts_translated += 1;

            if self.stop {
                break;
            }
            if self.current.arm_pc & 0xFFF == 0 {
                // Crossed into the next 4 KiB page; stop so a block never
                // spans pages with potentially different translations.
                self.stop_with(MicroTerminal::LinkBlock { next: self.current });
                break;
            }
            if self.insts_translated >= self.limits.max_insts {
                self.stop_with(MicroTerminal::LinkBlock { next: self.current });
                break;
            }
        }

        self.write_back_registers();

        debug!(
            pc = self.block.location.arm_pc,
            insts = self.insts_translated,
            values = self.block.len(),
            "translated block"
        );
        self.block
    }

    fn translate_single(&mut self) {
        let word = self.bus.read32(self.current.arm_pc & !3);
        match decode_arm(word) {
            Some(inst) => inst.visit(self, word),
            None => {
                trace!(
                    pc = self.current.arm_pc,
                    word,
                    "word does not decode; deferring to interpreter"
                );
                self.fallback_to_interpreter();
            }
        }
    }

    // --- Register cache ----------------------------------------------------

    /// The SSA value currently holding `reg`.
    ///
    /// PC is never cached: each read materialises a fresh constant with the
    /// ARMv6 pipeline offset applied.
    fn get_reg(&mut self, reg: ArmReg) -> ValueId {
        if reg.is_pc() {
            return self.block.const_u32(self.current.arm_pc.wrapping_add(8));
        }
        let idx = reg.index();
        if let Some(value) = self.reg_values[idx] {
            return value;
        }
        let value = self.block.get_gpr(reg);
        self.reg_values[idx] = Some(value);
        self.entry_reads[idx] = Some(value);
        value
    }

    /// Record `value` as the current contents of `reg`. No IR is emitted;
    /// the writeback pass materialises only the final value per register.
    fn set_reg(&mut self, reg: ArmReg, value: ValueId) {
        assert!(!reg.is_pc(), "PC writes go through the PC micro-ops");
        self.reg_values[reg.index()] = Some(value);
    }

    /// Append a `SetGpr` for every register whose cached value differs from
    /// the `GetGpr` read at entry. Stores of the entry value are elided.
    fn write_back_registers(&mut self) {
        for idx in 0..GPR_CACHE_SIZE {
            if let Some(value) = self.reg_values[idx] {
                if self.entry_reads[idx] != Some(value) {
                    self.block.set_gpr(ArmReg::from_u4(idx as u8), value);
                }
            }
        }
    }

    // --- Stop conditions ---------------------------------------------------

    fn stop_with(&mut self, terminal: MicroTerminal) {
        self.block.set_terminal(terminal);
        self.stop = true;
    }

    fn fallback_to_interpreter(&mut self) {
        trace!(
            pc = self.current.arm_pc,
            "deferring to interpreter from this instruction"
        );
        self.stop_with(MicroTerminal::Interpret { next: self.current });
    }

    /// Condition-context check. Matching the block's static condition means
    /// the instruction runs unconditionally here. On a mismatch the block
    /// links to a sibling specialised for the instruction's condition; the
    /// instruction itself is translated there, not here.
    fn condition_passed(&mut self, cond: Cond) -> bool {
        if cond == self.current.cond {
            return true;
        }
        self.stop_with(MicroTerminal::LinkBlock {
            next: self.current.with_cond(cond),
        });
        false
    }

    fn advance_pc(&mut self) {
        self.current = self.current.advance(4);
    }

    // --- Common emission helpers -------------------------------------------

    fn alu_write_pc(&mut self, value: ValueId) {
        self.block.inst(MicroOp::AluWritePc, &[value]);
    }

    fn load_write_pc(&mut self, value: ValueId) {
        self.block.inst(MicroOp::LoadWritePc, &[value]);
    }

    /// Operand2 for an immediate-operand instruction. When the shifter
    /// carry-out must reach the flags (logical op with S and a non-zero
    /// rotation), the rotation is emitted as a `Ror` so the backend computes
    /// it; otherwise the immediate is folded to a constant.
    fn imm_operand(&mut self, rotate: u8, imm8: u8, carry_out: bool) -> ValueId {
        if carry_out && rotate != 0 {
            let value = self.block.const_u32(imm8 as u32);
            let amount = self.block.const_u32(u32::from(rotate) * 2);
            self.block.inst(MicroOp::Ror, &[value, amount])
        } else {
            self.block.const_u32(expand_imm(rotate, imm8))
        }
    }

    /// Operand2 for an immediate-shifted register, applying the ARM
    /// `DecodeImmShift` rules (LSR/ASR #0 mean #32, ROR #0 means RRX).
    /// The shift's C write is kept only when `carry_out` is set.
    fn shifted_operand(
        &mut self,
        m: ArmReg,
        shift: ShiftType,
        imm5: u8,
        carry_out: bool,
    ) -> ValueId {
        let value = self.get_reg(m);
        let (op, amount) = match (shift, imm5) {
            (ShiftType::Lsl, 0) => return value,
            (ShiftType::Lsl, n) => (MicroOp::Lsl, u32::from(n)),
            (ShiftType::Lsr, 0) => (MicroOp::Lsr, 32),
            (ShiftType::Lsr, n) => (MicroOp::Lsr, u32::from(n)),
            (ShiftType::Asr, 0) => (MicroOp::Asr, 32),
            (ShiftType::Asr, n) => (MicroOp::Asr, u32::from(n)),
            (ShiftType::Ror, 0) => {
                debug_assert!(!carry_out, "RRX operands with live carry-out must fall back");
                return self.block.inst(MicroOp::Rrx, &[value]);
            }
            (ShiftType::Ror, n) => (MicroOp::Ror, u32::from(n)),
        };
        let amount = self.block.const_u32(amount);
        let shifted = self.block.inst(op, &[value, amount]);
        if !carry_out {
            self.block.set_write_flags(shifted, MicroArmFlags::empty());
        }
        shifted
    }

    /// `base + offset` (or `- |offset|`), folded away when the offset is 0.
    /// The address arithmetic never touches the flags.
    fn offset_addr(&mut self, base: ValueId, offset: i64) -> ValueId {
        if offset == 0 {
            return base;
        }
        let magnitude = self.block.const_u32(offset.unsigned_abs() as u32);
        let op = if offset > 0 { MicroOp::Add } else { MicroOp::Sub };
        let addr = self.block.inst(op, &[base, magnitude]);
        self.block.set_write_flags(addr, MicroArmFlags::empty());
        addr
    }

    // --- Data-processing drivers -------------------------------------------

    fn emit_alu(&mut self, kind: AluKind, a: ValueId, b: ValueId) -> ValueId {
        match kind {
            AluKind::And => self.block.inst(MicroOp::And, &[a, b]),
            AluKind::Eor => self.block.inst(MicroOp::Eor, &[a, b]),
            AluKind::Sub => self.block.inst(MicroOp::Sub, &[a, b]),
            AluKind::Rsb => self.block.inst(MicroOp::Sub, &[b, a]),
            AluKind::Add => self.block.inst(MicroOp::Add, &[a, b]),
            AluKind::Adc => self.block.inst(MicroOp::AddWithCarry, &[a, b]),
            AluKind::Sbc => {
                let not_b = self.block.inst(MicroOp::Not, &[b]);
                self.block.inst(MicroOp::AddWithCarry, &[a, not_b])
            }
            AluKind::Rsc => {
                let not_a = self.block.inst(MicroOp::Not, &[a]);
                self.block.inst(MicroOp::AddWithCarry, &[b, not_a])
            }
        }
    }

    /// Narrow the result's flag writes to what the instruction actually
    /// publishes: nothing without S, NZ for logical ops (C arrives from the
    /// shifter), the full arithmetic set otherwise.
    fn narrow_alu_flags(&mut self, result: ValueId, kind: AluKind, s: bool) {
        let flags = if !s {
            MicroArmFlags::empty()
        } else if kind.is_logical() {
            MicroArmFlags::NZ
        } else {
            MicroArmFlags::NZCV
        };
        self.block.set_write_flags(result, flags);
    }

    fn alu_finish(&mut self, d: ArmReg, result: ValueId) {
        if d.is_pc() {
            self.alu_write_pc(result);
            self.stop_with(MicroTerminal::ReturnToDispatch);
            return;
        }
        self.set_reg(d, result);
        self.advance_pc();
    }

    fn alu_imm(
        &mut self,
        kind: AluKind,
        cond: Cond,
        s: bool,
        n: ArmReg,
        d: ArmReg,
        rotate: u8,
        imm8: u8,
    ) {
        if !self.condition_passed(cond) {
            return;
        }
        if d.is_pc() && s {
            // S with Rd=PC is the exception-return form.
            return self.fallback_to_interpreter();
        }
        let shifter_carry = s && kind.is_logical();
        let rn = self.get_reg(n);
        let op2 = self.imm_operand(rotate, imm8, shifter_carry);
        let result = self.emit_alu(kind, rn, op2);
        self.narrow_alu_flags(result, kind, s);
        self.alu_finish(d, result);
    }

    fn alu_reg(
        &mut self,
        kind: AluKind,
        cond: Cond,
        s: bool,
        n: ArmReg,
        d: ArmReg,
        imm5: u8,
        shift: ShiftType,
        m: ArmReg,
    ) {
        if !self.condition_passed(cond) {
            return;
        }
        if d.is_pc() && s {
            return self.fallback_to_interpreter();
        }
        let shifter_carry = s && kind.is_logical();
        if shifter_carry && shift == ShiftType::Ror && imm5 == 0 {
            // RRX publishes no carry in this IR.
            return self.fallback_to_interpreter();
        }
        let rn = self.get_reg(n);
        let op2 = self.shifted_operand(m, shift, imm5, shifter_carry);
        let result = self.emit_alu(kind, rn, op2);
        self.narrow_alu_flags(result, kind, s);
        self.alu_finish(d, result);
    }

    fn emit_test(&mut self, kind: TestKind, a: ValueId, b: ValueId) {
        let result = match kind {
            TestKind::Tst => self.block.inst(MicroOp::And, &[a, b]),
            TestKind::Teq => self.block.inst(MicroOp::Eor, &[a, b]),
            TestKind::Cmp => self.block.inst(MicroOp::Sub, &[a, b]),
            TestKind::Cmn => self.block.inst(MicroOp::Add, &[a, b]),
        };
        if kind.is_logical() {
            self.block.set_write_flags(result, MicroArmFlags::NZ);
        }
    }

    fn test_imm(&mut self, kind: TestKind, cond: Cond, n: ArmReg, rotate: u8, imm8: u8) {
        if !self.condition_passed(cond) {
            return;
        }
        let rn = self.get_reg(n);
        let op2 = self.imm_operand(rotate, imm8, kind.is_logical());
        self.emit_test(kind, rn, op2);
        self.advance_pc();
    }

    fn test_reg(
        &mut self,
        kind: TestKind,
        cond: Cond,
        n: ArmReg,
        imm5: u8,
        shift: ShiftType,
        m: ArmReg,
    ) {
        if !self.condition_passed(cond) {
            return;
        }
        if kind.is_logical() && shift == ShiftType::Ror && imm5 == 0 {
            return self.fallback_to_interpreter();
        }
        let rn = self.get_reg(n);
        let op2 = self.shifted_operand(m, shift, imm5, kind.is_logical());
        self.emit_test(kind, rn, op2);
        self.advance_pc();
    }

    fn move_finish(&mut self, d: ArmReg, value: ValueId) {
        if d.is_pc() {
            self.alu_write_pc(value);
            self.stop_with(MicroTerminal::ReturnToDispatch);
            return;
        }
        self.set_reg(d, value);
        self.advance_pc();
    }

    // --- Extension driver --------------------------------------------------

    /// SXT*/UXT* family: rotate, extract the low 8/16 bits (sign- or
    /// zero-extending), optionally accumulate into Rn. All flag writes are
    /// narrowed away.
    fn extend_op(
        &mut self,
        cond: Cond,
        n: Option<ArmReg>,
        d: ArmReg,
        rotate: SignExtendRotation,
        m: ArmReg,
        signed: bool,
        width: u32,
    ) {
        if !self.condition_passed(cond) {
            return;
        }
        if d.is_pc() || m.is_pc() {
            return self.fallback_to_interpreter();
        }

        let value = self.get_reg(m);
        let rotated = if rotate.amount() == 0 {
            value
        } else {
            let amount = self.block.const_u32(rotate.amount());
            let rotated = self.block.inst(MicroOp::Ror, &[value, amount]);
            self.block.set_write_flags(rotated, MicroArmFlags::empty());
            rotated
        };

        let extracted = if signed {
            let amount = self.block.const_u32(32 - width);
            let high = self.block.inst(MicroOp::Lsl, &[rotated, amount]);
            self.block.set_write_flags(high, MicroArmFlags::empty());
            let low = self.block.inst(MicroOp::Asr, &[high, amount]);
            self.block.set_write_flags(low, MicroArmFlags::empty());
            low
        } else {
            let mask = self.block.const_u32((1u32 << width) - 1);
            let masked = self.block.inst(MicroOp::And, &[rotated, mask]);
            self.block.set_write_flags(masked, MicroArmFlags::empty());
            masked
        };

        let result = match n {
            Some(n) => {
                let rn = self.get_reg(n);
                let sum = self.block.inst(MicroOp::Add, &[rn, extracted]);
                self.block.set_write_flags(sum, MicroArmFlags::empty());
                sum
            }
            None => extracted,
        };
        self.set_reg(d, result);
        self.advance_pc();
    }
}

/// ARMv6 immediate expansion: imm8 rotated right by 2*rotate.
fn expand_imm(rotate: u8, imm8: u8) -> u32 {
    u32::from(imm8).rotate_right(u32::from(rotate) * 2)
}

/// Branch offset: imm24 sign-extended to 32 bits and shifted left by 2.
fn branch_offset(imm24: u32) -> u32 {
    (((imm24 << 8) as i32) >> 6) as u32
}

impl<'a, B: GuestBus> ArmVisitor for ArmTranslator<'a, B> {
    fn unimplemented(&mut self) {
        self.fallback_to_interpreter();
    }

    // --- Branches ----------------------------------------------------------

    fn b(&mut self, cond: Cond, imm24: u32) {
        if !self.condition_passed(cond) {
            return;
        }
        let target = self
            .current
            .arm_pc
            .wrapping_add(8)
            .wrapping_add(branch_offset(imm24));
        self.stop_with(MicroTerminal::LinkBlock {
            next: self.current.with_pc(target),
        });
    }

    fn bl(&mut self, cond: Cond, imm24: u32) {
        if !self.condition_passed(cond) {
            return;
        }
        let ret = self.block.const_u32(self.current.arm_pc.wrapping_add(4));
        self.block.inst(MicroOp::PushRsbHint, &[ret]);
        self.set_reg(ArmReg::Lr, ret);
        let target = self
            .current
            .arm_pc
            .wrapping_add(8)
            .wrapping_add(branch_offset(imm24));
        self.stop_with(MicroTerminal::LinkBlock {
            next: self.current.with_pc(target),
        });
    }

    fn blx_imm(&mut self, h: bool, imm24: u32) {
        // Unconditional encoding; always exchanges into Thumb.
        let ret = self.block.const_u32(self.current.arm_pc.wrapping_add(4));
        self.block.inst(MicroOp::PushRsbHint, &[ret]);
        self.set_reg(ArmReg::Lr, ret);
        let target = self
            .current
            .arm_pc
            .wrapping_add(8)
            .wrapping_add(branch_offset(imm24))
            .wrapping_add(if h { 2 } else { 0 });
        self.stop_with(MicroTerminal::LinkBlock {
            next: self.current.with_pc(target).with_t_flag(true),
        });
    }

    fn blx_reg(&mut self, cond: Cond, m: ArmReg) {
        if !self.condition_passed(cond) {
            return;
        }
        if m.is_pc() {
            return self.fallback_to_interpreter();
        }
        let target = self.get_reg(m);
        let ret = self.block.const_u32(self.current.arm_pc.wrapping_add(4));
        self.block.inst(MicroOp::PushRsbHint, &[ret]);
        self.set_reg(ArmReg::Lr, ret);
        self.load_write_pc(target);
        self.stop_with(MicroTerminal::ReturnToDispatch);
    }

    fn bx(&mut self, cond: Cond, m: ArmReg) {
        if !self.condition_passed(cond) {
            return;
        }
        let target = self.get_reg(m);
        self.load_write_pc(target);
        let terminal = if m == ArmReg::Lr {
            MicroTerminal::PopRsbHint
        } else {
            MicroTerminal::ReturnToDispatch
        };
        self.stop_with(terminal);
    }

    // --- Data processing ---------------------------------------------------

    fn and_imm(&mut self, cond: Cond, s: bool, n: ArmReg, d: ArmReg, rotate: u8, imm8: u8) {
        self.alu_imm(AluKind::And, cond, s, n, d, rotate, imm8);
    }
    fn eor_imm(&mut self, cond: Cond, s: bool, n: ArmReg, d: ArmReg, rotate: u8, imm8: u8) {
        self.alu_imm(AluKind::Eor, cond, s, n, d, rotate, imm8);
    }
    fn sub_imm(&mut self, cond: Cond, s: bool, n: ArmReg, d: ArmReg, rotate: u8, imm8: u8) {
        self.alu_imm(AluKind::Sub, cond, s, n, d, rotate, imm8);
    }
    fn rsb_imm(&mut self, cond: Cond, s: bool, n: ArmReg, d: ArmReg, rotate: u8, imm8: u8) {
        self.alu_imm(AluKind::Rsb, cond, s, n, d, rotate, imm8);
    }
    fn add_imm(&mut self, cond: Cond, s: bool, n: ArmReg, d: ArmReg, rotate: u8, imm8: u8) {
        self.alu_imm(AluKind::Add, cond, s, n, d, rotate, imm8);
    }
    fn adc_imm(&mut self, cond: Cond, s: bool, n: ArmReg, d: ArmReg, rotate: u8, imm8: u8) {
        self.alu_imm(AluKind::Adc, cond, s, n, d, rotate, imm8);
    }
    fn sbc_imm(&mut self, cond: Cond, s: bool, n: ArmReg, d: ArmReg, rotate: u8, imm8: u8) {
        self.alu_imm(AluKind::Sbc, cond, s, n, d, rotate, imm8);
    }
    fn rsc_imm(&mut self, cond: Cond, s: bool, n: ArmReg, d: ArmReg, rotate: u8, imm8: u8) {
        self.alu_imm(AluKind::Rsc, cond, s, n, d, rotate, imm8);
    }

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
        self.alu_reg(AluKind::And, cond, s, n, d, imm5, shift, m);
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
        self.alu_reg(AluKind::Eor, cond, s, n, d, imm5, shift, m);
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
        self.alu_reg(AluKind::Sub, cond, s, n, d, imm5, shift, m);
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
        self.alu_reg(AluKind::Rsb, cond, s, n, d, imm5, shift, m);
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
        self.alu_reg(AluKind::Add, cond, s, n, d, imm5, shift, m);
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
        self.alu_reg(AluKind::Adc, cond, s, n, d, imm5, shift, m);
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
        self.alu_reg(AluKind::Sbc, cond, s, n, d, imm5, shift, m);
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
        self.alu_reg(AluKind::Rsc, cond, s, n, d, imm5, shift, m);
    }

    fn tst_imm(&mut self, cond: Cond, n: ArmReg, rotate: u8, imm8: u8) {
        self.test_imm(TestKind::Tst, cond, n, rotate, imm8);
    }
    fn teq_imm(&mut self, cond: Cond, n: ArmReg, rotate: u8, imm8: u8) {
        self.test_imm(TestKind::Teq, cond, n, rotate, imm8);
    }
    fn cmp_imm(&mut self, cond: Cond, n: ArmReg, rotate: u8, imm8: u8) {
        self.test_imm(TestKind::Cmp, cond, n, rotate, imm8);
    }
    fn cmn_imm(&mut self, cond: Cond, n: ArmReg, rotate: u8, imm8: u8) {
        self.test_imm(TestKind::Cmn, cond, n, rotate, imm8);
    }
    fn tst_reg(&mut self, cond: Cond, n: ArmReg, imm5: u8, shift: ShiftType, m: ArmReg) {
        self.test_reg(TestKind::Tst, cond, n, imm5, shift, m);
    }
    fn teq_reg(&mut self, cond: Cond, n: ArmReg, imm5: u8, shift: ShiftType, m: ArmReg) {
        self.test_reg(TestKind::Teq, cond, n, imm5, shift, m);
    }
    fn cmp_reg(&mut self, cond: Cond, n: ArmReg, imm5: u8, shift: ShiftType, m: ArmReg) {
        self.test_reg(TestKind::Cmp, cond, n, imm5, shift, m);
    }
    fn cmn_reg(&mut self, cond: Cond, n: ArmReg, imm5: u8, shift: ShiftType, m: ArmReg) {
        self.test_reg(TestKind::Cmn, cond, n, imm5, shift, m);
    }

    fn mov_imm(&mut self, cond: Cond, s: bool, d: ArmReg, rotate: u8, imm8: u8) {
        if !self.condition_passed(cond) {
            return;
        }
        if s {
            // No micro-op publishes NZ for a bare move.
            return self.fallback_to_interpreter();
        }
        let value = self.block.const_u32(expand_imm(rotate, imm8));
        self.move_finish(d, value);
    }

    fn mov_reg(&mut self, cond: Cond, s: bool, d: ArmReg, imm5: u8, shift: ShiftType, m: ArmReg) {
        if !self.condition_passed(cond) {
            return;
        }
        if s {
            return self.fallback_to_interpreter();
        }
        let value = self.shifted_operand(m, shift, imm5, false);
        self.move_finish(d, value);
    }

    fn mvn_imm(&mut self, cond: Cond, s: bool, d: ArmReg, rotate: u8, imm8: u8) {
        if !self.condition_passed(cond) {
            return;
        }
        if s {
            return self.fallback_to_interpreter();
        }
        let op2 = self.block.const_u32(expand_imm(rotate, imm8));
        let value = self.block.inst(MicroOp::Not, &[op2]);
        self.move_finish(d, value);
    }

    fn mvn_reg(&mut self, cond: Cond, s: bool, d: ArmReg, imm5: u8, shift: ShiftType, m: ArmReg) {
        if !self.condition_passed(cond) {
            return;
        }
        if s {
            return self.fallback_to_interpreter();
        }
        let op2 = self.shifted_operand(m, shift, imm5, false);
        let value = self.block.inst(MicroOp::Not, &[op2]);
        self.move_finish(d, value);
    }

    // --- Miscellaneous -----------------------------------------------------

    fn clz(&mut self, cond: Cond, d: ArmReg, m: ArmReg) {
        if !self.condition_passed(cond) {
            return;
        }
        if d.is_pc() || m.is_pc() {
            return self.fallback_to_interpreter();
        }
        let value = self.get_reg(m);
        let result = self.block.inst(MicroOp::CountLeadingZeros, &[value]);
        self.set_reg(d, result);
        self.advance_pc();
    }

    // --- Extensions --------------------------------------------------------

    fn sxtab(&mut self, cond: Cond, n: ArmReg, d: ArmReg, rotate: SignExtendRotation, m: ArmReg) {
        self.extend_op(cond, Some(n), d, rotate, m, true, 8);
    }
    fn sxtah(&mut self, cond: Cond, n: ArmReg, d: ArmReg, rotate: SignExtendRotation, m: ArmReg) {
        self.extend_op(cond, Some(n), d, rotate, m, true, 16);
    }
    fn sxtb(&mut self, cond: Cond, d: ArmReg, rotate: SignExtendRotation, m: ArmReg) {
        self.extend_op(cond, None, d, rotate, m, true, 8);
    }
    fn sxth(&mut self, cond: Cond, d: ArmReg, rotate: SignExtendRotation, m: ArmReg) {
        self.extend_op(cond, None, d, rotate, m, true, 16);
    }
    fn uxtab(&mut self, cond: Cond, n: ArmReg, d: ArmReg, rotate: SignExtendRotation, m: ArmReg) {
        self.extend_op(cond, Some(n), d, rotate, m, false, 8);
    }
    fn uxtah(&mut self, cond: Cond, n: ArmReg, d: ArmReg, rotate: SignExtendRotation, m: ArmReg) {
        self.extend_op(cond, Some(n), d, rotate, m, false, 16);
    }
    fn uxtb(&mut self, cond: Cond, d: ArmReg, rotate: SignExtendRotation, m: ArmReg) {
        self.extend_op(cond, None, d, rotate, m, false, 8);
    }
    fn uxth(&mut self, cond: Cond, d: ArmReg, rotate: SignExtendRotation, m: ArmReg) {
        self.extend_op(cond, None, d, rotate, m, false, 16);
    }

    // --- Hints -------------------------------------------------------------

    fn nop(&mut self) {
        self.advance_pc();
    }

    fn pld(&mut self) {
        // Prefetch hint; no architectural effect.
        self.advance_pc();
    }

    // --- Load --------------------------------------------------------------

    fn ldr_imm(&mut self, cond: Cond, p: bool, u: bool, w: bool, n: ArmReg, d: ArmReg, imm12: u16) {
        if !self.condition_passed(cond) {
            return;
        }
        if !p && w {
            // LDRT: unprivileged access semantics.
            return self.fallback_to_interpreter();
        }
        if (w || !p) && n.is_pc() {
            return self.fallback_to_interpreter();
        }
        let offset = if u {
            i64::from(imm12)
        } else {
            -i64::from(imm12)
        };
        let base = self.get_reg(n);
        let addr = if p { self.offset_addr(base, offset) } else { base };
        let data = self.block.inst(MicroOp::Read32, &[addr]);
        if !p {
            let updated = self.offset_addr(base, offset);
            self.set_reg(n, updated);
        } else if w {
            self.set_reg(n, addr);
        }
        if d.is_pc() {
            self.load_write_pc(data);
            self.stop_with(MicroTerminal::ReturnToDispatch);
            return;
        }
        self.set_reg(d, data);
        self.advance_pc();
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
        if !self.condition_passed(cond) {
            return;
        }
        if (!p && w) || m.is_pc() || ((w || !p) && n.is_pc()) {
            return self.fallback_to_interpreter();
        }
        let base = self.get_reg(n);
        let offset = self.shifted_operand(m, shift, imm5, false);
        let apply = |t: &mut Self, base: ValueId, offset: ValueId| {
            let op = if u { MicroOp::Add } else { MicroOp::Sub };
            let addr = t.block.inst(op, &[base, offset]);
            t.block.set_write_flags(addr, MicroArmFlags::empty());
            addr
        };
        let addr = if p { apply(self, base, offset) } else { base };
        let data = self.block.inst(MicroOp::Read32, &[addr]);
        if !p {
            let updated = apply(self, base, offset);
            self.set_reg(n, updated);
        } else if w {
            self.set_reg(n, addr);
        }
        if d.is_pc() {
            self.load_write_pc(data);
            self.stop_with(MicroTerminal::ReturnToDispatch);
            return;
        }
        self.set_reg(d, data);
        self.advance_pc();
    }

    fn ldm(&mut self, cond: Cond, p: bool, u: bool, w: bool, n: ArmReg, list: RegList) {
        if !self.condition_passed(cond) {
            return;
        }
        if list.is_empty() || n.is_pc() || (w && list.contains(n)) {
            return self.fallback_to_interpreter();
        }

        let base = self.get_reg(n);
        let count = i64::from(list.count());
        let mut offset = match (p, u) {
            (false, true) => 0,
            (true, true) => 4,
            (false, false) => -4 * count + 4,
            (true, false) => -4 * count,
        };

        let mut pc_data = None;
        for reg in list.iter() {
            let addr = self.offset_addr(base, offset);
            let data = self.block.inst(MicroOp::Read32, &[addr]);
            if reg.is_pc() {
                pc_data = Some(data);
            } else {
                self.set_reg(reg, data);
            }
            offset += 4;
        }

        if w {
            let updated = self.offset_addr(base, if u { 4 * count } else { -4 * count });
            self.set_reg(n, updated);
        }

        if let Some(data) = pc_data {
            // Loading PC from memory is the return idiom; hint the RSB.
            self.load_write_pc(data);
            self.stop_with(MicroTerminal::PopRsbHint);
            return;
        }
        self.advance_pc();
    }

    // --- Synchronisation ---------------------------------------------------

    fn clrex(&mut self) {
        self.block.inst(MicroOp::ClearExclusive, &[]);
        self.advance_pc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_imm_rotates_pairs_of_bits() {
        assert_eq!(expand_imm(0, 5), 5);
        assert_eq!(expand_imm(1, 1), 0x4000_0000);
        assert_eq!(expand_imm(12, 0xFF), 0x00FF_0000);
    }

    #[test]
    fn branch_offset_sign_extends() {
        assert_eq!(branch_offset(0), 0);
        assert_eq!(branch_offset(1), 4);
        assert_eq!(branch_offset(0x00FF_FFFE), (-8i32) as u32);
        assert_eq!(branch_offset(0x0080_0000), ((-0x0080_0000i32) << 2) as u32);
    }
}
