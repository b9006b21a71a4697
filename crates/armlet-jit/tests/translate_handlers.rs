//! Per-handler IR shape tests: flag narrowing, shifter composition, PC
//! reads/writes, calls and returns, loads and load-multiple.

mod common;

use armlet_jit::ir::verify::verify_block;
use armlet_jit::{translate, MicroArmFlags, MicroOp, MicroTerminal, MicroValueKind, ValueId};
use armlet_types::ArmReg;
use common::{loc, SimpleBus};

const UNALLOCATED: u32 = 0xF700_0000;

fn translated(words: &[u32]) -> armlet_jit::MicroBlock {
    let mut bus = SimpleBus::new(0x3000);
    bus.load_words(0x1000, words);
    let block = translate(&bus, loc(0x1000));
    verify_block(&block).unwrap();
    block
}

fn ops_of(block: &armlet_jit::MicroBlock) -> Vec<MicroOp> {
    block.iter().map(|(_, v)| v.op()).collect()
}

fn find_op(block: &armlet_jit::MicroBlock, op: MicroOp) -> Vec<ValueId> {
    block
        .iter()
        .filter(|(_, v)| v.op() == op)
        .map(|(id, _)| id)
        .collect()
}

#[test]
fn adds_publishes_the_full_arithmetic_flag_set() {
    // adds r1, r2, #1
    let block = translated(&[0xE292_1001, UNALLOCATED]);
    let adds = find_op(&block, MicroOp::Add);
    assert_eq!(adds.len(), 1);
    assert_eq!(block.value(adds[0]).write_flags(), MicroArmFlags::NZCV);
}

#[test]
fn ands_with_shift_splits_flags_between_shifter_and_alu() {
    // ands r1, r2, r3, lsr #4: the shifter publishes C, the And publishes NZ.
    let block = translated(&[0xE012_1223, UNALLOCATED]);

    let shifts = find_op(&block, MicroOp::Lsr);
    assert_eq!(shifts.len(), 1);
    assert_eq!(block.value(shifts[0]).write_flags(), MicroArmFlags::C);

    let ands = find_op(&block, MicroOp::And);
    assert_eq!(ands.len(), 1);
    assert_eq!(block.value(ands[0]).write_flags(), MicroArmFlags::NZ);
}

#[test]
fn untaken_flag_writes_are_narrowed_away() {
    // add r1, r2, r3, lsl #1 (no S): neither the shift nor the add may
    // touch the flags.
    let block = translated(&[0xE082_1083, UNALLOCATED]);
    for (_, value) in block.iter() {
        assert_eq!(value.write_flags(), MicroArmFlags::empty());
    }
}

#[test]
fn cmp_keeps_flags_with_no_destination() {
    // cmp r9, #0 leaves a flag-writing Sub with no register store.
    let block = translated(&[0xE359_0000, UNALLOCATED]);

    let subs = find_op(&block, MicroOp::Sub);
    assert_eq!(subs.len(), 1);
    assert_eq!(block.value(subs[0]).write_flags(), MicroArmFlags::NZCV);
    assert!(find_op(&block, MicroOp::SetGpr).is_empty());
}

#[test]
fn repeated_reads_share_one_get_gpr() {
    // add r1, r2, #1; add r3, r2, #1 -- r2 is materialised once.
    let block = translated(&[0xE282_1001, 0xE282_3001, UNALLOCATED]);
    assert_eq!(find_op(&block, MicroOp::GetGpr).len(), 1);
}

#[test]
fn pc_reads_materialise_fresh_pipeline_constants() {
    // mov r0, pc; mov r1, pc
    let block = translated(&[0xE1A0_000F, 0xE1A0_100F, UNALLOCATED]);

    let consts: Vec<u32> = block
        .iter()
        .filter_map(|(_, v)| match v.kind() {
            MicroValueKind::ConstU32(value) => Some(*value),
            _ => None,
        })
        .collect();
    assert_eq!(consts, vec![0x1008, 0x100C]);
    assert!(find_op(&block, MicroOp::GetGpr).is_empty());
}

#[test]
fn storing_a_register_to_itself_is_elided() {
    // mov r1, r1 writes nothing back.
    let block = translated(&[0xE1A0_1001, UNALLOCATED]);
    assert_eq!(ops_of(&block), vec![MicroOp::GetGpr]);
}

#[test]
fn mov_to_pc_ends_the_block_with_an_alu_pc_write() {
    // mov pc, lr
    let block = translated(&[0xE1A0_F00E]);
    assert_eq!(ops_of(&block), vec![MicroOp::GetGpr, MicroOp::AluWritePc]);
    assert_eq!(*block.terminal(), MicroTerminal::ReturnToDispatch);
}

#[test]
fn mvn_complements_through_not() {
    // mvn r4, r3
    let block = translated(&[0xE1E0_4003, UNALLOCATED]);
    assert_eq!(
        ops_of(&block),
        vec![MicroOp::GetGpr, MicroOp::Not, MicroOp::SetGpr]
    );
}

#[test]
fn bl_hints_the_return_stack_and_sets_lr() {
    // bl +12 from 0x1000: target 0x1014, lr = 0x1004.
    let block = translated(&[0xEB00_0003]);

    assert_eq!(
        ops_of(&block),
        vec![MicroOp::ConstU32, MicroOp::PushRsbHint, MicroOp::SetGpr]
    );
    let ret = block.iter().next().unwrap();
    assert_eq!(*ret.1.kind(), MicroValueKind::ConstU32(0x1004));

    let stores: Vec<_> = block
        .iter()
        .filter_map(|(_, v)| match v.kind() {
            MicroValueKind::SetGpr { reg, arg } => Some((*reg, *arg)),
            _ => None,
        })
        .collect();
    assert_eq!(stores, vec![(ArmReg::Lr, ret.0)]);

    assert_eq!(
        *block.terminal(),
        MicroTerminal::LinkBlock { next: loc(0x1014) }
    );
}

#[test]
fn bx_lr_returns_through_the_rsb() {
    // bx lr
    let block = translated(&[0xE12F_FF1E]);
    assert_eq!(ops_of(&block), vec![MicroOp::GetGpr, MicroOp::LoadWritePc]);
    assert_eq!(*block.terminal(), MicroTerminal::PopRsbHint);
}

#[test]
fn bx_through_a_plain_register_returns_to_dispatch() {
    // bx r3
    let block = translated(&[0xE12F_FF13]);
    assert_eq!(*block.terminal(), MicroTerminal::ReturnToDispatch);
}

#[test]
fn blx_register_calls_indirect() {
    // blx r3: push the hint, set lr, write the pc, back to dispatch.
    let block = translated(&[0xE12F_FF33]);
    assert_eq!(
        ops_of(&block),
        vec![
            MicroOp::GetGpr,
            MicroOp::ConstU32,
            MicroOp::PushRsbHint,
            MicroOp::LoadWritePc,
            MicroOp::SetGpr,
        ]
    );
    assert_eq!(*block.terminal(), MicroTerminal::ReturnToDispatch);
}

#[test]
fn clz_maps_to_count_leading_zeros() {
    // clz r2, r3
    let block = translated(&[0xE16F_2F13, UNALLOCATED]);
    assert_eq!(
        ops_of(&block),
        vec![
            MicroOp::GetGpr,
            MicroOp::CountLeadingZeros,
            MicroOp::SetGpr
        ]
    );
}

#[test]
fn uxtb_masks_the_low_byte_without_flags() {
    // uxtb r4, r3
    let block = translated(&[0xE6EF_4073, UNALLOCATED]);
    assert_eq!(
        ops_of(&block),
        vec![
            MicroOp::GetGpr,
            MicroOp::ConstU32,
            MicroOp::And,
            MicroOp::SetGpr
        ]
    );
    let ands = find_op(&block, MicroOp::And);
    assert_eq!(block.value(ands[0]).write_flags(), MicroArmFlags::empty());
    let mask = block.iter().nth(1).unwrap();
    assert_eq!(*mask.1.kind(), MicroValueKind::ConstU32(0xFF));
}

#[test]
fn sxth_extends_through_shift_pairs() {
    // sxth r2, r3
    let block = translated(&[0xE6BF_2073, UNALLOCATED]);
    assert_eq!(
        ops_of(&block),
        vec![
            MicroOp::GetGpr,
            MicroOp::ConstU32,
            MicroOp::Lsl,
            MicroOp::Asr,
            MicroOp::SetGpr
        ]
    );
    for (_, value) in block.iter() {
        assert_eq!(value.write_flags(), MicroArmFlags::empty());
    }
}

#[test]
fn ldr_immediate_reads_through_the_offset_address() {
    // ldr r2, [r1, #4]
    let block = translated(&[0xE591_2004, UNALLOCATED]);
    assert_eq!(
        ops_of(&block),
        vec![
            MicroOp::GetGpr,
            MicroOp::ConstU32,
            MicroOp::Add,
            MicroOp::Read32,
            MicroOp::SetGpr
        ]
    );
}

#[test]
fn ldr_literal_uses_the_pipeline_pc() {
    // ldr r0, [pc, #4]: base is the constant 0x1008.
    let block = translated(&[0xE59F_0004, UNALLOCATED]);
    let first = block.iter().next().unwrap();
    assert_eq!(*first.1.kind(), MicroValueKind::ConstU32(0x1008));
    assert_eq!(find_op(&block, MicroOp::Read32).len(), 1);
}

#[test]
fn ldr_post_index_writes_the_base_back() {
    // ldr r2, [r1], #4: read at r1, then r1 += 4.
    let block = translated(&[0xE491_2004, UNALLOCATED]);

    let stores: Vec<ArmReg> = block
        .iter()
        .filter_map(|(_, v)| match v.kind() {
            MicroValueKind::SetGpr { reg, .. } => Some(*reg),
            _ => None,
        })
        .collect();
    assert_eq!(stores, vec![ArmReg::R1, ArmReg::R2]);

    // The read happens at the un-adjusted base.
    let reads = find_op(&block, MicroOp::Read32);
    let addr = block.value(reads[0]).operand(0);
    assert_eq!(*block.value(addr).kind(), MicroValueKind::GetGpr(ArmReg::R1));
}

#[test]
fn ldm_pop_with_pc_returns_through_the_rsb() {
    // ldmia sp!, {r4, pc} -- the function-return idiom.
    let block = translated(&[0xE8BD_8010]);

    assert_eq!(find_op(&block, MicroOp::Read32).len(), 2);
    assert_eq!(find_op(&block, MicroOp::LoadWritePc).len(), 1);
    assert_eq!(*block.terminal(), MicroTerminal::PopRsbHint);

    let stored: Vec<ArmReg> = block
        .iter()
        .filter_map(|(_, v)| match v.kind() {
            MicroValueKind::SetGpr { reg, .. } => Some(*reg),
            _ => None,
        })
        .collect();
    assert_eq!(stored, vec![ArmReg::R4, ArmReg::Sp]);
}

#[test]
fn ldm_without_pc_continues_translation() {
    // ldmia r0, {r1, r2}, then an undecodable word.
    let block = translated(&[0xE890_0006, UNALLOCATED]);
    assert_eq!(find_op(&block, MicroOp::Read32).len(), 2);
    assert_eq!(
        *block.terminal(),
        MicroTerminal::Interpret { next: loc(0x1004) }
    );
}

#[test]
fn clrex_emits_clear_exclusive() {
    let block = translated(&[0xF57F_F01F, UNALLOCATED]);
    assert_eq!(ops_of(&block), vec![MicroOp::ClearExclusive]);
    assert_eq!(
        *block.terminal(),
        MicroTerminal::Interpret { next: loc(0x1004) }
    );
}

#[test]
fn movs_falls_back_to_the_interpreter() {
    // movs r1, r2 cannot publish NZ through the current op set.
    let block = translated(&[0xE1B0_1002]);
    assert!(block.is_empty());
    assert_eq!(
        *block.terminal(),
        MicroTerminal::Interpret { next: loc(0x1000) }
    );
}
