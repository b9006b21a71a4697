//! End-to-end block-shape tests: stop conditions, terminals and the
//! writeback pass, driven through real ARM encodings.

mod common;

use armlet_jit::ir::verify::verify_block;
use armlet_jit::{
    translate, translate_with_limits, MicroArmFlags, MicroOp, MicroTerminal, MicroValueKind,
    TranslationLimits,
};
use armlet_types::{ArmReg, Cond};
use common::{loc, loc_cond, SimpleBus};

const UNALLOCATED: u32 = 0xF700_0000;

#[test]
fn undecodable_word_defers_to_interpreter() {
    let mut bus = SimpleBus::new(0x3000);
    bus.load_words(0x1000, &[UNALLOCATED]);

    let block = translate(&bus, loc(0x1000));

    assert!(block.is_empty());
    assert_eq!(
        *block.terminal(),
        MicroTerminal::Interpret { next: loc(0x1000) }
    );
    verify_block(&block).unwrap();
}

#[test]
fn add_immediate_builds_the_expected_body() {
    // add r1, r2, #5 (no S), then an undecodable word.
    let mut bus = SimpleBus::new(0x3000);
    bus.load_words(0x1000, &[0xE282_1005, UNALLOCATED]);

    let block = translate(&bus, loc(0x1000));
    verify_block(&block).unwrap();

    let values: Vec<_> = block.iter().map(|(_, v)| v.kind().clone()).collect();
    assert_eq!(values.len(), 4);
    assert_eq!(values[0], MicroValueKind::GetGpr(ArmReg::R2));
    assert_eq!(values[1], MicroValueKind::ConstU32(5));
    match &values[2] {
        MicroValueKind::Inst {
            op, write_flags, ..
        } => {
            assert_eq!(*op, MicroOp::Add);
            assert_eq!(*write_flags, MicroArmFlags::empty());
        }
        other => panic!("expected Add, got {other:?}"),
    }
    match &values[3] {
        MicroValueKind::SetGpr { reg, .. } => assert_eq!(*reg, ArmReg::R1),
        other => panic!("expected SetGpr, got {other:?}"),
    }

    assert_eq!(
        *block.terminal(),
        MicroTerminal::Interpret { next: loc(0x1004) }
    );
}

#[test]
fn condition_mismatch_links_to_a_specialised_sibling() {
    // Block entered under EQ; the first instruction is addne.
    let mut bus = SimpleBus::new(0x3000);
    bus.load_words(0x1000, &[0x1282_1005]);

    let block = translate(&bus, loc_cond(0x1000, Cond::Eq));

    assert!(block.is_empty());
    assert_eq!(
        *block.terminal(),
        MicroTerminal::LinkBlock {
            next: loc_cond(0x1000, Cond::Ne)
        }
    );
    verify_block(&block).unwrap();
}

#[test]
fn al_block_also_specialises_on_conditional_instructions() {
    let mut bus = SimpleBus::new(0x3000);
    bus.load_words(0x1000, &[0x1282_1005]); // addne under an AL block

    let block = translate(&bus, loc(0x1000));

    assert!(block.is_empty());
    assert_eq!(
        *block.terminal(),
        MicroTerminal::LinkBlock {
            next: loc_cond(0x1000, Cond::Ne)
        }
    );
}

#[test]
fn register_writes_coalesce_to_one_store() {
    // add r1, r2, #1; add r1, r1, #1 -- only the final value reaches SetGpr.
    let mut bus = SimpleBus::new(0x3000);
    bus.load_words(0x1000, &[0xE282_1001, 0xE281_1001, UNALLOCATED]);

    let block = translate(&bus, loc(0x1000));
    verify_block(&block).unwrap();

    let stores: Vec<_> = block
        .iter()
        .filter_map(|(_, v)| match v.kind() {
            MicroValueKind::SetGpr { reg, arg } => Some((*reg, *arg)),
            _ => None,
        })
        .collect();
    assert_eq!(stores.len(), 1, "exactly one writeback store expected");
    let (reg, arg) = stores[0];
    assert_eq!(reg, ArmReg::R1);

    // The stored value is the second Add, which consumes the first.
    let adds: Vec<_> = block
        .iter()
        .filter(|(_, v)| v.op() == MicroOp::Add)
        .map(|(id, _)| id)
        .collect();
    assert_eq!(adds.len(), 2);
    assert_eq!(arg, adds[1]);
    assert_eq!(block.value(adds[1]).operand(0), adds[0]);
}

#[test]
fn branch_links_to_the_target_block() {
    // b +0 => branches to pc + 8.
    let mut bus = SimpleBus::new(0x3000);
    bus.load_words(0x1000, &[0xEA00_0000]);

    let block = translate(&bus, loc(0x1000));

    assert!(block.is_empty());
    assert_eq!(
        *block.terminal(),
        MicroTerminal::LinkBlock { next: loc(0x1008) }
    );
}

#[test]
fn backward_branch_sign_extends_imm24() {
    // 0x1AFFFFFE = bne -8: target = pc + 8 - 8 = pc.
    let mut bus = SimpleBus::new(0x3000);
    bus.load_words(0x1000, &[0x1AFF_FFFE]);

    let block = translate(&bus, loc_cond(0x1000, Cond::Ne));

    assert_eq!(
        *block.terminal(),
        MicroTerminal::LinkBlock {
            next: loc_cond(0x1000, Cond::Ne)
        }
    );
}

#[test]
fn page_boundary_stops_the_block() {
    // A lone add at 0x1FFC pushes the pc to 0x2000.
    let mut bus = SimpleBus::new(0x3000);
    bus.load_words(0x1FFC, &[0xE282_1005]);

    let block = translate(&bus, loc(0x1FFC));
    verify_block(&block).unwrap();

    assert_eq!(block.len(), 4); // GetGpr, Const, Add, SetGpr
    assert_eq!(
        *block.terminal(),
        MicroTerminal::LinkBlock { next: loc(0x2000) }
    );
}

#[test]
fn instruction_limit_stops_the_block() {
    let mut bus = SimpleBus::new(0x3000);
    bus.load_words(0x1000, &[0xE282_1001, 0xE281_1001, 0xE281_1001]);

    let block = translate_with_limits(&bus, loc(0x1000), TranslationLimits { max_insts: 1 });
    verify_block(&block).unwrap();

    assert_eq!(
        *block.terminal(),
        MicroTerminal::LinkBlock { next: loc(0x1004) }
    );
    // One translated add: read, const, add, writeback.
    assert_eq!(block.len(), 4);
}

#[test]
fn unimplemented_opcode_defers_to_interpreter() {
    // mul r0, r1, r2 decodes but has no micro-op expansion.
    let mut bus = SimpleBus::new(0x3000);
    bus.load_words(0x1000, &[0xE000_0291]);

    let block = translate(&bus, loc(0x1000));

    assert!(block.is_empty());
    assert_eq!(
        *block.terminal(),
        MicroTerminal::Interpret { next: loc(0x1000) }
    );
}

#[test]
fn fallback_midway_keeps_the_translated_prefix() {
    // One good add, then a mul that falls back: the add's IR survives and
    // the interpreter resumes at the mul.
    let mut bus = SimpleBus::new(0x3000);
    bus.load_words(0x1000, &[0xE282_1005, 0xE000_0291]);

    let block = translate(&bus, loc(0x1000));
    verify_block(&block).unwrap();

    assert_eq!(block.len(), 4);
    assert_eq!(
        *block.terminal(),
        MicroTerminal::Interpret { next: loc(0x1004) }
    );
}

#[test]
fn thumb_entry_defers_to_interpreter() {
    let bus = SimpleBus::new(0x3000);
    let location = armlet_jit::LocationDescriptor::new(0x1000, true, false, Cond::Al);

    let block = translate(&bus, location);

    assert!(block.is_empty());
    assert_eq!(
        *block.terminal(),
        MicroTerminal::Interpret { next: location }
    );
}
