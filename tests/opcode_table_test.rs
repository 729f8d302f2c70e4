//! Tests for the opcode descriptor table and its lookup surface.

use core6502::opcodes::{lookup, lookup_by_byte};
use core6502::{AddressingMode, Operation, OPCODE_TABLE};

#[test]
fn test_table_covers_all_documented_opcodes() {
    let documented = OPCODE_TABLE.iter().flatten().count();
    assert_eq!(documented, 151);
}

#[test]
fn test_every_descriptor_matches_its_index() {
    for (i, entry) in OPCODE_TABLE.iter().enumerate() {
        if let Some(opcode) = entry {
            assert_eq!(opcode.code as usize, i, "code mismatch at index 0x{:02X}", i);
        }
    }
}

#[test]
fn test_instruction_sizes_follow_addressing_mode() {
    for opcode in OPCODE_TABLE.iter().flatten() {
        let expected = match opcode.mode {
            AddressingMode::Implicit | AddressingMode::Accumulator => 1,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 2,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 3,
        };
        assert_eq!(
            opcode.bytes, expected,
            "size mismatch for opcode 0x{:02X}",
            opcode.code
        );
    }
}

#[test]
fn test_cycle_counts_within_documented_range() {
    for opcode in OPCODE_TABLE.iter().flatten() {
        assert!(
            (2..=7).contains(&opcode.cycles),
            "opcode 0x{:02X} has base cycles {}",
            opcode.code,
            opcode.cycles
        );
    }
}

#[test]
fn test_lookup_by_byte_known_encodings() {
    let lda_imm = lookup_by_byte(0xA9).unwrap();
    assert_eq!(lda_imm.op, Operation::Lda);
    assert_eq!(lda_imm.mode, AddressingMode::Immediate);
    assert_eq!(lda_imm.cycles, 2);
    assert_eq!(lda_imm.bytes, 2);

    let brk = lookup_by_byte(0x00).unwrap();
    assert_eq!(brk.op, Operation::Brk);
    assert_eq!(brk.cycles, 7);
    assert_eq!(brk.bytes, 1);

    let jmp_ind = lookup_by_byte(0x6C).unwrap();
    assert_eq!(jmp_ind.op, Operation::Jmp);
    assert_eq!(jmp_ind.mode, AddressingMode::Indirect);
    assert_eq!(jmp_ind.cycles, 5);
}

#[test]
fn test_lookup_by_byte_rejects_undocumented() {
    for code in [0x02u8, 0x03, 0x04, 0x5F, 0x9F, 0xFF] {
        assert!(lookup_by_byte(code).is_none(), "0x{:02X} should be illegal", code);
    }
}

#[test]
fn test_lookup_by_pair_finds_encoding() {
    let sta_abs_x = lookup(Operation::Sta, AddressingMode::AbsoluteX).unwrap();
    assert_eq!(sta_abs_x.code, 0x9D);
    assert_eq!(sta_abs_x.cycles, 5); // stores pay the index cost up front

    let asl_acc = lookup(Operation::Asl, AddressingMode::Accumulator).unwrap();
    assert_eq!(asl_acc.code, 0x0A);
    assert_eq!(asl_acc.bytes, 1);
}

#[test]
fn test_lookup_by_pair_rejects_unsupported_combination() {
    assert!(lookup(Operation::Jmp, AddressingMode::Immediate).is_none());
    assert!(lookup(Operation::Sta, AddressingMode::Immediate).is_none());
    assert!(lookup(Operation::Ldx, AddressingMode::ZeroPageX).is_none());
    assert!(lookup(Operation::Brk, AddressingMode::Absolute).is_none());
}

#[test]
fn test_lookup_round_trips_every_descriptor() {
    for opcode in OPCODE_TABLE.iter().flatten() {
        let found = lookup(opcode.op, opcode.mode)
            .unwrap_or_else(|| panic!("no pair lookup for 0x{:02X}", opcode.code));
        assert_eq!(found.code, opcode.code);
    }
}

#[test]
fn test_mode_coverage_per_operation() {
    // LDA supports 8 modes, the widest coverage of the loads
    let lda_modes = OPCODE_TABLE
        .iter()
        .flatten()
        .filter(|o| o.op == Operation::Lda)
        .count();
    assert_eq!(lda_modes, 8);

    // STX is narrow: ZeroPage, ZeroPageY, Absolute
    let stx_modes = OPCODE_TABLE
        .iter()
        .flatten()
        .filter(|o| o.op == Operation::Stx)
        .count();
    assert_eq!(stx_modes, 3);

    // Branches are Relative-only
    for op in [Operation::Bcc, Operation::Beq, Operation::Bmi, Operation::Bvs] {
        let encodings: Vec<_> = OPCODE_TABLE
            .iter()
            .flatten()
            .filter(|o| o.op == op)
            .collect();
        assert_eq!(encodings.len(), 1);
        assert_eq!(encodings[0].mode, AddressingMode::Relative);
    }
}
