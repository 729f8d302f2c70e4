//! Tests for the stack instructions PHA, PHP, PLA, and PLP, plus the
//! circular behaviour of the stack pointer within page one.

use core6502::{Cpu, FlatMemory, MemoryBus};

fn setup_cpu() -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    let mut cpu = Cpu::new(memory);
    cpu.step().unwrap();
    cpu
}

#[test]
fn test_pha_writes_below_0x0100_plus_sp() {
    let mut cpu = setup_cpu();

    cpu.set_a(0x42);
    cpu.set_sp(0xFD);
    cpu.memory_mut().write(0x8000, 0x48); // PHA

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x01FD), 0x42);
    assert_eq!(cpu.sp(), 0xFC);
    assert_eq!(cycles, 3);
}

#[test]
fn test_pla_restores_and_sets_flags() {
    let mut cpu = setup_cpu();

    cpu.set_a(0x80);
    cpu.memory_mut().write(0x8000, 0x48); // PHA
    cpu.memory_mut().write(0x8001, 0xA9); // LDA #$00
    cpu.memory_mut().write(0x8002, 0x00);
    cpu.memory_mut().write(0x8003, 0x68); // PLA

    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x00);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
    assert_eq!(cycles, 4);
}

#[test]
fn test_pla_zero_sets_zero_flag() {
    let mut cpu = setup_cpu();

    cpu.set_sp(0xFC);
    cpu.memory_mut().write(0x01FD, 0x00);
    cpu.memory_mut().write(0x8000, 0x68); // PLA

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_php_pushes_with_break_and_bit5_set() {
    let mut cpu = setup_cpu();

    cpu.set_flag_c(true);
    cpu.set_flag_z(true);
    cpu.memory_mut().write(0x8000, 0x08); // PHP

    let cycles = cpu.step().unwrap();

    let pushed = cpu.memory().read(0x0100 + cpu.sp().wrapping_add(1) as u16);
    assert_eq!(pushed & 0x30, 0x30); // Break and bit 5 both set in the image
    assert_eq!(pushed & 0x03, 0x03); // C and Z
    assert!(!cpu.flag_b()); // live register unaffected
    assert_eq!(cycles, 3);
}

#[test]
fn test_plp_ignores_break_and_bit5() {
    let mut cpu = setup_cpu();

    cpu.set_sp(0xFC);
    cpu.memory_mut().write(0x01FD, 0xFF);
    cpu.memory_mut().write(0x8000, 0x28); // PLP

    let cycles = cpu.step().unwrap();

    // All real flags set; Break clear; bit 5 reads back as 1
    assert_eq!(cpu.status(), 0xEF);
    assert!(!cpu.flag_b());
    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
    assert_eq!(cycles, 4);
}

#[test]
fn test_php_plp_round_trip() {
    let mut cpu = setup_cpu();

    cpu.set_flag_c(true);
    cpu.set_flag_v(true);
    cpu.set_flag_n(true);
    let before = cpu.status();
    cpu.memory_mut().write(0x8000, 0x08); // PHP
    cpu.memory_mut().write(0x8001, 0x28); // PLP

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.status(), before);
}

#[test]
fn test_stack_pointer_wraps_at_bottom_of_page_one() {
    let mut cpu = setup_cpu();

    // Push with SP at 0x00: the write lands at $0100 and SP wraps to 0xFF
    cpu.set_sp(0x00);
    cpu.set_a(0x99);
    cpu.memory_mut().write(0x8000, 0x48); // PHA

    cpu.step().unwrap();

    assert_eq!(cpu.memory().read(0x0100), 0x99);
    assert_eq!(cpu.sp(), 0xFF);
}

#[test]
fn test_stack_pointer_wraps_at_top_of_page_one() {
    let mut cpu = setup_cpu();

    // Pull with SP at 0xFF wraps to 0x00 and reads $0100
    cpu.set_sp(0xFF);
    cpu.memory_mut().write(0x0100, 0x7B);
    cpu.memory_mut().write(0x8000, 0x68); // PLA

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x7B);
    assert_eq!(cpu.sp(), 0x00);
}
