//! Comprehensive tests for the LDA (Load Accumulator) instruction.
//!
//! Tests cover:
//! - All 8 addressing modes
//! - Flag updates (Z, N)
//! - Zero-page and pointer wraparound
//! - Cycle counts including page crossing penalties

use core6502::{Cpu, FlatMemory, MemoryBus};

/// Helper function to create a CPU reset to 0x8000
fn setup_cpu() -> Cpu<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    let mut cpu = Cpu::new(memory);
    cpu.step().unwrap(); // reset sequence
    cpu
}

// ========== Basic Operation and Flags ==========

#[test]
fn test_lda_immediate_basic() {
    let mut cpu = setup_cpu();

    // LDA #$42
    cpu.memory_mut().write(0x8000, 0xA9);
    cpu.memory_mut().write(0x8001, 0x42);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x42);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cycles, 2);
}

#[test]
fn test_lda_zero_flag() {
    let mut cpu = setup_cpu();

    // LDA #$00
    cpu.memory_mut().write(0x8000, 0xA9);
    cpu.memory_mut().write(0x8001, 0x00);
    cpu.set_a(0xFF);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_lda_negative_flag() {
    let mut cpu = setup_cpu();

    // LDA #$80
    cpu.memory_mut().write(0x8000, 0xA9);
    cpu.memory_mut().write(0x8001, 0x80);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_lda_clears_stale_flags() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0xA9);
    cpu.memory_mut().write(0x8001, 0x7F);
    cpu.set_flag_n(true);
    cpu.set_flag_z(true);

    cpu.step().unwrap();

    assert!(!cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_lda_preserves_unrelated_flags() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x8000, 0xA9);
    cpu.memory_mut().write(0x8001, 0x42);
    cpu.set_flag_c(true);
    cpu.set_flag_v(true);
    cpu.set_flag_d(true);

    cpu.step().unwrap();

    assert!(cpu.flag_c());
    assert!(cpu.flag_v());
    assert!(cpu.flag_d());
}

// ========== Addressing Modes ==========

#[test]
fn test_lda_zero_page() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x0080, 0x37);
    // LDA $80
    cpu.memory_mut().write(0x8000, 0xA5);
    cpu.memory_mut().write(0x8001, 0x80);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x37);
    assert_eq!(cycles, 3);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_lda_zero_page_x() {
    let mut cpu = setup_cpu();

    cpu.set_x(0x0F);
    cpu.memory_mut().write(0x008F, 0x55);
    // LDA $80,X
    cpu.memory_mut().write(0x8000, 0xB5);
    cpu.memory_mut().write(0x8001, 0x80);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x55);
    assert_eq!(cycles, 4);
}

#[test]
fn test_lda_zero_page_x_wraps_within_zero_page() {
    let mut cpu = setup_cpu();

    cpu.set_x(0x10);
    // 0xF8 + 0x10 wraps to 0x08, never reaching 0x0108
    cpu.memory_mut().write(0x0008, 0xAA);
    cpu.memory_mut().write(0x0108, 0xBB);
    cpu.memory_mut().write(0x8000, 0xB5);
    cpu.memory_mut().write(0x8001, 0xF8);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xAA);
}

#[test]
fn test_lda_absolute() {
    let mut cpu = setup_cpu();

    cpu.memory_mut().write(0x1234, 0x99);
    // LDA $1234
    cpu.memory_mut().write(0x8000, 0xAD);
    cpu.memory_mut().write(0x8001, 0x34);
    cpu.memory_mut().write(0x8002, 0x12);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x99);
    assert_eq!(cycles, 4);
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_lda_absolute_x_no_page_cross() {
    let mut cpu = setup_cpu();

    cpu.set_x(0x05);
    cpu.memory_mut().write(0x1239, 0x11);
    // LDA $1234,X
    cpu.memory_mut().write(0x8000, 0xBD);
    cpu.memory_mut().write(0x8001, 0x34);
    cpu.memory_mut().write(0x8002, 0x12);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x11);
    assert_eq!(cycles, 4);
}

#[test]
fn test_lda_absolute_x_page_cross_costs_extra_cycle() {
    let mut cpu = setup_cpu();

    cpu.set_x(0x10);
    // 0x12FA + 0x10 = 0x130A crosses from page 0x12 to 0x13
    cpu.memory_mut().write(0x130A, 0x22);
    cpu.memory_mut().write(0x8000, 0xBD);
    cpu.memory_mut().write(0x8001, 0xFA);
    cpu.memory_mut().write(0x8002, 0x12);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x22);
    assert_eq!(cycles, 5);
}

#[test]
fn test_lda_absolute_y_page_cross_scenario() {
    let mut cpu = setup_cpu();

    // Base 0x04FA + Y=0x10 crosses into page 0x05
    cpu.set_y(0x10);
    cpu.memory_mut().write(0x050A, 0x33);
    // LDA $04FA,Y
    cpu.memory_mut().write(0x8000, 0xB9);
    cpu.memory_mut().write(0x8001, 0xFA);
    cpu.memory_mut().write(0x8002, 0x04);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x33);
    assert_eq!(cycles, 5); // 4 base + 1 page cross
}

#[test]
fn test_lda_indirect_x() {
    let mut cpu = setup_cpu();

    cpu.set_x(0x04);
    // Pointer at 0x40 + X = 0x44 holds 0x2010
    cpu.memory_mut().write(0x0044, 0x10);
    cpu.memory_mut().write(0x0045, 0x20);
    cpu.memory_mut().write(0x2010, 0x77);
    // LDA ($40,X)
    cpu.memory_mut().write(0x8000, 0xA1);
    cpu.memory_mut().write(0x8001, 0x40);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x77);
    assert_eq!(cycles, 6);
}

#[test]
fn test_lda_indirect_x_pointer_wraps_in_zero_page() {
    let mut cpu = setup_cpu();

    cpu.set_x(0x05);
    // 0xFE + 0x05 wraps to 0x03; pointer bytes at 0x03/0x04
    cpu.memory_mut().write(0x0003, 0x00);
    cpu.memory_mut().write(0x0004, 0x30);
    cpu.memory_mut().write(0x3000, 0x88);
    cpu.memory_mut().write(0x8000, 0xA1);
    cpu.memory_mut().write(0x8001, 0xFE);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x88);
}

#[test]
fn test_lda_indirect_x_high_byte_wraps_at_ff() {
    let mut cpu = setup_cpu();

    cpu.set_x(0x00);
    // Pointer at 0xFF: low byte from 0x00FF, high byte wraps to 0x0000
    cpu.memory_mut().write(0x00FF, 0x34);
    cpu.memory_mut().write(0x0000, 0x12);
    cpu.memory_mut().write(0x1234, 0x99);
    cpu.memory_mut().write(0x8000, 0xA1);
    cpu.memory_mut().write(0x8001, 0xFF);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x99);
}

#[test]
fn test_lda_indirect_y_no_page_cross() {
    let mut cpu = setup_cpu();

    cpu.set_y(0x04);
    cpu.memory_mut().write(0x0040, 0x10);
    cpu.memory_mut().write(0x0041, 0x20);
    cpu.memory_mut().write(0x2014, 0x66);
    // LDA ($40),Y
    cpu.memory_mut().write(0x8000, 0xB1);
    cpu.memory_mut().write(0x8001, 0x40);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x66);
    assert_eq!(cycles, 5);
}

#[test]
fn test_lda_indirect_y_page_cross_costs_extra_cycle() {
    let mut cpu = setup_cpu();

    cpu.set_y(0x10);
    // Base 0x20FA + 0x10 = 0x210A crosses a page
    cpu.memory_mut().write(0x0040, 0xFA);
    cpu.memory_mut().write(0x0041, 0x20);
    cpu.memory_mut().write(0x210A, 0x44);
    cpu.memory_mut().write(0x8000, 0xB1);
    cpu.memory_mut().write(0x8001, 0x40);

    let cycles = cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x44);
    assert_eq!(cycles, 6);
}

#[test]
fn test_lda_indirect_y_pointer_high_byte_wraps() {
    let mut cpu = setup_cpu();

    cpu.set_y(0x00);
    // Pointer 0xFF: low from 0x00FF, high wraps to 0x0000
    cpu.memory_mut().write(0x00FF, 0x00);
    cpu.memory_mut().write(0x0000, 0x40);
    cpu.memory_mut().write(0x4000, 0x5A);
    cpu.memory_mut().write(0x8000, 0xB1);
    cpu.memory_mut().write(0x8001, 0xFF);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x5A);
}
