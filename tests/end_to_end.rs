//! End-to-end scenarios exercised against hand-assembled ROM images rather
//! than real cartridge fixtures — each one pins down a cross-module
//! invariant (jump targets, ALU flags, timer/PPU interrupt timing, stack
//! discipline) that no single unit test can see end to end.

use dmg_core::cpu::Cpu;
use dmg_core::interrupts::{InterruptController, Source};
use dmg_core::memory_map::{IF_ADDR, INTERRUPT_ENABLE_REGISTER, LCDC_ADDR, LY_ADDR, TAC_ADDR, TIMA_ADDR, TMA_ADDR};
use dmg_core::mmu::Mmu;
use dmg_core::ppu::Ppu;
use dmg_core::timers::Timers;

/// `Cpu::new(true)` already starts at PC 0x0100 with SP 0xFFFE, the
/// post-boot-ROM reset values — exactly where a real cartridge resumes.
fn cpu_with_program(mmu: &mut Mmu, program: &[u8]) -> Cpu {
    for (offset, byte) in program.iter().enumerate() {
        mmu.write_byte(0x0100u16.wrapping_add(offset as u16), *byte);
    }
    Cpu::new(true)
}

#[test]
fn unconditional_jump_lands_on_target() {
    let mut mmu = Mmu::new();
    let mut cpu = cpu_with_program(&mut mmu, &[0x00, 0xC3, 0x50, 0x01]); // NOP; JP 0x0150

    let first = cpu.step(&mut mmu).unwrap();
    let second = cpu.step(&mut mmu).unwrap();

    assert_eq!(first, 4);
    assert_eq!(second, 16);
    assert_eq!(cpu.pc(), 0x0150);
}

#[test]
fn immediate_load_then_absolute_store_round_trips_through_memory() {
    let mut mmu = Mmu::new();
    // LD A, 0x42; LD (0xC000), A
    let mut cpu = cpu_with_program(&mut mmu, &[0x3E, 0x42, 0xEA, 0x00, 0xC0]);

    cpu.step(&mut mmu).unwrap();
    cpu.step(&mut mmu).unwrap();

    assert_eq!(cpu.registers().0, 0x42);
    assert_eq!(mmu.read_byte(0xC000), 0x42);
    assert_eq!(cpu.pc(), 0x0105);
}

#[test]
fn xor_a_with_itself_zeroes_the_accumulator_and_sets_only_zero_flag() {
    let mut mmu = Mmu::new();
    let mut cpu = cpu_with_program(&mut mmu, &[0xAF]); // XOR A

    cpu.step(&mut mmu).unwrap();

    let (a, f, ..) = cpu.registers();
    assert_eq!(a, 0);
    assert_eq!(f, 0x80);
}

#[test]
fn tima_overflow_after_a_thousand_and_twenty_four_cycles_reloads_and_requests_timer_interrupt() {
    let mut mmu = Mmu::new();
    mmu.write_io_raw(TAC_ADDR, 0x04); // enabled, period 1024
    mmu.write_io_raw(TIMA_ADDR, 0xFF);
    mmu.write_io_raw(TMA_ADDR, 0x20);
    mmu.write_io_raw(IF_ADDR, 0);
    mmu.write_io_raw(INTERRUPT_ENABLE_REGISTER, 0xFF);
    let mut timers = Timers::new();

    timers.step(1024, &mut mmu);

    assert_eq!(mmu.read_io_raw(TIMA_ADDR), 0x20);
    assert_eq!(InterruptController::next_pending(&mmu), Some(Source::Timer));
}

#[test]
fn a_full_scanline_past_line_143_enters_vblank_and_requests_the_vblank_interrupt() {
    let mut mmu = Mmu::new();
    mmu.write_byte(LCDC_ADDR, 0x91);
    mmu.write_io_raw(INTERRUPT_ENABLE_REGISTER, 0xFF);
    let mut ppu = Ppu::new();

    for _ in 0..143 {
        ppu.step(456, &mut mmu);
    }
    assert_eq!(mmu.read_byte(LY_ADDR), 143);

    ppu.step(456, &mut mmu);

    assert_eq!(mmu.read_byte(LY_ADDR), 144);
    assert_eq!(InterruptController::next_pending(&mmu), Some(Source::VBlank));
}

#[test]
fn push_af_then_pop_bc_copies_the_pair_and_masks_the_low_flag_nibble() {
    let mut mmu = Mmu::new();
    // LD SP, 0xDFFE; POP AF (loads AF = 0x1234); PUSH AF; POP BC
    let mut cpu = cpu_with_program(&mut mmu, &[0x31, 0xFE, 0xDF, 0xF1, 0xF5, 0xC1]);
    mmu.write_byte(0xDFFE, 0x34);
    mmu.write_byte(0xDFFF, 0x12);

    for _ in 0..4 {
        cpu.step(&mut mmu).unwrap();
    }

    let (_, _, b, c, ..) = cpu.registers();
    assert_eq!((b, c), (0x12, 0x30)); // F's low nibble is always zero
    assert_eq!(cpu.sp(), 0xE000);
}
