//! A cycle-accurate software model of the original handheld game console
//! ("DMG"): CPU interpreter, memory-mapped bus with cartridge banking,
//! picture processing unit, timers, and interrupt controller.
//!
//! The windowing/rendering host, audio synthesis, link-cable serial, and
//! save-RAM persistence are out of scope; see [`frame::Emulator`] for the
//! single entry point a host embeds.

pub mod bits;
pub mod cartridge;
pub mod cpu;
pub mod error;
pub mod frame;
pub mod interrupts;
pub mod joypad;
pub mod mbc;
pub mod memory_map;
pub mod mmu;
pub mod ppu;
pub mod timers;
