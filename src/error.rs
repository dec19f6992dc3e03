//! Error taxonomy for the emulation core.
//!
//! Internal normalizations (gated reads, dropped writes, bank clamps) never
//! surface here — they are encoded directly in the MMU's behavior. Only the
//! two externally observable failure kinds get a variant.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmuError {
    #[error("unrecognized opcode {opcode:#04X} at PC={pc:#06X}")]
    DecodeUnknown { pc: u16, opcode: u8 },

    #[error("failed to load cartridge: {0}")]
    RomLoad(String),
}
