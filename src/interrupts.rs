//! Interrupt request/priority arbitration over the IF/IE register pair.
//!
//! The controller performs no dispatch itself — it is a stateless view over
//! bytes living in the MMU. The frame driver polls `next_pending` and asks
//! the CPU to service whatever comes back.

use crate::bits::{reset_bit, set_bit, test_bit};
use crate::memory_map::{
    IF_ADDR, INTERRUPT_ENABLE_REGISTER, JOYPAD_INTERRUPT_BIT, LCD_STAT_INTERRUPT_BIT,
    SERIAL_INTERRUPT_BIT, TIMER_INTERRUPT_BIT, VBLANK_INTERRUPT_BIT,
};
use crate::mmu::Mmu;

/// An interrupt source, in descending priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    VBlank,
    LcdStat,
    Timer,
    Serial,
    Joypad,
}

impl Source {
    pub fn bit(self) -> u8 {
        match self {
            Source::VBlank => VBLANK_INTERRUPT_BIT,
            Source::LcdStat => LCD_STAT_INTERRUPT_BIT,
            Source::Timer => TIMER_INTERRUPT_BIT,
            Source::Serial => SERIAL_INTERRUPT_BIT,
            Source::Joypad => JOYPAD_INTERRUPT_BIT,
        }
    }

    pub fn vector(self) -> u16 {
        match self {
            Source::VBlank => 0x0040,
            Source::LcdStat => 0x0048,
            Source::Timer => 0x0050,
            Source::Serial => 0x0058,
            Source::Joypad => 0x0060,
        }
    }

    const PRIORITY: [Source; 5] = [
        Source::VBlank,
        Source::LcdStat,
        Source::Timer,
        Source::Serial,
        Source::Joypad,
    ];
}

pub struct InterruptController;

impl InterruptController {
    pub fn request(mmu: &mut Mmu, source: Source) {
        let current = mmu.read_io_raw(IF_ADDR);
        mmu.write_io_raw(IF_ADDR, set_bit(current, source.bit()));
    }

    /// Returns the highest-priority source whose IF and IE bits are both set.
    pub fn next_pending(mmu: &Mmu) -> Option<Source> {
        let iflags = mmu.read_io_raw(IF_ADDR);
        let ie = mmu.read_io_raw(INTERRUPT_ENABLE_REGISTER);
        Source::PRIORITY
            .into_iter()
            .find(|source| test_bit(iflags, source.bit()) && test_bit(ie, source.bit()))
    }

    pub fn clear(mmu: &mut Mmu, source: Source) {
        let current = mmu.read_io_raw(IF_ADDR);
        mmu.write_io_raw(IF_ADDR, reset_bit(current, source.bit()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mmu::Mmu;

    #[test]
    fn priority_favors_vblank_over_timer() {
        let mut mmu = Mmu::new();
        mmu.write_io_raw(INTERRUPT_ENABLE_REGISTER, 0xFF);
        InterruptController::request(&mut mmu, Source::Timer);
        InterruptController::request(&mut mmu, Source::VBlank);
        assert_eq!(InterruptController::next_pending(&mmu), Some(Source::VBlank));
    }

    #[test]
    fn disabled_source_never_pends() {
        let mut mmu = Mmu::new();
        mmu.write_io_raw(INTERRUPT_ENABLE_REGISTER, 0x00);
        InterruptController::request(&mut mmu, Source::VBlank);
        assert_eq!(InterruptController::next_pending(&mmu), None);
    }

    #[test]
    fn clear_drops_the_bit() {
        let mut mmu = Mmu::new();
        mmu.write_io_raw(INTERRUPT_ENABLE_REGISTER, 0xFF);
        InterruptController::request(&mut mmu, Source::Joypad);
        InterruptController::clear(&mut mmu, Source::Joypad);
        assert_eq!(InterruptController::next_pending(&mmu), None);
    }
}
