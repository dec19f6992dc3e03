//! DIV/TIMA/TMA/TAC: the cycle-accumulator timer block.

use crate::interrupts::{InterruptController, Source};
use crate::memory_map::{DIV_ADDR, TAC_ADDR, TIMA_ADDR, TMA_ADDR};
use crate::mmu::Mmu;

const DIV_PERIOD: u32 = 256;

fn tima_period(tac: u8) -> u32 {
    match tac & 0x03 {
        0b00 => 1024,
        0b01 => 16,
        0b10 => 64,
        0b11 => 256,
        _ => unreachable!(),
    }
}

/// Tracks the sub-register cycle counters that drive DIV and TIMA.
/// DIV/TIMA themselves live in the MMU's I/O block; this struct only holds
/// the fractional cycle budgets between increments.
pub struct Timers {
    div_counter: u32,
    tima_counter: u32,
}

impl Timers {
    pub fn new() -> Self {
        Timers {
            div_counter: 0,
            tima_counter: 0,
        }
    }

    /// Advances the timer block by `cycles` T-cycles, incrementing DIV/TIMA
    /// and requesting a Timer interrupt on TIMA overflow.
    pub fn step(&mut self, cycles: u32, mmu: &mut Mmu) {
        self.div_counter += cycles;
        while self.div_counter >= DIV_PERIOD {
            self.div_counter -= DIV_PERIOD;
            let div = mmu.read_io_raw(DIV_ADDR);
            mmu.write_io_raw(DIV_ADDR, div.wrapping_add(1));
        }

        let tac = mmu.read_io_raw(TAC_ADDR);
        if tac & 0x04 == 0 {
            return;
        }

        let period = tima_period(tac);
        self.tima_counter += cycles;
        while self.tima_counter >= period {
            self.tima_counter -= period;
            let tima = mmu.read_io_raw(TIMA_ADDR);
            if tima == 0xFF {
                let tma = mmu.read_io_raw(TMA_ADDR);
                mmu.write_io_raw(TIMA_ADDR, tma);
                InterruptController::request(mmu, Source::Timer);
            } else {
                mmu.write_io_raw(TIMA_ADDR, tima + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_map::IF_ADDR;

    #[test]
    fn div_increments_every_256_cycles() {
        let mut mmu = Mmu::new();
        mmu.write_io_raw(DIV_ADDR, 0);
        let mut timers = Timers::new();
        timers.step(256, &mut mmu);
        assert_eq!(mmu.read_io_raw(DIV_ADDR), 1);
    }

    #[test]
    fn tima_disabled_by_default_tac_bit() {
        let mut mmu = Mmu::new();
        mmu.write_io_raw(TAC_ADDR, 0x00);
        mmu.write_io_raw(TIMA_ADDR, 0);
        let mut timers = Timers::new();
        timers.step(10_000, &mut mmu);
        assert_eq!(mmu.read_io_raw(TIMA_ADDR), 0);
    }

    #[test]
    fn tima_overflow_reloads_from_tma_and_requests_interrupt() {
        let mut mmu = Mmu::new();
        mmu.write_io_raw(TAC_ADDR, 0b101); // enabled, period 16
        mmu.write_io_raw(TMA_ADDR, 0x42);
        mmu.write_io_raw(TIMA_ADDR, 0xFF);
        mmu.write_io_raw(IF_ADDR, 0);
        let mut timers = Timers::new();
        timers.step(16, &mut mmu);
        assert_eq!(mmu.read_io_raw(TIMA_ADDR), 0x42);
        assert_eq!(mmu.read_io_raw(IF_ADDR) & (1 << Source::Timer.bit()), 1 << Source::Timer.bit());
    }
}
