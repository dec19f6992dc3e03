use super::constants::*;

/// Timing and mode-machine state. `budget` counts DOWN from
/// [`SCANLINE_BUDGET`] to 0 over the course of a scanline; the thresholds
/// it crosses drive mode transitions (see `Ppu::step`).
#[derive(Debug, Clone)]
pub struct PpuState {
    pub(super) budget: u32,
    pub(super) current_scanline: u8,
    pub(super) ppu_mode: u8,
    pub(super) lyc_eq_ly: bool,
    pub(super) stat_interrupt_line: bool,
    pub(super) vblank_just_occurred: bool,
    pub(super) lcdc: u8,
    pub(super) stat: u8,
}

impl PpuState {
    pub fn new() -> Self {
        PpuState {
            budget: SCANLINE_BUDGET,
            current_scanline: 0,
            ppu_mode: OAM_SCAN_MODE,
            lyc_eq_ly: false,
            stat_interrupt_line: false,
            vblank_just_occurred: false,
            lcdc: 0x91,
            stat: 0x85,
        }
    }

    pub(super) fn reset_for_lcd_off(&mut self) {
        self.budget = SCANLINE_BUDGET;
        self.current_scanline = 0;
        self.ppu_mode = HBLANK_MODE;
        self.lyc_eq_ly = false;
        self.stat_interrupt_line = false;
    }

    pub fn mode(&self) -> u8 {
        self.ppu_mode
    }

    pub fn scanline(&self) -> u8 {
        self.current_scanline
    }
}
