//! The shared 64 KiB bus: cartridge banking, RAM regions, and the
//! access-gating contract the CPU, PPU, and timers all rely on.

use crate::cartridge::Cartridge;
use crate::joypad::Joypad;
use crate::mbc::MbcType;
use crate::memory_map::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AccessGate {
    Open,
    VramBlocked,
    OamBlocked,
    BothBlocked,
}

impl AccessGate {
    fn blocks_vram(self) -> bool {
        matches!(self, AccessGate::VramBlocked | AccessGate::BothBlocked)
    }
    fn blocks_oam(self) -> bool {
        matches!(self, AccessGate::OamBlocked | AccessGate::BothBlocked)
    }
}

pub struct Mmu {
    vram: Box<[u8; VRAM_SIZE]>,
    wram: Box<[u8; WRAM_SIZE]>,
    oam: Box<[u8; OAM_SIZE]>,
    io: Box<[u8; IO_SIZE]>,
    hram: Box<[u8; HRAM_SIZE]>,
    ie: u8,

    cartridge: Option<Cartridge>,
    ext_ram: Vec<u8>,
    ram_enabled: bool,
    rom_bank: usize,

    pub joypad: Joypad,
    gate: AccessGate,
}

impl Mmu {
    pub fn new() -> Self {
        let mut io = [0u8; IO_SIZE];
        io[(IF_ADDR - IO_START) as usize] = 0xE1;
        io[(LCDC_ADDR - IO_START) as usize] = 0x91;
        io[(STAT_ADDR - IO_START) as usize] = 0x85;
        io[(BGP_ADDR - IO_START) as usize] = 0xFC;
        io[(OBP0_ADDR - IO_START) as usize] = 0xFF;
        io[(OBP1_ADDR - IO_START) as usize] = 0xFF;
        io[(DIV_ADDR - IO_START) as usize] = 0xAC;

        Mmu {
            vram: Box::new([0; VRAM_SIZE]),
            wram: Box::new([0; WRAM_SIZE]),
            oam: Box::new([0; OAM_SIZE]),
            io: Box::new(io),
            hram: Box::new([0; HRAM_SIZE]),
            ie: 0x00,
            cartridge: None,
            ext_ram: Vec::new(),
            ram_enabled: false,
            rom_bank: 1,
            joypad: Joypad::new(),
            gate: AccessGate::Open,
        }
    }

    pub fn load_cartridge(&mut self, cartridge: Cartridge) {
        self.ext_ram = vec![0; cartridge.ram_size()];
        self.rom_bank = 1;
        self.cartridge = Some(cartridge);
    }

    pub fn cartridge(&self) -> Option<&Cartridge> {
        self.cartridge.as_ref()
    }

    // --- Access gating, driven by the PPU mode machine ---
    pub fn set_vram_gate(&mut self, blocked: bool) {
        self.gate = match (blocked, self.gate.blocks_oam()) {
            (true, true) => AccessGate::BothBlocked,
            (true, false) => AccessGate::VramBlocked,
            (false, true) => AccessGate::OamBlocked,
            (false, false) => AccessGate::Open,
        };
    }

    pub fn set_oam_gate(&mut self, blocked: bool) {
        self.gate = match (self.gate.blocks_vram(), blocked) {
            (true, true) => AccessGate::BothBlocked,
            (true, false) => AccessGate::VramBlocked,
            (false, true) => AccessGate::OamBlocked,
            (false, false) => AccessGate::Open,
        };
    }

    /// The normal CPU-facing read contract (§4.1): gating, bank switching,
    /// unusable-region normalization.
    pub fn read_byte(&self, addr: u16) -> u8 {
        match addr {
            VRAM_START..=VRAM_END if self.gate.blocks_vram() => 0xFF,
            OAM_START..=OAM_END if self.gate.blocks_oam() => 0xFF,
            ROM_BANK_0_START..=ROM_BANK_0_END => self
                .cartridge
                .as_ref()
                .map(|c| c.read(0, addr as usize))
                .unwrap_or(0xFF),
            ROM_BANK_N_START..=ROM_BANK_N_END => self
                .cartridge
                .as_ref()
                .map(|c| c.read(self.rom_bank, (addr - ROM_BANK_N_START) as usize))
                .unwrap_or(0xFF),
            VRAM_START..=VRAM_END => self.vram[(addr - VRAM_START) as usize],
            EXT_RAM_START..=EXT_RAM_END => {
                if self.ram_enabled {
                    self.ext_ram[(addr - EXT_RAM_START) as usize % self.ext_ram.len().max(1)]
                } else {
                    0xFF
                }
            }
            WRAM_START..=WRAM_END => self.wram[(addr - WRAM_START) as usize],
            ECHO_START..=ECHO_END => self.wram[(addr - ECHO_START) as usize],
            OAM_START..=OAM_END => self.oam[(addr - OAM_START) as usize],
            UNUSABLE_START..=UNUSABLE_END => 0xFF,
            P1_JOYP_ADDR => self.joypad.read_p1(),
            IO_START..=IO_END => self.io[(addr - IO_START) as usize],
            HRAM_START..=HRAM_END => self.hram[(addr - HRAM_START) as usize],
            INTERRUPT_ENABLE_REGISTER => self.ie,
        }
    }

    /// The normal CPU-facing write contract (§4.1): MBC control decode,
    /// ECHO/unusable drop, DIV/LY write-resets.
    pub fn write_byte(&mut self, addr: u16, value: u8) {
        match addr {
            VRAM_START..=VRAM_END if self.gate.blocks_vram() => {}
            OAM_START..=OAM_END if self.gate.blocks_oam() => {}
            ROM_BANK_0_START..=0x1FFF => {
                self.ram_enabled = (value & 0x0F) == 0x0A;
            }
            0x2000..=0x3FFF => {
                let mbc = self.cartridge.as_ref().map(|c| c.mbc_type());
                if matches!(mbc, Some(MbcType::Mbc1) | Some(MbcType::Mbc2)) {
                    let requested = (value & 0x1F) as usize;
                    let bank = if requested == 0 { 1 } else { requested };
                    let count = self.cartridge.as_ref().map(|c| c.rom_bank_count()).unwrap_or(2);
                    self.rom_bank = bank % count.max(1);
                }
            }
            0x4000..=ROM_BANK_N_END => {
                // Upper ROM/RAM bank select region: accepted, not wired into
                // banking (this core only models the 32 KiB single window).
            }
            VRAM_START..=VRAM_END => self.vram[(addr - VRAM_START) as usize] = value,
            EXT_RAM_START..=EXT_RAM_END => {
                if self.ram_enabled && !self.ext_ram.is_empty() {
                    let len = self.ext_ram.len();
                    self.ext_ram[(addr - EXT_RAM_START) as usize % len] = value;
                }
            }
            WRAM_START..=WRAM_END => self.wram[(addr - WRAM_START) as usize] = value,
            ECHO_START..=ECHO_END => {} // dropped, not mirrored
            OAM_START..=OAM_END => self.oam[(addr - OAM_START) as usize] = value,
            UNUSABLE_START..=UNUSABLE_END => {}
            DIV_ADDR => self.io[(DIV_ADDR - IO_START) as usize] = 0,
            LY_ADDR => self.io[(LY_ADDR - IO_START) as usize] = 0,
            P1_JOYP_ADDR => self.joypad.write_p1(value),
            IO_START..=IO_END => self.io[(addr - IO_START) as usize] = value,
            HRAM_START..=HRAM_END => self.hram[(addr - HRAM_START) as usize] = value,
            INTERRUPT_ENABLE_REGISTER => self.ie = value,
        }
    }

    /// Bypasses gating and the DIV/LY write-reset rule; used by the PPU,
    /// timers, and interrupt controller to poke their own registers.
    pub fn read_io_raw(&self, addr: u16) -> u8 {
        match addr {
            INTERRUPT_ENABLE_REGISTER => self.ie,
            IO_START..=IO_END => self.io[(addr - IO_START) as usize],
            _ => self.read_byte(addr),
        }
    }

    pub fn write_io_raw(&mut self, addr: u16, value: u8) {
        match addr {
            INTERRUPT_ENABLE_REGISTER => self.ie = value,
            IO_START..=IO_END => self.io[(addr - IO_START) as usize] = value,
            _ => self.write_byte(addr, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echo_writes_are_dropped_not_mirrored() {
        let mut mmu = Mmu::new();
        mmu.write_byte(0xC010, 0x42);
        mmu.write_byte(0xE010, 0x99);
        assert_eq!(mmu.read_byte(0xC010), 0x42);
    }

    #[test]
    fn unusable_region_reads_ff_and_drops_writes() {
        let mut mmu = Mmu::new();
        mmu.write_byte(0xFEB0, 0x55);
        assert_eq!(mmu.read_byte(0xFEB0), 0xFF);
    }

    #[test]
    fn writing_div_or_ly_resets_to_zero() {
        let mut mmu = Mmu::new();
        mmu.write_io_raw(DIV_ADDR, 0x77);
        mmu.write_byte(DIV_ADDR, 0x99);
        assert_eq!(mmu.read_byte(DIV_ADDR), 0);
        mmu.write_io_raw(LY_ADDR, 90);
        mmu.write_byte(LY_ADDR, 5);
        assert_eq!(mmu.read_byte(LY_ADDR), 0);
    }

    #[test]
    fn vram_gate_forces_ff_reads_and_drops_writes() {
        let mut mmu = Mmu::new();
        mmu.write_byte(0x8000, 0x11);
        mmu.set_vram_gate(true);
        assert_eq!(mmu.read_byte(0x8000), 0xFF);
        mmu.write_byte(0x8000, 0x22);
        mmu.set_vram_gate(false);
        assert_eq!(mmu.read_byte(0x8000), 0x11);
    }

    #[test]
    fn rom_bank_0_is_immutable_through_writes() {
        let mut mmu = Mmu::new();
        let rom = vec![0u8; 0x8000];
        mmu.load_cartridge(Cartridge::load(rom).unwrap());
        let before = mmu.read_byte(0x0000);
        mmu.write_byte(0x0000, 0xFF); // interpreted as MBC control, not a store
        assert_eq!(mmu.read_byte(0x0000), before);
    }
}
