//! Cartridge image parsing: header fields, bank count, and raw byte access.

use crate::error::EmuError;
use crate::mbc::MbcType;
use crate::memory_map::ROM_BANK_N_SIZE;

const HEADER_TITLE_START: usize = 0x134;
const HEADER_TITLE_END: usize = 0x143;
const HEADER_MBC_TYPE: usize = 0x147;
const HEADER_ROM_SIZE: usize = 0x148;
const HEADER_RAM_SIZE: usize = 0x149;
const HEADER_END: usize = 0x150;

/// An immutable, fully parsed ROM image.
pub struct Cartridge {
    data: Vec<u8>,
    title: String,
    mbc_type: MbcType,
    rom_bank_count: usize,
    ram_size: usize,
}

impl Cartridge {
    pub fn load(rom_data: Vec<u8>) -> Result<Self, EmuError> {
        if rom_data.len() < HEADER_END {
            return Err(EmuError::RomLoad(format!(
                "image is {} bytes, too short to contain a header",
                rom_data.len()
            )));
        }

        let title = rom_data[HEADER_TITLE_START..HEADER_TITLE_END]
            .iter()
            .take_while(|&&b| b != 0)
            .map(|&b| b as char)
            .collect();

        let mbc_type = MbcType::from_header_byte(rom_data[HEADER_MBC_TYPE]);

        let rom_bank_count = match rom_data[HEADER_ROM_SIZE] {
            code @ 0x00..=0x08 => 2usize << code,
            0x52 => 72,
            0x53 => 80,
            0x54 => 96,
            other => {
                return Err(EmuError::RomLoad(format!(
                    "unrecognized ROM size code {other:#04X}"
                )));
            }
        };

        let ram_size = match rom_data[HEADER_RAM_SIZE] {
            0x00 => 0,
            0x01 => 2 * 1024,
            0x02 => 8 * 1024,
            0x03 => 32 * 1024,
            0x04 => 128 * 1024,
            0x05 => 64 * 1024,
            other => {
                return Err(EmuError::RomLoad(format!(
                    "unrecognized RAM size code {other:#04X}"
                )));
            }
        };

        log::info!(
            "loaded cartridge \"{title}\": mbc={mbc_type:?}, {rom_bank_count} ROM banks, {ram_size} bytes external RAM"
        );

        Ok(Cartridge {
            data: rom_data,
            title,
            mbc_type,
            rom_bank_count,
            ram_size,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn mbc_type(&self) -> MbcType {
        self.mbc_type
    }

    pub fn rom_bank_count(&self) -> usize {
        self.rom_bank_count
    }

    pub fn ram_size(&self) -> usize {
        self.ram_size
    }

    /// Byte at a bank-relative offset into the full image (bank 0 covers
    /// 0x0000..0x4000, bank N covers `bank * 0x4000 .. bank * 0x4000 + 0x4000`).
    pub fn read(&self, bank: usize, offset_in_bank: usize) -> u8 {
        let index = bank * ROM_BANK_N_SIZE + offset_in_bank;
        self.data.get(index).copied().unwrap_or(0xFF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rom_with(mbc_byte: u8, size_byte: u8) -> Vec<u8> {
        rom_with_ram(mbc_byte, size_byte, 0x00)
    }

    fn rom_with_ram(mbc_byte: u8, size_byte: u8, ram_byte: u8) -> Vec<u8> {
        let mut rom = vec![0u8; 0x8000];
        rom[HEADER_MBC_TYPE] = mbc_byte;
        rom[HEADER_ROM_SIZE] = size_byte;
        rom[HEADER_RAM_SIZE] = ram_byte;
        rom
    }

    #[test]
    fn rejects_undersized_image() {
        let err = Cartridge::load(vec![0u8; 16]);
        assert!(err.is_err());
    }

    #[test]
    fn parses_mbc_type_and_bank_count() {
        let cart = Cartridge::load(rom_with(0x01, 0x01)).unwrap();
        assert_eq!(cart.mbc_type(), MbcType::Mbc1);
        assert_eq!(cart.rom_bank_count(), 4);
    }

    #[test]
    fn rejects_unknown_size_code() {
        let err = Cartridge::load(rom_with(0x00, 0xFF));
        assert!(err.is_err());
    }

    #[test]
    fn defaults_to_no_ram_when_header_says_none() {
        let cart = Cartridge::load(rom_with(0x00, 0x00)).unwrap();
        assert_eq!(cart.ram_size(), 0);
    }

    #[test]
    fn parses_32kb_ram_size_code() {
        let cart = Cartridge::load(rom_with_ram(0x03, 0x00, 0x03)).unwrap();
        assert_eq!(cart.ram_size(), 32 * 1024);
    }

    #[test]
    fn rejects_unknown_ram_size_code() {
        let err = Cartridge::load(rom_with_ram(0x00, 0x00, 0xFF));
        assert!(err.is_err());
    }
}
