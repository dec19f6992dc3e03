use super::{Cpu, CpuResult, constants::*};
use crate::error::EmuError;
use crate::mmu::Mmu;

// --- Control Flow Implementations ---
//
// Conditional branches report whether the branch was taken; `Cpu::step`
// picks the instruction table's `cycles` (taken) or `alt_cycles` (untaken)
// entry from that result instead of folding a bonus into the return value.
impl Cpu {
    // NOP
    pub fn op_nop(&mut self, _mmu: &mut Mmu) -> CpuResult<bool> {
        Ok(true)
    }

    // JP a16 / JP HL / JP cc, a16
    fn conditional_jp_a16(&mut self, condition: bool, mmu: &Mmu) -> CpuResult<bool> {
        let addr = self.read_d16(mmu);
        if condition {
            self.pc = addr;
        }
        Ok(condition)
    }
    pub fn op_jp_a16(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.pc = self.read_d16(mmu);
        Ok(true)
    }
    pub fn op_jp_hl(&mut self, _mmu: &mut Mmu) -> CpuResult<bool> {
        self.pc = self.get_hl();
        Ok(true)
    }
    pub fn op_jp_nz_a16(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.conditional_jp_a16(!self.get_flag(FLAG_Z), mmu)
    }
    pub fn op_jp_z_a16(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.conditional_jp_a16(self.get_flag(FLAG_Z), mmu)
    }
    pub fn op_jp_nc_a16(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.conditional_jp_a16(!self.get_flag(FLAG_C), mmu)
    }
    pub fn op_jp_c_a16(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.conditional_jp_a16(self.get_flag(FLAG_C), mmu)
    }

    // JR r8 / JR cc, r8
    fn conditional_jr(&mut self, condition: bool, mmu: &Mmu) -> CpuResult<bool> {
        let offset = self.read_r8(mmu);
        if condition {
            self.pc = self.pc.wrapping_add(offset as i16 as u16);
        }
        Ok(condition)
    }
    pub fn op_jr_r8(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        let offset = self.read_r8(mmu);
        self.pc = self.pc.wrapping_add(offset as i16 as u16);
        Ok(true)
    }
    pub fn op_jr_nz_r8(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.conditional_jr(!self.get_flag(FLAG_Z), mmu)
    }
    pub fn op_jr_z_r8(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.conditional_jr(self.get_flag(FLAG_Z), mmu)
    }
    pub fn op_jr_nc_r8(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.conditional_jr(!self.get_flag(FLAG_C), mmu)
    }
    pub fn op_jr_c_r8(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.conditional_jr(self.get_flag(FLAG_C), mmu)
    }

    // CALL a16 / CALL cc, a16
    fn conditional_call_a16(&mut self, condition: bool, mmu: &mut Mmu) -> CpuResult<bool> {
        let addr = self.read_d16(mmu);
        if condition {
            self.push_word(self.pc, mmu); // Push address *after* CALL instruction
            self.pc = addr;
        }
        Ok(condition)
    }
    pub fn op_call_a16(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        let addr = self.read_d16(mmu);
        self.push_word(self.pc, mmu);
        self.pc = addr;
        Ok(true)
    }
    pub fn op_call_nz_a16(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.conditional_call_a16(!self.get_flag(FLAG_Z), mmu)
    }
    pub fn op_call_z_a16(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.conditional_call_a16(self.get_flag(FLAG_Z), mmu)
    }
    pub fn op_call_nc_a16(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.conditional_call_a16(!self.get_flag(FLAG_C), mmu)
    }
    pub fn op_call_c_a16(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.conditional_call_a16(self.get_flag(FLAG_C), mmu)
    }

    // RET / RET cc / RETI
    fn conditional_ret(&mut self, condition: bool, mmu: &mut Mmu) -> CpuResult<bool> {
        if condition {
            self.pc = self.pop_word(mmu);
        }
        Ok(condition)
    }
    pub fn op_ret(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.pc = self.pop_word(mmu);
        Ok(true)
    }
    pub fn op_ret_nz(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.conditional_ret(!self.get_flag(FLAG_Z), mmu)
    }
    pub fn op_ret_z(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.conditional_ret(self.get_flag(FLAG_Z), mmu)
    }
    pub fn op_ret_nc(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.conditional_ret(!self.get_flag(FLAG_C), mmu)
    }
    pub fn op_ret_c(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.conditional_ret(self.get_flag(FLAG_C), mmu)
    }
    pub fn op_reti(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.pc = self.pop_word(mmu);
        self.ime = true;
        self.ime_scheduled = false;
        Ok(true)
    }

    // RST n
    fn rst(&mut self, vector: u16, mmu: &mut Mmu) -> CpuResult<bool> {
        self.push_word(self.pc, mmu);
        self.pc = vector;
        Ok(true)
    }
    pub fn op_rst_00h(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.rst(0x0000, mmu)
    }
    pub fn op_rst_08h(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.rst(0x0008, mmu)
    }
    pub fn op_rst_10h(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.rst(0x0010, mmu)
    }
    pub fn op_rst_18h(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.rst(0x0018, mmu)
    }
    pub fn op_rst_20h(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.rst(0x0020, mmu)
    }
    pub fn op_rst_28h(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.rst(0x0028, mmu)
    }
    pub fn op_rst_30h(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.rst(0x0030, mmu)
    }
    pub fn op_rst_38h(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.rst(0x0038, mmu)
    }

    // Misc Control
    pub fn op_di(&mut self, _mmu: &mut Mmu) -> CpuResult<bool> {
        self.ime = false;
        self.ime_scheduled = false;
        Ok(true)
    }
    pub fn op_ei(&mut self, _mmu: &mut Mmu) -> CpuResult<bool> {
        self.ime_scheduled = true;
        Ok(true)
    }
    pub fn op_halt(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        let ie = mmu.read_byte(crate::memory_map::INTERRUPT_ENABLE_REGISTER);
        let iflags = mmu.read_byte(crate::memory_map::IF_ADDR);
        if !self.ime && (ie & iflags & 0x1F) != 0 {
            log::warn!(
                "HALT bug triggered at PC={:#06X}! IME=0, IE&IF={:02X}. Next instruction will execute.",
                self.instruction_pc,
                ie & iflags & 0x1F
            );
            // PC already incremented, effectively skipping the HALT cycle.
        } else {
            self.halted = true;
        }
        Ok(true)
    }
    pub fn op_stop(&mut self, _mmu: &mut Mmu) -> CpuResult<bool> {
        self.stop_requested = true;
        log::warn!(
            "STOP instruction encountered at PC={:#06X} (speed switching unmodeled)",
            self.instruction_pc
        );
        Ok(true)
    }

    // Flags
    pub fn op_scf(&mut self, _mmu: &mut Mmu) -> CpuResult<bool> {
        self.set_flag(FLAG_N | FLAG_H, false);
        self.set_flag(FLAG_C, true);
        Ok(true)
    }
    pub fn op_ccf(&mut self, _mmu: &mut Mmu) -> CpuResult<bool> {
        let current_c = self.get_flag(FLAG_C);
        self.set_flag(FLAG_N | FLAG_H, false);
        self.set_flag(FLAG_C, !current_c);
        Ok(true)
    }

    // Misc ALU/Data
    pub fn op_cpl(&mut self, _mmu: &mut Mmu) -> CpuResult<bool> {
        self.a = !self.a;
        self.set_flag(FLAG_N | FLAG_H, true);
        Ok(true)
    }
    pub fn op_daa(&mut self, _mmu: &mut Mmu) -> CpuResult<bool> {
        self.daa();
        Ok(true)
    }

    // --- Invalid Opcode Handler ---
    pub fn handle_invalid_opcode(&mut self, _mmu: &mut Mmu) -> CpuResult<bool> {
        Err(EmuError::DecodeUnknown {
            pc: self.instruction_pc,
            opcode: self.fetched_opcode,
        })
    }
}
