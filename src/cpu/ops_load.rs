use super::{Cpu, CpuResult, constants::*};
use crate::mmu::Mmu;

// --- 8-bit register-to-register loads ---
impl Cpu {
    ld_r_r!(op_ld_b_b, b, b);
    ld_r_r!(op_ld_b_c, b, c);
    ld_r_r!(op_ld_b_d, b, d);
    ld_r_r!(op_ld_b_e, b, e);
    ld_r_r!(op_ld_b_h, b, h);
    ld_r_r!(op_ld_b_l, b, l);
    ld_r_r!(op_ld_b_a, b, a);

    ld_r_r!(op_ld_c_b, c, b);
    ld_r_r!(op_ld_c_c, c, c);
    ld_r_r!(op_ld_c_d, c, d);
    ld_r_r!(op_ld_c_e, c, e);
    ld_r_r!(op_ld_c_h, c, h);
    ld_r_r!(op_ld_c_l, c, l);
    ld_r_r!(op_ld_c_a, c, a);

    ld_r_r!(op_ld_d_b, d, b);
    ld_r_r!(op_ld_d_c, d, c);
    ld_r_r!(op_ld_d_d, d, d);
    ld_r_r!(op_ld_d_e, d, e);
    ld_r_r!(op_ld_d_h, d, h);
    ld_r_r!(op_ld_d_l, d, l);
    ld_r_r!(op_ld_d_a, d, a);

    ld_r_r!(op_ld_e_b, e, b);
    ld_r_r!(op_ld_e_c, e, c);
    ld_r_r!(op_ld_e_d, e, d);
    ld_r_r!(op_ld_e_e, e, e);
    ld_r_r!(op_ld_e_h, e, h);
    ld_r_r!(op_ld_e_l, e, l);
    ld_r_r!(op_ld_e_a, e, a);

    ld_r_r!(op_ld_h_b, h, b);
    ld_r_r!(op_ld_h_c, h, c);
    ld_r_r!(op_ld_h_d, h, d);
    ld_r_r!(op_ld_h_e, h, e);
    ld_r_r!(op_ld_h_h, h, h);
    ld_r_r!(op_ld_h_l, h, l);
    ld_r_r!(op_ld_h_a, h, a);

    ld_r_r!(op_ld_l_b, l, b);
    ld_r_r!(op_ld_l_c, l, c);
    ld_r_r!(op_ld_l_d, l, d);
    ld_r_r!(op_ld_l_e, l, e);
    ld_r_r!(op_ld_l_h, l, h);
    ld_r_r!(op_ld_l_l, l, l);
    ld_r_r!(op_ld_l_a, l, a);

    ld_r_r!(op_ld_a_b, a, b);
    ld_r_r!(op_ld_a_c, a, c);
    ld_r_r!(op_ld_a_d, a, d);
    ld_r_r!(op_ld_a_e, a, e);
    ld_r_r!(op_ld_a_h, a, h);
    ld_r_r!(op_ld_a_l, a, l);
    ld_r_r!(op_ld_a_a, a, a);

    // --- LD r, (HL) ---
    ld_r_hlp!(op_ld_b_hlp, b);
    ld_r_hlp!(op_ld_c_hlp, c);
    ld_r_hlp!(op_ld_d_hlp, d);
    ld_r_hlp!(op_ld_e_hlp, e);
    ld_r_hlp!(op_ld_h_hlp, h);
    ld_r_hlp!(op_ld_l_hlp, l);
    ld_r_hlp!(op_ld_a_hlp, a);

    // --- LD (HL), r ---
    ld_hlp_r!(op_ld_hlp_b, b);
    ld_hlp_r!(op_ld_hlp_c, c);
    ld_hlp_r!(op_ld_hlp_d, d);
    ld_hlp_r!(op_ld_hlp_e, e);
    ld_hlp_r!(op_ld_hlp_h, h);
    ld_hlp_r!(op_ld_hlp_l, l);
    ld_hlp_r!(op_ld_hlp_a, a);

    // --- LD r, d8 ---
    pub fn op_ld_b_d8(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.b = self.read_d8(mmu);
        Ok(true)
    }
    pub fn op_ld_c_d8(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.c = self.read_d8(mmu);
        Ok(true)
    }
    pub fn op_ld_d_d8(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.d = self.read_d8(mmu);
        Ok(true)
    }
    pub fn op_ld_e_d8(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.e = self.read_d8(mmu);
        Ok(true)
    }
    pub fn op_ld_h_d8(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.h = self.read_d8(mmu);
        Ok(true)
    }
    pub fn op_ld_l_d8(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.l = self.read_d8(mmu);
        Ok(true)
    }
    pub fn op_ld_a_d8(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.a = self.read_d8(mmu);
        Ok(true)
    }
    pub fn op_ld_hlp_d8(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        let val = self.read_d8(mmu);
        mmu.write_byte(self.get_hl(), val);
        Ok(true)
    }

    // --- 16-bit immediate loads ---
    pub fn op_ld_bc_d16(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        let val = self.read_d16(mmu);
        self.set_bc(val);
        Ok(true)
    }
    pub fn op_ld_de_d16(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        let val = self.read_d16(mmu);
        self.set_de(val);
        Ok(true)
    }
    pub fn op_ld_hl_d16(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        let val = self.read_d16(mmu);
        self.set_hl(val);
        Ok(true)
    }
    pub fn op_ld_sp_d16(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.sp = self.read_d16(mmu);
        Ok(true)
    }

    // --- Indirect loads through BC/DE ---
    pub fn op_ld_bc_a(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        mmu.write_byte(self.get_bc(), self.a);
        Ok(true)
    }
    pub fn op_ld_de_a(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        mmu.write_byte(self.get_de(), self.a);
        Ok(true)
    }
    pub fn op_ld_a_bc(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.a = mmu.read_byte(self.get_bc());
        Ok(true)
    }
    pub fn op_ld_a_de(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.a = mmu.read_byte(self.get_de());
        Ok(true)
    }

    // --- (HL+)/(HL-) ---
    pub fn op_ld_hli_a(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        let addr = self.get_hl();
        mmu.write_byte(addr, self.a);
        self.set_hl(addr.wrapping_add(1));
        Ok(true)
    }
    pub fn op_ld_a_hli(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        let addr = self.get_hl();
        self.a = mmu.read_byte(addr);
        self.set_hl(addr.wrapping_add(1));
        Ok(true)
    }
    pub fn op_ld_hld_a(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        let addr = self.get_hl();
        mmu.write_byte(addr, self.a);
        self.set_hl(addr.wrapping_sub(1));
        Ok(true)
    }
    pub fn op_ld_a_hld(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        let addr = self.get_hl();
        self.a = mmu.read_byte(addr);
        self.set_hl(addr.wrapping_sub(1));
        Ok(true)
    }

    // --- Stack pointer stores/moves ---
    pub fn op_ld_a16_sp(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        let addr = self.read_d16(mmu);
        mmu.write_byte(addr, (self.sp & 0xFF) as u8);
        mmu.write_byte(addr.wrapping_add(1), (self.sp >> 8) as u8);
        Ok(true)
    }
    pub fn op_ld_sp_hl(&mut self, _mmu: &mut Mmu) -> CpuResult<bool> {
        self.sp = self.get_hl();
        Ok(true)
    }
    pub fn op_ld_hl_sp_r8(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        let offset = self.read_r8(mmu) as i16 as u16;
        let sp = self.sp;
        let result = sp.wrapping_add(offset);
        self.set_flag(FLAG_Z | FLAG_N, false);
        self.set_flag(FLAG_H, (sp & 0x000F) + (offset & 0x000F) > 0x000F);
        self.set_flag(FLAG_C, (sp & 0x00FF) + (offset & 0x00FF) > 0x00FF);
        self.set_hl(result);
        Ok(true)
    }

    // --- High-page LDH ---
    pub fn op_ldh_a8_a(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        let offset = self.read_d8(mmu);
        mmu.write_byte(0xFF00 | offset as u16, self.a);
        Ok(true)
    }
    pub fn op_ldh_a_a8(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        let offset = self.read_d8(mmu);
        self.a = mmu.read_byte(0xFF00 | offset as u16);
        Ok(true)
    }
    pub fn op_ld_cp_a(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        mmu.write_byte(0xFF00 | self.c as u16, self.a);
        Ok(true)
    }
    pub fn op_ld_a_cp(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.a = mmu.read_byte(0xFF00 | self.c as u16);
        Ok(true)
    }

    // --- Absolute A loads ---
    pub fn op_ld_a16_a(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        let addr = self.read_d16(mmu);
        mmu.write_byte(addr, self.a);
        Ok(true)
    }
    pub fn op_ld_a_a16(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        let addr = self.read_d16(mmu);
        self.a = mmu.read_byte(addr);
        Ok(true)
    }

    // --- PUSH/POP ---
    pub fn op_push_bc(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.push_word(self.get_bc(), mmu);
        Ok(true)
    }
    pub fn op_push_de(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.push_word(self.get_de(), mmu);
        Ok(true)
    }
    pub fn op_push_hl(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.push_word(self.get_hl(), mmu);
        Ok(true)
    }
    pub fn op_push_af(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        self.push_word(self.get_af(), mmu);
        Ok(true)
    }
    pub fn op_pop_bc(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        let val = self.pop_word(mmu);
        self.set_bc(val);
        Ok(true)
    }
    pub fn op_pop_de(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        let val = self.pop_word(mmu);
        self.set_de(val);
        Ok(true)
    }
    pub fn op_pop_hl(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        let val = self.pop_word(mmu);
        self.set_hl(val);
        Ok(true)
    }
    pub fn op_pop_af(&mut self, mmu: &mut Mmu) -> CpuResult<bool> {
        let val = self.pop_word(mmu);
        self.set_af(val);
        Ok(true)
    }
}
