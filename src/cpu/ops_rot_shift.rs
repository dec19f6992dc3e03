use super::{Cpu, CpuResult, constants::*};
use crate::mmu::Mmu;

// --- Rotate/Shift Implementations (Non-CB prefixed) ---
impl Cpu {
    // RLCA
    pub fn op_rlca(&mut self, _bus: &mut Mmu) -> CpuResult<bool> {
        self.a = self.rlc(self.a);
        self.set_flag(FLAG_Z, false); // Special case: Z flag is cleared
        Ok(true)
    }
    // RLA
    pub fn op_rla(&mut self, _bus: &mut Mmu) -> CpuResult<bool> {
        self.a = self.rl(self.a);
        self.set_flag(FLAG_Z, false); // Special case: Z flag is cleared
        Ok(true)
    }
    // RRCA
    pub fn op_rrca(&mut self, _bus: &mut Mmu) -> CpuResult<bool> {
        self.a = self.rrc(self.a);
        self.set_flag(FLAG_Z, false); // Special case: Z flag is cleared
        Ok(true)
    }
    // RRA
    pub fn op_rra(&mut self, _bus: &mut Mmu) -> CpuResult<bool> {
        self.a = self.rr(self.a);
        self.set_flag(FLAG_Z, false); // Special case: Z flag is cleared
        Ok(true)
    }
}