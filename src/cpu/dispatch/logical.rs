/*!
logical.rs - Logical opcode family (ORA / BIT)

ORA (A |= M; Z/N from A):
  01 (ind,X), 05 zp, 0D abs, 11 (ind),Y, 15 zp,X, 19 abs,Y, 1D abs,X

BIT (A unchanged):
  24 zp, 2C abs
  Z = (A & M) == 0, N = M bit 7, V = M bit 6
*/

use crate::bus::Bus;
use crate::cpu::addressing::{Instruction, read_operand, resolve};
use crate::cpu::execute::load_a;
use crate::cpu::state::CpuState;
use crate::error::BusError;

pub(crate) fn ora(cpu: &mut CpuState, bus: &mut Bus, ins: &Instruction) -> Result<(), BusError> {
    let operand = resolve(cpu, bus, ins)?;
    let m = read_operand(cpu, bus, operand)?;
    let v = cpu.a | m;
    load_a(cpu, v);
    Ok(())
}

pub(crate) fn bit(cpu: &mut CpuState, bus: &mut Bus, ins: &Instruction) -> Result<(), BusError> {
    let operand = resolve(cpu, bus, ins)?;
    let m = read_operand(cpu, bus, operand)?;
    cpu.set_zero((cpu.a & m) == 0);
    cpu.set_negative((m & 0x80) != 0);
    cpu.set_overflow((m & 0x40) != 0);
    Ok(())
}
