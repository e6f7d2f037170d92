/*!
compare.rs - Compare opcode family (CMP / CPX / CPY)

Opcodes:
  CMP: C9 (#imm), DD (abs,X: compares A with mem[base] + X)
  CPX: E0 (#imm)
  CPY: C0 (#imm)

Flags
=====
- C = register >= operand (unsigned)
- Z/N from `register - operand` (8-bit wrap)
- No registers change.
*/

use crate::bus::Bus;
use crate::cpu::addressing::{Instruction, read_base_plus_x, read_operand, resolve};
use crate::cpu::execute::compare;
use crate::cpu::state::CpuState;
use crate::error::BusError;

fn fetch(cpu: &CpuState, bus: &Bus, ins: &Instruction) -> Result<u8, BusError> {
    let operand = resolve(cpu, bus, ins)?;
    read_operand(cpu, bus, operand)
}

pub(crate) fn cmp(cpu: &mut CpuState, bus: &mut Bus, ins: &Instruction) -> Result<(), BusError> {
    let m = fetch(cpu, bus, ins)?;
    let a = cpu.a;
    compare(cpu, a, m);
    Ok(())
}

pub(crate) fn cmp_base_plus_x(
    cpu: &mut CpuState,
    bus: &mut Bus,
    ins: &Instruction,
) -> Result<(), BusError> {
    let m = read_base_plus_x(cpu, bus, ins)?;
    let a = cpu.a;
    compare(cpu, a, m);
    Ok(())
}

pub(crate) fn cpx(cpu: &mut CpuState, bus: &mut Bus, ins: &Instruction) -> Result<(), BusError> {
    let m = fetch(cpu, bus, ins)?;
    let x = cpu.x;
    compare(cpu, x, m);
    Ok(())
}

pub(crate) fn cpy(cpu: &mut CpuState, bus: &mut Bus, ins: &Instruction) -> Result<(), BusError> {
    let m = fetch(cpu, bus, ins)?;
    let y = cpu.y;
    compare(cpu, y, m);
    Ok(())
}
