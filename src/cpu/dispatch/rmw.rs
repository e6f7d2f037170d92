/*!
rmw.rs - Read-Modify-Write shift family (ASL)

Opcodes:
  ASL A (0x0A), zp (0x06), abs (0x0E), abs,X (0x1E)

Semantics
=========
C takes the bit shifted out of bit 7; Z/N come from the shifted result. The
accumulator form rewrites A, the memory forms write the result back through
the bus at the same effective address.
*/

use crate::bus::Bus;
use crate::cpu::addressing::{Instruction, read_operand, resolve, write_operand};
use crate::cpu::state::CpuState;
use crate::error::BusError;

pub(crate) fn asl(cpu: &mut CpuState, bus: &mut Bus, ins: &Instruction) -> Result<(), BusError> {
    let operand = resolve(cpu, bus, ins)?;
    let v = read_operand(cpu, bus, operand)?;
    let result = v << 1;
    write_operand(cpu, bus, operand, result)?;
    cpu.set_carry((v & 0x80) != 0);
    cpu.update_zn(result);
    Ok(())
}
