/*!
execute.rs - 6502 instruction semantic helpers shared across opcode families

Scope (crate-visible)
---------------------
Stack helpers:
    push, pop, push_word, pop_word

Register loads:
    load_a, load_x, load_y

Comparison and branching:
    compare, branch

Design Notes
============
- Helpers operate on `CpuState` plus the `Bus`; they never touch the opcode
  table or cycle counts.
- The stack lives on page 1. Push writes at $0100|SP then decrements SP;
  pull increments SP then reads. SP wraps silently in both directions.
- Bus failures are returned to the operation, which returns them to `Cpu::execute`.
*/

use crate::bus::Bus;
use crate::cpu::addressing::{Instruction, relative_target};
use crate::cpu::state::CpuState;
use crate::error::BusError;

// ---------------------------------------------------------------------------
// Stack helpers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn push(cpu: &mut CpuState, bus: &mut Bus, v: u8) -> Result<(), BusError> {
    bus.write_u8(cpu.stack_address(), v)?;
    cpu.sp = cpu.sp.wrapping_sub(1);
    Ok(())
}

#[inline]
pub(crate) fn pop(cpu: &mut CpuState, bus: &Bus) -> Result<u8, BusError> {
    cpu.sp = cpu.sp.wrapping_add(1);
    bus.read_u8(cpu.stack_address())
}

/// Push high byte first, so the low byte ends up at the lower stack address.
#[inline]
pub(crate) fn push_word(cpu: &mut CpuState, bus: &mut Bus, v: u16) -> Result<(), BusError> {
    let [lo, hi] = v.to_le_bytes();
    push(cpu, bus, hi)?;
    push(cpu, bus, lo)
}

#[inline]
pub(crate) fn pop_word(cpu: &mut CpuState, bus: &Bus) -> Result<u16, BusError> {
    let lo = pop(cpu, bus)?;
    let hi = pop(cpu, bus)?;
    Ok(u16::from_le_bytes([lo, hi]))
}

// ---------------------------------------------------------------------------
// Register loads (Z/N from the loaded value)
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn load_a(cpu: &mut CpuState, v: u8) {
    cpu.a = v;
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn load_x(cpu: &mut CpuState, v: u8) {
    cpu.x = v;
    cpu.update_zn(v);
}

#[inline]
pub(crate) fn load_y(cpu: &mut CpuState, v: u8) {
    cpu.y = v;
    cpu.update_zn(v);
}

// ---------------------------------------------------------------------------
// Compare / branch
// ---------------------------------------------------------------------------

/// CMP/CPX/CPY: carry on `reg >= m` (unsigned), Z/N from `reg - m`.
#[inline]
pub(crate) fn compare(cpu: &mut CpuState, reg: u8, m: u8) {
    cpu.set_carry(reg >= m);
    cpu.update_zn(reg.wrapping_sub(m));
}

/// Relative branch: when `cond` holds, add the signed displacement to the
/// (already advanced) PC. Flags are untouched.
#[inline]
pub(crate) fn branch(cpu: &mut CpuState, ins: &Instruction, cond: bool) {
    if cond {
        cpu.pc = relative_target(cpu.pc, ins.byte());
    }
}
