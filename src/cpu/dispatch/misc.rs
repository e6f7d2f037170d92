/*!
misc.rs - Transfers / Stack / Flag opcode family

Transfers:
  TAX (0xAA), TAY (0xA8), TXA (0x8A), TYA (0x98), TSX (0xBA), TXS (0x9A)

Stack:
  PHA (0x48), PLA (0x68), PHP (0x08), PLP (0x28)

Flag operations:
  CLC (0x18), SEC (0x38),
  CLI (0x58), SEI (0x78),
  CLD (0xD8), SED (0xF8),
  CLV (0xB8)

Plus NOP (0xEA).

Notes
=====
- Every transfer sets Z/N from the value moved, TXS included.
- PHP/PLP move the raw status byte; nothing is forced on or off.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Instruction;
use crate::cpu::execute::{load_a, load_x, load_y, pop, push};
use crate::cpu::state::{CARRY, CpuState, DECIMAL, IRQ_DISABLE, OVERFLOW};
use crate::error::BusError;

// Transfers

pub(crate) fn tax(cpu: &mut CpuState, _bus: &mut Bus, _ins: &Instruction) -> Result<(), BusError> {
    let v = cpu.a;
    load_x(cpu, v);
    Ok(())
}

pub(crate) fn tay(cpu: &mut CpuState, _bus: &mut Bus, _ins: &Instruction) -> Result<(), BusError> {
    let v = cpu.a;
    load_y(cpu, v);
    Ok(())
}

pub(crate) fn txa(cpu: &mut CpuState, _bus: &mut Bus, _ins: &Instruction) -> Result<(), BusError> {
    let v = cpu.x;
    load_a(cpu, v);
    Ok(())
}

pub(crate) fn tya(cpu: &mut CpuState, _bus: &mut Bus, _ins: &Instruction) -> Result<(), BusError> {
    let v = cpu.y;
    load_a(cpu, v);
    Ok(())
}

pub(crate) fn tsx(cpu: &mut CpuState, _bus: &mut Bus, _ins: &Instruction) -> Result<(), BusError> {
    let v = cpu.sp;
    load_x(cpu, v);
    Ok(())
}

pub(crate) fn txs(cpu: &mut CpuState, _bus: &mut Bus, _ins: &Instruction) -> Result<(), BusError> {
    cpu.sp = cpu.x;
    cpu.update_zn(cpu.sp);
    Ok(())
}

// Stack

pub(crate) fn pha(cpu: &mut CpuState, bus: &mut Bus, _ins: &Instruction) -> Result<(), BusError> {
    let a = cpu.a;
    push(cpu, bus, a)
}

pub(crate) fn pla(cpu: &mut CpuState, bus: &mut Bus, _ins: &Instruction) -> Result<(), BusError> {
    let v = pop(cpu, bus)?;
    load_a(cpu, v);
    Ok(())
}

pub(crate) fn php(cpu: &mut CpuState, bus: &mut Bus, _ins: &Instruction) -> Result<(), BusError> {
    let p = cpu.status();
    push(cpu, bus, p)
}

pub(crate) fn plp(cpu: &mut CpuState, bus: &mut Bus, _ins: &Instruction) -> Result<(), BusError> {
    let p = pop(cpu, bus)?;
    cpu.set_status(p);
    Ok(())
}

// Flags

fn set_flag(cpu: &mut CpuState, mask: u8, on: bool) -> Result<(), BusError> {
    cpu.assign_flag(mask, on);
    Ok(())
}

pub(crate) fn clc(cpu: &mut CpuState, _bus: &mut Bus, _ins: &Instruction) -> Result<(), BusError> {
    set_flag(cpu, CARRY, false)
}

pub(crate) fn sec(cpu: &mut CpuState, _bus: &mut Bus, _ins: &Instruction) -> Result<(), BusError> {
    set_flag(cpu, CARRY, true)
}

pub(crate) fn cli(cpu: &mut CpuState, _bus: &mut Bus, _ins: &Instruction) -> Result<(), BusError> {
    set_flag(cpu, IRQ_DISABLE, false)
}

pub(crate) fn sei(cpu: &mut CpuState, _bus: &mut Bus, _ins: &Instruction) -> Result<(), BusError> {
    set_flag(cpu, IRQ_DISABLE, true)
}

pub(crate) fn cld(cpu: &mut CpuState, _bus: &mut Bus, _ins: &Instruction) -> Result<(), BusError> {
    set_flag(cpu, DECIMAL, false)
}

pub(crate) fn sed(cpu: &mut CpuState, _bus: &mut Bus, _ins: &Instruction) -> Result<(), BusError> {
    set_flag(cpu, DECIMAL, true)
}

pub(crate) fn clv(cpu: &mut CpuState, _bus: &mut Bus, _ins: &Instruction) -> Result<(), BusError> {
    set_flag(cpu, OVERFLOW, false)
}

pub(crate) fn nop(_cpu: &mut CpuState, _bus: &mut Bus, _ins: &Instruction) -> Result<(), BusError> {
    Ok(())
}
