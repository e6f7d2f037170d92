/*!
load_store.rs - Load / Store opcode family

Loads (set Z/N from the loaded value):
    LDA: A9, A5, AD, BD (abs,X: loads mem[base] + X)
    LDX: A2
    LDY: A0

Stores (no flags changed):
    STA: 85, 8D, 9D
*/

use crate::bus::Bus;
use crate::cpu::addressing::{
    Instruction, read_base_plus_x, read_operand, resolve, write_operand,
};
use crate::cpu::execute::{load_a, load_x, load_y};
use crate::cpu::state::CpuState;
use crate::error::BusError;

pub(crate) fn lda(cpu: &mut CpuState, bus: &mut Bus, ins: &Instruction) -> Result<(), BusError> {
    let operand = resolve(cpu, bus, ins)?;
    let v = read_operand(cpu, bus, operand)?;
    load_a(cpu, v);
    Ok(())
}

pub(crate) fn lda_base_plus_x(
    cpu: &mut CpuState,
    bus: &mut Bus,
    ins: &Instruction,
) -> Result<(), BusError> {
    let v = read_base_plus_x(cpu, bus, ins)?;
    load_a(cpu, v);
    Ok(())
}

pub(crate) fn ldx(cpu: &mut CpuState, bus: &mut Bus, ins: &Instruction) -> Result<(), BusError> {
    let operand = resolve(cpu, bus, ins)?;
    let v = read_operand(cpu, bus, operand)?;
    load_x(cpu, v);
    Ok(())
}

pub(crate) fn ldy(cpu: &mut CpuState, bus: &mut Bus, ins: &Instruction) -> Result<(), BusError> {
    let operand = resolve(cpu, bus, ins)?;
    let v = read_operand(cpu, bus, operand)?;
    load_y(cpu, v);
    Ok(())
}

pub(crate) fn sta(cpu: &mut CpuState, bus: &mut Bus, ins: &Instruction) -> Result<(), BusError> {
    let operand = resolve(cpu, bus, ins)?;
    let a = cpu.a;
    write_operand(cpu, bus, operand, a)
}
