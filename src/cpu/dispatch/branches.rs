/*!
branches.rs - Relative branch family (BPL/BMI/BVC/BVS/BCC/BCS/BNE/BEQ)

The displacement is a signed byte applied to the post-fetch PC, so a
displacement of $FE loops back onto the branch itself. No flags change and the
cycle count is the table's base cost whether or not the branch is taken.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Instruction;
use crate::cpu::execute::branch;
use crate::cpu::state::CpuState;
use crate::error::BusError;

pub(crate) fn bpl(cpu: &mut CpuState, _bus: &mut Bus, ins: &Instruction) -> Result<(), BusError> {
    let taken = !cpu.negative();
    branch(cpu, ins, taken);
    Ok(())
}

pub(crate) fn bmi(cpu: &mut CpuState, _bus: &mut Bus, ins: &Instruction) -> Result<(), BusError> {
    let taken = cpu.negative();
    branch(cpu, ins, taken);
    Ok(())
}

pub(crate) fn bvc(cpu: &mut CpuState, _bus: &mut Bus, ins: &Instruction) -> Result<(), BusError> {
    let taken = !cpu.overflow();
    branch(cpu, ins, taken);
    Ok(())
}

pub(crate) fn bvs(cpu: &mut CpuState, _bus: &mut Bus, ins: &Instruction) -> Result<(), BusError> {
    let taken = cpu.overflow();
    branch(cpu, ins, taken);
    Ok(())
}

pub(crate) fn bcc(cpu: &mut CpuState, _bus: &mut Bus, ins: &Instruction) -> Result<(), BusError> {
    let taken = !cpu.carry();
    branch(cpu, ins, taken);
    Ok(())
}

pub(crate) fn bcs(cpu: &mut CpuState, _bus: &mut Bus, ins: &Instruction) -> Result<(), BusError> {
    let taken = cpu.carry();
    branch(cpu, ins, taken);
    Ok(())
}

pub(crate) fn bne(cpu: &mut CpuState, _bus: &mut Bus, ins: &Instruction) -> Result<(), BusError> {
    let taken = !cpu.zero();
    branch(cpu, ins, taken);
    Ok(())
}

pub(crate) fn beq(cpu: &mut CpuState, _bus: &mut Bus, ins: &Instruction) -> Result<(), BusError> {
    let taken = cpu.zero();
    branch(cpu, ins, taken);
    Ok(())
}
