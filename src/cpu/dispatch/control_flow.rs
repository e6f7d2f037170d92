/*!
control_flow.rs - Control-flow / system opcode family

  JMP abs        (0x4C)
  JMP (ind)      (0x6C)  (indirect page-wrap quirk preserved)
  JSR abs        (0x20)
  RTS            (0x60)
  RTI            (0x40)
  BRK            (0x00)

Behavior Details
================
- JSR pushes (post-fetch PC - 2), high byte then low; RTS pulls it and adds 2,
  so a JSR/RTS pair resumes at the instruction after the JSR.
- BRK pushes the post-fetch PC (high, low) and then the raw status byte, sets
  BREAK and IRQ_DISABLE, and jumps through the vector at $FFFE/$FFFF.
- RTI pulls the status byte and then PC (low, high); it is BRK's exact inverse.
- None of these update flags except BRK (B, I) and RTI (whole byte).
*/

use crate::bus::Bus;
use crate::cpu::addressing::{Instruction, Operand, resolve};
use crate::cpu::execute::{pop, pop_word, push, push_word};
use crate::cpu::state::CpuState;
use crate::error::BusError;

/// IRQ/BRK vector.
pub const IRQ_VECTOR: u16 = 0xFFFE;

pub(crate) fn jmp(cpu: &mut CpuState, bus: &mut Bus, ins: &Instruction) -> Result<(), BusError> {
    if let Operand::Address(target) = resolve(cpu, bus, ins)? {
        cpu.pc = target;
    }
    Ok(())
}

pub(crate) fn jsr(cpu: &mut CpuState, bus: &mut Bus, ins: &Instruction) -> Result<(), BusError> {
    let ret = cpu.pc.wrapping_sub(2);
    push_word(cpu, bus, ret)?;
    cpu.pc = ins.word();
    Ok(())
}

pub(crate) fn rts(cpu: &mut CpuState, bus: &mut Bus, _ins: &Instruction) -> Result<(), BusError> {
    let ret = pop_word(cpu, bus)?;
    cpu.pc = ret.wrapping_add(2);
    Ok(())
}

pub(crate) fn brk(cpu: &mut CpuState, bus: &mut Bus, _ins: &Instruction) -> Result<(), BusError> {
    let vector = bus.read_word(IRQ_VECTOR)?;
    let pc = cpu.pc;
    push_word(cpu, bus, pc)?;
    let p = cpu.status();
    push(cpu, bus, p)?;
    cpu.set_break_flag(true);
    cpu.set_interrupt_disable(true);
    cpu.pc = vector;
    Ok(())
}

pub(crate) fn rti(cpu: &mut CpuState, bus: &mut Bus, _ins: &Instruction) -> Result<(), BusError> {
    let p = pop(cpu, bus)?;
    cpu.set_status(p);
    cpu.pc = pop_word(cpu, bus)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::cpu::state::{BREAK, CARRY, IRQ_DISABLE};
    use crate::test_utils::cpu_with_program;

    #[test]
    fn jsr_pushes_return_address_and_rts_resumes_after_call() {
        // $8000: JSR $8010 ; $8003: NOP ... $8010: RTS
        let mut prg = vec![0xEA; 0x20];
        prg[0..3].copy_from_slice(&[0x20, 0x10, 0x80]);
        prg[0x10] = 0x60;
        let (mut cpu, mut bus) = cpu_with_program(&prg);

        let sp_before = cpu.sp();
        assert_eq!(cpu.execute(&mut bus).unwrap(), 6);
        assert_eq!(cpu.pc(), 0x8010);
        assert_eq!(cpu.sp(), sp_before.wrapping_sub(2));

        // Return address (post-fetch PC - 2) high byte at the higher slot
        let hi = bus.read_u8(0x0100 | sp_before as u16).unwrap();
        let lo = bus.read_u8(0x0100 | sp_before.wrapping_sub(1) as u16).unwrap();
        assert_eq!(u16::from_le_bytes([lo, hi]), 0x8001);

        assert_eq!(cpu.execute(&mut bus).unwrap(), 6);
        assert_eq!(cpu.pc(), 0x8003);
        assert_eq!(cpu.sp(), sp_before);
    }

    #[test]
    fn jmp_absolute_and_indirect() {
        // JMP $9000 ; $9000: JMP ($02FF)
        let mut prg = vec![0xEA; 0x1010];
        prg[0..3].copy_from_slice(&[0x4C, 0x00, 0x90]);
        prg[0x1000..0x1003].copy_from_slice(&[0x6C, 0xFF, 0x02]);
        let (mut cpu, mut bus) = cpu_with_program(&prg);
        bus.write_u8(0x02FF, 0x34).unwrap();
        bus.write_u8(0x0200, 0x12).unwrap();
        bus.write_u8(0x0300, 0x99).unwrap();

        assert_eq!(cpu.execute(&mut bus).unwrap(), 3);
        assert_eq!(cpu.pc(), 0x9000);
        assert_eq!(cpu.execute(&mut bus).unwrap(), 5);
        assert_eq!(cpu.pc(), 0x1234);
    }

    #[test]
    fn brk_and_rti_round_trip() {
        // $8000: BRK ; $8001: NOP ; handler at $8100: RTI
        let mut prg = vec![0xEA; 0x200];
        prg[0] = 0x00;
        prg[0x100] = 0x40;
        let (mut cpu, mut bus) = cpu_with_program(&prg);
        bus.write_value::<u16>(0xFFFE, 0x8100).unwrap();
        cpu.set_status(CARRY);

        assert_eq!(cpu.execute(&mut bus).unwrap(), 7);
        assert_eq!(cpu.pc(), 0x8100);
        assert_eq!(cpu.sp(), 0xFC);
        assert!(cpu.break_flag());
        assert!(cpu.interrupt_disable());
        // Stack: PC hi, PC lo, P
        assert_eq!(bus.read_u8(0x01FF).unwrap(), 0x80);
        assert_eq!(bus.read_u8(0x01FE).unwrap(), 0x01);
        assert_eq!(bus.read_u8(0x01FD).unwrap(), CARRY);

        assert_eq!(cpu.execute(&mut bus).unwrap(), 6);
        assert_eq!(cpu.pc(), 0x8001);
        assert_eq!(cpu.status(), CARRY);
        assert_eq!(cpu.status() & (BREAK | IRQ_DISABLE), 0);
        assert_eq!(cpu.sp(), 0xFF);
    }
}
