/*!
fallback.rs - Diagnostic no-op behind every unlisted opcode

Every opcode the table does not implement points here. The operation logs the
opcode, its address and operand bytes at debug level and changes nothing; the
CPU has already moved PC past the instruction's nominal size, and the table
declares 0 cycles for these entries. Execution continues with the next
instruction.
*/

use tracing::debug;

use crate::bus::Bus;
use crate::cpu::addressing::Instruction;
use crate::cpu::state::CpuState;
use crate::error::BusError;

pub(crate) fn undefined(
    cpu: &mut CpuState,
    _bus: &mut Bus,
    ins: &Instruction,
) -> Result<(), BusError> {
    let size = ins.mode.instruction_size() as u16;
    let at = cpu.pc.wrapping_sub(size);
    debug!(
        "unimplemented opcode ${:02X} at ${:04X} (operands {:02X?}) executed as no-op",
        ins.opcode,
        at,
        &ins.operands[..(size - 1) as usize]
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::test_utils::cpu_with_program;

    #[test]
    fn undefined_opcode_is_zero_cycle_noop() {
        // 0x02 (implied, 1 byte) then 0x0C (abs NOP, 3 bytes) then LDA #$07
        let (mut cpu, mut bus) = cpu_with_program(&[0x02, 0x0C, 0x34, 0x12, 0xA9, 0x07]);
        let before = *cpu.state();

        assert_eq!(cpu.execute(&mut bus).unwrap(), 0);
        assert_eq!(cpu.pc(), 0x8001);
        assert_eq!(cpu.status(), before.status);
        assert_eq!(cpu.a(), before.a);

        assert_eq!(cpu.execute(&mut bus).unwrap(), 0);
        assert_eq!(cpu.pc(), 0x8004);

        assert_eq!(cpu.execute(&mut bus).unwrap(), 2);
        assert_eq!(cpu.a(), 0x07);
    }
}
