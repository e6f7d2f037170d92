/*!
arithmetic.rs - Register increment / decrement family

```text
    INX (0xE8), INY (0xC8), DEX (0xCA), DEY (0x88)
```

All four wrap at 8 bits and set Z/N from the result. Carry and overflow are
untouched.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Instruction;
use crate::cpu::execute::{load_x, load_y};
use crate::cpu::state::CpuState;
use crate::error::BusError;

pub(crate) fn inx(cpu: &mut CpuState, _bus: &mut Bus, _ins: &Instruction) -> Result<(), BusError> {
    let v = cpu.x.wrapping_add(1);
    load_x(cpu, v);
    Ok(())
}

pub(crate) fn iny(cpu: &mut CpuState, _bus: &mut Bus, _ins: &Instruction) -> Result<(), BusError> {
    let v = cpu.y.wrapping_add(1);
    load_y(cpu, v);
    Ok(())
}

pub(crate) fn dex(cpu: &mut CpuState, _bus: &mut Bus, _ins: &Instruction) -> Result<(), BusError> {
    let v = cpu.x.wrapping_sub(1);
    load_x(cpu, v);
    Ok(())
}

pub(crate) fn dey(cpu: &mut CpuState, _bus: &mut Bus, _ins: &Instruction) -> Result<(), BusError> {
    let v = cpu.y.wrapping_sub(1);
    load_y(cpu, v);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::test_utils::cpu_with_program;

    #[test]
    fn inx_wraps_to_zero() {
        // LDX #$FF; INX
        let (mut cpu, mut bus) = cpu_with_program(&[0xA2, 0xFF, 0xE8]);
        cpu.execute(&mut bus).unwrap();
        assert_eq!(cpu.execute(&mut bus).unwrap(), 2);
        assert_eq!(cpu.x(), 0x00);
        assert!(cpu.zero());
        assert!(!cpu.negative());
        assert!(!cpu.carry());
    }

    #[test]
    fn dey_wraps_to_ff() {
        // DEY (Y = 0 after reset)
        let (mut cpu, mut bus) = cpu_with_program(&[0x88]);
        cpu.execute(&mut bus).unwrap();
        assert_eq!(cpu.y(), 0xFF);
        assert!(cpu.negative());
    }

    #[test]
    fn iny_and_dex() {
        // INY; INY; LDX #$02; DEX
        let (mut cpu, mut bus) = cpu_with_program(&[0xC8, 0xC8, 0xA2, 0x02, 0xCA]);
        for _ in 0..4 {
            cpu.execute(&mut bus).unwrap();
        }
        assert_eq!(cpu.y(), 2);
        assert_eq!(cpu.x(), 1);
        assert!(!cpu.zero());
    }
}
