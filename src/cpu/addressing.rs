/*!
addressing.rs - 6502 addressing modes, instruction sizing and operand resolution

Overview
========
- `AddressingMode` is the closed set of operand encodings; every opcode table
  entry carries exactly one.
- `instruction_size` derives the byte length (1-3) from the mode alone.
- `Instruction` is what the fetch stage hands to an operation: the opcode, its
  mode and the two operand bytes (unused bytes are zero).
- `resolve` turns an `Instruction` into an `Operand` (immediate value,
  accumulator, or effective address) against the current registers.

Caller Assumptions
==================
PC has already been advanced past the whole instruction when `resolve` runs,
so relative targets are computed from the post-fetch PC.

Wrapping Rules
==============
- Absolute indexed: 16-bit wrap.
- LDA abs,X and CMP abs,X do not index the address: they read the byte at
  the base address and add X to the value (`read_base_plus_x`), 8-bit wrap.
- Zero-page indexed and zero-page pointers: wrap within page zero.
- JMP (indirect): the pointer's high byte is fetched from the same page as
  its low byte (the $xxFF quirk).
*/

use crate::bus::Bus;
use crate::cpu::state::CpuState;
use crate::error::BusError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Relative,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX,
    IndirectY,
}

impl AddressingMode {
    /// Total instruction length in bytes, opcode included.
    #[inline]
    pub const fn instruction_size(self) -> u8 {
        instruction_size(self)
    }
}

/// Total instruction length in bytes for `mode` (1, 2 or 3).
pub const fn instruction_size(mode: AddressingMode) -> u8 {
    use AddressingMode::*;
    match mode {
        Implied | Accumulator => 1,
        Immediate | ZeroPage | ZeroPageX | ZeroPageY | Relative | IndirectX | IndirectY => 2,
        Absolute | AbsoluteX | AbsoluteY | Indirect => 3,
    }
}

/// One decoded instruction as handed to an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: u8,
    pub mode: AddressingMode,
    pub operands: [u8; 2],
}

impl Instruction {
    /// First operand byte (immediate value, zero-page address or displacement).
    #[inline]
    pub fn byte(&self) -> u8 {
        self.operands[0]
    }

    /// Both operand bytes as a little-endian absolute address.
    #[inline]
    pub fn word(&self) -> u16 {
        u16::from_le_bytes(self.operands)
    }
}

/// Where an operation's data lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    None,
    Accumulator,
    Immediate(u8),
    Address(u16),
}

/// Branch target: signed displacement applied to the post-fetch PC.
#[inline]
pub fn relative_target(pc: u16, displacement: u8) -> u16 {
    pc.wrapping_add(displacement as i8 as u16)
}

/// Resolve the operand of `ins` against the current registers.
///
/// Indirect modes read their pointer through the bus; the bus error is
/// passed through unchanged.
pub fn resolve(cpu: &CpuState, bus: &Bus, ins: &Instruction) -> Result<Operand, BusError> {
    use AddressingMode::*;
    let operand = match ins.mode {
        Implied => Operand::None,
        Accumulator => Operand::Accumulator,
        Immediate => Operand::Immediate(ins.byte()),
        ZeroPage => Operand::Address(ins.byte() as u16),
        ZeroPageX => Operand::Address(ins.byte().wrapping_add(cpu.x) as u16),
        ZeroPageY => Operand::Address(ins.byte().wrapping_add(cpu.y) as u16),
        Relative => Operand::Address(relative_target(cpu.pc, ins.byte())),
        Absolute => Operand::Address(ins.word()),
        AbsoluteX => Operand::Address(ins.word().wrapping_add(cpu.x as u16)),
        AbsoluteY => Operand::Address(ins.word().wrapping_add(cpu.y as u16)),
        Indirect => Operand::Address(read_word_indirect_bug(bus, ins.word())?),
        IndirectX => Operand::Address(read_word_zp(bus, ins.byte().wrapping_add(cpu.x))?),
        IndirectY => Operand::Address(read_word_zp(bus, ins.byte())?.wrapping_add(cpu.y as u16)),
    };
    Ok(operand)
}

/// Fetch the 8-bit value an operand designates. `Operand::None` reads as 0.
pub fn read_operand(cpu: &CpuState, bus: &Bus, operand: Operand) -> Result<u8, BusError> {
    match operand {
        Operand::None => Ok(0),
        Operand::Accumulator => Ok(cpu.a),
        Operand::Immediate(v) => Ok(v),
        Operand::Address(addr) => bus.read_u8(addr),
    }
}

/// Store an 8-bit value to an operand's location. Immediate and implied
/// operands have no location and are left alone.
pub fn write_operand(
    cpu: &mut CpuState,
    bus: &mut Bus,
    operand: Operand,
    value: u8,
) -> Result<(), BusError> {
    match operand {
        Operand::Accumulator => cpu.a = value,
        Operand::Address(addr) => bus.write_u8(addr, value)?,
        Operand::None | Operand::Immediate(_) => {}
    }
    Ok(())
}

/// Value form of absolute,X used by LDA $BD and CMP $DD: the byte at the
/// unindexed base address plus X, wrapping at 8 bits.
pub fn read_base_plus_x(cpu: &CpuState, bus: &Bus, ins: &Instruction) -> Result<u8, BusError> {
    Ok(bus.read_u8(ins.word())?.wrapping_add(cpu.x))
}

/// 16-bit little-endian pointer from zero page, high byte wrapping within page zero.
#[inline]
pub(crate) fn read_word_zp(bus: &Bus, base: u8) -> Result<u16, BusError> {
    let lo = bus.read_u8(base as u16)?;
    let hi = bus.read_u8(base.wrapping_add(1) as u16)?;
    Ok(u16::from_le_bytes([lo, hi]))
}

/// JMP (indirect) pointer fetch: when the low byte of the pointer is $FF the
/// high byte comes from the start of the same page.
#[inline]
pub(crate) fn read_word_indirect_bug(bus: &Bus, addr: u16) -> Result<u16, BusError> {
    let lo = bus.read_u8(addr)?;
    let hi_addr = (addr & 0xFF00) | (addr.wrapping_add(1) & 0x00FF);
    let hi = bus.read_u8(hi_addr)?;
    Ok(u16::from_le_bytes([lo, hi]))
}
