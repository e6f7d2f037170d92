/*!
table.rs - Dense 256-entry opcode table and disassembler

Purpose
=======
Single source of truth for decode: each opcode maps to its operation, base
cycle cost, addressing mode and mnemonic. Instruction size is derived from
the mode, so size, mnemonic and behavior cannot drift apart.

Design
------
- `OPCODE_TABLE: [Opcode; 256]` is a `static` built in a const block and
  indexed directly by opcode value.
- Every slot starts as the `undefined` fallback (0 cycles, "???") with the
  addressing mode the 6502 decodes for that byte (`nominal_mode`), so an
  unlisted opcode still skips the right number of operand bytes.
- Implemented opcodes overwrite their slot.

Coverage
--------
Load/store (LDA/LDX/LDY/STA), transfers, INX/INY/DEX/DEY, CMP/CPX/CPY,
ORA/BIT, ASL, stack push/pull, flag set/clear, all eight branches, and
BRK/JSR/RTI/RTS/JMP/NOP. See `OPCODE_TABLE` for the exact opcode list.
*/

use crate::cpu::addressing::AddressingMode::{self, *};
use crate::cpu::dispatch::{
    Operation, arithmetic, branches, compare, control_flow, fallback, load_store, logical, misc,
    rmw,
};

/// One opcode table entry.
#[derive(Clone, Copy)]
pub struct Opcode {
    pub operation: Operation,
    pub cycles: u8,
    pub mode: AddressingMode,
    pub mnemonic: &'static str,
}

impl Opcode {
    /// Total instruction length in bytes (1-3).
    #[inline]
    pub const fn size(&self) -> u8 {
        self.mode.instruction_size()
    }

    /// True unless this entry is the diagnostic no-op fallback.
    pub fn is_implemented(&self) -> bool {
        self.mnemonic != UNDEFINED.mnemonic
    }
}

impl std::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Opcode")
            .field("mnemonic", &self.mnemonic)
            .field("cycles", &self.cycles)
            .field("mode", &self.mode)
            .finish()
    }
}

const UNDEFINED: Opcode = Opcode {
    operation: fallback::undefined,
    cycles: 0,
    mode: Implied,
    mnemonic: "???",
};

const fn op(operation: Operation, cycles: u8, mode: AddressingMode, mnemonic: &'static str) -> Opcode {
    Opcode {
        operation,
        cycles,
        mode,
        mnemonic,
    }
}

/// Addressing mode the 6502 decoder assigns to `opcode` (aaabbbcc layout),
/// documented or not.
pub const fn nominal_mode(opcode: u8) -> AddressingMode {
    let aaa = opcode >> 5;
    let bbb = (opcode >> 2) & 0x07;
    let cc = opcode & 0x03;
    // LDX/STX-style rows (aaa = 4, 5) index with Y instead of X.
    let y_row = aaa == 4 || aaa == 5;

    match cc {
        0 => match bbb {
            0 => match opcode {
                0x20 => Absolute,
                0x00 | 0x40 | 0x60 => Implied,
                _ => Immediate,
            },
            1 => ZeroPage,
            2 | 6 => Implied,
            3 => {
                if opcode == 0x6C {
                    Indirect
                } else {
                    Absolute
                }
            }
            4 => Relative,
            5 => ZeroPageX,
            _ => AbsoluteX,
        },
        2 => match bbb {
            0 => {
                if aaa >= 4 {
                    Immediate
                } else {
                    Implied
                }
            }
            1 => ZeroPage,
            2 => {
                if aaa < 4 {
                    Accumulator
                } else {
                    Implied
                }
            }
            3 => Absolute,
            4 | 6 => Implied,
            5 => {
                if y_row {
                    ZeroPageY
                } else {
                    ZeroPageX
                }
            }
            _ => {
                if y_row {
                    AbsoluteY
                } else {
                    AbsoluteX
                }
            }
        },
        // cc = 1 (ALU group) and cc = 3 (undocumented combined ops)
        _ => match bbb {
            0 => IndirectX,
            1 => ZeroPage,
            2 => Immediate,
            3 => Absolute,
            4 => IndirectY,
            5 => {
                if cc == 3 && y_row {
                    ZeroPageY
                } else {
                    ZeroPageX
                }
            }
            6 => AbsoluteY,
            _ => {
                if cc == 3 && y_row {
                    AbsoluteY
                } else {
                    AbsoluteX
                }
            }
        },
    }
}

pub static OPCODE_TABLE: [Opcode; 256] = {
    let mut t = [UNDEFINED; 256];
    let mut i = 0;
    while i < 256 {
        t[i].mode = nominal_mode(i as u8);
        i += 1;
    }

    // Load / store
    t[0xA9] = op(load_store::lda, 2, Immediate, "LDA");
    t[0xA5] = op(load_store::lda, 3, ZeroPage, "LDA");
    t[0xAD] = op(load_store::lda, 4, Absolute, "LDA");
    t[0xBD] = op(load_store::lda_base_plus_x, 4, AbsoluteX, "LDA");
    t[0xA2] = op(load_store::ldx, 2, Immediate, "LDX");
    t[0xA0] = op(load_store::ldy, 2, Immediate, "LDY");
    t[0x85] = op(load_store::sta, 3, ZeroPage, "STA");
    t[0x8D] = op(load_store::sta, 4, Absolute, "STA");
    t[0x9D] = op(load_store::sta, 5, AbsoluteX, "STA");

    // Transfers
    t[0xAA] = op(misc::tax, 2, Implied, "TAX");
    t[0xA8] = op(misc::tay, 2, Implied, "TAY");
    t[0x8A] = op(misc::txa, 2, Implied, "TXA");
    t[0x98] = op(misc::tya, 2, Implied, "TYA");
    t[0xBA] = op(misc::tsx, 2, Implied, "TSX");
    t[0x9A] = op(misc::txs, 2, Implied, "TXS");

    // Increment / decrement
    t[0xE8] = op(arithmetic::inx, 2, Implied, "INX");
    t[0xC8] = op(arithmetic::iny, 2, Implied, "INY");
    t[0xCA] = op(arithmetic::dex, 2, Implied, "DEX");
    t[0x88] = op(arithmetic::dey, 2, Implied, "DEY");

    // Compare
    t[0xC9] = op(compare::cmp, 2, Immediate, "CMP");
    t[0xDD] = op(compare::cmp_base_plus_x, 4, AbsoluteX, "CMP");
    t[0xE0] = op(compare::cpx, 2, Immediate, "CPX");
    t[0xC0] = op(compare::cpy, 2, Immediate, "CPY");

    // Logical
    t[0x01] = op(logical::ora, 6, IndirectX, "ORA");
    t[0x05] = op(logical::ora, 3, ZeroPage, "ORA");
    t[0x0D] = op(logical::ora, 4, Absolute, "ORA");
    t[0x11] = op(logical::ora, 5, IndirectY, "ORA");
    t[0x15] = op(logical::ora, 4, ZeroPageX, "ORA");
    t[0x19] = op(logical::ora, 4, AbsoluteY, "ORA");
    t[0x1D] = op(logical::ora, 4, AbsoluteX, "ORA");
    t[0x24] = op(logical::bit, 3, ZeroPage, "BIT");
    t[0x2C] = op(logical::bit, 4, Absolute, "BIT");

    // Shift
    t[0x0A] = op(rmw::asl, 2, Accumulator, "ASL");
    t[0x06] = op(rmw::asl, 5, ZeroPage, "ASL");
    t[0x0E] = op(rmw::asl, 6, Absolute, "ASL");
    t[0x1E] = op(rmw::asl, 7, AbsoluteX, "ASL");

    // Stack
    t[0x08] = op(misc::php, 3, Implied, "PHP");
    t[0x28] = op(misc::plp, 4, Implied, "PLP");
    t[0x48] = op(misc::pha, 3, Implied, "PHA");
    t[0x68] = op(misc::pla, 4, Implied, "PLA");

    // Flags
    t[0x18] = op(misc::clc, 2, Implied, "CLC");
    t[0x38] = op(misc::sec, 2, Implied, "SEC");
    t[0x58] = op(misc::cli, 2, Implied, "CLI");
    t[0x78] = op(misc::sei, 2, Implied, "SEI");
    t[0xB8] = op(misc::clv, 2, Implied, "CLV");
    t[0xD8] = op(misc::cld, 2, Implied, "CLD");
    t[0xF8] = op(misc::sed, 2, Implied, "SED");

    // Branches
    t[0x10] = op(branches::bpl, 2, Relative, "BPL");
    t[0x30] = op(branches::bmi, 2, Relative, "BMI");
    t[0x50] = op(branches::bvc, 2, Relative, "BVC");
    t[0x70] = op(branches::bvs, 2, Relative, "BVS");
    t[0x90] = op(branches::bcc, 2, Relative, "BCC");
    t[0xB0] = op(branches::bcs, 2, Relative, "BCS");
    t[0xD0] = op(branches::bne, 2, Relative, "BNE");
    t[0xF0] = op(branches::beq, 2, Relative, "BEQ");

    // Control flow
    t[0x00] = op(control_flow::brk, 7, Implied, "BRK");
    t[0x20] = op(control_flow::jsr, 6, Absolute, "JSR");
    t[0x40] = op(control_flow::rti, 6, Implied, "RTI");
    t[0x60] = op(control_flow::rts, 6, Implied, "RTS");
    t[0x4C] = op(control_flow::jmp, 3, Absolute, "JMP");
    t[0x6C] = op(control_flow::jmp, 5, Indirect, "JMP");
    t[0xEA] = op(misc::nop, 2, Implied, "NOP");

    t
};

/// Table entry for `opcode`. Total over all 256 values.
#[inline]
pub fn lookup(opcode: u8) -> &'static Opcode {
    &OPCODE_TABLE[opcode as usize]
}

/// Render the instruction at the start of `bytes` as assembly text
/// (`LDA #$10`, `STA $0200,X`, `BNE *-3`). Missing operand bytes read as 0;
/// an empty slice renders as an empty string.
pub fn disassemble(bytes: &[u8]) -> String {
    let Some(&opcode) = bytes.first() else {
        return String::new();
    };
    let entry = lookup(opcode);
    let lo = bytes.get(1).copied().unwrap_or(0);
    let hi = bytes.get(2).copied().unwrap_or(0);
    let word = u16::from_le_bytes([lo, hi]);

    let operand = match entry.mode {
        Implied => String::new(),
        Accumulator => " A".to_string(),
        Immediate => format!(" #${lo:02X}"),
        ZeroPage => format!(" ${lo:02X}"),
        ZeroPageX => format!(" ${lo:02X},X"),
        ZeroPageY => format!(" ${lo:02X},Y"),
        Relative => {
            // Offset from the branch's own address.
            let offset = lo as i8 as i16 + entry.size() as i16;
            if offset < 0 {
                format!(" *-{}", -offset)
            } else {
                format!(" *+{offset}")
            }
        }
        Absolute => format!(" ${word:04X}"),
        AbsoluteX => format!(" ${word:04X},X"),
        AbsoluteY => format!(" ${word:04X},Y"),
        Indirect => format!(" (${word:04X})"),
        IndirectX => format!(" (${lo:02X},X)"),
        IndirectY => format!(" (${lo:02X}),Y"),
    };
    format!("{}{}", entry.mnemonic, operand)
}
