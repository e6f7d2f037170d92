/*!
state.rs - 6502 architectural state (registers + status byte) and
inline-friendly helpers.

Overview
========
`CpuState` owns every architecturally visible register. It excludes:
  - Bus / memory logic
  - Instruction decode / dispatch logic
  - Reset sequencing (the `Cpu` façade in `core` owns the phase machine)

Status Register
===============
The raw status byte is the single source of truth. Named flags are views
onto it via shift/mask, so assigning a raw byte and reading it back is
lossless for all eight bits, including the reserved one.

Bit layout used by this core:

Bit: 7 6 5 4 3 2 1 0
     C Z I D B R V N
Where:
  C = CARRY
  Z = ZERO
  I = IRQ_DISABLE
  D = DECIMAL (never consulted by arithmetic; still settable by CLD/SED)
  B = BREAK
  R = RESERVED (stored, never interpreted)
  V = OVERFLOW
  N = NEGATIVE

PHP/PLP/BRK/RTI move this byte to and from the stack unchanged.
*/

/// Processor status flag bit masks.
pub const NEGATIVE: u8 = 0b0000_0001;
pub const OVERFLOW: u8 = 0b0000_0010;
pub const RESERVED: u8 = 0b0000_0100;
pub const BREAK: u8 = 0b0000_1000;
pub const DECIMAL: u8 = 0b0001_0000;
pub const IRQ_DISABLE: u8 = 0b0010_0000;
pub const ZERO: u8 = 0b0100_0000;
pub const CARRY: u8 = 0b1000_0000;

/// Value of SP after reset (top of the page-1 stack).
pub const STACK_TOP: u8 = 0xFF;

/// Base address of the hardware stack page.
pub const STACK_PAGE: u16 = 0x0100;

/// Pure register / flag container for the 6502 CPU.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: u8,
}

impl CpuState {
    // ---------------------------------------------------------------------
    // Construction / Reset
    // ---------------------------------------------------------------------

    /// All registers zero. PC is meaningless until the `Cpu` is reset.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero A/X/Y and status, put SP at the top of the stack, load `pc`.
    pub fn reset_registers(&mut self, pc: u16) {
        *self = Self {
            sp: STACK_TOP,
            pc,
            ..Self::default()
        };
    }

    // ---------------------------------------------------------------------
    // Program Counter Helpers
    // ---------------------------------------------------------------------

    /// Advance PC by `delta` (wrapping at 16 bits).
    #[inline]
    pub fn advance_pc(&mut self, delta: u16) {
        self.pc = self.pc.wrapping_add(delta);
    }

    // ---------------------------------------------------------------------
    // Raw status byte
    // ---------------------------------------------------------------------

    #[inline]
    pub fn status(&self) -> u8 {
        self.status
    }

    /// Assign all eight status bits at once.
    #[inline]
    pub fn set_status(&mut self, v: u8) {
        self.status = v;
    }

    // ---------------------------------------------------------------------
    // Flag Operations
    // ---------------------------------------------------------------------

    #[inline]
    pub fn is_flag_set(&self, mask: u8) -> bool {
        (self.status & mask) != 0
    }

    /// Assign a flag bit based on boolean `value`.
    #[inline]
    pub fn assign_flag(&mut self, mask: u8, value: bool) {
        if value {
            self.status |= mask;
        } else {
            self.status &= !mask;
        }
    }

    /// ZERO + NEGATIVE from an 8-bit result.
    #[inline]
    pub fn update_zn(&mut self, result: u8) {
        self.assign_flag(ZERO, result == 0);
        self.assign_flag(NEGATIVE, (result & 0x80) != 0);
    }

    // Named views. Setters take the new bit value.

    #[inline]
    pub fn negative(&self) -> bool {
        self.is_flag_set(NEGATIVE)
    }
    #[inline]
    pub fn overflow(&self) -> bool {
        self.is_flag_set(OVERFLOW)
    }
    #[inline]
    pub fn reserved(&self) -> bool {
        self.is_flag_set(RESERVED)
    }
    #[inline]
    pub fn break_flag(&self) -> bool {
        self.is_flag_set(BREAK)
    }
    #[inline]
    pub fn decimal(&self) -> bool {
        self.is_flag_set(DECIMAL)
    }
    #[inline]
    pub fn interrupt_disable(&self) -> bool {
        self.is_flag_set(IRQ_DISABLE)
    }
    #[inline]
    pub fn zero(&self) -> bool {
        self.is_flag_set(ZERO)
    }
    #[inline]
    pub fn carry(&self) -> bool {
        self.is_flag_set(CARRY)
    }

    #[inline]
    pub fn set_negative(&mut self, on: bool) {
        self.assign_flag(NEGATIVE, on);
    }
    #[inline]
    pub fn set_overflow(&mut self, on: bool) {
        self.assign_flag(OVERFLOW, on);
    }
    #[inline]
    pub fn set_break_flag(&mut self, on: bool) {
        self.assign_flag(BREAK, on);
    }
    #[inline]
    pub fn set_decimal(&mut self, on: bool) {
        self.assign_flag(DECIMAL, on);
    }
    #[inline]
    pub fn set_interrupt_disable(&mut self, on: bool) {
        self.assign_flag(IRQ_DISABLE, on);
    }
    #[inline]
    pub fn set_zero(&mut self, on: bool) {
        self.assign_flag(ZERO, on);
    }
    #[inline]
    pub fn set_carry(&mut self, on: bool) {
        self.assign_flag(CARRY, on);
    }

    // ---------------------------------------------------------------------
    // Stack addressing
    // ---------------------------------------------------------------------

    /// Address of the stack slot SP currently points at.
    #[inline]
    pub fn stack_address(&self) -> u16 {
        STACK_PAGE | self.sp as u16
    }
}
