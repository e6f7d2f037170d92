/*!
core::Cpu - 6502 CPU façade: reset protocol and the fetch/decode/execute step.

Phases
======
`Cpu` is a two-state machine:
- `Reset`: entered on construction. `execute` refuses to run (`CpuError::NotReset`)
  because PC has no meaningful value yet.
- `Running`: entered when `reset` has loaded PC from the reset vector.
There is no halt state; unlisted opcodes are logged no-ops.

Step
====
`execute` performs one instruction:
1. Read the opcode at PC and look it up in the opcode table.
2. Read the 0-2 operand bytes that follow (PC arithmetic wraps at $FFFF).
3. Advance PC by the instruction size.
4. Run the operation against the registers and the Bus.
5. Return the table's base cycle count.

A bus failure during steps 1-2 leaves the CPU untouched. A failure inside an
operation is returned after PC has advanced; any writes that completed before
the failing access stay in place.
*/

use tracing::{Level, enabled, trace};

use crate::bus::Bus;
use crate::cpu::addressing::Instruction;
use crate::cpu::state::CpuState;
use crate::cpu::table::{disassemble, lookup};
use crate::error::{BusError, CpuError};

/// Address of the little-endian reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuPhase {
    Reset,
    Running,
}

#[derive(Debug, Clone)]
pub struct Cpu {
    state: CpuState,
    phase: CpuPhase,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Construct a CPU in the `Reset` phase.
    pub fn new() -> Self {
        Self {
            state: CpuState::new(),
            phase: CpuPhase::Reset,
        }
    }

    pub fn phase(&self) -> CpuPhase {
        self.phase
    }

    /// Return to the `Reset` phase without touching registers.
    pub fn request_reset(&mut self) {
        self.phase = CpuPhase::Reset;
    }

    /// Zero A/X/Y and status, set SP to $FF, load PC from $FFFC/$FFFD and
    /// enter `Running`. If the vector cannot be read the CPU stays in `Reset`.
    pub fn reset(&mut self, bus: &Bus) -> Result<(), BusError> {
        self.phase = CpuPhase::Reset;
        let pc = bus.read_word(RESET_VECTOR)?;
        self.state.reset_registers(pc);
        self.phase = CpuPhase::Running;
        Ok(())
    }

    /// Execute one instruction and return its base cycle cost.
    pub fn execute(&mut self, bus: &mut Bus) -> Result<u32, CpuError> {
        if self.phase != CpuPhase::Running {
            return Err(CpuError::NotReset);
        }

        let pc = self.state.pc;
        let opcode = bus.read_u8(pc)?;
        let entry = lookup(opcode);
        let size = entry.size();

        let mut operands = [0u8; 2];
        for (i, slot) in operands.iter_mut().take(size as usize - 1).enumerate() {
            *slot = bus.read_u8(pc.wrapping_add(1 + i as u16))?;
        }

        if enabled!(Level::TRACE) {
            let mut bytes = vec![opcode];
            bytes.extend_from_slice(&operands[..size as usize - 1]);
            trace!("{pc:04X}  {}", disassemble(&bytes));
        }

        let ins = Instruction {
            opcode,
            mode: entry.mode,
            operands,
        };
        self.state.advance_pc(size as u16);
        (entry.operation)(&mut self.state, bus, &ins)?;
        Ok(entry.cycles as u32)
    }

    /// Return immutable reference to internal state (for inspection / testing).
    pub fn state(&self) -> &CpuState {
        &self.state
    }

    /// Mutable access to the registers (tests, debuggers).
    pub fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }

    // ---------------------------------------------------------------------
    // Register accessors
    // ---------------------------------------------------------------------
    pub fn a(&self) -> u8 {
        self.state.a
    }
    pub fn x(&self) -> u8 {
        self.state.x
    }
    pub fn y(&self) -> u8 {
        self.state.y
    }
    pub fn sp(&self) -> u8 {
        self.state.sp
    }
    pub fn pc(&self) -> u16 {
        self.state.pc
    }
    pub fn status(&self) -> u8 {
        self.state.status()
    }
    pub fn set_status(&mut self, v: u8) {
        self.state.set_status(v);
    }

    // ---------------------------------------------------------------------
    // Flag queries
    // ---------------------------------------------------------------------
    pub fn negative(&self) -> bool {
        self.state.negative()
    }
    pub fn overflow(&self) -> bool {
        self.state.overflow()
    }
    pub fn reserved(&self) -> bool {
        self.state.reserved()
    }
    pub fn break_flag(&self) -> bool {
        self.state.break_flag()
    }
    pub fn decimal(&self) -> bool {
        self.state.decimal()
    }
    pub fn interrupt_disable(&self) -> bool {
        self.state.interrupt_disable()
    }
    pub fn zero(&self) -> bool {
        self.state.zero()
    }
    pub fn carry(&self) -> bool {
        self.state.carry()
    }
}
