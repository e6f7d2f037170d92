/*!
Console: top-level composition of one `Bus` and one `Cpu`.

The console is the single owner of both; the Bus is lent to the CPU for the
duration of each `execute` call and to the loader when a cartridge is inserted.

Run loops
=========
- `reset()`: clear RAM and device latches (cartridge space survives), then
  reset the CPU from the vector at $FFFC.
- `run(n)`: reset once, then execute up to `n` instructions.
- `next_frame()`: execute until the per-frame cycle budget is spent. The
  remaining-cycle counter is signed so the last instruction of a frame may
  overshoot; the counter is re-armed (not accumulated) at the start of every
  frame. The loop also stops after `cycles_per_frame` instructions so a
  stream of zero-cycle no-ops cannot spin forever.
*/

use std::path::Path;

use tracing::{info, trace};

use crate::bus::Bus;
use crate::cartridge::Cartridge;
use crate::cpu::{Cpu, lookup};
use crate::error::{BusError, ConsoleError};
use crate::loader;

/// NTSC CPU clock.
pub const CPU_CLOCK_HZ: u32 = 1_789_773;
/// CPU cycles in one 60 Hz frame.
pub const CYCLES_PER_FRAME_NTSC: u32 = CPU_CLOCK_HZ / 60;

pub struct Console {
    bus: Bus,
    cpu: Cpu,
    cycles_per_frame: u32,
    cycles_left: i32,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    pub fn new() -> Self {
        Self::with_cycles_per_frame(CYCLES_PER_FRAME_NTSC)
    }

    /// Console with a custom frame budget.
    pub fn with_cycles_per_frame(cycles_per_frame: u32) -> Self {
        Self {
            bus: Bus::new(),
            cpu: Cpu::new(),
            cycles_per_frame,
            cycles_left: 0,
        }
    }

    /// Load the iNES file at `path` into memory. The CPU is sent back to the
    /// `Reset` phase; call `reset` (or `run`) before executing.
    pub fn insert_cartridge<P: AsRef<Path>>(&mut self, path: P) -> Result<Cartridge, ConsoleError> {
        let cart = loader::load(path, &mut self.bus)?;
        self.cpu.request_reset();
        Ok(cart)
    }

    /// In-memory counterpart of [`Console::insert_cartridge`].
    pub fn insert_cartridge_bytes(&mut self, data: &[u8]) -> Result<Cartridge, ConsoleError> {
        let cart = loader::load_bytes(data, &mut self.bus)?;
        self.cpu.request_reset();
        Ok(cart)
    }

    /// Clear RAM and device latches, then reset the CPU from the vector at $FFFC.
    pub fn reset(&mut self) -> Result<(), ConsoleError> {
        self.bus.reset();
        self.cpu.reset(&self.bus)?;
        info!("console reset, PC=${:04X}", self.cpu.pc());
        Ok(())
    }

    /// Execute one instruction; returns its cycle cost.
    pub fn execute(&mut self) -> Result<u32, ConsoleError> {
        Ok(self.cpu.execute(&mut self.bus)?)
    }

    /// Reset, then execute up to `max_instructions`. Returns total cycles.
    pub fn run(&mut self, max_instructions: usize) -> Result<u64, ConsoleError> {
        self.reset()?;
        info!(max_instructions, "run started");
        let mut total = 0u64;
        for _ in 0..max_instructions {
            total += u64::from(self.execute()?);
        }
        Ok(total)
    }

    /// Execute one frame's worth of cycles. Returns the cycles consumed.
    pub fn next_frame(&mut self) -> Result<u32, ConsoleError> {
        self.cycles_left = self.cycles_per_frame.min(i32::MAX as u32) as i32;
        let mut consumed = 0u32;
        let mut instructions = 0u32;
        while self.cycles_left > 0 && instructions < self.cycles_per_frame {
            let cycles = self.execute()?;
            self.cycles_left -= cycles as i32;
            consumed = consumed.saturating_add(cycles);
            instructions += 1;
        }
        trace!(consumed, instructions, overshoot = -self.cycles_left.min(0), "frame done");
        Ok(consumed)
    }

    /// Opcode plus its operand bytes at `addr`.
    pub fn instruction_at(&self, addr: u16) -> Result<Vec<u8>, BusError> {
        let opcode = self.bus.read_u8(addr)?;
        let size = lookup(opcode).size();
        let mut bytes = Vec::with_capacity(size as usize);
        bytes.push(opcode);
        for i in 1..size as u16 {
            bytes.push(self.bus.read_u8(addr.wrapping_add(i))?);
        }
        Ok(bytes)
    }

    pub fn cycles_per_frame(&self) -> u32 {
        self.cycles_per_frame
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::CpuPhase;
    use crate::error::{CartridgeError, CpuError};
    use crate::test_utils::build_nrom_with_prg;

    // LDA #$10; STA $0200; INX; BNE -3 (loops on INX until X wraps); NOP
    const LOOP: &[u8] = &[0xA9, 0x10, 0x8D, 0x00, 0x02, 0xE8, 0xD0, 0xFD, 0xEA];

    #[test]
    fn frame_budget_constant() {
        assert_eq!(CYCLES_PER_FRAME_NTSC, 29_829);
    }

    #[test]
    fn insert_then_run() {
        let mut console = Console::new();
        console
            .insert_cartridge_bytes(&build_nrom_with_prg(LOOP, 1, None))
            .unwrap();
        let cycles = console.run(3).unwrap();
        assert_eq!(cycles, 2 + 4 + 2);
        assert_eq!(console.bus().read_u8(0x0200).unwrap(), 0x10);
        assert_eq!(console.cpu().x(), 1);
        assert_eq!(console.cpu().pc(), 0x8006);
    }

    #[test]
    fn execute_requires_reset_after_insert() {
        let mut console = Console::new();
        console
            .insert_cartridge_bytes(&build_nrom_with_prg(LOOP, 0, None))
            .unwrap();
        assert_eq!(console.cpu().phase(), CpuPhase::Reset);
        assert!(matches!(
            console.execute(),
            Err(ConsoleError::Cpu(CpuError::NotReset))
        ));
    }

    #[test]
    fn next_frame_stops_once_budget_is_spent() {
        let mut console = Console::with_cycles_per_frame(5);
        console
            .insert_cartridge_bytes(&build_nrom_with_prg(LOOP, 0, None))
            .unwrap();
        console.reset().unwrap();
        // LDA (2) then STA (4): overshoots the 5-cycle budget by one.
        assert_eq!(console.next_frame().unwrap(), 6);
        assert_eq!(console.cpu().pc(), 0x8005);
        // The counter is re-armed, not carried: INX (2) + BNE (2) + INX (2).
        assert_eq!(console.next_frame().unwrap(), 6);
    }

    #[test]
    fn next_frame_caps_zero_cycle_streams() {
        // $02 is an undefined one-byte opcode: zero cycles, PC still advances.
        let mut console = Console::with_cycles_per_frame(10);
        console
            .insert_cartridge_bytes(&build_nrom_with_prg(&[0x02; 32], 0, None))
            .unwrap();
        console.reset().unwrap();
        assert_eq!(console.next_frame().unwrap(), 0);
        assert_eq!(console.cpu().pc(), 0x800A);
    }

    #[test]
    fn reset_clears_ram_and_keeps_cartridge() {
        let mut console = Console::new();
        console
            .insert_cartridge_bytes(&build_nrom_with_prg(LOOP, 0, None))
            .unwrap();
        console.bus_mut().write_u8(0x0010, 0x5A).unwrap();
        console.reset().unwrap();
        assert_eq!(console.bus().read_u8(0x0010).unwrap(), 0);
        assert_eq!(console.bus().read_u8(0x8000).unwrap(), 0xA9);
        assert_eq!(console.cpu().pc(), 0x8000);
    }

    #[test]
    fn instruction_at_reads_operands() {
        let mut console = Console::new();
        console.bus_mut().write(0x8000, LOOP).unwrap();
        assert_eq!(console.instruction_at(0x8000).unwrap(), vec![0xA9, 0x10]);
        assert_eq!(console.instruction_at(0x8002).unwrap(), vec![0x8D, 0x00, 0x02]);
        assert_eq!(console.instruction_at(0x8005).unwrap(), vec![0xE8]);
    }

    #[test]
    fn missing_cartridge_file_is_reported() {
        let mut console = Console::new();
        let err = console
            .insert_cartridge("/nonexistent/nescore/rom.nes")
            .unwrap_err();
        assert!(matches!(err, ConsoleError::Cartridge(CartridgeError::Io(_))));
    }
}
