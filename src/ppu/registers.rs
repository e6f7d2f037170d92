#![doc = r#"
PPU registers module

Purpose
- Register latch storage for the CPU-visible window and the `RegisterDevice`
  implementation the Bus forwards through.

Notes
- Indices are window-relative: 0 = $2000 (PPUCTRL) ... 7 = $2007 (PPUDATA).
- Reads return the last value written; no status clearing or buffered
  PPUDATA behavior is modeled here.
"#]

use super::Ppu;
use crate::bus::interfaces::RegisterDevice;

/// Number of registers in the CPU-visible window.
pub const PPU_REGISTER_COUNT: usize = 8;

pub const PPUCTRL: usize = 0;
pub const PPUMASK: usize = 1;
pub const PPUSTATUS: usize = 2;
pub const OAMADDR: usize = 3;
pub const OAMDATA: usize = 4;
pub const PPUSCROLL: usize = 5;
pub const PPUADDR: usize = 6;
pub const PPUDATA: usize = 7;

impl RegisterDevice for Ppu {
    fn read_register(&self, index: usize) -> u8 {
        self.regs[index]
    }

    fn write_register(&mut self, index: usize, value: u8) {
        self.regs[index] = value;
    }
}
