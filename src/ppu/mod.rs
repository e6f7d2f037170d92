/*!
Graphics device (PPU) stub.

Scope:
- Eight CPU-visible register latches ($2000-$2007 on the CPU bus).
- 16 KiB graphics memory (pattern tables at offset 0 receive the cartridge's
  CHR ROM at load time).

This PPU does NOT render, keep timing, or raise NMIs. It holds what the CPU
and loader write so that a rendering implementation can be plugged in behind
`RegisterDevice` without changing the Bus.

STRUCTURE:
- `registers.rs`: register names, `RegisterDevice` impl and decoded views of PPUCTRL/PPUMASK.
- `memory.rs`: `GraphicsMemory` with bounds-checked bulk upload.
*/

pub mod memory;
pub mod registers;

pub use memory::{GRAPHICS_MEMORY_SIZE, GraphicsMemory};
pub use registers::PPU_REGISTER_COUNT;

use crate::error::BusError;

#[derive(Clone, Debug)]
pub struct Ppu {
    regs: [u8; PPU_REGISTER_COUNT],
    memory: GraphicsMemory,
}

impl Default for Ppu {
    fn default() -> Self {
        Self::new()
    }
}

impl Ppu {
    pub fn new() -> Self {
        Self {
            regs: [0; PPU_REGISTER_COUNT],
            memory: GraphicsMemory::new(),
        }
    }

    /// Clear register latches. Graphics memory keeps its CHR contents.
    pub fn reset(&mut self) {
        self.regs = [0; PPU_REGISTER_COUNT];
    }

    /// Copy `data` into graphics memory at `offset`; fails if it does not fit.
    pub fn load_graphics(&mut self, offset: usize, data: &[u8]) -> Result<(), BusError> {
        self.memory.load(offset, data)
    }

    pub fn graphics(&self) -> &GraphicsMemory {
        &self.memory
    }
}
