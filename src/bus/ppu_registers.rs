#![doc = r#"
PPU registers handler

Purpose
- CPU-visible entry point for the 8-byte graphics register window ($2000-$2007).
- Translates CPU addresses to register indices and forwards to the PPU through
  `RegisterDevice`.

Notes
- The window is not mirrored in this core: $2008-$3FFF is an unmapped gap and
  the Bus rejects accesses there before they reach this handler.
- Register side effects (VRAM address latching, rendering) belong to the PPU
  implementation, not to the Bus.
"#]

use crate::bus::interfaces::RegisterDevice;
use crate::bus::map::Region;
use crate::ppu::Ppu;

/// Handler for CPU-visible PPU register reads/writes.
pub struct PpuRegisters;

impl PpuRegisters {
    /// Read the register at CPU address `addr` ($2000..=$2007).
    #[inline]
    pub fn read(ppu: &Ppu, addr: u16) -> u8 {
        ppu.read_register(register_index(addr))
    }

    /// Write `data` to consecutive registers starting at CPU address `addr`.
    ///
    /// The caller has already clipped `data` to the window.
    pub fn write(ppu: &mut Ppu, addr: u16, data: &[u8]) {
        let first = register_index(addr);
        for (i, &v) in data.iter().enumerate() {
            ppu.write_register(first + i, v);
        }
    }
}

#[inline]
fn register_index(addr: u16) -> usize {
    debug_assert!(Region::PpuRegisters.contains(addr));
    (addr - Region::PpuRegisters.start()) as usize
}
