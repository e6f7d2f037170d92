/*!
APU / IO registers handler

Purpose
- CPU-visible entry point for the 24-byte audio and IO register window
  ($4000-$4017) and the only place that knows its base address.

Addressing overview (CPU):
- $4000-$4013: APU channel registers
- $4014: OAM DMA trigger (latched only)
- $4015: APU status / channel enables
- $4016: Controller 1 strobe
- $4017: APU frame counter / Controller 2

Notes
- All 24 bytes are plain latches as far as the Bus is concerned; the stub APU
  keeps them so reads return the last value written.
*/

use crate::apu::Apu;
use crate::bus::interfaces::RegisterDevice;
use crate::bus::map::Region;

pub struct ApuRegisters;

impl ApuRegisters {
    /// Read the register at CPU address `addr` ($4000..=$4017).
    #[inline]
    pub fn read(apu: &Apu, addr: u16) -> u8 {
        apu.read_register(register_index(addr))
    }

    /// Write `data` to consecutive registers starting at CPU address `addr`.
    pub fn write(apu: &mut Apu, addr: u16, data: &[u8]) {
        let first = register_index(addr);
        for (i, &v) in data.iter().enumerate() {
            apu.write_register(first + i, v);
        }
    }
}

#[inline]
fn register_index(addr: u16) -> usize {
    debug_assert!(Region::ApuIoRegisters.contains(addr));
    (addr - Region::ApuIoRegisters.start()) as usize
}
