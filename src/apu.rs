/*!
Stub APU: register latches for the audio / IO window.

Scope:
- Holds the 24 bytes of $4000..$4017 so CPU writes are observable by reads.
- Window layout: $4000-$4013 channel registers, $4014 OAM DMA, $4015 channel
  enables, $4016 controller strobe, $4017 frame counter.

Reads are side-effect free and return the last value written. There is no
sequencer, no length counters and no IRQ line; this APU does NOT generate
audio or emulate timing.
*/

use crate::bus::interfaces::RegisterDevice;

/// Number of latches in the audio / IO window ($4000-$4017).
pub const APU_REGISTER_COUNT: usize = 0x18;

#[derive(Clone, Debug)]
pub struct Apu {
    regs: [u8; APU_REGISTER_COUNT],
}

impl Default for Apu {
    fn default() -> Self {
        Self::new()
    }
}

impl Apu {
    pub fn new() -> Self {
        Self {
            regs: [0; APU_REGISTER_COUNT],
        }
    }

    pub fn reset(&mut self) {
        self.regs = [0; APU_REGISTER_COUNT];
    }
}

impl RegisterDevice for Apu {
    fn read_register(&self, index: usize) -> u8 {
        self.regs[index]
    }

    fn write_register(&mut self, index: usize, value: u8) {
        self.regs[index] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latches_keep_every_bit() {
        let mut apu = Apu::new();
        apu.write_register(0x15, 0b1110_0001);
        apu.write_register(0x17, 0xC0);
        assert_eq!(apu.read_register(0x15), 0b1110_0001);
        assert_eq!(apu.read_register(0x17), 0xC0);
    }

    #[test]
    fn reset_clears_latches() {
        let mut apu = Apu::new();
        apu.write_register(0x00, 0x3F);
        apu.reset();
        assert_eq!(apu.read_register(0x00), 0);
    }
}
