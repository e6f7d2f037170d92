/*!
interfaces: the seam between the Bus and the memory-mapped device stubs.

The Bus owns the register windows' address decoding; what a device does when
one of its registers is written (start rendering, key a channel, ...) lives
behind `RegisterDevice`. The graphics and audio stubs in this crate only latch
the bytes, which is enough for the CPU to see its own writes.

Usage:
- Implementors receive a window-relative index (0-based), never a CPU address.
- `read_register` takes `&self`: register reads in this core have no side effects.
*/

/// A device exposing a fixed-size block of byte registers on the CPU bus.
pub trait RegisterDevice {
    /// Read register `index` (0-based within the window).
    fn read_register(&self, index: usize) -> u8;

    /// Write register `index` (0-based within the window).
    fn write_register(&mut self, index: usize, value: u8);
}

#[cfg(test)]
mod tests {
    use super::RegisterDevice;

    /// Latch-only device used to check the trait contract in isolation.
    struct Latches([u8; 4]);

    impl RegisterDevice for Latches {
        fn read_register(&self, index: usize) -> u8 {
            self.0[index]
        }
        fn write_register(&mut self, index: usize, value: u8) {
            self.0[index] = value;
        }
    }

    #[test]
    fn latches_round_trip() {
        let mut dev = Latches([0; 4]);
        dev.write_register(3, 0x7E);
        assert_eq!(dev.read_register(3), 0x7E);
    }
}
