/*!
Internal 2 KiB work RAM behind the $0000-$1FFF window.

- $0000-$07FF: physical RAM
- $0800-$1FFF: mirrors (physical index = address mod $0800)

Owned by the Bus; the region decoder guarantees every address passed in lies
in $0000-$1FFF, and each byte of a multi-byte access is mirrored on its own so
a run starting at $07FF continues at physical index 0.
*/

/// Size of CPU internal RAM (in bytes).
pub const CPU_RAM_SIZE: usize = 0x0800;

pub struct Ram {
    data: [u8; CPU_RAM_SIZE],
}

impl Default for Ram {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Ram {
    #[inline]
    pub fn new() -> Self {
        Self {
            data: [0; CPU_RAM_SIZE],
        }
    }

    /// Clear RAM contents to 0.
    #[inline]
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Read a byte through the mirrored window.
    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.data[Self::mirror_index(addr)]
    }

    /// Write a byte through the mirrored window.
    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.data[Self::mirror_index(addr)] = value;
    }

    /// Copy `data` starting at `addr`, mirroring each byte independently.
    pub fn write_run(&mut self, addr: u16, data: &[u8]) {
        for (i, &b) in data.iter().enumerate() {
            self.write(addr.wrapping_add(i as u16), b);
        }
    }

    /// Physical RAM contents, without mirroring. Intended for tests/tools.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Physical RAM index for a CPU address.
    #[inline]
    pub fn mirror_index(addr: u16) -> usize {
        (addr as usize) % CPU_RAM_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::{CPU_RAM_SIZE, Ram};

    #[test]
    fn size_and_init() {
        let r = Ram::new();
        assert_eq!(r.as_slice().len(), CPU_RAM_SIZE);
        assert!(r.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn mirrored_reads_and_writes() {
        let mut r = Ram::new();

        r.write(0x0001, 0xAA);
        assert_eq!(r.read(0x0001), 0xAA);
        assert_eq!(r.read(0x0801), 0xAA);
        assert_eq!(r.read(0x1001), 0xAA);
        assert_eq!(r.read(0x1801), 0xAA);

        // Overwrite via a mirror address and verify all mirrors reflect it.
        r.write(0x1801, 0x55);
        assert_eq!(r.read(0x0001), 0x55);
        assert_eq!(r.read(0x0801), 0x55);
    }

    #[test]
    fn run_wraps_at_physical_end() {
        let mut r = Ram::new();
        r.write_run(0x07FF, &[0x11, 0x22]);
        assert_eq!(r.as_slice()[0x07FF], 0x11);
        assert_eq!(r.as_slice()[0x0000], 0x22);
        assert_eq!(r.read(0x0800), 0x22);
    }

    #[test]
    fn clear_zeroes_everything() {
        let mut r = Ram::new();
        r.write_run(0x0100, &[1, 2, 3]);
        r.clear();
        assert!(r.as_slice().iter().all(|&b| b == 0));
    }
}
