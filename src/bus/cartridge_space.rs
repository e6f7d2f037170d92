/*!
Cartridge-mapped window ($4020-$FFFF) backed by flat program-ROM storage.

There is no mapper in this core: the loader copies PRG bytes straight into the
window and the CPU reads them back unbanked. The window is writable from the
Bus, which is how the loader (and tests) place code and vectors.
*/

use crate::bus::map::Region;

/// Size of the cartridge window in bytes ($4020-$FFFF).
pub const CARTRIDGE_SPACE_SIZE: usize = Region::Cartridge.len();

pub struct CartridgeSpace {
    data: Box<[u8]>,
}

impl Default for CartridgeSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl CartridgeSpace {
    pub fn new() -> Self {
        Self {
            data: vec![0; CARTRIDGE_SPACE_SIZE].into_boxed_slice(),
        }
    }

    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.data[Self::offset(addr)]
    }

    /// Copy `data` into the window at CPU address `addr`.
    ///
    /// The caller has already clipped `data` to the window.
    pub fn write(&mut self, addr: u16, data: &[u8]) {
        let start = Self::offset(addr);
        self.data[start..start + data.len()].copy_from_slice(data);
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn offset(addr: u16) -> usize {
        debug_assert!(Region::Cartridge.contains(addr));
        (addr - Region::Cartridge.start()) as usize
    }
}
