#![doc = r#"
PPU memory submodule

Responsibilities
- Backing store for the 14-bit PPU address space ($0000-$3FFF).
- Bulk upload used by the cartridge loader for CHR ROM (pattern tables at $0000).

Design
- Uploads are all-or-nothing: a block that would run past the end is rejected
  and nothing is copied.
- `peek` masks the address to 14 bits, matching the PPU's own address bus
  width.
"#]

use crate::error::BusError;

/// Size of the PPU address space in bytes.
pub const GRAPHICS_MEMORY_SIZE: usize = 0x4000;

#[derive(Clone, Debug)]
pub struct GraphicsMemory {
    data: Box<[u8]>,
}

impl Default for GraphicsMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicsMemory {
    pub fn new() -> Self {
        Self {
            data: vec![0; GRAPHICS_MEMORY_SIZE].into_boxed_slice(),
        }
    }

    /// Copy `bytes` starting at `offset`.
    pub fn load(&mut self, offset: usize, bytes: &[u8]) -> Result<(), BusError> {
        let fits = offset
            .checked_add(bytes.len())
            .is_some_and(|end| end <= self.data.len());
        if bytes.is_empty() || !fits {
            return Err(BusError::GraphicsOverflow {
                offset,
                len: bytes.len(),
                capacity: self.data.len(),
            });
        }
        self.data[offset..offset + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    #[inline]
    pub fn peek(&self, addr: u16) -> u8 {
        self.data[(addr as usize) & 0x3FFF]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}
