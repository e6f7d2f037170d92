#![doc = r#"
Bus module: the single shared address-space router between CPU, loader and devices.

Overview
- `Bus` owns the 2 KiB work RAM, the cartridge window storage and the two
  device stubs (PPU, APU) whose register windows are memory-mapped.
- All CPU and loader traffic goes through `Bus::read` / `Bus::write`; nothing
  else reaches device or memory storage.

Modules and responsibilities
- map: region table and write segmentation (`Region`, `segments`).
- ram: 2 KiB RAM with $0800 mirroring across $0000-$1FFF.
- ppu_registers: CPU-visible graphics register window ($2000-$2007).
- apu_registers: CPU-visible audio/IO register window ($4000-$4017).
- cartridge_space: flat program-ROM storage behind $4020-$FFFF.
- interfaces: `RegisterDevice`, the seam the register windows forward through.

Access rules
- Reads of `T` take `size_of::<T>()` bytes, little-endian, and must stay inside
  the region that holds the first byte.
- Writes are split at region boundaries and each piece is checked against the
  region it lands in; a piece that lands in an unmapped gap fails the whole write.
- `addr + len` past $FFFF fails outright. Unlike PC/SP arithmetic, bus address
  arithmetic never wraps.
- A failed access leaves memory untouched.
"#]

use num_traits::{FromBytes, ToBytes};
use tracing::warn;

use crate::apu::Apu;
use crate::error::BusError;
use crate::ppu::Ppu;

pub mod apu_registers;
pub mod cartridge_space;
pub mod interfaces;
pub mod map;
pub mod ppu_registers;
pub mod ram;


pub use apu_registers::ApuRegisters;
pub use cartridge_space::{CARTRIDGE_SPACE_SIZE, CartridgeSpace};
pub use interfaces::RegisterDevice;
pub use map::{ADDRESS_SPACE_END, Region};
pub use ppu_registers::PpuRegisters;
pub use ram::{CPU_RAM_SIZE, Ram};

pub struct Bus {
    ram: Ram,
    cartridge: CartridgeSpace,

    // Devices
    pub ppu: Ppu,
    pub apu: Apu,
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus {
    pub fn new() -> Self {
        Self {
            ram: Ram::new(),
            cartridge: CartridgeSpace::new(),
            ppu: Ppu::new(),
            apu: Apu::new(),
        }
    }

    /// Clear RAM and device latches. Cartridge contents survive a reset.
    pub fn reset(&mut self) {
        self.ram.clear();
        self.ppu.reset();
        self.apu.reset();
    }

    // -----------------------------
    // CPU-visible memory interface
    // -----------------------------

    /// Read a little-endian value of `size_of::<T>()` bytes starting at `addr`.
    pub fn read<T>(&self, addr: u16) -> Result<T, BusError>
    where
        T: FromBytes,
        T::Bytes: Default,
    {
        let mut raw = <T::Bytes as Default>::default();
        let bytes: &mut [u8] = raw.as_mut();
        let region = Self::check_read(addr, bytes.len())?;
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = self.peek(region, addr + i as u16);
        }
        Ok(T::from_le_bytes(&raw))
    }

    #[inline]
    pub fn read_u8(&self, addr: u16) -> Result<u8, BusError> {
        self.read::<u8>(addr)
    }

    /// Little-endian 16-bit read (vectors, absolute pointers).
    #[inline]
    pub fn read_word(&self, addr: u16) -> Result<u16, BusError> {
        self.read::<u16>(addr)
    }

    /// Write `data` starting at `addr`.
    ///
    /// Validates the whole range before touching memory, then hands each
    /// region its share of the bytes.
    pub fn write(&mut self, addr: u16, data: &[u8]) -> Result<(), BusError> {
        if data.is_empty() {
            return Err(rejected(BusError::EmptyWrite { addr }));
        }
        if addr as usize + data.len() > ADDRESS_SPACE_END {
            return Err(rejected(BusError::OutOfRange {
                addr,
                len: data.len(),
            }));
        }
        let segments = map::segments(addr, data.len())
            .map_err(|gap| rejected(BusError::Unmapped { addr: gap }))?;

        for seg in segments {
            let chunk = &data[seg.data_offset..seg.data_offset + seg.len];
            match seg.region {
                Region::Ram => self.ram.write_run(seg.addr, chunk),
                Region::PpuRegisters => PpuRegisters::write(&mut self.ppu, seg.addr, chunk),
                Region::ApuIoRegisters => ApuRegisters::write(&mut self.apu, seg.addr, chunk),
                Region::Cartridge => self.cartridge.write(seg.addr, chunk),
            }
        }
        Ok(())
    }

    #[inline]
    pub fn write_u8(&mut self, addr: u16, value: u8) -> Result<(), BusError> {
        self.write(addr, &[value])
    }

    /// Write a value little-endian (e.g. a u16 vector).
    pub fn write_value<T: ToBytes>(&mut self, addr: u16, value: T) -> Result<(), BusError> {
        let bytes = value.to_le_bytes();
        self.write(addr, bytes.as_ref())
    }

    /// Upload bytes into graphics memory (CHR data), starting at `offset`.
    pub fn write_graphics(&mut self, offset: usize, data: &[u8]) -> Result<(), BusError> {
        self.ppu.load_graphics(offset, data).map_err(rejected)
    }

    // -----------------------------
    // Inspection
    // -----------------------------

    pub fn ram(&self) -> &Ram {
        &self.ram
    }

    pub fn cartridge_space(&self) -> &CartridgeSpace {
        &self.cartridge
    }

    // -----------------------------
    // Internals
    // -----------------------------

    fn check_read(addr: u16, len: usize) -> Result<Region, BusError> {
        if addr as usize + len > ADDRESS_SPACE_END {
            return Err(BusError::OutOfRange { addr, len });
        }
        let region = Region::resolve(addr).ok_or(BusError::Unmapped { addr })?;
        if len > region.room_from(addr) {
            return Err(BusError::RegionOverflow { region, addr, len });
        }
        Ok(region)
    }

    #[inline]
    fn peek(&self, region: Region, addr: u16) -> u8 {
        match region {
            Region::Ram => self.ram.read(addr),
            Region::PpuRegisters => PpuRegisters::read(&self.ppu, addr),
            Region::ApuIoRegisters => ApuRegisters::read(&self.apu, addr),
            Region::Cartridge => self.cartridge.read(addr),
        }
    }
}

fn rejected(err: BusError) -> BusError {
    warn!(%err, "bus write rejected");
    err
}
