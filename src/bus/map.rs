/*!
CPU memory map: region decoding for the 16-bit address space.

Address map (CPU):
- $0000-$1FFF: 2 KiB internal RAM, mirrored every $0800
- $2000-$2007: graphics-device (PPU) registers
- $2008-$3FFF: unmapped
- $4000-$4017: audio / IO registers
- $4018-$401F: unmapped
- $4020-$FFFF: cartridge-mapped program ROM
- $FFFC/$FFFD: reset vector (inside the cartridge window)

Regions are disjoint and resolved in the order RAM, PPU registers, APU/IO
registers, cartridge. Each region enforces its own upper bound; an access never
spills from one region into the next without being checked again.
*/

use std::fmt;

/// One past the highest CPU address.
pub const ADDRESS_SPACE_END: usize = 0x1_0000;

/// Logical CPU address window of a mapped device.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Ram,
    PpuRegisters,
    ApuIoRegisters,
    Cartridge,
}

impl Region {
    /// Resolution order for reads and writes.
    pub const ALL: [Region; 4] = [
        Region::Ram,
        Region::PpuRegisters,
        Region::ApuIoRegisters,
        Region::Cartridge,
    ];

    /// First CPU address covered by the region.
    #[inline]
    pub const fn start(self) -> u16 {
        match self {
            Region::Ram => 0x0000,
            Region::PpuRegisters => 0x2000,
            Region::ApuIoRegisters => 0x4000,
            Region::Cartridge => 0x4020,
        }
    }

    /// Last CPU address covered by the region (inclusive).
    #[inline]
    pub const fn end(self) -> u16 {
        match self {
            Region::Ram => 0x1FFF,
            Region::PpuRegisters => 0x2007,
            Region::ApuIoRegisters => 0x4017,
            Region::Cartridge => 0xFFFF,
        }
    }

    /// Logical size of the window in bytes (RAM counts its mirrors).
    #[inline]
    pub const fn len(self) -> usize {
        (self.end() as usize) - (self.start() as usize) + 1
    }

    #[inline]
    pub const fn contains(self, addr: u16) -> bool {
        addr >= self.start() && addr <= self.end()
    }

    /// Find the region that owns `addr`, or `None` for the unmapped gaps.
    pub fn resolve(addr: u16) -> Option<Region> {
        Self::ALL.into_iter().find(|r| r.contains(addr))
    }

    /// Bytes available in this region from `addr` to its end.
    #[inline]
    pub fn room_from(self, addr: u16) -> usize {
        debug_assert!(self.contains(addr));
        (self.end() as usize) - (addr as usize) + 1
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Region::Ram => "RAM",
            Region::PpuRegisters => "PPU register",
            Region::ApuIoRegisters => "APU/IO register",
            Region::Cartridge => "cartridge",
        };
        write!(f, "{name} (${:04X}-${:04X})", self.start(), self.end())
    }
}

/// A contiguous run of a write that lands in a single region.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Segment {
    pub region: Region,
    pub addr: u16,
    /// Offset of this segment's first byte within the caller's buffer.
    pub data_offset: usize,
    pub len: usize,
}

/// Split `[addr, addr + len)` into per-region segments.
///
/// Each region takes as many bytes as fit before its end; the remainder is
/// resolved afresh at the next address. Returns the first unmapped address if
/// the range touches a gap. The caller has already rejected ranges that run
/// past the 16-bit space.
pub(crate) fn segments(addr: u16, len: usize) -> Result<Vec<Segment>, u16> {
    debug_assert!(addr as usize + len <= ADDRESS_SPACE_END);

    let mut out = Vec::with_capacity(2);
    let mut cursor = addr as usize;
    let mut data_offset = 0usize;
    let end = addr as usize + len;

    while cursor < end {
        let here = cursor as u16;
        let region = Region::resolve(here).ok_or(here)?;
        let take = region.room_from(here).min(end - cursor);
        out.push(Segment {
            region,
            addr: here,
            data_offset,
            len: take,
        });
        cursor += take;
        data_offset += take;
    }

    Ok(out)
}
