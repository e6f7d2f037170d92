/*!
Error types shared by the bus, CPU, cartridge loader and console.

Every fallible operation in the core returns one of these; nothing here is
fatal to the process. Callers decide whether to halt.
*/

use std::io;

use thiserror::Error;

use crate::bus::map::Region;

/// Failure of a single bus access. The access is aborted; memory is untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BusError {
    /// Write called with no data.
    #[error("empty write to ${addr:04X}")]
    EmptyWrite { addr: u16 },

    /// `addr + len` runs past the top of the 16-bit address space.
    #[error("access of {len} byte(s) at ${addr:04X} exceeds the 16-bit address space")]
    OutOfRange { addr: u16, len: usize },

    /// Address falls in a gap no region claims ($2008-$3FFF, $4018-$401F).
    #[error("unmapped address ${addr:04X}")]
    Unmapped { addr: u16 },

    /// A read straddles the end of the region that contains its start address,
    /// or a write segment does not fit the region it resolved to.
    #[error("{len} byte(s) at ${addr:04X} overflow the {region} window")]
    RegionOverflow {
        region: Region,
        addr: u16,
        len: usize,
    },

    /// Write into graphics memory past its end (CHR upload).
    #[error("{len} byte(s) at offset {offset:#06X} overflow graphics memory ({capacity} bytes)")]
    GraphicsOverflow {
        offset: usize,
        len: usize,
        capacity: usize,
    },
}

/// Failure to parse or validate an iNES image.
#[derive(Debug, Error)]
pub enum CartridgeError {
    #[error("failed to read cartridge file: {0}")]
    Io(#[from] io::Error),

    #[error("image is {len} bytes, too small for the 16-byte iNES header")]
    TooShort { len: usize },

    #[error("invalid iNES magic {0:02X?} (expected 4E 45 53 1A)")]
    BadMagic([u8; 4]),

    #[error("image truncated: {section} needs {needed} bytes, {available} available")]
    Truncated {
        section: &'static str,
        needed: usize,
        available: usize,
    },

    #[error("cartridge does not fit the console: {0}")]
    Bus(#[from] BusError),
}

/// Failure of a single `Cpu::execute` step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CpuError {
    #[error(transparent)]
    Bus(#[from] BusError),

    #[error("CPU has not been reset; PC holds no valid address")]
    NotReset,
}

/// Errors surfaced by [`crate::console::Console`].
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Cartridge(#[from] CartridgeError),

    #[error(transparent)]
    Bus(#[from] BusError),

    #[error(transparent)]
    Cpu(#[from] CpuError),
}
