//! Cartridge loader: copies a parsed iNES image into the console through the Bus.
//!
//! The image is parsed and every block is size-checked before the first byte
//! is written, so a rejected cartridge never leaves memory half-loaded.

use std::path::Path;

use tracing::{info, warn};

use crate::bus::{ADDRESS_SPACE_END, Bus};
use crate::cartridge::{Cartridge, PRG_ROM_UNIT};
use crate::error::{BusError, CartridgeError};
use crate::ppu::GRAPHICS_MEMORY_SIZE;

/// CPU address the first PRG ROM byte lands on.
pub const PRG_LOAD_ADDR: u16 = 0x8000;
/// Upper-bank address a lone 16 KiB PRG unit is mirrored to.
pub const PRG_MIRROR_ADDR: u16 = 0xC000;

/// Read the iNES file at `path` and copy its ROM blocks into `bus`.
pub fn load<P: AsRef<Path>>(path: P, bus: &mut Bus) -> Result<Cartridge, CartridgeError> {
    let path = path.as_ref();
    let cart = Cartridge::from_ines_file(path).inspect_err(|err| {
        warn!(path = %path.display(), %err, "cartridge rejected");
    })?;
    install(&cart, bus)?;
    info!(
        path = %path.display(),
        mapper = cart.mapper_id(),
        prg = cart.prg_rom().len(),
        chr = cart.chr_rom().len(),
        "cartridge inserted"
    );
    Ok(cart)
}

/// Same as [`load`] for an image already in memory.
pub fn load_bytes(data: &[u8], bus: &mut Bus) -> Result<Cartridge, CartridgeError> {
    let cart = Cartridge::from_ines_bytes(data).inspect_err(|err| {
        warn!(%err, "cartridge rejected");
    })?;
    install(&cart, bus)?;
    Ok(cart)
}

/// Write both ROM blocks of `cart` into `bus`.
///
/// PRG goes to $8000; a single 16 KiB unit is repeated at $C000 so the
/// vectors at $FFFA-$FFFF are populated. CHR goes to graphics offset 0.
pub fn install(cart: &Cartridge, bus: &mut Bus) -> Result<(), CartridgeError> {
    let prg = cart.prg_rom();
    let chr = cart.chr_rom();

    if PRG_LOAD_ADDR as usize + prg.len() > ADDRESS_SPACE_END {
        let err = BusError::OutOfRange {
            addr: PRG_LOAD_ADDR,
            len: prg.len(),
        };
        warn!(%err, "PRG ROM does not fit the cartridge window");
        return Err(err.into());
    }
    if chr.len() > GRAPHICS_MEMORY_SIZE {
        let err = BusError::GraphicsOverflow {
            offset: 0,
            len: chr.len(),
            capacity: GRAPHICS_MEMORY_SIZE,
        };
        warn!(%err, "CHR ROM does not fit graphics memory");
        return Err(err.into());
    }

    if prg.is_empty() {
        warn!("cartridge has no PRG ROM; reset vector will read as zero");
    } else {
        bus.write(PRG_LOAD_ADDR, prg)?;
        if prg.len() == PRG_ROM_UNIT {
            bus.write(PRG_MIRROR_ADDR, prg)?;
        }
    }
    if !chr.is_empty() {
        bus.write_graphics(0, chr)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{build_ines, build_nrom_with_prg};

    #[test]
    fn nrom128_is_mirrored_into_upper_bank() {
        let rom = build_nrom_with_prg(&[0xA9, 0x42], 1, Some(0x8000));
        let mut bus = Bus::new();
        load_bytes(&rom, &mut bus).unwrap();
        assert_eq!(bus.read_u8(0x8000).unwrap(), 0xA9);
        assert_eq!(bus.read_u8(0xC000).unwrap(), 0xA9);
        assert_eq!(bus.read_word(0xFFFC).unwrap(), 0x8000);
        assert_eq!(bus.ppu.graphics().peek(0), 0xCC);
    }

    #[test]
    fn nrom256_fills_both_banks_without_mirroring() {
        let mut rom = build_ines(2, 0, 0, 0, None);
        rom[16] = 0x11;
        rom[16 + 0x4000] = 0x22;
        let mut bus = Bus::new();
        load_bytes(&rom, &mut bus).unwrap();
        assert_eq!(bus.read_u8(0x8000).unwrap(), 0x11);
        assert_eq!(bus.read_u8(0xC000).unwrap(), 0x22);
    }

    #[test]
    fn oversized_prg_fails_before_writing() {
        let rom = build_ines(3, 0, 0, 0, None);
        let mut bus = Bus::new();
        let err = load_bytes(&rom, &mut bus).unwrap_err();
        assert!(matches!(
            err,
            CartridgeError::Bus(BusError::OutOfRange {
                addr: 0x8000,
                len: 0xC000
            })
        ));
        assert_eq!(bus.read_u8(0x8000).unwrap(), 0);
    }

    #[test]
    fn oversized_chr_fails_before_writing() {
        let rom = build_ines(1, 3, 0, 0, None);
        let mut bus = Bus::new();
        let err = load_bytes(&rom, &mut bus).unwrap_err();
        assert!(matches!(
            err,
            CartridgeError::Bus(BusError::GraphicsOverflow { len: 0x6000, .. })
        ));
        assert_eq!(bus.read_u8(0x8000).unwrap(), 0);
        assert_eq!(bus.ppu.graphics().peek(0), 0);
    }

    #[test]
    fn bad_magic_leaves_memory_unmodified() {
        let mut rom = build_nrom_with_prg(&[0xEA], 1, None);
        rom[0] = b'X';
        let mut bus = Bus::new();
        bus.write_u8(0x0010, 0x5A).unwrap();
        let ram_before = bus.ram().as_slice().to_vec();

        let err = load_bytes(&rom, &mut bus).unwrap_err();
        assert!(matches!(err, CartridgeError::BadMagic(_)));
        assert_eq!(bus.ram().as_slice(), &ram_before[..]);
        assert!(bus.cartridge_space().as_slice().iter().all(|&b| b == 0));
        assert!(bus.ppu.graphics().as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn load_from_file() {
        let rom = build_nrom_with_prg(&[0xA2, 0x07], 0, None);
        let path = std::env::temp_dir().join(format!("nescore-loader-{}.nes", std::process::id()));
        std::fs::write(&path, &rom).unwrap();

        let mut bus = Bus::new();
        let cart = load(&path, &mut bus).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(cart.prg_rom().len(), PRG_ROM_UNIT);
        assert_eq!(bus.read_u8(0x8001).unwrap(), 0x07);
    }

    #[test]
    fn bad_magic_file_leaves_memory_unmodified() {
        let mut rom = build_nrom_with_prg(&[0xEA], 1, None);
        rom[0] = b'X';
        let path =
            std::env::temp_dir().join(format!("nescore-badmagic-{}.nes", std::process::id()));
        std::fs::write(&path, &rom).unwrap();

        let mut bus = Bus::new();
        bus.write_u8(0x0010, 0x5A).unwrap();
        let ram_before = bus.ram().as_slice().to_vec();

        let err = load(&path, &mut bus).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, CartridgeError::BadMagic([b'X', b'E', b'S', 0x1A])));
        assert_eq!(bus.ram().as_slice(), &ram_before[..]);
        assert!(bus.cartridge_space().as_slice().iter().all(|&b| b == 0));
        assert!(bus.ppu.graphics().as_slice().iter().all(|&b| b == 0));
    }
}
