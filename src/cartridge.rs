/*!
Cartridge image parsing for the iNES (v1) file format.

Features:
- Parse the 16-byte iNES header from bytes or a file path
- Extract the PRG ROM and CHR ROM blocks (skipping a 512-byte trainer when flagged)
- Decode mirroring, battery-backed RAM, trainer presence, mapper ID and the NES 2.0 marker

Layout:
- 0-3: magic `NES<1A>`
- 4: PRG ROM size in 16 KiB units
- 5: CHR ROM size in 8 KiB units
- 6: flags A (mirroring, battery, trainer, four-screen, mapper low nibble)
- 7: flags B (console type / NES 2.0 marker, mapper high nibble)
- 8-15: not interpreted
- body: [trainer 512] PRG ROM, CHR ROM

Notes:
- Parsing is all-or-nothing. A `Cartridge` only exists once both blocks are
  known to be present in full; extra trailing bytes are ignored.
- Mapper ID and NES 2.0 flag are reported, not acted on: the loader places
  PRG/CHR flat regardless of mapper.
*/

use std::fs;
use std::path::Path;

use crate::error::CartridgeError;

pub const INES_MAGIC: [u8; 4] = *b"NES\x1A";
pub const HEADER_LEN: usize = 16;
pub const TRAINER_LEN: usize = 512;
pub const PRG_ROM_UNIT: usize = 16 * 1024;
pub const CHR_ROM_UNIT: usize = 8 * 1024;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mirroring {
    Horizontal,
    Vertical,
    FourScreen,
}

/// Decoded 16-byte iNES header.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CartridgeHeader {
    pub prg_rom_units: u8,
    pub chr_rom_units: u8,
    pub flags6: u8,
    pub flags7: u8,
}

impl CartridgeHeader {
    /// Parse and validate the header at the start of `data`.
    pub fn parse(data: &[u8]) -> Result<Self, CartridgeError> {
        let header: &[u8; HEADER_LEN] = data
            .get(..HEADER_LEN)
            .and_then(|h| h.try_into().ok())
            .ok_or(CartridgeError::TooShort { len: data.len() })?;

        let magic = [header[0], header[1], header[2], header[3]];
        if magic != INES_MAGIC {
            return Err(CartridgeError::BadMagic(magic));
        }

        Ok(Self {
            prg_rom_units: header[4],
            chr_rom_units: header[5],
            flags6: header[6],
            flags7: header[7],
        })
    }

    pub fn prg_rom_len(&self) -> usize {
        self.prg_rom_units as usize * PRG_ROM_UNIT
    }

    pub fn chr_rom_len(&self) -> usize {
        self.chr_rom_units as usize * CHR_ROM_UNIT
    }

    /// High nibble from flags B, low nibble from the top of flags A.
    pub fn mapper_id(&self) -> u8 {
        (self.flags7 & 0xF0) | (self.flags6 >> 4)
    }

    pub fn mirroring(&self) -> Mirroring {
        if self.flags6 & 0b0000_1000 != 0 {
            Mirroring::FourScreen
        } else if self.flags6 & 0b0000_0001 != 0 {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        }
    }

    pub fn battery_backed(&self) -> bool {
        self.flags6 & 0b0000_0010 != 0
    }

    pub fn has_trainer(&self) -> bool {
        self.flags6 & 0b0000_0100 != 0
    }

    /// NES 2.0 images mark bits 2-3 of flags B as `10`.
    pub fn is_nes2(&self) -> bool {
        self.flags7 & 0x0C == 0x08
    }
}

/// A parsed cartridge image: header plus its two ROM blocks.
#[derive(Clone, PartialEq, Eq)]
pub struct Cartridge {
    header: CartridgeHeader,
    prg_rom: Vec<u8>,
    chr_rom: Vec<u8>,
}

impl std::fmt::Debug for Cartridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cartridge")
            .field("mapper_id", &self.header.mapper_id())
            .field("mirroring", &self.header.mirroring())
            .field("battery", &self.header.battery_backed())
            .field("has_trainer", &self.header.has_trainer())
            .field("prg_rom_len", &self.prg_rom.len())
            .field("chr_rom_len", &self.chr_rom.len())
            .finish()
    }
}

impl Cartridge {
    /// Parse a complete iNES image held in memory.
    pub fn from_ines_bytes(data: &[u8]) -> Result<Self, CartridgeError> {
        let header = CartridgeHeader::parse(data)?;

        let mut offset = HEADER_LEN;
        if header.has_trainer() {
            take(data, offset, TRAINER_LEN, "trainer")?;
            offset += TRAINER_LEN;
        }

        let prg_rom = take(data, offset, header.prg_rom_len(), "PRG ROM")?.to_vec();
        offset += prg_rom.len();
        let chr_rom = take(data, offset, header.chr_rom_len(), "CHR ROM")?.to_vec();

        Ok(Self {
            header,
            prg_rom,
            chr_rom,
        })
    }

    /// Read the file at `path` fully and parse it.
    pub fn from_ines_file<P: AsRef<Path>>(path: P) -> Result<Self, CartridgeError> {
        let data = fs::read(path)?;
        Self::from_ines_bytes(&data)
    }

    pub fn header(&self) -> &CartridgeHeader {
        &self.header
    }

    pub fn prg_rom(&self) -> &[u8] {
        &self.prg_rom
    }

    pub fn chr_rom(&self) -> &[u8] {
        &self.chr_rom
    }

    pub fn mapper_id(&self) -> u8 {
        self.header.mapper_id()
    }

    pub fn mirroring(&self) -> Mirroring {
        self.header.mirroring()
    }
}

fn take<'a>(
    data: &'a [u8],
    offset: usize,
    len: usize,
    section: &'static str,
) -> Result<&'a [u8], CartridgeError> {
    let available = data.len().saturating_sub(offset);
    data.get(offset..offset + len)
        .ok_or(CartridgeError::Truncated {
            section,
            needed: len,
            available,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::build_ines;

    #[test]
    fn parses_sizes_and_blocks() {
        let rom = build_ines(2, 1, 0x00, 0x00, None);
        let cart = Cartridge::from_ines_bytes(&rom).unwrap();
        assert_eq!(cart.prg_rom().len(), 32 * 1024);
        assert_eq!(cart.chr_rom().len(), 8 * 1024);
        assert_eq!(cart.header().prg_rom_units, 2);
        assert_eq!(cart.header().chr_rom_units, 1);
    }

    #[test]
    fn rejects_bad_magic() {
        let mut rom = build_ines(1, 1, 0, 0, None);
        rom[3] = 0x00;
        let err = Cartridge::from_ines_bytes(&rom).unwrap_err();
        assert!(matches!(err, CartridgeError::BadMagic([0x4E, 0x45, 0x53, 0x00])));
    }

    #[test]
    fn rejects_short_header() {
        let err = Cartridge::from_ines_bytes(b"NES\x1A\x01").unwrap_err();
        assert!(matches!(err, CartridgeError::TooShort { len: 5 }));
    }

    #[test]
    fn rejects_truncated_chr() {
        let mut rom = build_ines(1, 1, 0, 0, None);
        rom.truncate(rom.len() - 1);
        let err = Cartridge::from_ines_bytes(&rom).unwrap_err();
        assert!(matches!(
            err,
            CartridgeError::Truncated {
                section: "CHR ROM",
                needed: 8192,
                available: 8191
            }
        ));
    }

    #[test]
    fn skips_trainer() {
        let trainer = [0x77u8; TRAINER_LEN];
        let mut rom = build_ines(1, 0, 0b0000_0100, 0, Some(&trainer));
        rom[HEADER_LEN + TRAINER_LEN] = 0xA9;
        let cart = Cartridge::from_ines_bytes(&rom).unwrap();
        assert!(cart.header().has_trainer());
        assert_eq!(cart.prg_rom()[0], 0xA9);
        assert!(cart.chr_rom().is_empty());
    }

    #[test]
    fn header_flag_decoding() {
        let h = CartridgeHeader {
            prg_rom_units: 1,
            chr_rom_units: 1,
            flags6: 0x13,
            flags7: 0x48,
        };
        assert_eq!(h.mapper_id(), 0x41);
        assert_eq!(h.mirroring(), Mirroring::Vertical);
        assert!(h.battery_backed());
        assert!(!h.has_trainer());
        assert!(h.is_nes2());

        let four = CartridgeHeader { flags6: 0x08, ..h };
        assert_eq!(four.mirroring(), Mirroring::FourScreen);
        let horiz = CartridgeHeader { flags6: 0x00, ..h };
        assert_eq!(horiz.mirroring(), Mirroring::Horizontal);
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("nescore-does-not-exist.nes");
        let err = Cartridge::from_ines_file(&path).unwrap_err();
        assert!(matches!(err, CartridgeError::Io(_)));
    }
}
