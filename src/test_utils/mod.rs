//! Shared test utilities: in-memory iNES images and a ready-to-run CPU/Bus pair.
//!
//! Notes on the iNES fields the builders fill:
//! - bytes[0..4] = b"NES\x1A"
//! - byte 4 = PRG ROM size in 16 KiB units
//! - byte 5 = CHR ROM size in 8 KiB units
//! - byte 6 / 7 = flags A / B, passed through verbatim
//! - bytes 8..15 = zero
//!
//! PRG bytes are filled with 0xAA and CHR bytes with 0xCC so tests can tell
//! loaded data from untouched memory.

#![allow(dead_code)]

use crate::bus::Bus;
use crate::cartridge::{CHR_ROM_UNIT, HEADER_LEN, PRG_ROM_UNIT, TRAINER_LEN};
use crate::cpu::{Cpu, RESET_VECTOR};

/// Build an iNES (v1) image with the given unit counts and flag bytes.
pub fn build_ines(
    prg_16k: usize,
    chr_8k: usize,
    flags6: u8,
    flags7: u8,
    trainer: Option<&[u8; TRAINER_LEN]>,
) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(
        HEADER_LEN
            + trainer.map_or(0, |t| t.len())
            + prg_16k * PRG_ROM_UNIT
            + chr_8k * CHR_ROM_UNIT,
    );

    bytes.extend_from_slice(b"NES\x1A");
    bytes.push(prg_16k as u8);
    bytes.push(chr_8k as u8);
    bytes.push(flags6);
    bytes.push(flags7);
    bytes.extend_from_slice(&[0u8; 8]);

    if let Some(t) = trainer {
        bytes.extend_from_slice(t);
    }
    bytes.resize(bytes.len() + prg_16k * PRG_ROM_UNIT, 0xAA);
    bytes.resize(bytes.len() + chr_8k * CHR_ROM_UNIT, 0xCC);
    bytes
}

/// Build an NROM-128 image whose single PRG unit starts with `prg` and whose
/// vectors all point at `reset` (default $8000).
pub fn build_nrom_with_prg(prg: &[u8], chr_8k: usize, reset: Option<u16>) -> Vec<u8> {
    assert!(prg.len() <= PRG_ROM_UNIT, "program must fit one 16 KiB unit");

    let mut rom = build_ines(1, chr_8k, 0, 0, None);
    let bank = &mut rom[HEADER_LEN..HEADER_LEN + PRG_ROM_UNIT];
    bank[..prg.len()].copy_from_slice(prg);
    let reset = reset.unwrap_or(0x8000);
    set_vectors_in_prg(bank, reset, reset, reset);
    rom
}

/// Write NMI, RESET and IRQ/BRK vectors into the last six bytes of a 16 KiB
/// or 32 KiB PRG block.
pub fn set_vectors_in_prg(prg: &mut [u8], reset: u16, nmi: u16, irq: u16) {
    assert!(
        prg.len() == PRG_ROM_UNIT || prg.len() == 2 * PRG_ROM_UNIT,
        "unsupported PRG length {}",
        prg.len()
    );
    let base = prg.len() - 6;
    prg[base..base + 2].copy_from_slice(&nmi.to_le_bytes());
    prg[base + 2..base + 4].copy_from_slice(&reset.to_le_bytes());
    prg[base + 4..base + 6].copy_from_slice(&irq.to_le_bytes());
}

/// A reset CPU whose program `prg` sits at $8000, with the reset vector pointing there.
pub fn cpu_with_program(prg: &[u8]) -> (Cpu, Bus) {
    let mut bus = Bus::new();
    if !prg.is_empty() {
        bus.write(0x8000, prg).unwrap();
    }
    bus.write_value::<u16>(RESET_VECTOR, 0x8000).unwrap();
    let mut cpu = Cpu::new();
    cpu.reset(&bus).unwrap();
    (cpu, bus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_basic_ines() {
        let rom = build_ines(2, 1, 0x01, 0x00, None);
        assert_eq!(&rom[0..4], b"NES\x1A");
        assert_eq!(rom[4], 2);
        assert_eq!(rom[5], 1);
        assert_eq!(rom[6], 0x01);
        assert_eq!(rom.len(), 16 + 2 * 16 * 1024 + 8 * 1024);
    }

    #[test]
    fn writes_vectors_at_end_of_prg() {
        let mut prg = vec![0u8; 32 * 1024];
        set_vectors_in_prg(&mut prg, 0x8123, 0x8456, 0x8ABC);
        assert_eq!(&prg[0x7FFA..], &[0x56, 0x84, 0x23, 0x81, 0xBC, 0x8A]);
    }

    #[test]
    fn cpu_with_program_starts_at_8000() {
        let (cpu, bus) = cpu_with_program(&[0xEA]);
        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(bus.read_u8(0x8000).unwrap(), 0xEA);
    }
}
