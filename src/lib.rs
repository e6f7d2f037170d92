#![doc = r#"
nescore library crate.

Core execution hardware of an 8-bit console: a table-driven 6502 CPU over a
memory-mapped bus, plus the iNES cartridge loader and a console run loop.

Modules:
- apu: audio/IO register window stub (24 latched registers)
- bus: address-space router over RAM, device register windows and cartridge space
- cartridge: iNES v1 header and body parsing
- console: owns one Bus and one Cpu; insert/reset/run/next_frame
- cpu: 6502 core (state + addressing + opcode table + dispatch + façade)
- error: typed errors for every fallible operation
- loader: copies a parsed cartridge into memory through the Bus
- ppu: graphics register window stub plus graphics memory

In tests, shared iNES builders are available under `crate::test_utils`.
"#]

pub mod apu;
pub mod bus;
pub mod cartridge;
pub mod console;
pub mod cpu;
pub mod error;
pub mod loader;
pub mod ppu;

pub use bus::Bus;
pub use cartridge::{Cartridge, CartridgeHeader, Mirroring};
pub use console::Console;
pub use cpu::Cpu;
pub use error::{BusError, CartridgeError, ConsoleError, CpuError};

#[cfg(test)]
pub mod test_utils;
