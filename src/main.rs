use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use nescore::Console;

#[derive(Parser, Debug)]
#[command(
    name = "nescore",
    about = "Run an iNES cartridge on the 6502 core and print the final CPU state."
)]
struct Args {
    /// iNES (.nes) image to insert.
    #[arg(value_name = "ROM")]
    rom: PathBuf,

    /// Number of frames to execute after reset.
    #[arg(long, default_value_t = 1)]
    frames: u32,

    /// Execute exactly N instructions instead of whole frames.
    #[arg(long, value_name = "N")]
    instructions: Option<usize>,

    /// Log filter used when RUST_LOG is unset (e.g. "debug", "nescore=trace").
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("invalid --log-level filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut console = Console::new();
    console
        .insert_cartridge(&args.rom)
        .with_context(|| format!("failed to insert {}", args.rom.display()))?;

    let cycles: u64 = match args.instructions {
        Some(n) => console.run(n)?,
        None => {
            console.reset()?;
            let mut total = 0u64;
            for _ in 0..args.frames {
                total += u64::from(console.next_frame()?);
            }
            total
        }
    };

    let cpu = console.cpu();
    let m0200 = console.bus().read_u8(0x0200)?;
    println!("cycles: {cycles}");
    println!("A: 0x{:02X}", cpu.a());
    println!("X: 0x{:02X}", cpu.x());
    println!("Y: 0x{:02X}", cpu.y());
    println!("SP: 0x{:02X}", cpu.sp());
    println!("PC: 0x{:04X}", cpu.pc());
    println!("P (flags): 0b{:08b}", cpu.status());
    println!("mem[0x0200]: 0x{:02X}", m0200);
    Ok(())
}
