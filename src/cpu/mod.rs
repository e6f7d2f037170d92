/*!
cpu::mod - Public façade for the 6502 CPU core.

```text
    state.rs        - Registers and the raw status byte with named flag views.
    addressing.rs   - Addressing modes, instruction sizes, operand resolution.
    execute.rs      - Shared semantic helpers (stack, loads, compare, branch).
    dispatch/       - One operation per mnemonic, grouped by family.
    table.rs        - 256-entry opcode table, `lookup`, `disassemble`.
    core/           - `Cpu`: reset protocol and the single-instruction step.
```

Usage:
```rust,ignore
use nescore::{Bus, Cpu};

let mut bus = Bus::new();
let mut cpu = Cpu::new();
cpu.reset(&bus)?;
let cycles = cpu.execute(&mut bus)?;
```
*/

pub mod addressing;
pub mod core;
pub mod dispatch;
pub mod execute;
pub mod state;
pub mod table;

pub use crate::cpu::addressing::{AddressingMode, Instruction, instruction_size};
pub use crate::cpu::core::{Cpu, CpuPhase, RESET_VECTOR};
pub use crate::cpu::state::{
    BREAK, CARRY, CpuState, DECIMAL, IRQ_DISABLE, NEGATIVE, OVERFLOW, RESERVED, ZERO,
};
pub use crate::cpu::table::{Opcode, disassemble, lookup};
