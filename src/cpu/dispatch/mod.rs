/*!
dispatch - Opcode family operations referenced by the opcode table

Overview
========
Every table entry points at one `Operation`. Operations are grouped by family:

```text
    load_store   - LDA / LDX / LDY / STA
    misc         - transfers, stack push/pull, flag set/clear, NOP
    arithmetic   - INX / INY / DEX / DEY
    compare      - CMP / CPX / CPY
    logical      - ORA / BIT
    rmw          - ASL (accumulator and memory)
    branches     - BPL / BMI / BVC / BVS / BCC / BCS / BNE / BEQ
    control_flow - BRK / JSR / RTI / RTS / JMP
    fallback     - `undefined`, the diagnostic no-op behind every unlisted opcode
```

Contract
========
- `Cpu::execute` has already fetched the operand bytes and advanced PC past the
  whole instruction before an operation runs.
- Operations mutate registers, flags and memory only; cycle counts come from
  the table, never from the operation.
- A bus failure aborts the operation and is returned unchanged.
*/

use crate::bus::Bus;
use crate::cpu::addressing::Instruction;
use crate::cpu::state::CpuState;
use crate::error::BusError;

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control_flow;
pub(crate) mod fallback;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod misc;
pub(crate) mod rmw;

/// Signature shared by every opcode operation.
pub type Operation = fn(&mut CpuState, &mut Bus, &Instruction) -> Result<(), BusError>;
