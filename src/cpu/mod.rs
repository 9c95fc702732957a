/*!
cpu::mod - Public façade for the 6502 CPU core.

Module layout:

```text
state.rs        - Core CPU state (registers, flags) + constructors.
regs.rs         - CpuRegs trait (generic register / flag access).
addressing.rs   - Addressing mode enum, tagged operand locations, and
                  the resolver.
catalog.rs      - Static 256-entry opcode catalog (mnemonic, mode,
                  base cycles).
execute.rs      - Instruction semantic helpers (ALU, stack, RMW, branch).
dispatch/       - Single-step orchestrator + mnemonic-family handlers.
core/           - The `Cpu` façade (step / run / reset / interrupts).
```

The public surface is the `Cpu` façade (wrapping `CpuState`). Downstream
code should not rely on internal module layout; internal organization may
evolve.

Usage:
```rust
use ricoh2a03::{Bus, Cpu};

let mut bus = Bus::new();
bus.load(0x8000, &[0xA9, 0x01, 0x00]).unwrap(); // LDA #$01; BRK
bus.load(0xFFFC, &[0x00, 0x80]).unwrap();
let mut cpu = Cpu::new();
cpu.reset(&mut bus).unwrap();
while !cpu.is_halted() {
    cpu.step(&mut bus).unwrap();
}
assert_eq!(cpu.a(), 0x01);
```
*/

pub mod addressing;
pub mod catalog;
pub mod core;
pub mod dispatch;
pub mod execute;
pub mod regs;
pub mod state;

// Re-exports:
// - Cpu (facade over CpuState)
// - CpuState (raw state; exposed for tests, snapshots, trait impls)
// - Catalog types and flag constants (canonical bit masks)
pub use crate::cpu::addressing::AddressingMode;
pub use crate::cpu::catalog::{CATALOG, Entry, Mnemonic};
pub use crate::cpu::core::Cpu;
pub use crate::cpu::regs::CpuRegs;
pub use crate::cpu::state::{
    BREAK, CARRY, CpuState, DECIMAL, IRQ_DISABLE, NEGATIVE, OVERFLOW, UNUSED, ZERO,
};
