#![doc = r#"
ricoh2a03 library crate.

A cycle-aware NES-class 6502 CPU core: instruction catalog, addressing-mode
resolution, execution semantics, and the CPU-visible memory bus with
mirroring and trapping device windows. Rendering, audio synthesis,
cartridge/mapper logic, and multi-device scheduling are external concerns;
a driver populates memory, attaches device capabilities to the reserved
register windows, and calls `Cpu::step`.

Modules:
- bus: memory bus (2 KiB mirrored RAM, video/audio device windows, open
  memory), `Device` capability trait, `BusError`
- cpu: 6502 core (facade + state + catalog + resolver + dispatch modules)

In tests, shared program-loading helpers are available under
`crate::test_utils`.
"#]

// Core modules
pub mod bus;
pub mod cpu;

// Re-export commonly used types at the crate root for convenience.
pub use bus::{Bus, BusError, Device, DeviceWindow};
pub use cpu::core::Cpu;
pub use cpu::state::CpuState;

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;
