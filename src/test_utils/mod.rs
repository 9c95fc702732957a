//! Shared test utilities for loading small programs into a bus.
//!
//! These helpers de-duplicate setup logic across the CPU and Bus module
//! tests. Programs are placed in open memory at $8000 (the conventional
//! program origin) and the reset vector is pointed there; an attached
//! cartridge or mapper is out of scope, so this is all a test needs.

#![allow(dead_code)]

use crate::bus::Bus;
use crate::cpu::core::Cpu;

/// Program origin used by the test suite.
pub const TEST_ORG: u16 = 0x8000;

/// Build a bus with `prg` loaded at $8000 and the reset vector set.
pub fn program_bus(prg: &[u8]) -> Bus {
    let mut bus = Bus::new();
    bus.load(TEST_ORG, prg).expect("load program");
    bus.load(0xFFFC, &[(TEST_ORG & 0xFF) as u8, (TEST_ORG >> 8) as u8])
        .expect("set reset vector");
    bus
}

/// Build a bus with `prg` at $8000 and a CPU already reset into it.
pub fn boot(prg: &[u8]) -> (Cpu, Bus) {
    let mut bus = program_bus(prg);
    let mut cpu = Cpu::new();
    cpu.reset(&mut bus).expect("reset");
    (cpu, bus)
}
