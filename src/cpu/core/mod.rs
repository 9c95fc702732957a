/*!
core::Cpu - Canonical 6502 CPU façade wrapping `CpuState`.

The façade owns the register file and exposes the operations an external
driver needs: reset, single-step, bounded run, externally-raised interrupt
entry, and direct register/flag inspection for debuggers and tests.

Each step is fetch -> decode -> resolve -> execute -> PC advance or
override, with no state carried between steps beyond the register file.
Stopping is the caller's concern: a driver that wants to pause simply does
not call `step` again. Bus faults come back as `Err(BusError)`; whatever
the instruction committed before the fault remains committed.
*/

use crate::bus::{Bus, BusError};
use crate::cpu::state::{CpuState, NEGATIVE, ZERO};

#[derive(Debug, Clone)]
pub struct Cpu {
    state: CpuState,
}

impl Cpu {
    /// Construct a new CPU with power-up defaults.
    pub fn new() -> Self {
        Self {
            state: CpuState::new(),
        }
    }

    /// Return immutable reference to internal state (for inspection / testing).
    pub fn state(&self) -> &CpuState {
        &self.state
    }

    /// Return mutable reference to internal state (escape hatch for
    /// harnesses that prime registers directly).
    pub fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }

    /// Reset internal state and load PC from the reset vector.
    pub fn reset(&mut self, bus: &mut Bus) -> Result<(), BusError> {
        self.state.reset(bus)
    }

    /// True if execution has been halted (BRK or a JAM opcode).
    pub fn is_halted(&self) -> bool {
        self.state.halted
    }

    /// Set or clear the halted flag.
    pub fn set_halted(&mut self, h: bool) {
        self.state.halted = h;
    }

    /// Diagnosed no-op executions of opcodes without defined semantics.
    pub fn unimplemented_op_count(&self) -> u64 {
        self.state.unimplemented_ops
    }

    // ---------------------------------------------------------------------
    // Register accessors (read)
    // ---------------------------------------------------------------------
    pub fn a(&self) -> u8 {
        self.state.a
    }
    pub fn x(&self) -> u8 {
        self.state.x
    }
    pub fn y(&self) -> u8 {
        self.state.y
    }
    pub fn sp(&self) -> u8 {
        self.state.sp
    }
    pub fn pc(&self) -> u16 {
        self.state.pc
    }
    pub fn status(&self) -> u8 {
        self.state.status
    }

    // ---------------------------------------------------------------------
    // Register mutators (write)
    // ---------------------------------------------------------------------
    pub fn set_a(&mut self, v: u8) {
        self.state.a = v;
    }
    pub fn set_x(&mut self, v: u8) {
        self.state.x = v;
    }
    pub fn set_y(&mut self, v: u8) {
        self.state.y = v;
    }
    pub fn set_sp(&mut self, v: u8) {
        self.state.sp = v;
    }
    pub fn set_pc(&mut self, v: u16) {
        self.state.pc = v;
    }
    pub fn set_status(&mut self, v: u8) {
        self.state.status = v;
    }

    // ---------------------------------------------------------------------
    // Flag helpers
    // ---------------------------------------------------------------------
    pub fn set_flag(&mut self, mask: u8, on: bool) {
        self.state.assign_flag(mask, on);
    }

    pub fn get_flag(&self, mask: u8) -> bool {
        self.state.is_flag_set(mask)
    }

    pub fn update_zn(&mut self, v: u8) {
        self.set_flag(ZERO, v == 0);
        self.set_flag(NEGATIVE, (v & 0x80) != 0);
    }

    // ---------------------------------------------------------------------
    // Execution
    // ---------------------------------------------------------------------

    /// Execute one instruction and return the cycles it consumed,
    /// including branch and page-cross penalties.
    pub fn step(&mut self, bus: &mut Bus) -> Result<u32, BusError> {
        crate::cpu::dispatch::step(&mut self.state, bus)
    }

    /// Convenience: run up to `max_instructions` or until halted.
    pub fn run(&mut self, bus: &mut Bus, max_instructions: usize) -> Result<(), BusError> {
        for _ in 0..max_instructions {
            if self.is_halted() {
                break;
            }
            self.step(bus)?;
        }
        Ok(())
    }

    /// Enter the non-maskable interrupt sequence (vector $FFFA).
    /// Returns the 7-cycle entry cost. When to raise NMI is the external
    /// driver's decision.
    pub fn nmi(&mut self, bus: &mut Bus) -> Result<u32, BusError> {
        crate::cpu::dispatch::interrupt(&mut self.state, bus, 0xFFFA)
    }

    /// Enter the maskable interrupt sequence (vector $FFFE) unless the I
    /// flag masks it. Returns the cycles consumed (0 when masked).
    pub fn irq(&mut self, bus: &mut Bus) -> Result<u32, BusError> {
        if self.state.is_flag_set(crate::cpu::state::IRQ_DISABLE) {
            return Ok(0);
        }
        crate::cpu::dispatch::interrupt(&mut self.state, bus, 0xFFFE)
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
