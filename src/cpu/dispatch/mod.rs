/*!
dispatch - Orchestrator for a single 6502 CPU step.

Overview
========
Coordinates one instruction:
1. Fetch the opcode and advance PC.
2. Look up the catalog entry (mnemonic, addressing mode, base cycles).
3. Resolve the operand location once, per the entry's mode.
4. Offer the instruction to the mnemonic-family handlers in turn
   (load/store, logical, arithmetic, compare, branches, rmw, control_flow,
   misc). Handlers may bump `cycles` (page-cross penalties, branch
   penalties) but never change the base count the catalog supplied.
5. If no family claims the mnemonic, the opcode has catalog metadata but no
   execution semantics: execute as a no-op (operand bytes already consumed
   by the resolver), emit a `log::warn!` diagnostic, and count it.

Cycle accounting
================
`step` returns the total cycles the instruction consumed, including dynamic
penalties. This is the step operation's side-channel output for an external
scheduler; nothing here sleeps or ticks other devices.

Interrupt entry
===============
`interrupt` implements the 7-cycle hardware entry sequence (push PC, push
status with Break clear, set I, load vector). The decision *when* to raise
an interrupt belongs to the external driver; the facade exposes `nmi`/`irq`
on top of this.

Error handling
==============
Bus faults abort the step where they occur and bubble to the caller.
Register/flag updates committed before the fault stay committed.
*/

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control_flow;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod misc;
pub(crate) mod rmw;

use crate::bus::{Bus, BusError};
use crate::cpu::addressing::resolve;
use crate::cpu::catalog;
use crate::cpu::execute::{push_status_with_break, push_word, set_flag};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::IRQ_DISABLE;

#[inline]
fn add_page_cross_penalty(cycles: &mut u32, crossed: bool) {
    if crossed {
        *cycles += 1;
    }
}

/// Execute one CPU step and return the cycles consumed.
pub(crate) fn step<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) -> Result<u32, BusError> {
    let opcode = bus.read(cpu.pc())?;
    cpu.advance_pc_one();

    let entry = catalog::entry(opcode);
    let operand = resolve(cpu, bus, entry.mode)?;
    let mut cycles = entry.base_cycles as u32;

    if load_store::handle(entry, cpu, bus, operand, &mut cycles)?
        || logical::handle(entry, cpu, bus, operand, &mut cycles)?
        || arithmetic::handle(entry, cpu, bus, operand, &mut cycles)?
        || compare::handle(entry, cpu, bus, operand, &mut cycles)?
        || branches::handle(entry, cpu, operand, &mut cycles)
        || rmw::handle(entry, cpu, bus, operand, &mut cycles)?
        || control_flow::handle(entry, cpu, bus, operand, &mut cycles)?
        || misc::handle(entry, cpu, bus, operand, &mut cycles)?
    {
        return Ok(cycles);
    }

    // Catalog metadata exists but no family defines semantics: diagnosed
    // no-op. The resolver already consumed the operand bytes.
    log::warn!(
        "unimplemented opcode ${opcode:02X} ({} {:?}) executed as no-op",
        entry.mnemonic.as_str(),
        entry.mode,
    );
    cpu.record_unimplemented();
    Ok(cycles)
}

/// Hardware interrupt entry sequence (push PC, status with Break=0; set I;
/// load vector). Returns the 7-cycle entry cost.
pub(crate) fn interrupt<C: CpuRegs>(
    cpu: &mut C,
    bus: &mut Bus,
    vector_addr: u16,
) -> Result<u32, BusError> {
    let current_pc = cpu.pc();
    push_word(cpu, bus, current_pc)?;
    push_status_with_break(cpu, bus, false)?;
    set_flag(cpu, IRQ_DISABLE, true);
    let new_pc = bus.read_word(vector_addr)?;
    cpu.set_pc(new_pc);
    log::trace!("interrupt entry via ${vector_addr:04X} -> ${new_pc:04X}");
    Ok(7)
}
