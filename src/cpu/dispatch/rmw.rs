/*!
rmw.rs - Shift / rotate / memory increment-decrement mnemonic handler

Overview
========
Executes ASL / LSR / ROL / ROR (accumulator or memory forms) and the
memory INC / DEC instructions through the shared `modify` choreography:
accumulator targets mutate the register in place, memory targets perform
the hardware read -> dummy-write-old -> write-new sequence.

Flag rules
==========
- Shifts: Carry takes the bit shifted out; N/Z from the result.
- Rotates: the vacated bit is filled from the *current* Carry flag, then
  Carry takes the bit shifted out.
- INC/DEC: wrap mod 256; N/Z only, Carry untouched.

The abs,X forms carry their fixed 7-cycle cost in the catalog; no
conditional page-cross penalty applies to this family.
*/

use crate::bus::{Bus, BusError};
use crate::cpu::addressing::Resolved;
use crate::cpu::catalog::{Entry, Mnemonic};
use crate::cpu::execute::{get_flag, modify, set_flag, update_zn};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::CARRY;

pub(super) fn handle<C: CpuRegs>(
    entry: &Entry,
    cpu: &mut C,
    bus: &mut Bus,
    operand: Resolved,
    _cycles: &mut u32,
) -> Result<bool, BusError> {
    let result = match entry.mnemonic {
        Mnemonic::Asl => modify(cpu, bus, operand.loc, |c, old| {
            set_flag(c, CARRY, (old & 0x80) != 0);
            old << 1
        })?,
        Mnemonic::Lsr => modify(cpu, bus, operand.loc, |c, old| {
            set_flag(c, CARRY, (old & 0x01) != 0);
            old >> 1
        })?,
        Mnemonic::Rol => modify(cpu, bus, operand.loc, |c, old| {
            let carry_in = if get_flag(c, CARRY) { 1 } else { 0 };
            set_flag(c, CARRY, (old & 0x80) != 0);
            (old << 1) | carry_in
        })?,
        Mnemonic::Ror => modify(cpu, bus, operand.loc, |c, old| {
            let carry_in = if get_flag(c, CARRY) { 0x80 } else { 0 };
            set_flag(c, CARRY, (old & 0x01) != 0);
            (old >> 1) | carry_in
        })?,
        Mnemonic::Inc => modify(cpu, bus, operand.loc, |_, old| old.wrapping_add(1))?,
        Mnemonic::Dec => modify(cpu, bus, operand.loc, |_, old| old.wrapping_sub(1))?,
        _ => return Ok(false),
    };
    update_zn(cpu, result);
    Ok(true)
}
