/*!
logical.rs - Bitwise and bit-test mnemonic family handler

Overview
========
Executes AND / ORA / EOR directly against the accumulator, and BIT (Z from
A & M, N and V copied from the operand's top bits).

AND / ORA / EOR are read-class: +1 cycle on a flagged page cross. BIT has
no indexed modes, so the flag is never set for it.
*/

use crate::bus::{Bus, BusError};
use crate::cpu::addressing::Resolved;
use crate::cpu::catalog::{Entry, Mnemonic};
use crate::cpu::execute::{and, bit, eor, ora, read_location};
use crate::cpu::regs::CpuRegs;

use super::add_page_cross_penalty;

pub(super) fn handle<C: CpuRegs>(
    entry: &Entry,
    cpu: &mut C,
    bus: &mut Bus,
    operand: Resolved,
    cycles: &mut u32,
) -> Result<bool, BusError> {
    match entry.mnemonic {
        Mnemonic::And => {
            let v = read_location(cpu, bus, operand.loc)?;
            and(cpu, v);
            add_page_cross_penalty(cycles, operand.crossed);
        }
        Mnemonic::Ora => {
            let v = read_location(cpu, bus, operand.loc)?;
            ora(cpu, v);
            add_page_cross_penalty(cycles, operand.crossed);
        }
        Mnemonic::Eor => {
            let v = read_location(cpu, bus, operand.loc)?;
            eor(cpu, v);
            add_page_cross_penalty(cycles, operand.crossed);
        }
        Mnemonic::Bit => {
            let v = read_location(cpu, bus, operand.loc)?;
            bit(cpu, v);
        }
        _ => return Ok(false),
    }
    Ok(true)
}
