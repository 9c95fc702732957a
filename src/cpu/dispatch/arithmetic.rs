/*!
arithmetic.rs - ADC / SBC mnemonic family handler

Overview
========
Implements add / subtract with carry. Both are read-class, so a flagged
page cross adds one cycle. The carry/overflow derivation lives in
`execute::adc`; SBC feeds it the one's complement of the operand and so
shares it exactly.
*/

use crate::bus::{Bus, BusError};
use crate::cpu::addressing::Resolved;
use crate::cpu::catalog::{Entry, Mnemonic};
use crate::cpu::execute::{adc, read_location, sbc};
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
        Mnemonic::Adc => {
            let v = read_location(cpu, bus, operand.loc)?;
            adc(cpu, v);
            add_page_cross_penalty(cycles, operand.crossed);
        }
        Mnemonic::Sbc => {
            let v = read_location(cpu, bus, operand.loc)?;
            sbc(cpu, v);
            add_page_cross_penalty(cycles, operand.crossed);
        }
        _ => return Ok(false),
    }
    Ok(true)
}
