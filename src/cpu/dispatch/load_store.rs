/*!
load_store.rs - Load / Store mnemonic family handler

Overview
========
Executes LDA / LDX / LDY and STA / STX / STY against the operand location
the dispatcher resolved.

Cycle rules
===========
- Loads are read-class: +1 cycle when the resolver flagged a page cross
  (abs,X / abs,Y / (ind),Y forms).
- Stores are write-class: the catalog base cost already includes the index
  cycle those forms always pay, so the cross flag is ignored.

Return contract
===============
`handle` returns Ok(true) if the entry's mnemonic belongs to this family
(operand accessed, registers/flags updated, cycles possibly bumped),
Ok(false) otherwise so the dispatcher continues down the chain.
*/

use crate::bus::{Bus, BusError};
use crate::cpu::addressing::Resolved;
use crate::cpu::catalog::{Entry, Mnemonic};
use crate::cpu::execute::{lda, ldx, ldy, read_location, write_location};
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
        Mnemonic::Lda => {
            let v = read_location(cpu, bus, operand.loc)?;
            lda(cpu, v);
            add_page_cross_penalty(cycles, operand.crossed);
        }
        Mnemonic::Ldx => {
            let v = read_location(cpu, bus, operand.loc)?;
            ldx(cpu, v);
            add_page_cross_penalty(cycles, operand.crossed);
        }
        Mnemonic::Ldy => {
            let v = read_location(cpu, bus, operand.loc)?;
            ldy(cpu, v);
            add_page_cross_penalty(cycles, operand.crossed);
        }
        Mnemonic::Sta => {
            let a = cpu.a();
            write_location(cpu, bus, operand.loc, a)?;
        }
        Mnemonic::Stx => {
            let x = cpu.x();
            write_location(cpu, bus, operand.loc, x)?;
        }
        Mnemonic::Sty => {
            let y = cpu.y();
            write_location(cpu, bus, operand.loc, y)?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use crate::test_utils::boot;

    #[test]
    fn lda_immediate_sets_flags() {
        let (mut cpu, mut bus) = boot(&[0xA9, 0x80, 0x00]);
        assert_eq!(cpu.step(&mut bus).unwrap(), 2);
        assert_eq!(cpu.a(), 0x80);
        assert!(cpu.get_flag(crate::cpu::NEGATIVE));
    }

    #[test]
    fn lda_abs_x_page_cross_costs_extra_cycle() {
        // LDX #$01; LDA $80FF,X
        let (mut cpu, mut bus) = boot(&[0xA2, 0x01, 0xBD, 0xFF, 0x80, 0x00]);
        assert_eq!(cpu.step(&mut bus).unwrap(), 2);
        assert_eq!(cpu.step(&mut bus).unwrap(), 5);
    }

    #[test]
    fn sta_abs_x_cost_is_fixed_regardless_of_cross() {
        // LDA #$42; STA $0200,X with X=0 (no cross): still 5 cycles.
        let (mut cpu, mut bus) = boot(&[0xA9, 0x42, 0x9D, 0x00, 0x02, 0x00]);
        assert_eq!(cpu.step(&mut bus).unwrap(), 2);
        assert_eq!(cpu.step(&mut bus).unwrap(), 5);
        assert_eq!(bus.read(0x0200).unwrap(), 0x42);
    }

    #[test]
    fn stx_zero_page_y_wraps() {
        // LDX #$AB; STX $FF,Y with Y=2 lands on $0001.
        let (mut cpu, mut bus) = boot(&[0xA2, 0xAB, 0x96, 0xFF, 0x00]);
        cpu.set_y(0x02);
        cpu.step(&mut bus).unwrap();
        cpu.step(&mut bus).unwrap();
        assert_eq!(bus.read(0x0001).unwrap(), 0xAB);
        assert_eq!(bus.read(0x0101).unwrap(), 0x00);
    }

    #[test]
    fn ldy_zero_flag() {
        let (mut cpu, mut bus) = boot(&[0xA0, 0x00, 0x00]);
        cpu.step(&mut bus).unwrap();
        assert!(cpu.get_flag(crate::cpu::ZERO));
    }
}
