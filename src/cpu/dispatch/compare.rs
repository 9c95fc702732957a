/*!
compare.rs - Compare mnemonic family handler (CMP / CPX / CPY)

Overview
========
Register-minus-operand without storing the difference: Carry set when the
register is >= the operand (unsigned), Zero on equality, Negative from bit
7 of the difference. CMP is read-class (+1 on page cross); CPX / CPY have
no indexed modes.
*/

use crate::bus::{Bus, BusError};
use crate::cpu::addressing::Resolved;
use crate::cpu::catalog::{Entry, Mnemonic};
use crate::cpu::execute::{cmp_generic, read_location};
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
        Mnemonic::Cmp => {
            let v = read_location(cpu, bus, operand.loc)?;
            let a = cpu.a();
            cmp_generic(cpu, a, v);
            add_page_cross_penalty(cycles, operand.crossed);
        }
        Mnemonic::Cpx => {
            let v = read_location(cpu, bus, operand.loc)?;
            let x = cpu.x();
            cmp_generic(cpu, x, v);
        }
        Mnemonic::Cpy => {
            let v = read_location(cpu, bus, operand.loc)?;
            let y = cpu.y();
            cmp_generic(cpu, y, v);
        }
        _ => return Ok(false),
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use crate::cpu::{CARRY, NEGATIVE, ZERO};
    use crate::test_utils::boot;

    #[test]
    fn cmp_equal_sets_zero_and_carry() {
        // LDA #$42; CMP #$42
        let (mut cpu, mut bus) = boot(&[0xA9, 0x42, 0xC9, 0x42, 0x00]);
        cpu.step(&mut bus).unwrap();
        cpu.step(&mut bus).unwrap();
        assert!(cpu.get_flag(ZERO));
        assert!(cpu.get_flag(CARRY));
        assert!(!cpu.get_flag(NEGATIVE));
        assert_eq!(cpu.a(), 0x42); // difference never stored
    }

    #[test]
    fn cmp_less_clears_carry() {
        // LDA #$10; CMP #$20
        let (mut cpu, mut bus) = boot(&[0xA9, 0x10, 0xC9, 0x20, 0x00]);
        cpu.step(&mut bus).unwrap();
        cpu.step(&mut bus).unwrap();
        assert!(!cpu.get_flag(CARRY));
        assert!(!cpu.get_flag(ZERO));
        assert!(cpu.get_flag(NEGATIVE));
    }

    #[test]
    fn cpx_and_cpy_zero_page() {
        // LDX #$05; CPX $10 ($10 holds 4); LDY #$03; CPY $11 ($11 holds 9)
        let (mut cpu, mut bus) = boot(&[0xA2, 0x05, 0xE4, 0x10, 0xA0, 0x03, 0xC4, 0x11, 0x00]);
        bus.write(0x0010, 0x04).unwrap();
        bus.write(0x0011, 0x09).unwrap();
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.step(&mut bus).unwrap(), 3);
        assert!(cpu.get_flag(CARRY)); // 5 >= 4
        cpu.step(&mut bus).unwrap();
        cpu.step(&mut bus).unwrap();
        assert!(!cpu.get_flag(CARRY)); // 3 < 9
    }
}
