/*!
branches.rs - Relative branch mnemonic handler (BPL/BMI/BVC/BVS/BCC/BCS/BNE/BEQ)

Overview
========
Executes all eight conditional relative branches against the displacement
byte the resolver fetched (`Location::Immediate` for Relative mode).

Cycle rules
===========
Base cost: 2 cycles (catalog).
Taken: +1 cycle.
Taken with the target on a different page than the next instruction: +2.

This handler touches no memory, so it is the one family that cannot fault.
*/

use crate::cpu::addressing::{Location, Resolved};
use crate::cpu::catalog::{Entry, Mnemonic};
use crate::cpu::execute::{branch_apply, get_flag};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CARRY, NEGATIVE, OVERFLOW, ZERO};

pub(super) fn handle<C: CpuRegs>(
    entry: &Entry,
    cpu: &mut C,
    operand: Resolved,
    cycles: &mut u32,
) -> bool {
    let take = match entry.mnemonic {
        Mnemonic::Bpl => !get_flag(cpu, NEGATIVE),
        Mnemonic::Bmi => get_flag(cpu, NEGATIVE),
        Mnemonic::Bvc => !get_flag(cpu, OVERFLOW),
        Mnemonic::Bvs => get_flag(cpu, OVERFLOW),
        Mnemonic::Bcc => !get_flag(cpu, CARRY),
        Mnemonic::Bcs => get_flag(cpu, CARRY),
        Mnemonic::Bne => !get_flag(cpu, ZERO),
        Mnemonic::Beq => get_flag(cpu, ZERO),
        _ => return false,
    };
    let Location::Immediate(raw) = operand.loc else {
        // Relative mode always resolves to the raw displacement byte.
        unreachable!("branch without relative operand")
    };
    *cycles += branch_apply(cpu, raw as i8, take);
    true
}

#[cfg(test)]
mod tests {
    use crate::test_utils::boot;

    #[test]
    fn branch_not_taken_base_cycles() {
        // BCS +2 with carry clear after reset: not taken, PC at start + 2.
        let (mut cpu, mut bus) = boot(&[0xB0, 0x02, 0xEA, 0x00]);
        let c = cpu.step(&mut bus).unwrap();
        assert_eq!(c, 2);
        assert_eq!(cpu.pc(), 0x8002);
    }

    #[test]
    fn branch_taken_no_page_cross() {
        // BCC +2 (carry clear): taken, 3 cycles, skips one byte.
        let (mut cpu, mut bus) = boot(&[0x90, 0x02, 0xEA, 0x00]);
        let c = cpu.step(&mut bus).unwrap();
        assert_eq!(c, 3);
        assert_eq!(cpu.pc(), 0x8004);
    }

    #[test]
    fn branch_taken_negative_offset() {
        // BNE -5 from instruction start 0x8000: PC = 0x8002 - 5 = 0x7FFD.
        let (mut cpu, mut bus) = boot(&[0xD0, 0xFB]);
        let c = cpu.step(&mut bus).unwrap();
        assert_eq!(c, 4); // taken + page change
        assert_eq!(cpu.pc(), 0x7FFD);
    }

    #[test]
    fn branch_taken_page_cross_cycles() {
        // Pad with NOPs so a BCC near the end of the page branches far
        // enough forward to land on the next one.
        let mut prg = vec![0xEA; 0x00F0];
        prg.push(0x90); // BCC at $80F0, instruction end $80F2
        prg.push(0x20); // +0x20 -> $8112
        let (mut cpu, mut bus) = boot(&prg);
        for _ in 0..0x00F0 {
            assert_eq!(cpu.step(&mut bus).unwrap(), 2);
        }
        assert_eq!(cpu.step(&mut bus).unwrap(), 4); // taken + page cross
        assert_eq!(cpu.pc(), 0x8112);
    }

    #[test]
    fn all_eight_conditions_dispatch() {
        // SEC; BCS +0: taken with zero offset still costs the taken cycle.
        let (mut cpu, mut bus) = boot(&[0x38, 0xB0, 0x00, 0x00]);
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.step(&mut bus).unwrap(), 3);
        // BEQ not taken (zero clear), BMI not taken (negative clear).
        let (mut cpu, mut bus) = boot(&[0xF0, 0x02, 0x30, 0x02, 0x00]);
        assert_eq!(cpu.step(&mut bus).unwrap(), 2);
        assert_eq!(cpu.step(&mut bus).unwrap(), 2);
    }
}
