/*!
misc.rs - Transfers / stack / flag / register inc-dec mnemonic handler

Overview
========
Handles the small, fixed-cycle instructions:

Transfers:
  TAX, TAY, TXA, TYA, TSX, TXS (TXS updates no flags)

Stack:
  PHA, PLA, PHP, PLP

Flag operations:
  CLC, SEC, CLI, SEI, CLD, SED, CLV

Register increment / decrement:
  INX, INY, DEX, DEY (wrap mod 256, N/Z only)

NOP:
  The documented 0xEA and the undocumented multi-mode variants; the
  indexed variants still pay the read-class page-cross penalty.
*/

use crate::bus::{Bus, BusError};
use crate::cpu::addressing::Resolved;
use crate::cpu::catalog::{Entry, Mnemonic};
use crate::cpu::execute::{
    dex, dey, inx, iny, pha, php, pla, plp, set_flag, tax, tay, tsx, txa, txs, tya,
};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CARRY, DECIMAL, IRQ_DISABLE, OVERFLOW};

use super::add_page_cross_penalty;

pub(super) fn handle<C: CpuRegs>(
    entry: &Entry,
    cpu: &mut C,
    bus: &mut Bus,
    operand: Resolved,
    cycles: &mut u32,
) -> Result<bool, BusError> {
    match entry.mnemonic {
        // -------- Transfers --------
        Mnemonic::Tax => tax(cpu),
        Mnemonic::Tay => tay(cpu),
        Mnemonic::Txa => txa(cpu),
        Mnemonic::Tya => tya(cpu),
        Mnemonic::Tsx => tsx(cpu),
        Mnemonic::Txs => txs(cpu),

        // -------- Stack --------
        Mnemonic::Pha => pha(cpu, bus)?,
        Mnemonic::Pla => pla(cpu, bus)?,
        Mnemonic::Php => php(cpu, bus)?,
        Mnemonic::Plp => plp(cpu, bus)?,

        // -------- Flags --------
        Mnemonic::Clc => set_flag(cpu, CARRY, false),
        Mnemonic::Sec => set_flag(cpu, CARRY, true),
        Mnemonic::Cli => set_flag(cpu, IRQ_DISABLE, false),
        Mnemonic::Sei => set_flag(cpu, IRQ_DISABLE, true),
        Mnemonic::Cld => set_flag(cpu, DECIMAL, false),
        Mnemonic::Sed => set_flag(cpu, DECIMAL, true),
        Mnemonic::Clv => set_flag(cpu, OVERFLOW, false),

        // -------- Register increment / decrement --------
        Mnemonic::Inx => inx(cpu),
        Mnemonic::Iny => iny(cpu),
        Mnemonic::Dex => dex(cpu),
        Mnemonic::Dey => dey(cpu),

        // -------- NOP (documented and multi-mode variants) --------
        Mnemonic::Nop => add_page_cross_penalty(cycles, operand.crossed),

        _ => return Ok(false),
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use crate::cpu::{CARRY, DECIMAL, IRQ_DISABLE, OVERFLOW, ZERO};
    use crate::test_utils::boot;

    #[test]
    fn transfers_sequence() {
        // LDA #$05; TAX; TAY; TXA; TYA; TSX; TXS
        let (mut cpu, mut bus) = boot(&[0xA9, 0x05, 0xAA, 0xA8, 0x8A, 0x98, 0xBA, 0x9A, 0x00]);
        assert_eq!(cpu.step(&mut bus).unwrap(), 2);
        assert_eq!(cpu.step(&mut bus).unwrap(), 2);
        assert_eq!(cpu.x(), 0x05);
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.y(), 0x05);
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.a(), 0x05);
        cpu.step(&mut bus).unwrap();
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.x(), cpu.sp());
        cpu.step(&mut bus).unwrap(); // TXS
        assert_eq!(cpu.sp(), cpu.x());
    }

    #[test]
    fn txs_updates_no_flags() {
        // LDX #$00 sets Z; TXS must leave Z alone even though X is zero...
        // then LDX #$80 sets N; TXS again leaves flags untouched.
        let (mut cpu, mut bus) = boot(&[0xA2, 0x00, 0x9A, 0xA2, 0x80, 0x9A, 0x00]);
        cpu.step(&mut bus).unwrap();
        let status = cpu.status();
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.status(), status);
        assert_eq!(cpu.sp(), 0x00);
        cpu.step(&mut bus).unwrap();
        let status = cpu.status();
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.status(), status);
        assert_eq!(cpu.sp(), 0x80);
    }

    #[test]
    fn stack_push_pull_round_trip() {
        // LDA #$AB; PHA; LDA #$00; PLA
        let (mut cpu, mut bus) = boot(&[0xA9, 0xAB, 0x48, 0xA9, 0x00, 0x68, 0x00]);
        cpu.step(&mut bus).unwrap();
        let sp0 = cpu.sp();
        assert_eq!(cpu.step(&mut bus).unwrap(), 3);
        assert_eq!(cpu.sp(), sp0.wrapping_sub(1));
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.a(), 0x00);
        assert!(cpu.get_flag(ZERO));
        assert_eq!(cpu.step(&mut bus).unwrap(), 4);
        assert_eq!(cpu.a(), 0xAB);
        assert_eq!(cpu.sp(), sp0);
        assert!(!cpu.get_flag(ZERO));
    }

    #[test]
    fn php_plp_round_trip_preserves_carry() {
        // SEC; PHP; CLC; PLP -> carry set again
        let (mut cpu, mut bus) = boot(&[0x38, 0x08, 0x18, 0x28, 0x00]);
        cpu.step(&mut bus).unwrap();
        cpu.step(&mut bus).unwrap();
        cpu.step(&mut bus).unwrap();
        assert!(!cpu.get_flag(CARRY));
        cpu.step(&mut bus).unwrap();
        assert!(cpu.get_flag(CARRY));
    }

    #[test]
    fn flag_ops_toggle() {
        // SEI; CLI; SED; CLD; CLV
        let (mut cpu, mut bus) = boot(&[0x78, 0x58, 0xF8, 0xD8, 0xB8, 0x00]);
        cpu.step(&mut bus).unwrap();
        assert!(cpu.get_flag(IRQ_DISABLE));
        cpu.step(&mut bus).unwrap();
        assert!(!cpu.get_flag(IRQ_DISABLE));
        cpu.step(&mut bus).unwrap();
        assert!(cpu.get_flag(DECIMAL));
        cpu.step(&mut bus).unwrap();
        assert!(!cpu.get_flag(DECIMAL));
        cpu.step(&mut bus).unwrap();
        assert!(!cpu.get_flag(OVERFLOW));
    }

    #[test]
    fn register_inc_dec_wraps() {
        // LDX #$FF; INX; LDY #$00; DEY
        let (mut cpu, mut bus) = boot(&[0xA2, 0xFF, 0xE8, 0xA0, 0x00, 0x88, 0x00]);
        cpu.step(&mut bus).unwrap();
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.x(), 0x00);
        assert!(cpu.get_flag(ZERO));
        cpu.step(&mut bus).unwrap();
        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.y(), 0xFF);
    }

    #[test]
    fn undocumented_nop_consumes_operand() {
        // NOP $10 (0x04): two bytes, three cycles, no state change.
        let (mut cpu, mut bus) = boot(&[0x04, 0x10, 0x00]);
        let a0 = cpu.a();
        assert_eq!(cpu.step(&mut bus).unwrap(), 3);
        assert_eq!(cpu.pc(), 0x8002);
        assert_eq!(cpu.a(), a0);
        assert_eq!(cpu.unimplemented_op_count(), 0);
    }
}
