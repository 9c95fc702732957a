/*!
catalog.rs - Static 256-entry instruction catalog.

Overview
========
Maps every opcode byte 0-255 to its mnemonic, addressing mode, and base
cycle cost. The table is the single source of truth for decode: it exists
for every byte value, including opcodes whose execution semantics are not
implemented, so the resolver always knows how many operand bytes to fetch
and the dispatcher always has a base cycle count.

Cycle costs
===========
- Documented opcodes carry their documented base cost. Page-cross and
  branch penalties are added dynamically by dispatch, never here.
- Write-class indexed opcodes (STA abs,X / abs,Y / (ind),Y and the
  read-modify-write abs,X forms) bake the always-paid index penalty into
  the base cost, so dispatch never adds a conditional penalty for them.
- Undocumented opcodes without implemented semantics carry a nominal
  2-cycle cost. The undocumented NOP variants execute as real no-ops and
  carry the cost of their addressing mode.

Undocumented mnemonics keep their conventional names (SLO, RLA, ...) so a
diagnostic can say what the opcode would have been.
*/

use crate::cpu::addressing::AddressingMode;

/// Instruction mnemonics, documented and undocumented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    // Documented set
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs, Clc,
    Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny, Jmp,
    Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol, Ror, Rti,
    Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay, Tsx, Txa, Txs, Tya,
    // Undocumented set
    Alr, Anc, Ane, Arr, Dcp, Isc, Jam, Las, Lax, Lxa, Rla, Rra, Sax, Sbx,
    Sha, Shx, Shy, Slo, Sre, Tas, Usbc,
}

impl Mnemonic {
    /// Canonical assembler spelling.
    pub const fn as_str(self) -> &'static str {
        use Mnemonic::*;
        match self {
            Adc => "ADC", And => "AND", Asl => "ASL", Bcc => "BCC",
            Bcs => "BCS", Beq => "BEQ", Bit => "BIT", Bmi => "BMI",
            Bne => "BNE", Bpl => "BPL", Brk => "BRK", Bvc => "BVC",
            Bvs => "BVS", Clc => "CLC", Cld => "CLD", Cli => "CLI",
            Clv => "CLV", Cmp => "CMP", Cpx => "CPX", Cpy => "CPY",
            Dec => "DEC", Dex => "DEX", Dey => "DEY", Eor => "EOR",
            Inc => "INC", Inx => "INX", Iny => "INY", Jmp => "JMP",
            Jsr => "JSR", Lda => "LDA", Ldx => "LDX", Ldy => "LDY",
            Lsr => "LSR", Nop => "NOP", Ora => "ORA", Pha => "PHA",
            Php => "PHP", Pla => "PLA", Plp => "PLP", Rol => "ROL",
            Ror => "ROR", Rti => "RTI", Rts => "RTS", Sbc => "SBC",
            Sec => "SEC", Sed => "SED", Sei => "SEI", Sta => "STA",
            Stx => "STX", Sty => "STY", Tax => "TAX", Tay => "TAY",
            Tsx => "TSX", Txa => "TXA", Txs => "TXS", Tya => "TYA",
            Alr => "ALR", Anc => "ANC", Ane => "ANE", Arr => "ARR",
            Dcp => "DCP", Isc => "ISC", Jam => "JAM", Las => "LAS",
            Lax => "LAX", Lxa => "LXA", Rla => "RLA", Rra => "RRA",
            Sax => "SAX", Sbx => "SBX", Sha => "SHA", Shx => "SHX",
            Shy => "SHY", Slo => "SLO", Sre => "SRE", Tas => "TAS",
            Usbc => "USBC",
        }
    }

    /// True when the execution unit defines semantics for this mnemonic.
    ///
    /// JAM counts: its hardware effect (halting the CPU) is implemented.
    /// The remaining undocumented combined operations execute as diagnosed
    /// no-ops.
    pub const fn has_semantics(self) -> bool {
        use Mnemonic::*;
        !matches!(
            self,
            Alr | Anc
                | Ane
                | Arr
                | Dcp
                | Isc
                | Las
                | Lax
                | Lxa
                | Rla
                | Rra
                | Sax
                | Sbx
                | Sha
                | Shx
                | Shy
                | Slo
                | Sre
                | Tas
                | Usbc
        )
    }
}

/// Static decode metadata for one opcode byte.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub mnemonic: Mnemonic,
    pub mode: AddressingMode,
    /// Base cycle cost before dynamic penalties.
    pub base_cycles: u8,
}

impl Entry {
    /// Total instruction length in bytes (opcode + operands).
    #[inline]
    pub const fn size_bytes(&self) -> u8 {
        1 + self.mode.operand_bytes()
    }
}

/// Look up the catalog entry for an opcode byte.
#[inline]
pub fn entry(opcode: u8) -> &'static Entry {
    &CATALOG[opcode as usize]
}

const fn op(mnemonic: Mnemonic, mode: AddressingMode, base_cycles: u8) -> Entry {
    Entry {
        mnemonic,
        mode,
        base_cycles,
    }
}

use AddressingMode::*;
use Mnemonic::*;

/// Complete opcode catalog indexed by opcode byte value. Built once at
/// compile time and shared by reference across CPU instances.
pub static CATALOG: [Entry; 256] = [
    // 0x00 - 0x0F
    op(Brk, Implicit, 7),
    op(Ora, IndirectX, 6),
    op(Jam, Implicit, 2),
    op(Slo, IndirectX, 2),
    op(Nop, ZeroPage, 3),
    op(Ora, ZeroPage, 3),
    op(Asl, ZeroPage, 5),
    op(Slo, ZeroPage, 2),
    op(Php, Implicit, 3),
    op(Ora, Immediate, 2),
    op(Asl, Accumulator, 2),
    op(Anc, Immediate, 2),
    op(Nop, Absolute, 4),
    op(Ora, Absolute, 4),
    op(Asl, Absolute, 6),
    op(Slo, Absolute, 2),
    // 0x10 - 0x1F
    op(Bpl, Relative, 2),
    op(Ora, IndirectY, 5),
    op(Jam, Implicit, 2),
    op(Slo, IndirectY, 2),
    op(Nop, ZeroPageX, 4),
    op(Ora, ZeroPageX, 4),
    op(Asl, ZeroPageX, 6),
    op(Slo, ZeroPageX, 2),
    op(Clc, Implicit, 2),
    op(Ora, AbsoluteY, 4),
    op(Nop, Implicit, 2),
    op(Slo, AbsoluteY, 2),
    op(Nop, AbsoluteX, 4),
    op(Ora, AbsoluteX, 4),
    op(Asl, AbsoluteX, 7),
    op(Slo, AbsoluteX, 2),
    // 0x20 - 0x2F
    op(Jsr, Absolute, 6),
    op(And, IndirectX, 6),
    op(Jam, Implicit, 2),
    op(Rla, IndirectX, 2),
    op(Bit, ZeroPage, 3),
    op(And, ZeroPage, 3),
    op(Rol, ZeroPage, 5),
    op(Rla, ZeroPage, 2),
    op(Plp, Implicit, 4),
    op(And, Immediate, 2),
    op(Rol, Accumulator, 2),
    op(Anc, Immediate, 2),
    op(Bit, Absolute, 4),
    op(And, Absolute, 4),
    op(Rol, Absolute, 6),
    op(Rla, Absolute, 2),
    // 0x30 - 0x3F
    op(Bmi, Relative, 2),
    op(And, IndirectY, 5),
    op(Jam, Implicit, 2),
    op(Rla, IndirectY, 2),
    op(Nop, ZeroPageX, 4),
    op(And, ZeroPageX, 4),
    op(Rol, ZeroPageX, 6),
    op(Rla, ZeroPageX, 2),
    op(Sec, Implicit, 2),
    op(And, AbsoluteY, 4),
    op(Nop, Implicit, 2),
    op(Rla, AbsoluteY, 2),
    op(Nop, AbsoluteX, 4),
    op(And, AbsoluteX, 4),
    op(Rol, AbsoluteX, 7),
    op(Rla, AbsoluteX, 2),
    // 0x40 - 0x4F
    op(Rti, Implicit, 6),
    op(Eor, IndirectX, 6),
    op(Jam, Implicit, 2),
    op(Sre, IndirectX, 2),
    op(Nop, ZeroPage, 3),
    op(Eor, ZeroPage, 3),
    op(Lsr, ZeroPage, 5),
    op(Sre, ZeroPage, 2),
    op(Pha, Implicit, 3),
    op(Eor, Immediate, 2),
    op(Lsr, Accumulator, 2),
    op(Alr, Immediate, 2),
    op(Jmp, Absolute, 3),
    op(Eor, Absolute, 4),
    op(Lsr, Absolute, 6),
    op(Sre, Absolute, 2),
    // 0x50 - 0x5F
    op(Bvc, Relative, 2),
    op(Eor, IndirectY, 5),
    op(Jam, Implicit, 2),
    op(Sre, IndirectY, 2),
    op(Nop, ZeroPageX, 4),
    op(Eor, ZeroPageX, 4),
    op(Lsr, ZeroPageX, 6),
    op(Sre, ZeroPageX, 2),
    op(Cli, Implicit, 2),
    op(Eor, AbsoluteY, 4),
    op(Nop, Implicit, 2),
    op(Sre, AbsoluteY, 2),
    op(Nop, AbsoluteX, 4),
    op(Eor, AbsoluteX, 4),
    op(Lsr, AbsoluteX, 7),
    op(Sre, AbsoluteX, 2),
    // 0x60 - 0x6F
    op(Rts, Implicit, 6),
    op(Adc, IndirectX, 6),
    op(Jam, Implicit, 2),
    op(Rra, IndirectX, 2),
    op(Nop, ZeroPage, 3),
    op(Adc, ZeroPage, 3),
    op(Ror, ZeroPage, 5),
    op(Rra, ZeroPage, 2),
    op(Pla, Implicit, 4),
    op(Adc, Immediate, 2),
    op(Ror, Accumulator, 2),
    op(Arr, Immediate, 2),
    op(Jmp, Indirect, 5),
    op(Adc, Absolute, 4),
    op(Ror, Absolute, 6),
    op(Rra, Absolute, 2),
    // 0x70 - 0x7F
    op(Bvs, Relative, 2),
    op(Adc, IndirectY, 5),
    op(Jam, Implicit, 2),
    op(Rra, IndirectY, 2),
    op(Nop, ZeroPageX, 4),
    op(Adc, ZeroPageX, 4),
    op(Ror, ZeroPageX, 6),
    op(Rra, ZeroPageX, 2),
    op(Sei, Implicit, 2),
    op(Adc, AbsoluteY, 4),
    op(Nop, Implicit, 2),
    op(Rra, AbsoluteY, 2),
    op(Nop, AbsoluteX, 4),
    op(Adc, AbsoluteX, 4),
    op(Ror, AbsoluteX, 7),
    op(Rra, AbsoluteX, 2),
    // 0x80 - 0x8F
    op(Nop, Immediate, 2),
    op(Sta, IndirectX, 6),
    op(Nop, Immediate, 2),
    op(Sax, IndirectX, 2),
    op(Sty, ZeroPage, 3),
    op(Sta, ZeroPage, 3),
    op(Stx, ZeroPage, 3),
    op(Sax, ZeroPage, 2),
    op(Dey, Implicit, 2),
    op(Nop, Immediate, 2),
    op(Txa, Implicit, 2),
    op(Ane, Immediate, 2),
    op(Sty, Absolute, 4),
    op(Sta, Absolute, 4),
    op(Stx, Absolute, 4),
    op(Sax, Absolute, 2),
    // 0x90 - 0x9F
    op(Bcc, Relative, 2),
    op(Sta, IndirectY, 6),
    op(Jam, Implicit, 2),
    op(Sha, IndirectY, 2),
    op(Sty, ZeroPageX, 4),
    op(Sta, ZeroPageX, 4),
    op(Stx, ZeroPageY, 4),
    op(Sax, ZeroPageY, 2),
    op(Tya, Implicit, 2),
    op(Sta, AbsoluteY, 5),
    op(Txs, Implicit, 2),
    op(Tas, AbsoluteY, 2),
    op(Shy, AbsoluteX, 2),
    op(Sta, AbsoluteX, 5),
    op(Shx, AbsoluteY, 2),
    op(Sha, AbsoluteY, 2),
    // 0xA0 - 0xAF
    op(Ldy, Immediate, 2),
    op(Lda, IndirectX, 6),
    op(Ldx, Immediate, 2),
    op(Lax, IndirectX, 2),
    op(Ldy, ZeroPage, 3),
    op(Lda, ZeroPage, 3),
    op(Ldx, ZeroPage, 3),
    op(Lax, ZeroPage, 2),
    op(Tay, Implicit, 2),
    op(Lda, Immediate, 2),
    op(Tax, Implicit, 2),
    op(Lxa, Immediate, 2),
    op(Ldy, Absolute, 4),
    op(Lda, Absolute, 4),
    op(Ldx, Absolute, 4),
    op(Lax, Absolute, 2),
    // 0xB0 - 0xBF
    op(Bcs, Relative, 2),
    op(Lda, IndirectY, 5),
    op(Jam, Implicit, 2),
    op(Lax, IndirectY, 2),
    op(Ldy, ZeroPageX, 4),
    op(Lda, ZeroPageX, 4),
    op(Ldx, ZeroPageY, 4),
    op(Lax, ZeroPageY, 2),
    op(Clv, Implicit, 2),
    op(Lda, AbsoluteY, 4),
    op(Tsx, Implicit, 2),
    op(Las, AbsoluteY, 2),
    op(Ldy, AbsoluteX, 4),
    op(Lda, AbsoluteX, 4),
    op(Ldx, AbsoluteY, 4),
    op(Lax, AbsoluteY, 2),
    // 0xC0 - 0xCF
    op(Cpy, Immediate, 2),
    op(Cmp, IndirectX, 6),
    op(Nop, Immediate, 2),
    op(Dcp, IndirectX, 2),
    op(Cpy, ZeroPage, 3),
    op(Cmp, ZeroPage, 3),
    op(Dec, ZeroPage, 5),
    op(Dcp, ZeroPage, 2),
    op(Iny, Implicit, 2),
    op(Cmp, Immediate, 2),
    op(Dex, Implicit, 2),
    op(Sbx, Immediate, 2),
    op(Cpy, Absolute, 4),
    op(Cmp, Absolute, 4),
    op(Dec, Absolute, 6),
    op(Dcp, Absolute, 2),
    // 0xD0 - 0xDF
    op(Bne, Relative, 2),
    op(Cmp, IndirectY, 5),
    op(Jam, Implicit, 2),
    op(Dcp, IndirectY, 2),
    op(Nop, ZeroPageX, 4),
    op(Cmp, ZeroPageX, 4),
    op(Dec, ZeroPageX, 6),
    op(Dcp, ZeroPageX, 2),
    op(Cld, Implicit, 2),
    op(Cmp, AbsoluteY, 4),
    op(Nop, Implicit, 2),
    op(Dcp, AbsoluteY, 2),
    op(Nop, AbsoluteX, 4),
    op(Cmp, AbsoluteX, 4),
    op(Dec, AbsoluteX, 7),
    op(Dcp, AbsoluteX, 2),
    // 0xE0 - 0xEF
    op(Cpx, Immediate, 2),
    op(Sbc, IndirectX, 6),
    op(Nop, Immediate, 2),
    op(Isc, IndirectX, 2),
    op(Cpx, ZeroPage, 3),
    op(Sbc, ZeroPage, 3),
    op(Inc, ZeroPage, 5),
    op(Isc, ZeroPage, 2),
    op(Inx, Implicit, 2),
    op(Sbc, Immediate, 2),
    op(Nop, Implicit, 2),
    op(Usbc, Immediate, 2),
    op(Cpx, Absolute, 4),
    op(Sbc, Absolute, 4),
    op(Inc, Absolute, 6),
    op(Isc, Absolute, 2),
    // 0xF0 - 0xFF
    op(Beq, Relative, 2),
    op(Sbc, IndirectY, 5),
    op(Jam, Implicit, 2),
    op(Isc, IndirectY, 2),
    op(Nop, ZeroPageX, 4),
    op(Sbc, ZeroPageX, 4),
    op(Inc, ZeroPageX, 6),
    op(Isc, ZeroPageX, 2),
    op(Sed, Implicit, 2),
    op(Sbc, AbsoluteY, 4),
    op(Nop, Implicit, 2),
    op(Isc, AbsoluteY, 2),
    op(Nop, AbsoluteX, 4),
    op(Sbc, AbsoluteX, 4),
    op(Inc, AbsoluteX, 7),
    op(Isc, AbsoluteX, 2),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_opcode_has_consistent_metadata() {
        for opcode in 0..=255u8 {
            let e = entry(opcode);
            assert!(!e.mnemonic.as_str().is_empty());
            assert!(e.mode.operand_bytes() <= 2, "opcode {opcode:#04X}");
            assert!(
                (1..=7u8).contains(&e.base_cycles),
                "opcode {opcode:#04X} has cycle count {}",
                e.base_cycles
            );
            assert_eq!(e.size_bytes(), 1 + e.mode.operand_bytes());
        }
    }

    #[test]
    fn spot_check_documented_entries() {
        assert_eq!(entry(0x00).mnemonic, Mnemonic::Brk);
        assert_eq!(entry(0x00).base_cycles, 7);
        assert_eq!(entry(0xA9).mnemonic, Mnemonic::Lda);
        assert_eq!(entry(0xA9).mode, AddressingMode::Immediate);
        assert_eq!(entry(0x6C).mode, AddressingMode::Indirect);
        assert_eq!(entry(0x9D).base_cycles, 5); // STA abs,X always pays the index cycle
        assert_eq!(entry(0x1E).base_cycles, 7); // ASL abs,X likewise
        assert_eq!(entry(0x96).mode, AddressingMode::ZeroPageY);
    }

    #[test]
    fn undocumented_entries_have_real_mnemonics_and_modes() {
        assert_eq!(entry(0x03).mnemonic, Mnemonic::Slo);
        assert_eq!(entry(0x03).mode, AddressingMode::IndirectX);
        assert_eq!(entry(0xB3).mnemonic, Mnemonic::Lax);
        assert_eq!(entry(0x02).mnemonic, Mnemonic::Jam);
        assert!(!Mnemonic::Slo.has_semantics());
        assert!(Mnemonic::Jam.has_semantics());
        assert!(Mnemonic::Nop.has_semantics());
    }

    #[test]
    fn branch_opcodes_are_relative_two_cycles() {
        for opcode in [0x10, 0x30, 0x50, 0x70, 0x90, 0xB0, 0xD0, 0xF0] {
            let e = entry(opcode);
            assert_eq!(e.mode, AddressingMode::Relative);
            assert_eq!(e.base_cycles, 2);
        }
    }
}
