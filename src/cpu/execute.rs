/*!
execute.rs - 6502 instruction semantic helpers (ALU, flags, stack, RMW)

Purpose
=======
Centralize side-effect logic for instructions so the family dispatch
modules share a single implementation of each operation. Helpers are
generic over `CpuRegs` and take `&mut Bus` only where they touch memory;
bus faults propagate out with `?` and never roll back register or flag
updates already committed.

Scope (crate-visible)
---------------------
Flag & status helpers:
    set_flag, get_flag, update_zn

Operand location access:
    read_location, modify (read -> dummy write old -> write new for memory)

Stack helpers:
    push, pop, push_word, pop_word, push_status_with_break
    php, plp, pha, pla

Core ALU / register transfer:
    lda/ldx/ldy, tax/tay/txa/tya, tsx/txs
    and/ora/eor/bit
    inx/iny/dex/dey
    adc/sbc, cmp_generic

Branches:
    branch_apply (PC-relative displacement + taken / page-cross penalty)
*/

use crate::bus::{Bus, BusError};
use crate::cpu::addressing::Location;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CARRY, NEGATIVE, OVERFLOW, UNUSED, ZERO};

// ---------------------------------------------------------------------------
// Flag helpers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn set_flag<C: CpuRegs>(cpu: &mut C, mask: u8, on: bool) {
    cpu.assign_flag(mask, on);
}

#[inline]
pub(crate) fn get_flag<C: CpuRegs>(cpu: &C, mask: u8) -> bool {
    cpu.is_flag_set(mask)
}

#[inline]
pub(crate) fn update_zn<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.update_zn(v);
}

// ---------------------------------------------------------------------------
// Operand location access
// ---------------------------------------------------------------------------

/// Read the operand value from its resolved location.
#[inline]
pub(crate) fn read_location<C: CpuRegs>(
    cpu: &C,
    bus: &mut Bus,
    loc: Location,
) -> Result<u8, BusError> {
    match loc {
        Location::Accumulator => Ok(cpu.a()),
        Location::Immediate(v) => Ok(v),
        Location::Memory(addr) => bus.read(addr),
    }
}

/// Store a value at the resolved location (store-class instructions).
#[inline]
pub(crate) fn write_location<C: CpuRegs>(
    cpu: &mut C,
    bus: &mut Bus,
    loc: Location,
    value: u8,
) -> Result<(), BusError> {
    match loc {
        Location::Accumulator => {
            cpu.set_a(value);
            Ok(())
        }
        Location::Memory(addr) => bus.write(addr, value),
        // The catalog pairs no store or modify opcode with an immediate
        // operand.
        Location::Immediate(_) => unreachable!("write to immediate operand"),
    }
}

/// Apply `transform` in place at the resolved location and return the new
/// value. Memory targets perform the canonical 6502 RMW bus choreography:
/// read -> dummy write of the old value -> write of the new value.
pub(crate) fn modify<C: CpuRegs, F>(
    cpu: &mut C,
    bus: &mut Bus,
    loc: Location,
    transform: F,
) -> Result<u8, BusError>
where
    F: FnOnce(&mut C, u8) -> u8,
{
    match loc {
        Location::Accumulator => {
            let old = cpu.a();
            let new = transform(cpu, old);
            cpu.set_a(new);
            Ok(new)
        }
        Location::Memory(addr) => {
            let old = bus.read(addr)?;
            bus.write(addr, old)?;
            let new = transform(cpu, old);
            bus.write(addr, new)?;
            Ok(new)
        }
        Location::Immediate(_) => unreachable!("modify of immediate operand"),
    }
}

// ---------------------------------------------------------------------------
// Stack helpers
// ---------------------------------------------------------------------------
//
// The stack lives on page 0x0100, with SP post-decrement on push and
// pre-increment on pull:
//   Push: write at 0x0100 | SP, then SP = SP - 1
//   Pull: SP = SP + 1, then read at 0x0100 | SP
// The OR with the fixed page keeps every access inside page 1 regardless of
// SP wraparound.

#[inline]
pub(crate) fn push<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, v: u8) -> Result<(), BusError> {
    let sp = cpu.sp();
    bus.write(0x0100u16 | sp as u16, v)?;
    cpu.set_sp(sp.wrapping_sub(1));
    Ok(())
}

#[inline]
pub(crate) fn pop<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) -> Result<u8, BusError> {
    let sp = cpu.sp().wrapping_add(1);
    cpu.set_sp(sp);
    bus.read(0x0100u16 | sp as u16)
}

/// Push a word high byte first (the 6502 return-address convention).
#[inline]
pub(crate) fn push_word<C: CpuRegs>(cpu: &mut C, bus: &mut Bus, v: u16) -> Result<(), BusError> {
    push(cpu, bus, (v >> 8) as u8)?;
    push(cpu, bus, (v & 0xFF) as u8)
}

#[inline]
pub(crate) fn pop_word<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) -> Result<u16, BusError> {
    let lo = pop(cpu, bus)? as u16;
    let hi = pop(cpu, bus)? as u16;
    Ok((hi << 8) | lo)
}

/// Push P with control over Break flag semantics (BRK/PHP vs IRQ/NMI).
pub(crate) fn push_status_with_break<C: CpuRegs>(
    cpu: &mut C,
    bus: &mut Bus,
    set_break: bool,
) -> Result<(), BusError> {
    let v = cpu.compose_status_for_push(set_break);
    push(cpu, bus, v)
}

#[inline]
pub(crate) fn php<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) -> Result<(), BusError> {
    push_status_with_break(cpu, bus, true)
}

#[inline]
pub(crate) fn plp<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) -> Result<(), BusError> {
    let v = pop(cpu, bus)?;
    cpu.set_status((v | UNUSED) & !crate::cpu::state::BREAK);
    Ok(())
}

#[inline]
pub(crate) fn pha<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) -> Result<(), BusError> {
    let a = cpu.a();
    push(cpu, bus, a)
}

#[inline]
pub(crate) fn pla<C: CpuRegs>(cpu: &mut C, bus: &mut Bus) -> Result<(), BusError> {
    let val = pop(cpu, bus)?;
    cpu.set_a(val);
    update_zn(cpu, val);
    Ok(())
}

// ---------------------------------------------------------------------------
// Loads / Transfers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn lda<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(v);
    update_zn(cpu, v);
}

#[inline]
pub(crate) fn ldx<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_x(v);
    update_zn(cpu, v);
}

#[inline]
pub(crate) fn ldy<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_y(v);
    update_zn(cpu, v);
}

#[inline]
pub(crate) fn tax<C: CpuRegs>(cpu: &mut C) {
    cpu.set_x(cpu.a());
    update_zn(cpu, cpu.x());
}

#[inline]
pub(crate) fn tay<C: CpuRegs>(cpu: &mut C) {
    cpu.set_y(cpu.a());
    update_zn(cpu, cpu.y());
}

#[inline]
pub(crate) fn txa<C: CpuRegs>(cpu: &mut C) {
    cpu.set_a(cpu.x());
    update_zn(cpu, cpu.a());
}

#[inline]
pub(crate) fn tya<C: CpuRegs>(cpu: &mut C) {
    cpu.set_a(cpu.y());
    update_zn(cpu, cpu.a());
}

#[inline]
pub(crate) fn tsx<C: CpuRegs>(cpu: &mut C) {
    cpu.set_x(cpu.sp());
    update_zn(cpu, cpu.x());
}

/// The one transfer that updates no flags.
#[inline]
pub(crate) fn txs<C: CpuRegs>(cpu: &mut C) {
    cpu.set_sp(cpu.x());
}

// ---------------------------------------------------------------------------
// Logical / Bit
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn and<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(cpu.a() & v);
    update_zn(cpu, cpu.a());
}

#[inline]
pub(crate) fn ora<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(cpu.a() | v);
    update_zn(cpu, cpu.a());
}

#[inline]
pub(crate) fn eor<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(cpu.a() ^ v);
    update_zn(cpu, cpu.a());
}

#[inline]
pub(crate) fn bit<C: CpuRegs>(cpu: &mut C, v: u8) {
    set_flag(cpu, ZERO, (cpu.a() & v) == 0);
    set_flag(cpu, NEGATIVE, (v & 0x80) != 0);
    set_flag(cpu, OVERFLOW, (v & 0x40) != 0);
}

// ---------------------------------------------------------------------------
// Increment / Decrement (register)
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn inx<C: CpuRegs>(cpu: &mut C) {
    cpu.set_x(cpu.x().wrapping_add(1));
    update_zn(cpu, cpu.x());
}

#[inline]
pub(crate) fn iny<C: CpuRegs>(cpu: &mut C) {
    cpu.set_y(cpu.y().wrapping_add(1));
    update_zn(cpu, cpu.y());
}

#[inline]
pub(crate) fn dex<C: CpuRegs>(cpu: &mut C) {
    cpu.set_x(cpu.x().wrapping_sub(1));
    update_zn(cpu, cpu.x());
}

#[inline]
pub(crate) fn dey<C: CpuRegs>(cpu: &mut C) {
    cpu.set_y(cpu.y().wrapping_sub(1));
    update_zn(cpu, cpu.y());
}

// ---------------------------------------------------------------------------
// ADC / SBC
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn adc<C: CpuRegs>(cpu: &mut C, v: u8) {
    let a = cpu.a();
    let carry_in = if get_flag(cpu, CARRY) { 1u16 } else { 0 };
    let sum16 = a as u16 + v as u16 + carry_in;
    let result = sum16 as u8;

    set_flag(cpu, CARRY, sum16 > 0xFF);
    // Overflow: ( !(A ^ M) & (A ^ R) & 0x80 ) != 0
    set_flag(cpu, OVERFLOW, ((!(a ^ v)) & (a ^ result) & 0x80) != 0);

    cpu.set_a(result);
    update_zn(cpu, result);
}

/// Subtract is add of the one's complement, sharing carry/overflow
/// derivation with `adc`.
#[inline]
pub(crate) fn sbc<C: CpuRegs>(cpu: &mut C, v: u8) {
    adc(cpu, v ^ 0xFF);
}

// ---------------------------------------------------------------------------
// Compare
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn cmp_generic<C: CpuRegs>(cpu: &mut C, reg: u8, v: u8) {
    set_flag(cpu, CARRY, reg >= v);
    update_zn(cpu, reg.wrapping_sub(v));
}

// ---------------------------------------------------------------------------
// Branches
// ---------------------------------------------------------------------------

/// Apply a conditional branch given the already-fetched displacement.
///
/// PC must point at the next instruction (the branch's end). Returns the
/// extra cycles: 0 not taken, 1 taken, 2 taken with the target on a
/// different page than the next instruction.
pub(crate) fn branch_apply<C: CpuRegs>(cpu: &mut C, offset: i8, take: bool) -> u32 {
    if !take {
        return 0;
    }
    let old_pc = cpu.pc();
    let new_pc = (old_pc as i32 + offset as i32) as u16;
    cpu.set_pc(new_pc);
    if (old_pc & 0xFF00) != (new_pc & 0xFF00) {
        2
    } else {
        1
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
