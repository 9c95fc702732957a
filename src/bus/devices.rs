/*!
devices.rs - Device capability trait and reserved-window routing support.

Overview
========
The CPU-visible address space contains two register windows whose devices are
not modeled by this crate:

- Video window: $2000-$2007 (mirrored through $3FFF) plus the sprite-DMA
  port at $4014.
- Audio/IO window: $4000-$4019, excluding $4014.

An embedder that wants these ranges to work attaches a `Device` capability
per window. The bus hands the device a window-relative offset, never an
absolute address. With no device attached, an access to either window is a
`BusError` reported to whatever drove the instruction; it is never aliased
into RAM or absorbed by a sentinel cell.

Scope & Responsibilities
========================
- `Device`: the read/write capability contract for an attached window device.
- `DeviceWindow`: identifies which window an access fell into (for errors).
- `BusError`: the bus-level error taxonomy.

Mapping of window offsets:
- Video: $2000 + (addr & 7) -> offsets 0..=7; $4014 -> `VIDEO_DMA_OFFSET`.
- Audio/IO: addr - $4000 -> offsets 0..=0x19 (0x14 never delivered here).
*/

use std::fmt;

use thiserror::Error;

/// Window-relative offset the video device receives for a `$4014`
/// sprite-DMA access (one past its eight mirrored registers).
pub const VIDEO_DMA_OFFSET: u16 = 8;

/// Register-file capability for a device attached to a reserved window.
///
/// Offsets are window-relative. Reads take `&mut self` because reading a
/// hardware register may have side effects (status latches, buffers).
pub trait Device {
    fn read(&mut self, offset: u16) -> u8;
    fn write(&mut self, offset: u16, value: u8);
}

/// Which reserved window an access fell into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceWindow {
    /// $2000-$3FFF mirrored register file plus the $4014 DMA port.
    Video,
    /// $4000-$4019 (minus $4014).
    Audio,
}

impl fmt::Display for DeviceWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceWindow::Video => write!(f, "video register"),
            DeviceWindow::Audio => write!(f, "audio/IO register"),
        }
    }
}

/// Errors surfaced by bus accesses.
///
/// These bubble out of `Cpu::step`; register and flag updates committed
/// before the faulting access stay committed, matching hardware (the
/// effects up to the fault are real).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    #[error("read from {window} window at ${addr:04X} with no device attached")]
    UnmappedRead { window: DeviceWindow, addr: u16 },
    #[error("write of ${value:02X} to {window} window at ${addr:04X} with no device attached")]
    UnmappedWrite {
        window: DeviceWindow,
        addr: u16,
        value: u8,
    },
}
