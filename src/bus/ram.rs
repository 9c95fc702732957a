/*!
RAM module: encapsulates the 2 KiB internal RAM with mirrored access.

CPU address map for internal RAM:
- $0000-$07FF: 2 KiB internal RAM
- $0800-$1FFF: Mirrors of $0000-$07FF (mask with & 0x07FF)

This module provides a small, hot-path-friendly API for reading and writing
bytes in internal RAM using the mirroring semantics. It is owned by the Bus
and accessed by the CPU-visible address decoder.
*/

/// Size of internal RAM (in bytes).
pub const RAM_SIZE: usize = 0x0800;

/// Internal RAM with mirrored access helpers.
///
/// Addresses in the range $0000-$1FFF are mirrored every 2 KiB. Callers pass
/// CPU addresses; the index is masked down to the physical range. The same
/// mask applies to reads and writes, so translation is symmetric by
/// construction.
pub struct Ram {
    data: [u8; RAM_SIZE],
}

impl Default for Ram {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Ram {
    /// Create a new RAM instance initialized to 0.
    #[inline]
    pub fn new() -> Self {
        Self {
            data: [0; RAM_SIZE],
        }
    }

    /// Clear RAM contents to 0.
    #[inline]
    pub fn reset(&mut self) {
        self.data.fill(0);
    }

    /// Read a byte from RAM space ($0000-$1FFF), applying 2 KiB mirroring.
    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.data[Self::mirror_index(addr)]
    }

    /// Write a byte to RAM space ($0000-$1FFF), applying 2 KiB mirroring.
    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.data[Self::mirror_index(addr)] = value;
    }

    /// Expose the internal slice (read-only). Useful for diagnostics.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Compute the physical RAM index for a CPU address using 2 KiB mirroring.
    #[inline]
    pub fn mirror_index(addr: u16) -> usize {
        (addr as usize) & (RAM_SIZE - 1) // mask with 0x07FF
    }
}
