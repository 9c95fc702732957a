#![doc = r#"
Bus module: CPU-visible address space with mirroring and device windows.

Address map (CPU):
- $0000-$07FF: 2 KiB internal RAM
- $0800-$1FFF: Mirrors of $0000-$07FF (mask with & 0x07FF)
- $2000-$2007: Video device registers
- $2008-$3FFF: Mirrors of $2000-$2007 (mask with & 0x0007)
- $4014: Sprite DMA port, routed to the video device
- $4000-$4019: Audio/IO device registers (minus $4014)
- $401A-$FFFF: Open memory, flat byte array (an external loader populates
  program and vector bytes here; cartridges and mappers are not modeled)

Both reserved windows route to an attached `Device` capability. With no
device attached, an access is a `BusError` surfaced to the caller -- it is
never redirected into RAM or a sentinel cell.

Invariants
- Translation is a pure function of the raw address and identical for reads
  and writes.
- The bus is the only owner of the backing stores; accesses reach any
  attached device in exactly the order instruction semantics issue them.

Modules and responsibilities
- ram: the 2 KiB mirrored RAM.
- devices: `Device` capability trait, window identifiers, `BusError`.
"#]

pub mod devices;
pub mod ram;

pub use devices::{BusError, Device, DeviceWindow, VIDEO_DMA_OFFSET};
pub use ram::{RAM_SIZE, Ram};

/// First address of the open (flat) region above the device windows.
const OPEN_BASE: u16 = 0x401A;
const OPEN_SIZE: usize = 0x1_0000 - OPEN_BASE as usize;

/// CPU-visible memory bus: internal RAM, two reserved device windows, and
/// open memory above them.
pub struct Bus {
    ram: Ram,
    video: Option<Box<dyn Device>>,
    audio: Option<Box<dyn Device>>,
    open: Box<[u8; OPEN_SIZE]>,
}

impl Bus {
    pub fn new() -> Self {
        Self {
            ram: Ram::new(),
            video: None,
            audio: None,
            open: Box::new([0u8; OPEN_SIZE]),
        }
    }

    /// Attach the video device capability ($2000-$3FFF window and $4014).
    pub fn attach_video(&mut self, dev: Box<dyn Device>) {
        self.video = Some(dev);
    }

    /// Attach the audio/IO device capability ($4000-$4019 window).
    pub fn attach_audio(&mut self, dev: Box<dyn Device>) {
        self.audio = Some(dev);
    }

    /// Clear RAM and open memory. Attached devices are kept.
    pub fn reset(&mut self) {
        self.ram.reset();
        self.open.fill(0);
    }

    // -----------------------------
    // CPU-visible memory interface
    // -----------------------------

    pub fn read(&mut self, addr: u16) -> Result<u8, BusError> {
        match addr {
            0x0000..=0x1FFF => Ok(self.ram.read(addr)),
            0x2000..=0x3FFF => match self.video.as_deref_mut() {
                Some(dev) => Ok(dev.read(addr & 0x0007)),
                None => Err(BusError::UnmappedRead {
                    window: DeviceWindow::Video,
                    addr,
                }),
            },
            0x4014 => match self.video.as_deref_mut() {
                Some(dev) => Ok(dev.read(VIDEO_DMA_OFFSET)),
                None => Err(BusError::UnmappedRead {
                    window: DeviceWindow::Video,
                    addr,
                }),
            },
            0x4000..=0x4019 => match self.audio.as_deref_mut() {
                Some(dev) => Ok(dev.read(addr - 0x4000)),
                None => Err(BusError::UnmappedRead {
                    window: DeviceWindow::Audio,
                    addr,
                }),
            },
            _ => Ok(self.open[(addr - OPEN_BASE) as usize]),
        }
    }

    pub fn write(&mut self, addr: u16, value: u8) -> Result<(), BusError> {
        match addr {
            0x0000..=0x1FFF => {
                self.ram.write(addr, value);
                Ok(())
            }
            0x2000..=0x3FFF => match self.video.as_deref_mut() {
                Some(dev) => {
                    dev.write(addr & 0x0007, value);
                    Ok(())
                }
                None => Err(BusError::UnmappedWrite {
                    window: DeviceWindow::Video,
                    addr,
                    value,
                }),
            },
            0x4014 => match self.video.as_deref_mut() {
                Some(dev) => {
                    dev.write(VIDEO_DMA_OFFSET, value);
                    Ok(())
                }
                None => Err(BusError::UnmappedWrite {
                    window: DeviceWindow::Video,
                    addr,
                    value,
                }),
            },
            0x4000..=0x4019 => match self.audio.as_deref_mut() {
                Some(dev) => {
                    dev.write(addr - 0x4000, value);
                    Ok(())
                }
                None => Err(BusError::UnmappedWrite {
                    window: DeviceWindow::Audio,
                    addr,
                    value,
                }),
            },
            _ => {
                self.open[(addr - OPEN_BASE) as usize] = value;
                Ok(())
            }
        }
    }

    /// Little-endian word read used by vectors and indirect addressing.
    /// The high byte comes from `addr + 1` with 16-bit wraparound.
    pub fn read_word(&mut self, addr: u16) -> Result<u16, BusError> {
        let lo = self.read(addr)? as u16;
        let hi = self.read(addr.wrapping_add(1))? as u16;
        Ok((hi << 8) | lo)
    }

    /// Copy `bytes` into the address space starting at `org`, through the
    /// normal write path (so device windows still trap).
    pub fn load(&mut self, org: u16, bytes: &[u8]) -> Result<(), BusError> {
        for (i, &b) in bytes.iter().enumerate() {
            self.write(org.wrapping_add(i as u16), b)?;
        }
        Ok(())
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Eight-register file plus DMA latch, standing in for a real device.
    struct RegisterFile {
        regs: [u8; 8],
        dma: u8,
    }

    impl RegisterFile {
        fn new() -> Self {
            Self {
                regs: [0; 8],
                dma: 0,
            }
        }
    }

    impl Device for RegisterFile {
        fn read(&mut self, offset: u16) -> u8 {
            if offset == VIDEO_DMA_OFFSET {
                self.dma
            } else {
                self.regs[offset as usize]
            }
        }
        fn write(&mut self, offset: u16, value: u8) {
            if offset == VIDEO_DMA_OFFSET {
                self.dma = value;
            } else {
                self.regs[offset as usize] = value;
            }
        }
    }

    /// Flat 0x1A-byte register file for the audio/IO window.
    struct IoPorts {
        regs: [u8; 0x1A],
    }

    impl Device for IoPorts {
        fn read(&mut self, offset: u16) -> u8 {
            self.regs[offset as usize]
        }
        fn write(&mut self, offset: u16, value: u8) {
            self.regs[offset as usize] = value;
        }
    }

    #[test]
    fn ram_mirrors_round_trip() {
        let mut bus = Bus::new();
        bus.write(0x0000, 0x42).unwrap();
        assert_eq!(bus.read(0x0800).unwrap(), 0x42);
        assert_eq!(bus.read(0x1000).unwrap(), 0x42);
        assert_eq!(bus.read(0x1800).unwrap(), 0x42);
    }

    #[test]
    fn unmapped_video_window_traps() {
        let mut bus = Bus::new();
        assert_eq!(
            bus.read(0x2002),
            Err(BusError::UnmappedRead {
                window: DeviceWindow::Video,
                addr: 0x2002
            })
        );
        assert_eq!(
            bus.write(0x3FFF, 0x01),
            Err(BusError::UnmappedWrite {
                window: DeviceWindow::Video,
                addr: 0x3FFF,
                value: 0x01
            })
        );
        // The trap must not have leaked into RAM.
        assert_eq!(bus.read(0x0007).unwrap(), 0);
    }

    #[test]
    fn unmapped_audio_window_traps() {
        let mut bus = Bus::new();
        assert!(bus.read(0x4000).is_err());
        assert!(bus.read(0x4015).is_err());
        assert!(bus.write(0x4017, 0x40).is_err());
        // $4014 belongs to the video window even with an audio device absent.
        assert_eq!(
            bus.read(0x4014),
            Err(BusError::UnmappedRead {
                window: DeviceWindow::Video,
                addr: 0x4014
            })
        );
    }

    #[test]
    fn video_window_mirrors_to_eight_registers() {
        let mut bus = Bus::new();
        bus.attach_video(Box::new(RegisterFile::new()));
        bus.write(0x2000, 0x99).unwrap();
        // Same register through the mirrors.
        assert_eq!(bus.read(0x2008).unwrap(), 0x99);
        assert_eq!(bus.read(0x3FF8).unwrap(), 0x99);
        // Different register untouched.
        assert_eq!(bus.read(0x2001).unwrap(), 0x00);
        // Mirror writes land on the base register too.
        bus.write(0x3FFF, 0x55).unwrap();
        assert_eq!(bus.read(0x2007).unwrap(), 0x55);
    }

    #[test]
    fn dma_port_routes_to_video_device() {
        let mut bus = Bus::new();
        bus.attach_video(Box::new(RegisterFile::new()));
        bus.write(0x4014, 0x02).unwrap();
        assert_eq!(bus.read(0x4014).unwrap(), 0x02);
        // The DMA latch is distinct from register 4 ($2004).
        assert_eq!(bus.read(0x2004).unwrap(), 0x00);
    }

    #[test]
    fn audio_window_offsets() {
        let mut bus = Bus::new();
        bus.attach_audio(Box::new(IoPorts { regs: [0; 0x1A] }));
        bus.write(0x4000, 0x11).unwrap();
        bus.write(0x4019, 0x22).unwrap();
        assert_eq!(bus.read(0x4000).unwrap(), 0x11);
        assert_eq!(bus.read(0x4019).unwrap(), 0x22);
    }

    #[test]
    fn open_memory_and_word_reads() {
        let mut bus = Bus::new();
        bus.load(0x8000, &[0x34, 0x12]).unwrap();
        assert_eq!(bus.read_word(0x8000).unwrap(), 0x1234);
        // Vector space sits in open memory.
        bus.write(0xFFFC, 0x00).unwrap();
        bus.write(0xFFFD, 0x80).unwrap();
        assert_eq!(bus.read_word(0xFFFC).unwrap(), 0x8000);
    }
}
