pub mod gpio;
mod rom;

use std::ops::RangeInclusive;

pub use rom::ROM;

use crate::clock::TimeSource;
use gpio::Gpio;

/// Game Pak bus as seen from the CPU: ROM with the GPIO port laid over it.
pub struct Cartridge {
    rom: ROM,
    gpio: Gpio,
}

impl Cartridge {
    pub const ROM_START: u32 = 0x08000000;
    const ROM_MASK: u32 = 0x01FFFFFF;
    const GPIO_WINDOW: RangeInclusive<u32> = gpio::DATA..=gpio::CONTROL + 1;

    pub fn new(rom: ROM, time_source: Box<dyn TimeSource>) -> Cartridge {
        if !rom.has_rtc() { debug!("ROM has no RTC identifier, GPIO port still attached") }
        let mut gpio = Gpio::new(time_source);
        gpio.init();
        Cartridge { rom, gpio }
    }

    pub fn reset(&mut self) {
        self.gpio.init();
    }

    pub fn rom(&self) -> &ROM { &self.rom }
    pub fn gpio(&self) -> &Gpio { &self.gpio }

    fn gpio_offset(addr: u32) -> Option<u32> {
        let offset = addr & Cartridge::ROM_MASK;
        if Cartridge::GPIO_WINDOW.contains(&offset) { Some(offset) } else { None }
    }
}

impl MemoryHandler for Cartridge {
    fn read8(&self, addr: u32) -> u8 {
        match Cartridge::gpio_offset(addr) {
            Some(offset) if self.gpio.read_enabled() => {
                let value = self.gpio.read_halfword(offset & !0x1);
                (value >> (8 * (offset & 0x1))) as u8
            },
            _ => self.rom.read8(addr & Cartridge::ROM_MASK),
        }
    }

    fn write8(&mut self, addr: u32, value: u8) {
        match Cartridge::gpio_offset(addr) {
            // Upper bytes of the GPIO registers are unused
            Some(offset) if offset & 0x1 == 0 => self.gpio.write_halfword(offset, value as u16),
            Some(_) => (),
            None => warn!("Ignoring ROM write at 0x{:08X} = 0x{:02X}", addr, value),
        }
    }

    fn read16(&self, addr: u32) -> u16 {
        match Cartridge::gpio_offset(addr & !0x1) {
            Some(offset) if self.gpio.read_enabled() => self.gpio.read_halfword(offset),
            _ => (self.read8(addr + 0) as u16) << 0 | (self.read8(addr + 1) as u16) << 8,
        }
    }

    fn write16(&mut self, addr: u32, value: u16) {
        match Cartridge::gpio_offset(addr & !0x1) {
            Some(offset) => self.gpio.write_halfword(offset, value),
            None => warn!("Ignoring ROM write at 0x{:08X} = 0x{:04X}", addr, value),
        }
    }
}

pub trait MemoryHandler {
    fn read8(&self, addr: u32) -> u8;
    fn write8(&mut self, addr: u32, value: u8);

    fn read16(&self, addr: u32) -> u16 {
        (self.read8(addr + 0) as u16) << 0 |
        (self.read8(addr + 1) as u16) << 8
    }
    fn write16(&mut self, addr: u32, value: u16) {
        self.write8(addr + 0, (value >> 0) as u8);
        self.write8(addr + 1, (value >> 8) as u8);
    }

    fn read32(&self, addr: u32) -> u32 {
        (self.read16(addr + 0) as u32) << 0 |
        (self.read16(addr + 2) as u32) << 16
    }
    fn write32(&mut self, addr: u32, value: u32) {
        self.write16(addr + 0, (value >> 0) as u16);
        self.write16(addr + 2, (value >> 16) as u16);
    }
}
