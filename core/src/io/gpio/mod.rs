mod registers;
mod rtc;

pub use registers::{Lines, Status, CONTROL, DATA, DIRECTION};
pub use rtc::{bcd_to_decimal, decimal_to_bcd, Command, State, RTC};

use crate::clock::TimeSource;
use registers::PIN_MASK;

/// Cartridge GPIO port with the RTC hanging off its pins.
pub struct Gpio {
    data: Lines,
    // 1 = driven by the GBA
    direction: Lines,
    read_enabled: bool,
    rtc: RTC,
}

impl Gpio {
    pub fn new(time_source: Box<dyn TimeSource>) -> Gpio {
        Gpio {
            data: Lines::empty(),
            direction: Lines::empty(),
            read_enabled: false,
            rtc: RTC::new(time_source),
        }
    }

    pub fn init(&mut self) {
        self.data = Lines::empty();
        self.direction = Lines::empty();
        self.read_enabled = false;
        self.rtc.reset();
    }

    pub fn rtc(&self) -> &RTC { &self.rtc }
    pub fn read_enabled(&self) -> bool { self.read_enabled }

    pub fn read_halfword(&self, addr: u32) -> u16 {
        if !self.read_enabled { return 0 }
        match addr {
            DATA => self.data.bits(),
            DIRECTION => self.direction.bits(),
            CONTROL => self.read_enabled as u16,
            _ => 0,
        }
    }

    pub fn write_halfword(&mut self, addr: u32, value: u16) {
        match addr {
            DATA => {
                let prev_data = self.data;
                self.data = Lines::from_bits_truncate(value & PIN_MASK);
                let rising_sck = !prev_data.contains(Lines::SCK) && self.data.contains(Lines::SCK);
                if rising_sck && self.data.contains(Lines::CS) { self.clock_rtc() }
            },
            DIRECTION => self.direction = Lines::from_bits_truncate(value & PIN_MASK),
            CONTROL => self.read_enabled = value & 0x1 != 0,
            _ => trace!("Ignoring GPIO write to 0x{:02X} = 0x{:04X}", addr, value),
        }
    }

    fn clock_rtc(&mut self) {
        if self.direction.contains(Lines::SIO) {
            self.rtc.write_bit(self.data.contains(Lines::SIO));
        } else {
            let bit = self.rtc.read_bit();
            self.data.set(Lines::SIO, bit);
        }
    }
}
