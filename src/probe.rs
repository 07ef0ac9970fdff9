use rtc_core::clock::DateTimeFields;
use rtc_core::io::gpio::{self, bcd_to_decimal, Lines, Status};
use rtc_core::{Cartridge, MemoryHandler};

const DATA: u32 = Cartridge::ROM_START + gpio::DATA;
const DIRECTION: u32 = Cartridge::ROM_START + gpio::DIRECTION;
const CONTROL: u32 = Cartridge::ROM_START + gpio::CONTROL;

/// Plays the game's side of the RTC protocol over the cartridge bus.
pub struct Probe {
    cart: Cartridge,
}

impl Probe {
    const RESET: u8 = 0x60;
    const READ_STATUS: u8 = 0x63;
    const READ_DATE_TIME: u8 = 0x65;
    const READ_TIME: u8 = 0x67;

    pub fn new(cart: Cartridge) -> Probe {
        Probe { cart }
    }

    pub fn read_status(&mut self) -> Status {
        let bytes = self.transaction(Probe::READ_STATUS, 1);
        Status::from_bits_truncate(bytes[0])
    }

    pub fn read_date_time(&mut self) -> DateTimeFields {
        let bytes: Vec<u8> = self.transaction(Probe::READ_DATE_TIME, 7).into_iter().map(bcd_to_decimal).collect();
        DateTimeFields {
            year: bytes[0],
            month: bytes[1],
            day: bytes[2],
            day_of_week: bytes[3],
            hour: bytes[4],
            minute: bytes[5],
            second: bytes[6],
        }
    }

    pub fn read_time(&mut self) -> (u8, u8, u8) {
        let bytes: Vec<u8> = self.transaction(Probe::READ_TIME, 3).into_iter().map(bcd_to_decimal).collect();
        (bytes[0], bytes[1], bytes[2])
    }

    pub fn reset(&mut self) {
        self.transaction(Probe::RESET, 0);
    }

    fn transaction(&mut self, command: u8, len: usize) -> Vec<u8> {
        self.cart.write16(CONTROL, 1);
        self.cart.write16(DIRECTION, (Lines::SCK | Lines::SIO | Lines::CS).bits());
        self.cart.write16(DATA, Lines::SCK.bits());
        self.cart.write16(DATA, (Lines::SCK | Lines::CS).bits());

        debug!("Sending RTC command 0x{:02X}", command);
        for i in (0..8).rev() { self.send_bit(command >> i & 0x1 != 0) }

        self.cart.write16(DIRECTION, (Lines::SCK | Lines::CS).bits());
        let bytes = (0..len).map(|_| self.recv_byte()).collect();

        self.cart.write16(DATA, Lines::SCK.bits());
        bytes
    }

    fn send_bit(&mut self, bit: bool) {
        let sio = if bit { Lines::SIO } else { Lines::empty() };
        self.cart.write16(DATA, (Lines::CS | sio).bits());
        self.cart.write16(DATA, (Lines::CS | Lines::SCK | sio).bits());
    }

    // Each byte comes back LSB first
    fn recv_byte(&mut self) -> u8 {
        (0..8).fold(0, |byte, i| {
            self.cart.write16(DATA, Lines::CS.bits());
            self.cart.write16(DATA, (Lines::CS | Lines::SCK).bits());
            let sio = Lines::from_bits_truncate(self.cart.read16(DATA)).contains(Lines::SIO);
            byte | (sio as u8) << i
        })
    }
}
