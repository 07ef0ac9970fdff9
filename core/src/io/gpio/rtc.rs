use super::registers::Status;
use crate::clock::{DateTimeFields, TimeSource};

/// Seiko S-3511A as wired to the cartridge GPIO pins. Bits are shifted in
/// and out one per rising SCK edge by the owning GPIO bank.
pub struct RTC {
    // Outgoing bits, consumed from the top of the queued count
    rbits: u64,
    num_rbits: u32,
    // Incoming bits, newest in bit 0
    wbits: u64,
    num_wbits: u32,
    state: State,
    time_source: Box<dyn TimeSource>,
}

impl RTC {
    const MAX_BITS: u32 = 64;
    const COMMAND_BITS: u32 = 8;

    pub fn new(time_source: Box<dyn TimeSource>) -> RTC {
        RTC {
            rbits: 0,
            num_rbits: 0,
            wbits: 0,
            num_wbits: 0,
            state: State::Idle,
            time_source,
        }
    }

    pub fn reset(&mut self) {
        self.clear_read();
        self.clear_write();
        self.state = State::Idle;
    }

    pub fn state(&self) -> State { self.state }
    pub fn pending_read_bits(&self) -> u32 { self.num_rbits }
    pub fn pending_write_bits(&self) -> u32 { self.num_wbits }

    pub fn write_bit(&mut self, bit: bool) {
        self.wbits = self.wbits << 1 | bit as u64;
        self.num_wbits = (self.num_wbits + 1).min(RTC::MAX_BITS);
        trace!("RTC bit in: {} ({} buffered)", bit as u8, self.num_wbits);

        self.state = match self.state {
            State::Idle if self.num_wbits < RTC::COMMAND_BITS => State::Idle,
            State::Idle => {
                let byte = self.wbits as u8;
                self.clear_read();
                self.clear_write();
                self.dispatch(byte)
            },

            State::AwaitingPayload { command, bits } if self.num_wbits < bits =>
                State::AwaitingPayload { command, bits },
            State::AwaitingPayload { command, bits } => {
                // Writes are accepted but the chip state is derived from the host clock
                debug!("RTC {:?}: discarding {}-bit payload 0x{:X}", command, bits, self.wbits);
                self.clear_read();
                self.clear_write();
                State::Idle
            },

            // Only an external reset leaves this state
            State::Unknown(byte) => State::Unknown(byte),
        };
    }

    pub fn read_bit(&mut self) -> bool {
        if self.num_rbits == 0 { return false }
        self.num_rbits -= 1;
        let bit = self.rbits >> self.num_rbits & 0x1 != 0;
        trace!("RTC bit out: {} ({} left)", bit as u8, self.num_rbits);
        bit
    }

    fn dispatch(&mut self, byte: u8) -> State {
        let command = match Command::from(byte) {
            Some(command) => command,
            None => {
                warn!("Unknown RTC command 0x{:02X}, ignoring further bits until reset", byte);
                return State::Unknown(byte)
            },
        };
        debug!("RTC command 0x{:02X}: {:?}", byte, command);

        match command {
            Command::Reset => State::Idle,
            Command::ReadStatus => {
                self.send(Status::HOUR_24.bits());
                State::Idle
            },
            Command::ReadDateTime => {
                let now = DateTimeFields::from(self.time_source.now());
                for &value in [now.year, now.month, now.day, now.day_of_week].iter() {
                    self.send(decimal_to_bcd(value));
                }
                self.send_time(now);
                State::Idle
            },
            Command::ReadTime => {
                let now = DateTimeFields::from(self.time_source.now());
                self.send_time(now);
                State::Idle
            },
            Command::WriteStatus | Command::WriteDateTime | Command::WriteTime =>
                State::AwaitingPayload { command, bits: command.payload_bits() },
        }
    }

    fn send_time(&mut self, now: DateTimeFields) {
        for &value in [now.hour, now.minute, now.second].iter() {
            self.send(decimal_to_bcd(value));
        }
    }

    /// Queues a byte so that it leaves the chip LSB first, after anything already queued.
    fn send(&mut self, value: u8) {
        debug_assert!(self.num_rbits + 8 <= RTC::MAX_BITS);
        for i in 0..8 {
            self.rbits = self.rbits << 1 | (value >> i & 0x1) as u64;
        }
        self.num_rbits += 8;
    }

    fn clear_read(&mut self) {
        self.rbits = 0;
        self.num_rbits = 0;
    }

    fn clear_write(&mut self) {
        self.wbits = 0;
        self.num_wbits = 0;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Idle,
    AwaitingPayload { command: Command, bits: u32 },
    Unknown(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Reset,
    WriteStatus,
    ReadStatus,
    WriteDateTime,
    ReadDateTime,
    WriteTime,
    ReadTime,
}

impl Command {
    pub fn from(value: u8) -> Option<Command> {
        match value {
            0x60 | 0x61 => Some(Command::Reset),
            0x62 => Some(Command::WriteStatus),
            0x63 => Some(Command::ReadStatus),
            0x64 => Some(Command::WriteDateTime),
            0x65 => Some(Command::ReadDateTime),
            0x66 => Some(Command::WriteTime),
            0x67 => Some(Command::ReadTime),
            _ => None,
        }
    }

    pub fn payload_bits(self) -> u32 {
        match self {
            Command::WriteStatus => 8,
            Command::WriteDateTime => 56,
            Command::WriteTime => 24,
            _ => 0,
        }
    }
}

pub fn decimal_to_bcd(value: u8) -> u8 {
    debug_assert!(value < 100);
    (value / 10) << 4 | value % 10
}

pub fn bcd_to_decimal(value: u8) -> u8 {
    (value >> 4) * 10 + (value & 0xF)
}
