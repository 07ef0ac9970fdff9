bitflags! {
    /// Lines of the data register.
    pub struct Lines: u16 {
        const SCK = 1 << 0;
        const SIO = 1 << 1;
        const CS = 1 << 2;
        const UNUSED = 1 << 3; // Not connected on RTC carts
    }
}

bitflags! {
    /// Seiko S-3511A status register.
    pub struct Status: u8 {
        const INTFE = 1 << 1; // Frequency interrupt enable
        const INTME = 1 << 3; // Per-minute interrupt enable
        const INTAE = 1 << 5; // Alarm interrupt enable
        const HOUR_24 = 1 << 6;
        const POWER = 1 << 7;
    }
}

pub const DATA: u32 = 0xC4;
pub const DIRECTION: u32 = 0xC6;
pub const CONTROL: u32 = 0xC8;

pub const PIN_MASK: u16 = 0xF;
