pub struct ROM {
    mem: Vec<u8>,
}

impl ROM {
    const RTC_ID: &'static [u8] = b"SIIRTC_V";

    pub fn new(mem: Vec<u8>) -> ROM {
        ROM { mem }
    }

    /// Games built against the RTC library carry its identifier string.
    pub fn has_rtc(&self) -> bool {
        self.mem.windows(ROM::RTC_ID.len()).any(|window| window == ROM::RTC_ID)
    }

    pub fn read8(&self, offset: u32) -> u8 {
        let offset = offset as usize;
        if offset < self.mem.len() { self.mem[offset] }
        else { warn!("Returning Invalid ROM Read at offset 0x{:08X}", offset); 0 }
    }
}
