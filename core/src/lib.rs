#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate log;

pub mod clock;
pub mod io;

pub use clock::{FixedClock, SystemClock, TimeSource};
pub use io::gpio::{Gpio, RTC};
pub use io::{Cartridge, MemoryHandler};
