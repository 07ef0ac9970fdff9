#[macro_use]
extern crate log;

mod probe;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use simplelog::{Config, SimpleLogger};

use probe::Probe;
use rtc_core::io::ROM;
use rtc_core::{Cartridge, FixedClock, SystemClock, TimeSource};

#[derive(Parser)]
#[command(name = "gba-rtc", about = "Query an emulated GBA cartridge RTC through its GPIO port")]
struct Args {
    /// ROM image to attach the RTC to
    #[arg(long)]
    rom: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = Request::DateTime)]
    command: Request,
    /// Report this instant instead of the host clock, e.g. 2024-03-15T13:07:42
    #[arg(long)]
    at: Option<String>,
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Request {
    Status,
    DateTime,
    Time,
    Reset,
}

fn main() -> Result<()> {
    let args = Args::parse();
    SimpleLogger::init(args.log_level, Config::default()).context("Unable to initialize logger")?;

    let time_source: Box<dyn TimeSource> = match &args.at {
        Some(at) => {
            let instant = at.parse::<NaiveDateTime>().with_context(|| format!("Invalid time {:?}", at))?;
            Box::new(FixedClock(instant))
        },
        None => Box::new(SystemClock),
    };

    let rom = match &args.rom {
        Some(path) => {
            let mem = fs::read(path).with_context(|| format!("Unable to read ROM {}", path.display()))?;
            let rom = ROM::new(mem);
            if !rom.has_rtc() { warn!("{} does not carry the RTC identifier", path.display()) }
            rom
        },
        None => ROM::new(vec![0; 0x200]),
    };

    let mut probe = Probe::new(Cartridge::new(rom, time_source));
    match args.command {
        Request::Status => {
            let status = probe.read_status();
            println!("Status: 0x{:02X} {:?}", status.bits(), status);
        },
        Request::DateTime => println!("{}", probe.read_date_time()),
        Request::Time => {
            let (hour, minute, second) = probe.read_time();
            println!("{:02}:{:02}:{:02}", hour, minute, second);
        },
        Request::Reset => {
            probe.reset();
            println!("RTC reset");
        },
    }
    Ok(())
}
