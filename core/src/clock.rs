use std::fmt;

use chrono::{Datelike, Local, NaiveDateTime, Timelike};

/// Where the RTC gets "now" from when a game asks for the date or time.
pub trait TimeSource {
    fn now(&self) -> NaiveDateTime;
}

pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDateTime);

impl TimeSource for FixedClock {
    fn now(&self) -> NaiveDateTime { self.0 }
}

/// Calendar fields in the ranges the RTC reports them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateTimeFields {
    pub year: u8,
    pub month: u8,
    pub day: u8,
    pub day_of_week: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl From<NaiveDateTime> for DateTimeFields {
    fn from(date_time: NaiveDateTime) -> DateTimeFields {
        DateTimeFields {
            year: date_time.year().rem_euclid(100) as u8,
            month: date_time.month() as u8,
            day: date_time.day() as u8,
            day_of_week: date_time.weekday().num_days_from_sunday() as u8,
            hour: date_time.hour() as u8,
            minute: date_time.minute() as u8,
            // Leap seconds show up as nanoseconds past 1e9, not as second 60
            second: date_time.second().min(59) as u8,
        }
    }
}

impl fmt::Display for DateTimeFields {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}-{:02}-{:02} {:02}:{:02}:{:02} (weekday {})",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.day_of_week)
    }
}
