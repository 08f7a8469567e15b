use std::time::Duration;

use chrono::Timelike;

use crate::Error;

/// How often the face is ticked, and which clock fields feed the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TickUnit {
    #[default]
    Minute,
    /// Runs a whole day in 24 minutes: the minute stands in for the hour and the second for
    /// the minute.
    Second,
}

impl TickUnit {
    pub const fn period(self) -> Duration {
        match self {
            TickUnit::Minute => Duration::from_secs(60),
            TickUnit::Second => Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Result<Self, Error> {
        if hour > 23 {
            return Err(Error::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(Error::MinuteOutOfRange(minute));
        }
        Ok(Self { hour, minute })
    }

    pub fn from_clock<T: Timelike>(clock: &T, unit: TickUnit) -> Self {
        let (hour, minute) = match unit {
            TickUnit::Minute => (clock.hour(), clock.minute()),
            TickUnit::Second => (clock.minute() % 24, clock.second()),
        };
        Self {
            hour: hour as u8,
            minute: minute as u8,
        }
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }
}
