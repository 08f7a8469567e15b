use std::fmt;

use crate::Error;

/// Hour of a 12-hour dial.
///
/// Noon and midnight are both `Twaalf`, so `hour(h)` and `hour(h + 12)` always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Hour {
    Twaalf,
    Een,
    Twee,
    Drie,
    Vier,
    Vijf,
    Zes,
    Zeven,
    Acht,
    Negen,
    Tien,
    Elf,
}

impl Hour {
    const DIAL: [Hour; 12] = [
        Hour::Twaalf,
        Hour::Een,
        Hour::Twee,
        Hour::Drie,
        Hour::Vier,
        Hour::Vijf,
        Hour::Zes,
        Hour::Zeven,
        Hour::Acht,
        Hour::Negen,
        Hour::Tien,
        Hour::Elf,
    ];

    /// Accepts a wall clock hour, or one that has already been incremented (24 is fine).
    pub const fn from_hour(hour: u8) -> Self {
        Self::DIAL[(hour % 12) as usize]
    }

    pub const fn next(self) -> Self {
        Self::from_hour(self as u8 + 1)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Hour::Twaalf => "twaalf",
            Hour::Een => "een",
            Hour::Twee => "twee",
            Hour::Drie => "drie",
            Hour::Vier => "vier",
            Hour::Vijf => "vijf",
            Hour::Zes => "zes",
            Hour::Zeven => "zeven",
            Hour::Acht => "acht",
            Hour::Negen => "negen",
            Hour::Tien => "tien",
            Hour::Elf => "elf",
        }
    }
}

/// The only minute counts that are ever spelled out; quarters and halves have their own words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinuteOffset {
    Vijf,
    Tien,
}

impl MinuteOffset {
    pub const fn minutes(self) -> u8 {
        match self {
            MinuteOffset::Vijf => 5,
            MinuteOffset::Tien => 10,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            MinuteOffset::Vijf => "vijf",
            MinuteOffset::Tien => "tien",
        }
    }
}

impl TryFrom<u8> for MinuteOffset {
    type Error = Error;

    fn try_from(minutes: u8) -> Result<Self, Self::Error> {
        match minutes {
            5 => Ok(MinuteOffset::Vijf),
            10 => Ok(MinuteOffset::Tien),
            other => Err(Error::MinuteOffset(other)),
        }
    }
}

/// Every phrase fragment the face can show.
///
/// Slots compare words by value to decide whether a transition is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Word {
    Hour(Hour),
    Minutes(MinuteOffset),
    Uur,
    Half,
    Kwart,
    Over,
    Voor,
    OverHalf,
    VoorHalf,
}

impl Word {
    pub const fn text(self) -> &'static str {
        match self {
            Word::Hour(hour) => hour.name(),
            Word::Minutes(offset) => offset.name(),
            Word::Uur => "uur",
            Word::Half => "half",
            Word::Kwart => "kwart",
            Word::Over => "over",
            Word::Voor => "voor",
            Word::OverHalf => "over half",
            Word::VoorHalf => "voor half",
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
