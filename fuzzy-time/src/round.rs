use crate::Error;

/// Signed distance between the real minute and the minute that is spelled out.
///
/// Negative means the phrase was rounded up (it is slightly early), positive means it was
/// rounded down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Delta {
    MinusTwo,
    MinusOne,
    Zero,
    PlusOne,
    PlusTwo,
}

impl Delta {
    pub const ALL: [Delta; 5] = [
        Delta::MinusTwo,
        Delta::MinusOne,
        Delta::Zero,
        Delta::PlusOne,
        Delta::PlusTwo,
    ];

    pub const fn value(self) -> i8 {
        self.position() as i8 - 2
    }

    /// Position along the indicator track, left to right.
    pub const fn position(self) -> usize {
        match self {
            Delta::MinusTwo => 0,
            Delta::MinusOne => 1,
            Delta::Zero => 2,
            Delta::PlusOne => 3,
            Delta::PlusTwo => 4,
        }
    }
}

impl TryFrom<i8> for Delta {
    type Error = Error;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -2..=2 => Ok(Self::ALL[(value + 2) as usize]),
            other => Err(Error::Delta(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rounded {
    /// Multiple of five in `0..=60`; 60 means the hour has to carry.
    pub minute: u8,
    pub delta: Delta,
}

impl Rounded {
    pub const fn carries(&self) -> bool {
        self.minute == 60
    }
}

/// Rounds to the nearest five minutes, halves going up.
pub fn round_minute(minute: u8) -> Rounded {
    debug_assert!(minute < 60, "minute {minute} out of range");
    let minute = minute.min(59);

    let rounded = (minute + 2) / 5 * 5;
    let delta = Delta::try_from(minute as i8 - rounded as i8).unwrap_or_else(|err| {
        debug_assert!(false, "{err}");
        Delta::Zero
    });

    Rounded {
        minute: rounded,
        delta,
    }
}
