//! Dutch "fuzzy" time: `16:37` becomes "vijf over half vijf".
//!
//! The formatter is pure. Each tick the host hands it a [`TimeOfDay`] and receives a
//! [`FuzzyTime`] describing the text of every display slot plus how far the spelled-out time
//! is from the real one.

mod clock;
mod indicator;
mod phrase;
mod round;
mod words;

pub use clock::{TickUnit, TimeOfDay};
pub use indicator::{Frame, IndicatorGeometry, TRACK_HEIGHT, TRACK_Y};
pub use phrase::{format, FuzzyTime, Layout, Slot, Slots};
pub use round::{round_minute, Delta, Rounded};
pub use words::{Hour, MinuteOffset, Word};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("hour {0} is not in 0..=23")]
    HourOutOfRange(u8),
    #[error("minute {0} is not in 0..=59")]
    MinuteOutOfRange(u8),
    #[error("no word for a {0} minute offset")]
    MinuteOffset(u8),
    #[error("rounding delta {0} is not in -2..=2")]
    Delta(i8),
}
