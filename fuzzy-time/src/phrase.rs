use std::{fmt, ops::Index};

use crate::{round_minute, Delta, Hour, IndicatorGeometry, MinuteOffset, TimeOfDay, Word};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    First,
    FirstBetween,
    Second,
    SecondBetween,
    Third,
}

impl Slot {
    pub const ALL: [Slot; 5] = [
        Slot::First,
        Slot::FirstBetween,
        Slot::Second,
        Slot::SecondBetween,
        Slot::Third,
    ];

    pub const fn layout(self) -> Layout {
        match self {
            Slot::FirstBetween | Slot::SecondBetween => Layout::Between,
            Slot::First | Slot::Second | Slot::Third => Layout::ThreeSlot,
        }
    }

    /// Position in [`Slot::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Which group of slots a phrase occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Two large lines: "vier uur", "half negen".
    Between,
    /// Minutes, relation, hour: "tien voor half negen".
    ThreeSlot,
}

/// Text of all five slots; `None` is an empty slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Slots([Option<Word>; 5]);

impl Slots {
    fn between(first: Word, second: Word) -> Self {
        let mut slots = Self::default();
        slots.0[Slot::FirstBetween.index()] = Some(first);
        slots.0[Slot::SecondBetween.index()] = Some(second);
        slots
    }

    fn three(first: Option<Word>, second: Word, third: Word) -> Self {
        let mut slots = Self::default();
        slots.0[Slot::First.index()] = first;
        slots.0[Slot::Second.index()] = Some(second);
        slots.0[Slot::Third.index()] = Some(third);
        slots
    }

    pub fn get(&self, slot: Slot) -> Option<Word> {
        self.0[slot.index()]
    }

    pub fn text(&self, slot: Slot) -> &'static str {
        self.get(slot).map_or("", Word::text)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, Option<Word>)> + '_ {
        Slot::ALL.into_iter().map(|slot| (slot, self.get(slot)))
    }

    /// Populated words, top to bottom.
    pub fn words(&self) -> impl Iterator<Item = Word> + '_ {
        Slot::ALL.into_iter().filter_map(|slot| self.get(slot))
    }
}

impl Index<Slot> for Slots {
    type Output = Option<Word>;

    fn index(&self, slot: Slot) -> &Self::Output {
        &self.0[slot.index()]
    }
}

/// Everything the face needs for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FuzzyTime {
    /// Hour the rounded minute belongs to, after a carry from `:58` or `:59`.
    pub hour: u8,
    /// Rounded minute, `0..=55`.
    pub minute: u8,
    pub layout: Layout,
    pub slots: Slots,
    pub delta: Delta,
}

impl FuzzyTime {
    pub fn indicator(&self) -> IndicatorGeometry {
        IndicatorGeometry::for_delta(self.delta)
    }

    pub fn text(&self, slot: Slot) -> &'static str {
        self.slots.text(slot)
    }
}

impl From<TimeOfDay> for FuzzyTime {
    fn from(time: TimeOfDay) -> Self {
        format(time.hour(), time.minute())
    }
}

impl fmt::Display for FuzzyTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.slots.words().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}

/// Spells out `hour:minute` in Dutch, rounded to five minutes.
pub fn format(hour: u8, minute: u8) -> FuzzyTime {
    debug_assert!(hour < 24, "hour {hour} out of range");
    let hour = hour % 24;

    let rounded = round_minute(minute);
    let (hour, minute) = if rounded.carries() {
        ((hour + 1) % 24, 0)
    } else {
        (hour, rounded.minute)
    };

    let this_hour = Word::Hour(Hour::from_hour(hour));
    let next_hour = Word::Hour(Hour::from_hour(hour).next());

    let (layout, slots) = match minute {
        0 => (Layout::Between, Slots::between(this_hour, Word::Uur)),
        30 => (Layout::Between, Slots::between(Word::Half, next_hour)),
        15 => (
            Layout::ThreeSlot,
            Slots::three(Some(Word::Kwart), Word::Over, this_hour),
        ),
        45 => (
            Layout::ThreeSlot,
            Slots::three(Some(Word::Kwart), Word::Voor, next_hour),
        ),
        m if m > 30 && m < 45 => (
            Layout::ThreeSlot,
            Slots::three(minutes(m - 30), Word::OverHalf, next_hour),
        ),
        m if m > 45 => (
            Layout::ThreeSlot,
            Slots::three(minutes(60 - m), Word::Voor, next_hour),
        ),
        m if m > 15 => (
            Layout::ThreeSlot,
            Slots::three(minutes(30 - m), Word::VoorHalf, next_hour),
        ),
        m => (
            Layout::ThreeSlot,
            Slots::three(minutes(m), Word::Over, this_hour),
        ),
    };

    FuzzyTime {
        hour,
        minute,
        layout,
        slots,
        delta: rounded.delta,
    }
}

fn minutes(offset: u8) -> Option<Word> {
    match MinuteOffset::try_from(offset) {
        Ok(offset) => Some(Word::Minutes(offset)),
        Err(err) => {
            debug_assert!(false, "{err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(time: &FuzzyTime) -> [&'static str; 5] {
        Slot::ALL.map(|slot| time.text(slot))
    }

    #[test]
    fn full_hour() {
        let time = format(4, 0);
        assert_eq!(time.layout, Layout::Between);
        assert_eq!(texts(&time), ["", "vier", "", "uur", ""]);
        assert_eq!(time.delta, Delta::Zero);
    }

    #[test]
    fn half_hour_names_the_next_hour() {
        let time = format(8, 30);
        assert_eq!(texts(&time), ["", "half", "", "negen", ""]);
        assert_eq!(time.delta, Delta::Zero);
    }

    #[test]
    fn quarters() {
        assert_eq!(texts(&format(4, 15)), ["kwart", "", "over", "", "vier"]);
        assert_eq!(texts(&format(4, 45)), ["kwart", "", "voor", "", "vijf"]);
        assert_eq!(format(4, 45).delta, Delta::Zero);
    }

    #[test]
    fn past_half() {
        let time = format(4, 37);
        assert_eq!(time.minute, 35);
        assert_eq!(texts(&time), ["vijf", "", "over half", "", "vijf"]);
        assert_eq!(time.delta, Delta::PlusTwo);
    }

    #[test]
    fn rounding_up_carries_into_the_next_hour() {
        let time = format(4, 58);
        assert_eq!((time.hour, time.minute), (5, 0));
        assert_eq!(texts(&time), ["", "vijf", "", "uur", ""]);
        assert_eq!(time.delta, Delta::MinusTwo);
        assert_eq!(time.delta.value().abs(), 2);
    }

    #[test]
    fn carry_wraps_past_midnight() {
        let time = format(23, 59);
        assert_eq!((time.hour, time.minute), (0, 0));
        assert_eq!(time.to_string(), "twaalf uur");
    }

    #[test]
    fn every_five_minutes_of_an_hour() {
        let expected = [
            "acht uur",
            "vijf over acht",
            "tien over acht",
            "kwart over acht",
            "tien voor half negen",
            "vijf voor half negen",
            "half negen",
            "vijf over half negen",
            "tien over half negen",
            "kwart voor negen",
            "tien voor negen",
            "vijf voor negen",
        ];
        for (i, phrase) in expected.iter().enumerate() {
            assert_eq!(format(8, i as u8 * 5).to_string(), *phrase);
        }
    }

    #[test]
    fn layouts_never_mix() {
        for hour in 0..24 {
            for minute in 0..60 {
                let time = format(hour, minute);
                for (slot, word) in time.slots.iter() {
                    if slot.layout() != time.layout {
                        assert_eq!(word, None, "{hour}:{minute} {slot:?}");
                    }
                }
                let populated = time.slots.words().count();
                match time.layout {
                    Layout::Between => assert_eq!(populated, 2),
                    Layout::ThreeSlot => assert_eq!(populated, 3),
                }
            }
        }
    }

    #[test]
    fn minute_words_are_only_five_or_ten() {
        for hour in 0..24 {
            for minute in 0..60 {
                let time = format(hour, minute);
                if let Some(Word::Minutes(offset)) = time.slots[Slot::First] {
                    assert!(matches!(offset.minutes(), 5 | 10));
                }
                if time.layout == Layout::ThreeSlot {
                    assert!(time.slots[Slot::First].is_some(), "{hour}:{minute}");
                }
            }
        }
    }

    #[test]
    fn formatting_is_repeatable() {
        for hour in 0..24 {
            for minute in 0..60 {
                assert_eq!(format(hour, minute), format(hour, minute));
            }
        }
    }

    #[test]
    fn slot_index_follows_reading_order() {
        for (i, slot) in Slot::ALL.into_iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "minute 60 out of range")]
    fn minute_past_the_hour_is_a_bug() {
        format(4, 60);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "hour 24 out of range")]
    fn hour_past_the_day_is_a_bug() {
        format(24, 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "no word for a 15 minute offset")]
    fn minute_word_outside_the_table_is_a_bug() {
        minutes(15);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn release_builds_clamp_bad_input() {
        assert_eq!(format(4, 60), format(4, 59));
        assert_eq!(format(24, 10), format(0, 10));
        assert_eq!(minutes(15), None);
    }

    #[test]
    fn twelve_hour_dial() {
        for hour in 0..12 {
            for minute in (0..60).step_by(7) {
                assert_eq!(
                    format(hour, minute).slots,
                    format(hour + 12, minute).slots
                );
            }
        }
    }
}
