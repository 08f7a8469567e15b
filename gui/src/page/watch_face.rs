use std::{fmt::Debug, time::Duration};

use embedded_graphics::prelude::DrawTarget;
use epd_waveshare::color::Color;
use fuzzy_time::{FuzzyTime, Slot, TimeOfDay};

use crate::{
    components::{IndicatorLayer, WordLayer},
    draw::{clear, DrawError},
    settings::FaceSettings,
};

/// The whole face: five word slots and the rounding indicator.
///
/// Holds the only state that survives a tick, the words currently on screen.
pub struct WatchFace {
    words: [WordLayer; 5],
    indicator: IndicatorLayer,
    current: Option<FuzzyTime>,
}

impl WatchFace {
    pub fn new(settings: FaceSettings) -> Self {
        Self {
            words: Slot::ALL.map(|slot| WordLayer::new(slot, &settings)),
            indicator: IndicatorLayer::new(&settings),
            current: None,
        }
    }

    /// Result of the last tick.
    pub fn current(&self) -> Option<&FuzzyTime> {
        self.current.as_ref()
    }

    pub fn word_layer(&self, slot: Slot) -> &WordLayer {
        &self.words[slot.index()]
    }

    pub fn indicator(&self) -> &IndicatorLayer {
        &self.indicator
    }

    /// Formats `time` and starts the transitions. Returns the slots whose text changed.
    pub fn tick(&mut self, time: TimeOfDay) -> Vec<Slot> {
        let fuzzy = FuzzyTime::from(time);

        let changed = self
            .words
            .iter_mut()
            .filter_map(|layer| {
                let slot = layer.slot();
                layer.update(fuzzy.slots[slot]).then_some(slot)
            })
            .collect::<Vec<_>>();
        self.indicator.update(fuzzy.indicator());

        log::debug!(
            "{:02}:{:02} -> \"{}\" ({:+}), changed {:?}",
            time.hour(),
            time.minute(),
            fuzzy,
            fuzzy.delta.value(),
            changed
        );

        self.current = Some(fuzzy);
        changed
    }

    pub fn step(&mut self, dt: Duration) {
        for layer in &mut self.words {
            layer.step(dt);
        }
        self.indicator.step(dt);
    }

    pub fn is_animating(&self) -> bool {
        self.indicator.is_animating() || self.words.iter().any(WordLayer::is_animating)
    }

    /// Time until every running animation has settled.
    pub fn remaining(&self) -> Duration {
        self.words
            .iter()
            .map(WordLayer::remaining)
            .fold(self.indicator.remaining(), Duration::max)
    }

    /// Finishes all running animations.
    pub fn settle(&mut self) {
        self.step(self.remaining());
    }

    pub fn draw<Display>(&self, display: &mut Display) -> Result<(), DrawError>
    where
        Display: DrawTarget<Color = Color>,
        Display::Error: Debug,
    {
        clear(display)?;

        for layer in &self.words {
            layer.draw(display)?;
        }

        self.indicator.draw(display)?;

        Ok(())
    }
}

impl Default for WatchFace {
    fn default() -> Self {
        Self::new(FaceSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::{
        prelude::{Point, Size},
        primitives::Rectangle,
    };
    use fuzzy_time::{Delta, Word};

    use super::*;
    use crate::{display::FakeDisplay, layout, Black, White};

    fn at(hour: u8, minute: u8) -> TimeOfDay {
        TimeOfDay::new(hour, minute).unwrap()
    }

    fn render(face: &WatchFace) -> FakeDisplay<Color> {
        let mut display = FakeDisplay::with_default_color(layout::SCREEN_SIZE, Black);
        face.draw(&mut display).unwrap();
        display
    }

    #[test]
    fn first_tick_fills_the_three_line_slots() {
        let mut face = WatchFace::default();
        let changed = face.tick(at(4, 15));
        assert_eq!(changed, vec![Slot::First, Slot::Second, Slot::Third]);
        assert_eq!(face.current().unwrap().to_string(), "kwart over vier");
        assert!(face.is_animating());
    }

    #[test]
    fn unchanged_phrase_only_moves_the_indicator() {
        let mut face = WatchFace::default();
        face.tick(at(4, 15));
        face.settle();

        let changed = face.tick(at(4, 16));
        assert!(changed.is_empty());
        assert!(face.is_animating());
        assert!(!face.word_layer(Slot::First).is_animating());
        assert_eq!(face.current().unwrap().delta, Delta::PlusOne);
    }

    #[test]
    fn switching_layouts_clears_the_other_slots() {
        let mut face = WatchFace::default();
        face.tick(at(4, 15));
        face.settle();

        let changed = face.tick(at(4, 30));
        assert_eq!(changed, Slot::ALL.to_vec());
        assert_eq!(face.word_layer(Slot::First).word(), None);
        assert_eq!(face.word_layer(Slot::FirstBetween).word(), Some(Word::Half));
    }

    #[test]
    fn only_changed_words_slide() {
        let mut face = WatchFace::default();
        face.tick(at(4, 20));
        face.settle();

        // "tien voor half vijf" -> "vijf voor half vijf"
        let changed = face.tick(at(4, 25));
        assert_eq!(changed, vec![Slot::First]);
        assert!(face.word_layer(Slot::First).is_animating());
        assert!(!face.word_layer(Slot::Third).is_animating());
    }

    #[test]
    fn word_layers_are_found_by_slot() {
        let face = WatchFace::default();
        for slot in Slot::ALL {
            assert_eq!(face.word_layer(slot).slot(), slot);
        }
    }

    #[test]
    fn settle_finishes_everything() {
        let mut face = WatchFace::default();
        face.tick(at(8, 30));
        assert_eq!(face.remaining(), Duration::from_millis(500));
        face.settle();
        assert!(!face.is_animating());
        assert_eq!(face.remaining(), Duration::ZERO);
    }

    #[test]
    fn settled_face_shows_words_and_indicator() {
        let mut face = WatchFace::default();
        face.tick(at(4, 0));
        face.settle();
        let display = render(&face);

        let track = Rectangle::new(Point::new(0, 167), Size::new(144, 1));
        let bar = display.extent_of(track, White).unwrap();
        assert_eq!(bar, Rectangle::new(Point::new(56, 167), Size::new(32, 1)));
        assert_eq!(face.indicator().frame(), bar);
        assert_eq!(display.points_with(track, White).count(), 32);

        for slot in [Slot::FirstBetween, Slot::SecondBetween] {
            let frame = layout::slot_frame(slot);
            assert!(display.points_with(frame, White).count() > 0, "{slot:?}");
        }
    }

    #[test]
    fn redrawing_the_same_minute_is_identical() {
        let mut face = WatchFace::default();
        face.tick(at(16, 37));
        face.settle();
        let before = render(&face);

        face.tick(at(16, 37));
        face.settle();
        assert!(before.diff(&render(&face)).is_none());
    }

    #[test]
    fn mid_animation_text_is_partly_off_screen() {
        let mut face = WatchFace::default();
        face.tick(at(4, 15));
        face.settle();
        let settled = render(&face);

        face.tick(at(4, 20));
        face.step(Duration::from_millis(250));
        let moving = render(&face);
        assert!(settled.diff(&moving).is_some());
        assert!(face.word_layer(Slot::First).frame().top_left.x > 0);
    }
}
