use std::{fmt::Debug, time::Duration};

use embedded_graphics::{
    prelude::{DrawTarget, DrawTargetExt},
    primitives::Rectangle,
};
use epd_waveshare::color::Color;
use fuzzy_time::{Slot, Word};
use u8g2_fonts::{types::HorizontalAlignment, FontRenderer};

use crate::{
    animation::FrameAnimation, draw::DrawError, layout, settings::FaceSettings, text::Text, White,
};

/// Text region of one slot. Slides in from the right whenever its word changes.
pub struct WordLayer {
    slot: Slot,
    font: FontRenderer,
    word: Option<Word>,
    animation: FrameAnimation,
}

impl WordLayer {
    pub fn new(slot: Slot, settings: &FaceSettings) -> Self {
        let frame = layout::slot_frame(slot);
        let mut animation = FrameAnimation::new(frame, settings);
        animation.set_values(layout::offscreen(frame), frame);

        Self {
            slot,
            font: layout::slot_font(slot),
            word: None,
            animation,
        }
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    /// Word currently on screen.
    pub fn word(&self) -> Option<Word> {
        self.word
    }

    pub fn frame(&self) -> Rectangle {
        self.animation.current()
    }

    /// Shows `word`, returning whether it differs from the word already shown.
    pub fn update(&mut self, word: Option<Word>) -> bool {
        if word == self.word {
            return false;
        }

        log::trace!(
            "{:?}: {:?} -> {:?}",
            self.slot,
            self.word.map_or("", Word::text),
            word.map_or("", Word::text)
        );
        // Starts off-screen, so the new text never flashes in its final position.
        self.animation.schedule();
        self.word = word;
        true
    }

    pub fn step(&mut self, dt: Duration) {
        self.animation.step(dt);
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }

    pub fn remaining(&self) -> Duration {
        self.animation.remaining()
    }

    pub fn draw<Display>(&self, display: &mut Display) -> Result<(), DrawError>
    where
        Display: DrawTarget<Color = Color>,
        Display::Error: Debug,
    {
        let Some(word) = self.word else {
            return Ok(());
        };

        let frame = self.frame();
        let mut clipped = display.clipped(&frame);

        Text::new(word.text(), &self.font)
            .x(frame.top_left.x + (frame.size.width / 2) as i32)
            .y(frame.top_left.y)
            .horizontal_align(HorizontalAlignment::Center)
            .draw(&mut clipped, White)?;

        Ok(())
    }
}
