use std::{fmt::Debug, time::Duration};

use embedded_graphics::{prelude::DrawTarget, primitives::Rectangle};
use epd_waveshare::color::Color;
use fuzzy_time::IndicatorGeometry;

use crate::{
    animation::FrameAnimation,
    draw::{fill_rect, DrawError},
    layout,
    settings::FaceSettings,
    White,
};

/// Thin bar under the text showing how far the phrase was rounded.
pub struct IndicatorLayer {
    animation: FrameAnimation,
}

impl IndicatorLayer {
    pub fn new(settings: &FaceSettings) -> Self {
        Self {
            animation: FrameAnimation::new(layout::INDICATOR_START, settings),
        }
    }

    pub fn frame(&self) -> Rectangle {
        self.animation.current()
    }

    /// Moves the bar on every tick, even when the rounding did not change.
    pub fn update(&mut self, geometry: IndicatorGeometry) {
        self.animation.set_values(
            layout::to_rectangle(geometry.from),
            layout::to_rectangle(geometry.to),
        );
        self.animation.schedule();
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
        fill_rect(display, self.frame(), White)
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::{Point, Size};
    use fuzzy_time::Delta;

    use super::*;

    #[test]
    fn starts_under_the_left_edge() {
        let layer = IndicatorLayer::new(&FaceSettings::default());
        assert_eq!(
            layer.frame(),
            Rectangle::new(Point::new(0, 166), Size::new(36, 1))
        );
    }

    #[test]
    fn slides_between_segments() {
        let mut layer = IndicatorLayer::new(&FaceSettings::default());
        layer.update(IndicatorGeometry::for_delta(Delta::PlusOne));
        assert!(layer.is_animating());
        assert_eq!(
            layer.frame(),
            Rectangle::new(Point::new(56, 167), Size::new(32, 1))
        );

        layer.step(Duration::from_millis(500));
        assert!(!layer.is_animating());
        assert_eq!(
            layer.frame(),
            Rectangle::new(Point::new(84, 167), Size::new(28, 1))
        );
    }

    #[test]
    fn same_delta_still_animates() {
        let geometry = IndicatorGeometry::for_delta(Delta::Zero);
        let mut layer = IndicatorLayer::new(&FaceSettings::default());
        layer.update(geometry);
        layer.step(Duration::from_secs(1));

        layer.update(geometry);
        assert!(layer.is_animating());
    }
}
