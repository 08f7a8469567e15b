use std::time::Duration;

use embedded_graphics::{
    prelude::{Point, Size},
    primitives::Rectangle,
};

use crate::settings::FaceSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Curve {
    Linear,
    #[default]
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Curve {
    /// Maps linear progress in `0.0..=1.0` onto the curve. Both endpoints are fixed.
    pub fn apply(self, progress: f32) -> f32 {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Curve::Linear => t,
            Curve::EaseIn => t * t,
            Curve::EaseOut => t * (2.0 - t),
            Curve::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// Moves and resizes a rectangle from one frame to another.
///
/// Time only advances through [`FrameAnimation::step`], so the host decides the frame rate.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameAnimation {
    /// Resting frame while idle.
    frame: Rectangle,
    from: Rectangle,
    to: Rectangle,
    duration: Duration,
    curve: Curve,
    elapsed: Option<Duration>,
}

impl FrameAnimation {
    pub fn new(frame: Rectangle, settings: &FaceSettings) -> Self {
        Self {
            frame,
            from: frame,
            to: frame,
            duration: settings.animation_duration,
            curve: settings.curve,
            elapsed: None,
        }
    }

    pub fn set_values(&mut self, from: Rectangle, to: Rectangle) {
        self.from = from;
        self.to = to;
    }

    /// Jumps to `from` and starts over, even if a previous run has not finished.
    pub fn schedule(&mut self) {
        if self.duration.is_zero() {
            self.frame = self.to;
            self.elapsed = None;
        } else {
            self.frame = self.from;
            self.elapsed = Some(Duration::ZERO);
        }
    }

    pub fn step(&mut self, dt: Duration) {
        let Some(elapsed) = self.elapsed else {
            return;
        };

        let elapsed = elapsed + dt;
        if elapsed >= self.duration {
            self.frame = self.to;
            self.elapsed = None;
        } else {
            self.elapsed = Some(elapsed);
        }
    }

    pub fn is_running(&self) -> bool {
        self.elapsed.is_some()
    }

    /// Time left until the animation settles.
    pub fn remaining(&self) -> Duration {
        self.elapsed
            .map_or(Duration::ZERO, |elapsed| self.duration.saturating_sub(elapsed))
    }

    pub fn current(&self) -> Rectangle {
        let Some(elapsed) = self.elapsed else {
            return self.frame;
        };

        let t = self
            .curve
            .apply(elapsed.as_secs_f32() / self.duration.as_secs_f32());
        let lerp = |from: i32, to: i32| from + ((to - from) as f32 * t).round() as i32;

        Rectangle::new(
            Point::new(
                lerp(self.from.top_left.x, self.to.top_left.x),
                lerp(self.from.top_left.y, self.to.top_left.y),
            ),
            Size::new(
                lerp(self.from.size.width as i32, self.to.size.width as i32) as u32,
                lerp(self.from.size.height as i32, self.to.size.height as i32) as u32,
            ),
        )
    }
}
