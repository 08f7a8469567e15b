use std::time::Duration;

use crate::animation::Curve;

/// Tunables of the face. The layout itself is fixed, see [`crate::layout`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceSettings {
    pub animation_duration: Duration,
    pub curve: Curve,
}

impl Default for FaceSettings {
    fn default() -> Self {
        Self {
            animation_duration: Duration::from_millis(500),
            curve: Curve::EaseIn,
        }
    }
}

impl FaceSettings {
    pub fn animation_duration(mut self, animation_duration: Duration) -> Self {
        self.animation_duration = animation_duration;
        self
    }

    pub fn curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }
}
