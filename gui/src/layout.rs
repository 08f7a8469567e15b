//! Fixed geometry of the 144x168 face.

use embedded_graphics::{
    prelude::{Point, Size},
    primitives::Rectangle,
};
use fuzzy_time::{Frame, Slot};
use u8g2_fonts::FontRenderer;

use crate::font;

pub const SCREEN_SIZE: Size = Size::new(144, 168);

/// Words slide in from here.
pub const OFFSCREEN_X: i32 = 150;

/// Where the indicator bar sits before the first tick.
pub const INDICATOR_START: Rectangle = Rectangle::new(Point::new(0, 166), Size::new(36, 1));

const fn frame(y: i32, height: u32) -> Rectangle {
    Rectangle::new(Point::new(0, y), Size::new(143, height))
}

pub const fn slot_frame(slot: Slot) -> Rectangle {
    match slot {
        Slot::First => frame(12, 48),
        Slot::Second => frame(62, 42),
        Slot::Third => frame(96, 48),
        Slot::FirstBetween => frame(27, 48),
        Slot::SecondBetween => frame(83, 48),
    }
}

pub fn slot_font(slot: Slot) -> FontRenderer {
    match slot {
        Slot::Second => font::small(),
        Slot::First | Slot::Third | Slot::FirstBetween | Slot::SecondBetween => font::big(),
    }
}

pub fn offscreen(frame: Rectangle) -> Rectangle {
    Rectangle::new(Point::new(OFFSCREEN_X, frame.top_left.y), frame.size)
}

pub fn to_rectangle(frame: Frame) -> Rectangle {
    Rectangle::new(
        Point::new(frame.x, frame.y),
        Size::new(frame.width, frame.height),
    )
}
