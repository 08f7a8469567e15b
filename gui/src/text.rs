use embedded_graphics::{
    prelude::{DrawTarget, Point},
    primitives::Rectangle,
};
use epd_waveshare::color::Color;
use std::fmt::Debug;
use u8g2_fonts::{
    types::{FontColor, HorizontalAlignment, VerticalPosition},
    FontRenderer,
};

use crate::draw::DrawError;

pub struct Text<'a> {
    text: &'a str,
    font: &'a FontRenderer,
    position: Point,
    vertical_pos: VerticalPosition,
    horizontal_align: HorizontalAlignment,
}

impl<'a> Text<'a> {
    pub fn new(text: &'a str, font: &'a FontRenderer) -> Self {
        Self {
            text,
            font,
            position: Point::zero(),
            vertical_pos: VerticalPosition::Top,
            horizontal_align: HorizontalAlignment::Left,
        }
    }

    pub fn x(mut self, x: i32) -> Self {
        self.position.x = x;
        self
    }

    pub fn y(mut self, y: i32) -> Self {
        self.position.y = y;
        self
    }

    pub fn horizontal_align(mut self, horizontal_align: HorizontalAlignment) -> Self {
        self.horizontal_align = horizontal_align;
        self
    }

    /// Returns the drawn area, `None` for text without visible glyphs.
    pub fn draw<Display>(
        &self,
        display: &mut Display,
        color: Color,
    ) -> Result<Option<Rectangle>, DrawError>
    where
        Display: DrawTarget<Color = Color>,
        Display::Error: Debug,
    {
        self.font
            .render_aligned(
                self.text,
                self.position,
                self.vertical_pos,
                self.horizontal_align,
                FontColor::Transparent(color),
                display,
            )
            .map_err(|err| DrawError::DrawFailed(format!("{:?}", err)))
    }
}
