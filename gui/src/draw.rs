use embedded_graphics::{
    prelude::{DrawTarget, Primitive},
    primitives::{PrimitiveStyleBuilder, Rectangle},
    Drawable,
};
use epd_waveshare::color::Color;
use std::fmt::Debug;
use thiserror::Error;

use crate::Black;

pub fn clear<Display>(display: &mut Display) -> Result<(), DrawError>
where
    Display: DrawTarget<Color = Color>,
{
    display
        .clear(Black)
        .map_err(|_| DrawError::DrawFailed("Failed to clear display".to_string()))
}

pub fn fill_rect<Display>(
    display: &mut Display,
    rect: Rectangle,
    color: Color,
) -> Result<(), DrawError>
where
    Display: DrawTarget<Color = Color>,
    Display::Error: Debug,
{
    let style = PrimitiveStyleBuilder::new().fill_color(color).build();

    rect.into_styled(style)
        .draw(display)
        .map_err(|err| DrawError::DrawFailed(format!("{:?}", err)))
}

#[derive(Debug, Error)]
pub enum DrawError {
    #[error("Draw failed: {0}")]
    DrawFailed(String),
}
