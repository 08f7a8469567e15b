use embedded_graphics::prelude::Point;
use epd_waveshare::{
    color::Color,
    epd1in54_v2::{HEIGHT, WIDTH},
    graphics::{VarDisplay, VarDisplayError},
};
use fuzzy_gui::layout::SCREEN_SIZE;

pub use epd_waveshare::color::Color::{Black as White, White as Black};

pub const DISPLAY_BUFFER_SIZE: usize = epd_waveshare::buffer_len(WIDTH as usize, HEIGHT as usize);

/// Top left corner of the face, centred on the panel.
pub const FACE_OFFSET: Point = Point::new(
    (WIDTH as i32 - SCREEN_SIZE.width as i32) / 2,
    (HEIGHT as i32 - SCREEN_SIZE.height as i32) / 2,
);

pub fn create_display() -> Result<VarDisplay<'static, Color>, VarDisplayError> {
    let display_buffer = vec![0; DISPLAY_BUFFER_SIZE].into_boxed_slice();
    VarDisplay::<Color>::new(WIDTH, HEIGHT, Box::leak(display_buffer), false)
}
