pub mod animation;
pub mod components;
pub mod display;
pub mod draw;
pub mod font;
pub mod layout;
pub mod page;
pub mod settings;
pub mod text;

pub use epd_waveshare::color::Color::{Black as White, White as Black};
pub use fuzzy_time;
