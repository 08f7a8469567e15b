use anyhow::Context;
use chrono::Local;
use embedded_graphics_simulator::{BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay};
use epd_waveshare::color::Color::{self};
use fuzzy_gui::{
    fuzzy_time::{TickUnit, TimeOfDay},
    layout::SCREEN_SIZE,
    page::WatchFace,
};

fn parse_time(arg: &str) -> anyhow::Result<TimeOfDay> {
    let (hour, minute) = arg
        .split_once(':')
        .with_context(|| format!("expected HH:MM, got {arg:?}"))?;
    Ok(TimeOfDay::new(hour.parse()?, minute.parse()?)?)
}

/// `to-image [HH:MM] [output.png]`, defaulting to the current time.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut display: SimulatorDisplay<Color> = SimulatorDisplay::new(SCREEN_SIZE);

    let output_settings = OutputSettingsBuilder::new()
        .theme(BinaryColorTheme::Inverted)
        .scale(1)
        .pixel_spacing(0)
        .build();

    let time = match std::env::args().nth(1) {
        Some(arg) => parse_time(&arg)?,
        None => TimeOfDay::from_clock(&Local::now(), TickUnit::Minute),
    };

    let mut face = WatchFace::default();
    face.tick(time);
    face.settle();
    face.draw(&mut display)?;

    let output_image = display.to_rgb_output_image(&output_settings);

    let path = std::env::args_os().nth(2).unwrap_or("output.png".into());
    output_image
        .save_png(path)
        .context("failed to write the image")?;

    Ok(())
}
