use std::time::{Duration, Instant};

use chrono::Local;
use embedded_graphics_simulator::{
    BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use epd_waveshare::color::Color::{self};
use fuzzy_gui::{
    fuzzy_time::{TickUnit, TimeOfDay},
    layout::SCREEN_SIZE,
    page::WatchFace,
    settings::FaceSettings,
};

const FRAME_INTERVAL: Duration = Duration::from_millis(20);

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // `--fast` runs a whole day in 24 minutes.
    let unit = if std::env::args().any(|arg| arg == "--fast") {
        TickUnit::Second
    } else {
        TickUnit::Minute
    };

    let mut display: SimulatorDisplay<Color> = SimulatorDisplay::new(SCREEN_SIZE);

    let output_settings = OutputSettingsBuilder::new()
        .theme(BinaryColorTheme::Inverted)
        .scale(3)
        .pixel_spacing(0)
        .build();
    let mut window = Window::new("Fuzzy time", &output_settings);

    let mut face = WatchFace::new(FaceSettings::default());
    let mut last_tick: Option<TimeOfDay> = None;
    let mut last_frame = Instant::now();

    'running: loop {
        let time = TimeOfDay::from_clock(&Local::now(), unit);
        if last_tick != Some(time) {
            face.tick(time);
            last_tick = Some(time);
        }

        let now = Instant::now();
        face.step(now - last_frame);
        last_frame = now;

        face.draw(&mut display)?;

        window.update(&display);

        for event in window.events() {
            if let SimulatorEvent::Quit = event {
                break 'running;
            }
        }

        std::thread::sleep(FRAME_INTERVAL);
    }

    Ok(())
}
