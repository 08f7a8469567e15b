use std::time::Duration;

use chrono_tz::Tz;
use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    prelude::{DrawTargetExt, Point},
    text::Text,
    Drawable,
};
use epd_waveshare::{
    color::Color,
    graphics::VarDisplay,
    prelude::{RefreshLut, WaveshareDisplay},
};
use esp_idf_svc::{
    sntp::{EspSntp, SyncStatus},
    wifi,
};
use fuzzy_gui::{
    fuzzy_time::{TickUnit, TimeOfDay},
    page::WatchFace,
    settings::FaceSettings,
};

use crate::{
    board::Board,
    common::{get_time, until_next_tick},
    display::{create_display, White, FACE_OFFSET},
};

#[derive(Debug, Clone)]
pub struct AppSettings {
    // Wi-Fi
    pub wifi_ssid: heapless::String<32>,
    pub wifi_password: heapless::String<64>,
    pub wifi_auth_method: wifi::AuthMethod,
    // Time
    pub timezone: Tz,
    pub tick_unit: TickUnit,
    // Face
    pub face: FaceSettings,
    /// Time between two rendered animation frames.
    pub frame_interval: Duration,
}

impl AppSettings {
    /// A refresh takes longer than a second, so second ticks only show the final frame.
    pub fn animate(&self) -> bool {
        self.tick_unit == TickUnit::Minute
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            wifi_ssid: env!("WIFI_SSID").try_into().unwrap(),
            wifi_password: env!("WIFI_PASSWORD").try_into().unwrap(),
            wifi_auth_method: env!("WIFI_AUTH_MODE").try_into().unwrap(),
            timezone: chrono_tz::Europe::Amsterdam,
            tick_unit: if cfg!(feature = "fast-tick") {
                TickUnit::Second
            } else {
                TickUnit::Minute
            },
            face: FaceSettings::default(),
            frame_interval: Duration::from_millis(250),
        }
    }
}

pub struct App {
    settings: AppSettings,

    board: Board,

    display: VarDisplay<'static, Color>,
    face: WatchFace,
    last_tick: Option<TimeOfDay>,
}

impl App {
    pub fn new(board: Board) -> Self {
        let settings = AppSettings::default();
        Self {
            face: WatchFace::new(settings.face),
            settings,
            board,
            display: create_display().unwrap(),
            last_tick: None,
        }
    }

    fn initialize(&mut self) -> anyhow::Result<()> {
        log::info!("initialize");

        // Turn on the LED until the clock is synchronized
        self.board.led.set_high()?;

        self.initialize_wifi()?;
        self.sync_ntp()?;

        self.board.led.set_low()?;

        Ok(())
    }

    fn initialize_wifi(&mut self) -> anyhow::Result<()> {
        self.board
            .wifi
            .set_configuration(&wifi::Configuration::Client(wifi::ClientConfiguration {
                ssid: self.settings.wifi_ssid.clone(),
                bssid: None,
                auth_method: self.settings.wifi_auth_method,
                password: self.settings.wifi_password.clone(),
                channel: None,
                scan_method: wifi::ScanMethod::FastScan,
                pmf_cfg: wifi::PmfConfiguration::default(),
            }))?;

        // Start Wifi
        self.board.wifi.start()?;

        // Connect Wifi
        self.board.wifi.connect()?;

        // Wait until the network interface is up
        self.board.wifi.wait_netif_up()?;

        Ok(())
    }

    fn sync_ntp(&mut self) -> anyhow::Result<()> {
        let ntp = EspSntp::new_default()?;
        log::info!("Synchronizing with NTP Server");
        // Wait until the time is synchronized
        while ntp.get_sync_status() != SyncStatus::Completed {
            self.board.delay.delay_ms(100);
        }
        log::info!("Time Sync Completed");
        Ok(())
    }

    fn update_and_display(&mut self) -> anyhow::Result<()> {
        self.board.epd.update_and_display_frame(
            &mut self.board.spi,
            self.display.buffer(),
            &mut self.board.delay,
        )?;
        Ok(())
    }

    fn render(&mut self, lut: RefreshLut) -> anyhow::Result<()> {
        self.face
            .draw(&mut self.display.translated(FACE_OFFSET))?;
        self.board
            .epd
            .set_lut(&mut self.board.spi, &mut self.board.delay, Some(lut))?;
        self.update_and_display()
    }

    /// Formats the current time and plays the transition frame by frame.
    fn tick(&mut self) -> anyhow::Result<()> {
        let now = get_time().with_timezone(&self.settings.timezone);
        let time = TimeOfDay::from_clock(&now, self.settings.tick_unit);
        if self.last_tick == Some(time) {
            return Ok(());
        }
        self.last_tick = Some(time);

        let changed = self.face.tick(time);
        log::info!(
            "{:02}:{:02}, {} slot(s) changed",
            time.hour(),
            time.minute(),
            changed.len()
        );

        if self.settings.animate() {
            // Intermediate frames use the quick waveform, the resting frame a full refresh
            while self.face.is_animating() {
                self.render(RefreshLut::Quick)?;
                std::thread::sleep(self.settings.frame_interval);
                self.face.step(self.settings.frame_interval);
            }
        } else {
            self.face.settle();
        }
        self.render(RefreshLut::Full)
    }

    fn wait_for_next_tick(&self) {
        let now = get_time().with_timezone(&self.settings.timezone);
        std::thread::sleep(until_next_tick(&now, self.settings.tick_unit));
    }

    // Show error message on the screen
    fn handle_error(&mut self, e: anyhow::Error) {
        log::error!("Unexpected error: {:?}", e);

        let style = MonoTextStyle::new(&FONT_6X10, White);

        Text::new(&format!("Error: {}", e), Point::new(4, 12), style)
            .draw(&mut self.display)
            .unwrap();

        // Update and display the frame
        self.update_and_display().unwrap();
    }

    fn run_internal(&mut self) -> anyhow::Result<()> {
        self.initialize()?;

        log::info!(
            "ticking every {:?} in {}",
            self.settings.tick_unit.period(),
            self.settings.timezone
        );

        loop {
            self.tick()?;
            self.wait_for_next_tick();
        }
    }

    pub fn run(&mut self) {
        if let Err(e) = self.run_internal() {
            self.handle_error(e);
        }
    }
}
