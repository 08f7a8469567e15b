use epd_waveshare::{epd1in54_v2::Epd1in54, prelude::WaveshareDisplay};
use esp_idf_svc::{
    eventloop::EspSystemEventLoop,
    hal::{
        delay::Delay,
        gpio::{self, AnyIOPin, Input, Output, PinDriver},
        prelude::*,
        spi::{self, SpiDeviceDriver, SpiDriver},
    },
    nvs::EspDefaultNvsPartition,
    wifi::{BlockingWifi, EspWifi},
};

pub type Panel = Epd1in54<
    SpiDeviceDriver<'static, SpiDriver<'static>>,
    PinDriver<'static, gpio::Gpio25, Input>,
    PinDriver<'static, gpio::Gpio27, Output>,
    PinDriver<'static, gpio::Gpio26, Output>,
    Delay,
>;

/// Wiring of the 1.54" panel on an ESP32 devkit.
///
/// | Panel | GPIO |
/// |-------|------|
/// | CLK   | 13   |
/// | DIN   | 14   |
/// | CS    | 15   |
/// | BUSY  | 25   |
/// | DC    | 27   |
/// | RST   | 26   |
/// | VCC   | 23   |
pub struct Board {
    pub led: PinDriver<'static, gpio::Gpio2, Output>,

    pub spi: SpiDeviceDriver<'static, SpiDriver<'static>>,
    pub pwr: PinDriver<'static, gpio::Gpio23, Output>,

    pub delay: Delay,

    pub epd: Panel,

    pub wifi: BlockingWifi<EspWifi<'static>>,
}

impl Board {
    pub fn init(
        peripherals: Peripherals,
        sysloop: EspSystemEventLoop,
        nvs: EspDefaultNvsPartition,
    ) -> Self {
        // SPI3 through the GPIO matrix, write-only since the panel has no MISO line
        let spi_p_pin = peripherals.spi3;
        let sclk_pin = peripherals.pins.gpio13;
        let sdo_pin = peripherals.pins.gpio14;
        let cs_pin = peripherals.pins.gpio15;

        let busy_in_pin = peripherals.pins.gpio25;
        let dc_pin = peripherals.pins.gpio27;
        let rst_pin = peripherals.pins.gpio26;

        // The panel draws little enough current to be powered straight from a GPIO,
        // so it can be switched off between ticks
        let pwr_pin = peripherals.pins.gpio23;

        // On-board LED, lit while the clock is not synchronized
        let led_pin = peripherals.pins.gpio2;

        let led = PinDriver::output(led_pin).unwrap();

        // The 1.54" panel is happy with a slower clock than the large ones
        let mut spi = SpiDeviceDriver::new_single(
            spi_p_pin,
            sclk_pin,
            sdo_pin,
            Option::<AnyIOPin>::None,
            Some(cs_pin),
            &spi::config::DriverConfig::new(),
            &spi::config::Config::new().baudrate(4.MHz().into()),
        )
        .unwrap();

        let busy_in = PinDriver::input(busy_in_pin).unwrap();
        let dc = PinDriver::output(dc_pin).unwrap();
        let rst = PinDriver::output(rst_pin).unwrap();

        let mut pwr = PinDriver::output(pwr_pin).unwrap();

        // Power the panel before talking to it
        pwr.set_high().unwrap();

        let mut delay = Delay::new_default();

        let epd = Epd1in54::new(&mut spi, busy_in, dc, rst, &mut delay, None).unwrap();

        let esp_wifi = EspWifi::new(peripherals.modem, sysloop.clone(), Some(nvs)).unwrap();
        let wifi = BlockingWifi::wrap(esp_wifi, sysloop.clone()).unwrap();

        Self {
            led,
            spi,
            pwr,
            delay,
            epd,
            wifi,
        }
    }
}
