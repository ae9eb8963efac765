use esp_hal::xtensa_lx::interrupt;
use esp_hal::{gpio::interconnect::PeripheralOutput, peripherals::RMT, rmt::Rmt, time::Rate};
use esp_hal_smartled::{LedAdapterError, SmartLedsAdapter, buffer_size, smart_led_buffer};
use smart_leds::SmartLedsWrite;
use static_cell::make_static;

use myrtio_light_animator::{LedDriver, Rgb};

use crate::infrastructure::config;

/// WS2812 strip on the RMT peripheral
///
/// Frames are pushed with interrupts disabled to keep the RMT timing intact.
pub(crate) struct EspLedDriver<'a, const N: usize> {
    adapter: SmartLedsAdapter<'a, { buffer_size(config::LIGHT_LED_COUNT) }>,
}

impl<'a, const N: usize> EspLedDriver<'a, N> {
    /// Create the driver
    ///
    /// # Arguments
    /// * `rmt` - RMT peripheral
    /// * `pin` - GPIO pin connected to the strip data line
    pub(crate) fn new<O>(rmt: RMT<'a>, pin: O) -> Self
    where
        O: PeripheralOutput<'a>,
    {
        let rmt = Rmt::new(rmt, Rate::from_mhz(80)).expect("RMT init failed");

        let rmt_buffer = make_static!(smart_led_buffer!(config::LIGHT_LED_COUNT));
        let adapter = SmartLedsAdapter::new(rmt.channel0, pin, rmt_buffer);

        Self { adapter }
    }
}

impl<const N: usize> LedDriver<N> for EspLedDriver<'static, N> {
    type Error = LedAdapterError;

    fn write(&mut self, colors: &[Rgb; N]) -> Result<(), Self::Error> {
        interrupt::free(|| self.adapter.write(colors.iter().copied()))
    }
}
