use embassy_time::Delay;
use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::peripherals::RMT;

use myrtio_light_animator::{
    AnimationEngine, AnimationRequests, AnimationRunner, AnimationStatus, CommandDispatcher,
};

use crate::infrastructure::config;
use crate::infrastructure::drivers::EspLedDriver;
use crate::infrastructure::types::LightDriver;

static ANIMATION_STATUS: AnimationStatus = AnimationStatus::new();
static ANIMATION_REQUESTS: AnimationRequests = AnimationRequests::new();

/// Task owning the strip
/// It shows the boot splash, then runs every requested animation until it ends.
#[embassy_executor::task]
pub(crate) async fn animation_task(driver: LightDriver) {
    let mut engine: AnimationEngine<LightDriver, Delay, { config::LIGHT_LED_COUNT }> =
        AnimationEngine::new(driver, Delay, config::ANIMATION);

    if let Err(e) = engine.splash().await {
        log::error!("animator: splash failed: {e:?}");
    }

    let mut runner = AnimationRunner::new(engine, &ANIMATION_STATUS, &ANIMATION_REQUESTS);
    runner.run().await
}

pub(crate) fn init_animation<O>(
    rmt: RMT<'static>,
    pin: O,
) -> (LightDriver, CommandDispatcher<'static>)
where
    O: PeripheralOutput<'static>,
{
    let driver = EspLedDriver::new(rmt, pin);

    (
        driver,
        CommandDispatcher::new(&ANIMATION_STATUS, &ANIMATION_REQUESTS),
    )
}
