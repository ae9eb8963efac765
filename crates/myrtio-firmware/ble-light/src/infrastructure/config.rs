#![allow(clippy::unreadable_literal)]

use embassy_time::Duration;
use myrtio_light_animator::AnimationConfig;

pub(crate) struct DeviceConfig {
    pub name: &'static str,
    pub version: &'static str,
}

pub(crate) struct BleConfig {
    /// Light service, advertised with the device name
    pub service_uuid: u128,
    /// Static random address, most significant byte last
    pub address: [u8; 6],
    pub advertising_interval: Duration,
}

pub(crate) struct LightConfig {
    pub led_count: usize,
}

pub(crate) const DEVICE: DeviceConfig = DeviceConfig {
    name: "lightpi",
    version: env!("BUILD_VERSION"),
};

pub(crate) const BLE: BleConfig = BleConfig {
    service_uuid: 0xf281c95f_3947_4879_b851_08c11d22f085,
    address: [0x27, 0x4c, 0x1a, 0x05, 0xe4, 0xff],
    advertising_interval: Duration::from_millis(500),
};

/// Size of the control point value kept for read-back
pub(crate) const CONTROL_POINT_SIZE: usize = 20;

pub(crate) const LIGHT: LightConfig = LightConfig { led_count: 60 };

pub(crate) const LIGHT_LED_COUNT: usize = LIGHT.led_count;

pub(crate) const ANIMATION: AnimationConfig = AnimationConfig::DEFAULT;

#[macro_export]
macro_rules! led_gpio {
    ($p:expr) => {
        $p.GPIO27
    };
}
