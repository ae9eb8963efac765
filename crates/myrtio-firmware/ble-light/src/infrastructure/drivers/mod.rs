mod ble;
mod led;

pub(crate) use ble::{BleController, init_ble_controller};
pub(crate) use led::EspLedDriver;
