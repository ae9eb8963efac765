use myrtio_ble_session::SessionManager;

use crate::app::LightUsecases;
use crate::infrastructure::{config, drivers::EspLedDriver};

/// Simultaneous peers
pub(crate) const CONNECTIONS_MAX: usize = 1;

pub(crate) type LightDriver = EspLedDriver<'static, { config::LIGHT_LED_COUNT }>;
pub(crate) type LightSession =
    SessionManager<LightUsecases, CONNECTIONS_MAX, { config::CONTROL_POINT_SIZE }>;
