use embassy_futures::select::select;
use myrtio_ble_session::SessionAction;
use trouble_host::prelude::*;

use crate::app::LightUsecases;
use crate::controllers::{advertise, serve_connection};
use crate::infrastructure::config;
use crate::infrastructure::drivers::BleController;
use crate::infrastructure::services::LightServer;
use crate::infrastructure::types::{CONNECTIONS_MAX, LightSession};

/// Signal + ATT
const L2CAP_CHANNELS_MAX: usize = 2;

/// BLE peripheral task
///
/// Runs the host stack next to the advertise/serve loop. A radio fault ends
/// both; the light keeps running without its control point.
#[embassy_executor::task]
pub(crate) async fn ble_task(controller: BleController, usecases: LightUsecases) {
    let mut resources: HostResources<DefaultPacketPool, CONNECTIONS_MAX, L2CAP_CHANNELS_MAX> =
        HostResources::new();
    let stack = trouble_host::new(controller, &mut resources)
        .set_random_address(Address::random(config::BLE.address));
    let Host {
        mut peripheral,
        mut runner,
        ..
    } = stack.build();

    let server = match LightServer::new_with_config(GapConfig::Peripheral(PeripheralConfig {
        name: config::DEVICE.name,
        appearance: &appearance::power_device::GENERIC_POWER_DEVICE,
    })) {
        Ok(server) => server,
        Err(e) => {
            log::error!("ble: failed to build GATT table: {e:?}");
            return;
        }
    };
    let mut session = LightSession::new(server.light.control.handle, usecases);

    let host = async {
        if let Err(e) = runner.run().await {
            log::error!("ble: host stopped: {e:?}");
        }
    };
    let peripheral_loop = async {
        loop {
            let conn = match advertise(
                config::DEVICE.name,
                config::BLE.service_uuid,
                config::BLE.advertising_interval,
                &mut peripheral,
                &server,
            )
            .await
            {
                Ok(conn) => conn,
                Err(e) => {
                    log::error!("ble: advertising failed: {e:?}");
                    return;
                }
            };

            let action = serve_connection(&conn, &mut session).await;
            // Connections are served one at a time, so every disconnect frees
            // the slot and re-advertising is unconditional.
            debug_assert_eq!(action, SessionAction::Advertise);
            log::info!("ble: advertising again");
        }
    };

    select(host, peripheral_loop).await;
}
