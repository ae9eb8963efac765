//! GATT connection controller
//!
//! Translates the events of one connection into [`SessionEvent`]s until the
//! peer goes away.

use myrtio_ble_session::{SessionAction, SessionEvent};
use trouble_host::prelude::*;

use crate::infrastructure::services::LightServer;
use crate::infrastructure::types::LightSession;

/// Serve a connection until it is closed
///
/// Returns the session action for the disconnect.
pub(crate) async fn serve_connection<P: PacketPool>(
    conn: &GattConnection<'_, '_, P>,
    session: &mut LightSession,
) -> SessionAction {
    let handle = conn.raw().handle().raw();
    session.handle(SessionEvent::Connected(handle));

    loop {
        match conn.next().await {
            GattConnectionEvent::Disconnected { reason } => {
                log::info!("ble: {handle} disconnected: {reason:?}");
                return session.handle(SessionEvent::Disconnected(handle));
            }
            GattConnectionEvent::Gatt { event } => {
                let written = match &event {
                    GattEvent::Write(write) => {
                        session.handle(SessionEvent::Write {
                            connection: handle,
                            attribute: write.handle(),
                            data: write.data(),
                        });
                        Some(write.handle())
                    }
                    _ => None,
                };

                match event.accept() {
                    Ok(reply) => reply.send().await,
                    Err(e) => {
                        log::warn!("ble: failed to answer {handle}: {e:?}");
                        continue;
                    }
                }

                if let Some(attribute) = written {
                    session.handle(SessionEvent::WriteAcknowledged {
                        connection: handle,
                        attribute,
                    });
                }
            }
            _ => {
                session.handle(SessionEvent::Other);
            }
        }
    }
}

/// Advertise until a peer connects
pub(crate) async fn advertise<'values, 'server, C: Controller>(
    name: &'values str,
    service_uuid: u128,
    interval: embassy_time::Duration,
    peripheral: &mut Peripheral<'values, C, DefaultPacketPool>,
    server: &'server LightServer<'values>,
) -> Result<GattConnection<'values, 'server, DefaultPacketPool>, BleHostError<C::Error>> {
    let mut adv_data = [0; 31];
    let len = AdStructure::encode_slice(
        &[
            AdStructure::Flags(LE_GENERAL_DISCOVERABLE | BR_EDR_NOT_SUPPORTED),
            AdStructure::ServiceUuids128(&[service_uuid.to_le_bytes()]),
            AdStructure::CompleteLocalName(name.as_bytes()),
        ],
        &mut adv_data[..],
    )?;

    let params = AdvertisementParameters {
        interval_min: interval,
        interval_max: interval,
        ..Default::default()
    };
    let advertiser = peripheral
        .advertise(
            &params,
            Advertisement::ConnectableScannableUndirected {
                adv_data: &adv_data[..len],
                scan_data: &[],
            },
        )
        .await?;
    log::info!("ble: advertising as {name}");

    let conn = advertiser.accept().await?.with_attribute_server(server)?;
    Ok(conn)
}
