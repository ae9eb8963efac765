//! GATT table of the light
//!
//! The service UUID must match `config::BLE.service_uuid`, which is what
//! gets advertised.

use trouble_host::prelude::*;

use crate::infrastructure::config::CONTROL_POINT_SIZE;

/// Light service with its single control point
#[gatt_service(uuid = "f281c95f-3947-4879-b851-08c11d22f085")]
pub(crate) struct LightService {
    /// Control point, accepts one-byte animation commands
    #[characteristic(uuid = "3c110d21-b7a4-4115-889a-77a03fdbcda3", read, write, write_without_response, value = [0u8; CONTROL_POINT_SIZE])]
    pub control: [u8; CONTROL_POINT_SIZE],
}

#[gatt_server]
pub(crate) struct LightServer {
    pub light: LightService,
}
