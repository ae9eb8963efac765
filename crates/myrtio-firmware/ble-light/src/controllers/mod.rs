mod ble;

pub(crate) use ble::{advertise, serve_connection};
