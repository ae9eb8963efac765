#![no_std]

//! BLE Session - connection bookkeeping for a single control point peripheral
//!
//! The radio stack is kept out of this crate. The firmware translates its
//! GATT events into [`SessionEvent`]s, feeds them to the [`SessionManager`]
//! and performs the returned [`SessionAction`].
//!
//! - `event` - Radio events seen by the session
//! - `connections` - Set of attached peers
//! - `control_point` - The writable attribute and its last value
//! - `session` - Event routing and the re-advertise decision

pub mod connections;
pub mod control_point;
pub mod event;
pub mod session;

pub use connections::{ConnectionSet, SessionError};
pub use control_point::ControlPoint;
pub use event::{AttributeHandle, ConnHandle, SessionEvent};
pub use session::{SessionAction, SessionManager, WriteHandler};
