//! Infrastructure layer
//!
//! Hardware drivers, the GATT table and the long running tasks.

pub(crate) mod config;
pub(crate) mod drivers;
pub(crate) mod services;
pub(crate) mod tasks;
pub(crate) mod types;
