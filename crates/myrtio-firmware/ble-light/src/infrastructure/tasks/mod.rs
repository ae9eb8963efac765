pub(crate) mod animation;
pub(crate) mod ble;

pub(crate) use animation::{animation_task, init_animation};
pub(crate) use ble::ble_task;
