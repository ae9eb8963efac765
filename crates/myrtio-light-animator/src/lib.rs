#![no_std]

//! Light Animator - cooperative strip animations driven by remote commands
//!
//! Architecture layers:
//! - `driver` - Hardware abstraction (`[LedDriver]` trait)
//! - `color` - Color wheel and crossfade math
//! - `strip` - Frame buffer and flush on top of a driver
//! - `animation` - Rainbow and pulse algorithms, continuation predicate
//! - `engine` - Animation state machine, one animation at a time
//! - `status` - Shared animation status flag
//! - `command` - Command decoding and dispatching, request runner
//!
//! The engine is generic over `LedDriver` and over the frame delay, so the
//! same code runs on the device and in host tests.

pub mod animation;
pub mod color;
pub mod command;
pub mod driver;
pub mod engine;
pub mod status;
pub mod strip;

// Driver exports
pub use driver::LedDriver;

// Color exports
pub use color::{Rgb, crossfade, lerp_channel, wheel};

// Animation exports
pub use animation::{AnimationKind, Continuation, StatusContinuation};

// Engine exports
pub use engine::{AnimationConfig, AnimationEngine, AnimationExit, EngineState};

// Status exports
pub use status::{AnimationStatus, Status, Ticket};

// Command exports
pub use command::{
    AnimationRequest, AnimationRequests, AnimationRunner, Command, CommandDispatcher,
};

// Strip exports
pub use strip::{Strip, StripError};
