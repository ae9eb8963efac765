//! Animation algorithms and the continuation predicate
//!
//! Animations are selected by [`AnimationKind`] and driven frame by frame by
//! the [`crate::engine::AnimationEngine`]. After every frame the engine asks a
//! [`Continuation`] whether to keep going.

mod pulse;
mod rainbow;

pub use pulse::Pulse;
pub use rainbow::{rainbow_pixel, render_rainbow};

use crate::status::{AnimationStatus, Ticket};

/// Known animations, addressed by a single-byte command code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    /// Color wheel scrolling along the strip
    Rainbow,
    /// Whole-strip crossfade between two colors, back and forth
    Pulse,
}

impl AnimationKind {
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            b'1' => Some(Self::Rainbow),
            b'2' => Some(Self::Pulse),
            _ => None,
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            Self::Rainbow => b'1',
            Self::Pulse => b'2',
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rainbow => "rainbow",
            Self::Pulse => "pulse",
        }
    }
}

/// Predicate polled once per frame
///
/// Implementations must not block and must not change shared state.
pub trait Continuation {
    /// Whether the animation may render the next frame
    ///
    /// # Arguments
    /// * `cycle` - Outer cycle index of the running animation
    fn should_continue(&self, cycle: u32) -> bool;
}

impl<F: Fn(u32) -> bool> Continuation for F {
    fn should_continue(&self, cycle: u32) -> bool {
        self(cycle)
    }
}

/// Read-only view of [`AnimationStatus`] for one started animation
#[derive(Clone, Copy)]
pub struct StatusContinuation<'a> {
    status: &'a AnimationStatus,
    ticket: Ticket,
}

impl<'a> StatusContinuation<'a> {
    pub const fn new(status: &'a AnimationStatus, ticket: Ticket) -> Self {
        Self { status, ticket }
    }
}

impl Continuation for StatusContinuation<'_> {
    fn should_continue(&self, _cycle: u32) -> bool {
        self.status.is_active(self.ticket)
    }
}
