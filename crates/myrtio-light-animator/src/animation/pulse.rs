//! Pulse (crossfade) animation
//!
//! Fades the whole strip from one color to another in a fixed number of
//! steps, then swaps the two colors and fades back.

use crate::color::{Rgb, crossfade};

/// Ping-pong crossfade between two colors
#[derive(Debug, Clone)]
pub struct Pulse {
    from: Rgb,
    to: Rgb,
    steps: u32,
    cycle: u32,
}

impl Pulse {
    /// Create a new pulse
    ///
    /// # Arguments
    /// * `from` - Color at the start of the first cycle
    /// * `to` - Color at the end of the first cycle
    /// * `steps` - Number of frames in one cycle
    pub const fn new(from: Rgb, to: Rgb, steps: u32) -> Self {
        Self {
            from,
            to,
            steps,
            cycle: 0,
        }
    }

    /// Outer cycle counter
    pub const fn cycle(&self) -> u32 {
        self.cycle
    }

    pub const fn steps(&self) -> u32 {
        self.steps
    }

    /// Color endpoints of the current cycle
    pub const fn endpoints(&self) -> (Rgb, Rgb) {
        (self.from, self.to)
    }

    /// Strip color at `step` of the current cycle (`1..=steps`)
    pub fn color_at(&self, step: u32) -> Rgb {
        crossfade(self.from, self.to, step, self.steps)
    }

    /// Reverse the fade direction and move on to the next cycle
    pub fn finish_cycle(&mut self) {
        core::mem::swap(&mut self.from, &mut self.to);
        self.cycle = self.cycle.wrapping_add(1);
    }
}
