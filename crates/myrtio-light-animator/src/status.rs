//! Shared animation status
//!
//! The only state shared between the command side and the running animation.
//! It is one atomic word: bit 0 holds the [`Status`] flag and the remaining
//! bits hold the start generation. Every accepted start bumps the generation,
//! so an animation started by an older command sees its [`Ticket`] go stale
//! as soon as a newer one is accepted.

use core::sync::atomic::{AtomicU32, Ordering};

const ANIMATING_BIT: u32 = 1;
const GENERATION_SHIFT: u32 = 1;
const GENERATION_MASK: u32 = u32::MAX >> GENERATION_SHIFT;

/// Animation status flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Status {
    Idle = 0,
    Animating = 1,
}

/// Start ticket handed to an animation when it is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u32,
}

impl Ticket {
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

/// Atomic animation status
pub struct AnimationStatus {
    word: AtomicU32,
}

impl AnimationStatus {
    /// Create an idle status
    pub const fn new() -> Self {
        Self {
            word: AtomicU32::new(0),
        }
    }

    /// Current status flag
    pub fn get(&self) -> Status {
        if self.word.load(Ordering::Acquire) & ANIMATING_BIT == 0 {
            Status::Idle
        } else {
            Status::Animating
        }
    }

    /// Ticket of the latest accepted start
    pub fn ticket(&self) -> Ticket {
        Ticket {
            generation: self.word.load(Ordering::Acquire) >> GENERATION_SHIFT,
        }
    }

    /// Mark a new animation as requested and return its ticket
    pub fn request_start(&self) -> Ticket {
        let previous = self
            .word
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |word| {
                let generation = (word >> GENERATION_SHIFT).wrapping_add(1);
                Some((generation << GENERATION_SHIFT) | ANIMATING_BIT)
            })
            .unwrap_or_else(|word| word);

        Ticket {
            generation: (previous >> GENERATION_SHIFT).wrapping_add(1) & GENERATION_MASK,
        }
    }

    /// Ask the running animation to stop
    pub fn request_stop(&self) {
        self.word.fetch_and(!ANIMATING_BIT, Ordering::AcqRel);
    }

    /// Whether the animation holding `ticket` may keep running
    pub fn is_active(&self, ticket: Ticket) -> bool {
        let word = self.word.load(Ordering::Acquire);
        word & ANIMATING_BIT != 0 && word >> GENERATION_SHIFT == ticket.generation
    }

    /// Flip the flag back to idle after the animation holding `ticket` exited
    ///
    /// Does nothing if a newer start was accepted meanwhile.
    pub fn release(&self, ticket: Ticket) -> bool {
        let animating = (ticket.generation << GENERATION_SHIFT) | ANIMATING_BIT;
        let idle = ticket.generation << GENERATION_SHIFT;
        self.word
            .compare_exchange(animating, idle, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

impl Default for AnimationStatus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boots_idle() {
        let status = AnimationStatus::new();

        assert_eq!(status.get(), Status::Idle);
        assert!(!status.is_active(status.ticket()));
    }

    #[test]
    fn start_then_stop() {
        let status = AnimationStatus::new();
        let ticket = status.request_start();

        assert_eq!(status.get(), Status::Animating);
        assert!(status.is_active(ticket));

        status.request_stop();
        assert_eq!(status.get(), Status::Idle);
        assert!(!status.is_active(ticket));
    }

    #[test]
    fn newer_start_invalidates_older_ticket() {
        let status = AnimationStatus::new();
        let first = status.request_start();
        let second = status.request_start();

        assert_ne!(first, second);
        assert!(!status.is_active(first));
        assert!(status.is_active(second));
        assert_eq!(status.ticket(), second);
    }

    #[test]
    fn release_only_applies_to_current_ticket() {
        let status = AnimationStatus::new();
        let first = status.request_start();
        let second = status.request_start();

        assert!(!status.release(first));
        assert_eq!(status.get(), Status::Animating);

        assert!(status.release(second));
        assert_eq!(status.get(), Status::Idle);
    }

    #[test]
    fn stop_keeps_generation() {
        let status = AnimationStatus::new();
        let ticket = status.request_start();
        status.request_stop();

        assert_eq!(status.ticket(), ticket);
        assert!(!status.release(ticket));
    }
}
