//! LED Driver abstraction layer
//!
//! Provides a trait-based abstraction for LED strip drivers,
//! allowing the animator to be hardware-agnostic.

use core::fmt::Debug;

use crate::color::Rgb;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// A write pushes the whole frame to the strip at once.
pub trait LedDriver<const N: usize> {
    /// Hardware fault reported by the driver
    type Error: Debug;

    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb; N]) -> Result<(), Self::Error>;
}
