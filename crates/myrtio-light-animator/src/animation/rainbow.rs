//! Rainbow cycle
//!
//! Spreads the full color wheel over the strip and shifts it by one wheel
//! position per cycle.

use crate::{
    color::wheel,
    driver::LedDriver,
    strip::{Strip, StripError},
    Rgb,
};

/// Color of one pixel for a given cycle
///
/// `pixels` is the strip length; an empty strip yields black.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn rainbow_pixel(pixel: usize, pixels: usize, cycle: u32) -> Rgb {
    if pixels == 0 {
        return Rgb::default();
    }
    let position = (pixel * 256 / pixels).wrapping_add(cycle as usize) & 255;
    wheel(position as i32)
}

/// Render and flush one rainbow frame
pub fn render_rainbow<D: LedDriver<N>, const N: usize>(
    strip: &mut Strip<D, N>,
    cycle: u32,
) -> Result<(), StripError<D::Error>> {
    strip.fill_with(|pixel| rainbow_pixel(pixel, N, cycle));
    strip.flush()
}
