//! Strip renderer
//!
//! Keeps one frame in memory and pushes it to the [`LedDriver`] on flush.
//! Animations only ever change whole frames, so a frame is either fully
//! written or the driver error is returned to the caller.

use crate::{
    color::{BLACK, Rgb},
    driver::LedDriver,
};

/// Error returned by strip operations
#[derive(Debug, PartialEq, Eq)]
pub enum StripError<E> {
    /// The driver failed to write the frame
    Driver(E),
}

/// N-pixel strip on top of a driver
pub struct Strip<D: LedDriver<N>, const N: usize> {
    driver: D,
    frame: [Rgb; N],
}

impl<D: LedDriver<N>, const N: usize> Strip<D, N> {
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            frame: [BLACK; N],
        }
    }

    /// Current frame buffer
    pub fn frame(&self) -> &[Rgb; N] {
        &self.frame
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Set a single pixel in the frame buffer. Out of range indices are ignored.
    pub fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.frame.get_mut(index) {
            *pixel = color;
        }
    }

    /// Fill the frame buffer with a color computed per pixel index
    pub fn fill_with(&mut self, mut color_at: impl FnMut(usize) -> Rgb) {
        for (index, pixel) in self.frame.iter_mut().enumerate() {
            *pixel = color_at(index);
        }
    }

    /// Push the frame buffer to the hardware
    pub fn flush(&mut self) -> Result<(), StripError<D::Error>> {
        self.driver.write(&self.frame).map_err(StripError::Driver)
    }

    /// Set every pixel to one color and flush
    pub fn set_all(&mut self, color: Rgb) -> Result<(), StripError<D::Error>> {
        self.frame = [color; N];
        self.flush()
    }

    /// Turn the whole strip off
    pub fn clear(&mut self) -> Result<(), StripError<D::Error>> {
        self.set_all(BLACK)
    }
}
