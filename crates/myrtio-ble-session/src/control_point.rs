use heapless::Vec;

use crate::event::AttributeHandle;

/// The single writable attribute exposed to peers
///
/// Keeps the last written payload for read-back. The value is raw bytes and
/// is not tied to the animation state.
#[derive(Debug)]
pub struct ControlPoint<const SIZE: usize> {
    handle: AttributeHandle,
    value: Vec<u8, SIZE>,
}

impl<const SIZE: usize> ControlPoint<SIZE> {
    pub const fn new(handle: AttributeHandle) -> Self {
        Self {
            handle,
            value: Vec::new(),
        }
    }

    pub const fn handle(&self) -> AttributeHandle {
        self.handle
    }

    /// Last written payload
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Replace the stored payload, keeping at most `SIZE` bytes
    ///
    /// Returns `false` if the payload had to be truncated.
    pub fn store(&mut self, data: &[u8]) -> bool {
        self.value.clear();
        self.value.extend(data.iter().copied().take(SIZE));
        data.len() <= SIZE
    }
}
