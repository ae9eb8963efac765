use heapless::Vec;

use crate::event::ConnHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The connection set is full, the handle was not tracked
    TooManyConnections(ConnHandle),
}

/// Set of connections currently attached to the peripheral
///
/// A handle appears at most once. Removing an unknown handle is a no-op.
#[derive(Debug, Default)]
pub struct ConnectionSet<const MAX: usize> {
    handles: Vec<ConnHandle, MAX>,
}

impl<const MAX: usize> ConnectionSet<MAX> {
    pub const fn new() -> Self {
        Self {
            handles: Vec::new(),
        }
    }

    /// Track a connection
    ///
    /// Returns `Ok(false)` if the handle was already tracked.
    pub fn insert(&mut self, handle: ConnHandle) -> Result<bool, SessionError> {
        if self.contains(handle) {
            return Ok(false);
        }
        self.handles
            .push(handle)
            .map_err(SessionError::TooManyConnections)?;
        Ok(true)
    }

    /// Forget a connection, returns whether it was tracked
    pub fn remove(&mut self, handle: ConnHandle) -> bool {
        match self.handles.iter().position(|&h| h == handle) {
            Some(index) => {
                self.handles.swap_remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, handle: ConnHandle) -> bool {
        self.handles.contains(&handle)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Whether another peer can still be accepted
    pub fn has_room(&self) -> bool {
        self.handles.len() < MAX
    }

    pub fn iter(&self) -> impl Iterator<Item = ConnHandle> + '_ {
        self.handles.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_duplicate_free() {
        let mut set = ConnectionSet::<3>::new();

        assert_eq!(set.insert(7), Ok(true));
        assert_eq!(set.insert(7), Ok(false));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn full_set_rejects_handle() {
        let mut set = ConnectionSet::<1>::new();

        assert_eq!(set.insert(1), Ok(true));
        assert_eq!(set.insert(2), Err(SessionError::TooManyConnections(2)));
        assert!(set.contains(1));
        assert!(!set.contains(2));
        assert!(!set.has_room());
    }

    #[test]
    fn remove_twice_is_noop() {
        let mut set = ConnectionSet::<3>::new();
        set.insert(1).unwrap();
        set.insert(2).unwrap();

        assert!(set.remove(1));
        assert!(!set.remove(1));
        assert_eq!(set.len(), 1);
        assert!(set.contains(2));
    }

    #[test]
    fn remove_only_matching_handle() {
        let mut set = ConnectionSet::<3>::new();
        set.insert(1).unwrap();
        set.insert(2).unwrap();
        set.insert(3).unwrap();

        set.remove(2);

        let mut remaining: [ConnHandle; 2] = [0; 2];
        for (slot, handle) in remaining.iter_mut().zip(set.iter()) {
            *slot = handle;
        }
        remaining.sort_unstable();
        assert_eq!(remaining, [1, 3]);
    }

    #[test]
    fn remove_from_empty_set() {
        let mut set = ConnectionSet::<1>::new();

        assert!(!set.remove(42));
        assert!(set.is_empty());
    }
}
