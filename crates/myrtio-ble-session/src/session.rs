//! Session manager
//!
//! Runs inside the radio event handler and never suspends. Connection
//! bookkeeping stays here; writes to the control point are handed to a
//! [`WriteHandler`].

use crate::{
    connections::ConnectionSet,
    control_point::ControlPoint,
    event::{AttributeHandle, ConnHandle, SessionEvent},
};

/// Receiver of control point writes
pub trait WriteHandler {
    /// Called with the raw payload of every write to the control point
    ///
    /// Must return quickly and must not block.
    fn on_write(&mut self, payload: &[u8]);
}

impl<H: WriteHandler + ?Sized> WriteHandler for &mut H {
    fn on_write(&mut self, payload: &[u8]) {
        (**self).on_write(payload);
    }
}

/// What the radio side has to do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    None,
    /// Make the peripheral discoverable again
    Advertise,
}

/// Tracks peers and routes control point writes
///
/// `MAX` is the number of simultaneous peers, `SIZE` the largest payload
/// kept for read-back.
pub struct SessionManager<H: WriteHandler, const MAX: usize, const SIZE: usize> {
    connections: ConnectionSet<MAX>,
    control_point: ControlPoint<SIZE>,
    handler: H,
}

impl<H: WriteHandler, const MAX: usize, const SIZE: usize> SessionManager<H, MAX, SIZE> {
    pub const fn new(control_point: AttributeHandle, handler: H) -> Self {
        Self {
            connections: ConnectionSet::new(),
            control_point: ControlPoint::new(control_point),
            handler,
        }
    }

    pub fn connections(&self) -> &ConnectionSet<MAX> {
        &self.connections
    }

    pub fn control_point(&self) -> &ControlPoint<SIZE> {
        &self.control_point
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Handle one radio event
    pub fn handle(&mut self, event: SessionEvent<'_>) -> SessionAction {
        match event {
            SessionEvent::Connected(handle) => {
                self.on_connected(handle);
                SessionAction::None
            }
            SessionEvent::Disconnected(handle) => self.on_disconnected(handle),
            SessionEvent::Write {
                connection,
                attribute,
                data,
            } => {
                self.on_write(connection, attribute, data);
                SessionAction::None
            }
            SessionEvent::WriteAcknowledged {
                connection,
                attribute,
            } => {
                log::debug!("session: write to {attribute} acknowledged for {connection}");
                SessionAction::None
            }
            SessionEvent::Other => SessionAction::None,
        }
    }

    fn on_connected(&mut self, handle: ConnHandle) {
        match self.connections.insert(handle) {
            Ok(true) => log::info!(
                "session: peer {handle} connected ({}/{MAX})",
                self.connections.len()
            ),
            Ok(false) => log::debug!("session: peer {handle} already tracked"),
            Err(e) => log::warn!("session: rejected peer: {e:?}"),
        }
    }

    fn on_disconnected(&mut self, handle: ConnHandle) -> SessionAction {
        if self.connections.remove(handle) {
            log::info!("session: peer {handle} disconnected");
        } else {
            log::debug!("session: disconnect for unknown peer {handle}");
        }

        if self.connections.has_room() {
            SessionAction::Advertise
        } else {
            SessionAction::None
        }
    }

    fn on_write(&mut self, connection: ConnHandle, attribute: AttributeHandle, data: &[u8]) {
        if !self.connections.contains(connection) {
            log::debug!("session: ignoring write from untracked peer {connection}");
            return;
        }
        if attribute != self.control_point.handle() {
            log::debug!("session: ignoring write to attribute {attribute}");
            return;
        }
        if !self.control_point.store(data) {
            log::warn!(
                "session: payload of {} bytes truncated to {SIZE}",
                data.len()
            );
        }
        log::debug!("session: {connection} wrote {data:?}");
        self.handler.on_write(data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingHandler {
        writes: usize,
    }

    impl WriteHandler for CountingHandler {
        fn on_write(&mut self, _payload: &[u8]) {
            self.writes += 1;
        }
    }

    #[test]
    fn connect_does_not_advertise() {
        let mut session = SessionManager::<_, 1, 8>::new(3, CountingHandler::default());

        assert_eq!(session.handle(SessionEvent::Connected(1)), SessionAction::None);
        assert!(session.connections().contains(1));
    }

    #[test]
    fn disconnect_advertises_again() {
        let mut session = SessionManager::<_, 1, 8>::new(3, CountingHandler::default());
        session.handle(SessionEvent::Connected(1));

        assert_eq!(
            session.handle(SessionEvent::Disconnected(1)),
            SessionAction::Advertise
        );
        assert!(session.connections().is_empty());
    }

    #[test]
    fn disconnect_with_peers_left_and_no_room() {
        let mut session = SessionManager::<_, 2, 8>::new(3, CountingHandler::default());
        session.handle(SessionEvent::Connected(1));
        session.handle(SessionEvent::Connected(2));

        // unknown handle leaves the set full
        assert_eq!(
            session.handle(SessionEvent::Disconnected(9)),
            SessionAction::None
        );
        assert_eq!(
            session.handle(SessionEvent::Disconnected(2)),
            SessionAction::Advertise
        );
    }

    #[test]
    fn write_to_other_attribute_is_ignored() {
        let mut session = SessionManager::<_, 1, 8>::new(3, CountingHandler::default());
        session.handle(SessionEvent::Connected(1));
        session.handle(SessionEvent::Write {
            connection: 1,
            attribute: 4,
            data: b"1",
        });

        assert_eq!(session.handler().writes, 0);
        assert!(session.control_point().value().is_empty());
    }

    #[test]
    fn write_from_untracked_peer_is_ignored() {
        let mut session = SessionManager::<_, 1, 8>::new(3, CountingHandler::default());
        session.handle(SessionEvent::Connected(1));
        // rejected, the set is full
        session.handle(SessionEvent::Connected(2));

        session.handle(SessionEvent::Write {
            connection: 2,
            attribute: 3,
            data: b"1",
        });
        session.handle(SessionEvent::Write {
            connection: 9,
            attribute: 3,
            data: b"2",
        });

        assert_eq!(session.handler().writes, 0);
        assert!(session.control_point().value().is_empty());
    }

    #[test]
    fn other_events_are_ignored() {
        let mut session = SessionManager::<_, 1, 8>::new(3, CountingHandler::default());

        assert_eq!(session.handle(SessionEvent::Other), SessionAction::None);
        assert_eq!(
            session.handle(SessionEvent::WriteAcknowledged {
                connection: 1,
                attribute: 3
            }),
            SessionAction::None
        );
        assert_eq!(session.handler().writes, 0);
    }
}
