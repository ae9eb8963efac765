//! Integration tests for a full peer lifecycle through the session manager

use myrtio_ble_session::{SessionAction, SessionEvent, SessionManager, WriteHandler};

const CONTROL_POINT: u16 = 0x0010;

#[derive(Default)]
struct RecordingHandler {
    payloads: Vec<Vec<u8>>,
}

impl WriteHandler for RecordingHandler {
    fn on_write(&mut self, payload: &[u8]) {
        self.payloads.push(payload.to_vec());
    }
}

fn write(connection: u16, attribute: u16, data: &[u8]) -> SessionEvent<'_> {
    SessionEvent::Write {
        connection,
        attribute,
        data,
    }
}

// -----------------------------------------------------------------------------
// Single peer device
// -----------------------------------------------------------------------------

#[test]
fn peer_lifecycle_routes_writes_and_readvertises() {
    let mut session = SessionManager::<_, 1, 20>::new(CONTROL_POINT, RecordingHandler::default());

    assert_eq!(session.handle(SessionEvent::Connected(64)), SessionAction::None);
    session.handle(write(64, CONTROL_POINT, b"1"));
    session.handle(SessionEvent::WriteAcknowledged {
        connection: 64,
        attribute: CONTROL_POINT,
    });
    session.handle(write(64, CONTROL_POINT, b"2"));
    session.handle(write(64, CONTROL_POINT, b"9"));

    assert_eq!(
        session.handle(SessionEvent::Disconnected(64)),
        SessionAction::Advertise
    );

    // every control point write reaches the handler, known or not
    assert_eq!(
        session.handler().payloads,
        [b"1".to_vec(), b"2".to_vec(), b"9".to_vec()]
    );
    assert_eq!(session.control_point().value(), b"9");
    assert!(session.connections().is_empty());
}

#[test]
fn duplicate_disconnect_keeps_set_consistent() {
    let mut session = SessionManager::<_, 1, 20>::new(CONTROL_POINT, RecordingHandler::default());
    session.handle(SessionEvent::Connected(1));

    assert_eq!(
        session.handle(SessionEvent::Disconnected(1)),
        SessionAction::Advertise
    );
    assert_eq!(
        session.handle(SessionEvent::Disconnected(1)),
        SessionAction::Advertise
    );
    assert_eq!(session.connections().len(), 0);

    // next peer is tracked normally
    session.handle(SessionEvent::Connected(2));
    assert_eq!(session.connections().len(), 1);
    assert!(session.connections().contains(2));
}

#[test]
fn second_peer_is_rejected_while_connected() {
    let mut session = SessionManager::<_, 1, 20>::new(CONTROL_POINT, RecordingHandler::default());
    session.handle(SessionEvent::Connected(1));
    session.handle(SessionEvent::Connected(2));

    assert_eq!(session.connections().len(), 1);
    assert!(session.connections().contains(1));

    // the rejected peer cannot drive the light
    session.handle(write(2, CONTROL_POINT, b"1"));
    assert!(session.handler().payloads.is_empty());

    // disconnect of the rejected peer frees nothing
    assert_eq!(
        session.handle(SessionEvent::Disconnected(2)),
        SessionAction::None
    );
    assert_eq!(
        session.handle(SessionEvent::Disconnected(1)),
        SessionAction::Advertise
    );
}

// -----------------------------------------------------------------------------
// Several peers
// -----------------------------------------------------------------------------

#[test]
fn readvertises_when_room_frees_up() {
    let mut session = SessionManager::<_, 3, 20>::new(CONTROL_POINT, RecordingHandler::default());
    for handle in 1..=3 {
        session.handle(SessionEvent::Connected(handle));
    }

    assert_eq!(
        session.handle(SessionEvent::Disconnected(2)),
        SessionAction::Advertise
    );
    assert_eq!(session.connections().len(), 2);

    session.handle(write(1, CONTROL_POINT, b"0"));
    session.handle(write(3, CONTROL_POINT + 1, b"1"));
    assert_eq!(session.handler().payloads, [b"0".to_vec()]);
}

#[test]
fn handler_can_be_borrowed() {
    let mut handler = RecordingHandler::default();
    {
        let mut session = SessionManager::<_, 1, 20>::new(CONTROL_POINT, &mut handler);
        session.handle(SessionEvent::Connected(1));
        session.handle(write(1, CONTROL_POINT, b"2"));
    }

    assert_eq!(handler.payloads, [b"2".to_vec()]);
}
