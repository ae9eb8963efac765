/// Opaque connection handle assigned by the radio stack
pub type ConnHandle = u16;

/// Attribute handle inside the GATT table
pub type AttributeHandle = u16;

/// Radio event as seen by the session manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent<'a> {
    /// A peer connected
    Connected(ConnHandle),
    /// A peer disconnected
    Disconnected(ConnHandle),
    /// A peer wrote to an attribute
    Write {
        connection: ConnHandle,
        attribute: AttributeHandle,
        data: &'a [u8],
    },
    /// A write with response was acknowledged to the peer
    WriteAcknowledged {
        connection: ConnHandle,
        attribute: AttributeHandle,
    },
    /// Anything else the radio reports
    Other,
}
