//! Commands and their dispatching
//!
//! The dispatcher runs inside the radio event handler, so it never waits:
//! it updates [`AnimationStatus`] and leaves a request for the
//! [`AnimationRunner`], which owns the engine and is the only writer of the
//! strip.

use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};
use embedded_hal_async::delay::DelayNs;

use crate::{
    animation::{AnimationKind, StatusContinuation},
    driver::LedDriver,
    engine::{AnimationEngine, AnimationExit},
    status::{AnimationStatus, Ticket},
    strip::StripError,
};

/// Commands accepted on the control point
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Stop the running animation
    Stop,
    /// Start an animation, replacing the running one
    Start(AnimationKind),
}

impl Command {
    pub const STOP_CODE: u8 = b'0';

    /// Decode a control point payload
    ///
    /// Only single-byte payloads carry a command.
    pub fn decode(payload: &[u8]) -> Option<Self> {
        match payload {
            [Self::STOP_CODE] => Some(Self::Stop),
            [code] => AnimationKind::from_code(*code).map(Self::Start),
            _ => None,
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            Self::Stop => Self::STOP_CODE,
            Self::Start(kind) => kind.code(),
        }
    }
}

/// Request for the runner to start an animation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationRequest {
    pub kind: AnimationKind,
    pub ticket: Ticket,
}

/// Latest-wins slot for the next animation request
pub type AnimationRequests = Signal<CriticalSectionRawMutex, AnimationRequest>;

/// Decodes control point writes and updates the animation status
#[derive(Clone, Copy)]
pub struct CommandDispatcher<'a> {
    status: &'a AnimationStatus,
    requests: &'a AnimationRequests,
}

impl<'a> CommandDispatcher<'a> {
    pub const fn new(status: &'a AnimationStatus, requests: &'a AnimationRequests) -> Self {
        Self { status, requests }
    }

    /// Handle a raw control point write
    ///
    /// Unknown payloads leave everything untouched and return `None`.
    pub fn on_write(&self, payload: &[u8]) -> Option<Command> {
        let Some(command) = Command::decode(payload) else {
            log::debug!("dispatcher: ignoring payload {:?}", payload);
            return None;
        };
        self.dispatch(command);
        Some(command)
    }

    /// Apply a decoded command
    pub fn dispatch(&self, command: Command) {
        match command {
            Command::Stop => {
                self.requests.reset();
                self.status.request_stop();
                log::info!("dispatcher: stop requested");
            }
            Command::Start(kind) => {
                let ticket = self.status.request_start();
                self.requests.signal(AnimationRequest { kind, ticket });
                log::info!(
                    "dispatcher: {} requested (generation {})",
                    kind.as_str(),
                    ticket.generation()
                );
            }
        }
    }
}

/// Waits for requests and runs them on the engine, one at a time
pub struct AnimationRunner<'a, D: LedDriver<N>, T: DelayNs, const N: usize> {
    engine: AnimationEngine<D, T, N>,
    status: &'a AnimationStatus,
    requests: &'a AnimationRequests,
}

impl<'a, D: LedDriver<N>, T: DelayNs, const N: usize> AnimationRunner<'a, D, T, N> {
    pub fn new(
        engine: AnimationEngine<D, T, N>,
        status: &'a AnimationStatus,
        requests: &'a AnimationRequests,
    ) -> Self {
        Self {
            engine,
            status,
            requests,
        }
    }

    pub fn engine(&self) -> &AnimationEngine<D, T, N> {
        &self.engine
    }

    /// Wait for the next request and run it to the end
    ///
    /// Returns `Ok(None)` when the request was withdrawn or replaced before
    /// it could start.
    pub async fn serve_next(&mut self) -> Result<Option<AnimationExit>, StripError<D::Error>> {
        let request = self.requests.wait().await;
        if !self.status.is_active(request.ticket) {
            log::debug!("animator: skipping stale {} request", request.kind.as_str());
            return Ok(None);
        }

        log::info!("animator: starting {}", request.kind.as_str());
        let continuation = StatusContinuation::new(self.status, request.ticket);
        let result = self.engine.run(request.kind, &continuation).await;
        self.status.release(request.ticket);

        result.map(Some)
    }

    /// Serve requests forever
    pub async fn run(&mut self) -> ! {
        loop {
            match self.serve_next().await {
                Ok(Some(exit)) => log::info!("animator: animation ended: {:?}", exit),
                Ok(None) => {}
                Err(e) => log::error!("animator: strip fault: {:?}", e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Status;

    #[test]
    fn decodes_single_byte_commands() {
        assert_eq!(Command::decode(b"0"), Some(Command::Stop));
        assert_eq!(
            Command::decode(b"1"),
            Some(Command::Start(AnimationKind::Rainbow))
        );
        assert_eq!(
            Command::decode(b"2"),
            Some(Command::Start(AnimationKind::Pulse))
        );
    }

    #[test]
    fn rejects_unknown_and_multi_byte_payloads() {
        assert_eq!(Command::decode(b""), None);
        assert_eq!(Command::decode(b"3"), None);
        assert_eq!(Command::decode(b"a"), None);
        assert_eq!(Command::decode(b"10"), None);
        assert_eq!(Command::decode(b"00"), None);
        assert_eq!(Command::decode(&[1]), None);
    }

    #[test]
    fn start_sets_animating_and_posts_request() {
        let status = AnimationStatus::new();
        let requests = AnimationRequests::new();
        let dispatcher = CommandDispatcher::new(&status, &requests);

        assert_eq!(
            dispatcher.on_write(b"2"),
            Some(Command::Start(AnimationKind::Pulse))
        );
        assert_eq!(status.get(), Status::Animating);

        let request = requests.try_take().unwrap();
        assert_eq!(request.kind, AnimationKind::Pulse);
        assert!(status.is_active(request.ticket));
    }

    #[test]
    fn stop_withdraws_pending_request() {
        let status = AnimationStatus::new();
        let requests = AnimationRequests::new();
        let dispatcher = CommandDispatcher::new(&status, &requests);

        dispatcher.on_write(b"1");
        dispatcher.on_write(b"0");

        assert_eq!(status.get(), Status::Idle);
        assert!(!requests.signaled());
    }

    #[test]
    fn newer_start_replaces_pending_request() {
        let status = AnimationStatus::new();
        let requests = AnimationRequests::new();
        let dispatcher = CommandDispatcher::new(&status, &requests);

        dispatcher.on_write(b"1");
        dispatcher.on_write(b"2");

        let request = requests.try_take().unwrap();
        assert_eq!(request.kind, AnimationKind::Pulse);
        assert!(requests.try_take().is_none());
    }

    #[test]
    fn unknown_payload_changes_nothing() {
        let status = AnimationStatus::new();
        let requests = AnimationRequests::new();
        let dispatcher = CommandDispatcher::new(&status, &requests);

        dispatcher.on_write(b"1");
        let ticket = status.ticket();

        assert_eq!(dispatcher.on_write(b"x"), None);
        assert_eq!(dispatcher.on_write(b"12"), None);

        assert_eq!(status.get(), Status::Animating);
        assert_eq!(status.ticket(), ticket);
        assert!(requests.signaled());
    }
}
