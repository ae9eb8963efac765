//! Animation Engine - state machine for one animation at a time
//!
//! The engine:
//! - Renders the selected animation frame by frame
//! - Suspends for the frame interval after every frame
//! - Polls the [`Continuation`] once per frame and stops cooperatively
//! - Clears the strip to black exactly once when an animation ends
//!
//! The frame in flight always completes before the predicate is checked,
//! so a stop request is observed within one frame interval.

use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;

use crate::{
    animation::{AnimationKind, Continuation, Pulse, render_rainbow},
    color::Rgb,
    driver::LedDriver,
    strip::{Strip, StripError},
};

/// Default frame interval
const DEFAULT_FRAME_INTERVAL_MS: u64 = 10;

/// Number of rainbow cycles before the animation completes on its own
const DEFAULT_RAINBOW_CYCLES: u32 = 254;

/// Duration of one pulse fade
const DEFAULT_PULSE_PERIOD_MS: u64 = 900;

/// Engine state machine states
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// Nothing is rendered, strip is dark
    Idle,
    /// Rendering the rainbow cycle
    RunningRainbow,
    /// Rendering the pulse crossfade
    RunningPulse,
    /// Animation exited, strip is being cleared
    Stopping,
}

impl EngineState {
    /// Running state for an animation kind
    pub const fn running(kind: AnimationKind) -> Self {
        match kind {
            AnimationKind::Rainbow => Self::RunningRainbow,
            AnimationKind::Pulse => Self::RunningPulse,
        }
    }
}

/// How an animation ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationExit {
    /// The animation ran all of its cycles
    Completed { cycles: u32 },
    /// The continuation returned false after a frame of `cycle`
    Cancelled { cycle: u32 },
}

/// Animation timings and colors
#[derive(Clone, Copy, Debug)]
pub struct AnimationConfig {
    /// Pause after every rendered frame
    pub frame_interval: Duration,
    /// Rainbow cycles before the rainbow completes
    pub rainbow_cycles: u32,
    /// Pulse color at the start of the first fade
    pub pulse_from: Rgb,
    /// Pulse color at the end of the first fade
    pub pulse_to: Rgb,
    /// Duration of one pulse fade
    pub pulse_period: Duration,
    /// Color shown by [`AnimationEngine::splash`]
    pub splash_color: Rgb,
    /// How long the splash color is held
    pub splash_duration: Duration,
}

impl AnimationConfig {
    pub const DEFAULT: Self = Self {
        frame_interval: Duration::from_millis(DEFAULT_FRAME_INTERVAL_MS),
        rainbow_cycles: DEFAULT_RAINBOW_CYCLES,
        pulse_from: Rgb { r: 145, g: 105, b: 0 },
        pulse_to: Rgb { r: 255, g: 230, b: 164 },
        pulse_period: Duration::from_millis(DEFAULT_PULSE_PERIOD_MS),
        splash_color: Rgb { r: 0, g: 255, b: 0 },
        splash_duration: Duration::from_secs(2),
    };

    /// Frames in one pulse fade
    #[allow(clippy::cast_possible_truncation)]
    pub fn pulse_steps(&self) -> u32 {
        let frame_ms = self.frame_interval.as_millis().max(1);
        (self.pulse_period.as_millis() / frame_ms).clamp(1, u64::from(u32::MAX)) as u32
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Animation Engine
///
/// Generic over `D: LedDriver` for the hardware backend and over
/// `T: DelayNs` for the frame suspension.
pub struct AnimationEngine<D: LedDriver<N>, T: DelayNs, const N: usize> {
    /// Frame buffer and hardware driver
    strip: Strip<D, N>,
    /// Frame suspension
    delay: T,
    /// Timings and colors
    config: AnimationConfig,
    /// Current engine state
    state: EngineState,
}

impl<D: LedDriver<N>, T: DelayNs, const N: usize> AnimationEngine<D, T, N> {
    pub fn new(driver: D, delay: T, config: AnimationConfig) -> Self {
        Self {
            strip: Strip::new(driver),
            delay,
            config,
            state: EngineState::Idle,
        }
    }

    /// Get current engine state
    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn strip(&self) -> &Strip<D, N> {
        &self.strip
    }

    pub fn delay(&self) -> &T {
        &self.delay
    }

    /// Show the splash color, hold it and clear the strip
    #[allow(clippy::cast_possible_truncation)]
    pub async fn splash(&mut self) -> Result<(), StripError<D::Error>> {
        self.strip.set_all(self.config.splash_color)?;
        let hold_ms = self.config.splash_duration.as_millis().min(u64::from(u32::MAX)) as u32;
        self.delay.delay_ms(hold_ms).await;
        self.strip.clear()
    }

    /// Run one animation until it completes or the continuation stops it
    ///
    /// On return the strip is black and the engine is back to
    /// [`EngineState::Idle`]. A driver fault aborts the animation and is
    /// returned without retrying.
    pub async fn run<C: Continuation>(
        &mut self,
        kind: AnimationKind,
        continuation: &C,
    ) -> Result<AnimationExit, StripError<D::Error>> {
        self.set_state(EngineState::running(kind));

        let result = match kind {
            AnimationKind::Rainbow => self.run_rainbow(continuation).await,
            AnimationKind::Pulse => self.run_pulse(continuation).await,
        };

        match result {
            Ok(exit) => {
                self.finish()?;
                Ok(exit)
            }
            Err(e) => {
                log::error!("animator: {} aborted: {:?}", kind.as_str(), e);
                self.set_state(EngineState::Idle);
                Err(e)
            }
        }
    }

    async fn run_rainbow<C: Continuation>(
        &mut self,
        continuation: &C,
    ) -> Result<AnimationExit, StripError<D::Error>> {
        let cycles = self.config.rainbow_cycles;
        for cycle in 0..cycles {
            render_rainbow(&mut self.strip, cycle)?;
            self.pause().await;
            if !continuation.should_continue(cycle) {
                return Ok(AnimationExit::Cancelled { cycle });
            }
        }
        Ok(AnimationExit::Completed { cycles })
    }

    async fn run_pulse<C: Continuation>(
        &mut self,
        continuation: &C,
    ) -> Result<AnimationExit, StripError<D::Error>> {
        let mut pulse = Pulse::new(
            self.config.pulse_from,
            self.config.pulse_to,
            self.config.pulse_steps(),
        );
        loop {
            for step in 1..=pulse.steps() {
                self.strip.set_all(pulse.color_at(step))?;
                self.pause().await;
                if !continuation.should_continue(pulse.cycle()) {
                    return Ok(AnimationExit::Cancelled {
                        cycle: pulse.cycle(),
                    });
                }
            }
            pulse.finish_cycle();
        }
    }

    /// Stopping -> Idle, clearing the strip on the way
    fn finish(&mut self) -> Result<(), StripError<D::Error>> {
        self.set_state(EngineState::Stopping);
        let result = self.strip.clear();
        self.set_state(EngineState::Idle);
        result
    }

    #[allow(clippy::cast_possible_truncation)]
    async fn pause(&mut self) {
        let frame_ms = self.config.frame_interval.as_millis().min(u64::from(u32::MAX)) as u32;
        self.delay.delay_ms(frame_ms).await;
    }

    fn set_state(&mut self, state: EngineState) {
        if self.state != state {
            log::debug!("animator: {:?} -> {:?}", self.state, state);
            self.state = state;
        }
    }
}
