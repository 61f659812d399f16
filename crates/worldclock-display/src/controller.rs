//! Drives a display session: input, lookup, clock.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use worldclock_core::clock::Clock;
use worldclock_core::error::UPSTREAM_FAILURE_MESSAGE;

use crate::client::TimeSource;
use crate::render::Renderer;
use crate::session::{ClockView, SessionState, TransitionError};
use crate::ticker::{ClockTicker, TICK_PERIOD};

/// Owns the session state and the ticker of the visible clock.
///
/// The ticker exists exactly while the state is `ClockVisible`; every path
/// out of that state drops it.
pub struct ClockController {
    state: SessionState,
    ticker: Option<ClockTicker>,
    source: Arc<dyn TimeSource>,
    clock: Arc<dyn Clock>,
    renderer: Arc<dyn Renderer>,
    tick_period: Duration,
}

impl ClockController {
    /// Creates an idle controller and shows the input view.
    pub fn new(
        source: Arc<dyn TimeSource>,
        clock: Arc<dyn Clock>,
        renderer: Arc<dyn Renderer>,
    ) -> Self {
        renderer.show_input();
        Self {
            state: SessionState::Idle,
            ticker: None,
            source,
            clock,
            renderer,
            tick_period: TICK_PERIOD,
        }
    }

    /// Overrides the clock refresh period.
    #[must_use]
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    /// The current session state.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Whether a clock refresh is running.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(ClockTicker::is_running)
    }

    /// Looks up the current time for `input` and shows it. A running clock is
    /// stopped first. Blank input fails without contacting the server.
    ///
    /// Cancel-safe: if a previous `submit` future was dropped mid-lookup, the
    /// abandoned `Loading` state is discarded before the new search starts.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError` if the session cannot accept a submission.
    pub async fn submit(&mut self, input: &str) -> Result<&SessionState, TransitionError> {
        // `&mut self` rules out a lookup still in flight, so `Loading` here
        // was left behind by a dropped future.
        if let SessionState::Loading { country } = &self.state {
            warn!(%country, "discarding abandoned lookup");
            self.state = self.state.reset();
        }

        let next = self.state.submit(input)?;
        self.enter(next);

        let SessionState::Loading { country } = &self.state else {
            return Ok(&self.state);
        };
        let country = country.clone();

        let outcome = match self.source.fetch_time(&country).await {
            Ok(snapshot) => ClockView::from_snapshot(&snapshot).map_err(|e| {
                warn!(%country, error = %e, "server returned an unusable timezone");
                UPSTREAM_FAILURE_MESSAGE.to_owned()
            }),
            Err(e) => {
                warn!(%country, error = %e, "time lookup failed");
                Err(e.user_message().to_owned())
            }
        };

        let next = match outcome {
            Ok(view) => {
                info!(%country, timezone = %view.timezone, "showing clock");
                self.state.resolve(view)?
            }
            Err(message) => self.state.fail(message)?,
        };
        self.enter(next);

        Ok(&self.state)
    }

    /// Stops any running clock and returns to the input view.
    pub fn reset(&mut self) {
        let next = self.state.reset();
        self.enter(next);
    }

    /// Replaces the state, releasing the old state's ticker and rendering
    /// the new one.
    fn enter(&mut self, next: SessionState) {
        self.ticker = None;
        self.state = next;

        match &self.state {
            SessionState::Idle => self.renderer.show_input(),
            SessionState::Loading { country } => self.renderer.show_loading(country),
            SessionState::ClockVisible(view) => {
                self.renderer.show_clock(view);
                self.ticker = Some(ClockTicker::start(
                    view.zone,
                    Arc::clone(&self.clock),
                    Arc::clone(&self.renderer),
                    self.tick_period,
                ));
            }
            SessionState::Error { message } => self.renderer.show_error(message),
        }
    }
}
