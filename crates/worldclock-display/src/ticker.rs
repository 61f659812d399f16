//! One-second clock refresh.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use worldclock_core::clock::Clock;
use worldclock_core::snapshot::{format_date, format_time};
use worldclock_core::zone::ZoneSpec;

use crate::render::Renderer;

/// Refresh period of a visible clock.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A running clock refresh. Each tick recomputes the time locally from the
/// cached zone; no network call is made. The refresh stops when the ticker
/// is dropped.
#[derive(Debug)]
pub struct ClockTicker {
    handle: JoinHandle<()>,
}

impl ClockTicker {
    /// Starts refreshing `renderer` every `period`, first tick immediately.
    /// Must be called within a tokio runtime.
    #[must_use]
    pub fn start(
        zone: ZoneSpec,
        clock: Arc<dyn Clock>,
        renderer: Arc<dyn Renderer>,
        period: Duration,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                let local = zone.localize(clock.now());
                renderer.update_clock(&format_time(&local), &format_date(&local));
            }
        });
        Self { handle }
    }

    /// Whether the refresh task is still alive.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
