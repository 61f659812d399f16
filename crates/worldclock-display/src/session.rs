//! Per-session UI state and its transitions.

use chrono::{DateTime, Utc};
use thiserror::Error;
use worldclock_core::error::INVALID_REQUEST_MESSAGE;
use worldclock_core::label::display_label;
use worldclock_core::snapshot::{TimeSnapshot, format_date, format_time};
use worldclock_core::zone::{ZoneError, ZoneSpec, map_offset_to_iana};

/// What the clock view shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockView {
    /// Label above the clock, e.g. `Asia / Japan`.
    pub label: String,
    /// Timezone the clock runs in, after offset mapping.
    pub timezone: String,
    /// Resolved zone used for local recomputation.
    pub zone: ZoneSpec,
    /// Time of day, `HH:mm:ss`.
    pub time: String,
    /// Calendar date, `Weekday, Mon D, YYYY`.
    pub date: String,
}

impl ClockView {
    /// Builds the view for a server response. Offset timezones are mapped to
    /// an IANA zone when one is known.
    ///
    /// # Errors
    ///
    /// Returns `ZoneError` if the timezone cannot be resolved locally.
    pub fn from_snapshot(snapshot: &TimeSnapshot) -> Result<Self, ZoneError> {
        let timezone = map_offset_to_iana(&snapshot.timezone);
        let zone = ZoneSpec::resolve(timezone)?;
        Ok(Self {
            label: display_label(timezone, &snapshot.country),
            timezone: timezone.to_owned(),
            zone,
            time: snapshot.time.clone(),
            date: snapshot.date.clone(),
        })
    }

    /// Recomputes time and date for `instant`.
    pub fn refresh(&mut self, instant: DateTime<Utc>) {
        let local = self.zone.localize(instant);
        self.time = format_time(&local);
        self.date = format_date(&local);
    }
}

/// A transition that is not allowed from the current state.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot {action} while {state}")]
pub struct TransitionError {
    /// The attempted transition.
    pub action: &'static str,
    /// The state it was attempted from.
    pub state: &'static str,
}

/// State of one display session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Input visible, no clock shown.
    #[default]
    Idle,
    /// A lookup is outstanding.
    Loading {
        /// The trimmed country name being looked up.
        country: String,
    },
    /// The clock is shown and ticking.
    ClockVisible(ClockView),
    /// The last action failed.
    Error {
        /// Message shown to the user.
        message: String,
    },
}

impl SessionState {
    /// Short name of the state for logs and errors.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading { .. } => "loading",
            Self::ClockVisible(_) => "clock_visible",
            Self::Error { .. } => "error",
        }
    }

    /// The user submitted `input`. Blank input moves straight to `Error`;
    /// anything else starts loading. Allowed from every state but `Loading`,
    /// so a new search can replace a running clock or a failure.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError` while a lookup is already outstanding.
    pub fn submit(&self, input: &str) -> Result<Self, TransitionError> {
        if matches!(self, Self::Loading { .. }) {
            return Err(self.reject("submit"));
        }
        let country = input.trim();
        if country.is_empty() {
            return Ok(Self::Error {
                message: INVALID_REQUEST_MESSAGE.to_owned(),
            });
        }
        Ok(Self::Loading {
            country: country.to_owned(),
        })
    }

    /// The outstanding lookup succeeded.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError` unless the state is `Loading`.
    pub fn resolve(&self, view: ClockView) -> Result<Self, TransitionError> {
        match self {
            Self::Loading { .. } => Ok(Self::ClockVisible(view)),
            _ => Err(self.reject("resolve")),
        }
    }

    /// The outstanding lookup failed.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError` unless the state is `Loading`.
    pub fn fail(&self, message: impl Into<String>) -> Result<Self, TransitionError> {
        match self {
            Self::Loading { .. } => Ok(Self::Error {
                message: message.into(),
            }),
            _ => Err(self.reject("fail")),
        }
    }

    /// Back to the input view. Always allowed.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self::Idle
    }

    fn reject(&self, action: &'static str) -> TransitionError {
        TransitionError {
            action,
            state: self.name(),
        }
    }
}
