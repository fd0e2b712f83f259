//! Telemetry context for the debugger front end
//!
//! Events, timings, and error reports hang off an explicit [`Telemetry`]
//! value owned by the caller rather than process globals. Emission goes
//! through `tracing`, so the host application decides where records land
//! by installing a subscriber.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde::Deserialize;
use serde_json::Value;

/// Error messages that are session noise, not failures
pub const DEFAULT_IGNORED_ERRORS: &[&str] = &[
    "Current thread has paused or resumed",
    "Current thread has changed",
    "Failed to load Stripe.js",
    "Stripe.js not available",
];

/// Telemetry settings, usually the `[telemetry]` section of the config file
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct TelemetryConfig {
    /// Master switch; when off, events and errors are dropped
    pub enabled: bool,
    /// Also log every event at debug level
    pub log_events: bool,
    /// Extra error-message substrings to drop, on top of the defaults
    pub ignored_errors: Vec<String>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_events: false,
            ignored_errors: Vec::new(),
        }
    }
}

/// Identity attached to telemetry events
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TelemetryUser {
    pub id: Option<String>,
    pub email: Option<String>,
    /// True for team members, so internal sessions can be filtered out
    pub internal: bool,
}

impl TelemetryUser {
    /// A user stays anonymous until both id and email are known
    pub fn is_anonymous(&self) -> bool {
        self.id.is_none() || self.email.is_none()
    }
}

/// Caller-owned telemetry context
#[derive(Debug)]
pub struct Telemetry {
    enabled: bool,
    log_events: bool,
    ignored_errors: Vec<String>,
    user: Option<TelemetryUser>,
    recording_id: Option<String>,
    timings: HashMap<String, Instant>,
}

impl Telemetry {
    pub fn new(config: &TelemetryConfig) -> Self {
        let mut ignored_errors: Vec<String> = DEFAULT_IGNORED_ERRORS
            .iter()
            .map(|message| message.to_string())
            .collect();
        ignored_errors.extend(config.ignored_errors.iter().cloned());

        Self {
            enabled: config.enabled,
            log_events: config.log_events,
            ignored_errors,
            user: None,
            recording_id: None,
            timings: HashMap::new(),
        }
    }

    /// Context that drops everything (development, tests)
    pub fn disabled() -> Self {
        Self::new(&TelemetryConfig {
            enabled: false,
            ..TelemetryConfig::default()
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Attach the signed-in user to subsequent events
    pub fn set_user(&mut self, user: TelemetryUser) {
        tracing::debug!(
            target: "telemetry",
            internal = user.internal,
            anonymous = user.is_anonymous(),
            "telemetry user updated"
        );
        self.user = Some(user);
    }

    pub fn user(&self) -> Option<&TelemetryUser> {
        self.user.as_ref()
    }

    /// Attach the recording being inspected to subsequent events
    pub fn register_recording(&mut self, recording_id: impl Into<String>) {
        self.recording_id = Some(recording_id.into());
    }

    /// False for error messages on the ignore list
    pub fn should_report_error(&self, message: &str) -> bool {
        !self
            .ignored_errors
            .iter()
            .any(|ignored| message.contains(ignored))
    }

    /// Report an error unless it is ignorable noise
    pub fn record_error(&self, message: &str) {
        if !self.enabled || !self.should_report_error(message) {
            return;
        }
        tracing::error!(
            target: "telemetry",
            recording = self.recording_id.as_deref().unwrap_or(""),
            "{message}"
        );
    }

    /// Send a named event with arbitrary JSON tags
    pub fn record_event(&self, event: &str, tags: Value) {
        if self.log_events {
            tracing::debug!(target: "telemetry", event, %tags, "telemetry event");
        }
        if !self.enabled {
            return;
        }
        let user_id = self
            .user
            .as_ref()
            .and_then(|user| user.id.as_deref())
            .unwrap_or("");
        let internal = self.user.as_ref().map(|user| user.internal).unwrap_or(false);
        tracing::info!(
            target: "telemetry",
            event,
            user = user_id,
            internal,
            recording = self.recording_id.as_deref().unwrap_or(""),
            %tags,
            "telemetry event"
        );
    }

    /// Two-phase timer: the first call for an event arms it, the second
    /// emits the event with its duration and returns the elapsed time.
    pub fn track_timing(&mut self, event: &str) -> Option<Duration> {
        match self.timings.remove(event) {
            None => {
                self.timings.insert(event.to_string(), Instant::now());
                None
            }
            Some(started) => {
                let duration = started.elapsed();
                self.record_event(
                    event,
                    serde_json::json!({ "duration": duration.as_millis() as u64 }),
                );
                Some(duration)
            }
        }
    }
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new(&TelemetryConfig::default())
    }
}
