//! Mission Control State Store
//!
//! A single-writer broadcast register for the two settings that
//! independently mounted consoles and the tool layer must observe
//! consistently: feed mode (replay vs. live) and the active scenario.
//!
//! Intentionally trivial: no queueing, no async boundary, no conflict
//! resolution. Setters no-op on unchanged values; accepted changes notify
//! every subscriber synchronously, in registration order, before the
//! setter returns, so a caller that sets and immediately reads always
//! observes its own write.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ControlError {
    #[error("Unknown feed mode: {0}")]
    UnknownFeedMode(String),
    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),
}

/// Whether consoles render the fixed replay story or live-tick data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedMode {
    Replay,
    Live,
}

impl FromStr for FeedMode {
    type Err = ControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "replay" => Ok(Self::Replay),
            "live" => Ok(Self::Live),
            other => Err(ControlError::UnknownFeedMode(other.to_string())),
        }
    }
}

impl fmt::Display for FeedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Replay => write!(f, "replay"),
            Self::Live => write!(f, "live"),
        }
    }
}

/// Operator-selected narrative overlay biasing which telemetry and alert
/// values are surfaced, layered on top of the base simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioId {
    None,
    SolarSpike,
    UplinkJitter,
    FuelLeak,
}

impl FromStr for ScenarioId {
    type Err = ControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "solar_spike" => Ok(Self::SolarSpike),
            "uplink_jitter" => Ok(Self::UplinkJitter),
            "fuel_leak" => Ok(Self::FuelLeak),
            other => Err(ControlError::UnknownScenario(other.to_string())),
        }
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::SolarSpike => write!(f, "solar_spike"),
            Self::UplinkJitter => write!(f, "uplink_jitter"),
            Self::FuelLeak => write!(f, "fuel_leak"),
        }
    }
}

/// Snapshot of the mission control settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionControlState {
    pub feed_mode: FeedMode,
    pub scenario: ScenarioId,
    pub updated_at: DateTime<Utc>,
}

/// Handle returned by [`MissionControlStore::subscribe`]; pass it to
/// [`MissionControlStore::unsubscribe`] to stop receiving notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&MissionControlState) + Send + Sync>;

/// The store itself. Constructed once at application start and shared by
/// reference; tests construct a fresh instance instead of resetting a
/// global. State is never persisted, so a restart returns to the defaults
/// (replay, none).
pub struct MissionControlStore {
    state: RwLock<MissionControlState>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_subscription: AtomicU64,
}

impl MissionControlStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MissionControlState {
                feed_mode: FeedMode::Replay,
                scenario: ScenarioId::None,
                updated_at: Utc::now(),
            }),
            listeners: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(0),
        }
    }

    /// Current state snapshot. Never blocks on a writer for longer than
    /// the commit itself; never fails.
    pub fn get(&self) -> MissionControlState {
        self.state.read().clone()
    }

    /// Switch the feed mode. No-op (and no notification) if unchanged.
    pub fn set_feed_mode(&self, feed_mode: FeedMode) {
        let snapshot = {
            let mut state = self.state.write();
            if state.feed_mode == feed_mode {
                return;
            }
            state.feed_mode = feed_mode;
            state.updated_at = Utc::now();
            state.clone()
        };
        self.notify(&snapshot);
    }

    /// Switch the active scenario. No-op (and no notification) if unchanged.
    pub fn set_scenario(&self, scenario: ScenarioId) {
        let snapshot = {
            let mut state = self.state.write();
            if state.scenario == scenario {
                return;
            }
            state.scenario = scenario;
            state.updated_at = Utc::now();
            state.clone()
        };
        self.notify(&snapshot);
    }

    /// Register a listener invoked on every future accepted change.
    pub fn subscribe(
        &self,
        listener: impl Fn(&MissionControlState) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Safe to call from inside a notification; it
    /// takes effect for subsequent notifications. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.lock().retain(|(lid, _)| *lid != id);
    }

    fn notify(&self, snapshot: &MissionControlState) {
        // Snapshot the listener list before invoking it, so a listener
        // that subscribes or unsubscribes re-entrantly does not deadlock
        // and does not affect the notification already in progress.
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in listeners {
            listener(snapshot);
        }
    }
}

impl Default for MissionControlStore {
    fn default() -> Self {
        Self::new()
    }
}
