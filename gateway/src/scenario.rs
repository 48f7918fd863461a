//! Scenario overlays and effective-tick selection.
//!
//! The simulator itself never reads mission control state; this layer
//! does. It picks the tick the simulator is asked for (fixed replay tick
//! vs. live wall-clock tick) and layers operator-selected scenario
//! adjustments on top of the base simulation output without replacing it.

use mission_control::{FeedMode, MissionControlStore, ScenarioId};
use mission_sim::{current_tick, AlertSeverity, TelemetrySnapshot, TelemetryTrend, WeatherAlert};

/// The fixed tick replay mode pins every console to, so the demo tells
/// the same story on every run.
pub const REPLAY_TICK: i64 = 12;

/// Tick to feed the simulator given the current feed mode.
pub fn effective_tick(store: &MissionControlStore) -> i64 {
    match store.get().feed_mode {
        FeedMode::Replay => REPLAY_TICK,
        FeedMode::Live => current_tick(),
    }
}

/// Apply the active scenario's telemetry adjustments to a base snapshot.
pub fn apply_scenario_telemetry(
    scenario: ScenarioId,
    mut snapshot: TelemetrySnapshot,
) -> TelemetrySnapshot {
    match scenario {
        ScenarioId::FuelLeak if snapshot.asset_id == "SAT-07" => {
            snapshot.fuel = snapshot.fuel.saturating_sub(18).max(5);
            snapshot.signal_strength = snapshot.signal_strength.saturating_sub(6).max(20);
            snapshot.status = "fuel-leak-containment".to_string();
            snapshot.trend = TelemetryTrend::RisingRisk;
        }
        ScenarioId::UplinkJitter if snapshot.asset_id == "RELAY-3" => {
            snapshot.signal_strength = snapshot.signal_strength.saturating_sub(14).max(10);
            snapshot.status = "degraded-uplink-jitter".to_string();
            snapshot.trend = TelemetryTrend::RisingRisk;
        }
        _ => {}
    }
    snapshot
}

/// Augment base alerts with the active scenario's injected hazard.
pub fn apply_scenario_alerts(
    scenario: ScenarioId,
    mut alerts: Vec<WeatherAlert>,
) -> Vec<WeatherAlert> {
    match scenario {
        ScenarioId::SolarSpike => {
            alerts.insert(
                0,
                WeatherAlert {
                    alert_type: "Coronal Mass Ejection Front".to_string(),
                    severity: AlertSeverity::High,
                    corridor: "Atlantic Relay Corridor".to_string(),
                    region: "Orbital Band 4".to_string(),
                    active_window: "18 min".to_string(),
                },
            );
        }
        ScenarioId::UplinkJitter => {
            alerts.push(WeatherAlert {
                alert_type: "Uplink Timing Drift".to_string(),
                severity: AlertSeverity::Medium,
                corridor: "Ground-Alpha Uplink".to_string(),
                region: "Antenna Mesh".to_string(),
                active_window: "12 min".to_string(),
            });
        }
        _ => {}
    }
    alerts
}

/// Extra alerts the active scenario contributes to the overview count.
pub fn scenario_alert_bonus(scenario: ScenarioId) -> usize {
    match scenario {
        ScenarioId::SolarSpike => 2,
        ScenarioId::UplinkJitter | ScenarioId::FuelLeak => 1,
        ScenarioId::None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mission_sim::asset_telemetry;

    #[test]
    fn replay_mode_pins_the_tick() {
        let store = MissionControlStore::new();
        assert_eq!(effective_tick(&store), REPLAY_TICK);
        assert_eq!(effective_tick(&store), REPLAY_TICK);
    }

    #[test]
    fn live_mode_uses_the_wall_clock_tick() {
        let store = MissionControlStore::new();
        store.set_feed_mode(FeedMode::Live);
        let tick = effective_tick(&store);
        // The live tick is far past the replay story by construction.
        assert!(tick > REPLAY_TICK);
    }

    #[test]
    fn fuel_leak_targets_sat07_only() {
        let base = asset_telemetry("SAT-07", REPLAY_TICK);
        let adjusted = apply_scenario_telemetry(ScenarioId::FuelLeak, base.clone());
        assert_eq!(adjusted.status, "fuel-leak-containment");
        assert_eq!(adjusted.trend, TelemetryTrend::RisingRisk);
        assert!(adjusted.fuel >= 5);
        assert!(adjusted.fuel < base.fuel);
        assert!(adjusted.signal_strength >= 20);

        let relay = asset_telemetry("RELAY-3", REPLAY_TICK);
        let untouched = apply_scenario_telemetry(ScenarioId::FuelLeak, relay.clone());
        assert_eq!(untouched, relay);
    }

    #[test]
    fn uplink_jitter_targets_relay3_only() {
        let base = asset_telemetry("RELAY-3", REPLAY_TICK);
        let adjusted = apply_scenario_telemetry(ScenarioId::UplinkJitter, base.clone());
        assert_eq!(adjusted.status, "degraded-uplink-jitter");
        assert_eq!(adjusted.trend, TelemetryTrend::RisingRisk);
        assert!(adjusted.signal_strength >= 10);
        assert_eq!(adjusted.fuel, base.fuel);

        let sat = asset_telemetry("SAT-07", REPLAY_TICK);
        assert_eq!(apply_scenario_telemetry(ScenarioId::UplinkJitter, sat.clone()), sat);
    }

    #[test]
    fn no_scenario_leaves_telemetry_untouched() {
        let base = asset_telemetry("SAT-07", REPLAY_TICK);
        assert_eq!(apply_scenario_telemetry(ScenarioId::None, base.clone()), base);
    }

    #[test]
    fn solar_spike_prepends_a_high_severity_front() {
        let alerts = apply_scenario_alerts(ScenarioId::SolarSpike, Vec::new());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].alert_type, "Coronal Mass Ejection Front");
        assert_eq!(alerts[0].severity, AlertSeverity::High);

        // Prepended, never appended: the injected front outranks base alerts.
        let base = mission_sim::weather_alerts(18.9, -42.9, REPLAY_TICK);
        let augmented = apply_scenario_alerts(ScenarioId::SolarSpike, base);
        assert_eq!(augmented[0].alert_type, "Coronal Mass Ejection Front");
    }

    #[test]
    fn uplink_jitter_appends_a_timing_drift() {
        let base = mission_sim::weather_alerts(24.882, -17.55, REPLAY_TICK);
        let augmented = apply_scenario_alerts(ScenarioId::UplinkJitter, base.clone());
        assert_eq!(augmented.len(), base.len() + 1);
        assert_eq!(
            augmented.last().map(|a| a.alert_type.as_str()),
            Some("Uplink Timing Drift")
        );
    }

    #[test]
    fn alert_bonus_per_scenario() {
        assert_eq!(scenario_alert_bonus(ScenarioId::None), 0);
        assert_eq!(scenario_alert_bonus(ScenarioId::SolarSpike), 2);
        assert_eq!(scenario_alert_bonus(ScenarioId::UplinkJitter), 1);
        assert_eq!(scenario_alert_bonus(ScenarioId::FuelLeak), 1);
    }
}
