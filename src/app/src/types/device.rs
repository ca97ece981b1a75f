use serde::{Deserialize, Serialize};
use std::fmt;

/// Settings the device reports before the first successful status fetch.
pub const DEFAULT_MIN_INTERVAL_MS: u32 = 250;
pub const DEFAULT_MAX_INTERVAL_MS: u32 = 850;
pub const DEFAULT_AUTO_OFF_MINUTES: u32 = 0;

/// Check dotted-quad address syntax: four groups of one to three ASCII digits.
///
/// Octet ranges are intentionally not checked, so `999.1.1.1` is accepted.
/// The empty string is invalid.
pub fn is_valid_address(candidate: &str) -> bool {
    let groups: Vec<&str> = candidate.split('.').collect();
    if groups.len() != 4 {
        return false;
    }

    groups
        .iter()
        .all(|group| (1..=3).contains(&group.len()) && group.bytes().all(|b| b.is_ascii_digit()))
}

/// Network address of the switch as typed by the user, stored verbatim
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceAddress(String);

impl DeviceAddress {
    pub fn new(candidate: impl Into<String>) -> Self {
        Self(candidate.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_valid(&self) -> bool {
        is_valid_address(&self.0)
    }
}

impl fmt::Display for DeviceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Connection lifecycle. There is no way back to `Idle` once a connect was attempted.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ConnectionState {
    #[default]
    Idle,
    Connecting,
    Connected,
    Error,
}

impl ConnectionState {
    /// Text for the status badge
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionState::Idle => "Disconnected",
            ConnectionState::Connecting => "Connecting...",
            ConnectionState::Connected => "Connected",
            ConnectionState::Error => "Connection error",
        }
    }
}

/// Clap detection and auto-off configuration of the switch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSettings {
    pub min_interval_ms: u32,
    pub max_interval_ms: u32,
    /// Zero disables auto-off
    pub auto_off_minutes: u32,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            min_interval_ms: DEFAULT_MIN_INTERVAL_MS,
            max_interval_ms: DEFAULT_MAX_INTERVAL_MS,
            auto_off_minutes: DEFAULT_AUTO_OFF_MINUTES,
        }
    }
}

impl DeviceSettings {
    pub fn get(&self, field: SettingsField) -> u32 {
        match field {
            SettingsField::MinIntervalMs => self.min_interval_ms,
            SettingsField::MaxIntervalMs => self.max_interval_ms,
            SettingsField::AutoOffMinutes => self.auto_off_minutes,
        }
    }

    pub fn set(&mut self, field: SettingsField, value: u32) {
        match field {
            SettingsField::MinIntervalMs => self.min_interval_ms = value,
            SettingsField::MaxIntervalMs => self.max_interval_ms = value,
            SettingsField::AutoOffMinutes => self.auto_off_minutes = value,
        }
    }

    /// Path and query of the `/config` command carrying these settings
    pub fn config_path(&self) -> String {
        format!(
            "/config?min={}&max={}&timer={}",
            self.min_interval_ms, self.max_interval_ms, self.auto_off_minutes
        )
    }
}

/// Last confirmed state of the device, replaced wholesale on every status fetch
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSnapshot {
    pub power_on: bool,
    pub settings: DeviceSettings,
}

/// Body of `GET /status` as sent by the firmware
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceStatus {
    pub state: bool,
    pub min: u32,
    pub max: u32,
    pub timer: u32,
}

impl From<DeviceStatus> for DeviceSnapshot {
    fn from(status: DeviceStatus) -> Self {
        Self {
            power_on: status.state,
            settings: DeviceSettings {
                min_interval_ms: status.min,
                max_interval_ms: status.max,
                auto_off_minutes: status.timer,
            },
        }
    }
}

/// Editable configuration fields
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SettingsField {
    MinIntervalMs,
    MaxIntervalMs,
    AutoOffMinutes,
}

impl SettingsField {
    pub const ALL: [SettingsField; 3] = [
        SettingsField::MinIntervalMs,
        SettingsField::MaxIntervalMs,
        SettingsField::AutoOffMinutes,
    ];

    /// Advisory slider bounds. Values outside are still accepted by the model.
    pub fn bounds(&self) -> SliderBounds {
        match self {
            SettingsField::MinIntervalMs => SliderBounds::new(100, 1000, 50),
            SettingsField::MaxIntervalMs => SliderBounds::new(300, 2000, 50),
            SettingsField::AutoOffMinutes => SliderBounds::new(0, 60, 5),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SettingsField::MinIntervalMs => "Minimum time between claps",
            SettingsField::MaxIntervalMs => "Maximum time between claps",
            SettingsField::AutoOffMinutes => "Auto-off timer",
        }
    }

    /// Human readable value, e.g. `250 ms`, `15 min` or `Disabled`
    pub fn format_value(&self, value: u32) -> String {
        match self {
            SettingsField::MinIntervalMs | SettingsField::MaxIntervalMs => format!("{value} ms"),
            SettingsField::AutoOffMinutes if value == 0 => "Disabled".to_string(),
            SettingsField::AutoOffMinutes => format!("{value} min"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SliderBounds {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl SliderBounds {
    const fn new(min: u32, max: u32, step: u32) -> Self {
        Self { min, max, step }
    }
}
