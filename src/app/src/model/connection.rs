use chrono::{DateTime, Utc};

use crate::http_helpers::{device_url, power_path, STATUS_PATH};
use crate::types::{ConnectionState, DeviceAddress, DeviceError, DeviceSettings, DeviceSnapshot};

/// Owns the device address, the connection lifecycle and the last confirmed device state.
///
/// The manager only records state; the update handlers turn the URLs it hands out into
/// device commands and feed the results back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionManager {
    address: DeviceAddress,
    state: ConnectionState,
    /// Optimistic: follows the user's toggle immediately, corrected by the next fetch
    power_on: bool,
    snapshot: Option<DeviceSnapshot>,
    last_sync: Option<DateTime<Utc>>,
    last_error: Option<String>,
}

impl ConnectionManager {
    pub fn address(&self) -> &DeviceAddress {
        &self.address
    }

    pub fn is_address_valid(&self) -> bool {
        self.address.is_valid()
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn power_on(&self) -> bool {
        self.power_on
    }

    pub fn snapshot(&self) -> Option<&DeviceSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn last_sync(&self) -> Option<DateTime<Utc>> {
        self.last_sync
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Store the candidate verbatim. Returns whether anything changed.
    pub fn set_address(&mut self, candidate: String) -> bool {
        if self.address.as_str() == candidate {
            return false;
        }
        self.address = DeviceAddress::new(candidate);
        true
    }

    /// URL for `path` on the current device, if the address is valid
    pub fn url_for(&self, path: &str) -> Result<String, DeviceError> {
        if !self.address.is_valid() {
            return Err(DeviceError::InvalidAddress(self.address.to_string()));
        }
        Ok(device_url(&self.address, path))
    }

    /// Enter `Connecting` and return the status URL to fetch.
    ///
    /// A fetch already in flight is not cancelled; whichever response arrives last wins.
    pub fn begin_fetch(&mut self) -> Result<String, DeviceError> {
        let url = self.url_for(STATUS_PATH)?;
        self.state = ConnectionState::Connecting;
        Ok(url)
    }

    /// Apply a successful status fetch
    pub fn apply_snapshot(&mut self, snapshot: DeviceSnapshot, at: DateTime<Utc>) {
        self.power_on = snapshot.power_on;
        self.snapshot = Some(snapshot);
        self.state = ConnectionState::Connected;
        self.last_sync = Some(at);
        self.last_error = None;
    }

    /// Enter `Error`. The snapshot is kept so stale data can still be shown.
    pub fn fail(&mut self, error: impl ToString) {
        self.state = ConnectionState::Error;
        self.last_error = Some(error.to_string());
    }

    /// Set the optimistic power flag.
    ///
    /// Returns the command URL when the device should be told as well, which is only the case
    /// while connected to a valid address.
    pub fn set_power(&mut self, on: bool) -> Option<String> {
        self.power_on = on;

        if self.state != ConnectionState::Connected {
            return None;
        }
        self.url_for(power_path(on)).ok()
    }

    /// Mirror settings the device accepted into the snapshot
    pub fn confirm_settings(&mut self, settings: DeviceSettings) {
        if let Some(snapshot) = self.snapshot.as_mut() {
            snapshot.settings = settings;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(power_on: bool, min: u32) -> DeviceSnapshot {
        DeviceSnapshot {
            power_on,
            settings: DeviceSettings {
                min_interval_ms: min,
                ..Default::default()
            },
        }
    }

    fn connected_manager() -> ConnectionManager {
        let mut manager = ConnectionManager::default();
        manager.set_address("192.168.1.45".to_string());
        manager.begin_fetch().expect("valid address");
        manager.apply_snapshot(snapshot(false, 250), Utc::now());
        manager
    }

    #[test]
    fn starts_idle_without_snapshot() {
        let manager = ConnectionManager::default();

        assert_eq!(manager.state(), ConnectionState::Idle);
        assert!(manager.snapshot().is_none());
        assert!(manager.last_sync().is_none());
        assert!(!manager.is_address_valid());
    }

    #[test]
    fn set_address_reports_changes() {
        let mut manager = ConnectionManager::default();

        assert!(manager.set_address("192.168.1.4".to_string()));
        assert!(!manager.set_address("192.168.1.4".to_string()));
        assert!(manager.set_address("192.168.1.45".to_string()));
        assert_eq!(manager.address().as_str(), "192.168.1.45");
    }

    #[test]
    fn begin_fetch_requires_valid_address() {
        let mut manager = ConnectionManager::default();
        manager.set_address("192.168.1".to_string());

        assert_eq!(
            manager.begin_fetch(),
            Err(DeviceError::InvalidAddress("192.168.1".to_string()))
        );
        assert_eq!(manager.state(), ConnectionState::Idle);
    }

    #[test]
    fn begin_fetch_enters_connecting() {
        let mut manager = ConnectionManager::default();
        manager.set_address("192.168.1.45".to_string());

        assert_eq!(
            manager.begin_fetch(),
            Ok("http://192.168.1.45/status".to_string())
        );
        assert_eq!(manager.state(), ConnectionState::Connecting);
    }

    #[test]
    fn apply_snapshot_connects_and_syncs_power() {
        let manager = connected_manager();

        assert_eq!(manager.state(), ConnectionState::Connected);
        assert_eq!(manager.snapshot(), Some(&snapshot(false, 250)));
        assert!(!manager.power_on());
        assert!(manager.last_sync().is_some());
    }

    #[test]
    fn failure_keeps_stale_snapshot() {
        let mut manager = connected_manager();
        manager.begin_fetch().expect("valid address");
        manager.fail(DeviceError::Timeout);

        assert_eq!(manager.state(), ConnectionState::Error);
        assert_eq!(manager.snapshot(), Some(&snapshot(false, 250)));
        assert_eq!(manager.last_error(), Some("device did not answer in time"));
    }

    #[test]
    fn set_power_while_idle_is_local_only() {
        let mut manager = ConnectionManager::default();
        manager.set_address("192.168.1.45".to_string());

        assert_eq!(manager.set_power(true), None);
        assert!(manager.power_on());
    }

    #[test]
    fn set_power_while_connected_targets_the_device() {
        let mut manager = connected_manager();

        assert_eq!(
            manager.set_power(true),
            Some("http://192.168.1.45/on".to_string())
        );
        assert_eq!(
            manager.set_power(false),
            Some("http://192.168.1.45/off".to_string())
        );
    }

    #[test]
    fn set_power_after_address_became_invalid_is_local_only() {
        let mut manager = connected_manager();
        manager.set_address("192.168.1.".to_string());

        assert_eq!(manager.set_power(true), None);
        assert!(manager.power_on());
    }

    #[test]
    fn confirm_settings_updates_existing_snapshot_only() {
        let mut manager = ConnectionManager::default();
        manager.confirm_settings(DeviceSettings::default());
        assert!(manager.snapshot().is_none());

        let mut manager = connected_manager();
        let saved = DeviceSettings {
            min_interval_ms: 300,
            ..Default::default()
        };
        manager.confirm_settings(saved.clone());
        assert_eq!(manager.snapshot().map(|s| &s.settings), Some(&saved));
    }
}
