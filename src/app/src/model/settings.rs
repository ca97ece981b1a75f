use crate::types::{DeviceSettings, SettingsField};

/// Tracks configuration edits against the last confirmed device settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsReconciler {
    confirmed: DeviceSettings,
    edited: DeviceSettings,
    dirty: bool,
}

impl SettingsReconciler {
    pub fn confirmed(&self) -> &DeviceSettings {
        &self.confirmed
    }

    pub fn edited(&self) -> &DeviceSettings {
        &self.edited
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write a single edited field. Returns whether the edit buffer changed.
    pub fn update_field(&mut self, field: SettingsField, value: u32) -> bool {
        if self.edited.get(field) == value {
            return false;
        }
        self.edited.set(field, value);
        self.recompute_dirty();
        true
    }

    /// Replace both copies with freshly fetched settings, discarding unsaved edits
    pub fn reset_to(&mut self, settings: DeviceSettings) {
        self.confirmed = settings.clone();
        self.edited = settings;
        self.dirty = false;
    }

    /// Promote settings the device accepted to confirmed.
    ///
    /// Edits made while the save was in flight stay in the edit buffer and keep the flag set.
    pub fn promote(&mut self, saved: DeviceSettings) {
        self.confirmed = saved;
        self.recompute_dirty();
    }

    fn recompute_dirty(&mut self) {
        self.dirty = self.edited != self.confirmed;
    }
}
