//! View model handed to the shell on every render.

use serde::{Deserialize, Serialize};

use crate::model::Model;
use crate::types::*;

/// One configuration slider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SliderView {
    pub field: SettingsField,
    pub title: String,
    pub value: u32,
    pub value_label: String,
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl SliderView {
    fn new(field: SettingsField, settings: &DeviceSettings) -> Self {
        let value = settings.get(field);
        let bounds = field.bounds();
        Self {
            field,
            title: field.title().to_string(),
            value,
            value_label: field.format_value(value),
            min: bounds.min,
            max: bounds.max,
            step: bounds.step,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    // Connection
    pub address: String,
    pub address_valid: bool,
    pub connection_state: ConnectionState,
    pub connection_label: String,
    /// RFC 3339 time of the last successful status fetch
    pub last_sync: Option<String>,
    /// Detail of the last connection failure, for diagnostics only
    pub connection_error: Option<String>,
    pub can_connect: bool,

    // Device
    pub power_on: bool,
    pub snapshot: Option<DeviceSnapshot>,

    // Settings
    pub settings: DeviceSettings,
    pub settings_dirty: bool,
    pub sliders: Vec<SliderView>,
    pub can_save: bool,
    pub is_saving: bool,

    // Assistant
    pub transcript: Vec<ChatMessage>,
    pub assistant_pending: bool,

    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl From<&Model> for ViewModel {
    fn from(model: &Model) -> Self {
        let connection = &model.connection;
        let edited = model.settings.edited();
        let address_valid = connection.is_address_valid();

        Self {
            address: connection.address().to_string(),
            address_valid,
            connection_state: connection.state(),
            connection_label: connection.state().label().to_string(),
            last_sync: connection.last_sync().map(|at| at.to_rfc3339()),
            connection_error: connection.last_error().map(str::to_string),
            can_connect: address_valid,
            power_on: connection.power_on(),
            snapshot: connection.snapshot().cloned(),
            settings: edited.clone(),
            settings_dirty: model.settings.is_dirty(),
            sliders: SettingsField::ALL
                .iter()
                .map(|field| SliderView::new(*field, edited))
                .collect(),
            can_save: address_valid && model.settings.is_dirty() && !model.is_saving,
            is_saving: model.is_saving,
            transcript: model.transcript.clone(),
            assistant_pending: model.assistant_pending,
            error_message: model.error_message.clone(),
            success_message: model.success_message.clone(),
        }
    }
}
