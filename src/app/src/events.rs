use serde::{Deserialize, Serialize};

use crate::types::*;

/// Device connection events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ConnectionEvent {
    SetAddress {
        address: String,
    },
    Connect,
    Refresh,
    SetPower {
        on: bool,
    },

    // Device responses (internal events, skipped from serialization)
    #[serde(skip)]
    StatusResponse(Result<DeviceSnapshot, String>),
    #[serde(skip)]
    PowerResponse(Result<(), String>),
}

/// Device settings events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    UpdateField {
        field: SettingsField,
        value: u32,
    },
    Save,

    #[serde(skip)]
    SaveResponse {
        settings: DeviceSettings,
        result: Result<(), String>,
    },
}

/// Assistant chat events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum AssistantEvent {
    Ask {
        query: String,
    },
    ClearTranscript,

    #[serde(skip)]
    AskResponse(Result<String, String>),
}

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    Initialize,
    Configure { config: ClientConfig },

    Connection(ConnectionEvent),
    Settings(SettingsEvent),
    Assistant(AssistantEvent),

    // UI actions
    ClearError,
    ClearSuccess,
}
