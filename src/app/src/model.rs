mod connection;
mod settings;

pub use connection::ConnectionManager;
pub use settings::SettingsReconciler;

use crate::types::*;

/// Trait for types that can handle error messages
///
/// This allows HTTP helper functions to work with Model without directly depending on it.
pub trait ModelErrorHandler {
    fn set_error(&mut self, error: String);
}

/// Application Model - the complete state
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Model {
    pub config: ClientConfig,

    // Device state
    pub connection: ConnectionManager,
    pub settings: SettingsReconciler,
    pub is_saving: bool,

    // Assistant state
    pub transcript: Vec<ChatMessage>,
    pub assistant_pending: bool,
    pub(crate) next_message_id: u64,

    // UI state
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl Model {
    /// Set an error message
    pub fn set_error(&mut self, error: String) {
        self.success_message = None;
        self.error_message = Some(error);
    }

    /// Set an error message and return a render command
    pub fn set_error_and_render(
        &mut self,
        error: String,
    ) -> crux_core::Command<crate::Effect, crate::events::Event> {
        self.set_error(error);
        crux_core::render::render()
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.error_message = None;
        self.success_message = Some(message.into());
    }

    /// Append a message to the assistant transcript
    pub fn push_message(&mut self, role: ChatRole, text: impl Into<String>) {
        let id = self.next_message_id;
        self.next_message_id += 1;
        self.transcript.push(ChatMessage {
            id,
            role,
            text: text.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        });
    }
}

impl ModelErrorHandler for Model {
    fn set_error(&mut self, error: String) {
        Model::set_error(self, error)
    }
}
