mod assistant;
mod connection;
mod settings;
mod ui;

use crux_core::{render::render, Command};
use serde_valid::Validate;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

pub use settings::{SAVE_FAILURE_MESSAGE, SAVE_SUCCESS_MESSAGE};

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Initialize => {
            log::info!("Core initialized");
            render()
        }

        Event::Configure { config } => match config.validate() {
            Ok(()) => {
                log::debug!("Applying client configuration");
                model.config = config;
                render()
            }
            Err(e) => {
                log::warn!("Rejected client configuration: {e}");
                model.set_error_and_render(format!("Invalid configuration: {e}"))
            }
        },

        Event::Connection(event) => connection::handle(event, model),
        Event::Settings(event) => settings::handle(event, model),
        Event::Assistant(event) => assistant::handle(event, model),

        Event::ClearError | Event::ClearSuccess => ui::handle(event, model),
    }
}
