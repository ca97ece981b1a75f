pub mod commands;
pub mod events;
pub mod http_helpers;
pub mod macros;
pub mod model;
pub mod types;
pub mod update;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod wasm;


use crux_core::Command;

// Re-export core types
pub use crate::{
    commands::{
        delay::{DelayRequest, DelayResponse},
        device::{DeviceRequest, DeviceResponse},
    },
    events::{AssistantEvent, ConnectionEvent, Event, SettingsEvent},
    http_helpers::{
        check_command_response, device_url, extract_error_message, handle_request_error,
        is_response_success, map_http_error, parse_json_response, parse_status_response,
        process_json_response,
    },
    model::Model,
    types::*,
    view::ViewModel,
};
pub use crux_http::Result as HttpResult;

#[crux_macros::effect(typegen)]
pub enum Effect {
    Render(crux_core::render::RenderOperation),
    Http(crux_http::protocol::HttpRequest),
    Device(DeviceRequest),
    Delay(DelayRequest),
}

pub type DeviceCmd = crate::commands::device::Device<Effect, Event>;
pub type DelayCmd = crate::commands::delay::Delay<Effect, Event>;
pub type HttpCmd = crux_http::command::Http<Effect, Event>;

/// The Core application
#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Effect = Effect;

    fn update(&self, event: Self::Event, model: &mut Self::Model) -> Command<Effect, Event> {
        update::update(event, model)
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        ViewModel::from(model)
    }
}
