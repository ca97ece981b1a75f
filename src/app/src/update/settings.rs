use crux_core::{render::render, Command};

use crate::events::{Event, SettingsEvent};
use crate::model::Model;
use crate::types::{DeviceSettings, SettingsField};
use crate::{device_command, Effect};

pub const SAVE_SUCCESS_MESSAGE: &str = "Settings saved to the device.";
pub const SAVE_FAILURE_MESSAGE: &str = "Could not save settings. Check the Wi-Fi connection.";

/// Handle device settings events
pub fn handle(event: SettingsEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        SettingsEvent::UpdateField { field, value } => update_field(field, value, model),
        SettingsEvent::Save => save(model),
        SettingsEvent::SaveResponse { settings, result } => {
            handle_save_response(settings, result, model)
        }
    }
}

fn update_field(field: SettingsField, value: u32, model: &mut Model) -> Command<Effect, Event> {
    let bounds = field.bounds();
    if value < bounds.min || value > bounds.max {
        log::debug!("{field:?} set to {value}, outside slider range {bounds:?}");
    }

    if model.settings.update_field(field, value) {
        render()
    } else {
        Command::done()
    }
}

fn save(model: &mut Model) -> Command<Effect, Event> {
    if model.is_saving {
        log::debug!("Save skipped: previous save still in flight");
        return Command::done();
    }

    let settings = model.settings.edited().clone();
    let path = settings.config_path();

    let url = match model.connection.url_for(&path) {
        Ok(url) => url,
        Err(e) => {
            log::warn!("Save skipped: {e}");
            return Command::done();
        }
    };

    log::debug!("Saving settings {settings:?}");
    model.is_saving = true;

    Command::all([
        render(),
        device_command!(url, "/config", |result| {
            Event::Settings(SettingsEvent::SaveResponse { settings, result })
        }),
    ])
}

fn handle_save_response(
    settings: DeviceSettings,
    result: Result<(), String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    model.is_saving = false;

    match result {
        Ok(()) => {
            log::info!("Settings saved: {settings:?}");
            model.connection.confirm_settings(settings.clone());
            model.settings.promote(settings);
            model.set_success(SAVE_SUCCESS_MESSAGE);
        }
        Err(e) => {
            log::error!("Saving settings failed: {e}");
            model.connection.fail(e);
            model.set_error(SAVE_FAILURE_MESSAGE.to_string());
        }
    }

    render()
}
