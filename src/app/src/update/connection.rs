use chrono::Utc;
use crux_core::{render::render, Command};

use crate::events::{ConnectionEvent, Event};
use crate::http_helpers::{parse_status_response, power_path};
use crate::model::Model;
use crate::types::DeviceSnapshot;
use crate::{device_command, DelayCmd, DeviceCmd, Effect};

/// Handle device connection events
pub fn handle(event: ConnectionEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        ConnectionEvent::SetAddress { address } => {
            if model.connection.set_address(address) {
                render()
            } else {
                Command::done()
            }
        }
        ConnectionEvent::Connect | ConnectionEvent::Refresh => fetch_status(model),
        ConnectionEvent::StatusResponse(result) => handle_status_response(result, model),
        ConnectionEvent::SetPower { on } => set_power(on, model),
        ConnectionEvent::PowerResponse(result) => handle_power_response(result, model),
    }
}

fn fetch_status(model: &mut Model) -> Command<Effect, Event> {
    let url = match model.connection.begin_fetch() {
        Ok(url) => url,
        Err(e) => {
            log::warn!("Status fetch skipped: {e}");
            return Command::done();
        }
    };

    log::debug!("Fetching device status from {url}");

    Command::all([
        render(),
        DeviceCmd::get(url)
            .timeout_ms(model.config.status_timeout_ms)
            .build()
            .then_send(|response| {
                let result = parse_status_response(response).map_err(|e| e.to_string());
                Event::Connection(ConnectionEvent::StatusResponse(result))
            }),
    ])
}

fn handle_status_response(
    result: Result<DeviceSnapshot, String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    match result {
        Ok(snapshot) => {
            log::info!("Device status received: {snapshot:?}");
            // Unsaved edits are discarded, the fetched settings become the new baseline
            model.settings.reset_to(snapshot.settings.clone());
            model.connection.apply_snapshot(snapshot, Utc::now());
        }
        Err(e) => {
            log::warn!("Status fetch failed: {e}");
            model.connection.fail(e);
        }
    }

    render()
}

fn set_power(on: bool, model: &mut Model) -> Command<Effect, Event> {
    let Some(url) = model.connection.set_power(on) else {
        log::debug!("Power set to {on} locally, device not connected");
        return render();
    };

    log::debug!("Sending power command {url}");

    Command::all([
        render(),
        device_command!(url, power_path(on), |result| {
            Event::Connection(ConnectionEvent::PowerResponse(result))
        }),
    ])
}

fn handle_power_response(result: Result<(), String>, model: &mut Model) -> Command<Effect, Event> {
    match result {
        Ok(()) => {
            // Confirm the optimistic flag once the relay had time to switch
            DelayCmd::millis(model.config.refresh_delay_ms)
                .then_send(|_| Event::Connection(ConnectionEvent::Refresh))
        }
        Err(e) => {
            // The optimistic power flag is left as requested
            log::error!("Power command failed: {e}");
            model.connection.fail(e);
            render()
        }
    }
}
