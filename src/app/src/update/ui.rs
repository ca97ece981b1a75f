use crux_core::{render::render, Command};

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Dismiss the error or success notification
pub fn handle(event: Event, model: &mut Model) -> Command<Effect, Event> {
    let message = match event {
        Event::ClearError => &mut model.error_message,
        Event::ClearSuccess => &mut model.success_message,
        _ => unreachable!("Non-notification event passed to UI handler"),
    };

    match message.take() {
        Some(dismissed) => {
            log::debug!("Notification dismissed: {dismissed}");
            render()
        }
        None => Command::done(),
    }
}
