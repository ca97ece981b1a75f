use crux_core::{render::render, Command};

use crate::events::{AssistantEvent, Event};
use crate::http_helpers::process_json_response;
use crate::model::Model;
use crate::types::{
    assistant_url, ChatRole, GenerateContentRequest, GenerateContentResponse, EMPTY_REPLY,
    FAILED_REPLY, NO_API_KEY_REPLY,
};
use crate::{update_field, Effect, HttpCmd};

const ACTION: &str = "Assistant request";

/// Handle assistant chat events
pub fn handle(event: AssistantEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        AssistantEvent::Ask { query } => ask(query, model),
        AssistantEvent::AskResponse(result) => handle_ask_response(result, model),
        AssistantEvent::ClearTranscript => update_field!(model.transcript, Vec::new()),
    }
}

fn ask(query: String, model: &mut Model) -> Command<Effect, Event> {
    let query = query.trim();
    if query.is_empty() {
        return Command::done();
    }

    model.push_message(ChatRole::User, query);

    let Some(api_key) = model.config.api_key().map(str::to_string) else {
        log::warn!("Assistant query without API key");
        model.push_message(ChatRole::Model, NO_API_KEY_REPLY);
        return render();
    };

    let url = assistant_url(&model.config.assistant_model);
    let request = GenerateContentRequest::new(query);

    match HttpCmd::post(url)
        .header("Content-Type", "application/json")
        .header("x-goog-api-key", api_key)
        .body_json(&request)
    {
        Ok(builder) => {
            model.assistant_pending = true;
            Command::all([
                render(),
                builder.build().then_send(|result| {
                    let reply = process_json_response::<GenerateContentResponse>(ACTION, result)
                        .map(|response| response.text());
                    Event::Assistant(AssistantEvent::AskResponse(reply))
                }),
            ])
        }
        Err(e) => {
            model.push_message(ChatRole::Model, FAILED_REPLY);
            crate::handle_request_error(model, ACTION, e)
        }
    }
}

fn handle_ask_response(result: Result<String, String>, model: &mut Model) -> Command<Effect, Event> {
    model.assistant_pending = false;

    let reply = match result {
        Ok(text) if text.trim().is_empty() => EMPTY_REPLY.to_string(),
        Ok(text) => text,
        Err(e) => {
            log::error!("{e}");
            FAILED_REPLY.to_string()
        }
    };
    model.push_message(ChatRole::Model, reply);

    render()
}
