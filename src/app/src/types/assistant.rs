use serde::{Deserialize, Serialize};

pub const ASSISTANT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

pub const NO_API_KEY_REPLY: &str =
    "Error: API key not configured. Please check your environment.";
pub const EMPTY_REPLY: &str = "I could not generate a response. Please try again.";
pub const FAILED_REPLY: &str =
    "There was an error contacting the assistant. Check your connection or API key.";

/// System instruction of every assistant request
pub const SYSTEM_INSTRUCTION: &str = "\
You are an expert assistant in electronics and IoT, specialised in a smart clap-activated \
light switch built on an ESP32.

Project context:
- Microcontroller: ESP32 running a small web server on the local network.
- Sensor: KY-037 sound sensor (digital output) detecting two claps in a row.
- Actuator: 5V relay module switching a mains (220V) light bulb.
- Firmware: Arduino C++. Two claps between the configured minimum and maximum interval toggle \
the light; an optional auto-off timer switches it off after N minutes.
- Web API: GET /status returns {\"state\":bool,\"min\":int,\"max\":int,\"timer\":int}, \
GET /config?min=&max=&timer= stores the settings, GET /on and GET /off switch the relay.

Answer clearly and concisely. When the question involves the mains side of the relay, \
always remind the user to disconnect power before touching the circuit.";

/// Prefix of every user query sent to the assistant
pub const QUERY_CONTEXT: &str = "\
Project context:
- Device: smart switch in a light socket.
- MCU: ESP32 (WiFi).
- Input: KY-037 sound sensor (detects a double clap pattern).
- Output: 5V relay driving a 220V bulb.
- Power supply: a dismantled 5V phone charger connected to 220V mains.
- Software: Arduino C++.

User question: ";

/// Query text as sent to the assistant, prefixed with [`QUERY_CONTEXT`]
pub fn contextual_query(query: &str) -> String {
    format!("{QUERY_CONTEXT}{query}")
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ChatRole {
    User,
    Model,
}

/// Single entry of the assistant transcript
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: u64,
    pub role: ChatRole,
    pub text: String,
    /// Unix time in milliseconds
    pub timestamp: i64,
}

/// Endpoint of the `generateContent` call for `model`
pub fn assistant_url(model: &str) -> String {
    format!("{ASSISTANT_BASE_URL}/{model}:generateContent")
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentPart {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<ContentPart>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    pub thinking_budget: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub thinking_config: ThinkingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    pub fn new(query: &str) -> Self {
        Self {
            system_instruction: Content {
                role: None,
                parts: vec![ContentPart {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![ContentPart {
                    text: contextual_query(query),
                }],
            }],
            // Chat replies should be fast, so no thinking tokens
            generation_config: GenerationConfig {
                thinking_config: ThinkingConfig { thinking_budget: 0 },
            },
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Candidate {
    pub content: Option<Content>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}
