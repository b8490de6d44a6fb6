//! JSON encoding for everything that crosses the player and observer
//! boundary.
//!
//! Decisions and events carry a `"type"` discriminant naming their
//! variant. The discriminant sets below are part of the wire format and
//! must stay stable.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::core::decision::Decision;
use crate::events::Event;

/// Discriminants of every `Decision` variant.
pub const DECISION_TAGS: [&str; 6] = ["buy", "play_card", "discard", "gain", "trash", "end_phase"];

/// Discriminants of every `Event` variant.
pub const EVENT_TAGS: [&str; 6] = [
    "play_card",
    "gain_card",
    "discard_card",
    "trash_card",
    "end_turn",
    "game_event",
];

#[derive(Debug, Error)]
pub enum WireError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing \"type\" discriminant")]
    MissingTag,
}

pub fn encode<T: Serialize>(value: &T) -> Result<String, WireError> {
    Ok(serde_json::to_string(value)?)
}

pub fn decode<T: DeserializeOwned>(json: &str) -> Result<T, WireError> {
    Ok(serde_json::from_str(json)?)
}

pub fn encode_decision(decision: &Decision) -> Result<String, WireError> {
    encode(decision)
}

pub fn decode_decision(json: &str) -> Result<Decision, WireError> {
    decode(json)
}

pub fn encode_event(event: &Event) -> Result<String, WireError> {
    encode(event)
}

pub fn decode_event(json: &str) -> Result<Event, WireError> {
    decode(json)
}

/// Read the `"type"` discriminant of an encoded decision or event.
pub fn tag_of(json: &str) -> Result<String, WireError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    value
        .get("type")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
        .ok_or(WireError::MissingTag)
}
