//! Upstream response fixtures
//!
//! Bodies are built as JSON so the same fixture can be served by a wiremock
//! upstream or decoded for an in-process backend.

use groovegen::core::providers::gemini::types::GenerateContentResponse;
use serde_json::{Value, json};

/// 1x1 transparent PNG
pub const PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

pub fn image_body(mime_type: &str, data: &str) -> Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{"inlineData": {"mimeType": mime_type, "data": data}}]
            },
            "finishReason": "STOP"
        }]
    })
}

pub fn text_body(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

pub fn grounded_body(text: &str, urls: &[&str]) -> Value {
    let chunks: Vec<Value> = urls
        .iter()
        .map(|uri| json!({"web": {"uri": uri, "title": uri}}))
        .collect();
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "groundingMetadata": {
                "webSearchQueries": ["query"],
                "groundingChunks": chunks
            }
        }]
    })
}

pub fn empty_body() -> Value {
    json!({"candidates": [{"content": {"role": "model", "parts": []}}]})
}

pub fn response(body: Value) -> GenerateContentResponse {
    serde_json::from_value(body).expect("fixture must decode")
}

/// A well-formed payload for every action
pub fn envelopes() -> Vec<(&'static str, Value)> {
    vec![
        (
            "generateDanceVideo",
            json!({"imageBase64": PNG_BASE64, "imageMimeType": "image/png", "prompt": "the floss"}),
        ),
        ("generateImage", json!({"prompt": "disco ball", "size": "2K"})),
        (
            "editImage",
            json!({"imageBase64": PNG_BASE64, "mimeType": "image/png", "prompt": "add a hat"}),
        ),
        (
            "analyzeContent",
            json!({"fileBase64": PNG_BASE64, "mimeType": "image/png", "prompt": "describe", "isVideo": false}),
        ),
        (
            "chatWithSearch",
            json!({"history": [{"role": "model", "text": "hi"}], "newMessage": "find X"}),
        ),
        ("generateFastText", json!({"prompt": "one word"})),
    ]
}
