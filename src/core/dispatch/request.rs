//! Typed action requests

use serde::Serialize;
use serde_json::Value;

use super::action::Action;
use super::handlers::ActionHandler;
use super::payload::{
    AnalyzeContentPayload, ChatWithSearchPayload, EditImagePayload, FastTextPayload,
    GenerateDancePayload, GenerateImagePayload,
};
use crate::utils::error::{GatewayError, Result};

/// An action together with its decoded payload
///
/// Serializes to the `{action, payload}` wire envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "payload", rename_all = "camelCase")]
pub enum ActionRequest {
    GenerateDanceVideo(GenerateDancePayload),
    GenerateImage(GenerateImagePayload),
    EditImage(EditImagePayload),
    AnalyzeContent(AnalyzeContentPayload),
    ChatWithSearch(ChatWithSearchPayload),
    GenerateFastText(FastTextPayload),
}

impl ActionRequest {
    /// Decode a raw payload against the schema of `action`
    pub fn decode(action: Action, payload: Value) -> Result<Self> {
        Ok(match action {
            Action::GenerateDanceVideo => Self::GenerateDanceVideo(decode_payload(payload)?),
            Action::GenerateImage => Self::GenerateImage(decode_payload(payload)?),
            Action::EditImage => Self::EditImage(decode_payload(payload)?),
            Action::AnalyzeContent => Self::AnalyzeContent(decode_payload(payload)?),
            Action::ChatWithSearch => Self::ChatWithSearch(decode_payload(payload)?),
            Action::GenerateFastText => Self::GenerateFastText(decode_payload(payload)?),
        })
    }

    pub fn action(&self) -> Action {
        match self {
            Self::GenerateDanceVideo(_) => Action::GenerateDanceVideo,
            Self::GenerateImage(_) => Action::GenerateImage,
            Self::EditImage(_) => Action::EditImage,
            Self::AnalyzeContent(_) => Action::AnalyzeContent,
            Self::ChatWithSearch(_) => Action::ChatWithSearch,
            Self::GenerateFastText(_) => Action::GenerateFastText,
        }
    }
}

fn decode_payload<P: ActionHandler>(payload: Value) -> Result<P> {
    serde_json::from_value(payload).map_err(|e| {
        GatewayError::validation(format!("Invalid payload for {}: {}", P::ACTION, e))
    })
}

macro_rules! impl_from_payload {
    ($($payload:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$payload> for ActionRequest {
                fn from(payload: $payload) -> Self {
                    Self::$variant(payload)
                }
            }
        )+
    };
}

impl_from_payload! {
    GenerateDancePayload => GenerateDanceVideo,
    GenerateImagePayload => GenerateImage,
    EditImagePayload => EditImage,
    AnalyzeContentPayload => AnalyzeContent,
    ChatWithSearchPayload => ChatWithSearch,
    FastTextPayload => GenerateFastText,
}
