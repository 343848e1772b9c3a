//! Per-action handlers
//!
//! Each payload type knows its action, the model family it runs on, the
//! upstream request it turns into and how the upstream answer is reduced to
//! an [`ActionOutput`].

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::action::Action;
use super::envelope::{ActionOutput, GroundedAnswer};
use super::normalize;
use super::payload::{
    AnalyzeContentPayload, ChatRole, ChatWithSearchPayload, EditImagePayload, FastTextPayload,
    GenerateDancePayload, GenerateImagePayload,
};
use crate::core::providers::gemini::GeminiModels;
use crate::core::providers::gemini::types::{
    Content, GenerateContentRequest, GenerateContentResponse, Part, Tool,
};
use crate::utils::error::{GatewayError, Result};

/// Handler owned by one action's payload type
pub trait ActionHandler: Serialize + DeserializeOwned + Send + Sync {
    /// Action this payload belongs to
    const ACTION: Action;

    /// Upstream model serving this action
    fn model(models: &GeminiModels) -> &str;

    /// Upstream `generateContent` body
    fn upstream_request(&self) -> GenerateContentRequest;

    /// Reduce the upstream answer to the action's result
    fn normalize(response: &GenerateContentResponse) -> Result<ActionOutput>;
}

/// Prompt wrapped around a dance description
pub fn dance_prompt(description: &str) -> String {
    format!(
        "Generate a cinematic full-body shot of this person performing this dance move: {}. Keep the character consistent.",
        description
    )
}

fn image_or(response: &GenerateContentResponse, failure: &str) -> Result<ActionOutput> {
    normalize::first_inline_image(response)
        .map(ActionOutput::Image)
        .ok_or_else(|| GatewayError::missing_content(failure))
}

impl ActionHandler for GenerateDancePayload {
    const ACTION: Action = Action::GenerateDanceVideo;

    fn model(models: &GeminiModels) -> &str {
        &models.image
    }

    fn upstream_request(&self) -> GenerateContentRequest {
        GenerateContentRequest::from_parts(vec![
            Part::inline(&self.image_mime_type, &self.image_base64),
            Part::text(dance_prompt(&self.prompt)),
        ])
    }

    fn normalize(response: &GenerateContentResponse) -> Result<ActionOutput> {
        image_or(response, "Video/Image generation failed.")
    }
}

impl ActionHandler for GenerateImagePayload {
    const ACTION: Action = Action::GenerateImage;

    fn model(models: &GeminiModels) -> &str {
        &models.image
    }

    fn upstream_request(&self) -> GenerateContentRequest {
        GenerateContentRequest::from_parts(vec![Part::text(&self.prompt)])
    }

    fn normalize(response: &GenerateContentResponse) -> Result<ActionOutput> {
        image_or(response, "No image generated.")
    }
}

impl ActionHandler for EditImagePayload {
    const ACTION: Action = Action::EditImage;

    fn model(models: &GeminiModels) -> &str {
        &models.image
    }

    fn upstream_request(&self) -> GenerateContentRequest {
        GenerateContentRequest::from_parts(vec![
            Part::inline(&self.mime_type, &self.image_base64),
            Part::text(&self.prompt),
        ])
    }

    fn normalize(response: &GenerateContentResponse) -> Result<ActionOutput> {
        if let Some(image) = normalize::first_inline_image(response) {
            return Ok(ActionOutput::Image(image));
        }
        // The model answered in prose instead of drawing.
        match response.text() {
            Some(text) => Err(GatewayError::missing_content(format!(
                "Model returned text instead of image: {}",
                text
            ))),
            None => Err(GatewayError::missing_content("Image editing failed.")),
        }
    }
}

impl ActionHandler for AnalyzeContentPayload {
    const ACTION: Action = Action::AnalyzeContent;

    fn model(models: &GeminiModels) -> &str {
        &models.analysis
    }

    fn upstream_request(&self) -> GenerateContentRequest {
        GenerateContentRequest::from_parts(vec![
            Part::inline(&self.mime_type, &self.file_base64),
            Part::text(&self.prompt),
        ])
    }

    fn normalize(response: &GenerateContentResponse) -> Result<ActionOutput> {
        Ok(ActionOutput::Text(normalize::text_or(
            response,
            "No analysis returned.",
        )))
    }
}

impl ActionHandler for ChatWithSearchPayload {
    const ACTION: Action = Action::ChatWithSearch;

    fn model(models: &GeminiModels) -> &str {
        &models.chat
    }

    fn upstream_request(&self) -> GenerateContentRequest {
        let mut contents: Vec<Content> = self
            .history
            .iter()
            .map(|turn| Content::new(Some(turn.role.as_str()), vec![Part::text(&turn.text)]))
            .collect();
        contents.push(Content::new(
            Some(ChatRole::User.as_str()),
            vec![Part::text(&self.new_message)],
        ));

        GenerateContentRequest {
            contents,
            tools: Vec::new(),
        }
        .with_tool(Tool::google_search())
    }

    fn normalize(response: &GenerateContentResponse) -> Result<ActionOutput> {
        Ok(ActionOutput::Grounded(GroundedAnswer {
            text: normalize::text_or(response, "I couldn't generate a response."),
            grounding_urls: normalize::grounding_urls(response),
        }))
    }
}

impl ActionHandler for FastTextPayload {
    const ACTION: Action = Action::GenerateFastText;

    fn model(models: &GeminiModels) -> &str {
        &models.fast_text
    }

    fn upstream_request(&self) -> GenerateContentRequest {
        GenerateContentRequest::from_parts(vec![Part::text(&self.prompt)])
    }

    fn normalize(response: &GenerateContentResponse) -> Result<ActionOutput> {
        Ok(ActionOutput::Text(normalize::text_or(response, "")))
    }
}
