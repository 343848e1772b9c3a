//! Upstream response normalization

use crate::core::providers::gemini::types::{GenerateContentResponse, InlineData};

/// `data:<mime>;base64,<data>`
pub fn to_data_url(inline: &InlineData) -> String {
    format!("data:{};base64,{}", inline.mime_type, inline.data)
}

/// Data URL of the first inline part of the first candidate
pub fn first_inline_image(response: &GenerateContentResponse) -> Option<String> {
    response
        .parts()
        .iter()
        .find_map(|part| part.inline_data.as_ref())
        .map(to_data_url)
}

/// Upstream text, or `fallback` when none was produced
pub fn text_or(response: &GenerateContentResponse, fallback: &str) -> String {
    response.text().unwrap_or_else(|| fallback.to_string())
}

/// Web source URLs from the first candidate's grounding metadata
///
/// Order is preserved and duplicates are kept. Chunks without a web source
/// or with an empty URI are skipped.
pub fn grounding_urls(response: &GenerateContentResponse) -> Vec<String> {
    response
        .grounding_metadata()
        .map(|metadata| {
            metadata
                .grounding_chunks
                .iter()
                .filter_map(|chunk| chunk.web.as_ref()?.uri.clone())
                .filter(|uri| !uri.is_empty())
                .collect()
        })
        .unwrap_or_default()
}
