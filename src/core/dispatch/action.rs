//! The closed set of proxy actions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::GatewayError;

/// Proxy action, identified on the wire by its camelCase name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    GenerateDanceVideo,
    GenerateImage,
    EditImage,
    AnalyzeContent,
    ChatWithSearch,
    GenerateFastText,
}

impl Action {
    /// Every action, in wire-table order
    pub const ALL: [Action; 6] = [
        Action::GenerateDanceVideo,
        Action::GenerateImage,
        Action::EditImage,
        Action::AnalyzeContent,
        Action::ChatWithSearch,
        Action::GenerateFastText,
    ];

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::GenerateDanceVideo => "generateDanceVideo",
            Action::GenerateImage => "generateImage",
            Action::EditImage => "editImage",
            Action::AnalyzeContent => "analyzeContent",
            Action::ChatWithSearch => "chatWithSearch",
            Action::GenerateFastText => "generateFastText",
        }
    }

    /// Whether the action's result is an image data URL
    pub fn produces_image(&self) -> bool {
        matches!(
            self,
            Action::GenerateDanceVideo | Action::GenerateImage | Action::EditImage
        )
    }
}

impl FromStr for Action {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| GatewayError::unknown_action(s))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
