//! Helper functions for creating specific error types

use super::types::GatewayError;

impl GatewayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn method_not_allowed<S: Into<String>>(method: S) -> Self {
        Self::MethodNotAllowed(method.into())
    }

    pub fn unknown_action<S: Into<String>>(action: S) -> Self {
        Self::UnknownAction(action.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn missing_content<S: Into<String>>(message: S) -> Self {
        Self::MissingContent(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the failure was caused by the caller rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MethodNotAllowed(_)
                | Self::PayloadTooLarge(_)
                | Self::UnknownAction(_)
                | Self::Validation(_)
        )
    }
}
