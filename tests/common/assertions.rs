//! Custom test assertions

use serde_json::Value;

/// Assertions for response envelopes
pub trait EnvelopeAssertions {
    /// Exactly `{result}`, returning the result
    fn assert_result(&self) -> &Value;

    /// Exactly `{error}`, returning the message
    fn assert_error(&self) -> &str;
}

impl EnvelopeAssertions for Value {
    fn assert_result(&self) -> &Value {
        let object = self.as_object().expect("envelope must be an object");
        assert_eq!(object.len(), 1, "envelope must have one field: {}", self);
        object.get("result").expect("expected a result envelope")
    }

    fn assert_error(&self) -> &str {
        let object = self.as_object().expect("envelope must be an object");
        assert_eq!(object.len(), 1, "envelope must have one field: {}", self);
        object
            .get("error")
            .and_then(Value::as_str)
            .expect("expected an error envelope")
    }
}

/// Assert a string is a base64 data URL with the given MIME type
#[macro_export]
macro_rules! assert_data_url {
    ($value:expr, $mime:expr) => {{
        let value: &str = $value;
        let prefix = format!("data:{};base64,", $mime);
        assert!(
            value.starts_with(&prefix),
            "expected data URL with prefix {:?}, got {:?}",
            prefix,
            value
        );
    }};
}
