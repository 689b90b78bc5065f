//! Compatibility rendering of call results as a single JSON value.

use crate::error::OpenDataHubError;
use serde_json::{json, Value};

impl OpenDataHubError {
    /// The error as the JSON object earlier bindings of this API returned:
    /// `{"error": "<message>", "success": false}`.
    pub fn to_json(&self) -> Value {
        json!({
            "error": self.to_string(),
            "success": false,
        })
    }
}

/// Collapses a call result into one JSON value.
///
/// A success stays the server's body, untouched. A failure becomes
/// `{"error": "<message>", "success": false}`. This is the shape to use when
/// results are forwarded to consumers that expect the older single-value
/// contract; otherwise prefer matching on the `Result` and its
/// [`crate::ErrorKind`].
///
/// # Examples
///
/// ```no_run
/// use opendatahub::{OpenDataHub, OpenDataHubError, ResponseExt};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), OpenDataHubError> {
/// let client = OpenDataHub::new()?;
/// let value = client.categories().call().await.into_json();
/// if value.get("success") == Some(&serde_json::Value::Bool(false)) {
///     eprintln!("request failed: {}", value["error"]);
/// }
/// # Ok(())
/// # }
/// ```
pub trait ResponseExt {
    fn into_json(self) -> Value;
}

impl ResponseExt for Result<Value, OpenDataHubError> {
    fn into_json(self) -> Value {
        match self {
            Ok(value) => value,
            Err(err) => err.to_json(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn success_is_untouched() {
        let body = json!({"offset": 0, "data": [{"scode": "A"}], "limit": 200});
        let result: Result<Value, OpenDataHubError> = Ok(body.clone());
        assert_eq!(result.into_json(), body);
    }

    #[test]
    fn status_error_has_compatible_shape() {
        let result: Result<Value, OpenDataHubError> = Err(OpenDataHubError::HttpStatus {
            url: "https://mobility.api.opendatahub.com/v2/x".to_string(),
            status: StatusCode::NOT_FOUND,
        });
        assert_eq!(
            result.into_json(),
            json!({"error": "HTTP Error: 404", "success": false})
        );
    }
}
