//! Conversation reply translation
//!
//! Turns the raw Tavus response into either the caller-facing success body
//! or a `RelayError`.

use serde::Serialize;
use serde_json::Value;

use super::errors::RelayError;

/// Raw reply from the Tavus API, whatever its status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

impl UpstreamResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Success body returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationCreated {
    pub conversation_url: String,
    pub conversation_id: Value,
}

impl ConversationCreated {
    /// Translate an upstream reply.
    ///
    /// Only status 200 counts as success. A 200 without a usable
    /// `conversation_url` is a contract violation.
    pub fn from_upstream(response: UpstreamResponse) -> Result<Self, RelayError> {
        if response.status != 200 {
            return Err(RelayError::UpstreamRejected {
                status_code: response.status,
                body: response.body,
            });
        }

        let data: Value = match serde_json::from_str(&response.body) {
            Ok(data) => data,
            Err(_) => {
                return Err(RelayError::UpstreamContractViolation {
                    details: Value::String(response.body),
                })
            }
        };

        let conversation_url = data
            .get("conversation_url")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        match conversation_url {
            Some(conversation_url) => Ok(Self {
                conversation_url,
                conversation_id: data.get("conversation_id").cloned().unwrap_or(Value::Null),
            }),
            None => Err(RelayError::UpstreamContractViolation { details: data }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_extracts_url_and_id() {
        let body = json!({
            "conversation_url": "https://x",
            "conversation_id": "c1",
            "status": "active",
            "created_at": "2024-01-01T00:00:00Z",
        });

        let created =
            ConversationCreated::from_upstream(UpstreamResponse::new(200, body.to_string()))
                .unwrap();

        assert_eq!(
            serde_json::to_value(&created).unwrap(),
            json!({ "conversation_url": "https://x", "conversation_id": "c1" })
        );
    }

    #[test]
    fn test_missing_url_is_contract_violation() {
        let err = ConversationCreated::from_upstream(UpstreamResponse::new(
            200,
            r#"{"conversation_id": "c1"}"#,
        ))
        .unwrap_err();

        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_body()["details"], json!({ "conversation_id": "c1" }));
    }

    #[test]
    fn test_empty_url_is_contract_violation() {
        let err = ConversationCreated::from_upstream(UpstreamResponse::new(
            200,
            r#"{"conversation_url": "", "conversation_id": "c1"}"#,
        ))
        .unwrap_err();

        assert!(matches!(err, RelayError::UpstreamContractViolation { .. }));
    }

    #[test]
    fn test_non_json_success_body_is_contract_violation() {
        let err =
            ConversationCreated::from_upstream(UpstreamResponse::new(200, "<html>oops</html>"))
                .unwrap_err();

        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_body()["details"], json!("<html>oops</html>"));
    }

    #[test]
    fn test_non_200_is_rejected_with_raw_body() {
        let err = ConversationCreated::from_upstream(UpstreamResponse::new(
            403,
            r#"{"message": "Invalid access token"}"#,
        ))
        .unwrap_err();

        assert_eq!(err.status_code(), 403);
        let body = err.to_body();
        assert_eq!(body["status_code"], json!(403));
        assert_eq!(body["details"], json!(r#"{"message": "Invalid access token"}"#));
    }

    #[test]
    fn test_created_status_is_not_success() {
        let err = ConversationCreated::from_upstream(UpstreamResponse::new(
            201,
            r#"{"conversation_url": "https://x", "conversation_id": "c1"}"#,
        ))
        .unwrap_err();

        assert_eq!(err.status_code(), 201);
    }

    #[test]
    fn test_missing_id_is_null() {
        let created = ConversationCreated::from_upstream(UpstreamResponse::new(
            200,
            r#"{"conversation_url": "https://x"}"#,
        ))
        .unwrap();

        assert_eq!(created.conversation_id, Value::Null);
    }
}
