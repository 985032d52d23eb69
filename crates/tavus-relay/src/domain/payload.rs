//! Inbound body parsing and outbound payload composition

use serde::Serialize;
use serde_json::{Map, Value};

use super::errors::RelayError;
use super::secrets::Secrets;

/// Fields a caller may set on the upstream request.
///
/// Anything else in the inbound body is dropped, including `persona_id`
/// and `replica_id`.
pub const FORWARDED_FIELDS: [&str; 5] = [
    "conversation_name",
    "conversational_context",
    "callback_url",
    "properties",
    "audio_only",
];

/// Parsed caller body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InboundRequest {
    fields: Map<String, Value>,
}

impl InboundRequest {
    /// Parse the raw request body.
    ///
    /// An empty body, or a literal `null`, is an empty object. Any other
    /// non-empty body must be a JSON object.
    pub fn parse(body: &[u8]) -> Result<Self, RelayError> {
        if body.is_empty() {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| RelayError::InvalidRequestBody(e.to_string()))?;

        match value {
            Value::Object(fields) => Ok(Self { fields }),
            Value::Null => Ok(Self::default()),
            other => Err(RelayError::InvalidRequestBody(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn ignored_keys(&self) -> Vec<&str> {
        self.fields
            .keys()
            .map(String::as_str)
            .filter(|k| !FORWARDED_FIELDS.contains(k))
            .collect()
    }
}

/// Body sent to the Tavus conversations endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OutboundPayload(Map<String, Value>);

impl OutboundPayload {
    /// Merge the server-side identifiers with the allow-listed caller fields.
    ///
    /// Values are copied verbatim; Tavus validates their types.
    pub fn compose(secrets: &Secrets, request: &InboundRequest) -> Self {
        let mut payload = Map::new();
        payload.insert(
            "persona_id".to_string(),
            Value::String(secrets.persona_id().to_string()),
        );
        if let Some(replica_id) = secrets.replica_id() {
            payload.insert(
                "replica_id".to_string(),
                Value::String(replica_id.to_string()),
            );
        }

        for key in FORWARDED_FIELDS {
            if let Some(value) = request.get(key) {
                payload.insert(key.to_string(), value.clone());
            }
        }

        let ignored = request.ignored_keys();
        if !ignored.is_empty() {
            tracing::debug!(?ignored, "Dropping fields outside the allow-list");
        }

        Self(payload)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Caller-supplied fields present in this payload
    pub fn forwarded_fields(&self) -> Vec<&'static str> {
        FORWARDED_FIELDS
            .into_iter()
            .filter(|k| self.0.contains_key(*k))
            .collect()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn secrets(replica: Option<&str>) -> Secrets {
        Secrets::new(
            Some("sk_test".into()),
            Some("p_demo".into()),
            replica.map(String::from),
        )
        .unwrap()
    }

    fn request(value: Value) -> InboundRequest {
        InboundRequest::parse(value.to_string().as_bytes()).unwrap()
    }

    #[test]
    fn test_empty_body_is_empty_object() {
        assert!(InboundRequest::parse(b"").unwrap().is_empty());
        assert!(InboundRequest::parse(b"null").unwrap().is_empty());
    }

    #[test]
    fn test_whitespace_body_rejected() {
        let err = InboundRequest::parse(b"   \n").unwrap_err();
        assert!(matches!(err, RelayError::InvalidRequestBody(_)));
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = InboundRequest::parse(b"{\"conversation_name\":").unwrap_err();
        assert!(matches!(err, RelayError::InvalidRequestBody(_)));
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_non_object_rejected() {
        let err = InboundRequest::parse(b"[1, 2]").unwrap_err();
        match err {
            RelayError::InvalidRequestBody(details) => assert!(details.contains("array")),
            other => panic!("Expected InvalidRequestBody, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_request_yields_persona_only() {
        let payload = OutboundPayload::compose(&secrets(None), &InboundRequest::default());
        assert_eq!(payload.into_value(), json!({ "persona_id": "p_demo" }));
    }

    #[test]
    fn test_replica_added_when_configured() {
        let payload = OutboundPayload::compose(&secrets(Some("r_1")), &InboundRequest::default());
        assert_eq!(
            payload.into_value(),
            json!({ "persona_id": "p_demo", "replica_id": "r_1" })
        );
    }

    #[test]
    fn test_allow_listed_fields_copied_verbatim() {
        let inbound = json!({
            "conversation_name": "Stream demo",
            "conversational_context": "You are helpful",
            "callback_url": "https://example.com/hook",
            "properties": { "max_call_duration": 600, "language": "english" },
            "audio_only": true,
        });

        let payload = OutboundPayload::compose(&secrets(None), &request(inbound.clone()));

        let mut expected = inbound.as_object().unwrap().clone();
        expected.insert("persona_id".into(), json!("p_demo"));
        assert_eq!(payload.as_map(), &expected);
        assert_eq!(payload.forwarded_fields(), FORWARDED_FIELDS.to_vec());
    }

    #[test]
    fn test_caller_cannot_override_identifiers() {
        let inbound = json!({
            "persona_id": "p_attacker",
            "replica_id": "r_attacker",
            "conversation_name": "ok",
        });

        let payload = OutboundPayload::compose(&secrets(Some("r_1")), &request(inbound));

        assert_eq!(payload.get("persona_id"), Some(&json!("p_demo")));
        assert_eq!(payload.get("replica_id"), Some(&json!("r_1")));
        assert_eq!(payload.get("conversation_name"), Some(&json!("ok")));
    }

    #[test]
    fn test_unknown_fields_dropped() {
        let inbound = json!({
            "api_key": "sk_other",
            "custom_greeting": "hi",
            "audio_only": "yes",
        });

        let payload = OutboundPayload::compose(&secrets(None), &request(inbound));

        assert_eq!(
            payload.into_value(),
            json!({ "persona_id": "p_demo", "audio_only": "yes" })
        );
    }

    #[test]
    fn test_null_field_is_forwarded() {
        let payload =
            OutboundPayload::compose(&secrets(None), &request(json!({ "properties": null })));
        assert_eq!(payload.get("properties"), Some(&Value::Null));
    }
}
