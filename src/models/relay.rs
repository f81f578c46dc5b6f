use serde::{ Serialize, Deserialize };
use super::chat::Message;

/// Payload accepted by the relay.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RelayRequest {
    pub messages: Vec<Message>,
}

/// Machine-readable category attached to every relay error body, so clients
/// never have to inspect the human-readable text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    RateLimited,
    PaymentRequired,
    Upstream,
    Config,
    Internal,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelayResponse {
    Success {
        response: String,
    },
    Failure {
        error: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        kind: Option<ErrorKind>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_has_only_response_field() {
        let body = RelayResponse::Success { response: "Hello".into() };
        assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({ "response": "Hello" }));
    }

    #[test]
    fn failure_body_carries_kind() {
        let body = RelayResponse::Failure {
            error: "Rate limits exceeded, please try again later.".into(),
            kind: Some(ErrorKind::RateLimited),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "error": "Rate limits exceeded, please try again later.",
                "kind": "rate_limited"
            })
        );
    }

    #[test]
    fn bare_error_body_decodes_without_kind() {
        let body: RelayResponse = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(body, RelayResponse::Failure { error: "boom".into(), kind: None });
    }
}
