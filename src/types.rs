//! API types matching the investor portal backend

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Signup request
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Investor profile, returned by /signup and /profile
#[derive(Debug, Clone, Deserialize)]
pub struct InvestorProfile {
    pub email: String,
    pub name: String,
}

/// Token endpoint response
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Display name, when the server includes one
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Structured error body from the API ({"detail": "..."})
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub detail: String,
}

/// One portfolio holding
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PortfolioItem {
    pub asset: String,
    pub quantity: f64,
    pub value: f64,
}

/// Kind of financial request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    Deposit,
    Withdrawal,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::Deposit => "deposit",
            RequestKind::Withdrawal => "withdrawal",
        }
    }
}

/// Server-owned request status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Unknown => "unknown",
        }
    }
}

/// Deposit/withdrawal record as returned by GET /requests
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FinancialRequest {
    #[serde(rename = "type")]
    pub kind: RequestKind,
    pub amount: f64,
    pub status: RequestStatus,
    /// The backend emits naive ISO-8601 UTC timestamps (no offset)
    pub timestamp: NaiveDateTime,
}

/// Body for POST /requests
#[derive(Debug, Clone, Serialize)]
pub struct NewRequest {
    #[serde(rename = "type")]
    pub kind: RequestKind,
    pub amount: f64,
}

/// Acknowledgement for a created request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAck {
    #[serde(default)]
    pub message: String,
}

/// Body for POST /ai
#[derive(Debug, Clone, Serialize)]
pub struct AiPrompt {
    pub prompt: String,
}

/// Response from POST /ai
#[derive(Debug, Clone, Deserialize)]
pub struct AiReply {
    pub response: ResponseText,
}

/// The AI response is either a single string or a sequence of strings
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ResponseText {
    Single(String),
    Many(Vec<String>),
}

impl ResponseText {
    /// Flatten to display text; sequences are joined with newlines
    pub fn into_text(self) -> String {
        match self {
            ResponseText::Single(s) => s,
            ResponseText::Many(parts) => parts.join("\n"),
        }
    }
}

/// Response from GET /ai-insights
#[derive(Debug, Clone, Deserialize)]
pub struct Insights {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_with_name() {
        let resp: TokenResponse =
            serde_json::from_str(r#"{"access_token":"T1","token_type":"bearer","name":"Alice"}"#)
                .unwrap();
        assert_eq!(resp.access_token, "T1");
        assert_eq!(resp.name.as_deref(), Some("Alice"));
    }

    #[test]
    fn token_response_without_name() {
        let resp: TokenResponse =
            serde_json::from_str(r#"{"access_token":"T1","token_type":"bearer"}"#).unwrap();
        assert_eq!(resp.access_token, "T1");
        assert!(resp.name.is_none());
    }

    #[test]
    fn financial_request_parses_naive_timestamp() {
        let req: FinancialRequest = serde_json::from_str(
            r#"{"type":"deposit","amount":50.0,"status":"pending","timestamp":"2025-01-15T10:30:00.123456"}"#,
        )
        .unwrap();
        assert_eq!(req.kind, RequestKind::Deposit);
        assert_eq!(req.amount, 50.0);
        assert_eq!(req.status, RequestStatus::Pending);
        assert_eq!(req.timestamp.format("%Y-%m-%d").to_string(), "2025-01-15");
    }

    #[test]
    fn unknown_status_maps_to_unknown() {
        let req: FinancialRequest = serde_json::from_str(
            r#"{"type":"withdrawal","amount":10,"status":"on-hold","timestamp":"2025-01-15T10:30:00"}"#,
        )
        .unwrap();
        assert_eq!(req.status, RequestStatus::Unknown);
    }

    #[test]
    fn new_request_serializes_type_field() {
        let body = NewRequest {
            kind: RequestKind::Withdrawal,
            amount: 25.5,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"type":"withdrawal","amount":25.5}"#);
    }

    #[test]
    fn ai_reply_single_string() {
        let reply: AiReply = serde_json::from_str(r#"{"response":"**Hi**"}"#).unwrap();
        assert_eq!(reply.response.into_text(), "**Hi**");
    }

    #[test]
    fn ai_reply_sequence_joined_with_newlines() {
        let reply: AiReply =
            serde_json::from_str(r#"{"response":["line one","line two"]}"#).unwrap();
        assert_eq!(reply.response.into_text(), "line one\nline two");
    }
}
