//! API client for communicating with the investor portal backend

use crate::types::*;
use gloo_net::http::{Request, Response};
use thiserror::Error;

/// What went wrong with a fetch, from the UI's point of view
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The request never completed (DNS, CORS, connection refused, ...)
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx response, with the server-provided detail when structured
    #[error("{detail}")]
    Server { status: u16, detail: String },
    /// The token was rejected (HTTP 401)
    #[error("Session expired, please sign in again")]
    Unauthorized,
    /// The response body did not parse
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, FetchError::Unauthorized)
    }
}

/// Map a non-ok response to the error taxonomy
async fn response_error(resp: Response) -> FetchError {
    let status = resp.status();
    if status == 401 {
        return FetchError::Unauthorized;
    }
    match resp.json::<ApiErrorBody>().await {
        Ok(body) => FetchError::Server {
            status,
            detail: body.detail,
        },
        Err(_) => FetchError::Server {
            status,
            detail: format!("Request failed with status {}", status),
        },
    }
}

async fn decode<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, FetchError> {
    if !resp.ok() {
        return Err(response_error(resp).await);
    }
    resp.json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Make an authenticated GET request
pub async fn fetch_with_auth<T: serde::de::DeserializeOwned>(
    url: &str,
    token: Option<&str>,
) -> Result<T, FetchError> {
    let req = if let Some(t) = token {
        Request::get(url).header("Authorization", &format!("Bearer {}", t))
    } else {
        Request::get(url)
    };

    let resp = req
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    decode(resp).await
}

/// JSON POST request, optionally authenticated
pub async fn post_with_auth<T, R>(
    url: &str,
    body: &T,
    token: Option<&str>,
) -> Result<R, FetchError>
where
    T: serde::Serialize,
    R: serde::de::DeserializeOwned,
{
    let req = Request::post(url).header("Content-Type", "application/json");

    let req = if let Some(t) = token {
        req.header("Authorization", &format!("Bearer {}", t))
    } else {
        req
    };

    let req = req
        .json(body)
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let resp = req
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    decode(resp).await
}

/// Build a form-encoded body from key/value pairs
fn form_body(pairs: &[(&str, &str)]) -> Result<String, FetchError> {
    let params = web_sys::UrlSearchParams::new()
        .map_err(|_| FetchError::Network("failed to build form body".to_string()))?;
    for (key, value) in pairs {
        params.append(key, value);
    }
    Ok(String::from(js_sys::Object::to_string(&params)))
}

/// Register a new investor
pub async fn signup(
    base_url: &str,
    email: &str,
    password: &str,
    name: &str,
) -> Result<InvestorProfile, FetchError> {
    let url = format!("{}/signup", base_url);
    let body = SignupRequest {
        email: email.to_string(),
        password: password.to_string(),
        name: name.to_string(),
    };
    post_with_auth::<_, InvestorProfile>(&url, &body, None).await
}

/// Exchange credentials for a bearer token (form-encoded, OAuth2 style)
pub async fn login(base_url: &str, email: &str, password: &str) -> Result<TokenResponse, FetchError> {
    let url = format!("{}/token", base_url);
    let body = form_body(&[("username", email), ("password", password)])?;

    let resp = Request::post(&url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| FetchError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    decode(resp).await
}

/// Fetch the investor profile
pub async fn fetch_profile(base_url: &str, token: &str) -> Result<InvestorProfile, FetchError> {
    let url = format!("{}/profile", base_url);
    fetch_with_auth(&url, Some(token)).await
}

/// Fetch the portfolio holdings
pub async fn fetch_portfolio(base_url: &str, token: &str) -> Result<Vec<PortfolioItem>, FetchError> {
    let url = format!("{}/portfolio", base_url);
    fetch_with_auth(&url, Some(token)).await
}

/// Fetch the deposit/withdrawal request list
pub async fn fetch_requests(
    base_url: &str,
    token: &str,
) -> Result<Vec<FinancialRequest>, FetchError> {
    let url = format!("{}/requests", base_url);
    fetch_with_auth(&url, Some(token)).await
}

/// Create a deposit/withdrawal request
pub async fn create_request(
    base_url: &str,
    token: &str,
    kind: RequestKind,
    amount: f64,
) -> Result<CreateAck, FetchError> {
    let url = format!("{}/requests", base_url);
    let body = NewRequest { kind, amount };
    post_with_auth::<_, CreateAck>(&url, &body, Some(token)).await
}

/// Fetch the AI insights banner text
pub async fn fetch_insights(base_url: &str, token: &str) -> Result<Insights, FetchError> {
    let url = format!("{}/ai-insights", base_url);
    fetch_with_auth(&url, Some(token)).await
}

/// Submit a free-text prompt; returns the flattened response text
pub async fn send_prompt(base_url: &str, token: &str, prompt: &str) -> Result<String, FetchError> {
    let url = format!("{}/ai", base_url);
    let body = AiPrompt {
        prompt: prompt.to_string(),
    };
    let reply = post_with_auth::<_, AiReply>(&url, &body, Some(token)).await?;
    Ok(reply.response.into_text())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_displays_detail() {
        let err = FetchError::Server {
            status: 400,
            detail: "Email already registered".to_string(),
        };
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[test]
    fn unauthorized_is_auth_failure() {
        assert!(FetchError::Unauthorized.is_auth_failure());
        assert!(!FetchError::Network("offline".to_string()).is_auth_failure());
    }

    #[test]
    fn network_error_mentions_cause() {
        let err = FetchError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }
}
