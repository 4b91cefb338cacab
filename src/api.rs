// API client module: a small blocking HTTP client that pushes a script
// to the platform. One form-encoded POST per invocation, no retries;
// the platform reports the real outcome inside the response body.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use tracing::debug;

/// Where pushes go unless `BOTVS_API_URL` says otherwise.
pub const DEFAULT_ENDPOINT: &str = "https://www.botvs.com/rsync";

/// Wire protocol version expected by the platform. Not the crate version.
const WIRE_VERSION: &str = "0.0.1";

/// Identifies this client to the platform.
const CLIENT_ID: &str = "botvs-push-cli";

static RESPONSE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r#""code":(\d{0,3})"#).unwrap());

/// Simple API client that holds a reqwest blocking client and the
/// endpoint URL pushes are sent to.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    endpoint: String,
}

/// Form fields of a push, in the order they appear on the wire.
#[derive(Serialize)]
struct PushForm<'a> {
    token: &'a str,
    method: &'a str,
    content: &'a str,
    version: &'a str,
    client: &'a str,
}

/// What came back from a push: whether the platform accepted it, and the
/// raw response body for the status line.
#[derive(Debug, Clone)]
pub struct PushReceipt {
    pub accepted: bool,
    pub body: String,
}

impl PushReceipt {
    /// The body is accepted iff it carries a `"code":<n>` whose digits
    /// parse and stay below 100. Anything else (no code, empty digits,
    /// code >= 100) counts as rejected.
    fn from_body(body: String) -> Self {
        let accepted = RESPONSE_CODE
            .captures(&body)
            .and_then(|caps| caps[1].parse::<i32>().ok())
            .is_some_and(|code| code < 100);
        PushReceipt { accepted, body }
    }
}

impl ApiClient {
    /// Create an ApiClient configured from the environment variable
    /// `BOTVS_API_URL` or fallback to the public platform endpoint.
    pub fn from_env() -> Result<Self> {
        let endpoint = std::env::var("BOTVS_API_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.into());
        Self::with_endpoint(endpoint)
    }

    /// Create an ApiClient that pushes to an explicit endpoint URL.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Push a script body under `token`. Blocks until the platform
    /// responds. The HTTP status line is ignored: the body is read
    /// either way and judged by its embedded code.
    pub fn push(&self, token: &str, content: &str) -> Result<PushReceipt> {
        let form = PushForm {
            token,
            method: "push",
            content,
            version: WIRE_VERSION,
            client: CLIENT_ID,
        };
        let body = serde_urlencoded::to_string(&form).context("Failed to encode push form")?;
        debug!(endpoint = %self.endpoint, bytes = body.len(), "pushing script");

        let res = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded; charset=utf-8")
            .body(body)
            .send()
            .context("Failed to send push request")?;
        debug!(status = %res.status(), "push response received");

        let text = res.text().context("Failed to read push response")?;
        Ok(PushReceipt::from_body(text))
    }
}
