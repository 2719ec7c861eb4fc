use std::fmt;
use std::time::Duration;

use serde::Serialize;

use super::config::RetrievalConfig;
use super::parse::{RetrievedIdSet, parse_scoring_response};

/// Failure of one scoring call against the retrieval backend.
#[derive(Debug)]
pub enum RetrievalBackendError {
    /// The request never produced an HTTP response.
    Transport(String),
    /// The backend answered with a non-success status.
    Status { status: u16, message: String },
}

impl fmt::Display for RetrievalBackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(message) => {
                write!(f, "scoring request failed to reach the backend: {message}")
            }
            Self::Status { status, message } => {
                write!(f, "scoring backend returned HTTP {status}: {message}")
            }
        }
    }
}

impl std::error::Error for RetrievalBackendError {}

#[derive(Serialize)]
struct ScoringRequest<'a> {
    messages: [ScoringMessage<'a>; 1],
    context: ScoringContext,
    #[serde(rename = "sessionState")]
    session_state: (),
}

#[derive(Serialize)]
struct ScoringMessage<'a> {
    content: &'a str,
    role: &'static str,
}

#[derive(Serialize)]
struct ScoringContext {
    overrides: ScoringOverrides,
}

#[derive(Serialize)]
struct ScoringOverrides {
    use_advanced_flow: bool,
    top: u32,
    retrieval_mode: super::config::RetrievalMode,
    temperature: f64,
}

/// One-shot client for the scoring endpoint. No retries, no streaming;
/// every call is a single POST.
pub struct ScoringClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl ScoringClient {
    pub fn new(endpoint: String) -> Result<Self, RetrievalBackendError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|error| RetrievalBackendError::Transport(error.to_string()))?;

        Ok(Self { http, endpoint })
    }

    /// Runs the question through the backend and returns the ids of the
    /// cases it retrieved, collapsed into a set.
    pub fn fetch_retrieved_ids(
        &self,
        question: &str,
        config: RetrievalConfig,
    ) -> Result<RetrievedIdSet, RetrievalBackendError> {
        let request = ScoringRequest {
            messages: [ScoringMessage {
                content: question,
                role: "user",
            }],
            context: ScoringContext {
                overrides: ScoringOverrides {
                    use_advanced_flow: config.use_advanced_flow,
                    top: config.top_k,
                    retrieval_mode: config.retrieval_mode,
                    temperature: config.temperature,
                },
            },
            session_state: (),
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .map_err(|error| RetrievalBackendError::Transport(error.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|error| RetrievalBackendError::Transport(error.to_string()))?;

        if !status.is_success() {
            return Err(RetrievalBackendError::Status {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        parse_scoring_response(&body).map_err(|error| RetrievalBackendError::Status {
            status: status.as_u16(),
            message: format!("unparseable scoring response: {error}"),
        })
    }
}
