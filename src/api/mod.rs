//! HTTP client for the resume service.
//!
//! One method per endpoint. Each call is a single attempt: no retries and,
//! unless `server.request_timeout_secs` is configured, no timeout.

pub mod types;

use crate::config::Config;
use crate::error::{Result, StudioError};
use crate::input::file_detector::FileType;
use log::{debug, warn};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use std::time::{Duration, Instant};
use types::*;

pub const GAP_ENDPOINT: &str = "/api/analyze-resume-gap";
pub const ATS_ENDPOINT: &str = "/api/ats-check";
pub const ATS_UPLOAD_ENDPOINT: &str = "/api/ats-check-upload";
pub const BULLETS_ENDPOINT: &str = "/api/improve-bullets";
pub const RESUME_ENDPOINT: &str = "/api/generate-resume";
pub const CONTENT_ENDPOINT: &str = "/api/generate-content";
pub const COVER_LETTER_ENDPOINT: &str = "/api/generate-cover-letter";
pub const CHAT_ENDPOINT: &str = "/api/chat";
pub const ADD_USER_ENDPOINT: &str = "/add-user";
pub const GET_USERS_ENDPOINT: &str = "/get-users";

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.server.base_url.clone(), config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    pub async fn analyze_gap(&self, resume_text: &str, job_description: &str) -> Result<GapReport> {
        let body = GapRequest { resume_text, job_description };
        self.post_expecting_success(GAP_ENDPOINT, &body).await
    }

    pub async fn ats_check(&self, resume_text: &str) -> Result<AtsReport> {
        self.post_expecting_success(ATS_ENDPOINT, &AtsRequest { resume_text }).await
    }

    /// Uploads the resume file as the multipart field `resume`.
    pub async fn ats_check_upload(&self, path: &Path) -> Result<AtsReport> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "resume.pdf".to_string());

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(FileType::from_path(path).mime_type())?;
        let form = Form::new().part("resume", part);

        let request = self.client.post(self.url(ATS_UPLOAD_ENDPOINT)).multipart(form);
        let (status, value) = self.send_for_json("POST", ATS_UPLOAD_ENDPOINT, request).await?;
        expect_success(ATS_UPLOAD_ENDPOINT, status, value)
    }

    pub async fn improve_bullets(&self, bullets: &[String], job_description: &str) -> Result<Vec<String>> {
        let body = BulletsRequest { bullets, job_description };
        let response: BulletsResponse = self.post_expecting_success(BULLETS_ENDPOINT, &body).await?;
        Ok(response.improved_bullets)
    }

    /// Returns the generated document bytes as-is.
    pub async fn generate_resume(&self, request: &ResumeRequest<'_>) -> Result<Vec<u8>> {
        let started = Instant::now();
        let response = self
            .client
            .post(self.url(RESUME_ENDPOINT))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        debug!("POST {} -> {} in {}ms", RESUME_ENDPOINT, status, started.elapsed().as_millis());

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!("{} failed with {}: {}", RESUME_ENDPOINT, status, text);
            return Err(StudioError::Server {
                status: status.as_u16(),
                message: error_message(&text).unwrap_or(text),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    pub async fn generate_content(&self, job_title: &str, section: &str) -> Result<String> {
        let body = ContentRequest { job_title, section };
        let response: ContentResponse = self.post_expecting_success(CONTENT_ENDPOINT, &body).await?;
        Ok(response.content)
    }

    pub async fn generate_cover_letter(&self, company: &str, job_title: &str) -> Result<String> {
        let body = CoverLetterRequest { company, job_title };
        let response: CoverLetterResponse = self.post_expecting_success(COVER_LETTER_ENDPOINT, &body).await?;
        Ok(response.cover_letter)
    }

    pub async fn chat(&self, message: &str) -> Result<String> {
        let response: ChatResponse = self.post_expecting_success(CHAT_ENDPOINT, &ChatRequest { message }).await?;
        Ok(response.response)
    }

    /// Registers a user. An `error` field in the body is a rejection even on
    /// a 2xx status; a non-2xx status without one is reported generically.
    pub async fn add_user(&self, name: &str, email: &str) -> Result<()> {
        let request = self.client.post(self.url(ADD_USER_ENDPOINT)).json(&NewUser { name, email });
        let (status, value) = self.send_for_json("POST", ADD_USER_ENDPOINT, request).await?;
        let response: AddUserResponse = serde_json::from_value(value)
            .map_err(|e| StudioError::UnexpectedShape(format!("{}: {}", ADD_USER_ENDPOINT, e)))?;

        match response.error {
            Some(error) => Err(StudioError::Rejected(error)),
            None if !status.is_success() => Err(StudioError::Server {
                status: status.as_u16(),
                message: "Check server logs".to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Fetches the user list without interpreting the success flag; the
    /// caller decides how to render a missing list.
    pub async fn get_users(&self) -> Result<UsersResponse> {
        let request = self.client.get(self.url(GET_USERS_ENDPOINT));
        let (_status, value) = self.send_for_json("GET", GET_USERS_ENDPOINT, request).await?;
        serde_json::from_value(value)
            .map_err(|e| StudioError::UnexpectedShape(format!("{}: {}", GET_USERS_ENDPOINT, e)))
    }

    async fn post_expecting_success<B, T>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.client.post(self.url(endpoint)).json(body);
        let (status, value) = self.send_for_json("POST", endpoint, request).await?;
        expect_success(endpoint, status, value)
    }

    async fn send_for_json(
        &self,
        method: &str,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<(StatusCode, Value)> {
        let started = Instant::now();
        let response = request.send().await.map_err(|e| {
            warn!("{} {} failed: {}", method, endpoint, e);
            e
        })?;

        let status = response.status();
        let text = response.text().await?;
        debug!("{} {} -> {} in {}ms", method, endpoint, status, started.elapsed().as_millis());

        // An unparseable body never counts as a server answer, whatever the
        // status. Proxy error pages land here.
        serde_json::from_str::<Value>(&text).map(|value| (status, value)).map_err(|e| {
            warn!("{} {} -> {} with a non-JSON body", method, endpoint, status);
            StudioError::UnexpectedShape(format!("{} returned invalid JSON ({}): {}", endpoint, status, e))
        })
    }
}

/// Decode a body that carries a `success` flag, turning anything but
/// `success: true` into an error.
fn expect_success<T: DeserializeOwned>(endpoint: &str, status: StatusCode, value: Value) -> Result<T> {
    if value.get("success").and_then(Value::as_bool) == Some(true) {
        return serde_json::from_value(value)
            .map_err(|e| StudioError::UnexpectedShape(format!("{}: {}", endpoint, e)));
    }

    let message = value
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("{} did not report success", endpoint));

    if status.is_success() {
        Err(StudioError::Rejected(message))
    } else {
        Err(StudioError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("error")?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expect_success_decodes_body() {
        let value = json!({"success": true, "score": 80, "status": "Checked", "issues": []});
        let report: AtsReport = expect_success(ATS_ENDPOINT, StatusCode::OK, value).unwrap();
        assert_eq!(report.score, 80);
    }

    #[test]
    fn test_expect_success_rejects_missing_flag() {
        let value = json!({"score": 80, "status": "Checked", "issues": []});
        let err = expect_success::<AtsReport>(ATS_ENDPOINT, StatusCode::OK, value).unwrap_err();
        assert!(matches!(err, StudioError::Rejected(_)));

        let value = json!({"error": "No file"});
        let err = expect_success::<AtsReport>(ATS_UPLOAD_ENDPOINT, StatusCode::BAD_REQUEST, value).unwrap_err();
        match err {
            StudioError::Server { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "No file");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_expect_success_reports_shape_mismatch() {
        let value = json!({"success": true, "status": "Checked"});
        let err = expect_success::<AtsReport>(ATS_ENDPOINT, StatusCode::OK, value).unwrap_err();
        assert!(matches!(err, StudioError::UnexpectedShape(_)));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = ApiClient::new("http://localhost:5000/", None).unwrap();
        assert_eq!(client.url(CHAT_ENDPOINT), "http://localhost:5000/api/chat");
    }
}
