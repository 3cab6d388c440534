//! Request and response bodies for the resume service endpoints

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GapRequest<'a> {
    pub resume_text: &'a str,
    pub job_description: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapReport {
    pub analysis: GapAnalysis,
    pub status: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub score: u32,
    pub matched_count: u32,
    pub total_jd_keywords: u32,
    #[serde(default)]
    pub matching_keywords: Vec<String>,
    #[serde(default)]
    pub missing_keywords: Vec<String>,
}

impl GapReport {
    pub fn match_description(&self) -> String {
        format!(
            "{} out of {} keywords matched",
            self.analysis.matched_count, self.analysis.total_jd_keywords
        )
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsRequest<'a> {
    pub resume_text: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsReport {
    pub score: u32,
    pub status: String,
    #[serde(default)]
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletsRequest<'a> {
    pub bullets: &'a [String],
    pub job_description: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct BulletsResponse {
    pub improved_bullets: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRequest<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub summary: &'a str,
    pub skills: &'a [String],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRequest<'a> {
    pub job_title: &'a str,
    pub section: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ContentResponse {
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterRequest<'a> {
    pub company: &'a str,
    pub job_title: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CoverLetterResponse {
    pub cover_letter: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

/// Body of `/add-user`; only an `error` field is meaningful.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct AddUserResponse {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserRecord {
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "Anonymous",
        }
    }
}

/// Body of `/get-users`. Both fields are optional because the service
/// answers `{"users": []}` without a success flag when its store is down.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub users: Option<Vec<UserRecord>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_requests_use_camel_case() {
        let skills = vec!["Rust".to_string()];
        let body = serde_json::to_value(ResumeRequest {
            full_name: "Jane Roe",
            email: "jane@example.com",
            phone: "",
            summary: "",
            skills: &skills,
        })
        .unwrap();
        assert_eq!(body["fullName"], "Jane Roe");
        assert_eq!(body["skills"], json!(["Rust"]));

        let body = serde_json::to_value(CoverLetterRequest { company: "Acme", job_title: "SRE" }).unwrap();
        assert_eq!(body, json!({"company": "Acme", "jobTitle": "SRE"}));
    }

    #[test]
    fn test_gap_report_description() {
        let report: GapReport = serde_json::from_value(json!({
            "success": true,
            "analysis": {
                "score": 50,
                "matched_count": 2,
                "total_jd_keywords": 4,
                "matching_keywords": ["rust", "tokio"],
                "missing_keywords": ["kafka", "grpc"]
            },
            "status": "Needs Work",
            "suggestions": ["Add more technical keywords."]
        }))
        .unwrap();
        assert_eq!(report.match_description(), "2 out of 4 keywords matched");
    }

    #[test]
    fn test_user_display_name() {
        let anonymous = UserRecord { name: None, email: Some("a@b.c".to_string()) };
        let blank = UserRecord { name: Some(String::new()), email: None };
        let named = UserRecord { name: Some("Sam".to_string()), email: None };
        assert_eq!(anonymous.display_name(), "Anonymous");
        assert_eq!(blank.display_name(), "Anonymous");
        assert_eq!(named.display_name(), "Sam");
    }
}
