//! Axum route handlers for the analysis endpoints.
//!
//! Each handler is leaf-level: validate, build the prompt, make exactly one
//! generation call, relay the result. Validation failures return before any
//! external call is made.

use axum::{
    body::Bytes,
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::analysis::prompts::{build_ats_report_prompt, build_recruiter_match_prompt};
use crate::analysis::report::MatchReport;
use crate::errors::AppError;
use crate::extract::extract_resume_text;
use crate::llm_client::{strip_json_fences, GenerationError, OutputFormat};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    #[serde(default)]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /chat
///
/// Sends the raw message as the entire prompt and relays the model text
/// verbatim under `response`.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = required_field(request.message, "message")?;

    let response = state
        .generator
        .generate(&message, OutputFormat::Text)
        .await?;

    Ok(Json(ChatResponse { response }))
}

/// POST /analyze
///
/// Multipart PDF upload. Extracts the text of every page and asks the model
/// for a markdown ATS report over it.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ChatResponse>, AppError> {
    let pdf_bytes = read_file_field(&mut multipart).await?;

    let resume_text = extract_resume_text(&pdf_bytes)?;
    let prompt = build_ats_report_prompt(&resume_text);

    let response = state.generator.generate(&prompt, OutputFormat::Text).await?;

    Ok(Json(ChatResponse { response }))
}

/// POST /api/analyze
///
/// Structured resume-vs-JD critique. Requests JSON-constrained output and
/// returns the parsed report as the whole response body. Model output that
/// does not parse as a report is a hard 500.
pub async fn handle_analyze_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchReport>, AppError> {
    let resume_text = required_field(request.resume_text, "resumeText")?;
    let job_description = required_field(request.job_description, "jobDescription")?;

    let prompt = build_recruiter_match_prompt(&resume_text, &job_description);

    let raw = state.generator.generate(&prompt, OutputFormat::Json).await?;

    let report: MatchReport =
        serde_json::from_str(strip_json_fences(&raw)).map_err(GenerationError::Parse)?;

    Ok(Json(report))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn required_field(value: Option<String>, name: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!("{name} is required"))),
    }
}

/// Pulls the `file` field out of the multipart body.
/// An absent field and an empty filename are distinct validation errors,
/// matching what the upload form reports to the user.
async fn read_file_field(multipart: &mut Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        if field.file_name().is_some_and(str::is_empty) {
            return Err(AppError::Validation("No file selected".to_string()));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;

        return Ok(bytes);
    }

    Err(AppError::Validation("No file uploaded".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_field_rejects_missing_and_blank() {
        assert!(required_field(None, "message").is_err());
        assert!(required_field(Some("   ".to_string()), "message").is_err());
        assert_eq!(
            required_field(Some("hello".to_string()), "message").unwrap(),
            "hello"
        );
    }

    #[test]
    fn test_match_request_uses_camel_case_field_names() {
        let request: MatchRequest = serde_json::from_str(
            r#"{"resumeText": "my resume", "jobDescription": "the role"}"#,
        )
        .unwrap();

        assert_eq!(request.resume_text.as_deref(), Some("my resume"));
        assert_eq!(request.job_description.as_deref(), Some("the role"));
    }

    #[test]
    fn test_match_request_tolerates_missing_fields() {
        let request: MatchRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert!(request.resume_text.is_none());
        assert!(request.job_description.is_none());
    }
}
