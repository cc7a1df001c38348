use axum::{
    extract::{multipart::MultipartError, rejection::JsonRejection, Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::pdf;
use crate::review::pipeline::SECTION_TYPE_FIELD;
use crate::review::repair::{repair, sample_document, ResultDocument};
use crate::review::request::SectionKind;
use crate::review::schema::{example_document, TaskKind};
use crate::state::AppState;

/// A resume upload plus the optional job description sent alongside it.
struct ResumeUpload {
    file_name: String,
    document: Bytes,
    job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct ImproveSectionRequest {
    #[serde(default)]
    pub section_type: String,
    #[serde(default)]
    pub original_text: String,
}

/// POST /analyze
/// Multipart: `resume` (PDF file), `job_description` (text, optional).
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ResultDocument>, AppError> {
    let upload = read_resume_upload(multipart).await?;
    info!(
        "Received analyze request with resume: {} ({} bytes)",
        upload.file_name,
        upload.document.len()
    );

    let resume_text = pdf::extract_text(upload.document).await?;
    let document = state
        .pipeline
        .run_comparative_analysis(&resume_text, &upload.job_description)
        .await?;
    Ok(Json(document))
}

/// POST /analyze-overall
/// Multipart: `resume` (PDF file). Any job description is ignored.
pub async fn handle_analyze_overall(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ResultDocument>, AppError> {
    let upload = read_resume_upload(multipart).await?;
    info!(
        "Received analyze-overall request with resume: {} ({} bytes)",
        upload.file_name,
        upload.document.len()
    );

    let resume_text = pdf::extract_text(upload.document).await?;
    let document = state.pipeline.run_standalone_analysis(&resume_text).await?;
    Ok(Json(document))
}

/// POST /improve-section
/// JSON: `{ "section_type": "...", "original_text": "..." }`
pub async fn handle_improve_section(
    State(state): State<AppState>,
    payload: Result<Json<ImproveSectionRequest>, JsonRejection>,
) -> Result<Json<ResultDocument>, AppError> {
    let Json(req) = payload.map_err(|rejection| {
        AppError::Validation(format!("No JSON data provided: {}", rejection.body_text()))
    })?;
    info!(
        "Received improve-section request for section: {:?}",
        req.section_type
    );

    if req.section_type.is_empty() {
        return Err(AppError::Validation("section_type is required".to_string()));
    }

    // Names are matched exactly; no trimming or case folding.
    let kind = SectionKind::from_name(&req.section_type);
    if !kind.is_recognized() {
        return Err(AppError::Validation(format!(
            "Invalid section_type. Must be one of: {}",
            SectionKind::NAMES.join(", ")
        )));
    }

    let document = state
        .pipeline
        .run_section_improvement(kind, &req.original_text)
        .await?;
    Ok(Json(document))
}

/// GET /test-format
/// A fully populated comparative analysis, for frontend development.
pub async fn handle_test_format() -> Json<ResultDocument> {
    Json(sample_document(TaskKind::ComparativeAnalysis))
}

/// GET /test-section-improvement
pub async fn handle_test_section_improvement() -> Json<ResultDocument> {
    let mut sample = example_document(TaskKind::SectionImprovement.schema());
    sample.insert(
        SECTION_TYPE_FIELD.to_string(),
        Value::from(SectionKind::Summary.as_str()),
    );
    Json(repair(sample, TaskKind::SectionImprovement))
}

async fn read_resume_upload(mut multipart: Multipart) -> Result<ResumeUpload, AppError> {
    let mut resume: Option<(String, Bytes)> = None;
    let mut job_description = String::new();

    while let Some(field) = multipart.next_field().await.map_err(malformed_upload)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let document = field.bytes().await.map_err(malformed_upload)?;
                resume = Some((file_name, document));
            }
            "job_description" => {
                job_description = field.text().await.map_err(malformed_upload)?;
            }
            _ => {}
        }
    }

    let (file_name, document) =
        resume.ok_or_else(|| AppError::Validation("No resume file uploaded".to_string()))?;

    if file_name.is_empty() {
        return Err(AppError::Validation("No file selected".to_string()));
    }
    if !file_name.ends_with(".pdf") {
        return Err(AppError::Validation(
            "Only PDF files are supported".to_string(),
        ));
    }

    Ok(ResumeUpload {
        file_name,
        document,
        job_description,
    })
}

fn malformed_upload(err: MultipartError) -> AppError {
    AppError::Validation(format!("Malformed multipart upload: {}", err.body_text()))
}
