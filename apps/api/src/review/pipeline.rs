//! Review pipeline: orchestrates one review request end to end.
//!
//! Flow: build prompt → generate → normalize → extract → repair.
//!
//! The three task kinds share this single linear pipeline; only the prompt
//! template and schema differ. Generation is the only await point, so a
//! dropped request never produces a partial document.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::llm_client::{GenerationError, TextGenerator};
use crate::review::extract::{extract, ExtractionError};
use crate::review::normalize::normalize;
use crate::review::prompts;
use crate::review::repair::{missing_fields, repair, ResultDocument};
use crate::review::request::{AnalysisRequest, SectionImprovementRequest, SectionKind, Task};
use crate::review::schema::TaskKind;

/// Field echoing the requested section kind on section improvement results.
pub const SECTION_TYPE_FIELD: &str = "section_type";

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid input: {0}")]
    Validation(String),

    /// The backend call itself failed (outage, auth, quota).
    #[error("{kind} generation failed: {source}")]
    Generation {
        kind: TaskKind,
        source: GenerationError,
    },

    /// The backend answered, but not with a recoverable JSON object.
    #[error("{kind} response could not be parsed: {source}")]
    Extraction {
        kind: TaskKind,
        source: ExtractionError,
    },
}

#[derive(Clone)]
pub struct ReviewPipeline {
    generator: Arc<dyn TextGenerator>,
}

impl ReviewPipeline {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Scores a resume against a job description.
    pub async fn run_comparative_analysis(
        &self,
        subject_text: &str,
        reference_text: &str,
    ) -> Result<ResultDocument, PipelineError> {
        let request = AnalysisRequest::comparative(subject_text, reference_text)?;
        self.run(Task::Analysis(request)).await
    }

    /// Scores a resume on its own merits.
    pub async fn run_standalone_analysis(
        &self,
        subject_text: &str,
    ) -> Result<ResultDocument, PipelineError> {
        let request = AnalysisRequest::standalone(subject_text)?;
        self.run(Task::Analysis(request)).await
    }

    /// Rewrites one resume section.
    pub async fn run_section_improvement(
        &self,
        section_kind: SectionKind,
        original_text: &str,
    ) -> Result<ResultDocument, PipelineError> {
        let request = SectionImprovementRequest::new(section_kind, original_text)?;
        self.run(Task::SectionImprovement(request)).await
    }

    pub async fn run(&self, task: Task) -> Result<ResultDocument, PipelineError> {
        let kind = task.kind();

        let prompt = prompts::build(&task);
        debug!("Sending {kind} prompt ({} chars)", prompt.len());

        let raw = self
            .generator
            .generate(&prompt)
            .await
            .map_err(|source| PipelineError::Generation { kind, source })?;

        let cleaned = normalize(&raw);
        let mut payload = extract(&cleaned).map_err(|source| {
            warn!(
                "Could not recover JSON from {kind} response ({} chars): {source}",
                raw.len()
            );
            PipelineError::Extraction { kind, source }
        })?;

        if let Task::SectionImprovement(request) = &task {
            payload.insert(
                SECTION_TYPE_FIELD.to_string(),
                Value::from(request.section_kind().as_str()),
            );
        }

        let missing = missing_fields(&payload, kind);
        if !missing.is_empty() {
            warn!(
                "Model omitted {} top-level {kind} fields, filling defaults: {}",
                missing.len(),
                missing.join(", ")
            );
        }

        let document = repair(payload, kind);

        let headline = document
            .get(kind.headline_field())
            .map(|v| v.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        info!("{kind} complete - {}: {headline}", kind.headline_field());

        Ok(document)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::StubGenerator;
    use serde_json::json;

    const RESUME: &str = "Jane Doe\nSenior Rust Engineer at Acme (2019-2024)\n- Cut p99 latency 40%";

    fn pipeline_with(stub: StubGenerator) -> (ReviewPipeline, Arc<StubGenerator>) {
        let stub = Arc::new(stub);
        (ReviewPipeline::new(stub.clone()), stub)
    }

    fn pointer<'a>(value: &'a Value, path: &str) -> &'a Value {
        value
            .pointer(path)
            .unwrap_or_else(|| panic!("missing {path}"))
    }

    #[tokio::test]
    async fn test_standalone_fenced_partial_response_is_repaired() {
        let (pipeline, _) =
            pipeline_with(StubGenerator::replying("```json\n{\"overall_score\": 82}\n```"));

        let document = pipeline.run_standalone_analysis(RESUME).await.unwrap();
        let value = Value::Object(document.into_inner());

        assert_eq!(value["overall_score"], 82);
        assert_eq!(value["status"], "success");
        assert_eq!(value["strengths"], json!([]));
        assert_eq!(*pointer(&value, "/detailed_analysis/content_quality/score"), json!(0));
        assert_eq!(*pointer(&value, "/summary_insights/overall_grade"), json!("N/A"));
        assert_eq!(value["actionable_recommendations"], json!([]));
    }

    #[tokio::test]
    async fn test_comparative_prompt_reaches_backend() {
        let (pipeline, stub) = pipeline_with(StubGenerator::replying(
            "Sure! Here is the analysis:\n{\"score\": 64, // decent match\n\"gap_analysis\": {\"identified_gaps\": [\"Kafka\"]}}\nGood luck!",
        ));

        let document = pipeline
            .run_comparative_analysis(RESUME, "Staff engineer, Kafka required")
            .await
            .unwrap();

        assert_eq!(document.get("score"), Some(&json!(64)));
        let gaps = document.get("gap_analysis").unwrap();
        assert_eq!(gaps["identified_gaps"], json!(["Kafka"]));
        assert_eq!(gaps["learning_paths"], json!([]));

        let prompts = stub.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains(RESUME));
        assert!(prompts[0].contains("Staff engineer, Kafka required"));
    }

    #[tokio::test]
    async fn test_section_improvement_echoes_section_type() {
        let (pipeline, _) = pipeline_with(StubGenerator::replying(
            r#"{"improved_text": "Built and shipped X", "improvement_score": 77, "section_type": "wrong"}"#,
        ));

        let document = pipeline
            .run_section_improvement(SectionKind::Experience, "Worked on X")
            .await
            .unwrap();

        assert_eq!(document.get(SECTION_TYPE_FIELD), Some(&json!("experience")));
        assert_eq!(document.get("improvement_score"), Some(&json!(77)));
        assert_eq!(document.get("tips"), Some(&json!([])));
        assert_eq!(document.get("status"), Some(&json!("success")));
    }

    #[tokio::test]
    async fn test_unknown_section_kind_still_runs() {
        let (pipeline, stub) = pipeline_with(StubGenerator::replying("{}"));

        let document = pipeline
            .run_section_improvement(SectionKind::from_name("hobbies"), "Chess, climbing")
            .await
            .unwrap();

        assert_eq!(document.get(SECTION_TYPE_FIELD), Some(&json!("hobbies")));
        assert!(stub.prompts()[0].contains("SECTION TYPE: Professional Summary"));
    }

    #[tokio::test]
    async fn test_generation_failure_is_wrapped_with_task_kind() {
        let (pipeline, _) = pipeline_with(StubGenerator::failing());

        let err = pipeline.run_standalone_analysis(RESUME).await.unwrap_err();

        match &err {
            PipelineError::Generation { kind, .. } => {
                assert_eq!(*kind, TaskKind::StandaloneAnalysis)
            }
            other => panic!("expected generation error, got {other:?}"),
        }
        assert!(err.to_string().starts_with("standalone analysis generation failed"));
    }

    #[tokio::test]
    async fn test_non_json_reply_is_extraction_error() {
        let (pipeline, _) = pipeline_with(StubGenerator::replying("I cannot help with that."));

        let err = pipeline
            .run_comparative_analysis(RESUME, "")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Extraction {
                kind: TaskKind::ComparativeAnalysis,
                source: ExtractionError::NoObject
            }
        ));
    }

    #[tokio::test]
    async fn test_blank_input_never_reaches_backend() {
        let (pipeline, stub) = pipeline_with(StubGenerator::replying("{}"));

        let err = pipeline
            .run_section_improvement(SectionKind::Summary, "   ")
            .await
            .unwrap_err();

        assert!(matches!(err, PipelineError::Validation(_)));
        assert!(stub.prompts().is_empty());
    }
}
