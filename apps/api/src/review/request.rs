//! Validated inputs for the three review tasks.

use std::fmt;

use crate::review::pipeline::PipelineError;
use crate::review::schema::TaskKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    Comparative,
    Standalone,
}

/// Resume analysis input. An empty `reference_text` means there is no job
/// description to compare against.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    subject_text: String,
    reference_text: String,
    mode: AnalysisMode,
}

impl AnalysisRequest {
    pub fn comparative(subject_text: &str, reference_text: &str) -> Result<Self, PipelineError> {
        Self::new(subject_text, reference_text, AnalysisMode::Comparative)
    }

    pub fn standalone(subject_text: &str) -> Result<Self, PipelineError> {
        Self::new(subject_text, "", AnalysisMode::Standalone)
    }

    fn new(
        subject_text: &str,
        reference_text: &str,
        mode: AnalysisMode,
    ) -> Result<Self, PipelineError> {
        if subject_text.trim().is_empty() {
            return Err(PipelineError::Validation(
                "resume text cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            subject_text: subject_text.to_string(),
            reference_text: reference_text.to_string(),
            mode,
        })
    }

    pub fn subject_text(&self) -> &str {
        &self.subject_text
    }

    pub fn reference_text(&self) -> &str {
        &self.reference_text
    }

    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }
}

/// Resume section a rewrite targets.
///
/// `Other` carries a name outside the known set so the prompt builder can fall
/// back to generic guidance instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionKind {
    Summary,
    Experience,
    Skills,
    Education,
    Projects,
    Other(String),
}

impl SectionKind {
    /// Wire names of the recognized kinds, in display order.
    pub const NAMES: [&'static str; 5] = ["summary", "experience", "skills", "education", "projects"];

    pub fn from_name(name: &str) -> Self {
        match name {
            "summary" => SectionKind::Summary,
            "experience" => SectionKind::Experience,
            "skills" => SectionKind::Skills,
            "education" => SectionKind::Education,
            "projects" => SectionKind::Projects,
            other => SectionKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SectionKind::Summary => "summary",
            SectionKind::Experience => "experience",
            SectionKind::Skills => "skills",
            SectionKind::Education => "education",
            SectionKind::Projects => "projects",
            SectionKind::Other(name) => name,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, SectionKind::Other(_))
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct SectionImprovementRequest {
    section_kind: SectionKind,
    original_text: String,
}

impl SectionImprovementRequest {
    pub fn new(section_kind: SectionKind, original_text: &str) -> Result<Self, PipelineError> {
        if original_text.trim().is_empty() {
            return Err(PipelineError::Validation(
                "original_text is required and cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            section_kind,
            original_text: original_text.to_string(),
        })
    }

    pub fn section_kind(&self) -> &SectionKind {
        &self.section_kind
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }
}

/// One unit of work for the review pipeline.
#[derive(Debug, Clone)]
pub enum Task {
    Analysis(AnalysisRequest),
    SectionImprovement(SectionImprovementRequest),
}

impl Task {
    pub fn kind(&self) -> TaskKind {
        match self {
            Task::Analysis(request) => match request.mode() {
                AnalysisMode::Comparative => TaskKind::ComparativeAnalysis,
                AnalysisMode::Standalone => TaskKind::StandaloneAnalysis,
            },
            Task::SectionImprovement(_) => TaskKind::SectionImprovement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_resume_is_rejected() {
        let err = AnalysisRequest::standalone("  \n\t").unwrap_err();
        assert!(matches!(err, PipelineError::Validation(_)));
    }

    #[test]
    fn test_comparative_allows_empty_job_description() {
        let request = AnalysisRequest::comparative("Jane Doe, Rust engineer", "").unwrap();
        assert_eq!(request.mode(), AnalysisMode::Comparative);
        assert_eq!(request.reference_text(), "");
    }

    #[test]
    fn test_whitespace_only_section_text_is_rejected() {
        let err = SectionImprovementRequest::new(SectionKind::Skills, "   ").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid input: original_text is required and cannot be empty"
        );
    }

    #[test]
    fn test_section_kind_round_trips_known_names() {
        for name in SectionKind::NAMES {
            let kind = SectionKind::from_name(name);
            assert!(kind.is_recognized());
            assert_eq!(kind.as_str(), name);
        }
    }

    #[test]
    fn test_unknown_section_kind_is_carried() {
        let kind = SectionKind::from_name("bogus");
        assert_eq!(kind, SectionKind::Other("bogus".to_string()));
        assert!(!kind.is_recognized());
        assert_eq!(kind.to_string(), "bogus");
    }

    #[test]
    fn test_task_kind_follows_mode() {
        let standalone = Task::Analysis(AnalysisRequest::standalone("resume").unwrap());
        assert_eq!(standalone.kind(), TaskKind::StandaloneAnalysis);
        let section = Task::SectionImprovement(
            SectionImprovementRequest::new(SectionKind::Summary, "text").unwrap(),
        );
        assert_eq!(section.kind(), TaskKind::SectionImprovement);
    }
}
