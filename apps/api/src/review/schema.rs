//! Schema table: the single definition of the three result documents.
//!
//! The prompt builder renders these trees into the JSON contract shown to the model,
//! and the repairer walks the same trees to fill whatever the model left out.
//! Adding a field here changes both sides at once.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Expected JSON shape of a schema field, with its example and default values.
///
/// Lists of text and lists of objects always default to `[]`; objects default to
/// their complete nested default document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Integer { example: i64, default: i64 },
    Text { example: &'static str, default: &'static str },
    Boolean { example: bool, default: bool },
    TextList { examples: &'static [&'static str] },
    Object(&'static [Field]),
    ObjectList(&'static [Field]),
}

/// One named entry of a schema tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub shape: Shape,
    /// Short guidance rendered next to the field in the prompt.
    pub hint: &'static str,
}

impl Shape {
    /// Type label rendered into the prompt beside each field.
    pub fn type_hint(&self) -> &'static str {
        match self {
            Shape::Integer { .. } => "integer",
            Shape::Text { .. } => "string",
            Shape::Boolean { .. } => "boolean",
            Shape::TextList { .. } => "array of strings",
            Shape::Object(_) => "object",
            Shape::ObjectList(_) => "array of objects",
        }
    }

    pub fn default_value(&self) -> Value {
        match self {
            Shape::Integer { default, .. } => Value::from(*default),
            Shape::Text { default, .. } => Value::from(*default),
            Shape::Boolean { default, .. } => Value::Bool(*default),
            Shape::TextList { .. } | Shape::ObjectList(_) => Value::Array(Vec::new()),
            Shape::Object(fields) => Value::Object(default_document(fields)),
        }
    }

    pub fn example_value(&self) -> Value {
        match self {
            Shape::Integer { example, .. } => Value::from(*example),
            Shape::Text { example, .. } => Value::from(*example),
            Shape::Boolean { example, .. } => Value::Bool(*example),
            Shape::TextList { examples } => {
                Value::Array(examples.iter().map(|e| Value::from(*e)).collect())
            }
            Shape::Object(fields) => Value::Object(example_document(fields)),
            Shape::ObjectList(fields) => Value::Array(vec![Value::Object(example_document(fields))]),
        }
    }
}

/// Builds the document a model would have to return if it omitted every field.
pub fn default_document(fields: &[Field]) -> Map<String, Value> {
    fields
        .iter()
        .map(|f| (f.name.to_string(), f.shape.default_value()))
        .collect()
}

/// Builds a fully populated document from the schema's example values.
pub fn example_document(fields: &[Field]) -> Map<String, Value> {
    fields
        .iter()
        .map(|f| (f.name.to_string(), f.shape.example_value()))
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Task kinds
// ────────────────────────────────────────────────────────────────────────────

/// Which prompt template and schema apply to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    ComparativeAnalysis,
    StandaloneAnalysis,
    SectionImprovement,
}

impl TaskKind {
    pub fn schema(self) -> &'static [Field] {
        match self {
            TaskKind::ComparativeAnalysis => COMPARATIVE_ANALYSIS,
            TaskKind::StandaloneAnalysis => STANDALONE_ANALYSIS,
            TaskKind::SectionImprovement => SECTION_IMPROVEMENT,
        }
    }

    /// The top-level score reported in logs once a document is complete.
    pub fn headline_field(self) -> &'static str {
        match self {
            TaskKind::ComparativeAnalysis => "score",
            TaskKind::StandaloneAnalysis => "overall_score",
            TaskKind::SectionImprovement => "improvement_score",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskKind::ComparativeAnalysis => "comparative analysis",
            TaskKind::StandaloneAnalysis => "standalone analysis",
            TaskKind::SectionImprovement => "section improvement",
        };
        f.write_str(label)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Field constructors
// ────────────────────────────────────────────────────────────────────────────

const fn int(name: &'static str, example: i64, hint: &'static str) -> Field {
    Field {
        name,
        shape: Shape::Integer { example, default: 0 },
        hint,
    }
}

const fn text(name: &'static str, example: &'static str, hint: &'static str) -> Field {
    text_or(name, example, "", hint)
}

const fn text_or(
    name: &'static str,
    example: &'static str,
    default: &'static str,
    hint: &'static str,
) -> Field {
    Field {
        name,
        shape: Shape::Text { example, default },
        hint,
    }
}

const fn flag(name: &'static str, example: bool, hint: &'static str) -> Field {
    Field {
        name,
        shape: Shape::Boolean {
            example,
            default: false,
        },
        hint,
    }
}

const fn list(name: &'static str, examples: &'static [&'static str], hint: &'static str) -> Field {
    Field {
        name,
        shape: Shape::TextList { examples },
        hint,
    }
}

const fn object(name: &'static str, fields: &'static [Field], hint: &'static str) -> Field {
    Field {
        name,
        shape: Shape::Object(fields),
        hint,
    }
}

const fn records(name: &'static str, fields: &'static [Field], hint: &'static str) -> Field {
    Field {
        name,
        shape: Shape::ObjectList(fields),
        hint,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shared fragments
// ────────────────────────────────────────────────────────────────────────────

const PRIORITY_ITEM: &[Field] = &[
    text("priority", "High", "High, Medium, or Low"),
    text("area", "Skills", "area to improve"),
    text(
        "recommendation",
        "Add missing technical skills like X, Y, Z",
        "concrete next step",
    ),
];

const GRADE_HINT: &str = "single letter grade: A, B, C, D, or F";

// ────────────────────────────────────────────────────────────────────────────
// Comparative analysis (resume vs job description)
// ────────────────────────────────────────────────────────────────────────────

const EXPERIENCE_LEVEL_MATCH: &[Field] = &[
    text("resume_level", "Mid-level", "Junior, Mid-level, or Senior"),
    text("job_level", "Mid-level", "Junior, Mid-level, or Senior"),
    flag("match", true, "whether the two levels match"),
    text(
        "mismatch_details",
        "The experience levels align well.",
        "explanation when the levels differ",
    ),
];

const COMPARATIVE_SUMMARY: &[Field] = &[
    text_or("overall_grade", "B", "N/A", GRADE_HINT),
    int("ats_readiness", 85, "0-100"),
    int("competitiveness", 70, "0-100 market competitiveness"),
    object("experience_level", EXPERIENCE_LEVEL_MATCH, "resume level vs job level"),
    list(
        "top_strengths",
        &["Strength 1", "Strength 2", "Strength 3"],
        "3-5 key strengths",
    ),
    records("priority_actions", PRIORITY_ITEM, "2-4 priority actions"),
];

const RELEVANCE_DETAILS: &[Field] = &[
    int("experience_match", 85, "0-100"),
    int("education_match", 75, "0-100"),
];

const ATS_COMPATIBILITY_DETAILS: &[Field] = &[
    int("keyword_density", 65, "0-100"),
    int("format_score", 75, "0-100"),
];

const QUALITY_DETAILS: &[Field] = &[int("clarity", 70, "0-100"), int("impact", 80, "0-100")];

const SKILLS_ALIGNMENT_DETAILS: &[Field] = &[
    int("matching_skills_percentage", 65, "0-100"),
    int("missing_critical_skills", 4, "count of critical skills not found"),
];

const RELEVANCE: &[Field] = &[
    int("score", 80, "0-100"),
    object("details", RELEVANCE_DETAILS, ""),
];

const COMPARATIVE_ATS_COMPATIBILITY: &[Field] = &[
    int("score", 70, "0-100"),
    object("details", ATS_COMPATIBILITY_DETAILS, ""),
];

const COMPARATIVE_CONTENT_QUALITY: &[Field] = &[
    int("score", 75, "0-100"),
    object("details", QUALITY_DETAILS, ""),
];

const SKILLS_ALIGNMENT: &[Field] = &[
    int("score", 65, "0-100"),
    object("details", SKILLS_ALIGNMENT_DETAILS, ""),
];

const DETAILED_METRICS: &[Field] = &[
    object("relevance", RELEVANCE, ""),
    object("ats_compatibility", COMPARATIVE_ATS_COMPATIBILITY, ""),
    object("content_quality", COMPARATIVE_CONTENT_QUALITY, ""),
    object("skills_alignment", SKILLS_ALIGNMENT, ""),
];

const COMPREHENSIVE_ANALYSIS: &[Field] = &[
    int("overall_score", 75, "same as the top-level score"),
    object("detailed_metrics", DETAILED_METRICS, ""),
    list(
        "strengths",
        &["Detailed strength 1", "Detailed strength 2"],
        "",
    ),
    list(
        "weaknesses",
        &["Detailed weakness 1", "Detailed weakness 2"],
        "",
    ),
    list(
        "improvement_suggestions",
        &["Improvement suggestion 1", "Improvement suggestion 2"],
        "",
    ),
];

const KEYWORD_MATCH: &[Field] = &[
    int("percentage", 65, "overall keyword match percentage"),
    list(
        "matches",
        &["Keyword 1", "Keyword 2"],
        "keywords found in both",
    ),
    list(
        "missing",
        &["Missing keyword 1", "Missing keyword 2"],
        "important keywords missing from the resume",
    ),
];

const COMPARATIVE_ATS_ANALYSIS: &[Field] = &[
    int("score", 75, "ATS score 0-100"),
    list(
        "format_issues",
        &["Issue 1", "Issue 2"],
        "formatting issues",
    ),
    object("keyword_match", KEYWORD_MATCH, ""),
    list(
        "recommendations",
        &["ATS recommendation 1", "ATS recommendation 2"],
        "",
    ),
];

const SKILLS_ANALYSIS: &[Field] = &[
    list(
        "matching_skills",
        &["Skill 1", "Skill 2"],
        "skills found in both resume and job",
    ),
    list(
        "missing_skills",
        &["Missing skill 1", "Missing skill 2"],
        "skills in the job but not the resume",
    ),
    list(
        "additional_skills",
        &["Additional skill 1"],
        "skills in the resume but not the job",
    ),
];

const SECTION_FEEDBACK: &[Field] = &[
    text("contact_information", "Feedback on contact section...", ""),
    text("professional_summary", "Feedback on summary...", ""),
    text("work_experience", "Feedback on work experience...", ""),
    text("education", "Feedback on education...", ""),
    text("skills", "Feedback on skills section...", ""),
    text("projects", "Feedback on projects...", ""),
    text("certifications", "Feedback on certifications...", ""),
];

const COMPARATIVE_INDUSTRY_INSIGHTS: &[Field] = &[
    list("industry_trends", &["Trend 1", "Trend 2"], ""),
    list(
        "recommendations",
        &["Industry recommendation 1", "Industry recommendation 2"],
        "",
    ),
];

const LEARNING_PATH: &[Field] = &[
    text("gap", "Gap 1", "which identified gap this addresses"),
    list(
        "recommendations",
        &["Learning recommendation 1", "Learning recommendation 2"],
        "",
    ),
];

const GAP_ANALYSIS: &[Field] = &[
    list("identified_gaps", &["Gap 1", "Gap 2"], ""),
    records("learning_paths", LEARNING_PATH, "one entry per gap"),
];

pub static COMPARATIVE_ANALYSIS: &[Field] = &[
    int("score", 75, "overall job match score 0-100"),
    object("summary_insights", COMPARATIVE_SUMMARY, ""),
    object("comprehensive_analysis", COMPREHENSIVE_ANALYSIS, ""),
    object("ats_analysis", COMPARATIVE_ATS_ANALYSIS, ""),
    object("skills_analysis", SKILLS_ANALYSIS, ""),
    object("section_feedback", SECTION_FEEDBACK, "one paragraph per resume section"),
    object("industry_insights", COMPARATIVE_INDUSTRY_INSIGHTS, ""),
    object("gap_analysis", GAP_ANALYSIS, ""),
];

// ────────────────────────────────────────────────────────────────────────────
// Standalone analysis (resume only)
// ────────────────────────────────────────────────────────────────────────────

const STANDALONE_SUMMARY: &[Field] = &[
    text_or("overall_grade", "B", "N/A", GRADE_HINT),
    int("ats_readiness", 85, "0-100 ATS compatibility"),
    int("market_competitiveness", 70, "0-100"),
    int("professional_presentation", 80, "0-100 overall presentation"),
    text("experience_level", "Mid-level", "Junior, Mid-level, or Senior"),
    list(
        "top_strengths",
        &[
            "Strong technical skills",
            "Relevant experience",
            "Good education background",
        ],
        "3-5 key strengths",
    ),
    records("priority_improvements", PRIORITY_ITEM, "2-4 priority improvement areas"),
];

const CONTENT_QUALITY_DETAILS: &[Field] = &[
    int("clarity_and_impact", 70, "0-100"),
    int("achievement_quantification", 65, "0-100"),
    int("keyword_optimization", 80, "0-100"),
    int("professional_language", 85, "0-100"),
];

const STRUCTURE_DETAILS: &[Field] = &[
    int("organization", 85, "0-100"),
    int("readability", 75, "0-100"),
    int("consistency", 80, "0-100"),
    int("visual_appeal", 70, "0-100"),
];

const FORMAT_COMPATIBILITY_DETAILS: &[Field] = &[
    int("format_compatibility", 75, "0-100"),
    int("keyword_density", 65, "0-100"),
    int("section_headers", 80, "0-100"),
    int("file_structure", 70, "0-100"),
];

const COMPLETENESS_DETAILS: &[Field] = &[
    int("essential_sections", 90, "0-100"),
    int("contact_information", 95, "0-100"),
    int("work_history", 80, "0-100"),
    int("skills_coverage", 75, "0-100"),
];

const CONTENT_QUALITY: &[Field] = &[
    int("score", 75, "0-100"),
    object("details", CONTENT_QUALITY_DETAILS, ""),
];

const STRUCTURE_AND_FORMAT: &[Field] = &[
    int("score", 80, "0-100"),
    object("details", STRUCTURE_DETAILS, ""),
];

const STANDALONE_ATS_COMPATIBILITY: &[Field] = &[
    int("score", 70, "0-100"),
    object("details", FORMAT_COMPATIBILITY_DETAILS, ""),
];

const COMPLETENESS: &[Field] = &[
    int("score", 85, "0-100"),
    object("details", COMPLETENESS_DETAILS, ""),
];

const DETAILED_ANALYSIS: &[Field] = &[
    object("content_quality", CONTENT_QUALITY, ""),
    object("structure_and_format", STRUCTURE_AND_FORMAT, ""),
    object("ats_compatibility", STANDALONE_ATS_COMPATIBILITY, ""),
    object("completeness", COMPLETENESS, ""),
];

const CONTACT_SECTION: &[Field] = &[
    int("score", 95, "0-100"),
    text(
        "feedback",
        "Contact information is complete and professional",
        "",
    ),
    list(
        "suggestions",
        &[
            "Consider adding LinkedIn profile",
            "Ensure phone number is formatted consistently",
        ],
        "",
    ),
];

const SUMMARY_SECTION: &[Field] = &[
    int("score", 75, "0-100"),
    text(
        "feedback",
        "Summary provides good overview but could be more impactful",
        "",
    ),
    list(
        "suggestions",
        &[
            "Add quantified achievements",
            "Make it more targeted and compelling",
        ],
        "",
    ),
];

const EXPERIENCE_SECTION: &[Field] = &[
    int("score", 70, "0-100"),
    text(
        "feedback",
        "Experience shows progression but lacks quantified achievements",
        "",
    ),
    list(
        "suggestions",
        &[
            "Add metrics and numbers",
            "Use stronger action verbs",
            "Focus on achievements vs responsibilities",
        ],
        "",
    ),
];

const EDUCATION_SECTION: &[Field] = &[
    int("score", 85, "0-100"),
    text(
        "feedback",
        "Education section is well-formatted and relevant",
        "",
    ),
    list(
        "suggestions",
        &["Consider adding relevant coursework", "Include GPA if strong"],
        "",
    ),
];

const SKILLS_SECTION: &[Field] = &[
    int("score", 65, "0-100"),
    text(
        "feedback",
        "Skills section needs better organization and more current technologies",
        "",
    ),
    list(
        "suggestions",
        &[
            "Organize by category",
            "Add trending technologies",
            "Remove outdated skills",
        ],
        "",
    ),
];

const PROJECTS_SECTION: &[Field] = &[
    int("score", 70, "0-100"),
    text(
        "feedback",
        "Projects demonstrate skills but need more detail",
        "",
    ),
    list(
        "suggestions",
        &[
            "Add more technical details",
            "Include project outcomes",
            "Highlight technologies used",
        ],
        "",
    ),
];

const CERTIFICATIONS_SECTION: &[Field] = &[
    int("score", 80, "0-100"),
    text("feedback", "Certifications are relevant and current", ""),
    list(
        "suggestions",
        &["Add expiration dates", "Include certification numbers"],
        "",
    ),
];

const SECTION_ANALYSIS: &[Field] = &[
    object("contact_information", CONTACT_SECTION, ""),
    object("professional_summary", SUMMARY_SECTION, ""),
    object("work_experience", EXPERIENCE_SECTION, ""),
    object("education", EDUCATION_SECTION, ""),
    object("skills", SKILLS_SECTION, ""),
    object("projects", PROJECTS_SECTION, ""),
    object("certifications", CERTIFICATIONS_SECTION, ""),
];

const STANDALONE_ATS_ANALYSIS: &[Field] = &[
    int("score", 75, "0-100"),
    list(
        "strengths",
        &[
            "Standard section headers",
            "Good keyword usage",
            "Clean formatting",
        ],
        "",
    ),
    list(
        "issues",
        &["Some complex formatting", "Missing key industry terms"],
        "",
    ),
    list(
        "recommendations",
        &[
            "Use more standard fonts and formatting",
            "Add more industry-specific keywords",
            "Ensure consistent heading styles",
        ],
        "",
    ),
];

const STANDALONE_INDUSTRY_INSIGHTS: &[Field] = &[
    list(
        "current_trends",
        &[
            "Cloud computing adoption",
            "AI/ML integration",
            "Remote work capabilities",
        ],
        "",
    ),
    list(
        "skill_recommendations",
        &[
            "Cloud platforms (AWS, Azure)",
            "DevOps tools",
            "Modern frameworks",
        ],
        "",
    ),
    text(
        "market_positioning",
        "Candidate shows solid foundation but needs to modernize skills portfolio",
        "",
    ),
];

const ACTIONABLE_RECOMMENDATION: &[Field] = &[
    text("category", "Content", "Content, Skills, Format, ..."),
    text("priority", "High", "High, Medium, or Low"),
    text(
        "action",
        "Add quantified achievements to work experience",
        "",
    ),
    text(
        "impact",
        "Significantly improves credibility and demonstrates value",
        "expected effect of the action",
    ),
];

pub static STANDALONE_ANALYSIS: &[Field] = &[
    int("overall_score", 75, "overall resume quality score 0-100"),
    object("summary_insights", STANDALONE_SUMMARY, ""),
    object("detailed_analysis", DETAILED_ANALYSIS, ""),
    object("section_analysis", SECTION_ANALYSIS, "one entry per resume section"),
    list(
        "strengths",
        &[
            "Clear professional progression in experience",
            "Strong educational background",
        ],
        "",
    ),
    list(
        "improvement_areas",
        &[
            "Lack of quantified achievements and metrics",
            "Skills section organization could be improved",
        ],
        "",
    ),
    object("ats_analysis", STANDALONE_ATS_ANALYSIS, ""),
    object("industry_insights", STANDALONE_INDUSTRY_INSIGHTS, ""),
    records(
        "actionable_recommendations",
        ACTIONABLE_RECOMMENDATION,
        "ordered by priority",
    ),
];

// ────────────────────────────────────────────────────────────────────────────
// Section improvement (rewrite of one resume section)
// ────────────────────────────────────────────────────────────────────────────

const IMPROVEMENT_MADE: &[Field] = &[
    text("category", "Content", "Content, Structure, Keywords, Impact, ..."),
    text("change", "Description of what was changed", ""),
    text("reason", "Why this change improves the section", ""),
];

const SECTION_ANALYSIS_NOTES: &[Field] = &[
    list(
        "original_strengths",
        &["Strength 1 of original text", "Strength 2"],
        "",
    ),
    list(
        "original_weaknesses",
        &["Weakness 1 of original text", "Weakness 2"],
        "",
    ),
    records("improvements_made", IMPROVEMENT_MADE, ""),
];

const ATS_OPTIMIZATION: &[Field] = &[
    int("keyword_density", 75, "0-100"),
    list(
        "suggested_keywords",
        &["keyword1", "keyword2", "keyword3"],
        "",
    ),
    int("formatting_score", 80, "0-100"),
];

const ALTERNATIVE: &[Field] = &[
    text("version", "Professional Version", "label for this variant"),
    text("text", "Alternative version of the improved text", ""),
];

pub static SECTION_IMPROVEMENT: &[Field] = &[
    text(
        "improved_text",
        "The completely rewritten and improved version of the section text",
        "",
    ),
    int(
        "improvement_score",
        85,
        "0-100, how much improvement was made",
    ),
    list(
        "key_improvements",
        &[
            "Specific improvement 1 made to the text",
            "Specific improvement 2 made to the text",
        ],
        "",
    ),
    object("analysis", SECTION_ANALYSIS_NOTES, ""),
    list(
        "formatting_suggestions",
        &["Formatting suggestion 1", "Formatting suggestion 2"],
        "",
    ),
    object("ats_optimization", ATS_OPTIMIZATION, ""),
    records("alternatives", ALTERNATIVE, "two or more alternative versions"),
    list(
        "tips",
        &[
            "Additional tip 1 for this section type",
            "Additional tip 2 for this section type",
        ],
        "",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL_KINDS: [TaskKind; 3] = [
        TaskKind::ComparativeAnalysis,
        TaskKind::StandaloneAnalysis,
        TaskKind::SectionImprovement,
    ];

    fn assert_unique_names(fields: &[Field], path: &str) {
        let mut seen = HashSet::new();
        for field in fields {
            assert!(
                seen.insert(field.name),
                "duplicate field {path}.{}",
                field.name
            );
            if let Shape::Object(children) | Shape::ObjectList(children) = field.shape {
                assert_unique_names(children, &format!("{path}.{}", field.name));
            }
        }
    }

    #[test]
    fn test_field_names_are_unique_per_level() {
        for kind in ALL_KINDS {
            assert_unique_names(kind.schema(), &kind.to_string());
        }
    }

    #[test]
    fn test_no_schema_reserves_the_status_field() {
        for kind in ALL_KINDS {
            assert!(kind.schema().iter().all(|f| f.name != "status"));
        }
    }

    #[test]
    fn test_headline_field_is_a_top_level_integer() {
        for kind in ALL_KINDS {
            let headline = kind
                .schema()
                .iter()
                .find(|f| f.name == kind.headline_field())
                .expect("headline field must exist");
            assert!(matches!(headline.shape, Shape::Integer { .. }));
        }
    }

    #[test]
    fn test_object_default_recurses_into_nested_documents() {
        let defaults = default_document(STANDALONE_ANALYSIS);
        let value = Value::Object(defaults);
        assert_eq!(
            value.pointer("/detailed_analysis/content_quality/details/clarity_and_impact"),
            Some(&Value::from(0))
        );
        assert_eq!(
            value.pointer("/summary_insights/overall_grade"),
            Some(&Value::from("N/A"))
        );
        assert_eq!(value.pointer("/strengths"), Some(&Value::Array(vec![])));
    }

    #[test]
    fn test_list_of_objects_defaults_to_empty_but_example_has_one_item() {
        let field = Field {
            name: "alternatives",
            shape: Shape::ObjectList(ALTERNATIVE),
            hint: "",
        };
        assert_eq!(field.shape.default_value(), Value::Array(vec![]));
        let example = field.shape.example_value();
        let items = example.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["version"], "Professional Version");
    }

    #[test]
    fn test_comparative_boolean_defaults_to_false() {
        let value = Value::Object(default_document(COMPARATIVE_ANALYSIS));
        assert_eq!(
            value.pointer("/summary_insights/experience_level/match"),
            Some(&Value::Bool(false))
        );
    }

    #[test]
    fn test_task_kind_display_is_human_readable() {
        assert_eq!(TaskKind::SectionImprovement.to_string(), "section improvement");
    }
}
