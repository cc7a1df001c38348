//! Prompt builder for the review tasks.
//!
//! The JSON contract in every prompt is rendered from `schema`, so the fields the
//! model is asked for are exactly the fields the repairer guarantees.

use tracing::warn;

use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, REVIEWER_PERSONA, SCHEMA_LEAD};
use crate::review::request::{
    AnalysisMode, AnalysisRequest, SectionImprovementRequest, SectionKind, Task,
};
use crate::review::schema::{Field, Shape, TaskKind};

/// Framing for one kind of resume section.
#[derive(Debug, PartialEq, Eq)]
pub struct SectionGuidance {
    pub title: &'static str,
    pub context: &'static str,
    pub focus: &'static str,
}

const SUMMARY_GUIDANCE: SectionGuidance = SectionGuidance {
    title: "Professional Summary",
    context: "This is a professional summary/objective section that should be compelling, concise, \
        and tailored to showcase the candidate's value proposition.",
    focus: "Make it more impactful, quantify achievements, highlight key strengths, \
        and ensure it's ATS-friendly.",
};

const EXPERIENCE_GUIDANCE: SectionGuidance = SectionGuidance {
    title: "Work Experience",
    context: "This is a work experience section that should showcase achievements, \
        responsibilities, and impact in previous roles.",
    focus: "Use action verbs, quantify achievements with metrics, show progression, \
        and highlight relevant accomplishments.",
};

const SKILLS_GUIDANCE: SectionGuidance = SectionGuidance {
    title: "Skills Section",
    context: "This is a skills section that should list technical and soft skills relevant \
        to the target role.",
    focus: "Organize skills by category, prioritize relevant skills, include trending \
        technologies, and ensure keyword optimization.",
};

const EDUCATION_GUIDANCE: SectionGuidance = SectionGuidance {
    title: "Education",
    context: "This is an education section that should highlight academic achievements, \
        relevant coursework, and certifications.",
    focus: "Highlight relevant coursework, academic achievements, certifications, \
        and any honors or distinctions.",
};

const PROJECTS_GUIDANCE: SectionGuidance = SectionGuidance {
    title: "Projects",
    context: "This is a projects section that should showcase personal or professional \
        projects demonstrating skills and experience.",
    focus: "Highlight technologies used, quantify impact, show problem-solving abilities, \
        and demonstrate relevant skills.",
};

/// Looks up the guidance bundle for a section; unknown kinds get the summary bundle.
pub fn guidance(kind: &SectionKind) -> &'static SectionGuidance {
    match kind {
        SectionKind::Summary => &SUMMARY_GUIDANCE,
        SectionKind::Experience => &EXPERIENCE_GUIDANCE,
        SectionKind::Skills => &SKILLS_GUIDANCE,
        SectionKind::Education => &EDUCATION_GUIDANCE,
        SectionKind::Projects => &PROJECTS_GUIDANCE,
        SectionKind::Other(name) => {
            warn!("Unknown section kind {name:?}, falling back to summary guidance");
            &SUMMARY_GUIDANCE
        }
    }
}

const STANDALONE_GUIDELINES: &str = "\
Guidelines for analysis:
1. Focus on overall resume quality and effectiveness
2. Evaluate ATS compatibility and modern hiring practices
3. Assess market competitiveness in current job market
4. Provide specific, actionable feedback
5. Consider industry standards and best practices
6. Evaluate both content and presentation
7. Identify gaps in skills or experience presentation
8. Classify the resume's experience level as Junior, Mid-level, or Senior";

const SECTION_GUIDELINES: &str = "\
Guidelines for improvement:
1. Make the text more impactful and results-oriented
2. Use strong action verbs and quantify achievements where possible
3. Optimize for ATS (Applicant Tracking Systems) with relevant keywords
4. Ensure the tone is professional and appropriate
5. Make it concise but comprehensive
6. Focus on value proposition and unique selling points
7. Use industry-standard terminology and best practices";

/// Builds the full prompt for a task. Inputs are embedded verbatim.
pub fn build(task: &Task) -> String {
    match task {
        Task::Analysis(request) => match request.mode() {
            AnalysisMode::Comparative => comparative_prompt(request),
            AnalysisMode::Standalone => standalone_prompt(request),
        },
        Task::SectionImprovement(request) => section_prompt(request),
    }
}

fn comparative_prompt(request: &AnalysisRequest) -> String {
    let schema = render_schema(TaskKind::ComparativeAnalysis.schema());
    let resume = request.subject_text();
    let job_description = request.reference_text();
    format!(
        "{REVIEWER_PERSONA} Analyze the following resume against the provided job description.

RESUME:
{resume}

JOB DESCRIPTION:
{job_description}

Provide a comprehensive analysis {SCHEMA_LEAD}

{schema}

{JSON_ONLY_INSTRUCTION}"
    )
}

fn standalone_prompt(request: &AnalysisRequest) -> String {
    let schema = render_schema(TaskKind::StandaloneAnalysis.schema());
    let resume = request.subject_text();
    format!(
        "{REVIEWER_PERSONA} Analyze the following resume to provide comprehensive overall insights \
about its quality, effectiveness, and areas for improvement.

RESUME:
{resume}

Provide a comprehensive overall analysis {SCHEMA_LEAD}

{schema}

{STANDALONE_GUIDELINES}

{JSON_ONLY_INSTRUCTION}"
    )
}

fn section_prompt(request: &SectionImprovementRequest) -> String {
    let schema = render_schema(TaskKind::SectionImprovement.schema());
    let SectionGuidance {
        title,
        context,
        focus,
    } = guidance(request.section_kind());
    let original_text = request.original_text();
    format!(
        "You are an expert resume writer and career coach. \
I need you to improve a {title} section of a resume.

SECTION TYPE: {title}
CONTEXT: {context}
IMPROVEMENT FOCUS: {focus}

ORIGINAL TEXT:
{original_text}

Please provide comprehensive improvement suggestions {SCHEMA_LEAD}

{schema}

{SECTION_GUIDELINES}

{JSON_ONLY_INSTRUCTION}"
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Schema rendering
// ────────────────────────────────────────────────────────────────────────────

/// Renders a schema tree as example JSON annotated with `//` type notes.
///
/// Compound fields carry their note on the opening line; scalars after the value.
pub fn render_schema(fields: &[Field]) -> String {
    let mut out = String::new();
    render_object(&mut out, fields, 0, None);
    out
}

fn render_object(out: &mut String, fields: &[Field], depth: usize, note: Option<&str>) {
    out.push('{');
    if let Some(note) = note {
        out.push(' ');
        out.push_str(note);
    }
    out.push('\n');

    for (i, field) in fields.iter().enumerate() {
        let comma = if i + 1 < fields.len() { "," } else { "" };
        let note = note_for(field);
        push_indent(out, depth + 1);
        out.push_str(&format!("\"{}\": ", field.name));

        match field.shape {
            Shape::Object(children) => {
                render_object(out, children, depth + 1, Some(&note));
                out.push_str(&format!("{comma}\n"));
            }
            Shape::ObjectList(children) => {
                out.push_str(&format!("[ {note}\n"));
                push_indent(out, depth + 2);
                render_object(out, children, depth + 2, None);
                out.push('\n');
                push_indent(out, depth + 1);
                out.push_str(&format!("]{comma}\n"));
            }
            scalar => {
                out.push_str(&format!("{}{comma} {note}\n", scalar.example_value()));
            }
        }
    }
    push_indent(out, depth);
    out.push('}');
}

fn note_for(field: &Field) -> String {
    let type_hint = field.shape.type_hint();
    if field.hint.is_empty() {
        format!("// {type_hint}")
    } else {
        format!("// {type_hint}: {}", field.hint)
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::extract::extract;
    use crate::review::schema::example_document;

    const RESUME: &str = "Jane Doe\nSenior Rust Engineer\n- Built {fast} caches";

    fn collect_names(fields: &[Field], names: &mut Vec<&'static str>) {
        for field in fields {
            names.push(field.name);
            if let Shape::Object(children) | Shape::ObjectList(children) = field.shape {
                collect_names(children, names);
            }
        }
    }

    fn section_task(kind: SectionKind) -> Task {
        Task::SectionImprovement(SectionImprovementRequest::new(kind, "I write code.").unwrap())
    }

    #[test]
    fn test_rendered_schema_parses_back_to_examples() {
        for kind in [
            TaskKind::ComparativeAnalysis,
            TaskKind::StandaloneAnalysis,
            TaskKind::SectionImprovement,
        ] {
            let rendered = render_schema(kind.schema());
            let parsed = extract(&rendered).unwrap();
            assert_eq!(parsed, example_document(kind.schema()), "{kind}");
        }
    }

    #[test]
    fn test_rendered_schema_carries_type_hints() {
        let rendered = render_schema(TaskKind::SectionImprovement.schema());
        assert!(rendered.contains("\"improvement_score\": 85, // integer: 0-100"));
        assert!(rendered.contains("\"analysis\": { // object"));
        assert!(rendered.contains("\"alternatives\": [ // array of objects"));
        assert!(rendered.contains("\"tips\": [\"Additional tip 1"));
    }

    #[test]
    fn test_every_schema_field_is_named_in_its_prompt() {
        let tasks = [
            Task::Analysis(AnalysisRequest::comparative(RESUME, "Rust role").unwrap()),
            Task::Analysis(AnalysisRequest::standalone(RESUME).unwrap()),
            section_task(SectionKind::Experience),
        ];
        for task in &tasks {
            let prompt = build(task);
            let mut names = Vec::new();
            collect_names(task.kind().schema(), &mut names);
            for name in names {
                assert!(
                    prompt.contains(&format!("\"{name}\":")),
                    "{} prompt is missing {name}",
                    task.kind()
                );
            }
        }
    }

    #[test]
    fn test_inputs_are_embedded_verbatim() {
        let task = Task::Analysis(
            AnalysisRequest::comparative(RESUME, "Requires {resume} parsing skills").unwrap(),
        );
        let prompt = build(&task);
        assert!(prompt.contains(&format!("RESUME:\n{RESUME}\n")));
        assert!(prompt.contains("JOB DESCRIPTION:\nRequires {resume} parsing skills\n"));
    }

    #[test]
    fn test_every_prompt_demands_json_only_and_all_keys() {
        let task = Task::Analysis(AnalysisRequest::standalone(RESUME).unwrap());
        let prompt = build(&task);
        assert!(prompt.contains("Ensure ALL keys are present"));
        assert!(prompt.contains("Return the JSON object only"));
        assert!(prompt.contains("Guidelines for analysis:"));
        assert!(!prompt.contains("JOB DESCRIPTION:"));
    }

    #[test]
    fn test_section_prompt_uses_kind_guidance() {
        let prompt = build(&section_task(SectionKind::Projects));
        assert!(prompt.contains("SECTION TYPE: Projects"));
        assert!(prompt.contains(PROJECTS_GUIDANCE.focus));
        assert!(prompt.contains("ORIGINAL TEXT:\nI write code.\n"));
    }

    #[test]
    fn test_unknown_section_falls_back_to_summary() {
        let kind = SectionKind::from_name("bogus");
        assert_eq!(guidance(&kind), &SUMMARY_GUIDANCE);

        let prompt = build(&section_task(kind));
        assert!(prompt.contains("SECTION TYPE: Professional Summary"));
        assert!(prompt.contains(SUMMARY_GUIDANCE.context));
    }
}
