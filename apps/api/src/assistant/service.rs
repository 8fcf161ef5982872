//! Assistant operations over the external text service.
//!
//! Every function here only *computes* a proposal from a model snapshot. The
//! handlers merge the proposal into whatever model is current when the reply
//! arrives, so a failed call never touches the model.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};

use crate::assistant::prompts::{
    fill, DEFAULT_ENHANCE_CONTEXT, ENHANCE_PROMPT_TEMPLATE, EXPERIENCE_CONTEXT_BUDGET,
    MATCH_INPUT_BUDGET, MATCH_PROMPT_TEMPLATE, SKILLS_PROMPT_TEMPLATE, SUMMARY_PROMPT_TEMPLATE,
    TAILOR_JD_BUDGET, TAILOR_PROMPT_TEMPLATE,
};
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, PLAIN_TEXT_SYSTEM};
use crate::llm_client::{strip_json_fences, LlmError, TextService};
use crate::models::cv::CvDocument;
use crate::models::edit::DescriptionRewrite;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("Text service call failed: {0}")]
    Service(#[from] LlmError),

    #[error("Malformed text service response: {0}")]
    Malformed(String),

    #[error("{0}")]
    MissingInput(&'static str),
}

/// Job-match analysis. Never merged into the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAnalysis {
    pub score: f64,
    pub missing_keywords: Vec<String>,
    pub improvements: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TailorPayload {
    summary: String,
    experience: Vec<RewritePayload>,
}

#[derive(Debug, Deserialize)]
struct RewritePayload {
    id: String,
    description: String,
}

/// Tailoring proposal: a new summary plus id-keyed description rewrites.
#[derive(Debug, Clone, PartialEq)]
pub struct Tailoring {
    pub summary: String,
    pub rewrites: Vec<DescriptionRewrite>,
}

/// First `max` characters of `text`, never splitting a code point.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn parse_payload<T: DeserializeOwned>(raw: &str) -> Result<T, AssistantError> {
    serde_json::from_str(strip_json_fences(raw)).map_err(|e| {
        warn!("Unparseable text service payload: {e}");
        AssistantError::Malformed(e.to_string())
    })
}

fn require_job_description(job_description: &str) -> Result<&str, AssistantError> {
    let trimmed = job_description.trim();
    if trimmed.is_empty() {
        return Err(AssistantError::MissingInput("A job description is required"));
    }
    Ok(trimmed)
}

/// Drafts a professional summary from the job title, skills and roles.
pub async fn generate_summary(
    service: &dyn TextService,
    doc: &CvDocument,
) -> Result<String, AssistantError> {
    let skills: Vec<&str> = doc.skills.iter().map(|s| s.name.as_str()).collect();
    let experience = doc
        .experience
        .iter()
        .map(|e| format!("{} at {}", e.role, e.company))
        .collect::<Vec<_>>()
        .join(", ");

    let prompt = fill(
        SUMMARY_PROMPT_TEMPLATE,
        &[
            ("job_title", doc.personal_info.job_title.as_str()),
            ("skills", skills.join(", ").as_str()),
            (
                "experience",
                truncate_chars(&experience, EXPERIENCE_CONTEXT_BUDGET),
            ),
        ],
    );

    let reply = service.complete(&prompt, PLAIN_TEXT_SYSTEM).await?;
    let summary = reply.trim();
    if summary.is_empty() {
        return Err(AssistantError::Malformed("empty summary".to_string()));
    }
    Ok(summary.to_string())
}

/// Rewrites one block of résumé text. An empty reply keeps the original.
pub async fn enhance_text(
    service: &dyn TextService,
    text: &str,
    context: Option<&str>,
) -> Result<String, AssistantError> {
    let prompt = fill(
        ENHANCE_PROMPT_TEMPLATE,
        &[
            ("context", context.unwrap_or(DEFAULT_ENHANCE_CONTEXT)),
            ("text", text),
        ],
    );

    let reply = service.complete(&prompt, PLAIN_TEXT_SYSTEM).await?;
    let enhanced = reply.trim();
    if enhanced.is_empty() {
        debug!("Empty enhancement reply, keeping original text");
        return Ok(text.to_string());
    }
    Ok(enhanced.to_string())
}

/// Skill names suggested for a job title.
pub async fn suggest_skills(
    service: &dyn TextService,
    job_title: &str,
) -> Result<Vec<String>, AssistantError> {
    let job_title = job_title.trim();
    if job_title.is_empty() {
        return Err(AssistantError::MissingInput(
            "A job title is required to suggest skills",
        ));
    }

    let prompt = fill(SKILLS_PROMPT_TEMPLATE, &[("job_title", job_title)]);
    let reply = service.complete(&prompt, JSON_ONLY_SYSTEM).await?;
    parse_payload(&reply)
}

/// Plain-text rendering of the CV used as match-analysis input.
pub fn cv_text(doc: &CvDocument) -> String {
    let experience = doc
        .experience
        .iter()
        .map(|e| format!("{} at {}. {}", e.role, e.company, e.description))
        .collect::<Vec<_>>()
        .join("\n");
    let skills = doc
        .skills
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let education = doc
        .education
        .iter()
        .map(|e| format!("{} from {}", e.degree, e.school))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Role: {}\nSummary: {}\nExperience: {experience}\nSkills: {skills}\nEducation: {education}",
        doc.personal_info.job_title, doc.personal_info.summary,
    )
}

/// Scores the CV against a job description.
pub async fn analyze_job_match(
    service: &dyn TextService,
    doc: &CvDocument,
    job_description: &str,
) -> Result<MatchAnalysis, AssistantError> {
    let job_description = require_job_description(job_description)?;
    let cv = cv_text(doc);

    let prompt = fill(
        MATCH_PROMPT_TEMPLATE,
        &[
            ("cv_text", truncate_chars(&cv, MATCH_INPUT_BUDGET)),
            (
                "job_description",
                truncate_chars(job_description, MATCH_INPUT_BUDGET),
            ),
        ],
    );

    let reply = service.complete(&prompt, JSON_ONLY_SYSTEM).await?;
    let analysis: MatchAnalysis = parse_payload(&reply)?;

    if !(0.0..=100.0).contains(&analysis.score) {
        return Err(AssistantError::Malformed(format!(
            "score {} is outside 0-100",
            analysis.score
        )));
    }
    Ok(analysis)
}

/// Proposes a summary and experience rewrites aimed at one job description.
pub async fn tailor(
    service: &dyn TextService,
    doc: &CvDocument,
    job_description: &str,
) -> Result<Tailoring, AssistantError> {
    let job_description = require_job_description(job_description)?;

    let experience: Vec<_> = doc
        .experience
        .iter()
        .map(|e| {
            json!({
                "id": e.id,
                "role": e.role,
                "company": e.company,
                "description": e.description,
            })
        })
        .collect();
    let cv_json = json!({
        "summary": doc.personal_info.summary,
        "experience": experience,
    })
    .to_string();

    let prompt = fill(
        TAILOR_PROMPT_TEMPLATE,
        &[
            ("cv_json", cv_json.as_str()),
            (
                "job_description",
                truncate_chars(job_description, TAILOR_JD_BUDGET),
            ),
        ],
    );

    let reply = service.complete(&prompt, JSON_ONLY_SYSTEM).await?;
    let payload: TailorPayload = parse_payload(&reply)?;

    Ok(Tailoring {
        summary: payload.summary.trim().to_string(),
        rewrites: payload
            .experience
            .into_iter()
            .map(|r| DescriptionRewrite {
                id: r.id,
                description: r.description,
            })
            .collect(),
    })
}
