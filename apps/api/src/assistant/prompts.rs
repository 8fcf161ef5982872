// Prompt constants for the assistant actions.
// Reuses the system prompts from llm_client::prompts.

/// Character budget for the "role at company" list sent with a summary request.
pub const EXPERIENCE_CONTEXT_BUDGET: usize = 1000;
/// Character budget for each of the job description and CV text in a match request.
pub const MATCH_INPUT_BUDGET: usize = 2000;
/// Character budget for the job description in a tailoring request.
pub const TAILOR_JD_BUDGET: usize = 1500;

/// Context sent with a bullet enhancement when the caller gives none.
pub const DEFAULT_ENHANCE_CONTEXT: &str = "Resume Job Description. Make it result-oriented.";

/// Replace `{job_title}`, `{skills}` and `{experience}` before sending.
pub const SUMMARY_PROMPT_TEMPLATE: &str = "\
Write a professional resume summary (max 3-4 sentences) for a {job_title}.
Highlight these skills: {skills}.
Brief experience context: {experience}.
The tone should be professional and confident.";

/// Replace `{text}` and `{context}` before sending.
pub const ENHANCE_PROMPT_TEMPLATE: &str = "\
Rewrite the following text to be more professional, action-oriented, and impactful for a resume.
Keep it concise and result-driven. Keep any line breaks and bullet characters the original uses.

Original text: \"{text}\"
Context: {context}";

/// Replace `{job_title}` before sending.
pub const SKILLS_PROMPT_TEMPLATE: &str = "\
List 5-7 key technical and soft skills for a {job_title}.

Return a JSON array of strings, for example:
[\"Kubernetes\", \"Stakeholder communication\"]";

/// Replace `{job_description}` and `{cv_text}` before sending.
pub const MATCH_PROMPT_TEMPLATE: &str = r#"You are an ATS (Applicant Tracking System) and career expert.
Analyze the provided CV content against the job description.

Job Description: "{job_description}"
CV Content: "{cv_text}"

Return a JSON object with this EXACT schema (no extra fields):
{
  "score": 72,
  "missingKeywords": ["top 5 missing critical keywords"],
  "improvements": ["3 specific actionable tips"]
}

"score" is a compatibility score from 0 to 100."#;

/// Replace `{job_description}` and `{cv_json}` before sending.
pub const TAILOR_PROMPT_TEMPLATE: &str = r#"You are a resume writing expert. Tailor the CV content to match the job description.
1. Rewrite the summary to align with the job's tone and requirements.
2. Rewrite each experience entry description to emphasize relevant skills.

Job Description: "{job_description}"
Current CV Data: {cv_json}

Return a JSON object with this EXACT schema (no extra fields):
{
  "summary": "the tailored professional summary",
  "experience": [
    {"id": "id of the entry being rewritten", "description": "rewritten description"}
  ]
}

Only use ids that appear in the current CV data."#;

/// Fills `{name}` placeholders in one left-to-right pass.
///
/// Substituted values are never rescanned, so user text that happens to
/// contain `{skills}` or `{job_description}` reaches the service verbatim.
/// Braces that do not name a variable (JSON examples) are kept as-is.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
