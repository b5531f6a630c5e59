// All LLM prompt constants for the analysis endpoints.
// Fixed templates with `{placeholder}` substitution; the builders are pure
// string-in/string-out so they can be tested without a client.

/// ATS report prompt. Replace `{resume_text}` before sending.
/// The model answers in free-form markdown following the embedded skeleton.
pub const ATS_REPORT_PROMPT_TEMPLATE: &str = r#"Act as an expert ATS (Applicant Tracking System) Scanner.
Analyze the following resume text.

Output the response in this EXACT Markdown format:

# 🛡️ ATS Report

## 📊 Match Score: [Score]/100

## ✅ Pros
* [List the resume's top strengths]
* [List specific good keywords found]

## ❌ Cons
* [List formatting errors or missing sections]
* [List missing critical skills]

## 💡 Final Verdict
[One sentence summary]

RESUME TEXT:
{resume_text}"#;

/// Recruiter match prompt. Replace `{resume_text}` and `{job_description}`.
/// Sent with JSON-constrained output; the schema below is what
/// `report::MatchReport` deserializes.
pub const RECRUITER_MATCH_PROMPT_TEMPLATE: &str = r#"Act as a cynical senior technical recruiter. Compare the following resume against the job description.

Return ONLY a JSON object with this EXACT schema (no extra fields, no markdown fences, no text outside the JSON):
{
  "score": 75,
  "tier": "B",
  "summary": "One short, brutal assessment of the match",
  "missing_skills": ["skills the job description requires that the resume does not show"]
}

Rules:
- "score" is an integer from 0 to 100.
- "tier" is exactly one of "S", "A", "B", "C", "F".
- "missing_skills" may be empty if nothing is missing.

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}"#;

/// Builds the ATS report prompt with the extracted resume text embedded verbatim.
pub fn build_ats_report_prompt(resume_text: &str) -> String {
    ATS_REPORT_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}

/// Builds the recruiter match prompt with both inputs embedded verbatim.
pub fn build_recruiter_match_prompt(resume_text: &str, job_description: &str) -> String {
    RECRUITER_MATCH_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description)
}
