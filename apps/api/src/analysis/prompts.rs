//! Prompt templates for the AI-backed analysis path.
//!
//! The schema hint pins the exact `AtsResult` wire shape so the reply can be
//! deserialized directly; anything off-schema is rejected and the caller
//! falls back to the deterministic evaluator.

pub const ANALYZE_SYSTEM: &str = r#"You are an ATS resume analyst. Respond with JSON only, no prose, no markdown fences.

AtsResult JSON schema (shape):
{
  "total": number,
  "breakdown": { "format": number, "content": number, "relevance": number },
  "missingKeywords": string[],
  "issues": [
    {
      "id": string,
      "severity": "high" | "med" | "low",
      "locator": one of
        { "kind": "profile", "field": "email" | "phone" | "location" }
        { "kind": "section", "section": "experience" | "skills" | "education" }
        { "kind": "experience", "experienceId": string }
        { "kind": "bullet", "experienceId": string, "bulletId": string }
        { "kind": "general" },
      "issue": string,
      "whyItMatters": string,
      "suggestion": string
    }
  ]
}

Rules:
1) Use the schema exactly. Return JSON only.
2) Compute breakdown scores: format (0-20), content (0-40), relevance (0-40), and total = their sum.
3) Only create issues that match the user's current data. If a field is present, don't mark it as missing.
4) Prefer these issue id patterns so the client can auto-apply fixes: missing-email | missing-phone | missing-location | missing-experience | missing-education | missing-skills | low-keyword-match | bullet-too-short-<expId>-<bulletId> | bullet-too-long-<expId>-<bulletId> | weak-start-<expId>-<bulletId> | no-metrics-<expId>-<bulletId> | weak-phrase-<expId>-<bulletId> | tense-current-<expId>-<bulletId> | tense-past-<expId>-<bulletId> | missing-start-date-<expId>
5) For bullet issues, carry the entry's id and the bullet's id in the locator, never positional indices.
6) Keep suggestions concise and actionable.
7) missingKeywords: pick at most 10, prioritized by the job description if provided.
8) If the job description is empty, set relevance to 0 and omit low-keyword-match."#;

pub const ANALYZE_PROMPT_TEMPLATE: &str = r#"ResumeData JSON:
{resume_json}

Job Description:
{job_text}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_placeholders_present() {
        assert!(ANALYZE_PROMPT_TEMPLATE.contains("{resume_json}"));
        assert!(ANALYZE_PROMPT_TEMPLATE.contains("{job_text}"));
    }

    #[test]
    fn test_system_prompt_pins_breakdown_budgets() {
        assert!(ANALYZE_SYSTEM.contains("format (0-20)"));
        assert!(ANALYZE_SYSTEM.contains("content (0-40)"));
        assert!(ANALYZE_SYSTEM.contains("relevance (0-40)"));
    }
}
