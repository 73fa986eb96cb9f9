//! Relevance scorer — keyword overlap between the resume and a job
//! description, against a 40-point budget.

use crate::ats::keywords::extract_keywords;
use crate::ats::result::{AtsIssue, IssueLocator, Severity, RELEVANCE_MAX};
use crate::ats::text::extract_text;
use crate::models::resume::ResumeData;

/// Below this score the keyword overlap is weak enough to flag.
const LOW_MATCH_THRESHOLD: f64 = 20.0;
/// How many missing keywords the low-match suggestion names.
const SUGGESTION_KEYWORDS: usize = 5;
/// How many missing keywords are returned for display.
const DISPLAY_KEYWORDS: usize = 10;

#[derive(Debug, Clone)]
pub struct RelevanceScore {
    pub score: f64,
    pub issues: Vec<AtsIssue>,
    pub missing_keywords: Vec<String>,
}

/// Intersects job-description keywords with the flattened resume text.
/// Score is `round(40 × match_rate)`; an empty job description scores 0 and
/// emits no issue (there is nothing to match against).
pub fn score_relevance(resume: &ResumeData, job_text: &str) -> RelevanceScore {
    let job_keywords = extract_keywords(job_text);
    let resume_text = extract_text(resume);

    let mut matched = 0usize;
    let mut missing_keywords: Vec<String> = Vec::new();
    for keyword in &job_keywords {
        if resume_text.contains(keyword.as_str()) {
            matched += 1;
        } else {
            missing_keywords.push(keyword.clone());
        }
    }

    let match_rate = if job_keywords.is_empty() {
        0.0
    } else {
        matched as f64 / job_keywords.len() as f64
    };
    let score = (match_rate * RELEVANCE_MAX).round();

    let mut issues = Vec::new();
    // Guard on keyword presence: an empty job description must not produce a
    // low-keyword-match issue.
    if !job_keywords.is_empty() && score < LOW_MATCH_THRESHOLD {
        let named: Vec<&str> = missing_keywords
            .iter()
            .take(SUGGESTION_KEYWORDS)
            .map(String::as_str)
            .collect();
        issues.push(AtsIssue {
            id: "low-keyword-match".to_string(),
            severity: Severity::High,
            locator: IssueLocator::General,
            issue: "Low keyword relevance to job description".to_string(),
            why_it_matters: "ATS systems prioritize resumes with relevant keywords".to_string(),
            suggestion: format!(
                "Add more relevant keywords from the job description: {}",
                named.join(", ")
            ),
        });
    }

    missing_keywords.truncate(DISPLAY_KEYWORDS);
    RelevanceScore {
        score,
        issues,
        missing_keywords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Profile, Skill};

    fn resume_with_skills(names: &[&str]) -> ResumeData {
        ResumeData {
            profile: Profile {
                full_name: "Jordan Rivera".to_string(),
                email: "jordan@example.com".to_string(),
                ..Default::default()
            },
            skills: names
                .iter()
                .enumerate()
                .map(|(i, n)| Skill {
                    id: format!("s{i}"),
                    name: n.to_string(),
                    level: None,
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_job_text_scores_zero_without_issue() {
        let result = score_relevance(&resume_with_skills(&["React"]), "");
        assert_eq!(result.score, 0.0);
        assert!(result.issues.is_empty());
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn test_full_match_scores_full_budget() {
        let resume = resume_with_skills(&["React", "TypeScript"]);
        let result = score_relevance(&resume, "react typescript react typescript");
        assert_eq!(result.score, RELEVANCE_MAX);
        assert!(result.issues.is_empty());
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn test_half_match_rounds_to_twenty() {
        let resume = resume_with_skills(&["React"]);
        let result = score_relevance(&resume, "react kubernetes");
        assert_eq!(result.score, 20.0);
        // Exactly 20 is not below the threshold.
        assert!(result.issues.is_empty());
        assert_eq!(result.missing_keywords, vec!["kubernetes".to_string()]);
    }

    #[test]
    fn test_no_overlap_emits_high_severity_issue() {
        let resume = resume_with_skills(&["React"]);
        let result = score_relevance(&resume, "kubernetes terraform golang");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.issues.len(), 1);
        let issue = &result.issues[0];
        assert_eq!(issue.id, "low-keyword-match");
        assert_eq!(issue.severity, Severity::High);
        assert_eq!(issue.locator, IssueLocator::General);
        assert!(issue.suggestion.contains("kubernetes"));
    }

    #[test]
    fn test_suggestion_names_at_most_five_keywords() {
        let result = score_relevance(
            &resume_with_skills(&[]),
            "kubernetes terraform golang kafka redis postgres elasticsearch",
        );
        let suggestion = &result.issues[0].suggestion;
        let named = suggestion.split(": ").nth(1).unwrap();
        assert_eq!(named.split(", ").count(), 5, "got: {suggestion}");
    }

    #[test]
    fn test_missing_keywords_capped_at_ten() {
        let jd = "alpha bravo charlie delta echo foxtrot golf hotel india juliett kilo lima";
        let result = score_relevance(&resume_with_skills(&[]), jd);
        assert_eq!(result.missing_keywords.len(), 10);
    }

    #[test]
    fn test_match_is_substring_over_flattened_text() {
        // "typescript" appears inside the skill name, not as a standalone word.
        let resume = resume_with_skills(&["TypeScript/React tooling"]);
        let result = score_relevance(&resume, "typescript typescript typescript");
        assert_eq!(result.score, RELEVANCE_MAX);
    }
}
