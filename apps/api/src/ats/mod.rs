// ATS scoring engine.
// Implements: text extraction, keyword extraction, format/content/relevance
// scoring, and the composed evaluator. Pure functions over in-memory data —
// no I/O, no shared state, no failure modes on well-typed input.

pub mod content;
pub mod format;
pub mod handlers;
pub mod keywords;
pub mod relevance;
pub mod result;
pub mod text;

use crate::models::resume::ResumeData;

pub use result::{AtsIssue, AtsResult, Breakdown, IssueLocator, Severity};

/// Evaluates a resume against a job description.
///
/// Runs the three scorers independently and merges their output; issues are
/// concatenated in format → content → relevance order. Deterministic and
/// idempotent: identical inputs always yield a structurally identical result.
pub fn evaluate(resume: &ResumeData, job_text: &str) -> AtsResult {
    let (format_score, format_issues) = format::score_format(resume);
    let (content_score, content_issues) = content::score_content(resume);
    let relevance = relevance::score_relevance(resume, job_text);

    let breakdown = Breakdown {
        format: format_score,
        content: content_score,
        relevance: relevance.score,
    };

    let mut issues = format_issues;
    issues.extend(content_issues);
    issues.extend(relevance.issues);

    AtsResult {
        total: breakdown.sum(),
        breakdown,
        missing_keywords: relevance.missing_keywords,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::result::{CONTENT_MAX, FORMAT_MAX, RELEVANCE_MAX};
    use crate::models::resume::{Bullet, Education, Experience, Profile, Skill};

    /// A realistic, mostly-clean resume used across evaluator tests.
    fn sample_resume() -> ResumeData {
        ResumeData {
            profile: Profile {
                full_name: "Jordan Rivera".to_string(),
                email: "jordan.rivera@example.com".to_string(),
                phone: Some("+1 (555) 987-6543".to_string()),
                location: Some("Austin, TX".to_string()),
                headline: Some("React/TypeScript Engineer".to_string()),
                ..Default::default()
            },
            experience: vec![
                Experience {
                    id: "exp-1".to_string(),
                    role: "Frontend Engineer".to_string(),
                    company: "Acme Analytics".to_string(),
                    start: "2022-02".to_string(),
                    end: None,
                    bullets: vec![
                        Bullet {
                            id: "b1".to_string(),
                            text: "Builds reusable TypeScript component libraries cutting UI bugs by 35%"
                                .to_string(),
                        },
                        Bullet {
                            id: "b2".to_string(),
                            text: "Improves TTI by 40% via route-based code splitting and caching"
                                .to_string(),
                        },
                    ],
                },
                Experience {
                    id: "exp-2".to_string(),
                    role: "React Developer".to_string(),
                    company: "Bright Labs".to_string(),
                    start: "2020-01".to_string(),
                    end: Some("2022-01".to_string()),
                    bullets: vec![Bullet {
                        id: "b3".to_string(),
                        text: "Delivered dashboards with React Query boosting retention by 12%"
                            .to_string(),
                    }],
                },
            ],
            education: vec![Education {
                id: "edu-1".to_string(),
                school: "UT Austin".to_string(),
                degree: "BS Computer Science".to_string(),
                start: "2014".to_string(),
                end: Some("2018".to_string()),
            }],
            skills: vec![
                Skill {
                    id: "s1".to_string(),
                    name: "React".to_string(),
                    level: None,
                },
                Skill {
                    id: "s2".to_string(),
                    name: "TypeScript".to_string(),
                    level: None,
                },
            ],
            ..Default::default()
        }
    }

    const SAMPLE_JD: &str = "We are seeking a React TypeScript engineer to build performant \
                             accessible web apps with modern tooling and testing frameworks.";

    #[test]
    fn test_total_equals_breakdown_sum() {
        let result = evaluate(&sample_resume(), SAMPLE_JD);
        let sum = result.breakdown.sum();
        assert!(
            (result.total - sum).abs() < f64::EPSILON,
            "total {} != sum {}",
            result.total,
            sum
        );
    }

    #[test]
    fn test_breakdown_components_within_bounds() {
        for (resume, jd) in [
            (sample_resume(), SAMPLE_JD),
            (ResumeData::default(), ""),
            (ResumeData::default(), SAMPLE_JD),
        ] {
            let result = evaluate(&resume, jd);
            assert!(result.breakdown.in_bounds(), "{:?}", result.breakdown);
            assert!((0.0..=FORMAT_MAX + CONTENT_MAX + RELEVANCE_MAX).contains(&result.total));
        }
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let resume = sample_resume();
        let first = evaluate(&resume, SAMPLE_JD);
        let second = evaluate(&resume, SAMPLE_JD);
        assert_eq!(first, second);
    }

    #[test]
    fn test_minimal_resume_with_empty_jd_is_format_only() {
        // Only name and email set: no bullets (content 0), no job text
        // (relevance 0), so the total is exactly the format score.
        let resume = ResumeData {
            profile: Profile {
                full_name: "Jordan Rivera".to_string(),
                email: "jordan@example.com".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = evaluate(&resume, "");

        // 20 - 1 (phone) - 1 (location) - 2 (experience) - 1 (skills) - 1 (education)
        assert_eq!(result.breakdown.format, 14.0);
        assert_eq!(result.breakdown.content, 0.0);
        assert_eq!(result.breakdown.relevance, 0.0);
        assert_eq!(result.total, 14.0);
        assert!(!result.issues.iter().any(|i| i.id == "missing-email"));
        assert!(!result.issues.iter().any(|i| i.id == "low-keyword-match"));
    }

    #[test]
    fn test_empty_jd_never_emits_keyword_issue() {
        let result = evaluate(&sample_resume(), "");
        assert_eq!(result.breakdown.relevance, 0.0);
        assert!(!result.issues.iter().any(|i| i.id == "low-keyword-match"));
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn test_issue_order_is_format_then_content_then_relevance() {
        let resume = ResumeData {
            experience: vec![Experience {
                id: "exp-1".to_string(),
                role: "Engineer".to_string(),
                company: "Acme".to_string(),
                start: String::new(),
                end: Some("2020-01".to_string()),
                bullets: vec![Bullet {
                    id: "b1".to_string(),
                    text: "Ran things".to_string(),
                }],
            }],
            ..Default::default()
        };
        let result = evaluate(&resume, "kubernetes terraform golang");

        let first_relevance = result
            .issues
            .iter()
            .position(|i| i.id == "low-keyword-match")
            .expect("relevance issue present");
        let last_format = result
            .issues
            .iter()
            .rposition(|i| i.id.starts_with("missing-") || i.id.starts_with("bullet-"))
            .expect("format issues present");
        let first_content = result
            .issues
            .iter()
            .position(|i| i.id.starts_with("weak-") || i.id.starts_with("no-metrics"))
            .expect("content issues present");
        assert!(last_format < first_content);
        assert!(first_content < first_relevance);
    }

    #[test]
    fn test_sample_resume_scores_well_against_matching_jd() {
        let result = evaluate(&sample_resume(), SAMPLE_JD);
        assert_eq!(result.breakdown.format, FORMAT_MAX);
        assert!(
            result.total >= 60.0,
            "well-formed matching resume should score high, got {} ({:?})",
            result.total,
            result.breakdown
        );
    }
}
