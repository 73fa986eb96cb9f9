//! Content scorer — bullet writing quality against a 40-point budget.
//!
//! Four rules per bullet: leading action verb, quantified metric, absence of
//! weak phrasing, and tense agreement with the role's current/past status.

use std::sync::LazyLock;

use regex::Regex;

use crate::ats::result::{AtsIssue, IssueLocator, Severity, CONTENT_MAX};
use crate::models::resume::ResumeData;

/// Verbs that make a bullet read as an accomplishment rather than a duty.
const ACTION_VERBS: &[&str] = &[
    "achieved",
    "built",
    "created",
    "developed",
    "established",
    "implemented",
    "improved",
    "increased",
    "led",
    "managed",
    "optimized",
    "reduced",
    "streamlined",
    "delivered",
    "executed",
    "launched",
    "designed",
    "analyzed",
    "collaborated",
    "coordinated",
    "facilitated",
    "mentored",
    "trained",
    "automated",
    "enhanced",
];

/// Phrases that signal passive, duty-style writing.
const WEAK_PHRASES: &[&str] = &[
    "responsible for",
    "helped with",
    "worked on",
    "assisted in",
    "participated in",
    "involved in",
    "duties included",
    "tasks included",
];

/// A standalone number, optionally decimal, optionally suffixed (35%, 10k, 3x).
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d+(\.\d+)?(%|k|m|b|\+|x|\.|,)?\b").expect("hardcoded regex is valid")
});

/// A metric verb followed, anywhere later in the bullet, by a digit.
static METRIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(increased|decreased|improved|reduced|saved|generated|grew|boosted|cut|enhanced|optimized|streamlined).*?\d",
    )
    .expect("hardcoded regex is valid")
});

/// Tense signal read from a bullet's leading verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tense {
    Past,
    Present,
    Unknown,
}

fn leading_tense(first_word: &str) -> Tense {
    if first_word.ends_with("ed") {
        Tense::Past
    } else if first_word.ends_with("ing") || first_word.ends_with('s') {
        Tense::Present
    } else {
        Tense::Unknown
    }
}

/// Scores bullet writing quality. A resume with no bullets at all has earned
/// nothing from this dimension and scores 0. Otherwise starts at 40, deducts
/// per failed rule per bullet, floors at 0.
pub fn score_content(resume: &ResumeData) -> (f64, Vec<AtsIssue>) {
    let mut issues = Vec::new();

    let has_bullets = resume
        .experience
        .iter()
        .any(|exp| !exp.bullets.is_empty());
    if !has_bullets {
        return (0.0, issues);
    }

    let mut score = CONTENT_MAX;

    for exp in &resume.experience {
        let current_role = exp.is_current();
        for bullet in &exp.bullets {
            let text = bullet.text.to_lowercase();
            let first_word = text.split_whitespace().next().unwrap_or("");
            let locator = IssueLocator::Bullet {
                experience_id: exp.id.clone(),
                bullet_id: bullet.id.clone(),
            };

            // Leading action verb
            let has_action_verb = ACTION_VERBS.iter().any(|verb| first_word.contains(verb));
            if !has_action_verb {
                score -= 2.0;
                issues.push(AtsIssue {
                    id: format!("weak-start-{}-{}", exp.id, bullet.id),
                    severity: Severity::Med,
                    locator: locator.clone(),
                    issue: "Bullet doesn't start with action verb".to_string(),
                    why_it_matters:
                        "Action verbs make accomplishments more impactful and ATS-friendly"
                            .to_string(),
                    suggestion: format!(
                        "Start with an action verb like: {}",
                        ACTION_VERBS[..3].join(", ")
                    ),
                });
            }

            // Quantified metric
            let has_numbers = NUMBER_RE.is_match(&text);
            let has_metrics = METRIC_RE.is_match(&text);
            if !has_numbers && !has_metrics {
                score -= 3.0;
                issues.push(AtsIssue {
                    id: format!("no-metrics-{}-{}", exp.id, bullet.id),
                    severity: Severity::High,
                    locator: locator.clone(),
                    issue: "Missing quantified results".to_string(),
                    why_it_matters: "Numbers and metrics demonstrate concrete impact".to_string(),
                    suggestion: "Add specific numbers, percentages, or measurable outcomes"
                        .to_string(),
                });
            }

            // Weak phrasing
            let has_weak_phrase = WEAK_PHRASES.iter().any(|phrase| text.contains(phrase));
            if has_weak_phrase {
                score -= 2.0;
                issues.push(AtsIssue {
                    id: format!("weak-phrase-{}-{}", exp.id, bullet.id),
                    severity: Severity::Med,
                    locator: locator.clone(),
                    issue: "Contains weak phrasing".to_string(),
                    why_it_matters: "Weak phrases make you sound passive rather than results-driven"
                        .to_string(),
                    suggestion: "Replace with strong action verbs and specific accomplishments"
                        .to_string(),
                });
            }

            // Tense agreement with role status
            match (current_role, leading_tense(first_word)) {
                (true, Tense::Past) => {
                    score -= 1.0;
                    issues.push(AtsIssue {
                        id: format!("tense-current-{}-{}", exp.id, bullet.id),
                        severity: Severity::Low,
                        locator: locator.clone(),
                        issue: "Use present tense for current role".to_string(),
                        why_it_matters:
                            "Tense consistency helps ATS and recruiters understand your timeline"
                                .to_string(),
                        suggestion: "Use present tense verbs for your current position"
                            .to_string(),
                    });
                }
                (false, Tense::Present) => {
                    score -= 1.0;
                    issues.push(AtsIssue {
                        id: format!("tense-past-{}-{}", exp.id, bullet.id),
                        severity: Severity::Low,
                        locator: locator.clone(),
                        issue: "Use past tense for previous roles".to_string(),
                        why_it_matters:
                            "Tense consistency helps ATS and recruiters understand your timeline"
                                .to_string(),
                        suggestion: "Use past tense verbs for previous positions".to_string(),
                    });
                }
                _ => {}
            }
        }
    }

    (score.max(0.0), issues)
}
