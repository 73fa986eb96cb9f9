//! Format scorer — structural completeness checks against a 20-point budget.

use crate::ats::result::{
    AtsIssue, IssueLocator, ProfileField, SectionKind, Severity, FORMAT_MAX,
};
use crate::models::resume::{is_blank, ResumeData};

/// Bullets shorter than this read as fragments to an ATS parser.
pub const BULLET_MIN_WORDS: usize = 8;
/// Bullets longer than this get truncated or mis-parsed. Both bounds are
/// inclusive: exactly 8 or exactly 24 words passes.
pub const BULLET_MAX_WORDS: usize = 24;

/// Scores structural completeness: contact fields, section presence, bullet
/// length bounds, and start dates. Starts at 20, deducts fixed weights,
/// floors at 0. Returns the score and one issue per deduction.
pub fn score_format(resume: &ResumeData) -> (f64, Vec<AtsIssue>) {
    let mut issues = Vec::new();
    let mut score = FORMAT_MAX;

    // Contact info
    if resume.profile.email.trim().is_empty() {
        score -= 2.0;
        issues.push(AtsIssue {
            id: "missing-email".to_string(),
            severity: Severity::High,
            locator: IssueLocator::Profile {
                field: ProfileField::Email,
            },
            issue: "Missing email address".to_string(),
            why_it_matters: "ATS systems require contact information to process applications"
                .to_string(),
            suggestion: "Add your professional email address".to_string(),
        });
    }
    if is_blank(&resume.profile.phone) {
        score -= 1.0;
        issues.push(AtsIssue {
            id: "missing-phone".to_string(),
            severity: Severity::Med,
            locator: IssueLocator::Profile {
                field: ProfileField::Phone,
            },
            issue: "Missing phone number".to_string(),
            why_it_matters: "Recruiters need multiple ways to contact you".to_string(),
            suggestion: "Add your phone number".to_string(),
        });
    }
    if is_blank(&resume.profile.location) {
        score -= 1.0;
        issues.push(AtsIssue {
            id: "missing-location".to_string(),
            severity: Severity::Low,
            locator: IssueLocator::Profile {
                field: ProfileField::Location,
            },
            issue: "Missing location".to_string(),
            why_it_matters: "Location helps with local job matching".to_string(),
            suggestion: "Add your city and state".to_string(),
        });
    }

    // Section presence
    if resume.experience.is_empty() {
        score -= 2.0;
        issues.push(AtsIssue {
            id: "missing-experience".to_string(),
            severity: Severity::High,
            locator: IssueLocator::Section {
                section: SectionKind::Experience,
            },
            issue: "No work experience listed".to_string(),
            why_it_matters: "Experience section is critical for most positions".to_string(),
            suggestion: "Add at least one work experience entry".to_string(),
        });
    }
    if resume.skills.is_empty() {
        score -= 1.0;
        issues.push(AtsIssue {
            id: "missing-skills".to_string(),
            severity: Severity::Med,
            locator: IssueLocator::Section {
                section: SectionKind::Skills,
            },
            issue: "No skills listed".to_string(),
            why_it_matters: "Skills help ATS match you to relevant positions".to_string(),
            suggestion: "Add relevant technical and soft skills".to_string(),
        });
    }
    if resume.education.is_empty() {
        score -= 1.0;
        issues.push(AtsIssue {
            id: "missing-education".to_string(),
            severity: Severity::Low,
            locator: IssueLocator::Section {
                section: SectionKind::Education,
            },
            issue: "No education listed".to_string(),
            why_it_matters: "Many positions require educational background".to_string(),
            suggestion: "Add your educational qualifications".to_string(),
        });
    }

    // Bullet length bounds
    for exp in &resume.experience {
        for bullet in &exp.bullets {
            let word_count = bullet.text.split_whitespace().count();
            if word_count < BULLET_MIN_WORDS {
                score -= 1.0;
                issues.push(AtsIssue {
                    id: format!("bullet-too-short-{}-{}", exp.id, bullet.id),
                    severity: Severity::Med,
                    locator: IssueLocator::Bullet {
                        experience_id: exp.id.clone(),
                        bullet_id: bullet.id.clone(),
                    },
                    issue: "Bullet point too short".to_string(),
                    why_it_matters: "Short bullets lack detail for ATS keyword matching"
                        .to_string(),
                    suggestion: format!(
                        "Expand this bullet point (currently {word_count} words, aim for {BULLET_MIN_WORDS}-{BULLET_MAX_WORDS})"
                    ),
                });
            } else if word_count > BULLET_MAX_WORDS {
                score -= 0.5;
                issues.push(AtsIssue {
                    id: format!("bullet-too-long-{}-{}", exp.id, bullet.id),
                    severity: Severity::Low,
                    locator: IssueLocator::Bullet {
                        experience_id: exp.id.clone(),
                        bullet_id: bullet.id.clone(),
                    },
                    issue: "Bullet point too long".to_string(),
                    why_it_matters: "Long bullets are harder for ATS to parse effectively"
                        .to_string(),
                    suggestion: format!(
                        "Shorten this bullet point (currently {word_count} words, aim for {BULLET_MIN_WORDS}-{BULLET_MAX_WORDS})"
                    ),
                });
            }
        }
    }

    // Start dates
    for exp in &resume.experience {
        if exp.start.trim().is_empty() {
            score -= 1.0;
            issues.push(AtsIssue {
                id: format!("missing-start-date-{}", exp.id),
                severity: Severity::Med,
                locator: IssueLocator::Experience {
                    experience_id: exp.id.clone(),
                },
                issue: "Missing start date".to_string(),
                why_it_matters: "ATS systems use dates to verify work history".to_string(),
                suggestion: "Add the start date for this position".to_string(),
            });
        }
    }

    (score.max(0.0), issues)
}
