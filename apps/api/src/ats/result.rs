//! Result types shared by all three scorers and the analyzer backends.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum points per breakdown dimension.
pub const FORMAT_MAX: f64 = 20.0;
pub const CONTENT_MAX: f64 = 40.0;
pub const RELEVANCE_MAX: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Med,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileField {
    Email,
    Phone,
    Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Experience,
    Skills,
    Education,
}

/// Locates the part of a `ResumeData` an issue refers to.
///
/// Bullet and experience locators carry the entry's stable string id rather
/// than a positional index, so a fix can still be targeted after the list is
/// reordered or an entry is deleted between analysis and fix application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum IssueLocator {
    /// A single contact field on the profile.
    Profile { field: ProfileField },
    /// A whole top-level section that is empty.
    Section { section: SectionKind },
    /// One experience entry (used for date issues).
    Experience { experience_id: String },
    /// One bullet inside one experience entry.
    Bullet {
        experience_id: String,
        bullet_id: String,
    },
    /// The resume as a whole (keyword relevance).
    General,
}

impl fmt::Display for IssueLocator {
    /// Renders a dotted display path, e.g. `profile.email` or
    /// `experience[exp-1].bullets[b2]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueLocator::Profile { field } => {
                let name = match field {
                    ProfileField::Email => "email",
                    ProfileField::Phone => "phone",
                    ProfileField::Location => "location",
                };
                write!(f, "profile.{name}")
            }
            IssueLocator::Section { section } => {
                let name = match section {
                    SectionKind::Experience => "experience",
                    SectionKind::Skills => "skills",
                    SectionKind::Education => "education",
                };
                write!(f, "{name}")
            }
            IssueLocator::Experience { experience_id } => {
                write!(f, "experience[{experience_id}].start")
            }
            IssueLocator::Bullet {
                experience_id,
                bullet_id,
            } => write!(f, "experience[{experience_id}].bullets[{bullet_id}]"),
            IssueLocator::General => write!(f, "general"),
        }
    }
}

/// One actionable finding. The `id` follows a stable pattern
/// (`missing-email`, `bullet-too-short-<expId>-<bulletId>`, …) so downstream
/// auto-fix tooling can key off it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsIssue {
    pub id: String,
    pub severity: Severity,
    pub locator: IssueLocator,
    pub issue: String,
    pub why_it_matters: String,
    pub suggestion: String,
}

/// The format/content/relevance decomposition of the total score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Breakdown {
    pub format: f64,
    pub content: f64,
    pub relevance: f64,
}

impl Breakdown {
    pub fn sum(&self) -> f64 {
        self.format + self.content + self.relevance
    }

    /// True when every component sits inside its declared [0, max] bound.
    pub fn in_bounds(&self) -> bool {
        (0.0..=FORMAT_MAX).contains(&self.format)
            && (0.0..=CONTENT_MAX).contains(&self.content)
            && (0.0..=RELEVANCE_MAX).contains(&self.relevance)
    }
}

/// A full evaluation snapshot. Recomputed from scratch on every call;
/// never cached or persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsResult {
    pub total: f64,
    pub breakdown: Breakdown,
    pub missing_keywords: Vec<String>,
    pub issues: Vec<AtsIssue>,
}
