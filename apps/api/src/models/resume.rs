//! Resume data model — the structured document the scoring engine operates on.
//!
//! Mirrors the editor's wire shape (camelCase JSON). Optional collections
//! default to empty on deserialization so the scorers never see a missing
//! section, only an empty one.

use serde::{Deserialize, Serialize};

/// Contact and headline information at the top of a resume.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub links: Vec<String>,
}

/// A single achievement line within a work-experience entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bullet {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub text: String,
}

/// One work-experience entry. `end == None` marks a current position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub bullets: Vec<Bullet>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Basic,
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: Option<SkillLevel>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Visual template selector. Carried through scoring untouched — the engine
/// never looks at presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKey {
    Classic,
    #[default]
    Modern,
    Compact,
    ModernCompact,
    Punk,
    Timeline,
}

/// The full structured resume document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub template_key: TemplateKey,
}

impl Experience {
    /// A position with no end date is treated as current.
    pub fn is_current(&self) -> bool {
        match self.end.as_deref() {
            None => true,
            Some(s) => s.trim().is_empty(),
        }
    }
}

/// Treats `None` and whitespace-only strings alike — the editor persists
/// cleared fields as empty strings.
pub fn is_blank(field: &Option<String>) -> bool {
    match field.as_deref() {
        None => true,
        Some(s) => s.trim().is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_deserializes_from_minimal_json() {
        let json = r#"{"profile": {"fullName": "Ada Lovelace", "email": "ada@example.com"}}"#;
        let resume: ResumeData = serde_json::from_str(json).unwrap();
        assert_eq!(resume.profile.full_name, "Ada Lovelace");
        assert!(resume.experience.is_empty());
        assert!(resume.certifications.is_empty());
        assert_eq!(resume.template_key, TemplateKey::Modern);
    }

    #[test]
    fn test_missing_optional_sections_default_to_empty() {
        let resume: ResumeData = serde_json::from_str("{}").unwrap();
        assert!(resume.skills.is_empty());
        assert!(resume.projects.is_empty());
        assert!(resume.achievements.is_empty());
        assert!(resume.profile.email.is_empty());
    }

    #[test]
    fn test_skill_level_serde_lowercase() {
        let level: SkillLevel = serde_json::from_str(r#""advanced""#).unwrap();
        assert_eq!(level, SkillLevel::Advanced);
    }

    #[test]
    fn test_template_key_kebab_case() {
        let key: TemplateKey = serde_json::from_str(r#""modern-compact""#).unwrap();
        assert_eq!(key, TemplateKey::ModernCompact);
    }

    #[test]
    fn test_experience_without_end_is_current() {
        let exp = Experience {
            id: "exp-1".to_string(),
            end: None,
            ..Default::default()
        };
        assert!(exp.is_current());

        let past = Experience {
            end: Some("2022-01".to_string()),
            ..Default::default()
        };
        assert!(!past.is_current());
    }

    #[test]
    fn test_whitespace_end_counts_as_current() {
        let exp = Experience {
            end: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(exp.is_current());
    }

    #[test]
    fn test_is_blank_handles_none_and_empty() {
        assert!(is_blank(&None));
        assert!(is_blank(&Some("".to_string())));
        assert!(is_blank(&Some("   ".to_string())));
        assert!(!is_blank(&Some("Austin, TX".to_string())));
    }

    #[test]
    fn test_profile_roundtrips_camel_case() {
        let profile = Profile {
            full_name: "Jordan Rivera".to_string(),
            email: "jordan@example.com".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"fullName\""), "got {json}");
        assert!(!json.contains("full_name"));
    }
}
