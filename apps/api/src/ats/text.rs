//! Text extractor — flattens a structured resume into one lowercase blob for
//! keyword matching.

use crate::models::resume::ResumeData;

/// Collects every scoreable text fragment (profile, roles, companies, bullet
/// texts, schools, degrees, skill names, certifications, achievements) and
/// joins them with spaces, lowercased.
pub fn extract_text(resume: &ResumeData) -> String {
    let mut parts: Vec<&str> = Vec::new();

    parts.push(&resume.profile.full_name);
    parts.push(&resume.profile.email);
    if let Some(headline) = resume.profile.headline.as_deref() {
        parts.push(headline);
    }

    for exp in &resume.experience {
        parts.push(&exp.role);
        parts.push(&exp.company);
        for bullet in &exp.bullets {
            parts.push(&bullet.text);
        }
    }

    for edu in &resume.education {
        parts.push(&edu.school);
        parts.push(&edu.degree);
    }

    for skill in &resume.skills {
        parts.push(&skill.name);
    }

    for cert in &resume.certifications {
        parts.push(cert);
    }
    for achievement in &resume.achievements {
        parts.push(achievement);
    }

    parts.join(" ").to_lowercase()
}
