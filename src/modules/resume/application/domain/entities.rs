use serde::{Deserialize, Serialize};

use crate::shared::lenient;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub school: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub degree: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub period: Option<String>,
}

/// Shared shape of ventures, internships and projects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub summary: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub period: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::string_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub label: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<String>,
}

/// The whole resume. Each section decodes independently; a malformed section
/// is empty without affecting the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeDocument {
    #[serde(default, deserialize_with = "lenient::record_list")]
    pub education: Vec<EducationEntry>,
    #[serde(default, deserialize_with = "lenient::record_list")]
    pub entrepreneurial: Vec<ExperienceEntry>,
    #[serde(default, deserialize_with = "lenient::record_list")]
    pub internship: Vec<ExperienceEntry>,
    #[serde(default, deserialize_with = "lenient::record_list")]
    pub projects: Vec<ExperienceEntry>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub activities: Vec<String>,
    #[serde(default, deserialize_with = "lenient::record_list")]
    pub skills: Vec<SkillEntry>,
}

impl ResumeDocument {
    pub fn is_empty(&self) -> bool {
        self.education.is_empty()
            && self.entrepreneurial.is_empty()
            && self.internship.is_empty()
            && self.projects.is_empty()
            && self.activities.is_empty()
            && self.skills.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn malformed_section_does_not_spoil_others() {
        let doc: ResumeDocument = serde_json::from_value(json!({
            "education": "not a list",
            "skills": [{"label": "Languages", "value": "Chinese, English"}],
            "activities": ["Head of PR", 7, null]
        }))
        .unwrap();

        assert!(doc.education.is_empty());
        assert_eq!(doc.skills.len(), 1);
        assert_eq!(doc.activities, vec!["Head of PR", "7"]);
    }

    #[test]
    fn single_bullet_string_is_accepted() {
        let entry: ExperienceEntry =
            serde_json::from_value(json!({"title": "Intern", "bullets": "Did things"})).unwrap();
        assert_eq!(entry.bullets, vec!["Did things"]);
    }

    #[test]
    fn default_document_is_empty() {
        assert!(ResumeDocument::default().is_empty());
    }
}
