use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::{Validate, ValidationError};

/// Candidate skills submitted for matching
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct SkillQuery {
    #[validate(custom(function = "validate_skill_entries"))]
    pub skills: Vec<String>,
}

fn validate_skill_entries(skills: &[String]) -> Result<(), ValidationError> {
    if skills.iter().any(|s| s.is_empty()) {
        let mut err = ValidationError::new("empty_skill");
        err.message = Some("Skills must be non-empty strings".into());
        return Err(err);
    }
    Ok(())
}

/// How candidate skills are compared with required skills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillMatchMode {
    /// Byte-for-byte equality
    #[default]
    Exact,
    /// Trimmed, lowercased equality ("python" matches "Python")
    CaseInsensitive,
}

impl SkillMatchMode {
    pub fn normalize<'a>(&self, skill: &'a str) -> std::borrow::Cow<'a, str> {
        match self {
            SkillMatchMode::Exact => std::borrow::Cow::Borrowed(skill),
            SkillMatchMode::CaseInsensitive => std::borrow::Cow::Owned(skill.trim().to_lowercase()),
        }
    }
}

impl FromStr for SkillMatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(SkillMatchMode::Exact),
            "case_insensitive" | "case-insensitive" => Ok(SkillMatchMode::CaseInsensitive),
            other => Err(format!(
                "Unknown skill match mode '{}'. Expected 'exact' or 'case_insensitive'",
                other
            )),
        }
    }
}
