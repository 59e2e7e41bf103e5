use serde::{Deserialize, Serialize};

/// A single posting in the job catalog
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: i32,
    pub title: String,
    pub location: String,
    pub experience: String,
    pub required_skills: Vec<String>,
}

impl JobPosting {
    pub fn new(id: i32, title: &str, location: &str, experience: &str, skills: &[&str]) -> Self {
        Self {
            id,
            title: title.to_string(),
            location: location.to_string(),
            experience: experience.to_string(),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }
}
