use crate::api::job::JobPosting;

/// Built-in catalog served when no catalog file is configured
pub fn default_catalog() -> Vec<JobPosting> {
    vec![
        JobPosting::new(1, "Software Engineer", "Remote", "2+ years", &["Python", "FastAPI"]),
        JobPosting::new(2, "Data Scientist", "Bangalore", "3+ years", &["Python", "ML", "Pandas"]),
        JobPosting::new(3, "Frontend Developer", "Pune", "1+ years", &["React", "Tailwind", "JS"]),
    ]
}
