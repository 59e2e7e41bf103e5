pub mod repository;
pub mod seed;

pub use repository::{InMemoryJobRepository, JobRepository};
pub use seed::default_catalog;
