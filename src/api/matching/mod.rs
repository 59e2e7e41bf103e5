pub mod models;
pub mod handlers;
pub mod service;

pub use models::SkillMatchMode;
pub use service::MatchService;
