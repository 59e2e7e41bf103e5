pub mod extractor;
pub mod handlers;
pub mod models;
pub mod service;

pub use extractor::{build_extractor, ExtractorKind};
pub use service::ResumeService;
