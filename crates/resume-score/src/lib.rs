//! Resume scoring and job matching engine.
//!
//! The `scoring` module converts free resume text into a composite quality
//! score (skill coverage, readability, grammar-error density). The `resumes`
//! module carries the candidate/job domain model, the repository seam, the
//! job matcher, and the HTTP router consumed by the API service.

pub mod config;
pub mod error;
pub mod resumes;
pub mod scoring;
pub mod telemetry;
