//! Custom request extractors

pub mod submission;

pub use submission::SubmissionBody;
