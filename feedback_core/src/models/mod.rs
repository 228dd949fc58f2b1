//! Data models shared across handlers

pub mod feedback;
pub mod request;

pub use feedback::{FeedbackRecord, FeedbackSubmission, SubmissionReceipt};
pub use request::ApiResponse;
