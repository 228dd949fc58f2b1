//! Input validation rules for feedback submissions

pub mod rules;

pub use rules::*;
