//! Validation rules and rejection messages

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

pub const MISSING_REQUIRED_FIELDS: &str = "姓名和反馈内容为必填项";

pub const INVALID_EMAIL_FORMAT: &str = "邮箱格式不正确";

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"
    ).unwrap();
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::new("Email cannot be empty"));
    }

    if email.len() > 254 {
        return Err(ValidationError::new("Email is too long"));
    }

    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::new("Invalid email format"));
    }

    Ok(())
}
