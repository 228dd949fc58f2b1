//! Feedback record model and text-block rendering

use serde::{Deserialize, Serialize};

pub const RECORD_HEADER: &str = "=== 反馈记录 ===";

pub const EMAIL_NOT_PROVIDED: &str = "未提供";

// Fields are Option so key presence can be told apart from an empty value;
// the aliases accept the userName-style keys legacy clients send.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackSubmission {
    #[serde(default, alias = "userName")]
    pub name: Option<String>,
    #[serde(default, alias = "userEmail")]
    pub email: Option<String>,
    #[serde(default, alias = "feedbackContent")]
    pub message: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl FeedbackSubmission {
    pub fn has_required_keys(&self) -> bool {
        self.name.is_some() && self.message.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct FeedbackRecord {
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: String,
}

impl FeedbackRecord {
    pub fn render_block(&self) -> String {
        let email = if self.email.is_empty() {
            EMAIL_NOT_PROVIDED.to_string()
        } else {
            escape_html(&self.email)
        };

        format!(
            "\n{}\n时间: {}\n姓名: {}\n邮箱: {}\n反馈内容:\n{}\n",
            RECORD_HEADER,
            escape_html(&self.timestamp),
            escape_html(&self.name),
            email,
            nl2br(&escape_html(&self.message)),
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    pub name: String,
    pub timestamp: String,
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

// Inserts <br /> before each newline, keeping the newline; \r\n is one break.
fn nl2br(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                out.push_str("<br />");
                out.push('\r');
                if chars.peek() == Some(&'\n') {
                    chars.next();
                    out.push('\n');
                }
            }
            '\n' => {
                out.push_str("<br />");
                out.push('\n');
            }
            _ => out.push(c),
        }
    }
    out
}
