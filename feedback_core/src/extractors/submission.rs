//! Submission body extraction with JSON-then-form parser fallback

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};

use crate::{
    error::AppError,
    models::feedback::FeedbackSubmission,
    validation::rules::MISSING_REQUIRED_FIELDS,
};

// The Content-Type header is deliberately ignored: parsers run over the raw
// bytes in a fixed order and the first that yields both required keys wins.
pub struct SubmissionBody(pub FeedbackSubmission);

#[derive(Debug, Clone, Copy)]
enum BodyParser {
    Json,
    UrlEncodedForm,
}

impl BodyParser {
    fn parse(self, bytes: &[u8]) -> Option<FeedbackSubmission> {
        match self {
            BodyParser::Json => serde_json::from_slice(bytes).ok(),
            BodyParser::UrlEncodedForm => serde_urlencoded::from_bytes(bytes).ok(),
        }
    }
}

// JSON first; the form decoder is the fallback plain HTML form posts rely on.
const PARSER_CHAIN: [BodyParser; 2] = [BodyParser::Json, BodyParser::UrlEncodedForm];

// When no parse carries both required keys, the last successful parse wins,
// so an incomplete JSON body is replaced wholesale by the form decoder's view.
pub fn parse_submission(bytes: &[u8]) -> FeedbackSubmission {
    let mut fallback = FeedbackSubmission::default();

    for parser in PARSER_CHAIN {
        if let Some(submission) = parser.parse(bytes) {
            if submission.has_required_keys() {
                return submission;
            }
            fallback = submission;
        }
    }

    fallback
}

#[async_trait]
impl<S> FromRequest<S> for SubmissionBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // An unreadable body is treated like an empty one: the submission
        // cannot carry its required fields.
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| AppError::Validation(MISSING_REQUIRED_FIELDS.to_string()))?;

        Ok(SubmissionBody(parse_submission(&bytes)))
    }
}
