use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Submission not found: {0}")]
    SubmissionNotFound(String),

    #[error("Quote not found: {quote_id} on submission {submission_id}")]
    QuoteNotFound {
        submission_id: String,
        quote_id: String,
    },
}
