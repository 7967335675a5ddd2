use super::entity::Submission;

/// Receives a validated, assembled submission.
///
/// Implementations decide what "accepted" means (log line, queue, buffer).
/// A returned error is surfaced to the caller untouched; nothing retries.
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink: Send + Sync {
    fn submit(&self, submission: &Submission) -> anyhow::Result<()>;
}
