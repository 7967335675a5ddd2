use tracing::info;

use crate::domain::signup::{entity::Submission, sink::SubmissionSink};

/// Writes each submission to the log under the `waitlist::submission` target.
pub struct TracingSink {
    json_payload: bool,
}

impl TracingSink {
    pub fn new(json_payload: bool) -> Self {
        Self { json_payload }
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SubmissionSink for TracingSink {
    fn submit(&self, submission: &Submission) -> anyhow::Result<()> {
        if self.json_payload {
            let payload = serde_json::to_string(submission)?;
            info!(target: "waitlist::submission", %payload, "Form Data");
        } else {
            info!(target: "waitlist::submission", ?submission, "Form Data");
        }
        Ok(())
    }
}
