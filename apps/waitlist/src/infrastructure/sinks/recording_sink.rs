use std::sync::{Mutex, PoisonError};

use crate::domain::signup::{entity::Submission, sink::SubmissionSink};

/// Keeps every accepted submission in memory.
#[derive(Default)]
pub struct RecordingSink {
    submissions: Mutex<Vec<Submission>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submissions(&self) -> Vec<Submission> {
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SubmissionSink for RecordingSink {
    fn submit(&self, submission: &Submission) -> anyhow::Result<()> {
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(submission.clone());
        Ok(())
    }
}
