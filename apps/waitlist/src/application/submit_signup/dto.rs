use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::domain::signup::{entity::Submission, errors::FieldErrors};

/// Where a form session sits between keystrokes and submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FormState {
    Editing,
    Validating,
    Submitted,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmissionReceipt {
    pub session_id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub submission: Submission,
}

#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// The sink accepted the submission.
    Submitted(SubmissionReceipt),
    /// Validation failed; every failing field is listed.
    Rejected(FieldErrors),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}
