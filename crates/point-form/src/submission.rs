//! Submission Sequence
//!
//! Guards the POST so the success notice and the navigation home happen at
//! most once per form.

use crate::error::FetchError;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Submission {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(FetchError),
}

/// What the page must do once the POST settles
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Show the success notice, then navigate to the landing route
    NotifyAndLeave,
    /// Show the error inline; the user may submit again
    ShowError(FetchError),
    /// Answer arrived for a submission that is not in flight
    Ignore,
}

impl Submission {
    /// Enter `Submitting`. Returns false if a POST is in flight or already
    /// succeeded, in which case no request must be sent.
    pub fn begin(&mut self) -> bool {
        match self {
            Submission::Submitting | Submission::Succeeded => false,
            Submission::Idle | Submission::Failed(_) => {
                *self = Submission::Submitting;
                true
            }
        }
    }

    pub fn finish(&mut self, result: Result<(), FetchError>) -> SubmitOutcome {
        if *self != Submission::Submitting {
            return SubmitOutcome::Ignore;
        }
        match result {
            Ok(()) => {
                *self = Submission::Succeeded;
                SubmitOutcome::NotifyAndLeave
            }
            Err(err) => {
                *self = Submission::Failed(err.clone());
                SubmitOutcome::ShowError(err)
            }
        }
    }

    pub fn in_flight(&self) -> bool {
        matches!(self, Submission::Submitting)
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Submission::Failed(err) => Some(err),
            _ => None,
        }
    }
}
