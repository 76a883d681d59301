//! Contact form state and the submission machine.
//!
//! DESIGN
//! ======
//! Exactly one [`SubmissionState`] is active at a time. `Submitting` is
//! entered only from `Idle` or `Failure` and always resolves to exactly one
//! of `Success` or `Failure`. Editing a field after a success returns the
//! machine to `Idle`, so resubmitting after a success requires new input.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Transient user input for the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// All three fields carry non-whitespace content.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Submission lifecycle of the contact form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Failure,
}

/// Contact form state: the typed message plus the submission machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub message: ContactMessage,
    pub status: SubmissionState,
}

impl ContactState {
    pub fn set_name(&mut self, value: String) {
        self.leave_success();
        self.message.name = value;
    }

    pub fn set_email(&mut self, value: String) {
        self.leave_success();
        self.message.email = value;
    }

    pub fn set_message(&mut self, value: String) {
        self.leave_success();
        self.message.message = value;
    }

    // A fresh edit after a confirmed success starts a new draft.
    fn leave_success(&mut self) {
        if self.status == SubmissionState::Success {
            self.status = SubmissionState::Idle;
        }
    }

    /// Try to enter `Submitting`. Allowed only from `Idle` or `Failure`,
    /// and only with a complete message; otherwise nothing changes and
    /// `false` is returned.
    pub fn begin_submit(&mut self) -> bool {
        if !matches!(self.status, SubmissionState::Idle | SubmissionState::Failure) {
            return false;
        }
        if !self.message.is_complete() {
            return false;
        }
        self.status = SubmissionState::Submitting;
        true
    }

    /// Resolve an in-flight submission as delivered: the draft is cleared.
    pub fn submit_succeeded(&mut self) {
        if self.status != SubmissionState::Submitting {
            return;
        }
        self.status = SubmissionState::Success;
        self.message.clear();
    }

    /// Resolve an in-flight submission as failed: the typed fields are
    /// retained so the user does not lose input.
    pub fn submit_failed(&mut self) {
        if self.status != SubmissionState::Submitting {
            return;
        }
        self.status = SubmissionState::Failure;
    }
}
