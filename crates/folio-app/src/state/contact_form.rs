//! Contact form state and its simulated submission lifecycle.
//!
//! Submission performs no real I/O: the component sleeps for the
//! simulated round trip and reports one of the terminal outcomes.

/// Outcome surface of a submission attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Contact form fields plus submission status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: SubmitStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// All fields carry non-blank content.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    /// Starts a submission attempt. Refused while one is already in
    /// flight or while the form is incomplete.
    pub fn begin_submit(&mut self) -> bool {
        if self.status == SubmitStatus::Submitting || !self.is_complete() {
            return false;
        }
        self.status = SubmitStatus::Submitting;
        true
    }

    /// Records the terminal outcome. Success clears the fields.
    pub fn finish(&mut self, ok: bool) {
        if ok {
            self.status = SubmitStatus::Success;
            self.name.clear();
            self.email.clear();
            self.message.clear();
        } else {
            self.status = SubmitStatus::Error;
        }
    }

    /// Returns a terminal status to `Idle`. No-op mid-submission.
    pub fn acknowledge(&mut self) {
        if matches!(self.status, SubmitStatus::Success | SubmitStatus::Error) {
            self.status = SubmitStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello!".to_string(),
            status: SubmitStatus::Idle,
        }
    }

    #[test]
    fn test_incomplete_form_cannot_submit() {
        let mut form = ContactForm::new();
        assert!(!form.begin_submit());
        assert_eq!(form.status, SubmitStatus::Idle);

        form.name = "Ada".to_string();
        form.email = "   ".to_string();
        form.message = "Hi".to_string();
        assert!(!form.is_complete());
        assert!(!form.begin_submit());
    }

    #[test]
    fn test_submission_lifecycle_success() {
        let mut form = filled_form();
        assert!(form.begin_submit());
        assert_eq!(form.status, SubmitStatus::Submitting);

        // A second attempt while in flight is refused.
        assert!(!form.begin_submit());

        form.finish(true);
        assert_eq!(form.status, SubmitStatus::Success);
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());

        form.acknowledge();
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn test_submission_lifecycle_error_keeps_fields() {
        let mut form = filled_form();
        assert!(form.begin_submit());
        form.finish(false);
        assert_eq!(form.status, SubmitStatus::Error);
        assert_eq!(form.name, "Ada");

        // An error outcome allows retrying.
        assert!(form.begin_submit());
        assert_eq!(form.status, SubmitStatus::Submitting);
    }

    #[test]
    fn test_acknowledge_ignores_non_terminal_states() {
        let mut form = filled_form();
        form.acknowledge();
        assert_eq!(form.status, SubmitStatus::Idle);

        form.begin_submit();
        form.acknowledge();
        assert_eq!(form.status, SubmitStatus::Submitting);
    }
}
