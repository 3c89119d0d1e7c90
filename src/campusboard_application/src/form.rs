//! State shared by every form controller: dialog visibility, field values,
//! the user-visible error message and the submission lifecycle.

use campusboard_core::{
    ConfigurationError, FormError, FormState, RequestPayload, ValidationError,
};
use thiserror::Error;

/// Lifecycle of a form. No state is terminal: `close` always returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Editing,
    Submitting,
    Succeeded,
    Failed,
}

/// Tag identifying one submission attempt.
///
/// Bumped whenever a submission starts and whenever the form is closed, so a
/// response tagged with an older generation is known to be stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// A request that passed every local check and is ready to be sent.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    generation: Generation,
    request: RequestPayload,
}

impl PendingSubmission {
    pub(crate) fn new(generation: Generation, request: RequestPayload) -> Self {
        Self {
            generation,
            request,
        }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn request(&self) -> &RequestPayload {
        &self.request
    }

    pub fn into_parts(self) -> (Generation, RequestPayload) {
        (self.generation, self.request)
    }
}

/// Why a submit action did not produce a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("A submission is already in flight")]
    InFlight,
    #[error("Required fields are empty")]
    Incomplete,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Misconfigured(#[from] ConfigurationError),
}

/// What applying a service result did to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Succeeded,
    Failed(FormError),
    /// The form was closed (or resubmitted) since the request went out.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown form field `{0}`")]
pub struct UnknownField(pub String);

#[derive(Debug, Clone)]
pub struct FormMachine {
    phase: FormPhase,
    open: bool,
    fields: FormState,
    defaults: FormState,
    error_message: String,
    generation: Generation,
}

impl FormMachine {
    pub fn new(defaults: FormState) -> Self {
        Self {
            phase: FormPhase::Idle,
            open: false,
            fields: defaults.clone(),
            defaults,
            error_message: String::new(),
            generation: Generation::default(),
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn fields(&self) -> &FormState {
        &self.fields
    }

    /// Empty when there is nothing to show.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hides the dialog and discards everything tied to the current attempt.
    pub fn close(&mut self) {
        self.dismiss();
        self.phase = FormPhase::Idle;
    }

    pub fn set_field(&mut self, name: &str, value: String) {
        self.fields.set(name, value);
        if self.phase != FormPhase::Submitting {
            self.phase = FormPhase::Editing;
        }
    }

    pub fn ensure_not_in_flight(&self) -> Result<(), SubmitRejected> {
        if self.phase == FormPhase::Submitting {
            return Err(SubmitRejected::InFlight);
        }
        Ok(())
    }

    pub fn start_submission(&mut self) -> Generation {
        self.generation = self.generation.next();
        self.phase = FormPhase::Submitting;
        self.generation
    }

    /// True iff a result tagged `generation` may still mutate this form.
    pub fn accepts(&self, generation: Generation) -> bool {
        self.phase == FormPhase::Submitting && self.generation == generation
    }

    pub fn fail(&mut self, error: &FormError) {
        self.error_message = error.to_string();
        self.phase = FormPhase::Failed;
    }

    pub fn succeed_and_close(&mut self) {
        self.dismiss();
        self.phase = FormPhase::Succeeded;
    }

    fn dismiss(&mut self) {
        self.open = false;
        self.error_message.clear();
        self.fields = self.defaults.clone();
        self.generation = self.generation.next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> FormMachine {
        FormMachine::new(FormState::new().with_field("label", "general"))
    }

    #[test]
    fn starts_idle_and_closed() {
        let machine = machine();
        assert_eq!(machine.phase(), FormPhase::Idle);
        assert!(!machine.is_open());
        assert_eq!(machine.error_message(), "");
        assert_eq!(machine.fields().get("label"), "general");
    }

    #[test]
    fn field_change_moves_to_editing() {
        let mut machine = machine();
        machine.set_field("title", "Hello".into());
        assert_eq!(machine.phase(), FormPhase::Editing);

        machine.fail(&FormError::InternalService);
        assert_eq!(machine.phase(), FormPhase::Failed);
        machine.set_field("title", "Hello again".into());
        assert_eq!(machine.phase(), FormPhase::Editing);
        assert_eq!(machine.error_message(), "Internal Service Error");
    }

    #[test]
    fn field_change_while_submitting_keeps_phase() {
        let mut machine = machine();
        machine.start_submission();
        machine.set_field("title", "late edit".into());
        assert_eq!(machine.phase(), FormPhase::Submitting);
        assert_eq!(machine.fields().get("title"), "late edit");
    }

    #[test]
    fn second_submission_is_refused_while_in_flight() {
        let mut machine = machine();
        assert!(machine.ensure_not_in_flight().is_ok());
        machine.start_submission();
        assert_eq!(machine.ensure_not_in_flight(), Err(SubmitRejected::InFlight));
    }

    #[test]
    fn close_resets_and_invalidates_in_flight_generation() {
        let mut machine = machine();
        machine.open();
        machine.set_field("label", "news".into());
        let generation = machine.start_submission();
        assert!(machine.accepts(generation));

        machine.close();

        assert!(!machine.accepts(generation));
        assert!(!machine.is_open());
        assert_eq!(machine.phase(), FormPhase::Idle);
        assert_eq!(machine.fields().get("label"), "general");
    }

    #[test]
    fn close_clears_error_message() {
        let mut machine = machine();
        machine.open();
        machine.fail(&FormError::Authentication);
        assert_eq!(machine.error_message(), "Authentication Error");

        machine.close();
        machine.open();
        assert_eq!(machine.error_message(), "");
    }

    #[test]
    fn each_submission_gets_a_fresh_generation() {
        let mut machine = machine();
        let first = machine.start_submission();
        machine.fail(&FormError::InternalService);
        let second = machine.start_submission();
        assert!(second > first);
        assert!(!machine.accepts(first));
        assert!(machine.accepts(second));
    }
}
