use std::str::FromStr;

use campusboard_core::{
    FormError, FormState, NewAccount, RequestBuilder, ServiceClient, ServiceResult, TokenStore,
    paths,
};
use http::Method;
use serde_json::Value;

use crate::form::{
    FormMachine, FormPhase, Generation, PendingSubmission, Resolution, SubmitRejected,
    UnknownField,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpField {
    Email,
    Username,
    Password,
}

impl SignUpField {
    pub const ALL: [SignUpField; 3] = [Self::Email, Self::Username, Self::Password];

    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Username => "username",
            Self::Password => "password",
        }
    }
}

impl FromStr for SignUpField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Account details echoed back by the backend after a successful sign-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub email: String,
    pub username: String,
    pub created_at: Option<String>,
}

impl Registration {
    fn from_data(data: &Value) -> Option<Self> {
        let text = |key: &str| data.get(key).and_then(Value::as_str).map(str::to_string);

        Some(Self {
            email: text("email")?,
            username: text("username")?,
            created_at: text("createdAt"),
        })
    }
}

/// Sign-up form controller - validates credentials and registers the account
pub struct SignUpForm<C, T>
where
    C: ServiceClient,
    T: TokenStore,
{
    client: C,
    request_builder: RequestBuilder<T>,
    machine: FormMachine,
    registration: Option<Registration>,
}

impl<C, T> SignUpForm<C, T>
where
    C: ServiceClient,
    T: TokenStore,
{
    pub fn new(client: C, request_builder: RequestBuilder<T>) -> Self {
        let defaults = SignUpField::ALL
            .into_iter()
            .fold(FormState::new(), |state, field| {
                state.with_field(field.name(), "")
            });

        Self {
            client,
            request_builder,
            machine: FormMachine::new(defaults),
            registration: None,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.machine.phase()
    }

    pub fn is_open(&self) -> bool {
        self.machine.is_open()
    }

    pub fn error_message(&self) -> &str {
        self.machine.error_message()
    }

    pub fn field(&self, field: SignUpField) -> &str {
        self.machine.fields().get(field.name())
    }

    /// Details of the last account created through this form.
    pub fn registration(&self) -> Option<&Registration> {
        self.registration.as_ref()
    }

    pub fn open(&mut self) {
        self.machine.open();
    }

    pub fn close(&mut self) {
        self.machine.close();
        self.registration = None;
    }

    pub fn set_field(&mut self, field: SignUpField, value: impl Into<String>) {
        self.machine.set_field(field.name(), value.into());
    }

    /// Runs the local checks and, when they pass, builds the sign-up request.
    ///
    /// Validation failures set the field-specific message and never produce a
    /// request.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitRejected> {
        self.machine.ensure_not_in_flight()?;
        self.registration = None;

        let fields = self.machine.fields();
        let parsed = NewAccount::parse(
            fields.get(SignUpField::Email.name()),
            fields.get(SignUpField::Username.name()),
            fields.get(SignUpField::Password.name()),
        );
        if let Err(e) = parsed {
            tracing::debug!(error = %e, "Sign-up rejected by validation");
            self.machine.fail(&FormError::Validation(e));
            return Err(e.into());
        }

        let body = self.machine.fields().to_json();
        let request = match self
            .request_builder
            .build(Method::POST, paths::SIGN_UP, body)
        {
            Ok(request) => request,
            Err(e) => {
                tracing::error!(error = %e, "Cannot build sign-up request");
                self.machine.fail(&FormError::InternalService);
                return Err(e.into());
            }
        };

        let generation = self.machine.start_submission();
        Ok(PendingSubmission::new(generation, request))
    }

    /// Applies the backend's answer to a submission started with `generation`.
    pub fn resolve(&mut self, generation: Generation, result: ServiceResult) -> Resolution {
        if !self.machine.accepts(generation) {
            tracing::debug!(?generation, "Ignoring stale sign-up response");
            return Resolution::Stale;
        }

        let error = match result {
            ServiceResult::Success { data } => {
                self.registration = Registration::from_data(&data);
                self.machine.succeed_and_close();
                return Resolution::Succeeded;
            }
            ServiceResult::Error {
                message: Some(message),
            } if !message.trim().is_empty() => FormError::Conflict(message),
            ServiceResult::Error { .. } => FormError::InternalService,
            ServiceResult::InternalError { reason } => {
                tracing::warn!(%reason, "Sign-up request failed");
                FormError::InternalService
            }
        };

        self.machine.fail(&error);
        Resolution::Failed(error)
    }

    /// Execute the sign-up: validate, send, and apply the outcome
    #[tracing::instrument(name = "SignUpForm::submit", skip(self))]
    pub async fn submit(&mut self) -> Result<Resolution, SubmitRejected> {
        let (generation, request) = self.begin_submit()?.into_parts();
        let result = self.client.send(request).await;
        Ok(self.resolve(generation, result))
    }
}
