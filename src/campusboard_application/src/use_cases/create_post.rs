use std::str::FromStr;

use campusboard_core::{
    FormError, FormState, RequestBuilder, ServiceClient, ServiceResult, TokenStore, paths,
};
use http::Method;
use serde_json::Value;

use crate::form::{
    FormMachine, FormPhase, Generation, PendingSubmission, Resolution, SubmitRejected,
    UnknownField,
};

pub const DEFAULT_LABEL: &str = "general";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostField {
    Label,
    Title,
    Content,
}

impl PostField {
    pub const ALL: [PostField; 3] = [Self::Label, Self::Title, Self::Content];

    pub fn name(self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Title => "title",
            Self::Content => "content",
        }
    }
}

impl FromStr for PostField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Where the client navigates to view a freshly created post.
pub fn view_post_path(post_id: &str) -> String {
    format!("/viewpost/{post_id}")
}

fn post_id(data: &Value) -> Option<String> {
    match data.get("postID")? {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

/// Create-post form controller
///
/// Requires a session token in the store for the backend to accept the post,
/// but does not check for one itself.
pub struct CreatePostForm<C, T>
where
    C: ServiceClient,
    T: TokenStore,
{
    client: C,
    request_builder: RequestBuilder<T>,
    machine: FormMachine,
    redirect: Option<String>,
}

impl<C, T> CreatePostForm<C, T>
where
    C: ServiceClient,
    T: TokenStore,
{
    pub fn new(client: C, request_builder: RequestBuilder<T>) -> Self {
        let defaults = FormState::new()
            .with_field(PostField::Label.name(), DEFAULT_LABEL)
            .with_field(PostField::Title.name(), "")
            .with_field(PostField::Content.name(), "");

        Self {
            client,
            request_builder,
            machine: FormMachine::new(defaults),
            redirect: None,
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

    pub fn field(&self, field: PostField) -> &str {
        self.machine.fields().get(field.name())
    }

    /// Navigation target computed by the last successful submission.
    pub fn redirect_target(&self) -> Option<&str> {
        self.redirect.as_deref()
    }

    /// Hands the pending navigation to the caller, leaving none behind.
    pub fn take_redirect(&mut self) -> Option<String> {
        self.redirect.take()
    }

    pub fn open(&mut self) {
        self.machine.open();
    }

    pub fn close(&mut self) {
        self.machine.close();
        self.redirect = None;
    }

    pub fn set_field(&mut self, field: PostField, value: impl Into<String>) {
        self.machine.set_field(field.name(), value.into());
    }

    /// Builds the create-post request when label, title and content are all
    /// filled in. An incomplete form is rejected silently, without a message.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitRejected> {
        self.machine.ensure_not_in_flight()?;
        self.redirect = None;

        let required = PostField::ALL.map(PostField::name);
        if !self.machine.fields().has_values(&required) {
            return Err(SubmitRejected::Incomplete);
        }

        let body = self.machine.fields().to_json();
        let request = match self
            .request_builder
            .build(Method::POST, paths::CREATE_POST, body)
        {
            Ok(request) => request,
            Err(e) => {
                tracing::error!(error = %e, "Cannot build create-post request");
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
            tracing::debug!(?generation, "Ignoring stale create-post response");
            return Resolution::Stale;
        }

        let error = match result {
            ServiceResult::Success { data } => match post_id(&data) {
                Some(id) => {
                    self.redirect = Some(view_post_path(&id));
                    self.machine.succeed_and_close();
                    return Resolution::Succeeded;
                }
                None => {
                    tracing::warn!("Create-post succeeded without a post id");
                    FormError::InternalService
                }
            },
            ServiceResult::Error { .. } => FormError::Authentication,
            ServiceResult::InternalError { reason } => {
                tracing::warn!(%reason, "Create-post request failed");
                FormError::InternalService
            }
        };

        self.machine.fail(&error);
        Resolution::Failed(error)
    }

    /// Execute post creation: check fields, send, and apply the outcome
    #[tracing::instrument(name = "CreatePostForm::submit", skip(self))]
    pub async fn submit(&mut self) -> Result<Resolution, SubmitRejected> {
        let (generation, request) = self.begin_submit()?.into_parts();
        let result = self.client.send(request).await;
        Ok(self.resolve(generation, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockServiceClient, MockTokenStore, target};
    use campusboard_core::{AUTHORIZATION_HEADER, SessionToken};
    use serde_json::json;

    type Form = CreatePostForm<MockServiceClient, MockTokenStore>;

    fn form(client: MockServiceClient) -> Form {
        let store = MockTokenStore::default();
        store.save("jwtToken", SessionToken::new("bearer-token")).unwrap();
        let mut form = CreatePostForm::new(client, RequestBuilder::new(target(), store));
        form.open();
        form
    }

    fn fill(form: &mut Form) {
        form.set_field(PostField::Title, "Study group");
        form.set_field(PostField::Content, "Library, 6pm, bring notes");
    }

    #[tokio::test]
    async fn creates_post_and_redirects_to_it() {
        let client = MockServiceClient::returning(ServiceResult::Success {
            data: json!({"postID": 17}),
        });
        let mut form = form(client.clone());
        fill(&mut form);

        let resolution = form.submit().await.unwrap();

        assert_eq!(resolution, Resolution::Succeeded);
        assert_eq!(form.redirect_target(), Some("/viewpost/17"));
        assert!(!form.is_open());
        assert_eq!(form.phase(), FormPhase::Succeeded);
        assert_eq!(form.field(PostField::Title), "");

        let sent = client.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method(), &Method::POST);
        assert_eq!(
            sent[0].url(),
            "https://board.example.edu/api/v1/user/createpost"
        );
        assert_eq!(sent[0].header(AUTHORIZATION_HEADER), Some("bearer-token"));
        assert_eq!(
            sent[0].body(),
            &json!({
                "label": "general",
                "title": "Study group",
                "content": "Library, 6pm, bring notes"
            })
        );
    }

    #[tokio::test]
    async fn string_post_ids_are_used_as_is() {
        let client = MockServiceClient::returning(ServiceResult::Success {
            data: json!({"postID": "5f1c"}),
        });
        let mut form = form(client);
        fill(&mut form);

        form.submit().await.unwrap();

        assert_eq!(form.take_redirect().as_deref(), Some("/viewpost/5f1c"));
        assert_eq!(form.redirect_target(), None);
    }

    #[tokio::test]
    async fn success_without_post_id_is_internal_error() {
        let client = MockServiceClient::returning(ServiceResult::Success { data: json!({}) });
        let mut form = form(client);
        fill(&mut form);

        let resolution = form.submit().await.unwrap();

        assert_eq!(resolution, Resolution::Failed(FormError::InternalService));
        assert_eq!(form.redirect_target(), None);
        assert!(form.is_open());
    }

    #[tokio::test]
    async fn server_error_is_reported_as_authentication_error() {
        let client = MockServiceClient::returning(ServiceResult::Error {
            message: Some("jwt expired".into()),
        });
        let mut form = form(client);
        fill(&mut form);

        form.submit().await.unwrap();

        assert_eq!(form.error_message(), "Authentication Error");
        assert_eq!(form.phase(), FormPhase::Failed);
    }

    #[tokio::test]
    async fn transport_failure_is_reported_as_internal_error() {
        let client = MockServiceClient::returning(ServiceResult::internal("timed out"));
        let mut form = form(client);
        fill(&mut form);

        form.submit().await.unwrap();

        assert_eq!(form.error_message(), "Internal Service Error");
    }

    #[tokio::test]
    async fn incomplete_form_is_not_sent() {
        let client = MockServiceClient::returning(ServiceResult::Success {
            data: json!({"postID": 1}),
        });
        let mut form = form(client.clone());
        form.set_field(PostField::Title, "Only a title");

        assert_eq!(form.submit().await.unwrap_err(), SubmitRejected::Incomplete);
        assert_eq!(form.error_message(), "");
        assert_eq!(form.phase(), FormPhase::Editing);

        form.set_field(PostField::Content, "body");
        form.set_field(PostField::Label, "");
        assert_eq!(form.submit().await.unwrap_err(), SubmitRejected::Incomplete);
        assert!(client.requests().is_empty());
    }

    #[tokio::test]
    async fn failed_attempt_after_success_has_no_redirect() {
        let mut form = form(MockServiceClient::returning(ServiceResult::Success {
            data: json!({"postID": 1}),
        }));
        fill(&mut form);
        form.submit().await.unwrap();
        assert_eq!(form.redirect_target(), Some("/viewpost/1"));

        form.open();
        fill(&mut form);
        let pending = form.begin_submit().unwrap();
        let resolution = form.resolve(
            pending.generation(),
            ServiceResult::Error { message: None },
        );

        assert_eq!(resolution, Resolution::Failed(FormError::Authentication));
        assert_eq!(form.phase(), FormPhase::Failed);
        assert_eq!(form.redirect_target(), None);
    }

    #[tokio::test]
    async fn closing_drops_pending_redirect() {
        let mut form = form(MockServiceClient::returning(ServiceResult::Success {
            data: json!({"postID": 8}),
        }));
        fill(&mut form);
        form.submit().await.unwrap();

        form.close();

        assert_eq!(form.redirect_target(), None);
    }

    #[test]
    fn stale_success_after_close_does_not_redirect() {
        let mut form = form(MockServiceClient::returning(ServiceResult::internal("unused")));
        fill(&mut form);
        let pending = form.begin_submit().unwrap();

        form.close();
        let resolution = form.resolve(
            pending.generation(),
            ServiceResult::Success {
                data: json!({"postID": 3}),
            },
        );

        assert_eq!(resolution, Resolution::Stale);
        assert_eq!(form.redirect_target(), None);
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn reopening_after_failure_starts_clean() {
        let mut form = form(MockServiceClient::returning(ServiceResult::internal("unused")));
        fill(&mut form);
        let pending = form.begin_submit().unwrap();
        form.resolve(pending.generation(), ServiceResult::Error { message: None });
        assert_eq!(form.error_message(), "Authentication Error");

        form.close();
        form.open();

        assert_eq!(form.error_message(), "");
        assert_eq!(form.field(PostField::Label), DEFAULT_LABEL);
        assert_eq!(form.field(PostField::Content), "");
    }

    #[test]
    fn field_names_parse() {
        assert_eq!("content".parse::<PostField>(), Ok(PostField::Content));
        assert!("email".parse::<PostField>().is_err());
    }
}
