pub mod form;
pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use form::{
    FormMachine, FormPhase, Generation, PendingSubmission, Resolution, SubmitRejected,
    UnknownField,
};
pub use use_cases::{
    create_post::{CreatePostForm, DEFAULT_LABEL, PostField, view_post_path},
    signup::{Registration, SignUpField, SignUpForm},
};
