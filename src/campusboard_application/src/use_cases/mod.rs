pub mod create_post;
pub mod signup;
