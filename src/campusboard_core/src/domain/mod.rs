pub mod account;
pub mod email;
pub mod password;
pub mod session_token;
pub mod username;
