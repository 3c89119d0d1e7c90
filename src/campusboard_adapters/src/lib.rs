pub mod config;
pub mod http;
pub mod persistence;

pub use config::ClientSettings;
pub use http::ReqwestServiceClient;
pub use persistence::{CookieFileTokenStore, InMemoryTokenStore};
