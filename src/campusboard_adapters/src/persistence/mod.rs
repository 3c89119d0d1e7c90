pub mod cookie_file_token_store;
pub mod in_memory_token_store;

pub use cookie_file_token_store::CookieFileTokenStore;
pub use in_memory_token_store::InMemoryTokenStore;
