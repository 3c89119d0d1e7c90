pub mod services;
pub mod token_store;
