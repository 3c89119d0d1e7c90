use std::{
    collections::HashMap,
    sync::{Arc, Mutex, RwLock},
};

use campusboard_core::{
    ApiTarget, RequestPayload, ServiceClient, ServiceResult, SessionToken, TokenStore,
    TokenStoreError,
};

pub fn target() -> ApiTarget {
    ApiTarget::new(Some("board.example.edu".to_string()))
}

// Mock token store for testing
#[derive(Default)]
pub struct MockTokenStore {
    tokens: RwLock<HashMap<String, SessionToken>>,
}

impl TokenStore for MockTokenStore {
    fn load(&self, name: &str) -> Result<Option<SessionToken>, TokenStoreError> {
        Ok(self.tokens.read().unwrap().get(name).cloned())
    }

    fn save(&self, name: &str, token: SessionToken) -> Result<(), TokenStoreError> {
        self.tokens.write().unwrap().insert(name.to_string(), token);
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<(), TokenStoreError> {
        self.tokens.write().unwrap().remove(name);
        Ok(())
    }
}

// Mock service client answering every request with the same result
#[derive(Clone)]
pub struct MockServiceClient {
    result: ServiceResult,
    requests: Arc<Mutex<Vec<RequestPayload>>>,
}

impl MockServiceClient {
    pub fn returning(result: ServiceResult) -> Self {
        Self {
            result,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<RequestPayload> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ServiceClient for MockServiceClient {
    async fn send(&self, request: RequestPayload) -> ServiceResult {
        self.requests.lock().unwrap().push(request);
        self.result.clone()
    }
}
