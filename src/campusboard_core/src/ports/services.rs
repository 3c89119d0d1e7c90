use std::sync::Arc;

use async_trait::async_trait;

use crate::{request::RequestPayload, service_result::ServiceResult};

/// Port trait for the backend HTTP service.
///
/// Implementations perform exactly one call per `send` and never propagate
/// transport failures: those come back as [`ServiceResult::InternalError`].
#[async_trait]
pub trait ServiceClient: Send + Sync {
    async fn send(&self, request: RequestPayload) -> ServiceResult;
}

#[async_trait]
impl<C: ServiceClient + ?Sized> ServiceClient for &C {
    async fn send(&self, request: RequestPayload) -> ServiceResult {
        (**self).send(request).await
    }
}

#[async_trait]
impl<C: ServiceClient + ?Sized> ServiceClient for Arc<C> {
    async fn send(&self, request: RequestPayload) -> ServiceResult {
        (**self).send(request).await
    }
}
