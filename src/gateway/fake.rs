use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    error::GatewayError,
    gateway::{HttpTransport, RawResponse},
};

/// In-memory transport for unit tests.
///
/// Every request yields to the executor once before answering, so concurrently
/// driven loads interleave the way real requests do. Unknown URLs fail with a
/// network error.
#[derive(Clone, Default)]
pub struct FakeTransport {
    routes: Rc<RefCell<HashMap<String, RawResponse>>>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, url: &str, status: u16, body: impl Into<String>) -> Self {
        self.routes.borrow_mut().insert(
            url.to_string(),
            RawResponse {
                status,
                body: body.into(),
            },
        );
        self
    }

    pub fn with_json(self, url: &str, body: &serde_json::Value) -> Self {
        self.with_response(url, 200, body.to_string())
    }

    /// URLs requested so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl HttpTransport for FakeTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, GatewayError> {
        self.calls.borrow_mut().push(url.to_string());

        tokio::task::yield_now().await;

        self.routes
            .borrow()
            .get(url)
            .cloned()
            .ok_or_else(|| GatewayError::Network {
                url: url.to_string(),
                reason: "connection refused".to_string(),
            })
    }
}
