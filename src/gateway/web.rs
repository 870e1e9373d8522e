use reqwasm::http::Request;

use crate::{
    error::GatewayError,
    gateway::{HttpTransport, RawResponse},
};

/// Browser transport built on `reqwasm` (the fetch API).
#[derive(Clone, Copy, Debug, Default)]
pub struct ReqwasmTransport;

impl HttpTransport for ReqwasmTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, GatewayError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| GatewayError::Network {
                url: url.to_string(),
                reason: format!("Failed to send request: {}", e),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| GatewayError::Network {
            url: url.to_string(),
            reason: format!("Failed to read response body: {}", e),
        })?;

        Ok(RawResponse { status, body })
    }
}
