use crate::{
    error::GatewayError,
    gateway::{HttpTransport, RawResponse},
};

/// Native transport built on `reqwest`, used by the desktop build and tests.
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, GatewayError> {
        let network_error = |e: reqwest::Error| GatewayError::Network {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(network_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(network_error)?;

        Ok(RawResponse { status, body })
    }
}
