use mockito::{Mock, Server, ServerGuard};

/// Mock SpaceX API for a single test.
///
/// Endpoints registered through the `with_*_endpoint` methods are kept in `mocks` and
/// checked by [`TestSetup::assert_mocks`].
pub struct TestSetup {
    pub server: ServerGuard,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Self {
        let server = Server::new_async().await;

        TestSetup {
            server,
            mocks: Vec::new(),
        }
    }

    /// Base URL to configure the gateway with, in place of `https://api.spacexdata.com/v4`
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
