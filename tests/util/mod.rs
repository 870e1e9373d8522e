use spacex_explorer::gateway::{http::ReqwestTransport, SpaceXGateway};
use spacex_test_utils::TestSetup;

/// Gateway pointed at the test's mock SpaceX API, using the real HTTP transport
pub fn gateway(test: &TestSetup) -> SpaceXGateway<ReqwestTransport> {
    SpaceXGateway::new(&test.url(), ReqwestTransport::default())
}
