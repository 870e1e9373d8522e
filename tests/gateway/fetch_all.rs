use spacex_explorer::{
    error::{Error, GatewayError},
    gateway::{http::ReqwestTransport, Resource, SpaceXGateway},
    model::{launch::LaunchDto, rocket::RocketDto},
};
use spacex_test_utils::prelude::*;

use crate::util::gateway;

#[tokio::test]
/// Expect every rocket of the collection in API order
async fn parses_rocket_collection() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    test.with_rockets_endpoint(
        vec![
            RocketFixture::new("falcon1").name("Falcon 1").active(false).build(),
            RocketFixture::new(TEST_ROCKET_ID).build(),
        ],
        1,
    );

    let rockets: Vec<RocketDto> = gateway(&test).fetch_all(Resource::Rockets).await?;

    assert_eq!(rockets.len(), 2);
    assert_eq!(rockets[0].name, "Falcon 1");
    assert!(!rockets[0].active);
    assert_eq!(rockets[1].id, TEST_ROCKET_ID);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect launches with missing optional fields to parse
async fn parses_launches_with_nulls() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    test.with_launches_endpoint(
        vec![LaunchFixture::new(TEST_LAUNCH_ID)
            .success(None)
            .rocket(None)
            .details(None)
            .upcoming(true)
            .build()],
        1,
    );

    let launches: Vec<LaunchDto> = gateway(&test).fetch_all(Resource::Launches).await?;

    assert_eq!(launches.len(), 1);
    assert!(launches[0].success.is_none());
    assert!(launches[0].rocket.is_none());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect an error status on the collection to be reported as unexpected
async fn reports_server_error() {
    let mut test = TestSetup::new().await;
    test.with_status_endpoint("/rockets", 503, "Service Unavailable", 1);

    let result = gateway(&test)
        .fetch_all::<RocketDto>(Resource::Rockets)
        .await;

    assert!(matches!(
        result,
        Err(GatewayError::UnexpectedStatus { status: 503, .. })
    ));
    test.assert_mocks();
}

#[tokio::test]
/// Expect a body that isn't a rocket list to be reported as an unexpected response
async fn reports_malformed_body() {
    let mut test = TestSetup::new().await;
    test.with_status_endpoint("/rockets", 200, "{\"docs\": []}", 1);

    let result = gateway(&test)
        .fetch_all::<RocketDto>(Resource::Rockets)
        .await;

    assert!(matches!(
        result,
        Err(GatewayError::UnexpectedResponse {
            resource: Resource::Rockets,
            ..
        })
    ));
    test.assert_mocks();
}

#[tokio::test]
/// Expect a network error when nothing listens at the base URL
async fn reports_unreachable_api() {
    let gateway = SpaceXGateway::new("http://127.0.0.1:9", ReqwestTransport::default());

    let result = gateway.fetch_all::<RocketDto>(Resource::Rockets).await;

    assert!(matches!(result, Err(GatewayError::Network { .. })));
}
