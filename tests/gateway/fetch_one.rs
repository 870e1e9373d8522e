use spacex_explorer::{
    error::{Error, GatewayError},
    gateway::Resource,
    model::{launch::LaunchDto, rocket::RocketDto},
};
use spacex_test_utils::prelude::*;

use crate::util::gateway;

#[tokio::test]
/// Expect the rocket with the requested ID
async fn fetches_rocket_by_id() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    test.with_rocket_endpoint(TEST_ROCKET_ID, RocketFixture::new(TEST_ROCKET_ID).build(), 1);

    let rocket: RocketDto = gateway(&test)
        .fetch_one(Resource::Rockets, TEST_ROCKET_ID)
        .await?;

    assert_eq!(rocket.id, TEST_ROCKET_ID);
    assert_eq!(rocket.engines.number, 9);
    assert_eq!(rocket.payload_weights.len(), 1);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect launch links & failures to be parsed
async fn fetches_launch_by_id() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    test.with_launch_endpoint(
        TEST_LAUNCH_ID,
        LaunchFixture::new(TEST_LAUNCH_ID)
            .success(Some(false))
            .set(
                "failures",
                serde_json::json!([{ "reason": "engine failure", "time": 139, "altitude": 40 }]),
            )
            .build(),
        1,
    );

    let launch: LaunchDto = gateway(&test)
        .fetch_one(Resource::Launches, TEST_LAUNCH_ID)
        .await?;

    assert_eq!(launch.failures.len(), 1);
    assert_eq!(launch.failures[0].time, Some(139));
    assert!(launch.links.webcast.is_some());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect NotFound for an ID the API does not know
async fn maps_404_to_not_found() {
    let mut test = TestSetup::new().await;
    test.with_status_endpoint("/rockets/unknown", 404, "Not Found", 1);

    let result = gateway(&test)
        .fetch_one::<RocketDto>(Resource::Rockets, "unknown")
        .await;

    assert_eq!(
        result,
        Err(GatewayError::NotFound {
            resource: Resource::Rockets,
            id: "unknown".to_string()
        })
    );
    test.assert_mocks();
}

#[tokio::test]
/// Expect NotFound for an ID the API rejects as malformed
async fn maps_400_to_not_found() {
    let mut test = TestSetup::new().await;
    test.with_status_endpoint("/launches/not-an-object-id", 400, "Bad Request", 1);

    let result = gateway(&test)
        .fetch_one::<LaunchDto>(Resource::Launches, "not-an-object-id")
        .await;

    assert!(result.is_err_and(|err| err.is_not_found()));
    test.assert_mocks();
}

#[tokio::test]
/// Expect other error statuses to stay distinct from NotFound
async fn keeps_server_errors_distinct() {
    let mut test = TestSetup::new().await;
    test.with_status_endpoint(&format!("/rockets/{}", TEST_ROCKET_ID), 500, "oops", 1);

    let result = gateway(&test)
        .fetch_one::<RocketDto>(Resource::Rockets, TEST_ROCKET_ID)
        .await;

    assert!(matches!(
        result,
        Err(GatewayError::UnexpectedStatus { status: 500, .. })
    ));
    test.assert_mocks();
}
