use spacex_explorer::{error::Error, service::LaunchService};
use spacex_test_utils::prelude::*;

use crate::util::gateway;

#[tokio::test]
/// Expect only launches flown by the rocket, in API order
async fn get_launches_by_rocket() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    test.with_launches_endpoint(
        vec![
            LaunchFixture::new("a").name("FalconSat").rocket(Some("falcon1")).build(),
            LaunchFixture::new("b").name("CRS-20").build(),
            LaunchFixture::new("c").name("Unassigned").rocket(None).build(),
            LaunchFixture::new("d").name("Starlink-1").build(),
        ],
        1,
    );

    let gateway = gateway(&test);
    let launches = LaunchService::new(&gateway)
        .get_launches_by_rocket(TEST_ROCKET_ID)
        .await?;

    let names: Vec<&str> = launches.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["CRS-20", "Starlink-1"]);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect an empty list for a rocket that never flew
async fn get_launches_by_rocket_none() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    test.with_launches_endpoint(vec![LaunchFixture::new("a").build()], 1);

    let gateway = gateway(&test);
    let launches = LaunchService::new(&gateway)
        .get_launches_by_rocket("starship")
        .await?;

    assert!(launches.is_empty());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a failed launch collection fetch to propagate
async fn get_launches_by_rocket_error() {
    let mut test = TestSetup::new().await;
    test.with_status_endpoint("/launches", 500, "Internal Server Error", 1);

    let gateway = gateway(&test);
    let result = LaunchService::new(&gateway)
        .get_launches_by_rocket(TEST_ROCKET_ID)
        .await;

    assert!(result.is_err());
    test.assert_mocks();
}

#[tokio::test]
/// Expect a single launch by ID
async fn get_launch() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    test.with_launch_endpoint(
        TEST_LAUNCH_ID,
        LaunchFixture::new(TEST_LAUNCH_ID).build(),
        1,
    );

    let gateway = gateway(&test);
    let launch = LaunchService::new(&gateway).get_launch(TEST_LAUNCH_ID).await?;

    assert_eq!(launch.id, TEST_LAUNCH_ID);
    assert_eq!(launch.rocket.as_deref(), Some(TEST_ROCKET_ID));
    test.assert_mocks();

    Ok(())
}
