use spacex_explorer::{error::Error, service::RocketService};
use spacex_test_utils::prelude::*;

use crate::util::gateway;

#[tokio::test]
/// Expect all rockets to be retrieved with a single request
async fn get_all_rockets() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    test.with_rockets_endpoint(
        vec![
            RocketFixture::new("falcon1").name("Falcon 1").build(),
            RocketFixture::new(TEST_ROCKET_ID).build(),
            RocketFixture::new("starship").name("Starship").build(),
        ],
        1,
    );

    let gateway = gateway(&test);
    let rockets = RocketService::new(&gateway).get_all_rockets().await?;

    let names: Vec<&str> = rockets.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Falcon 1", "Falcon 9", "Starship"]);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect an unknown rocket ID to be reported as not found
async fn get_rocket_not_found() {
    let mut test = TestSetup::new().await;
    test.with_status_endpoint("/rockets/missing", 404, "Not Found", 1);

    let gateway = gateway(&test);
    let result = RocketService::new(&gateway).get_rocket("missing").await;

    assert!(result.is_err_and(|err| err.is_not_found()));
    test.assert_mocks();
}
