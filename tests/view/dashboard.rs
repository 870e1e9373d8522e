use spacex_explorer::{error::Error, view::dashboard::fetch_dashboard};
use spacex_test_utils::prelude::*;

use crate::util::gateway;

#[tokio::test]
/// Expect the first two rockets & the three latest upcoming launches
async fn builds_summary_from_api() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    test.with_rockets_endpoint(
        vec![
            RocketFixture::new("falcon1").name("Falcon 1").build(),
            RocketFixture::new(TEST_ROCKET_ID).build(),
            RocketFixture::new("starship").name("Starship").build(),
        ],
        1,
    );
    test.with_launches_endpoint(
        vec![
            LaunchFixture::new("past").build(),
            LaunchFixture::new("u1").upcoming(true).date_utc("2025-01-01T00:00:00.000Z").build(),
            LaunchFixture::new("u2").upcoming(true).date_utc("2025-03-01T00:00:00.000Z").build(),
            LaunchFixture::new("u3").upcoming(true).date_utc("2025-02-01T00:00:00.000Z").build(),
            LaunchFixture::new("u4").upcoming(true).date_utc("2024-12-01T00:00:00.000Z").build(),
        ],
        1,
    );

    let summary = fetch_dashboard(&gateway(&test)).await?;

    assert_eq!(summary.rockets.len(), 2);
    assert_eq!(summary.rockets[1].id, TEST_ROCKET_ID);
    let ids: Vec<&str> = summary.upcoming_launches.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["u2", "u3", "u1"]);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the dashboard to fail when the launch collection is unavailable
async fn fails_when_launches_fail() {
    let mut test = TestSetup::new().await;
    test.with_rockets_endpoint(vec![RocketFixture::new(TEST_ROCKET_ID).build()], 1);
    test.with_status_endpoint("/launches", 502, "Bad Gateway", 1);

    let result = fetch_dashboard(&gateway(&test)).await;

    assert!(result.is_err());
    test.assert_mocks();
}
