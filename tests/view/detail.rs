use std::{cell::RefCell, rc::Rc};

use spacex_explorer::view::detail::{
    load_launch_detail, load_rocket_detail, DetailPhase, LaunchDetail, RocketDetail,
};
use spacex_test_utils::prelude::*;

use crate::util::gateway;

#[tokio::test]
/// Expect the rocket & its launches to be loaded
async fn rocket_detail_with_launches() {
    let mut test = TestSetup::new().await;
    test.with_rocket_endpoint(TEST_ROCKET_ID, RocketFixture::new(TEST_ROCKET_ID).build(), 1);
    test.with_launches_endpoint(
        vec![
            LaunchFixture::new("a").build(),
            LaunchFixture::new("b").rocket(Some("falcon1")).build(),
        ],
        1,
    );

    let mut state = Rc::new(RefCell::new(RocketDetail::default()));
    let stored = load_rocket_detail(&mut state, &gateway(&test), TEST_ROCKET_ID).await;

    let detail = state.borrow();
    assert!(stored);
    assert_eq!(detail.phase(), DetailPhase::Resolved);
    assert_eq!(detail.primary().map(|r| r.id.as_str()), Some(TEST_ROCKET_ID));
    assert_eq!(detail.secondary().map(Vec::len), Some(1));
    test.assert_mocks();
}

#[tokio::test]
/// Expect an unknown rocket to end in the not found phase without fetching launches
async fn rocket_detail_not_found() {
    let mut test = TestSetup::new().await;
    test.with_status_endpoint("/rockets/missing", 404, "Not Found", 1);
    test.with_launches_endpoint(vec![], 0);

    let mut state = Rc::new(RefCell::new(RocketDetail::default()));
    load_rocket_detail(&mut state, &gateway(&test), "missing").await;

    let detail = state.borrow();
    assert!(detail.not_found());
    assert!(detail.primary().is_none());
    assert!(detail.message().is_some());
    test.assert_mocks();
}

#[tokio::test]
/// Expect the launch to be enriched with the rocket that flew it
async fn launch_detail_with_rocket() {
    let mut test = TestSetup::new().await;
    test.with_launch_endpoint(TEST_LAUNCH_ID, LaunchFixture::new(TEST_LAUNCH_ID).build(), 1);
    test.with_rocket_endpoint(TEST_ROCKET_ID, RocketFixture::new(TEST_ROCKET_ID).build(), 1);

    let mut state = Rc::new(RefCell::new(LaunchDetail::default()));
    load_launch_detail(&mut state, &gateway(&test), TEST_LAUNCH_ID).await;

    let detail = state.borrow();
    assert_eq!(detail.phase(), DetailPhase::Resolved);
    assert_eq!(detail.secondary().map(|r| r.name.as_str()), Some("Falcon 9"));
    test.assert_mocks();
}

#[tokio::test]
/// Expect the launch to still display when its rocket can't be fetched
async fn launch_detail_rocket_unavailable() {
    let mut test = TestSetup::new().await;
    test.with_launch_endpoint(TEST_LAUNCH_ID, LaunchFixture::new(TEST_LAUNCH_ID).build(), 1);
    test.with_status_endpoint(&format!("/rockets/{}", TEST_ROCKET_ID), 500, "oops", 1);

    let mut state = Rc::new(RefCell::new(LaunchDetail::default()));
    load_launch_detail(&mut state, &gateway(&test), TEST_LAUNCH_ID).await;

    let detail = state.borrow();
    assert_eq!(detail.phase(), DetailPhase::Resolved);
    assert!(detail.primary().is_some());
    assert!(detail.secondary_unavailable());
    test.assert_mocks();
}
