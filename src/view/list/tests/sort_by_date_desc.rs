use super::*;
use crate::view::list::sort_by_date_desc;

#[test]
/// Expect the most recent launch first
fn orders_most_recent_first() {
    let launches = numbered_launches(3);
    let mut ordered: Vec<&LaunchDto> = launches.iter().collect();

    sort_by_date_desc(&mut ordered);

    let ids: Vec<&str> = ordered.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["launch-2", "launch-1", "launch-0"]);
}

#[test]
/// Expect launches sharing a date to keep their relative order
fn is_stable_for_equal_dates() {
    let date = "2022-10-05T16:00:00.000Z";
    let launches = vec![
        launch(LaunchFixture::new("first").date_utc(date)),
        launch(LaunchFixture::new("older").date_utc("2021-01-01T00:00:00.000Z")),
        launch(LaunchFixture::new("second").date_utc(date)),
    ];
    let mut ordered: Vec<&LaunchDto> = launches.iter().collect();

    sort_by_date_desc(&mut ordered);

    let ids: Vec<&str> = ordered.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["first", "second", "older"]);
}
