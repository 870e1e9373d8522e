mod paginate;
mod sort_by_date_desc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use spacex_test_utils::prelude::*;

use crate::model::{launch::LaunchDto, rocket::RocketDto};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

fn rocket(fixture: RocketFixture) -> RocketDto {
    serde_json::from_value(fixture.build()).unwrap()
}

fn launch(fixture: LaunchFixture) -> LaunchDto {
    serde_json::from_value(fixture.build()).unwrap()
}

/// `count` past launches named "Launch N", one day apart starting 2020-01-01
fn numbered_launches(count: usize) -> Vec<LaunchDto> {
    let first = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();

    (0..count)
        .map(|i| {
            launch(
                LaunchFixture::new(&format!("launch-{}", i))
                    .name(&format!("Launch {}", i))
                    .flight_number(i as u32 + 1)
                    .upcoming(false)
                    .date(first + Duration::days(i as i64)),
            )
        })
        .collect()
}
