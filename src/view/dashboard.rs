use dioxus_logger::tracing;

use crate::{
    error::GatewayError,
    gateway::{HttpTransport, SpaceXGateway},
    model::{launch::LaunchDto, rocket::RocketDto},
    service::{LaunchService, RocketService},
    view::list::sort_by_date_desc,
};

const FEATURED_ROCKETS: usize = 2;
const UPCOMING_LAUNCHES: usize = 3;

/// Content of the dashboard cards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardSummary {
    /// First rockets of the collection, in API order
    pub rockets: Vec<RocketDto>,
    /// Upcoming launches, most recent date first
    pub upcoming_launches: Vec<LaunchDto>,
}

impl DashboardSummary {
    pub fn from_collections(rockets: Vec<RocketDto>, launches: Vec<LaunchDto>) -> Self {
        let mut upcoming: Vec<&LaunchDto> = launches.iter().filter(|l| l.upcoming).collect();
        sort_by_date_desc(&mut upcoming);

        Self {
            rockets: rockets.into_iter().take(FEATURED_ROCKETS).collect(),
            upcoming_launches: upcoming
                .into_iter()
                .take(UPCOMING_LAUNCHES)
                .cloned()
                .collect(),
        }
    }
}

/// Fetches rockets & launches concurrently and builds the dashboard summary.
///
/// # Returns
/// - `Ok(DashboardSummary)` - Both collections were fetched
/// - `Err(GatewayError)` - Either fetch failed
pub async fn fetch_dashboard<T: HttpTransport>(
    gateway: &SpaceXGateway<T>,
) -> Result<DashboardSummary, GatewayError> {
    let rocket_service = RocketService::new(gateway);
    let launch_service = LaunchService::new(gateway);

    let (rockets, launches) = futures::try_join!(
        rocket_service.get_all_rockets(),
        launch_service.get_all_launches()
    )?;

    tracing::debug!(
        rockets = rockets.len(),
        launches = launches.len(),
        "Fetched dashboard collections"
    );

    Ok(DashboardSummary::from_collections(rockets, launches))
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use spacex_test_utils::prelude::*;

    use crate::{
        error::GatewayError,
        gateway::{fake::FakeTransport, SpaceXGateway},
        model::{launch::LaunchDto, rocket::RocketDto},
        view::dashboard::{fetch_dashboard, DashboardSummary},
    };

    const BASE_URL: &str = "http://api.test/v4";

    #[test]
    /// Expect two rockets and the three upcoming launches with the latest dates
    fn summarizes_collections() {
        let rockets: Vec<RocketDto> = ["a", "b", "c"]
            .iter()
            .map(|id| serde_json::from_value(RocketFixture::new(id).build()).unwrap())
            .collect();
        let launches: Vec<LaunchDto> = [
            ("past", false, "2025-01-01T00:00:00.000Z"),
            ("u1", true, "2030-01-01T00:00:00.000Z"),
            ("u2", true, "2030-03-01T00:00:00.000Z"),
            ("u3", true, "2030-02-01T00:00:00.000Z"),
            ("u4", true, "2029-12-01T00:00:00.000Z"),
        ]
        .iter()
        .map(|(id, upcoming, date)| {
            serde_json::from_value(
                LaunchFixture::new(id)
                    .upcoming(*upcoming)
                    .date_utc(date)
                    .build(),
            )
            .unwrap()
        })
        .collect();

        let summary = DashboardSummary::from_collections(rockets, launches);

        let rocket_ids: Vec<&str> = summary.rockets.iter().map(|r| r.id.as_str()).collect();
        let launch_ids: Vec<&str> = summary
            .upcoming_launches
            .iter()
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(rocket_ids, vec!["a", "b"]);
        assert_eq!(launch_ids, vec!["u2", "u3", "u1"]);
    }

    #[tokio::test]
    /// Expect both collections to be requested and summarized
    async fn fetches_both_collections() {
        let transport = FakeTransport::new()
            .with_json(
                &format!("{}/rockets", BASE_URL),
                &json!([RocketFixture::new("falcon9").build()]),
            )
            .with_json(
                &format!("{}/launches", BASE_URL),
                &json!([LaunchFixture::new("crs20").upcoming(true).build()]),
            );
        let gateway = SpaceXGateway::new(BASE_URL, transport.clone());

        let summary = fetch_dashboard(&gateway).await.unwrap();

        assert_eq!(summary.rockets.len(), 1);
        assert_eq!(summary.upcoming_launches.len(), 1);
        assert_eq!(transport.calls().len(), 2);
    }

    #[tokio::test]
    /// Expect an error when either collection fails
    async fn fails_when_one_collection_fails() {
        let transport = FakeTransport::new().with_json(
            &format!("{}/rockets", BASE_URL),
            &json!([RocketFixture::new("falcon9").build()]),
        );
        let gateway = SpaceXGateway::new(BASE_URL, transport);

        let result = fetch_dashboard(&gateway).await;

        assert!(matches!(result, Err(GatewayError::Network { .. })));
    }
}
