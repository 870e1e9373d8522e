use crate::{
    error::GatewayError,
    gateway::{HttpTransport, Resource, SpaceXGateway},
    model::launch::LaunchDto,
};

pub struct LaunchService<'a, T> {
    gateway: &'a SpaceXGateway<T>,
}

impl<'a, T: HttpTransport> LaunchService<'a, T> {
    pub fn new(gateway: &'a SpaceXGateway<T>) -> Self {
        Self { gateway }
    }

    pub async fn get_all_launches(&self) -> Result<Vec<LaunchDto>, GatewayError> {
        self.gateway.fetch_all(Resource::Launches).await
    }

    pub async fn get_launch(&self, id: &str) -> Result<LaunchDto, GatewayError> {
        self.gateway.fetch_one(Resource::Launches, id).await
    }

    /// Retrieves every launch flown by a rocket.
    ///
    /// The API is not queried by rocket; the full launch collection is fetched and
    /// scanned client-side.
    ///
    /// # Arguments
    /// - `rocket_id` - ID of the rocket
    ///
    /// # Returns
    /// - `Ok(Vec<LaunchDto>)` - Launches referencing the rocket, in API order
    /// - `Err(GatewayError)` - The launch collection could not be fetched
    pub async fn get_launches_by_rocket(
        &self,
        rocket_id: &str,
    ) -> Result<Vec<LaunchDto>, GatewayError> {
        let launches = self.get_all_launches().await?;

        Ok(launches
            .into_iter()
            .filter(|launch| launch.rocket.as_deref() == Some(rocket_id))
            .collect())
    }
}
