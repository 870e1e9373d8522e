use crate::{
    error::GatewayError,
    gateway::{HttpTransport, Resource, SpaceXGateway},
    model::rocket::RocketDto,
};

pub struct RocketService<'a, T> {
    gateway: &'a SpaceXGateway<T>,
}

impl<'a, T: HttpTransport> RocketService<'a, T> {
    pub fn new(gateway: &'a SpaceXGateway<T>) -> Self {
        Self { gateway }
    }

    pub async fn get_all_rockets(&self) -> Result<Vec<RocketDto>, GatewayError> {
        self.gateway.fetch_all(Resource::Rockets).await
    }

    pub async fn get_rocket(&self, id: &str) -> Result<RocketDto, GatewayError> {
        self.gateway.fetch_one(Resource::Rockets, id).await
    }
}
