//! Resource services.
//!
//! Thin wrappers over [`SpaceXGateway`](crate::gateway::SpaceXGateway) that fix the
//! resource and entity type of each call.

pub mod launch;
pub mod rocket;

pub use launch::LaunchService;
pub use rocket::RocketService;
