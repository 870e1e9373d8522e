pub mod launch;
pub mod rocket;
pub mod user;
