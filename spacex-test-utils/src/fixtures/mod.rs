//! JSON payload factories for SpaceX API entities.
//!
//! Fixtures produce `serde_json::Value` rather than the application's DTOs so they can
//! be served by mock endpoints unchanged and exercise the real deserialization path:
//!
//! - `rocket` - `GET /rockets` & `GET /rockets/{id}` entries
//! - `launch` - `GET /launches` & `GET /launches/{id}` entries

pub mod launch;
pub mod rocket;
