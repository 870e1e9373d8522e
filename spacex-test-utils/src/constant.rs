//! IDs used across tests.
//!
//! Taken from the public SpaceX API so fixtures look like real payloads, but no test
//! ever reaches the real API.

/// ID of Falcon 9 in the SpaceX API.
pub static TEST_ROCKET_ID: &str = "5e9d0d95eda69973a809d1ec";

/// ID of the CRS-20 launch in the SpaceX API.
pub static TEST_LAUNCH_ID: &str = "5eb87d42ffd86e000604b384";
