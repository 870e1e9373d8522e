//! SpaceX API mock endpoint creation.
//!
//! Each method registers a GET endpoint on the test's mockito server and keeps the
//! mock so [`TestSetup::assert_mocks`] can verify it was called exactly
//! `expected_requests` times.

use mockito::Matcher;
use serde_json::Value;

use crate::TestSetup;

impl TestSetup {
    /// Serve `rockets` from `GET /rockets`.
    pub fn with_rockets_endpoint(&mut self, rockets: Vec<Value>, expected_requests: usize) {
        self.with_json_endpoint("/rockets", Value::Array(rockets), expected_requests);
    }

    /// Serve `rocket` from `GET /rockets/{id}`.
    pub fn with_rocket_endpoint(&mut self, id: &str, rocket: Value, expected_requests: usize) {
        self.with_json_endpoint(&format!("/rockets/{}", id), rocket, expected_requests);
    }

    /// Serve `launches` from `GET /launches`.
    pub fn with_launches_endpoint(&mut self, launches: Vec<Value>, expected_requests: usize) {
        self.with_json_endpoint("/launches", Value::Array(launches), expected_requests);
    }

    /// Serve `launch` from `GET /launches/{id}`.
    pub fn with_launch_endpoint(&mut self, id: &str, launch: Value, expected_requests: usize) {
        self.with_json_endpoint(&format!("/launches/{}", id), launch, expected_requests);
    }

    /// Answer `GET {path}` with a bare status code and a plain text body.
    ///
    /// # Arguments
    /// - `path` - Request path, e.g. `/rockets/unknown`
    /// - `status` - HTTP status to respond with
    /// - `body` - Response body
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_status_endpoint(
        &mut self,
        path: &str,
        status: usize,
        body: &str,
        expected_requests: usize,
    ) {
        let mock = self
            .server
            .mock("GET", Matcher::Exact(path.to_string()))
            .with_status(status)
            .with_header("content-type", "text/plain")
            .with_body(body)
            .expect(expected_requests)
            .create();

        self.mocks.push(mock);
    }

    fn with_json_endpoint(&mut self, path: &str, body: Value, expected_requests: usize) {
        let mock = self
            .server
            .mock("GET", Matcher::Exact(path.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create();

        self.mocks.push(mock);
    }
}
