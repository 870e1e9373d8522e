use serde_json::{json, Value};

/// Builder for a rocket payload.
///
/// Defaults describe an active Falcon 9; setters override single fields.
///
/// # Example
/// ```
/// use spacex_test_utils::prelude::*;
///
/// let rocket = RocketFixture::new("falcon1").name("Falcon 1").active(false).build();
/// assert_eq!(rocket["active"], false);
/// ```
#[derive(Clone, Debug)]
pub struct RocketFixture(Value);

impl RocketFixture {
    /// Create a rocket payload with the given ID and default test values.
    pub fn new(id: &str) -> Self {
        Self(json!({
            "id": id,
            "name": "Falcon 9",
            "type": "rocket",
            "description": "Falcon 9 is a two-stage rocket designed and manufactured by SpaceX.",
            "active": true,
            "stages": 2,
            "boosters": 0,
            "first_flight": "2010-06-04",
            "success_rate_pct": 98,
            "cost_per_launch": 50000000,
            "company": "SpaceX",
            "country": "United States",
            "wikipedia": "https://en.wikipedia.org/wiki/Falcon_9",
            "flickr_images": ["https://farm1.staticflickr.com/929/28787338307_3453a11a77_b.jpg"],
            "height": { "meters": 70, "feet": 229.6 },
            "diameter": { "meters": 3.7, "feet": 12 },
            "mass": { "kg": 549054, "lb": 1207920 },
            "engines": {
                "number": 9,
                "type": "merlin",
                "version": "1D+",
                "layout": "octaweb",
                "propellant_1": "liquid oxygen",
                "propellant_2": "RP-1 kerosene"
            },
            "first_stage": {
                "reusable": true,
                "engines": 9,
                "fuel_amount_tons": 385,
                "burn_time_sec": 162
            },
            "second_stage": {
                "reusable": false,
                "engines": 1,
                "fuel_amount_tons": 90,
                "burn_time_sec": 397
            },
            "payload_weights": [
                { "id": "leo", "name": "Low Earth Orbit", "kg": 22800, "lb": 50265 }
            ]
        }))
    }

    pub fn name(self, name: &str) -> Self {
        self.set("name", json!(name))
    }

    pub fn description(self, description: &str) -> Self {
        self.set("description", json!(description))
    }

    pub fn active(self, active: bool) -> Self {
        self.set("active", json!(active))
    }

    pub fn flickr_images(self, images: &[&str]) -> Self {
        self.set("flickr_images", json!(images))
    }

    /// Override any field with a raw JSON value
    pub fn set(mut self, field: &str, value: Value) -> Self {
        self.0[field] = value;
        self
    }

    pub fn build(self) -> Value {
        self.0
    }
}
