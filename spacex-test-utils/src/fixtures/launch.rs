use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::constant::TEST_ROCKET_ID;

/// Builder for a launch payload.
///
/// Defaults describe a successful past launch flown by [`TEST_ROCKET_ID`].
#[derive(Clone, Debug)]
pub struct LaunchFixture(Value);

impl LaunchFixture {
    /// Create a launch payload with the given ID and default test values.
    pub fn new(id: &str) -> Self {
        Self(json!({
            "id": id,
            "flight_number": 91,
            "name": "CRS-20",
            "date_utc": "2020-03-07T04:50:31.000Z",
            "upcoming": false,
            "success": true,
            "rocket": TEST_ROCKET_ID,
            "details": "SpaceX's 20th and final Crew Resupply Mission under the original NASA CRS contract.",
            "window": 0,
            "static_fire_date_utc": "2020-03-01T10:20:00.000Z",
            "failures": [],
            "links": {
                "patch": {
                    "small": "https://images2.imgbox.com/53/22/dh0XSLXO_o.png",
                    "large": "https://images2.imgbox.com/15/2b/NAcsTEB6_o.png"
                },
                "webcast": "https://youtu.be/1MkcWK2PnsU",
                "wikipedia": "https://en.wikipedia.org/wiki/SpaceX_CRS-20",
                "flickr": {
                    "small": [],
                    "original": [
                        "https://live.staticflickr.com/65535/49635401403_96f9c322dc_o.jpg"
                    ]
                }
            }
        }))
    }

    pub fn name(self, name: &str) -> Self {
        self.set("name", json!(name))
    }

    pub fn flight_number(self, flight_number: u32) -> Self {
        self.set("flight_number", json!(flight_number))
    }

    /// RFC 3339 timestamp, e.g. `2020-03-07T04:50:31.000Z`
    pub fn date_utc(self, date_utc: &str) -> Self {
        self.set("date_utc", json!(date_utc))
    }

    pub fn date(self, date: DateTime<Utc>) -> Self {
        self.set("date_utc", json!(date.to_rfc3339()))
    }

    pub fn upcoming(self, upcoming: bool) -> Self {
        self.set("upcoming", json!(upcoming))
    }

    pub fn success(self, success: Option<bool>) -> Self {
        self.set("success", json!(success))
    }

    pub fn rocket(self, rocket_id: Option<&str>) -> Self {
        self.set("rocket", json!(rocket_id))
    }

    pub fn details(self, details: Option<&str>) -> Self {
        self.set("details", json!(details))
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
