use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A rocket as returned by `GET /rockets` and `GET /rockets/{id}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RocketDto {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub active: bool,
    pub stages: u32,
    pub boosters: u32,
    pub first_flight: NaiveDate,
    pub success_rate_pct: u32,
    pub cost_per_launch: u64,
    pub company: String,
    pub country: String,
    pub wikipedia: Option<String>,
    #[serde(default)]
    pub flickr_images: Vec<String>,
    pub height: LengthDto,
    pub diameter: LengthDto,
    pub mass: MassDto,
    pub engines: EnginesDto,
    pub first_stage: StageDto,
    pub second_stage: StageDto,
    #[serde(default)]
    pub payload_weights: Vec<PayloadWeightDto>,
}

impl RocketDto {
    pub fn status_label(&self) -> &'static str {
        if self.active {
            "Active"
        } else {
            "Inactive"
        }
    }

    /// daisyUI badge modifier matching [`Self::status_label`]
    pub fn badge_class(&self) -> &'static str {
        if self.active {
            "badge-success"
        } else {
            "badge-error"
        }
    }

    /// First flickr image, used as the rocket's card image
    pub fn cover_image(&self) -> Option<&str> {
        self.flickr_images.first().map(String::as_str)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LengthDto {
    pub meters: Option<f64>,
    pub feet: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MassDto {
    pub kg: u64,
    pub lb: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnginesDto {
    pub number: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
    pub layout: Option<String>,
    pub propellant_1: String,
    pub propellant_2: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StageDto {
    pub reusable: bool,
    pub engines: u32,
    pub fuel_amount_tons: Option<f64>,
    pub burn_time_sec: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PayloadWeightDto {
    pub id: String,
    pub name: String,
    pub kg: u64,
    pub lb: u64,
}

#[cfg(test)]
mod tests {
    use spacex_test_utils::prelude::*;

    use crate::model::rocket::RocketDto;

    #[test]
    /// Expect label & badge to follow the active flag
    fn status_follows_active_flag() {
        let active: RocketDto =
            serde_json::from_value(RocketFixture::new(TEST_ROCKET_ID).active(true).build())
                .unwrap();
        let retired: RocketDto =
            serde_json::from_value(RocketFixture::new("falcon1").active(false).build()).unwrap();

        assert_eq!(active.status_label(), "Active");
        assert_eq!(active.badge_class(), "badge-success");
        assert_eq!(retired.status_label(), "Inactive");
        assert_eq!(retired.badge_class(), "badge-error");
    }
}
