use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A launch as returned by `GET /launches` and `GET /launches/{id}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaunchDto {
    pub id: String,
    pub flight_number: u32,
    pub name: String,
    pub date_utc: DateTime<Utc>,
    pub upcoming: bool,
    /// `None` when the outcome is not (yet) known
    pub success: Option<bool>,
    /// ID of the rocket flown on this launch
    pub rocket: Option<String>,
    pub details: Option<String>,
    /// Launch window in seconds
    pub window: Option<u32>,
    pub static_fire_date_utc: Option<DateTime<Utc>>,
    #[serde(default)]
    pub failures: Vec<FailureDto>,
    #[serde(default)]
    pub links: LinksDto,
}

/// Mission photos shown on the launch detail page
const MISSION_IMAGE_LIMIT: usize = 4;

impl LaunchDto {
    pub fn status(&self) -> LaunchStatus {
        LaunchStatus::of(self.upcoming, self.success)
    }

    /// Up to four original-size flickr photos of the mission
    pub fn mission_images(&self) -> &[String] {
        let original = &self.links.flickr.original;

        &original[..original.len().min(MISSION_IMAGE_LIMIT)]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FailureDto {
    pub reason: String,
    pub time: Option<i64>,
    pub altitude: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LinksDto {
    #[serde(default)]
    pub patch: PatchDto,
    pub webcast: Option<String>,
    pub wikipedia: Option<String>,
    #[serde(default)]
    pub flickr: FlickrDto,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchDto {
    pub small: Option<String>,
    pub large: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FlickrDto {
    #[serde(default)]
    pub small: Vec<String>,
    #[serde(default)]
    pub original: Vec<String>,
}

/// Displayed status of a launch.
///
/// `Upcoming` takes precedence over the success flag, an upcoming launch never
/// displays as `Unknown` even though its outcome is not known yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LaunchStatus {
    Upcoming,
    Success,
    Failed,
    Unknown,
}

impl LaunchStatus {
    pub fn of(upcoming: bool, success: Option<bool>) -> Self {
        match (upcoming, success) {
            (true, _) => Self::Upcoming,
            (false, Some(true)) => Self::Success,
            (false, Some(false)) => Self::Failed,
            (false, None) => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Success => "Success",
            Self::Failed => "Failed",
            Self::Unknown => "Unknown",
        }
    }

    /// daisyUI badge class for the status
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Upcoming => "badge-info",
            Self::Success => "badge-success",
            Self::Failed => "badge-error",
            Self::Unknown => "badge-neutral",
        }
    }
}
