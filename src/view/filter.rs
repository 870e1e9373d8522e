//! Rocket & launch predicates for the list pages.

use chrono::{DateTime, Months, Utc};

use crate::{
    model::{launch::LaunchDto, rocket::RocketDto},
    view::list::{CategoryFilter, Dated, Searchable},
};

impl Searchable for RocketDto {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        Some(&self.description)
    }
}

impl Searchable for LaunchDto {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.details.as_deref()
    }
}

impl Dated for LaunchDto {
    fn date(&self) -> DateTime<Utc> {
        self.date_utc
    }
}

/// Select option: filter, `<option>` value, label
pub type FilterOption<T> = (T, &'static str, &'static str);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RocketStatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl RocketStatusFilter {
    pub const OPTIONS: [FilterOption<Self>; 3] = [
        (Self::All, "all", "All Status"),
        (Self::Active, "active", "Active"),
        (Self::Inactive, "inactive", "Inactive"),
    ];

    pub fn value(&self) -> &'static str {
        option_value(&Self::OPTIONS, *self)
    }

    pub fn from_value(value: &str) -> Option<Self> {
        option_from_value(&Self::OPTIONS, value)
    }
}

impl CategoryFilter<RocketDto> for RocketStatusFilter {
    fn matches(&self, rocket: &RocketDto) -> bool {
        match self {
            Self::All => true,
            Self::Active => rocket.active,
            Self::Inactive => !rocket.active,
        }
    }
}

/// Filter on the launch outcome tri-state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LaunchStatusFilter {
    #[default]
    All,
    Success,
    Failed,
    Unknown,
}

impl LaunchStatusFilter {
    pub const OPTIONS: [FilterOption<Self>; 4] = [
        (Self::All, "all", "All Status"),
        (Self::Success, "success", "Success"),
        (Self::Failed, "failed", "Failed"),
        (Self::Unknown, "unknown", "Unknown"),
    ];

    pub fn value(&self) -> &'static str {
        option_value(&Self::OPTIONS, *self)
    }

    pub fn from_value(value: &str) -> Option<Self> {
        option_from_value(&Self::OPTIONS, value)
    }

    fn matches(&self, launch: &LaunchDto) -> bool {
        match self {
            Self::All => true,
            Self::Success => launch.success == Some(true),
            Self::Failed => launch.success == Some(false),
            Self::Unknown => launch.success.is_none(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeFilter {
    All,
    #[default]
    Upcoming,
    Past,
    /// Launched within the last three calendar months
    Recent,
}

impl TimeFilter {
    pub const OPTIONS: [FilterOption<Self>; 4] = [
        (Self::All, "all", "All Time"),
        (Self::Upcoming, "upcoming", "Upcoming"),
        (Self::Past, "past", "Past"),
        (Self::Recent, "recent", "Recent (3m)"),
    ];

    pub fn value(&self) -> &'static str {
        option_value(&Self::OPTIONS, *self)
    }

    pub fn from_value(value: &str) -> Option<Self> {
        option_from_value(&Self::OPTIONS, value)
    }

    fn matches(&self, launch: &LaunchDto, now: DateTime<Utc>) -> bool {
        match self {
            Self::All => true,
            Self::Upcoming => launch.upcoming,
            Self::Past => !launch.upcoming,
            Self::Recent => {
                let three_months_ago = now
                    .checked_sub_months(Months::new(3))
                    .unwrap_or(DateTime::<Utc>::MIN_UTC);

                launch.date_utc >= three_months_ago && launch.date_utc <= now
            }
        }
    }
}

/// Launch list filter: status AND time, evaluated against a fixed `now`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaunchFilter {
    pub status: LaunchStatusFilter,
    pub time: TimeFilter,
    pub now: DateTime<Utc>,
}

impl LaunchFilter {
    /// Default filter of the launch list.
    ///
    /// A list scoped to one rocket shows all of its launches, otherwise only upcoming
    /// launches are shown until the user changes the time filter.
    pub fn initial(now: DateTime<Utc>, scoped_to_rocket: bool) -> Self {
        Self {
            status: LaunchStatusFilter::All,
            time: if scoped_to_rocket {
                TimeFilter::All
            } else {
                TimeFilter::Upcoming
            },
            now,
        }
    }
}

impl CategoryFilter<LaunchDto> for LaunchFilter {
    fn matches(&self, launch: &LaunchDto) -> bool {
        self.status.matches(launch) && self.time.matches(launch, self.now)
    }
}

/// `(value, label)` pairs for rendering a filter's `<select>`
pub fn select_options<T>(options: &[FilterOption<T>]) -> Vec<(&'static str, &'static str)> {
    options
        .iter()
        .map(|(_, value, label)| (*value, *label))
        .collect()
}

fn option_value<T: PartialEq + Copy>(options: &[FilterOption<T>], filter: T) -> &'static str {
    options
        .iter()
        .find(|(option, _, _)| *option == filter)
        .map(|(_, value, _)| *value)
        .unwrap_or("all")
}

fn option_from_value<T: Copy>(options: &[FilterOption<T>], value: &str) -> Option<T> {
    options
        .iter()
        .find(|(_, option_value, _)| *option_value == value)
        .map(|(option, _, _)| *option)
}
