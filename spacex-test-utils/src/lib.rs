pub mod constant;
pub mod fixtures;
pub mod endpoint;
pub mod setup;

pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        constant::{TEST_LAUNCH_ID, TEST_ROCKET_ID},
        fixtures::{launch::LaunchFixture, rocket::RocketFixture},
        TestSetup,
    };
}
