pub mod auth;
pub mod dashboard;
pub mod launches;
pub mod not_found;
pub mod rockets;

pub use auth::{Login, Register};
pub use dashboard::Dashboard;
pub use not_found::NotFound;
