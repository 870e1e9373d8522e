pub mod detail;
pub mod list;

pub use detail::LaunchDetail;
pub use list::LaunchList;
