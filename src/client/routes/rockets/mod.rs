pub mod detail;
pub mod list;

pub use detail::RocketDetail;
pub use list::RocketList;
