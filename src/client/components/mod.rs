pub mod empty_state;
pub mod loading;
pub mod navbar;
pub mod page;
pub mod pagination;
pub mod protected_layout;
pub mod search_bar;
pub mod status_badge;

pub use empty_state::{EmptyState, ErrorAlert, MissingEntity};
pub use loading::Loading;
pub use navbar::Navbar;
pub use page::Page;
pub use pagination::Pagination;
pub use protected_layout::ProtectedLayout;
pub use search_bar::{FilterSelect, SearchInput};
pub use status_badge::{LaunchStatusBadge, RocketStatusBadge};
