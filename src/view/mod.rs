//! Framework-agnostic view-models behind the pages.
//!
//! Everything here is plain state & async functions over a [`StateCell`](state::StateCell),
//! so pages drive it through Dioxus signals and tests through `Rc<RefCell<_>>`.

pub mod dashboard;
pub mod detail;
pub mod filter;
pub mod list;
pub mod load;
pub mod state;
