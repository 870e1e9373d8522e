//! SpaceX Explorer: browse SpaceX rockets & launches behind a mock login.
//!
//! The library holds everything that is not rendering: the API gateway, view-models,
//! the session store and form validation. The `spacex-explorer` binary renders it with
//! Dioxus.

pub mod config;
pub mod error;
pub mod form;
pub mod gateway;
pub mod model;
pub mod service;
pub mod session;
pub mod util;
pub mod view;
