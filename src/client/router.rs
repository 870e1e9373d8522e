use dioxus::prelude::*;

use crate::client::{
    components::ProtectedLayout,
    routes::{
        launches::{LaunchDetail, LaunchList},
        rockets::{RocketDetail, RocketList},
        Dashboard, Login, NotFound, Register,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},

    #[route("/register")]
    Register {},

    #[layout(ProtectedLayout)]

        #[route("/")]
        Dashboard {},

        #[route("/rockets")]
        RocketList {},

        #[route("/rockets/:id")]
        RocketDetail { id: String },

        #[route("/launches")]
        LaunchList {},

        #[route("/launches/:id")]
        LaunchDetail { id: String },

    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
