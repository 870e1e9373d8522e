use dioxus::prelude::*;
use spacex_explorer::{
    config::Config,
    gateway::AppGateway,
    session::{storage::platform_storage, SessionStore},
};

use crate::client::{router::Route, store::navigation::NavState};

const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
const TAILWIND_JS: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

#[component]
pub fn App() -> Element {
    let config = use_context::<Config>();

    use_context_provider(|| AppGateway::from_config(&config));
    let mut session = use_context_provider(|| {
        Signal::new(SessionStore::from_config(&config, platform_storage()))
    });
    use_context_provider(|| Signal::new(NavState::default()));

    // Protected routes render a loading state until the persisted session was checked
    use_effect(move || {
        session.with_mut(|store| store.initialize());
    });

    use_drop(move || {
        if let Ok(mut store) = session.try_write() {
            store.teardown();
        }
    });

    rsx! {
        document::Stylesheet { href: DAISYUI_CSS }
        document::Script { src: TAILWIND_JS }
        Router::<Route> {}
    }
}
