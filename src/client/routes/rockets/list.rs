use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaRocket;
use dioxus_free_icons::Icon;
use spacex_explorer::{
    config::Config,
    gateway::AppGateway,
    model::rocket::RocketDto,
    service::RocketService,
    util::format::format_date,
    view::{
        filter::{select_options, RocketStatusFilter},
        list::ListState,
        load::{load_into, LoadState, LoadStatus},
    },
};

use crate::client::{
    components::{
        EmptyState, ErrorAlert, FilterSelect, Loading, Page, Pagination, RocketStatusBadge,
        SearchInput,
    },
    router::Route,
};

#[component]
pub fn RocketList() -> Element {
    let config = use_context::<Config>();
    let gateway = use_context::<AppGateway>();

    let mut rockets = use_signal(LoadState::<Vec<RocketDto>>::default);
    let mut list = use_signal(|| ListState::new(RocketStatusFilter::All, config.rockets_per_page));

    use_future(move || {
        let gateway = gateway.clone();

        async move {
            load_into(&mut rockets, RocketService::new(&gateway).get_all_rockets()).await;
        }
    });

    let content = match rockets.read().status() {
        LoadStatus::Idle | LoadStatus::Loading => rsx!(Loading { label: "Loading rockets..." }),
        LoadStatus::Failed(message) => rsx!(ErrorAlert { message: message.clone() }),
        LoadStatus::Loaded(all) => {
            let list_state = list.read();
            let page = list_state.view(all);

            if page.is_empty() {
                rsx!(EmptyState {
                    title: "No rockets",
                    message: "No rockets found matching your filters."
                })
            } else {
                rsx!(
                    div { class: "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-6",
                        for rocket in page.items.iter() {
                            RocketCard { key: "{rocket.id}", rocket: (*rocket).clone() }
                        }
                    }
                    if page.shows_pagination() {
                        Pagination {
                            page: page.page,
                            total_pages: page.total_pages,
                            on_change: move |page| list.write().set_page(page),
                        }
                    }
                )
            }
        }
    };

    let query = list.read().query().to_string();
    let status = list.read().filter().value();

    rsx!(
        Title { "Rockets | SpaceX Explorer" }
        Meta { name: "description", content: "Browse the SpaceX rocket fleet." }
        Page {
            h1 { class: "text-3xl font-bold mb-6 flex items-center gap-2",
                Icon { width: 28, height: 28, icon: FaRocket }
                "SpaceX Rockets"
            }
            div { class: "card bg-base-200 mb-6",
                div { class: "card-body flex-col md:flex-row gap-4",
                    SearchInput {
                        value: query,
                        placeholder: "Search rockets...",
                        on_input: move |query: String| list.write().set_query(query),
                    }
                    FilterSelect {
                        options: select_options(&RocketStatusFilter::OPTIONS),
                        value: status,
                        on_change: move |value: String| {
                            if let Some(filter) = RocketStatusFilter::from_value(&value) {
                                list.write().set_filter(filter);
                            }
                        },
                    }
                }
            }
            {content}
        }
    )
}

#[component]
fn RocketCard(rocket: RocketDto) -> Element {
    let first_flight = format_date(rocket.first_flight);

    rsx!(
        div { class: "card bg-base-100 shadow-sm h-full",
            if let Some(image) = rocket.cover_image() {
                figure {
                    img { class: "h-48 w-full object-cover", src: "{image}", alt: "{rocket.name}" }
                }
            }
            div { class: "card-body",
                div { class: "flex justify-between items-center",
                    h2 { class: "card-title", "{rocket.name}" }
                    RocketStatusBadge { label: rocket.status_label(), class: rocket.badge_class() }
                }
                p { class: "text-sm opacity-70 line-clamp-3", "{rocket.description}" }
                p { class: "text-sm",
                    strong { "First Flight: " }
                    "{first_flight}"
                }
                p { class: "text-sm",
                    strong { "Success Rate: " }
                    "{rocket.success_rate_pct}%"
                }
                div { class: "card-actions mt-auto",
                    Link {
                        to: Route::RocketDetail { id: rocket.id.clone() },
                        class: "btn btn-primary btn-block",
                        "View Details"
                    }
                }
            }
        }
    )
}
