use chrono::Utc;
use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCalendar, FaXmark};
use dioxus_free_icons::Icon;
use spacex_explorer::{
    config::Config,
    gateway::AppGateway,
    model::launch::LaunchDto,
    service::LaunchService,
    util::format::format_date,
    view::{
        filter::{select_options, LaunchFilter, LaunchStatusFilter, TimeFilter},
        list::ListState,
        load::{load_into, LoadState, LoadStatus},
    },
};

use crate::client::{
    components::{
        EmptyState, ErrorAlert, FilterSelect, LaunchStatusBadge, Loading, Page, Pagination,
        SearchInput,
    },
    router::Route,
    store::navigation::NavState,
};

#[component]
pub fn LaunchList() -> Element {
    let config = use_context::<Config>();
    let gateway = use_context::<AppGateway>();
    let mut nav_state = use_context::<Signal<NavState>>();

    // "View All Launches" on a rocket page opens the list scoped to that rocket once
    let mut rocket_scope =
        use_signal(|| nav_state.with_mut(|nav| nav.launch_rocket_scope.take()));

    let mut launches = use_signal(LoadState::<Vec<LaunchDto>>::default);
    let mut list = use_signal(|| {
        ListState::new(
            LaunchFilter::initial(Utc::now(), rocket_scope.peek().is_some()),
            config.launches_per_page,
        )
    });

    use_effect(move || {
        let scope = rocket_scope();
        let gateway = gateway.clone();

        spawn(async move {
            let service = LaunchService::new(&gateway);

            match scope {
                Some(rocket_id) => {
                    load_into(&mut launches, service.get_launches_by_rocket(&rocket_id)).await
                }
                None => load_into(&mut launches, service.get_all_launches()).await,
            };
        });
    });

    let content = match launches.read().status() {
        LoadStatus::Idle | LoadStatus::Loading => rsx!(Loading { label: "Loading launches..." }),
        LoadStatus::Failed(message) => rsx!(ErrorAlert { message: message.clone() }),
        LoadStatus::Loaded(all) => {
            let list_state = list.read();
            let page = list_state.view_by_date_desc(all);

            if page.is_empty() {
                rsx!(EmptyState {
                    title: "No launches",
                    message: "No launches found matching your filters."
                })
            } else {
                rsx!(
                    div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6",
                        for launch in page.items.iter() {
                            LaunchCard { key: "{launch.id}", launch: (*launch).clone() }
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
    let status = list.read().filter().status.value();
    let time = list.read().filter().time.value();
    let scoped = rocket_scope.read().is_some();

    rsx!(
        Title { "Launches | SpaceX Explorer" }
        Meta { name: "description", content: "Browse past and upcoming SpaceX launches." }
        Page {
            h1 { class: "text-3xl font-bold mb-6 flex items-center gap-2",
                Icon { width: 28, height: 28, icon: FaCalendar }
                "SpaceX Launches"
            }
            div { class: "card bg-base-200 mb-6",
                div { class: "card-body gap-4",
                    div { class: "flex flex-col md:flex-row gap-4",
                        SearchInput {
                            value: query,
                            placeholder: "Search launches...",
                            on_input: move |query: String| list.write().set_query(query),
                        }
                        FilterSelect {
                            options: select_options(&LaunchStatusFilter::OPTIONS),
                            value: status,
                            on_change: move |value: String| {
                                if let Some(status) = LaunchStatusFilter::from_value(&value) {
                                    list.write().update_filter(|filter| filter.status = status);
                                }
                            },
                        }
                        FilterSelect {
                            options: select_options(&TimeFilter::OPTIONS),
                            value: time,
                            on_change: move |value: String| {
                                if let Some(time) = TimeFilter::from_value(&value) {
                                    list.write().update_filter(|filter| {
                                        filter.time = time;
                                        filter.now = Utc::now();
                                    });
                                }
                            },
                        }
                    }
                    if scoped {
                        div { class: "flex items-center gap-2",
                            span { class: "badge badge-primary", "Filtered by rocket" }
                            button {
                                class: "btn btn-ghost btn-sm flex gap-1",
                                onclick: move |_| {
                                    rocket_scope.set(None);
                                    list.write().set_page(1);
                                },
                                Icon { width: 12, height: 12, icon: FaXmark }
                                "Clear rocket filter"
                            }
                        }
                    }
                }
            }
            {content}
        }
    )
}

#[component]
fn LaunchCard(launch: LaunchDto) -> Element {
    let date = format_date(launch.date_utc.date_naive());
    let details = launch
        .details
        .clone()
        .unwrap_or_else(|| "No details available for this mission.".to_string());

    rsx!(
        div { class: "card bg-base-100 shadow-sm h-full",
            figure { class: "h-28 pt-4",
                if let Some(patch) = launch.links.patch.small.clone() {
                    img { class: "h-24 w-24 object-contain", src: patch, alt: "{launch.name}" }
                } else {
                    div { class: "opacity-50",
                        Icon { width: 48, height: 48, icon: FaCalendar }
                    }
                }
            }
            div { class: "card-body gap-2",
                div { class: "flex justify-between items-center gap-2",
                    h2 { class: "font-bold line-clamp-1", "{launch.name}" }
                    LaunchStatusBadge { status: launch.status() }
                }
                p { class: "text-sm opacity-70", "{date}" }
                p { class: "text-sm opacity-70 line-clamp-2", "{details}" }
                div { class: "card-actions mt-auto",
                    Link {
                        to: Route::LaunchDetail { id: launch.id.clone() },
                        class: "btn btn-primary btn-block",
                        "View Details"
                    }
                }
            }
        }
    )
}
