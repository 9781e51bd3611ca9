use crate::route::Route;
use crate::views::{Calls, Customers, Dashboard, NotFound, Schedules};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::info;
use vcb_domain::config::ShellConfig;
use vcb_domain::navigation::{NAV_LINKS, NavLink, Selection, ViewKind};
use vcb_kernel::navigation::ViewNavigator;

/// Utility stylesheet the markup classes come from; loaded by every renderer.
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

const LINK_CLASS: &str = "border-transparent text-gray-500 hover:border-gray-300 hover:text-gray-700 \
    inline-flex items-center px-1 pt-1 border-b-2 text-sm font-medium";
const ACTIVE_LINK_CLASS: &str = "border-blue-500 text-gray-900 \
    inline-flex items-center px-1 pt-1 border-b-2 text-sm font-medium";

/// Root component handed to the launcher.
#[component]
pub fn App() -> Element {
    let config = use_hook(|| try_consume_context::<ShellConfig>().unwrap_or_default());
    use_context_provider(|| config);

    rsx! {
        document::Script { src: TAILWIND_CDN }
        Router::<Route> {}
    }
}

/// Layout wrapping every route: the header stays mounted while the outlet swaps views.
#[component]
pub fn Shell() -> Element {
    let config = use_context::<ShellConfig>();
    let path = use_route::<Route>().to_string();
    let navigator = use_hook(|| Rc::new(RefCell::new(ViewNavigator::new(&path))));

    // Re-renders for the same path are no-ops inside the navigator.
    let transition = navigator.borrow_mut().navigate(&path);
    if !transition.is_noop() {
        info!(
            path = %path,
            unmounted = ?transition.unmounted,
            mounted = ?transition.mounted,
            "View switched"
        );
    }
    let active = transition.to.view();

    rsx! {
        div { class: "min-h-screen bg-gradient-to-br from-gray-50 to-gray-100",
            Header { brand: config.brand.label.clone(), active: active }
            main { class: "max-w-7xl mx-auto py-6 sm:px-6 lg:px-8",
                Outlet::<Route> {}
            }
        }
    }
}

/// Brand label and the four navigation links.
#[component]
pub fn Header(brand: String, #[props(!optional)] active: Option<ViewKind>) -> Element {
    rsx! {
        nav { class: "bg-white shadow-lg",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "flex justify-between h-16",
                    div { class: "flex",
                        div { class: "flex-shrink-0 flex items-center",
                            h1 { class: "text-2xl font-bold text-blue-600", "{brand}" }
                        }
                        div { class: "hidden sm:ml-6 sm:flex sm:space-x-8",
                            for link in NAV_LINKS.iter() {
                                NavItem {
                                    key: "{link.path}",
                                    link: *link,
                                    active: active == Some(link.view),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavItem(link: NavLink, active: bool) -> Element {
    let class = if active { ACTIVE_LINK_CLASS } else { LINK_CLASS };

    rsx! {
        Link { to: Route::from(link.view), class: "{class}", "{link.label}" }
    }
}

/// Content region: exactly one view for a recognized path, the not-found notice otherwise.
#[component]
pub fn Content(selection: Selection) -> Element {
    match selection {
        Selection::View(ViewKind::Dashboard) => rsx! { Dashboard {} },
        Selection::View(ViewKind::Customers) => rsx! { Customers {} },
        Selection::View(ViewKind::Calls) => rsx! { Calls {} },
        Selection::View(ViewKind::Schedules) => rsx! { Schedules {} },
        Selection::Unmatched(path) => rsx! { NotFound { path: path } },
    }
}
