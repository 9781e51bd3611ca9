//! Views mounted into the content region.
//!
//! Each view is a zero-prop component owning its own data and state; the shell only
//! mounts and unmounts them.

mod calls;
mod customers;
mod dashboard;
mod not_found;
mod schedules;

pub use calls::Calls;
pub use customers::Customers;
pub use dashboard::Dashboard;
pub use not_found::NotFound;
pub use schedules::Schedules;

use dioxus::prelude::*;
use tracing::debug;
use vcb_domain::navigation::ViewKind;

/// Logs mount and unmount of a view; the mount hook runs once per mount.
fn use_view_lifecycle(view: ViewKind) {
    use_hook(|| debug!(%view, "View mounted"));
    use_drop(move || debug!(%view, "View unmounted"));
}

/// Heading and intro shared by the views.
#[component]
fn ViewHeading(title: &'static str, summary: &'static str) -> Element {
    rsx! {
        div { class: "px-4 sm:px-0",
            h2 { class: "text-3xl font-bold text-gray-900", "{title}" }
            p { class: "mt-2 text-sm text-gray-600", "{summary}" }
        }
    }
}
