//! Dashboard page placeholder.

use super::{ViewHeading, use_view_lifecycle};
use dioxus::prelude::*;
use vcb_domain::navigation::ViewKind;

#[component]
pub fn Dashboard() -> Element {
    use_view_lifecycle(ViewKind::Dashboard);

    rsx! {
        section { class: "py-6",
            ViewHeading {
                title: ViewKind::Dashboard.label(),
                summary: "Call volume, outcomes and upcoming work at a glance.",
            }
        }
    }
}
