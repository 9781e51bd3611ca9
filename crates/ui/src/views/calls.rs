use super::{ViewHeading, use_view_lifecycle};
use dioxus::prelude::*;
use vcb_domain::navigation::ViewKind;

#[component]
pub fn Calls() -> Element {
    use_view_lifecycle(ViewKind::Calls);

    rsx! {
        section { class: "py-6",
            ViewHeading {
                title: ViewKind::Calls.label(),
                summary: "Placed calls with their status, duration and transcript.",
            }
        }
    }
}
