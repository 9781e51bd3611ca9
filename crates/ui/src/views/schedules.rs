use super::{ViewHeading, use_view_lifecycle};
use dioxus::prelude::*;
use vcb_domain::navigation::ViewKind;

#[component]
pub fn Schedules() -> Element {
    use_view_lifecycle(ViewKind::Schedules);

    rsx! {
        section { class: "py-6",
            ViewHeading {
                title: ViewKind::Schedules.label(),
                summary: "Calls queued for later, with their target time.",
            }
        }
    }
}
