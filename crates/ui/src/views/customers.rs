//! Customers page placeholder.

use super::{ViewHeading, use_view_lifecycle};
use dioxus::prelude::*;
use vcb_domain::navigation::ViewKind;

#[component]
pub fn Customers() -> Element {
    use_view_lifecycle(ViewKind::Customers);

    rsx! {
        section { class: "py-6",
            ViewHeading {
                title: ViewKind::Customers.label(),
                summary: "Customer records and their vehicles.",
            }
        }
    }
}
