//! Content for paths no view claims. The header stays in place above it.

use crate::route::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(path: String) -> Element {
    rsx! {
        section { class: "py-6 px-4 sm:px-0",
            h2 { class: "text-3xl font-bold text-gray-900", "Page not found" }
            p { class: "mt-2 text-sm text-gray-600",
                "Nothing is mounted at "
                code { "{path}" }
                "."
            }
            Link {
                to: Route::Home {},
                class: "mt-4 inline-block text-sm font-medium text-blue-600 hover:text-blue-500",
                "Back to the dashboard"
            }
        }
    }
}
