//! # UI
//!
//! The dashboard shell as Dioxus components: a persistent header with the brand label
//! and four links above a content region that mounts exactly one view per path.
//!
//! The renderer (desktop webview or browser) is chosen by the app crate; this crate only
//! needs the Dioxus router. Configuration reaches the components as a [`ShellConfig`]
//! context, falling back to defaults when the launcher provides none.
//!
//! ```rust,ignore
//! dioxus::LaunchBuilder::web().launch(vcb_ui::App);
//! ```

mod route;
mod shell;
mod views;

pub use route::Route;
pub use shell::{App, Content, Header, Shell, TAILWIND_CDN};
pub use vcb_domain::config::ShellConfig;
pub use views::{Calls, Customers, Dashboard, NotFound, Schedules};
