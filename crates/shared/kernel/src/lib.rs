//! Kernel utilities shared by the shell front-ends.
//! Keep this crate free of rendering code; it owns the navigation state machine and config loading.
//!
//! ## Navigation
//! ```rust
//! use vcb_kernel::navigation::ViewNavigator;
//! use vcb_kernel::domain::navigation::ViewKind;
//!
//! let mut navigator = ViewNavigator::new("/");
//! let transition = navigator.navigate("/calls");
//! assert_eq!(transition.unmounted, Some(ViewKind::Dashboard));
//! assert_eq!(transition.mounted, Some(ViewKind::Calls));
//! ```
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use vcb_kernel::config::load_config;
//! let cfg: vcb_kernel::domain::config::ShellConfig = load_config(Some("shell")).unwrap_or_default();
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod navigation;

pub use vcb_domain as domain;
