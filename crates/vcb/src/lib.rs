//! Facade crate for the Voice Call Bot dashboard shell.
//! Re-exports domain/kernel primitives and, with the `client` feature, the Dioxus shell.
//! Keep this crate thin: it should compose other crates, not implement behavior.
//!
//! ## Usage
//! - Add `vcb` with the `client` feature in app crates and launch [`ui::App`].
//! - Non-UI consumers (tests, tooling) can use the navigation model without Dioxus.

pub use vcb_domain as domain;
pub use vcb_kernel as kernel;
#[cfg(feature = "client")]
pub use vcb_ui as ui;

/// Build-time enabled features.
pub mod features {
    /// Enabled Cargo features of the facade.
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "client")]
        "client",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reexports_reach_navigation() {
        let mut navigator = kernel::navigation::ViewNavigator::new("/");
        let transition = navigator.navigate("/schedules");
        assert_eq!(transition.mounted, Some(domain::navigation::ViewKind::Schedules));
    }

    #[test]
    fn client_feature_is_reported() {
        assert_eq!(features::is_enabled("client"), cfg!(feature = "client"));
        assert!(!features::is_enabled("server"));
    }
}
