//! Content-region state machine.
//!
//! [`ViewNavigator`] tracks which [`Selection`] is mounted and turns every path change
//! into a [`Transition`] naming the view to unmount and the view to mount. The header
//! links are static and never take part in a transition.

use tracing::debug;
use vcb_domain::navigation::{NAV_LINKS, NavLink, Selection, ViewKind, resolve};

/// The effect of a single navigation on the content region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: Selection,
    pub to: Selection,
    /// View removed from the content region, if one was mounted and the selection changed.
    pub unmounted: Option<ViewKind>,
    /// View added to the content region, if the new selection is a view and differs.
    pub mounted: Option<ViewKind>,
}

impl Transition {
    fn between(from: Selection, to: Selection) -> Self {
        let changed = from != to;
        Self {
            unmounted: if changed { from.view() } else { None },
            mounted: if changed { to.view() } else { None },
            from,
            to,
        }
    }

    /// `true` when the content region stays untouched.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Explicit owner of the "current view" state.
///
/// The path is always injected by the caller (browser history, desktop memory history,
/// tests); the navigator never reads ambient location state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewNavigator {
    current: Selection,
    transitions: u64,
}

impl Default for ViewNavigator {
    fn default() -> Self {
        Self { current: Selection::default(), transitions: 0 }
    }
}

impl ViewNavigator {
    /// Starts in the state selected by the path present at load.
    #[must_use]
    pub fn new(initial_path: &str) -> Self {
        let current = resolve(initial_path);
        debug!(path = initial_path, selection = %current, "Navigator initialized");
        Self { current, transitions: 0 }
    }

    #[must_use]
    pub const fn current(&self) -> &Selection {
        &self.current
    }

    /// The view currently mounted in the content region.
    #[must_use]
    pub const fn mounted(&self) -> Option<ViewKind> {
        self.current.view()
    }

    /// Number of navigations that actually changed the content region.
    #[must_use]
    pub const fn transitions(&self) -> u64 {
        self.transitions
    }

    /// Moves to the selection for `path`.
    ///
    /// Navigating to the already mounted selection is a no-op, so a view is never
    /// mounted twice in a row.
    pub fn navigate(&mut self, path: &str) -> Transition {
        let next = resolve(path);
        if next == self.current {
            return Transition::between(self.current.clone(), next);
        }

        let previous = std::mem::replace(&mut self.current, next.clone());
        self.transitions += 1;
        let transition = Transition::between(previous, next);

        debug!(
            path,
            from = %transition.from,
            to = %transition.to,
            unmounted = ?transition.unmounted,
            mounted = ?transition.mounted,
            "Content region switched"
        );
        transition
    }

    /// Follows a header link.
    pub fn follow(&mut self, link: &NavLink) -> Transition {
        self.navigate(link.path)
    }

    /// The header link of the mounted view, used to highlight it.
    #[must_use]
    pub fn active_link(&self) -> Option<&'static NavLink> {
        self.mounted().map(ViewKind::link)
    }

    /// The header links; identical for every state.
    #[must_use]
    pub fn links(&self) -> &'static [NavLink] {
        &NAV_LINKS
    }
}
