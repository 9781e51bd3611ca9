//! View selection for the dashboard shell.
//!
//! The current path is always passed in explicitly. [`resolve`] maps it onto a
//! [`Selection`], which is either one of the four [`ViewKind`]s or an explicit
//! [`Selection::Unmatched`] state carrying the normalized path.

use crate::constants::{
    CALLS_LABEL, CALLS_PATH, CUSTOMERS_LABEL, CUSTOMERS_PATH, DASHBOARD_LABEL, DASHBOARD_PATH,
    SCHEDULES_LABEL, SCHEDULES_PATH,
};
use std::borrow::Cow;
use std::fmt;
use strum_macros::{Display, EnumCount, EnumIter, IntoStaticStr};

/// The views that can occupy the content region.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumCount, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum ViewKind {
    Dashboard,
    Customers,
    Calls,
    Schedules,
}

impl ViewKind {
    /// The canonical path this view is mounted at.
    #[must_use]
    pub fn path(self) -> &'static str {
        self.link().path
    }

    /// The header label of the link pointing at this view.
    #[must_use]
    pub fn label(self) -> &'static str {
        self.link().label
    }

    #[must_use]
    pub fn link(self) -> &'static NavLink {
        &NAV_LINKS[self as usize]
    }
}

/// A single entry of the header navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    pub view: ViewKind,
}

/// Header links in display order. Indexed by `ViewKind as usize`.
pub static NAV_LINKS: [NavLink; 4] = [
    NavLink { label: DASHBOARD_LABEL, path: DASHBOARD_PATH, view: ViewKind::Dashboard },
    NavLink { label: CUSTOMERS_LABEL, path: CUSTOMERS_PATH, view: ViewKind::Customers },
    NavLink { label: CALLS_LABEL, path: CALLS_PATH, view: ViewKind::Calls },
    NavLink { label: SCHEDULES_LABEL, path: SCHEDULES_PATH, view: ViewKind::Schedules },
];

/// What the content region shows for a given path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selection {
    View(ViewKind),
    /// No recognized view matches; holds the normalized path.
    Unmatched(String),
}

impl Selection {
    /// The mounted view, if any.
    #[must_use]
    pub const fn view(&self) -> Option<ViewKind> {
        match self {
            Self::View(kind) => Some(*kind),
            Self::Unmatched(_) => None,
        }
    }

    #[must_use]
    pub const fn is_unmatched(&self) -> bool {
        matches!(self, Self::Unmatched(_))
    }

    /// The path this selection stands for.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::View(kind) => kind.path(),
            Self::Unmatched(path) => path,
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::View(ViewKind::Dashboard)
    }
}

impl From<ViewKind> for Selection {
    fn from(kind: ViewKind) -> Self {
        Self::View(kind)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::View(kind) => write!(f, "{kind}"),
            Self::Unmatched(path) => write!(f, "unmatched({path})"),
        }
    }
}

/// Normalizes a location into the form used for matching.
///
/// Query strings and fragments are dropped, trailing slashes are removed, a
/// missing leading slash is added and an empty path becomes `/`. Case is kept.
#[must_use]
pub fn normalize(path: &str) -> Cow<'_, str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim().trim_end_matches('/');

    if trimmed.is_empty() {
        Cow::Borrowed(DASHBOARD_PATH)
    } else if trimmed.starts_with('/') {
        Cow::Borrowed(trimmed)
    } else {
        Cow::Owned(format!("/{trimmed}"))
    }
}

/// Selects the view for `path`.
///
/// Matching is ASCII case-insensitive and runs on the [`normalize`]d path.
///
/// # Example
///
/// ```rust
/// use vcb_domain::navigation::{Selection, ViewKind, resolve};
///
/// assert_eq!(resolve("/calls"), Selection::View(ViewKind::Calls));
/// assert_eq!(resolve("/Customers/?page=2"), Selection::View(ViewKind::Customers));
/// assert_eq!(resolve("/unknown"), Selection::Unmatched("/unknown".to_owned()));
/// ```
#[must_use]
pub fn resolve(path: &str) -> Selection {
    let normalized = normalize(path);
    let matched = NAV_LINKS.iter().find(|link| link.path.eq_ignore_ascii_case(&normalized));

    match matched {
        Some(link) => Selection::View(link.view),
        None => Selection::Unmatched(normalized.into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn links_are_indexed_by_view() {
        assert_eq!(NAV_LINKS.len(), ViewKind::COUNT);
        for kind in ViewKind::iter() {
            assert_eq!(kind.link().view, kind);
        }
    }

    #[test]
    fn normalize_strips_noise() {
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("///"), "/");
        assert_eq!(normalize("/calls/"), "/calls");
        assert_eq!(normalize("calls"), "/calls");
        assert_eq!(normalize("/calls?from=today#top"), "/calls");
        assert_eq!(normalize("/#/calls"), "/");
    }

    #[test]
    fn normalize_borrows_when_possible() {
        assert!(matches!(normalize("/schedules/"), Cow::Borrowed(_)));
        assert!(matches!(normalize("schedules"), Cow::Owned(_)));
    }

    #[test]
    fn view_names_are_snake_case() {
        let names: Vec<&'static str> = ViewKind::iter().map(Into::into).collect();
        assert_eq!(names, ["dashboard", "customers", "calls", "schedules"]);
        assert_eq!(Selection::from(ViewKind::Calls).to_string(), "calls");
        assert_eq!(Selection::Unmatched("/x".to_owned()).to_string(), "unmatched(/x)");
    }
}
