use crate::shell::{Content, Shell};
use dioxus::prelude::*;
use vcb_domain::navigation::{Selection, ViewKind, resolve};

/// Router table. Every location lands in [`Shell`]; the view itself is chosen by
/// [`resolve`], so the router never needs to know the four paths.
#[derive(Routable, Clone, PartialEq, Eq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/:..segments")]
        Page { segments: Vec<String> },
}

impl Route {
    /// What the content region shows for this location.
    #[must_use]
    pub fn selection(&self) -> Selection {
        match self {
            Self::Home {} => Selection::View(ViewKind::Dashboard),
            Self::Page { segments } => selection_for(segments),
        }
    }
}

impl From<ViewKind> for Route {
    fn from(view: ViewKind) -> Self {
        match view {
            ViewKind::Dashboard => Self::Home {},
            other => {
                Self::Page { segments: vec![other.path().trim_start_matches('/').to_owned()] }
            },
        }
    }
}

fn selection_for(segments: &[String]) -> Selection {
    resolve(&format!("/{}", segments.join("/")))
}

#[component]
fn Home() -> Element {
    rsx! {
        Content { selection: Selection::View(ViewKind::Dashboard) }
    }
}

#[component]
fn Page(segments: Vec<String>) -> Element {
    rsx! {
        Content { selection: selection_for(&segments) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn parse(path: &str) -> Route {
        Route::from_str(path).unwrap_or_else(|_| panic!("{path} should parse"))
    }

    #[test]
    fn recognized_paths_select_their_view() {
        for kind in ViewKind::iter() {
            assert_eq!(parse(kind.path()).selection(), Selection::View(kind));
        }
    }

    #[test]
    fn view_routes_render_canonical_paths() {
        for kind in ViewKind::iter() {
            let route = Route::from(kind);
            assert_eq!(route.to_string(), kind.path());
            assert_eq!(route.selection(), Selection::View(kind));
        }
    }

    #[test]
    fn unknown_paths_reach_the_shell_unmatched() {
        assert_eq!(parse("/unknown").selection(), Selection::Unmatched("/unknown".to_owned()));
        assert_eq!(
            parse("/calls/42").selection(),
            Selection::Unmatched("/calls/42".to_owned())
        );
    }

    #[test]
    fn catch_all_uses_shell_matching_rules() {
        let route = Route::Page { segments: vec!["Schedules".to_owned(), String::new()] };
        assert_eq!(route.selection(), Selection::View(ViewKind::Schedules));
    }
}
