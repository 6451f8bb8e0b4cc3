use std::rc::Rc;

use yew::prelude::*;
use yew_router::Routable;

use crate::Route;

pub const OPEN_GLYPH: &str = "✕";
pub const CLOSED_GLYPH: &str = "☰";

/// Whether the mobile link panel is expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub is_open: bool,
}

pub enum NavAction {
    Toggle,
    /// A navigation link was activated.
    Collapse,
}

impl NavState {
    pub fn glyph(&self) -> &'static str {
        if self.is_open { OPEN_GLYPH } else { CLOSED_GLYPH }
    }

    pub fn apply(self, action: NavAction) -> Self {
        match action {
            NavAction::Toggle => NavState { is_open: !self.is_open },
            NavAction::Collapse => NavState { is_open: false },
        }
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).apply(action))
    }
}

pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

impl NavLink {
    /// File name the link points at, e.g. `booths.html`.
    pub fn href(&self) -> String {
        page_file_name(&self.route.to_path())
    }
}

pub fn nav_links() -> [NavLink; 5] {
    [
        NavLink { label: "Home", route: Route::Index },
        NavLink { label: "Booths", route: Route::Booths },
        NavLink { label: "Gallery", route: Route::Gallery },
        NavLink { label: "About", route: Route::About },
        NavLink { label: "Contact", route: Route::Contact },
    ]
}

/// Last path segment, percent-decoded. `/` and `` both give ``.
pub fn page_file_name(path: &str) -> String {
    let last = path.rsplit('/').next().unwrap_or_default();
    urlencoding::decode(last)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| last.to_string())
}

fn strip_extension(href: &str) -> &str {
    match href.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => href,
    }
}

pub fn link_matches(current_page: &str, href: &str) -> bool {
    if href == current_page {
        return true;
    }
    if (current_page.is_empty() && href == "index.html")
        || (current_page == "index.html" && href.is_empty())
    {
        return true;
    }
    let stem = strip_extension(href);
    !current_page.is_empty() && !stem.is_empty() && current_page.contains(stem)
}

/// Index of the single link to mark active, if any.
pub fn active_link<I, S>(current_page: &str, hrefs: I) -> Option<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    hrefs
        .into_iter()
        .position(|href| link_matches(current_page, href.as_ref()))
}
