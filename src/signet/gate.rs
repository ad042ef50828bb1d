//! Per-page redirect decisions driven by marker validity.

pub const HOME_PATH: &str = "/";
pub const AUTH_PATH: &str = "/auth";
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    Auth,
    Dashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Serve,
    RedirectTo(&'static str),
}

/// Decide what a page request gets. Pure: no I/O, no state.
#[must_use]
pub const fn decide(page: Page, authenticated: bool) -> Gate {
    match (page, authenticated) {
        (Page::Landing, true) | (Page::Auth, true) => Gate::RedirectTo(DASHBOARD_PATH),
        (Page::Landing, false) | (Page::Dashboard, false) => Gate::RedirectTo(AUTH_PATH),
        (Page::Auth, false) | (Page::Dashboard, true) => Gate::Serve,
    }
}
