//! Route table for the navigation shell.
//!
//! DESIGN
//! ======
//! The path-to-view mapping is an ordered table of `(path, AppRoute)` pairs
//! resolved by first-match-wins exact comparison. A path absent from the table
//! resolves to [`RouteMatch::NotFound`] instead of an implicit blank, so the
//! rendering side decides explicitly what an unmatched path shows.
//!
//! `resolve` is the only matcher that picks a view: `app` renders the content
//! region from its result. The same table drives `<Routes>` registration (the
//! server's SSR path list) and the link list in `components::nav_bar`.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use leptos_router::StaticSegment;

/// A view reachable through the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    /// Static welcome view at `/`.
    Home,
    /// Patient-search view at `/search-patients`.
    SearchPatients,
}

/// Fixed route table. Paths are unique; order is link order in the nav bar.
pub const ROUTES: [(&str, AppRoute); 2] = [("/", AppRoute::Home), ("/search-patients", AppRoute::SearchPatients)];

/// Outcome of resolving a path against [`ROUTES`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteMatch {
    Found(AppRoute),
    NotFound,
}

impl RouteMatch {
    /// The matched route, if any.
    #[must_use]
    pub fn route(self) -> Option<AppRoute> {
        match self {
            Self::Found(route) => Some(route),
            Self::NotFound => None,
        }
    }
}

impl AppRoute {
    /// Absolute path this route is mounted at.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::SearchPatients => "/search-patients",
        }
    }

    /// Navigation link label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::SearchPatients => "Search Patients",
        }
    }

    /// Document title shown while the route is active.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Patient App",
            Self::SearchPatients => "Search Patients | Patient App",
        }
    }

    /// Router segment for `<Route path=...>` registration.
    #[must_use]
    pub fn segment(self) -> StaticSegment<&'static str> {
        StaticSegment(self.path().trim_start_matches('/'))
    }
}

/// Resolve `path` against the route table.
///
/// Comparison is exact after dropping one trailing slash (`/search-patients/`
/// is `/search-patients`, as the router registers it): no case folding, no
/// prefix matching. The first entry whose path equals the result wins.
#[must_use]
pub fn resolve(path: &str) -> RouteMatch {
    let path = normalize(path);
    ROUTES
        .iter()
        .find(|(pattern, _)| *pattern == path)
        .map_or(RouteMatch::NotFound, |(_, route)| RouteMatch::Found(*route))
}

fn normalize(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() && !stripped.ends_with('/') => stripped,
        _ => path,
    }
}
