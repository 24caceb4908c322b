//! Route definitions for the application
//!
//! `Route` is the routing scope's table: each variant is one path pattern and
//! mounts the page component of the same name. Every variant sits inside the
//! [`Frame`] layout, so the navbar and footer render regardless of the match.

use std::str::FromStr;

use dioxus::prelude::*;

use crate::components::Frame;
use crate::pages::{
    About, Blog, EmployerDashboard, Home, JobDetails, JobListings, JobSeekerDashboard, Login,
    Register, Unmatched,
};
use crate::types::{JobId, UserRole};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Frame)]
        #[route("/")]
        Home {},

        #[route("/jobs")]
        JobListings {},

        #[route("/jobs/:id")]
        JobDetails { id: JobId },

        #[route("/employer/dashboard")]
        EmployerDashboard {},

        #[route("/jobseeker/dashboard")]
        JobSeekerDashboard {},

        #[route("/login")]
        Login {},

        #[route("/register")]
        Register {},

        #[route("/blog")]
        Blog {},

        #[route("/about")]
        About {},

        // Paths matching none of the above render an empty routed region.
        #[route("/:..segments")]
        Unmatched { segments: Vec<String> },
}

/// Page identifiers, one per declared path pattern
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageId {
    Home,
    JobListings,
    JobDetails,
    EmployerDashboard,
    JobSeekerDashboard,
    Login,
    Register,
    Blog,
    About,
}

/// The declared path patterns, in match order.
///
/// Mirrors the `#[route]` attributes on [`Route`]; the tests check that every
/// row resolves to its page through the derived parser.
pub const ROUTE_TABLE: [(&str, PageId); 9] = [
    ("/", PageId::Home),
    ("/jobs", PageId::JobListings),
    ("/jobs/:id", PageId::JobDetails),
    ("/employer/dashboard", PageId::EmployerDashboard),
    ("/jobseeker/dashboard", PageId::JobSeekerDashboard),
    ("/login", PageId::Login),
    ("/register", PageId::Register),
    ("/blog", PageId::Blog),
    ("/about", PageId::About),
];

impl Route {
    /// The page this route mounts, or `None` for an unmatched path
    pub fn page(&self) -> Option<PageId> {
        match self {
            Route::Home {} => Some(PageId::Home),
            Route::JobListings {} => Some(PageId::JobListings),
            Route::JobDetails { .. } => Some(PageId::JobDetails),
            Route::EmployerDashboard {} => Some(PageId::EmployerDashboard),
            Route::JobSeekerDashboard {} => Some(PageId::JobSeekerDashboard),
            Route::Login {} => Some(PageId::Login),
            Route::Register {} => Some(PageId::Register),
            Route::Blog {} => Some(PageId::Blog),
            Route::About {} => Some(PageId::About),
            Route::Unmatched { .. } => None,
        }
    }
}

/// Match a concrete path against the route table.
///
/// Returns `None` when no declared pattern matches. An empty path is the root.
pub fn resolve(path: &str) -> Option<Route> {
    let path = if path.is_empty() { "/" } else { path };
    let route = Route::from_str(path).ok()?;
    route.page().map(|_| route)
}

/// A link in the persistent navigation bar
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub to: Route,
    pub label: &'static str,
}

/// Top-level destinations shown in the navbar
pub fn nav_items() -> [NavItem; 4] {
    [
        NavItem { to: Route::Home {}, label: "Home" },
        NavItem { to: Route::JobListings {}, label: "Jobs" },
        NavItem { to: Route::Blog {}, label: "Blog" },
        NavItem { to: Route::About {}, label: "About" },
    ]
}

/// Landing route for a signed-in user
pub fn dashboard_route(role: UserRole) -> Route {
    match role {
        UserRole::Employer => Route::EmployerDashboard {},
        UserRole::JobSeeker => Route::JobSeekerDashboard {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Substitute a sample value for a `:param` segment
    fn concrete(pattern: &str) -> String {
        pattern
            .split('/')
            .map(|segment| if segment.starts_with(':') { "42" } else { segment })
            .collect::<Vec<_>>()
            .join("/")
    }

    #[test]
    fn test_every_pattern_mounts_its_page() {
        for (pattern, page) in ROUTE_TABLE {
            let path = concrete(pattern);
            let route = resolve(&path).unwrap_or_else(|| panic!("{path} did not resolve"));
            assert_eq!(route.page(), Some(page), "{path}");
        }
    }

    #[test]
    fn test_patterns_and_pages_are_unique() {
        let patterns: HashSet<_> = ROUTE_TABLE.iter().map(|(p, _)| *p).collect();
        let pages: HashSet<_> = ROUTE_TABLE.iter().map(|(_, id)| *id).collect();
        assert_eq!(patterns.len(), ROUTE_TABLE.len());
        assert_eq!(pages.len(), ROUTE_TABLE.len());
    }

    #[test]
    fn test_job_id_is_extracted() {
        assert_eq!(
            resolve("/jobs/42"),
            Some(Route::JobDetails { id: "42".parse().unwrap() })
        );
    }

    #[test]
    fn test_empty_job_id_is_not_a_job() {
        assert_eq!(resolve("/jobs//"), None);
        assert!(matches!(
            Route::from_str("/jobs//").unwrap(),
            Route::Unmatched { .. }
        ));
    }

    #[test]
    fn test_empty_path_is_home() {
        assert_eq!(resolve(""), Some(Route::Home {}));
    }

    #[test]
    fn test_jobs_without_id_is_listing() {
        assert_eq!(resolve("/jobs"), Some(Route::JobListings {}));
    }

    #[test]
    fn test_unknown_path_has_no_page() {
        assert_eq!(resolve("/does-not-exist"), None);
        assert_eq!(resolve("/jobs/42/apply"), None);
        assert_eq!(resolve("/employer"), None);
    }

    #[test]
    fn test_unknown_path_still_parses_inside_frame() {
        let route = Route::from_str("/does-not-exist").unwrap();
        assert!(matches!(route, Route::Unmatched { .. }));
        assert_eq!(route.page(), None);
    }

    #[test]
    fn test_routes_format_back_to_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(
            Route::JobDetails { id: "7".parse().unwrap() }.to_string(),
            "/jobs/7"
        );
        assert_eq!(Route::EmployerDashboard {}.to_string(), "/employer/dashboard");
    }

    #[test]
    fn test_nav_items() {
        let paths: Vec<String> = nav_items().iter().map(|item| item.to.to_string()).collect();
        assert_eq!(paths, vec!["/", "/jobs", "/blog", "/about"]);
    }

    #[test]
    fn test_dashboard_route_by_role() {
        assert_eq!(dashboard_route(UserRole::Employer), Route::EmployerDashboard {});
        assert_eq!(dashboard_route(UserRole::JobSeeker), Route::JobSeekerDashboard {});
    }
}
