// src/router.rs
//
// Page table and access guard. Who may open a page is data (`Requirement`
// per route), checked once by `guard` before the page is built.

use crate::session::{Permission, Role, Session};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Dashboard,
    Needs,
    Resources,
    Reports,
    Calls,
    Offers,
    Interventions,
    Deliveries,
}

impl PageKind {
    pub fn title(self) -> &'static str {
        match self {
            PageKind::Dashboard => "Dashboard",
            PageKind::Needs => "Resource needs",
            PageKind::Resources => "Resources",
            PageKind::Reports => "Maintenance reports",
            PageKind::Calls => "Calls for offers",
            PageKind::Offers => "Supplier offers",
            PageKind::Interventions => "Interventions",
            PageKind::Deliveries => "Deliveries",
        }
    }

    /// CLI name.
    pub fn slug(self) -> &'static str {
        match self {
            PageKind::Dashboard => "dashboard",
            PageKind::Needs => "needs",
            PageKind::Resources => "resources",
            PageKind::Reports => "reports",
            PageKind::Calls => "calls",
            PageKind::Offers => "offers",
            PageKind::Interventions => "interventions",
            PageKind::Deliveries => "deliveries",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        ROUTES.iter().map(|r| r.kind).find(|k| k.slug() == s.trim().to_ascii_lowercase())
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Requirement {
    Authenticated,
    Role(Role),
    AnyRole(&'static [Role]),
    Permission(Permission),
    AnyPermission(&'static [Permission]),
}

impl Requirement {
    pub fn allows(&self, s: &Session) -> bool {
        match self {
            Requirement::Authenticated => true,
            Requirement::Role(r) => s.has_role(*r),
            Requirement::AnyRole(rs) => rs.iter().any(|r| s.has_role(*r)),
            Requirement::Permission(p) => s.can(*p),
            Requirement::AnyPermission(ps) => ps.iter().any(|p| s.can(*p)),
        }
    }
}

pub struct Route {
    pub kind: PageKind,
    pub requirement: Requirement,
}

pub static ROUTES: &[Route] = &[
    Route { kind: PageKind::Dashboard, requirement: Requirement::Authenticated },
    Route { kind: PageKind::Needs, requirement: Requirement::Permission(Permission::ViewNeeds) },
    Route { kind: PageKind::Resources, requirement: Requirement::Permission(Permission::ViewResources) },
    Route {
        kind: PageKind::Reports,
        requirement: Requirement::AnyPermission(&[Permission::ViewReports, Permission::ReportFailures]),
    },
    Route { kind: PageKind::Calls, requirement: Requirement::Permission(Permission::ViewCalls) },
    Route {
        kind: PageKind::Offers,
        requirement: Requirement::AnyPermission(&[Permission::ReviewOffers, Permission::SubmitOffers]),
    },
    Route {
        kind: PageKind::Interventions,
        requirement: Requirement::AnyRole(&[Role::Technician, Role::ResourceManager]),
    },
    Route { kind: PageKind::Deliveries, requirement: Requirement::Permission(Permission::ViewDeliveries) },
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Granted,
    NeedsLogin,
    Forbidden(String),
}

pub fn route(kind: PageKind) -> Option<&'static Route> {
    ROUTES.iter().find(|r| r.kind == kind)
}

pub fn guard(session: Option<&Session>, kind: PageKind) -> Access {
    let Some(s) = session else { return Access::NeedsLogin };
    match route(kind) {
        Some(r) if r.requirement.allows(s) => Access::Granted,
        _ => Access::Forbidden(format!(
            "{} ({}) has no access to {}",
            s.user.name,
            s.role(),
            kind.title()
        )),
    }
}

/// Pages the session may open, in navigation order.
pub fn routes_for(session: &Session) -> Vec<PageKind> {
    ROUTES.iter().filter(|r| r.requirement.allows(session)).map(|r| r.kind).collect()
}

pub fn home_for(_session: &Session) -> PageKind {
    PageKind::Dashboard
}
