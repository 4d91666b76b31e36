// tests/router_guard.rs

use resdesk::router::{guard, routes_for, Access, PageKind, Requirement};
use resdesk::session::{demo_users, find_user, Permission, Role, Session, User};

fn session(role: Role) -> Session {
    Session::new(User::new(99, "Test User", role, Some("Informatique")))
}

#[test]
fn anonymous_needs_login() {
    assert_eq!(guard(None, PageKind::Dashboard), Access::NeedsLogin);
    assert_eq!(guard(None, PageKind::Needs), Access::NeedsLogin);
}

#[test]
fn teacher_routes() {
    let s = session(Role::Teacher);
    assert_eq!(
        routes_for(&s),
        vec![PageKind::Dashboard, PageKind::Needs, PageKind::Resources, PageKind::Reports]
    );
    assert!(matches!(guard(Some(&s), PageKind::Offers), Access::Forbidden(_)));
    assert!(matches!(guard(Some(&s), PageKind::Interventions), Access::Forbidden(_)));
}

#[test]
fn supplier_routes() {
    let s = session(Role::Supplier);
    assert_eq!(
        routes_for(&s),
        vec![PageKind::Dashboard, PageKind::Calls, PageKind::Offers, PageKind::Deliveries]
    );
    assert_eq!(guard(Some(&s), PageKind::Offers), Access::Granted);
    assert!(matches!(guard(Some(&s), PageKind::Needs), Access::Forbidden(_)));
}

#[test]
fn interventions_by_role() {
    assert_eq!(guard(Some(&session(Role::Technician)), PageKind::Interventions), Access::Granted);
    assert_eq!(guard(Some(&session(Role::ResourceManager)), PageKind::Interventions), Access::Granted);
    assert!(matches!(
        guard(Some(&session(Role::DepartmentHead)), PageKind::Interventions),
        Access::Forbidden(_)
    ));
}

#[test]
fn forbidden_message_names_user_and_page() {
    let Access::Forbidden(why) = guard(Some(&session(Role::Technician)), PageKind::Calls) else {
        panic!("technicians cannot open calls");
    };
    assert!(why.contains("Test User"));
    assert!(why.contains("Calls for offers"));
}

#[test]
fn every_demo_user_reaches_the_dashboard() {
    for u in demo_users() {
        let s = Session::new(u);
        assert_eq!(guard(Some(&s), PageKind::Dashboard), Access::Granted);
        assert_eq!(routes_for(&s).first(), Some(&PageKind::Dashboard));
    }
}

#[test]
fn requirements_are_data() {
    let s = session(Role::DepartmentHead);
    assert!(Requirement::Authenticated.allows(&s));
    assert!(Requirement::Role(Role::DepartmentHead).allows(&s));
    assert!(!Requirement::AnyRole(&[Role::Supplier, Role::Technician]).allows(&s));
    assert!(Requirement::Permission(Permission::ValidateNeeds).allows(&s));
    assert!(Requirement::AnyPermission(&[Permission::ReviewOffers, Permission::SubmitNeeds]).allows(&s));
}

#[test]
fn page_slugs_parse() {
    assert_eq!(PageKind::parse("Offers"), Some(PageKind::Offers));
    assert_eq!(PageKind::parse(" deliveries "), Some(PageKind::Deliveries));
    assert_eq!(PageKind::parse("admin"), None);
}

#[test]
fn sessions_are_independent() {
    let teacher = Session::new(find_user("1").unwrap());
    let manager = Session::new(find_user("Youssef Haddad").unwrap());
    assert!(!teacher.can(Permission::PublishCalls));
    assert!(manager.can(Permission::PublishCalls));
    assert_eq!(guard(Some(&teacher), PageKind::Calls), Access::Forbidden(
        "Amina Benali (Teacher) has no access to Calls for offers".into()
    ));
    assert_eq!(guard(Some(&manager), PageKind::Calls), Access::Granted);
}
