// tests/desk.rs
//
// The desk end to end: login, guarded navigation, row actions running
// through the data source, navigation actions, dashboard.

use chrono::NaiveDate;

use resdesk::api::{fixtures, FixtureSource};
use resdesk::config::options::AppOptions;
use resdesk::desk::{Desk, Notice};
use resdesk::model::RecordKind;
use resdesk::router::{Access, PageKind};
use resdesk::session::find_user;
use resdesk::pages::calls::offers_query;
use resdesk::table::{Cell, TableEvent, Tone, Value};

fn desk_as(user: &str) -> Desk {
    let today = NaiveDate::from_ymd_opt(2025, 9, 20).unwrap();
    let mut desk = Desk::new(Box::new(FixtureSource::new(today)), AppOptions::default());
    desk.login(find_user(user).unwrap()).unwrap();
    desk
}

fn keys(desk: &Desk) -> Vec<u64> {
    desk.page().unwrap().snapshot().rows().iter().map(|r| r.key).collect()
}

/// Event for the action labelled `label` on row `key`, as the GUI would send it.
fn click(desk: &Desk, key: u64, label: &str) -> TableEvent {
    let snap = desk.page().unwrap().snapshot();
    let row = snap.rows().iter().find(|r| r.key == key).unwrap();
    let button = row.actions.iter().find(|a| a.label == label).unwrap();
    assert!(button.enabled, "{label} disabled on row {key}");
    TableEvent::Action { index: button.index, key }
}

#[test]
fn login_lands_on_dashboard() {
    let desk = desk_as("Claire Dubois");
    assert_eq!(desk.current(), PageKind::Dashboard);
    assert!(desk.page().is_none());
    assert_eq!(desk.session().unwrap().user.id, 3);
}

#[test]
fn guarded_open() {
    let mut desk = desk_as("1");
    assert!(matches!(desk.open(PageKind::Offers).unwrap(), Access::Forbidden(_)));
    assert_eq!(desk.current(), PageKind::Dashboard);

    assert_eq!(desk.open(PageKind::Needs).unwrap(), Access::Granted);
    assert_eq!(keys(&desk), vec![1, 2, 6]);
    // teachers get no validation buttons
    assert!(!desk.page().unwrap().snapshot().has_actions);

    desk.logout();
    assert!(desk.session().is_none());
    assert_eq!(desk.open(PageKind::Needs).unwrap(), Access::NeedsLogin);
}

#[test]
fn validating_a_need_refreshes_the_page() {
    let mut desk = desk_as("3");
    desk.open(PageKind::Needs).unwrap();
    desk.apply(TableEvent::Filter { group: "Status".into(), value: "pending".into() });
    assert_eq!(keys(&desk), vec![1, 3]);

    let notices = desk.apply(click(&desk, 1, "Validate"));
    assert_eq!(notices, vec![Notice::Done("Resource need #1 → Validated".into())]);

    // still filtered on pending, so the validated need drops out
    assert_eq!(keys(&desk), vec![3]);

    desk.apply(TableEvent::Filter { group: "Status".into(), value: "all".into() });
    let snap = desk.page().unwrap().snapshot();
    let row = snap.rows().iter().find(|r| r.key == 1).unwrap();
    assert_eq!(row.cells.last(), Some(&Cell::badge("Validated", Tone::Success)));
    assert!(row.actions.iter().all(|a| !a.enabled));
}

#[test]
fn disabled_action_runs_nothing() {
    let mut desk = desk_as("3");
    desk.open(PageKind::Needs).unwrap();
    // need 2 is already validated; index 0 is "Validate"
    let notices = desk.apply(TableEvent::Action { index: 0, key: 2 });
    assert!(notices.is_empty());
}

#[test]
fn offers_action_navigates_with_search() {
    let mut desk = desk_as("Youssef Haddad");
    desk.open(PageKind::Calls).unwrap();

    let notices = desk.apply(click(&desk, 1, "Offers"));
    assert!(notices[0].is_done());
    assert_eq!(desk.current(), PageKind::Offers);

    let snap = desk.page().unwrap().snapshot();
    assert_eq!(snap.search.as_deref(), Some("call #1;"));
    assert_eq!(keys(&desk), vec![1, 2]);
}

#[test]
fn accepting_an_offer_updates_every_page() {
    let mut desk = desk_as("4");
    desk.open(PageKind::Offers).unwrap();
    desk.apply(click(&desk, 2, "Accept"));

    let snap = desk.page().unwrap().snapshot();
    let accept_enabled: Vec<bool> = snap
        .rows()
        .iter()
        .map(|r| r.actions.iter().any(|a| a.label == "Accept" && a.enabled))
        .collect();
    assert_eq!(accept_enabled, vec![false, false]);

    desk.open(PageKind::Deliveries).unwrap();
    assert_eq!(keys(&desk), vec![1, 2]);
    desk.apply(TableEvent::Filter { group: "Status".into(), value: "expected".into() });
    assert_eq!(keys(&desk), vec![2]);
}

#[test]
fn selection_and_export() {
    let mut desk = desk_as("4");
    desk.open(PageKind::Needs).unwrap();

    let (headers, rows) = desk.page().unwrap().export_rows();
    assert_eq!(headers[0], "#");
    assert_eq!(rows.len(), 6);

    desk.apply(TableEvent::ToggleRow(4));
    desk.apply(TableEvent::ToggleRow(2));
    let page = desk.page().unwrap();
    assert_eq!(page.selection(), vec![2, 4]);

    let (_, rows) = page.export_rows();
    let firsts: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(firsts, vec!["2", "4"]);
}

#[test]
fn reopening_a_page_resets_its_view() {
    let mut desk = desk_as("4");
    desk.open(PageKind::Needs).unwrap();
    desk.apply(TableEvent::Search("ordinateur".into()));
    assert_eq!(keys(&desk), vec![1, 4]);

    desk.open(PageKind::Needs).unwrap();
    assert_eq!(keys(&desk).len(), 6);
}

#[test]
fn dashboard_follows_role() {
    let desk = desk_as("1");
    let dash = desk.dashboard().unwrap().unwrap();
    let kinds: Vec<RecordKind> = dash.summaries.iter().map(|s| s.kind).collect();
    assert_eq!(kinds, vec![RecordKind::Need, RecordKind::Resource, RecordKind::Report]);

    let needs = dash.summary(RecordKind::Need).unwrap();
    assert_eq!(needs.total, 3);
    assert_eq!(needs.count("Pending"), 1);
    assert_eq!(needs.count("Validated"), 2);

    assert!(dash.recent.len() <= AppOptions::default().dashboard.recent);
    assert!(dash.recent.windows(2).all(|w| w[0].date >= w[1].date));
}

#[test]
fn dashboard_needs_a_session() {
    let mut desk = desk_as("5");
    desk.logout();
    assert!(desk.dashboard().unwrap().is_none());
}

#[test]
fn offers_action_does_not_match_longer_call_ids() {
    let today = NaiveDate::from_ymd_opt(2025, 9, 20).unwrap();
    let mut tables = fixtures::seed();
    let mut other = tables.offers[0].clone();
    other.id = 3;
    other.call_id = 12;
    tables.offers.push(other);

    let mut desk = Desk::new(Box::new(FixtureSource::with_tables(tables, today)), AppOptions::default());
    desk.login(find_user("4").unwrap()).unwrap();
    desk.open(PageKind::Offers).unwrap();
    assert_eq!(keys(&desk), vec![1, 2, 3]);

    desk.apply(TableEvent::Search(offers_query(1)));
    assert_eq!(keys(&desk), vec![1, 2]);
    desk.apply(TableEvent::Search(offers_query(12)));
    assert_eq!(keys(&desk), vec![3]);
}

#[test]
fn seeded_delivery_has_no_dangling_offer() {
    let mut desk = desk_as("4");
    desk.open(PageKind::Deliveries).unwrap();
    let snap = desk.page().unwrap().snapshot();
    let offers = fixtures::seed().offers;
    for d in fixtures::seed().deliveries {
        if let Some(offer) = d.offer_id {
            assert!(offers.iter().any(|o| o.id == offer), "delivery {} points at offer {offer}", d.id);
        }
    }
    let row = snap.rows().iter().find(|r| r.key == 1).unwrap();
    assert_eq!(row.cells[1], Cell::Value(Value::Empty));
}
