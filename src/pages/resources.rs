// src/pages/resources.rs
use chrono::NaiveDate;

use super::{badge, ListPage};
use crate::api::StatusChange;
use crate::model::{Resource, ResourceStatus};
use crate::router::{self, Access, PageKind};
use crate::session::{Permission, Session};
use crate::table::{Cell, ColumnDescriptor as Col, FilterGroup, RowAction, Tone, Value};

pub fn page(session: &Session, today: NaiveDate) -> ListPage<Resource> {
    ListPage::build(
        PageKind::Resources,
        session,
        today,
        |src, s| src.resources(s),
        |view, ctx| {
            let today = ctx.today;
            let mut view = view
                .column(Col::field("Inventory no.", "inventory_no").sortable())
                .column(Col::field("Type", "resource_type").sortable())
                .column(Col::field("Brand", "brand").sortable())
                .column(Col::field("Department", "department").sortable())
                .column(Col::field("Assigned to", "assigned_to"))
                .column(Col::field("Acquired", "acquired_on").sortable())
                .column(Col::derived("Warranty", move |r: &Resource| match r.warranty_until {
                    Some(d) if d >= today => Cell::Value(Value::Date(d)),
                    Some(_) => Cell::badge("Expired", Tone::Danger),
                    None => Cell::Value(Value::Empty),
                }))
                .column(Col::derived("Status", |r: &Resource| badge(r.status)).sortable())
                .filter(status_filter!("Status", ResourceStatus::ALL, |r: &Resource| r.status))
                .filter(FilterGroup::new("Warranty")
                    .option("Under warranty", "covered", move |r: &Resource| r.under_warranty(today))
                    .option("Not covered", "uncovered", move |r: &Resource| !r.under_warranty(today)))
                .search_by(|r: &Resource| {
                    format!("{} {} {} {}", r.inventory_no, r.resource_type, r.brand,
                        r.assigned_to.as_deref().unwrap_or(""))
                })
                .placeholders("No resources in the inventory", "No resource matches the current filters");

            if ctx.session.can(Permission::ManageResources) {
                view = view.action(
                    RowAction::new("Retire", "🗑",
                        ctx.change(|r: &Resource| StatusChange::Resource(r.id, ResourceStatus::Retired)))
                        .disabled_when(|r: &Resource| r.status == ResourceStatus::Retired),
                );
            }
            if router::guard(Some(ctx.session), PageKind::Reports) == Access::Granted {
                view = view.action(RowAction::new("Reports", "🔧",
                    ctx.navigate(PageKind::Reports, |r: &Resource| r.inventory_no.clone())));
            }
            view
        },
    )
    .with_selection()
}
