// src/pages/needs.rs
use chrono::NaiveDate;

use super::{badge, ListPage};
use crate::api::StatusChange;
use crate::model::{NeedStatus, ResourceNeed};
use crate::router::PageKind;
use crate::session::{Permission, Session};
use crate::table::{Cell, ColumnDescriptor as Col, RowAction, Value};

pub fn page(session: &Session, today: NaiveDate) -> ListPage<ResourceNeed> {
    ListPage::build(
        PageKind::Needs,
        session,
        today,
        |src, s| src.needs(s),
        |view, ctx| {
            let mut view = view
                .column(Col::field("#", "id").sortable())
                .column(Col::field("Requester", "requester").sortable())
                .column(Col::derived("Department", |n: &ResourceNeed| {
                    Cell::Value(Value::opt_text(n.department.as_deref()))
                }))
                .column(Col::field("Type", "resource_type").sortable())
                .column(Col::field("Qty", "quantity").sortable())
                .column(Col::field("Created", "created_on").sortable())
                .column(Col::derived("Status", |n: &ResourceNeed| badge(n.status)).sortable())
                .filter(status_filter!("Status", NeedStatus::ALL, |n: &ResourceNeed| n.status))
                .search_by(|n: &ResourceNeed| format!("{} {} {}", n.requester, n.resource_type, n.justification))
                .placeholders("No resource needs yet", "No need matches the current filters");

            if ctx.session.can(Permission::ValidateNeeds) {
                let not_pending = |n: &ResourceNeed| n.status != NeedStatus::Pending;
                view = view
                    .action(RowAction::new("Validate", "✔",
                        ctx.change(|n: &ResourceNeed| StatusChange::Need(n.id, NeedStatus::Validated)))
                        .disabled_when(not_pending))
                    .action(RowAction::new("Reject", "✖",
                        ctx.change(|n: &ResourceNeed| StatusChange::Need(n.id, NeedStatus::Rejected)))
                        .disabled_when(not_pending));
            }
            view
        },
    )
    .with_selection()
}
