// src/pages/calls.rs
use chrono::NaiveDate;

use super::{badge, ListPage};
use crate::api::StatusChange;
use crate::model::{CallForOffers, CallStatus};
use crate::router::{self, Access, PageKind};
use crate::session::{Permission, Session};
use crate::table::{Cell, ColumnDescriptor as Col, RowAction, Value};

/// Search text that finds a call's offers on the offers page. The trailing
/// `;` keeps `call #1` from matching `call #12`.
pub fn offers_query(call_id: u32) -> String {
    format!("call #{call_id};")
}

pub fn page(session: &Session, today: NaiveDate) -> ListPage<CallForOffers> {
    ListPage::build(
        PageKind::Calls,
        session,
        today,
        |src, s| src.calls(s),
        |view, ctx| {
            let mut view = view
                .column(Col::field("#", "id").sortable())
                .column(Col::field("Title", "title").sortable())
                .column(Col::derived("Needs", |c: &CallForOffers| {
                    Cell::Value(Value::Int(c.need_ids.len() as i64))
                }).sortable())
                .column(Col::field("Opens", "opens_on").sortable())
                .column(Col::field("Closes", "closes_on").sortable())
                .column(Col::derived("Status", |c: &CallForOffers| badge(c.status)).sortable())
                .filter(status_filter!("Status", CallStatus::ALL, |c: &CallForOffers| c.status))
                .search_by(|c: &CallForOffers| format!("{} {}", c.title, c.need_ids_text()))
                .placeholders("No calls for offers", "No call matches the current filters");

            if ctx.session.can(Permission::PublishCalls) {
                view = view
                    .action(RowAction::new("Publish", "📣",
                        ctx.change(|c: &CallForOffers| StatusChange::Call(c.id, CallStatus::Open)))
                        .shown_if(|c: &CallForOffers| c.status == CallStatus::Draft))
                    .action(RowAction::new("Close", "🔒",
                        ctx.change(|c: &CallForOffers| StatusChange::Call(c.id, CallStatus::Closed)))
                        .shown_if(|c: &CallForOffers| c.status != CallStatus::Draft)
                        .disabled_when(|c: &CallForOffers| c.status != CallStatus::Open));
            }
            if router::guard(Some(ctx.session), PageKind::Offers) == Access::Granted {
                view = view.action(
                    RowAction::new("Offers", "📄",
                        ctx.navigate(PageKind::Offers, |c: &CallForOffers| offers_query(c.id)))
                        .shown_if(|c: &CallForOffers| c.status != CallStatus::Draft),
                );
            }
            view
        },
    )
}
