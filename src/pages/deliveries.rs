// src/pages/deliveries.rs
use chrono::NaiveDate;

use super::{badge, ListPage};
use crate::api::StatusChange;
use crate::model::{Delivery, DeliveryStatus};
use crate::router::PageKind;
use crate::session::{Permission, Session};
use crate::table::{Cell, ColumnDescriptor as Col, FilterGroup, RowAction, Tone};

pub fn page(session: &Session, today: NaiveDate) -> ListPage<Delivery> {
    ListPage::build(
        PageKind::Deliveries,
        session,
        today,
        |src, s| src.deliveries(s),
        |view, ctx| {
            let today = ctx.today;
            let mut view = view
                .column(Col::field("#", "id").sortable())
                .column(Col::field("Offer", "offer_id").sortable())
                .column(Col::field("Supplier", "supplier").sortable())
                .column(Col::field("Expected", "expected_on").sortable())
                .column(Col::field("Received", "received_on").sortable())
                .column(Col::derived("Status", move |d: &Delivery| {
                    if d.is_late(today) { Cell::badge("Late", Tone::Danger) } else { badge(d.status) }
                }).sortable())
                .filter(FilterGroup::new("Status")
                    .option("Expected", "expected", |d: &Delivery| d.status == DeliveryStatus::Expected)
                    .option("Late", "late", move |d: &Delivery| d.is_late(today))
                    .option("Received", "received", |d: &Delivery| d.status == DeliveryStatus::Received))
                .search_by(|d: &Delivery| d.supplier.clone())
                .placeholders("No deliveries", "No delivery matches the current filters");

            if ctx.session.can(Permission::ConfirmDeliveries) {
                view = view.action(
                    RowAction::new("Confirm reception", "📦",
                        ctx.change(|d: &Delivery| StatusChange::Delivery(d.id, DeliveryStatus::Received)))
                        .disabled_when(|d: &Delivery| d.status != DeliveryStatus::Expected),
                );
            }
            view
        },
    )
}
