// src/pages/offers.rs
use chrono::NaiveDate;

use super::{badge, calls::offers_query, ListPage};
use crate::api::StatusChange;
use crate::model::{OfferStatus, SupplierOffer};
use crate::router::PageKind;
use crate::session::{Permission, Session};
use crate::table::{Cell, ColumnDescriptor as Col, RowAction, Value};

pub fn page(session: &Session, today: NaiveDate) -> ListPage<SupplierOffer> {
    ListPage::build(
        PageKind::Offers,
        session,
        today,
        |src, s| src.offers(s),
        |view, ctx| {
            let mut view = view
                .column(Col::field("#", "id").sortable())
                .column(Col::field("Call", "call_id").sortable())
                .column(Col::field("Supplier", "supplier").sortable())
                .column(Col::derived("Total (€)", |o: &SupplierOffer| {
                    Cell::Value(Value::Float(o.total_cents as f64 / 100.0))
                }).sortable())
                .column(Col::field("Delivery", "delivery_on").sortable())
                .column(Col::field("Warranty (months)", "warranty_months").sortable())
                .column(Col::derived("Status", |o: &SupplierOffer| badge(o.status)).sortable())
                .filter(status_filter!("Status", OfferStatus::ALL, |o: &SupplierOffer| o.status))
                .search_by(|o: &SupplierOffer| format!("{} {}", offers_query(o.call_id), o.supplier))
                .placeholders("No offers received", "No offer matches the current filters");

            if ctx.session.can(Permission::ReviewOffers) {
                let settled = |o: &SupplierOffer| o.status != OfferStatus::Submitted;
                view = view
                    .action(RowAction::new("Accept", "✔",
                        ctx.change(|o: &SupplierOffer| StatusChange::Offer(o.id, OfferStatus::Accepted)))
                        .disabled_when(settled))
                    .action(RowAction::new("Reject", "✖",
                        ctx.change(|o: &SupplierOffer| StatusChange::Offer(o.id, OfferStatus::Rejected)))
                        .disabled_when(settled));
            }
            view
        },
    )
    .with_selection()
}
