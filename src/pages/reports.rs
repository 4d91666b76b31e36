// src/pages/reports.rs
use chrono::NaiveDate;

use super::{badge, ListPage};
use crate::api::StatusChange;
use crate::model::{Frequency, MaintenanceReport, ReportStatus};
use crate::router::PageKind;
use crate::session::{Permission, Session};
use crate::table::{ColumnDescriptor as Col, RowAction};

pub fn page(session: &Session, today: NaiveDate) -> ListPage<MaintenanceReport> {
    ListPage::build(
        PageKind::Reports,
        session,
        today,
        |src, s| src.reports(s),
        |view, ctx| {
            let mut view = view
                .column(Col::field("#", "id").sortable())
                .column(Col::field("Resource", "inventory_no").sortable())
                .column(Col::field("Reported by", "reported_by").sortable())
                .column(Col::field("Description", "description"))
                .column(Col::derived("Frequency", |r: &MaintenanceReport| badge(r.frequency)))
                .column(Col::field("Reported on", "reported_on").sortable())
                .column(Col::derived("Status", |r: &MaintenanceReport| badge(r.status)).sortable())
                .filter(status_filter!("Status", ReportStatus::ALL, |r: &MaintenanceReport| r.status))
                .filter(status_filter!("Frequency", Frequency::ALL, |r: &MaintenanceReport| r.frequency))
                .search_by(|r: &MaintenanceReport| {
                    format!("{} {} {}", r.inventory_no, r.reported_by, r.description)
                })
                .placeholders("No failures reported", "No report matches the current filters");

            if ctx.session.can(Permission::HandleInterventions) {
                view = view
                    .action(RowAction::new("Take", "🛠",
                        ctx.change(|r: &MaintenanceReport| StatusChange::Report(r.id, ReportStatus::InProgress)))
                        .shown_if(|r: &MaintenanceReport| r.status == ReportStatus::Open))
                    .action(RowAction::new("Resolve", "✔",
                        ctx.change(|r: &MaintenanceReport| StatusChange::Report(r.id, ReportStatus::Resolved)))
                        .shown_if(|r: &MaintenanceReport| r.status != ReportStatus::Open)
                        .disabled_when(|r: &MaintenanceReport| r.status != ReportStatus::InProgress));
            }
            view
        },
    )
}
