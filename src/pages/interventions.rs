// src/pages/interventions.rs
use chrono::NaiveDate;

use super::{badge, ListPage};
use crate::api::StatusChange;
use crate::model::{Intervention, InterventionStatus};
use crate::router::PageKind;
use crate::session::{Permission, Session};
use crate::table::{ColumnDescriptor as Col, RowAction};

pub fn page(session: &Session, today: NaiveDate) -> ListPage<Intervention> {
    ListPage::build(
        PageKind::Interventions,
        session,
        today,
        |src, s| src.interventions(s),
        |view, ctx| {
            let mut view = view
                .column(Col::field("#", "id").sortable())
                .column(Col::field("Report", "report_id").sortable())
                .column(Col::field("Technician", "technician").sortable())
                .column(Col::field("Scheduled", "scheduled_on").sortable())
                .column(Col::field("Notes", "notes"))
                .column(Col::derived("Status", |i: &Intervention| badge(i.status)).sortable())
                .filter(status_filter!("Status", InterventionStatus::ALL, |i: &Intervention| i.status))
                .search_by(|i: &Intervention| format!("{} {}", i.technician, i.notes))
                .placeholders("No interventions planned", "No intervention matches the current filters");

            if ctx.session.can(Permission::HandleInterventions) {
                let me = ctx.session.user.id;
                let locked = move |i: &Intervention| {
                    i.status != InterventionStatus::Scheduled || i.technician_id != me
                };
                view = view
                    .action(RowAction::new("Done", "✔",
                        ctx.change(|i: &Intervention| StatusChange::Intervention(i.id, InterventionStatus::Done)))
                        .disabled_when(locked))
                    .action(RowAction::new("Cancel", "✖",
                        ctx.change(|i: &Intervention| StatusChange::Intervention(i.id, InterventionStatus::Cancelled)))
                        .disabled_when(locked));
            }
            view
        },
    )
}
