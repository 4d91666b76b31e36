// src/dashboard.rs
//
// Landing page content: per-kind status counts and a short activity feed,
// both limited to what the session may see.

use chrono::NaiveDate;

use crate::api::{ApiResult, DataSource};
use crate::model::{RecordKind, Status};
use crate::router::{self, Access, PageKind};
use crate::session::{Role, Session};
use crate::table::{Record, RowKey, Tone};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusCount {
    pub label: &'static str,
    pub tone: Tone,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KindSummary {
    pub kind: RecordKind,
    pub page: PageKind,
    pub total: usize,
    /// One entry per status, in declaration order (zero counts included).
    pub by_status: Vec<StatusCount>,
}

impl KindSummary {
    pub fn count(&self, label: &str) -> usize {
        self.by_status.iter().find(|c| c.label == label).map(|c| c.count).unwrap_or(0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityEntry {
    pub date: NaiveDate,
    pub kind: RecordKind,
    pub id: RowKey,
    pub summary: String,
    pub status: &'static str,
    pub tone: Tone,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dashboard {
    pub user: String,
    pub role: Role,
    pub summaries: Vec<KindSummary>,
    pub recent: Vec<ActivityEntry>,
}

impl Dashboard {
    pub fn summary(&self, kind: RecordKind) -> Option<&KindSummary> {
        self.summaries.iter().find(|s| s.kind == kind)
    }
}

/// Page listing records of `kind`.
pub fn page_for(kind: RecordKind) -> PageKind {
    match kind {
        RecordKind::Need => PageKind::Needs,
        RecordKind::Resource => PageKind::Resources,
        RecordKind::Report => PageKind::Reports,
        RecordKind::Call => PageKind::Calls,
        RecordKind::Offer => PageKind::Offers,
        RecordKind::Intervention => PageKind::Interventions,
        RecordKind::Delivery => PageKind::Deliveries,
    }
}

struct Collector {
    summaries: Vec<KindSummary>,
    activity: Vec<ActivityEntry>,
}

impl Collector {
    fn add<T, S>(
        &mut self,
        kind: RecordKind,
        rows: Vec<T>,
        status: impl Fn(&T) -> S,
        when: impl Fn(&T) -> NaiveDate,
        describe: impl Fn(&T) -> String,
    ) where
        T: Record,
        S: Status,
    {
        let by_status = S::variants()
            .iter()
            .map(|&st| StatusCount {
                label: st.label(),
                tone: st.tone(),
                count: rows.iter().filter(|r| status(r) == st).count(),
            })
            .collect();
        self.summaries.push(KindSummary { kind, page: page_for(kind), total: rows.len(), by_status });

        self.activity.extend(rows.iter().map(|r| {
            let st = status(r);
            ActivityEntry {
                date: when(r),
                kind,
                id: r.key(),
                summary: describe(r),
                status: st.label(),
                tone: st.tone(),
            }
        }));
    }
}

/// Build the dashboard for `session`, keeping the `recent` newest entries.
pub fn build(src: &dyn DataSource, session: &Session, recent: usize) -> ApiResult<Dashboard> {
    let mut c = Collector { summaries: Vec::new(), activity: Vec::new() };

    for &kind in RecordKind::ALL {
        if router::guard(Some(session), page_for(kind)) != Access::Granted {
            continue;
        }
        match kind {
            RecordKind::Need => c.add(
                kind,
                src.needs(session)?,
                |n| n.status,
                |n| n.created_on,
                |n| format!("{} × {} requested by {}", n.quantity, n.resource_type, n.requester),
            ),
            RecordKind::Resource => c.add(
                kind,
                src.resources(session)?,
                |r| r.status,
                |r| r.acquired_on,
                |r| format!("{} {} ({})", r.brand, r.resource_type, r.inventory_no),
            ),
            RecordKind::Report => c.add(
                kind,
                src.reports(session)?,
                |r| r.status,
                |r| r.reported_on,
                |r| format!("{}: {}", r.inventory_no, r.description),
            ),
            RecordKind::Call => c.add(
                kind,
                src.calls(session)?,
                |x| x.status,
                |x| x.opens_on,
                |x| x.title.clone(),
            ),
            RecordKind::Offer => c.add(
                kind,
                src.offers(session)?,
                |o| o.status,
                |o| o.submitted_on,
                |o| format!("{} on call #{} ({} €)", o.supplier, o.call_id, o.total_text()),
            ),
            RecordKind::Intervention => c.add(
                kind,
                src.interventions(session)?,
                |i| i.status,
                |i| i.scheduled_on,
                |i| format!("Report #{} by {}", i.report_id, i.technician),
            ),
            RecordKind::Delivery => c.add(
                kind,
                src.deliveries(session)?,
                |d| d.status,
                |d| d.received_on.unwrap_or(d.expected_on),
                |d| match d.offer_id {
                    Some(offer) => format!("{} (offer #{offer})", d.supplier),
                    None => d.supplier.clone(),
                },
            ),
        }
    }

    let Collector { summaries, mut activity } = c;
    activity.sort_by(|a, b| {
        b.date.cmp(&a.date).then(a.kind.cmp(&b.kind)).then(a.id.cmp(&b.id))
    });
    activity.truncate(recent);

    logd!("Dashboard: {} kind(s), {} activity entries for {}", summaries.len(), activity.len(), session.user.name);
    Ok(Dashboard {
        user: session.user.name.clone(),
        role: session.role(),
        summaries,
        recent: activity,
    })
}
