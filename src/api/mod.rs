// src/api/mod.rs
//
// Data-access port. Pages and the dashboard only see `DataSource`; which
// implementation backs it is decided once, when the desk is composed:
//
// - FixtureSource: in-memory demo tables.
// - StoreSource:   the same tables persisted as CSV under a store directory.
//
// Both share `Tables`, which owns visibility scoping and workflow rules.

use chrono::NaiveDate;

mod error;
pub mod fixture;
pub mod fixtures;
pub mod store;
pub mod tables;

pub use error::ApiError;
pub use fixture::FixtureSource;
pub use store::StoreSource;
pub use tables::Tables;

use crate::config::options::SourceKind;
use crate::model::*;
use crate::session::Session;

pub type ApiResult<T> = Result<T, ApiError>;

/// A requested workflow transition on one record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusChange {
    Need(u32, NeedStatus),
    Resource(u32, ResourceStatus),
    Report(u32, ReportStatus),
    Call(u32, CallStatus),
    Offer(u32, OfferStatus),
    Intervention(u32, InterventionStatus),
    Delivery(u32, DeliveryStatus),
}

impl StatusChange {
    pub fn kind(&self) -> RecordKind {
        match self {
            StatusChange::Need(..) => RecordKind::Need,
            StatusChange::Resource(..) => RecordKind::Resource,
            StatusChange::Report(..) => RecordKind::Report,
            StatusChange::Call(..) => RecordKind::Call,
            StatusChange::Offer(..) => RecordKind::Offer,
            StatusChange::Intervention(..) => RecordKind::Intervention,
            StatusChange::Delivery(..) => RecordKind::Delivery,
        }
    }

    pub fn id(&self) -> u32 {
        match *self {
            StatusChange::Need(id, _)
            | StatusChange::Resource(id, _)
            | StatusChange::Report(id, _)
            | StatusChange::Call(id, _)
            | StatusChange::Offer(id, _)
            | StatusChange::Intervention(id, _)
            | StatusChange::Delivery(id, _) => id,
        }
    }

    pub fn target_label(&self) -> &'static str {
        match *self {
            StatusChange::Need(_, s) => s.label(),
            StatusChange::Resource(_, s) => s.label(),
            StatusChange::Report(_, s) => s.label(),
            StatusChange::Call(_, s) => s.label(),
            StatusChange::Offer(_, s) => s.label(),
            StatusChange::Intervention(_, s) => s.label(),
            StatusChange::Delivery(_, s) => s.label(),
        }
    }
}

pub trait DataSource {
    /// Short name for logs and the status line.
    fn name(&self) -> &'static str;

    /// Reference date for "today" (late deliveries, new records).
    fn today(&self) -> NaiveDate;

    fn needs(&self, session: &Session) -> ApiResult<Vec<ResourceNeed>>;
    fn resources(&self, session: &Session) -> ApiResult<Vec<Resource>>;
    fn reports(&self, session: &Session) -> ApiResult<Vec<MaintenanceReport>>;
    fn calls(&self, session: &Session) -> ApiResult<Vec<CallForOffers>>;
    fn offers(&self, session: &Session) -> ApiResult<Vec<SupplierOffer>>;
    fn interventions(&self, session: &Session) -> ApiResult<Vec<Intervention>>;
    fn deliveries(&self, session: &Session) -> ApiResult<Vec<Delivery>>;

    /// Apply a workflow transition (and its knock-on effects).
    fn apply(&mut self, session: &Session, change: StatusChange) -> ApiResult<()>;
}

/// Build the configured data source.
pub fn open(kind: &SourceKind) -> ApiResult<Box<dyn DataSource>> {
    let today = chrono::Local::now().date_naive();
    match kind {
        SourceKind::Fixture => Ok(Box::new(FixtureSource::new(today))),
        SourceKind::Store(dir) => Ok(Box::new(StoreSource::open(dir, today)?)),
    }
}
