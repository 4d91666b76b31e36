// src/api/fixture.rs
use chrono::NaiveDate;

use super::{fixtures, ApiResult, DataSource, StatusChange, Tables};
use crate::model::*;
use crate::session::Session;

/// In-memory data source over the demo fixtures.
#[derive(Clone, Debug)]
pub struct FixtureSource {
    tables: Tables,
    today: NaiveDate,
}

impl FixtureSource {
    pub fn new(today: NaiveDate) -> Self {
        Self::with_tables(fixtures::seed(), today)
    }

    pub fn with_tables(tables: Tables, today: NaiveDate) -> Self {
        Self { tables, today }
    }

    pub fn tables(&self) -> &Tables { &self.tables }
}

impl DataSource for FixtureSource {
    fn name(&self) -> &'static str { "fixtures" }
    fn today(&self) -> NaiveDate { self.today }

    fn needs(&self, s: &Session) -> ApiResult<Vec<ResourceNeed>> { self.tables.needs(s) }
    fn resources(&self, s: &Session) -> ApiResult<Vec<Resource>> { self.tables.resources(s) }
    fn reports(&self, s: &Session) -> ApiResult<Vec<MaintenanceReport>> { self.tables.reports(s) }
    fn calls(&self, s: &Session) -> ApiResult<Vec<CallForOffers>> { self.tables.calls(s) }
    fn offers(&self, s: &Session) -> ApiResult<Vec<SupplierOffer>> { self.tables.offers(s) }
    fn interventions(&self, s: &Session) -> ApiResult<Vec<Intervention>> { self.tables.interventions(s) }
    fn deliveries(&self, s: &Session) -> ApiResult<Vec<Delivery>> { self.tables.deliveries(s) }

    fn apply(&mut self, s: &Session, change: StatusChange) -> ApiResult<()> {
        let touched = self.tables.apply(s, change, self.today)?;
        logd!("Fixtures: {:?} applied (touched {:?})", change, touched);
        Ok(())
    }
}
