// src/model/records.rs
//
// Domain records. `Record::field` names double as CSV store columns, so
// they return stable machine values (status `value()`, ISO dates, cents).

use chrono::NaiveDate;

use super::status::*;
use crate::table::{Record, RowKey, Value};

#[derive(Clone, Debug, PartialEq)]
pub struct ResourceNeed {
    pub id: u32,
    pub requester_id: u32,
    pub requester: String,
    pub department: Option<String>,
    pub resource_type: String,
    pub quantity: u32,
    pub justification: String,
    pub status: NeedStatus,
    pub created_on: NaiveDate,
}

impl Record for ResourceNeed {
    fn key(&self) -> RowKey { self.id as RowKey }

    fn field(&self, name: &str) -> Value {
        match name {
            "id" => self.id.into(),
            "requester_id" => self.requester_id.into(),
            "requester" => Value::text(&self.requester),
            "department" => Value::opt_text(self.department.as_deref()),
            "resource_type" => Value::text(&self.resource_type),
            "quantity" => self.quantity.into(),
            "justification" => Value::text(&self.justification),
            "status" => self.status.value().into(),
            "created_on" => self.created_on.into(),
            _ => Value::Empty,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Resource {
    pub id: u32,
    pub inventory_no: String,
    pub resource_type: String,
    pub brand: String,
    pub department: Option<String>,
    pub assigned_to: Option<String>,
    pub status: ResourceStatus,
    pub acquired_on: NaiveDate,
    pub warranty_until: Option<NaiveDate>,
}

impl Resource {
    pub fn under_warranty(&self, today: NaiveDate) -> bool {
        self.warranty_until.is_some_and(|d| d >= today)
    }
}

impl Record for Resource {
    fn key(&self) -> RowKey { self.id as RowKey }

    fn field(&self, name: &str) -> Value {
        match name {
            "id" => self.id.into(),
            "inventory_no" => Value::text(&self.inventory_no),
            "resource_type" => Value::text(&self.resource_type),
            "brand" => Value::text(&self.brand),
            "department" => Value::opt_text(self.department.as_deref()),
            "assigned_to" => Value::opt_text(self.assigned_to.as_deref()),
            "status" => self.status.value().into(),
            "acquired_on" => self.acquired_on.into(),
            "warranty_until" => Value::opt_date(self.warranty_until),
            _ => Value::Empty,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MaintenanceReport {
    pub id: u32,
    pub resource_id: u32,
    pub inventory_no: String,
    pub reporter_id: u32,
    pub reported_by: String,
    pub description: String,
    pub frequency: Frequency,
    pub status: ReportStatus,
    pub reported_on: NaiveDate,
}

impl Record for MaintenanceReport {
    fn key(&self) -> RowKey { self.id as RowKey }

    fn field(&self, name: &str) -> Value {
        match name {
            "id" => self.id.into(),
            "resource_id" => self.resource_id.into(),
            "inventory_no" => Value::text(&self.inventory_no),
            "reporter_id" => self.reporter_id.into(),
            "reported_by" => Value::text(&self.reported_by),
            "description" => Value::text(&self.description),
            "frequency" => self.frequency.value().into(),
            "status" => self.status.value().into(),
            "reported_on" => self.reported_on.into(),
            _ => Value::Empty,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CallForOffers {
    pub id: u32,
    pub title: String,
    pub need_ids: Vec<u32>,
    pub opens_on: NaiveDate,
    pub closes_on: NaiveDate,
    pub status: CallStatus,
}

impl CallForOffers {
    /// "1;4;7", as stored and displayed.
    pub fn need_ids_text(&self) -> String {
        self.need_ids.iter().map(u32::to_string).collect::<Vec<_>>().join(";")
    }
}

impl Record for CallForOffers {
    fn key(&self) -> RowKey { self.id as RowKey }

    fn field(&self, name: &str) -> Value {
        match name {
            "id" => self.id.into(),
            "title" => Value::text(&self.title),
            "need_ids" => Value::text(self.need_ids_text()),
            "opens_on" => self.opens_on.into(),
            "closes_on" => self.closes_on.into(),
            "status" => self.status.value().into(),
            _ => Value::Empty,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SupplierOffer {
    pub id: u32,
    pub call_id: u32,
    pub supplier_id: u32,
    pub supplier: String,
    pub total_cents: i64,
    pub delivery_on: NaiveDate,
    pub warranty_months: u32,
    pub status: OfferStatus,
    pub submitted_on: NaiveDate,
}

impl SupplierOffer {
    pub fn total_text(&self) -> String {
        format!("{}.{:02} €", self.total_cents / 100, (self.total_cents % 100).abs())
    }
}

impl Record for SupplierOffer {
    fn key(&self) -> RowKey { self.id as RowKey }

    fn field(&self, name: &str) -> Value {
        match name {
            "id" => self.id.into(),
            "call_id" => self.call_id.into(),
            "supplier_id" => self.supplier_id.into(),
            "supplier" => Value::text(&self.supplier),
            "total_cents" => Value::Int(self.total_cents),
            "delivery_on" => self.delivery_on.into(),
            "warranty_months" => self.warranty_months.into(),
            "status" => self.status.value().into(),
            "submitted_on" => self.submitted_on.into(),
            _ => Value::Empty,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Intervention {
    pub id: u32,
    pub report_id: u32,
    pub technician_id: u32,
    pub technician: String,
    pub scheduled_on: NaiveDate,
    pub notes: String,
    pub status: InterventionStatus,
}

impl Record for Intervention {
    fn key(&self) -> RowKey { self.id as RowKey }

    fn field(&self, name: &str) -> Value {
        match name {
            "id" => self.id.into(),
            "report_id" => self.report_id.into(),
            "technician_id" => self.technician_id.into(),
            "technician" => Value::text(&self.technician),
            "scheduled_on" => self.scheduled_on.into(),
            "notes" => Value::text(&self.notes),
            "status" => self.status.value().into(),
            _ => Value::Empty,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Delivery {
    pub id: u32,
    /// None for deliveries recorded before offers were tracked.
    pub offer_id: Option<u32>,
    pub supplier_id: u32,
    pub supplier: String,
    pub expected_on: NaiveDate,
    pub received_on: Option<NaiveDate>,
    pub status: DeliveryStatus,
}

impl Delivery {
    pub fn is_late(&self, today: NaiveDate) -> bool {
        self.status == DeliveryStatus::Expected && self.expected_on < today
    }
}

impl Record for Delivery {
    fn key(&self) -> RowKey { self.id as RowKey }

    fn field(&self, name: &str) -> Value {
        match name {
            "id" => self.id.into(),
            "offer_id" => self.offer_id.map_or(Value::Empty, Value::from),
            "supplier_id" => self.supplier_id.into(),
            "supplier" => Value::text(&self.supplier),
            "expected_on" => self.expected_on.into(),
            "received_on" => Value::opt_date(self.received_on),
            "status" => self.status.value().into(),
            _ => Value::Empty,
        }
    }
}
