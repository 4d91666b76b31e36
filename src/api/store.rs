// src/api/store.rs
//
// StoreSource: the fixture tables, persisted one CSV file per record kind
// under a store directory (`<dir>/<table>.csv`, header row first).
//
// - Missing files are seeded from the fixtures on open.
// - Every successful `apply` rewrites the tables it touched.
// - Columns are matched by header name, so column order in a file is free.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::{fixtures, ApiError, ApiResult, DataSource, StatusChange, Tables};
use crate::config::consts::{STORE_EXT, STORE_SEP};
use crate::csv::{parse_rows, rows_to_string};
use crate::model::*;
use crate::session::Session;
use crate::table::{Record, Value};

const NEED_COLS: &[&str] = &[
    "id", "requester_id", "requester", "department", "resource_type",
    "quantity", "justification", "status", "created_on",
];
const RESOURCE_COLS: &[&str] = &[
    "id", "inventory_no", "resource_type", "brand", "department",
    "assigned_to", "status", "acquired_on", "warranty_until",
];
const REPORT_COLS: &[&str] = &[
    "id", "resource_id", "inventory_no", "reporter_id", "reported_by",
    "description", "frequency", "status", "reported_on",
];
const CALL_COLS: &[&str] = &["id", "title", "need_ids", "opens_on", "closes_on", "status"];
const OFFER_COLS: &[&str] = &[
    "id", "call_id", "supplier_id", "supplier", "total_cents",
    "delivery_on", "warranty_months", "status", "submitted_on",
];
const INTERVENTION_COLS: &[&str] = &[
    "id", "report_id", "technician_id", "technician", "scheduled_on", "notes", "status",
];
const DELIVERY_COLS: &[&str] = &[
    "id", "offer_id", "supplier_id", "supplier", "expected_on", "received_on", "status",
];

pub struct StoreSource {
    dir: PathBuf,
    tables: Tables,
    today: NaiveDate,
}

impl StoreSource {
    /// Load every table from `dir`, seeding (and writing) missing ones.
    pub fn open(dir: &Path, today: NaiveDate) -> ApiResult<Self> {
        fs::create_dir_all(dir)?;
        let seed = fixtures::seed();
        let mut missing = Vec::new();

        let mut load = |kind: RecordKind| -> ApiResult<Option<Vec<Vec<String>>>> {
            let path = table_path(dir, kind);
            if !path.exists() {
                missing.push(kind);
                return Ok(None);
            }
            Ok(Some(parse_rows(&fs::read_to_string(&path)?, STORE_SEP)))
        };

        let tables = Tables {
            needs: decode_or(load(RecordKind::Need)?, RecordKind::Need, seed.needs, decode_need)?,
            resources: decode_or(load(RecordKind::Resource)?, RecordKind::Resource, seed.resources, decode_resource)?,
            reports: decode_or(load(RecordKind::Report)?, RecordKind::Report, seed.reports, decode_report)?,
            calls: decode_or(load(RecordKind::Call)?, RecordKind::Call, seed.calls, decode_call)?,
            offers: decode_or(load(RecordKind::Offer)?, RecordKind::Offer, seed.offers, decode_offer)?,
            interventions: decode_or(load(RecordKind::Intervention)?, RecordKind::Intervention, seed.interventions, decode_intervention)?,
            deliveries: decode_or(load(RecordKind::Delivery)?, RecordKind::Delivery, seed.deliveries, decode_delivery)?,
        };

        let store = Self { dir: dir.to_path_buf(), tables, today };
        for kind in &missing {
            store.save(*kind)?;
        }
        logf!("Store: opened {} (seeded {:?})", dir.display(), missing);
        Ok(store)
    }

    fn save(&self, kind: RecordKind) -> ApiResult<()> {
        let t = &self.tables;
        let text = match kind {
            RecordKind::Need => encode_table(&t.needs, NEED_COLS),
            RecordKind::Resource => encode_table(&t.resources, RESOURCE_COLS),
            RecordKind::Report => encode_table(&t.reports, REPORT_COLS),
            RecordKind::Call => encode_table(&t.calls, CALL_COLS),
            RecordKind::Offer => encode_table(&t.offers, OFFER_COLS),
            RecordKind::Intervention => encode_table(&t.interventions, INTERVENTION_COLS),
            RecordKind::Delivery => encode_table(&t.deliveries, DELIVERY_COLS),
        };
        let path = table_path(&self.dir, kind);
        fs::write(&path, text)?;
        logd!("Store: wrote {}", path.display());
        Ok(())
    }
}

impl DataSource for StoreSource {
    fn name(&self) -> &'static str { "store" }
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
        for kind in touched {
            self.save(kind)?;
        }
        Ok(())
    }
}

fn table_path(dir: &Path, kind: RecordKind) -> PathBuf {
    dir.join(format!("{}.{}", kind.table(), STORE_EXT))
}

/* ---------------- Encoding ---------------- */

fn encode_value(v: Value) -> String {
    match v {
        Value::Empty => s!(),
        Value::Bool(b) => b.to_string(),
        Value::Int(n) => n.to_string(),
        Value::Float(x) => x.to_string(),
        Value::Text(t) => t,
        Value::Date(d) => d.format("%Y-%m-%d").to_string(),
    }
}

fn encode_table<T: Record>(rows: &[T], cols: &[&str]) -> String {
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|r| cols.iter().map(|c| encode_value(r.field(c))).collect())
        .collect();
    rows_to_string(Some(cols), &body, STORE_SEP)
}

/* ---------------- Decoding ---------------- */

/// One data row, addressed by header name.
struct Fields<'a> {
    headers: &'a [String],
    row: &'a [String],
}

impl<'a> Fields<'a> {
    fn raw(&self, name: &str) -> Result<&'a str, String> {
        let ix = self.headers.iter().position(|h| h == name)
            .ok_or_else(|| format!("missing column {name:?}"))?;
        Ok(self.row.get(ix).map(String::as_str).unwrap_or(""))
    }

    fn text(&self, name: &str) -> Result<String, String> {
        self.raw(name).map(String::from)
    }

    fn opt_text(&self, name: &str) -> Result<Option<String>, String> {
        let v = self.raw(name)?;
        Ok(if v.is_empty() { None } else { Some(s!(v)) })
    }

    fn num<N: std::str::FromStr>(&self, name: &str) -> Result<N, String> {
        let v = self.raw(name)?;
        v.trim().parse().map_err(|_| format!("{name}: not a number: {v:?}"))
    }

    fn date(&self, name: &str) -> Result<NaiveDate, String> {
        let v = self.raw(name)?;
        NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d").map_err(|e| format!("{name}: {e}: {v:?}"))
    }

    fn opt_num<N: std::str::FromStr>(&self, name: &str) -> Result<Option<N>, String> {
        if self.raw(name)?.trim().is_empty() { Ok(None) } else { self.num(name).map(Some) }
    }

    fn opt_date(&self, name: &str) -> Result<Option<NaiveDate>, String> {
        if self.raw(name)?.trim().is_empty() { Ok(None) } else { self.date(name).map(Some) }
    }

    fn status<S>(&self, name: &str, parse: fn(&str) -> Option<S>) -> Result<S, String> {
        let v = self.raw(name)?;
        parse(v.trim()).ok_or_else(|| format!("{name}: unknown value {v:?}"))
    }

    fn id_list(&self, name: &str) -> Result<Vec<u32>, String> {
        self.raw(name)?
            .split(';')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| p.parse().map_err(|_| format!("{name}: bad id {p:?}")))
            .collect()
    }
}

/// Decode a parsed table, or fall back to `seed` when the file was missing.
fn decode_or<T>(
    parsed: Option<Vec<Vec<String>>>,
    kind: RecordKind,
    seed: Vec<T>,
    decode: fn(&Fields) -> Result<T, String>,
) -> ApiResult<Vec<T>> {
    let Some(mut rows) = parsed else { return Ok(seed) };
    if rows.is_empty() {
        return Ok(Vec::new());
    }
    let headers = rows.remove(0);
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            decode(&Fields { headers: &headers, row }).map_err(|reason| ApiError::Corrupt {
                table: kind.table(),
                line: i + 2,
                reason,
            })
        })
        .collect()
}

fn decode_need(f: &Fields) -> Result<ResourceNeed, String> {
    Ok(ResourceNeed {
        id: f.num("id")?,
        requester_id: f.num("requester_id")?,
        requester: f.text("requester")?,
        department: f.opt_text("department")?,
        resource_type: f.text("resource_type")?,
        quantity: f.num("quantity")?,
        justification: f.text("justification")?,
        status: f.status("status", NeedStatus::parse)?,
        created_on: f.date("created_on")?,
    })
}

fn decode_resource(f: &Fields) -> Result<Resource, String> {
    Ok(Resource {
        id: f.num("id")?,
        inventory_no: f.text("inventory_no")?,
        resource_type: f.text("resource_type")?,
        brand: f.text("brand")?,
        department: f.opt_text("department")?,
        assigned_to: f.opt_text("assigned_to")?,
        status: f.status("status", ResourceStatus::parse)?,
        acquired_on: f.date("acquired_on")?,
        warranty_until: f.opt_date("warranty_until")?,
    })
}

fn decode_report(f: &Fields) -> Result<MaintenanceReport, String> {
    Ok(MaintenanceReport {
        id: f.num("id")?,
        resource_id: f.num("resource_id")?,
        inventory_no: f.text("inventory_no")?,
        reporter_id: f.num("reporter_id")?,
        reported_by: f.text("reported_by")?,
        description: f.text("description")?,
        frequency: f.status("frequency", Frequency::parse)?,
        status: f.status("status", ReportStatus::parse)?,
        reported_on: f.date("reported_on")?,
    })
}

fn decode_call(f: &Fields) -> Result<CallForOffers, String> {
    Ok(CallForOffers {
        id: f.num("id")?,
        title: f.text("title")?,
        need_ids: f.id_list("need_ids")?,
        opens_on: f.date("opens_on")?,
        closes_on: f.date("closes_on")?,
        status: f.status("status", CallStatus::parse)?,
    })
}

fn decode_offer(f: &Fields) -> Result<SupplierOffer, String> {
    Ok(SupplierOffer {
        id: f.num("id")?,
        call_id: f.num("call_id")?,
        supplier_id: f.num("supplier_id")?,
        supplier: f.text("supplier")?,
        total_cents: f.num("total_cents")?,
        delivery_on: f.date("delivery_on")?,
        warranty_months: f.num("warranty_months")?,
        status: f.status("status", OfferStatus::parse)?,
        submitted_on: f.date("submitted_on")?,
    })
}

fn decode_intervention(f: &Fields) -> Result<Intervention, String> {
    Ok(Intervention {
        id: f.num("id")?,
        report_id: f.num("report_id")?,
        technician_id: f.num("technician_id")?,
        technician: f.text("technician")?,
        scheduled_on: f.date("scheduled_on")?,
        notes: f.text("notes")?,
        status: f.status("status", InterventionStatus::parse)?,
    })
}

fn decode_delivery(f: &Fields) -> Result<Delivery, String> {
    Ok(Delivery {
        id: f.num("id")?,
        offer_id: f.opt_num("offer_id")?,
        supplier_id: f.num("supplier_id")?,
        supplier: f.text("supplier")?,
        expected_on: f.date("expected_on")?,
        received_on: f.opt_date("received_on")?,
        status: f.status("status", DeliveryStatus::parse)?,
    })
}
