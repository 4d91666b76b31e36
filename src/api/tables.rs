// src/api/tables.rs
//
// In-memory tables plus the rules every data source enforces:
// - visibility: what a session may list, scoped by role/department/owner;
// - workflow: which status transitions are legal, who may make them, and
//   the records they touch in other tables.

use chrono::NaiveDate;

use super::{ApiError, ApiResult, StatusChange};
use crate::model::*;
use crate::session::{Permission, Role, Session};
use crate::table::{Record, RowKey};

#[derive(Clone, Debug, Default)]
pub struct Tables {
    pub needs: Vec<ResourceNeed>,
    pub resources: Vec<Resource>,
    pub reports: Vec<MaintenanceReport>,
    pub calls: Vec<CallForOffers>,
    pub offers: Vec<SupplierOffer>,
    pub interventions: Vec<Intervention>,
    pub deliveries: Vec<Delivery>,
}

fn forbid(s: &Session, action: &'static str) -> ApiError {
    ApiError::Forbidden { user: s.user.name.clone(), role: s.role(), action }
}

fn require(s: &Session, p: Permission, action: &'static str) -> ApiResult<()> {
    if s.can(p) { Ok(()) } else { Err(forbid(s, action)) }
}

fn invalid(kind: RecordKind, id: u32, from: &'static str, to: &'static str) -> ApiError {
    ApiError::InvalidTransition { kind: kind.label(), id, from, to }
}

fn find_mut<T: Record>(rows: &mut [T], kind: RecordKind, id: u32) -> ApiResult<&mut T> {
    rows.iter_mut()
        .find(|r| r.key() == id as RowKey)
        .ok_or(ApiError::NotFound { kind: kind.label(), id })
}

fn next_id<T: Record>(rows: &[T]) -> u32 {
    rows.iter().map(|r| r.key()).max().unwrap_or(0) as u32 + 1
}

impl Tables {
    /* ---------------- Visibility ---------------- */

    pub fn needs(&self, s: &Session) -> ApiResult<Vec<ResourceNeed>> {
        require(s, Permission::ViewNeeds, "view resource needs")?;
        Ok(self.needs.iter()
            .filter(|n| match s.role() {
                Role::Teacher => n.requester_id == s.user.id,
                Role::DepartmentHead => {
                    n.requester_id == s.user.id || s.same_department(n.department.as_deref())
                }
                _ => true,
            })
            .cloned()
            .collect())
    }

    pub fn resources(&self, s: &Session) -> ApiResult<Vec<Resource>> {
        require(s, Permission::ViewResources, "view resources")?;
        Ok(self.resources.iter()
            .filter(|r| match s.role() {
                Role::Teacher | Role::DepartmentHead => s.same_department(r.department.as_deref()),
                _ => true,
            })
            .cloned()
            .collect())
    }

    pub fn reports(&self, s: &Session) -> ApiResult<Vec<MaintenanceReport>> {
        if s.can(Permission::ViewReports) {
            Ok(self.reports.clone())
        } else if s.can(Permission::ReportFailures) {
            Ok(self.reports.iter().filter(|r| r.reporter_id == s.user.id).cloned().collect())
        } else {
            Err(forbid(s, "view maintenance reports"))
        }
    }

    pub fn calls(&self, s: &Session) -> ApiResult<Vec<CallForOffers>> {
        require(s, Permission::ViewCalls, "view calls for offers")?;
        Ok(self.calls.iter()
            .filter(|c| !s.has_role(Role::Supplier) || c.status != CallStatus::Draft)
            .cloned()
            .collect())
    }

    pub fn offers(&self, s: &Session) -> ApiResult<Vec<SupplierOffer>> {
        if s.can(Permission::ReviewOffers) {
            Ok(self.offers.clone())
        } else if s.can(Permission::SubmitOffers) {
            Ok(self.offers.iter().filter(|o| o.supplier_id == s.user.id).cloned().collect())
        } else {
            Err(forbid(s, "view supplier offers"))
        }
    }

    pub fn interventions(&self, s: &Session) -> ApiResult<Vec<Intervention>> {
        if s.has_role(Role::Technician) {
            Ok(self.interventions.iter().filter(|i| i.technician_id == s.user.id).cloned().collect())
        } else if s.can(Permission::ManageResources) {
            Ok(self.interventions.clone())
        } else {
            Err(forbid(s, "view interventions"))
        }
    }

    pub fn deliveries(&self, s: &Session) -> ApiResult<Vec<Delivery>> {
        require(s, Permission::ViewDeliveries, "view deliveries")?;
        Ok(self.deliveries.iter()
            .filter(|d| !s.has_role(Role::Supplier) || d.supplier_id == s.user.id)
            .cloned()
            .collect())
    }

    /* ---------------- Workflow ---------------- */

    /// Apply `change`; returns every table that was modified.
    pub fn apply(&mut self, s: &Session, change: StatusChange, today: NaiveDate) -> ApiResult<Vec<RecordKind>> {
        match change {
            StatusChange::Need(id, to) => self.apply_need(s, id, to),
            StatusChange::Resource(id, to) => self.apply_resource(s, id, to),
            StatusChange::Report(id, to) => self.apply_report(s, id, to, today),
            StatusChange::Call(id, to) => self.apply_call(s, id, to),
            StatusChange::Offer(id, to) => self.apply_offer(s, id, to),
            StatusChange::Intervention(id, to) => self.apply_intervention(s, id, to),
            StatusChange::Delivery(id, to) => self.apply_delivery(s, id, to, today),
        }
    }

    fn apply_need(&mut self, s: &Session, id: u32, to: NeedStatus) -> ApiResult<Vec<RecordKind>> {
        require(s, Permission::ValidateNeeds, "validate resource needs")?;
        let need = find_mut(&mut self.needs, RecordKind::Need, id)?;
        if s.has_role(Role::DepartmentHead) && !s.same_department(need.department.as_deref()) {
            return Err(forbid(s, "validate needs of another department"));
        }
        match (need.status, to) {
            (NeedStatus::Pending, NeedStatus::Validated | NeedStatus::Rejected) => need.status = to,
            (from, to) => return Err(invalid(RecordKind::Need, id, from.label(), to.label())),
        }
        Ok(vec![RecordKind::Need])
    }

    fn apply_resource(&mut self, s: &Session, id: u32, to: ResourceStatus) -> ApiResult<Vec<RecordKind>> {
        require(s, Permission::ManageResources, "manage resources")?;
        let res = find_mut(&mut self.resources, RecordKind::Resource, id)?;
        match (res.status, to) {
            (from, ResourceStatus::Retired) if from != ResourceStatus::Retired => {
                res.status = to;
                res.assigned_to = None;
            }
            (from, to) => return Err(invalid(RecordKind::Resource, id, from.label(), to.label())),
        }
        Ok(vec![RecordKind::Resource])
    }

    fn set_resource_status(&mut self, resource_id: u32, from: ResourceStatus, to: ResourceStatus) {
        if let Some(r) = self.resources.iter_mut().find(|r| r.id == resource_id && r.status == from) {
            r.status = to;
        }
    }

    fn apply_report(&mut self, s: &Session, id: u32, to: ReportStatus, today: NaiveDate) -> ApiResult<Vec<RecordKind>> {
        require(s, Permission::HandleInterventions, "handle maintenance reports")?;
        let next_intervention = next_id(&self.interventions);
        let report = find_mut(&mut self.reports, RecordKind::Report, id)?;
        let resource_id = report.resource_id;

        match (report.status, to) {
            (ReportStatus::Open, ReportStatus::InProgress) => {
                report.status = to;
                self.set_resource_status(resource_id, ResourceStatus::Available, ResourceStatus::UnderMaintenance);
                self.set_resource_status(resource_id, ResourceStatus::Assigned, ResourceStatus::UnderMaintenance);
                self.interventions.push(Intervention {
                    id: next_intervention,
                    report_id: id,
                    technician_id: s.user.id,
                    technician: s.user.name.clone(),
                    scheduled_on: today,
                    notes: s!(),
                    status: InterventionStatus::Scheduled,
                });
            }
            (ReportStatus::InProgress, ReportStatus::Resolved) => {
                report.status = to;
                self.set_resource_status(resource_id, ResourceStatus::UnderMaintenance, ResourceStatus::Available);
                self.interventions.iter_mut()
                    .filter(|i| i.report_id == id && i.status == InterventionStatus::Scheduled)
                    .for_each(|i| i.status = InterventionStatus::Done);
            }
            (from, to) => return Err(invalid(RecordKind::Report, id, from.label(), to.label())),
        }
        Ok(vec![RecordKind::Report, RecordKind::Resource, RecordKind::Intervention])
    }

    fn apply_intervention(&mut self, s: &Session, id: u32, to: InterventionStatus) -> ApiResult<Vec<RecordKind>> {
        require(s, Permission::HandleInterventions, "handle interventions")?;
        let itv = find_mut(&mut self.interventions, RecordKind::Intervention, id)?;
        if itv.technician_id != s.user.id {
            return Err(forbid(s, "update another technician's intervention"));
        }
        let report_id = itv.report_id;

        match (itv.status, to) {
            (InterventionStatus::Scheduled, InterventionStatus::Done) => {
                itv.status = to;
                let mut resource_id = None;
                if let Some(r) = self.reports.iter_mut().find(|r| r.id == report_id && r.status == ReportStatus::InProgress) {
                    r.status = ReportStatus::Resolved;
                    resource_id = Some(r.resource_id);
                }
                if let Some(rid) = resource_id {
                    self.set_resource_status(rid, ResourceStatus::UnderMaintenance, ResourceStatus::Available);
                }
            }
            (InterventionStatus::Scheduled, InterventionStatus::Cancelled) => {
                itv.status = to;
                let others = self.interventions.iter()
                    .any(|i| i.report_id == report_id && i.status == InterventionStatus::Scheduled);
                if !others {
                    if let Some(r) = self.reports.iter_mut().find(|r| r.id == report_id && r.status == ReportStatus::InProgress) {
                        r.status = ReportStatus::Open;
                    }
                }
            }
            (from, to) => return Err(invalid(RecordKind::Intervention, id, from.label(), to.label())),
        }
        Ok(vec![RecordKind::Intervention, RecordKind::Report, RecordKind::Resource])
    }

    fn apply_call(&mut self, s: &Session, id: u32, to: CallStatus) -> ApiResult<Vec<RecordKind>> {
        require(s, Permission::PublishCalls, "publish calls for offers")?;
        let call = find_mut(&mut self.calls, RecordKind::Call, id)?;
        match (call.status, to) {
            (CallStatus::Draft, CallStatus::Open) | (CallStatus::Open, CallStatus::Closed) => call.status = to,
            (from, to) => return Err(invalid(RecordKind::Call, id, from.label(), to.label())),
        }
        Ok(vec![RecordKind::Call])
    }

    fn apply_offer(&mut self, s: &Session, id: u32, to: OfferStatus) -> ApiResult<Vec<RecordKind>> {
        require(s, Permission::ReviewOffers, "review supplier offers")?;
        let next_delivery = next_id(&self.deliveries);
        let offer = find_mut(&mut self.offers, RecordKind::Offer, id)?;

        match (offer.status, to) {
            (OfferStatus::Submitted, OfferStatus::Rejected) => {
                offer.status = to;
                Ok(vec![RecordKind::Offer])
            }
            (OfferStatus::Submitted, OfferStatus::Accepted) => {
                offer.status = to;
                let accepted = offer.clone();

                // One winner per call: the others lose, the call closes.
                self.offers.iter_mut()
                    .filter(|o| o.call_id == accepted.call_id && o.id != id && o.status == OfferStatus::Submitted)
                    .for_each(|o| o.status = OfferStatus::Rejected);
                if let Some(c) = self.calls.iter_mut().find(|c| c.id == accepted.call_id && c.status == CallStatus::Open) {
                    c.status = CallStatus::Closed;
                }
                self.deliveries.push(Delivery {
                    id: next_delivery,
                    offer_id: Some(id),
                    supplier_id: accepted.supplier_id,
                    supplier: accepted.supplier,
                    expected_on: accepted.delivery_on,
                    received_on: None,
                    status: DeliveryStatus::Expected,
                });
                Ok(vec![RecordKind::Offer, RecordKind::Call, RecordKind::Delivery])
            }
            (from, to) => Err(invalid(RecordKind::Offer, id, from.label(), to.label())),
        }
    }

    fn apply_delivery(&mut self, s: &Session, id: u32, to: DeliveryStatus, today: NaiveDate) -> ApiResult<Vec<RecordKind>> {
        require(s, Permission::ConfirmDeliveries, "confirm deliveries")?;
        let delivery = find_mut(&mut self.deliveries, RecordKind::Delivery, id)?;
        match (delivery.status, to) {
            (DeliveryStatus::Expected, DeliveryStatus::Received) => {
                delivery.status = to;
                delivery.received_on = Some(today);
            }
            (from, to) => return Err(invalid(RecordKind::Delivery, id, from.label(), to.label())),
        }
        Ok(vec![RecordKind::Delivery])
    }
}
