// src/api/fixtures.rs
//
// Demo data for FixtureSource (and the initial content of a fresh store).
// User ids match `session::demo_users()`.

use chrono::NaiveDate;

use super::Tables;
use crate::model::*;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap_or_default()
}

fn need(
    id: u32,
    (requester_id, requester): (u32, &str),
    department: Option<&str>,
    resource_type: &str,
    quantity: u32,
    justification: &str,
    status: NeedStatus,
    created_on: NaiveDate,
) -> ResourceNeed {
    ResourceNeed {
        id,
        requester_id,
        requester: s!(requester),
        department: department.map(String::from),
        resource_type: s!(resource_type),
        quantity,
        justification: s!(justification),
        status,
        created_on,
    }
}

fn resource(
    id: u32,
    inventory_no: &str,
    resource_type: &str,
    brand: &str,
    department: Option<&str>,
    assigned_to: Option<&str>,
    status: ResourceStatus,
    acquired_on: NaiveDate,
    warranty_until: Option<NaiveDate>,
) -> Resource {
    Resource {
        id,
        inventory_no: s!(inventory_no),
        resource_type: s!(resource_type),
        brand: s!(brand),
        department: department.map(String::from),
        assigned_to: assigned_to.map(String::from),
        status,
        acquired_on,
        warranty_until,
    }
}

pub fn seed() -> Tables {
    const AMINA: (u32, &str) = (1, "Amina Benali");
    const LUCAS: (u32, &str) = (2, "Lucas Martin");
    const CLAIRE: (u32, &str) = (3, "Claire Dubois");
    const INFO: Option<&str> = Some("Informatique");
    const MATHS: Option<&str> = Some("Mathématiques");

    use NeedStatus::*;
    let needs = vec![
        need(1, AMINA, INFO, "Ordinateur", 12, "Renouvellement salle TP 2", Pending, d(2025, 9, 2)),
        need(2, AMINA, INFO, "Imprimante", 1, "Imprimante laser pour le labo", Validated, d(2025, 8, 28)),
        need(3, CLAIRE, INFO, "Vidéoprojecteur", 2, "Amphi B et salle 104", Pending, d(2025, 9, 5)),
        need(4, LUCAS, MATHS, "Ordinateur", 4, "Postes pour calcul formel", Pending, d(2025, 9, 3)),
        need(5, LUCAS, MATHS, "Écran", 4, "Double écran enseignants", Rejected, d(2025, 7, 14)),
        need(6, AMINA, INFO, "Switch réseau", 1, "Extension réseau salle TP 2", Validated, d(2025, 9, 8)),
    ];

    use ResourceStatus::*;
    let resources = vec![
        resource(1, "INV-2023-001", "Ordinateur", "Dell", INFO, Some("Amina Benali"), Assigned, d(2023, 1, 15), Some(d(2026, 1, 15))),
        resource(2, "INV-2023-002", "Imprimante", "HP", INFO, None, Available, d(2023, 3, 2), Some(d(2025, 3, 2))),
        resource(3, "INV-2022-017", "Vidéoprojecteur", "Epson", MATHS, None, UnderMaintenance, d(2022, 10, 11), None),
        resource(4, "INV-2024-005", "Ordinateur", "Lenovo", MATHS, Some("Lucas Martin"), Assigned, d(2024, 2, 20), Some(d(2027, 2, 20))),
        resource(5, "INV-2019-044", "Scanner", "Canon", INFO, None, Retired, d(2019, 5, 6), None),
        resource(6, "INV-2024-012", "Écran", "Samsung", INFO, Some("Claire Dubois"), Assigned, d(2024, 6, 1), Some(d(2027, 6, 1))),
    ];

    let reports = vec![
        MaintenanceReport {
            id: 1,
            resource_id: 3,
            inventory_no: s!("INV-2022-017"),
            reporter_id: 2,
            reported_by: s!("Lucas Martin"),
            description: s!("Lampe qui clignote puis s'éteint"),
            frequency: Frequency::Frequent,
            status: ReportStatus::InProgress,
            reported_on: d(2025, 9, 1),
        },
        MaintenanceReport {
            id: 2,
            resource_id: 1,
            inventory_no: s!("INV-2023-001"),
            reporter_id: 1,
            reported_by: s!("Amina Benali"),
            description: s!("Écran bleu au démarrage"),
            frequency: Frequency::Rare,
            status: ReportStatus::Open,
            reported_on: d(2025, 9, 6),
        },
        MaintenanceReport {
            id: 3,
            resource_id: 2,
            inventory_no: s!("INV-2023-002"),
            reporter_id: 3,
            reported_by: s!("Claire Dubois"),
            description: s!("Bourrage papier permanent"),
            frequency: Frequency::Permanent,
            status: ReportStatus::Resolved,
            reported_on: d(2025, 6, 19),
        },
    ];

    let calls = vec![
        CallForOffers {
            id: 1,
            title: s!("Équipement informatique rentrée 2025"),
            need_ids: vec![2, 6],
            opens_on: d(2025, 9, 10),
            closes_on: d(2025, 10, 10),
            status: CallStatus::Open,
        },
        CallForOffers {
            id: 2,
            title: s!("Vidéoprojecteurs amphithéâtres"),
            need_ids: vec![3],
            opens_on: d(2025, 10, 1),
            closes_on: d(2025, 11, 1),
            status: CallStatus::Draft,
        },
    ];

    let offers = vec![
        SupplierOffer {
            id: 1,
            call_id: 1,
            supplier_id: 6,
            supplier: s!("Bureautique Pro"),
            total_cents: 1_849_000,
            delivery_on: d(2025, 11, 3),
            warranty_months: 24,
            status: OfferStatus::Submitted,
            submitted_on: d(2025, 9, 15),
        },
        SupplierOffer {
            id: 2,
            call_id: 1,
            supplier_id: 7,
            supplier: s!("TechnoPlus SARL"),
            total_cents: 1_712_550,
            delivery_on: d(2025, 11, 20),
            warranty_months: 36,
            status: OfferStatus::Submitted,
            submitted_on: d(2025, 9, 18),
        },
    ];

    let interventions = vec![Intervention {
        id: 1,
        report_id: 1,
        technician_id: 5,
        technician: s!("Hugo Lefèvre"),
        scheduled_on: d(2025, 9, 4),
        notes: s!("Lampe commandée"),
        status: InterventionStatus::Scheduled,
    }];

    let deliveries = vec![Delivery {
        id: 1,
        offer_id: None,
        supplier_id: 6,
        supplier: s!("Bureautique Pro"),
        expected_on: d(2025, 6, 30),
        received_on: Some(d(2025, 7, 2)),
        status: DeliveryStatus::Received,
    }];

    Tables { needs, resources, reports, calls, offers, interventions, deliveries }
}
