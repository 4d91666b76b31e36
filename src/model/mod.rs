// src/model/mod.rs
pub mod records;
pub mod status;

pub use records::*;
pub use status::*;

/// The seven record kinds the desk manages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKind {
    Need,
    Resource,
    Report,
    Call,
    Offer,
    Intervention,
    Delivery,
}

impl RecordKind {
    pub const ALL: &'static [RecordKind] = &[
        RecordKind::Need,
        RecordKind::Resource,
        RecordKind::Report,
        RecordKind::Call,
        RecordKind::Offer,
        RecordKind::Intervention,
        RecordKind::Delivery,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Need => "Resource need",
            RecordKind::Resource => "Resource",
            RecordKind::Report => "Maintenance report",
            RecordKind::Call => "Call for offers",
            RecordKind::Offer => "Supplier offer",
            RecordKind::Intervention => "Intervention",
            RecordKind::Delivery => "Delivery",
        }
    }

    /// Store table name.
    pub fn table(self) -> &'static str {
        match self {
            RecordKind::Need => "needs",
            RecordKind::Resource => "resources",
            RecordKind::Report => "reports",
            RecordKind::Call => "calls",
            RecordKind::Offer => "offers",
            RecordKind::Intervention => "interventions",
            RecordKind::Delivery => "deliveries",
        }
    }
}
