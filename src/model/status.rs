// src/model/status.rs
//
// Workflow states of each record kind. `value()` is the stable identifier
// (filter option values, CSV store), `label()` is for display.

use crate::table::Tone;

/// Common surface of the status enums (dashboard counters, filters).
pub trait Status: Copy + Eq + 'static {
    fn variants() -> &'static [Self];
    fn value(self) -> &'static str;
    fn label(self) -> &'static str;
    fn tone(self) -> Tone;
}

macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => ($value:literal, $label:literal, $tone:ident) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            pub fn value(self) -> &'static str {
                match self { $( $name::$variant => $value ),+ }
            }

            pub fn label(self) -> &'static str {
                match self { $( $name::$variant => $label ),+ }
            }

            pub fn tone(self) -> Tone {
                match self { $( $name::$variant => Tone::$tone ),+ }
            }

            pub fn parse(s: &str) -> Option<Self> {
                match s { $( $value => Some($name::$variant), )+ _ => None }
            }
        }

        impl Status for $name {
            fn variants() -> &'static [Self] { $name::ALL }
            fn value(self) -> &'static str { $name::value(self) }
            fn label(self) -> &'static str { $name::label(self) }
            fn tone(self) -> Tone { $name::tone(self) }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

status_enum! {
    NeedStatus {
        Pending => ("pending", "Pending", Warning),
        Validated => ("validated", "Validated", Success),
        Rejected => ("rejected", "Rejected", Danger),
    }
}

status_enum! {
    ResourceStatus {
        Available => ("available", "Available", Success),
        Assigned => ("assigned", "Assigned", Info),
        UnderMaintenance => ("maintenance", "Under maintenance", Warning),
        Retired => ("retired", "Retired", Neutral),
    }
}

status_enum! {
    ReportStatus {
        Open => ("open", "Open", Danger),
        InProgress => ("in_progress", "In progress", Warning),
        Resolved => ("resolved", "Resolved", Success),
    }
}

status_enum! {
    /// How often a reported failure occurs.
    Frequency {
        Rare => ("rare", "Rare", Neutral),
        Frequent => ("frequent", "Frequent", Warning),
        Permanent => ("permanent", "Permanent", Danger),
    }
}

status_enum! {
    CallStatus {
        Draft => ("draft", "Draft", Neutral),
        Open => ("open", "Open", Info),
        Closed => ("closed", "Closed", Neutral),
    }
}

status_enum! {
    OfferStatus {
        Submitted => ("submitted", "Submitted", Info),
        Accepted => ("accepted", "Accepted", Success),
        Rejected => ("rejected", "Rejected", Danger),
    }
}

status_enum! {
    InterventionStatus {
        Scheduled => ("scheduled", "Scheduled", Info),
        Done => ("done", "Done", Success),
        Cancelled => ("cancelled", "Cancelled", Neutral),
    }
}

status_enum! {
    DeliveryStatus {
        Expected => ("expected", "Expected", Warning),
        Received => ("received", "Received", Success),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_parse_back() {
        for &st in ReportStatus::ALL {
            assert_eq!(ReportStatus::parse(st.value()), Some(st));
        }
        assert_eq!(NeedStatus::parse("bogus"), None);
    }
}
