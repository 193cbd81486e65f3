//! Closed-set selector values: specialty, contact status and priority.
//!
//! Each enum maps one-to-one onto the option names of a Notion select
//! property. Tool input is parsed strictly with [`Choice::parse`]; values
//! read back from Notion are parsed leniently with [`Choice::parse_lenient`]
//! so legacy rows holding free-text options still load.

use super::errors::ValidationError;
use std::fmt;
use std::str::FromStr;

/// A closed enumeration of display strings.
pub trait Choice: Sized + Copy + 'static {
    /// Tool parameter name used in validation messages.
    const FIELD: &'static str;

    /// Every member, in display order.
    const ALL: &'static [Self];

    /// The exact display string stored in Notion.
    fn as_str(self) -> &'static str;

    /// All valid display strings.
    fn valid_values() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.as_str()).collect()
    }

    /// Exact match against the display strings, `None` when unknown.
    fn parse_lenient(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == raw)
    }

    /// Exact match, rejecting unknown values with the full option list.
    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::parse_lenient(raw).ok_or_else(|| ValidationError::InvalidChoice {
            field: Self::FIELD,
            value: raw.to_string(),
            valid: Self::valid_values(),
        })
    }

    /// Parse an optional tool argument. Empty strings count as not supplied.
    fn parse_optional(raw: Option<&str>) -> Result<Option<Self>, ValidationError> {
        match raw {
            Some(value) if !value.is_empty() => Self::parse(value).map(Some),
            _ => Ok(None),
        }
    }
}

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => $display:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl Choice for $name {
            const FIELD: &'static str = $field;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $display,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as Choice>::parse(s)
            }
        }
    };
}

choice_enum! {
    /// Primary field a speaker works in.
    FieldSpecialty, "field_specialty" {
        DrugDiscoveryAi => "Drug Discovery & AI",
        ClinicalMedicalAi => "Clinical/Medical AI",
        GenomicsBiotech => "Genomics & Biotech",
        HealthcareAiMl => "Healthcare AI/ML",
        RegulatoryScience => "Regulatory Science",
        RealWorldData => "Real World Data/Evidence",
        Bioinformatics => "Bioinformatics",
        MedicalImaging => "Medical Imaging AI",
        NlpHealthcare => "NLP in Healthcare",
        Other => "Other",
    }
}

choice_enum! {
    /// Where outreach to a speaker currently stands.
    ContactStatus, "contact_status" {
        NotContacted => "Not Contacted",
        Contacted => "Contacted",
        InDiscussion => "In Discussion",
        Confirmed => "Confirmed",
        Declined => "Declined",
        MaybeLater => "Maybe Later",
        NoResponse => "No Response",
    }
}

choice_enum! {
    /// Outreach priority. Ordering follows urgency, `High` first.
    #[derive(PartialOrd, Ord)]
    Priority, "priority" {
        High => "High",
        Medium => "Medium",
        Low => "Low",
    }
}

impl Default for ContactStatus {
    fn default() -> Self {
        Self::NotContacted
    }
}

impl ContactStatus {
    /// Total parse for values read from Notion; unknown values become `NotContacted`.
    pub fn parse_or_default(raw: &str) -> Self {
        Self::parse_lenient(raw).unwrap_or_default()
    }
}
