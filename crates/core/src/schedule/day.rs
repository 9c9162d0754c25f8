//! Day name normalization.
//!
//! Schedule records arrive with day names in whatever form the person who
//! entered them used: `"Mon"`, `"MIÉRCOLES"`, `"miercoles"`, `"Saturday"`.
//! The grid needs one key per column, so every known spelling maps to a
//! [`CanonicalDay`]. Unknown spellings are kept verbatim in
//! [`DayMatch::Unmatched`] so callers can decide whether to warn.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The six teaching days, labelled in Spanish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CanonicalDay {
    Lunes,
    Martes,
    #[serde(rename = "Miércoles")]
    Miercoles,
    Jueves,
    Viernes,
    #[serde(rename = "Sábado")]
    Sabado,
}

impl CanonicalDay {
    /// Column order of the weekly grid.
    pub const ALL: [CanonicalDay; 6] = [
        CanonicalDay::Lunes,
        CanonicalDay::Martes,
        CanonicalDay::Miercoles,
        CanonicalDay::Jueves,
        CanonicalDay::Viernes,
        CanonicalDay::Sabado,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            CanonicalDay::Lunes => "Lunes",
            CanonicalDay::Martes => "Martes",
            CanonicalDay::Miercoles => "Miércoles",
            CanonicalDay::Jueves => "Jueves",
            CanonicalDay::Viernes => "Viernes",
            CanonicalDay::Sabado => "Sábado",
        }
    }

    /// Zero-based column index.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CanonicalDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of normalizing a raw day string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DayMatch {
    Canonical(CanonicalDay),
    /// Holds the input exactly as received.
    Unmatched(String),
}

impl DayMatch {
    pub fn canonical(&self) -> Option<CanonicalDay> {
        match self {
            DayMatch::Canonical(day) => Some(*day),
            DayMatch::Unmatched(_) => None,
        }
    }

    /// Canonical label, or the untouched input when nothing matched.
    pub fn label(&self) -> &str {
        match self {
            DayMatch::Canonical(day) => day.label(),
            DayMatch::Unmatched(raw) => raw,
        }
    }
}

// Checked as substrings, in this order.
const ENGLISH_FRAGMENTS: [(&str, CanonicalDay); 6] = [
    ("mon", CanonicalDay::Lunes),
    ("tue", CanonicalDay::Martes),
    ("wed", CanonicalDay::Miercoles),
    ("thu", CanonicalDay::Jueves),
    ("fri", CanonicalDay::Viernes),
    ("sat", CanonicalDay::Sabado),
];

const SPANISH_PARTIALS: [(&str, CanonicalDay); 1] = [("miér", CanonicalDay::Miercoles)];

// Checked as whole words.
const SPANISH_NAMES: [(&str, CanonicalDay); 8] = [
    ("lunes", CanonicalDay::Lunes),
    ("martes", CanonicalDay::Martes),
    ("miercoles", CanonicalDay::Miercoles),
    ("miércoles", CanonicalDay::Miercoles),
    ("jueves", CanonicalDay::Jueves),
    ("viernes", CanonicalDay::Viernes),
    ("sabado", CanonicalDay::Sabado),
    ("sábado", CanonicalDay::Sabado),
];

/// Map a raw day string onto a canonical day.
///
/// The input is trimmed and lower-cased, then tried against English
/// three-letter fragments, the accented `miér` fragment and finally the
/// full Spanish names. Never fails.
pub fn normalize_day(raw: &str) -> DayMatch {
    let needle = raw.trim().to_lowercase();

    let found = ENGLISH_FRAGMENTS
        .iter()
        .chain(SPANISH_PARTIALS.iter())
        .find(|(fragment, _)| needle.contains(fragment))
        .or_else(|| SPANISH_NAMES.iter().find(|(name, _)| needle == *name))
        .map(|(_, day)| *day);

    match found {
        Some(day) => DayMatch::Canonical(day),
        None => DayMatch::Unmatched(raw.to_string()),
    }
}

/// Same as [`normalize_day`] but flattened to a display label.
pub fn normalize_day_label(raw: &str) -> String {
    normalize_day(raw).label().to_string()
}
