//! Hindu calendar records.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Waxing (Shukla) or waning (Krishna) half of the lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paksha {
    Shukla,
    Krishna,
}

impl fmt::Display for Paksha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paksha::Shukla => f.write_str("Shukla"),
            Paksha::Krishna => f.write_str("Krishna"),
        }
    }
}

/// A dated occurrence (an ekadashi or a festival).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    #[serde(rename = "date")]
    pub occurrence_date: NaiveDateTime,
    pub name: String,
    /// Whole days from the search anchor
    #[serde(rename = "daysUntil")]
    pub days_until: i64,
}

/// Lunar day at a given moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TithiInfo {
    #[serde(rename = "tithi")]
    pub tithi_name: String,
    /// 1..=30
    #[serde(rename = "tithiNumber")]
    pub tithi_number: u8,
    pub paksha: Paksha,
    #[serde(rename = "isEkadashi")]
    pub is_ekadashi: bool,
    #[serde(rename = "ekadashiName", skip_serializing_if = "Option::is_none", default)]
    pub ekadashi_name: Option<String>,
    #[serde(rename = "nextEkadashi")]
    pub next_ekadashi: CalendarEvent,
}
