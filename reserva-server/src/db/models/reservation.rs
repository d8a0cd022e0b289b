//! Reservation Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reservation entity (某个日期的桌台预订)
///
/// `id` is assigned by the store on insert. `date` serializes as an
/// ISO-8601 calendar date (`YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: Option<i64>,
    pub table_number: i64,
    pub holder_name: String,
    pub is_active: bool,
    pub date: NaiveDate,
    pub party_size: i64,
    pub services: Option<String>,
}

/// Create reservation payload (no id; the store assigns one)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCreate {
    pub table_number: i64,
    pub holder_name: String,
    #[serde(default)]
    pub is_active: bool,
    pub date: NaiveDate,
    pub party_size: i64,
    #[serde(default)]
    pub services: Option<String>,
}

/// Update reservation payload
///
/// Full replacement of the mutable fields. `services` is accepted on the
/// wire but the stored value is kept as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationUpdate {
    pub table_number: i64,
    pub holder_name: String,
    pub is_active: bool,
    pub date: NaiveDate,
    pub party_size: i64,
    #[serde(default)]
    pub services: Option<String>,
}

impl From<ReservationCreate> for Reservation {
    fn from(data: ReservationCreate) -> Self {
        Self {
            id: None,
            table_number: data.table_number,
            holder_name: data.holder_name,
            is_active: data.is_active,
            date: data.date,
            party_size: data.party_size,
            services: data.services,
        }
    }
}
