//! Reservation Service
//!
//! 预订领域规则：每个日期最多一条预订 (create/update 都要检查)，
//! update/delete 的目标不存在时报领域错误。

use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;

use crate::db::models::{Reservation, ReservationUpdate};
use crate::db::repository::{RepoError, ReservationRepository};

/// Domain failures surfaced to the HTTP layer
#[derive(Debug, Error)]
pub enum ReservationError {
    /// The target date is already occupied by a reservation
    #[error("{0}")]
    DateAlreadyReserved(String),

    /// No reservation matches the given id or date
    #[error("{0}")]
    NotFound(String),

    /// Store failure, passed through unclassified
    #[error(transparent)]
    Store(#[from] RepoError),
}

/// Reservation domain service
///
/// Holds the store behind [`ReservationRepository`]. The date-uniqueness
/// rule is checked here on every create and update.
pub struct ReservationService {
    repository: Arc<dyn ReservationRepository>,
}

impl ReservationService {
    pub fn new(repository: Arc<dyn ReservationRepository>) -> Self {
        Self { repository }
    }

    /// All reservations, in store order
    pub async fn list(&self) -> Result<Vec<Reservation>, ReservationError> {
        Ok(self.repository.find_all().await?)
    }

    /// Reservations whose holder name matches exactly
    ///
    /// No match is an empty list, not a failure.
    pub async fn list_by_holder_name(
        &self,
        name: &str,
    ) -> Result<Vec<Reservation>, ReservationError> {
        Ok(self.repository.find_by_holder_name(name).await?)
    }

    /// Register a new reservation
    ///
    /// The candidate carries no id; the store assigns one. Fields other
    /// than `date` are not validated.
    pub async fn create(&self, candidate: Reservation) -> Result<Reservation, ReservationError> {
        if self.repository.exists_by_date(candidate.date).await? {
            return Err(ReservationError::DateAlreadyReserved(
                "Ya existe una reservación para esa fecha.".into(),
            ));
        }
        Ok(self.repository.save(candidate).await?)
    }

    /// Replace the mutable fields of the reservation with the given id
    ///
    /// `services` keeps its stored value. The date-conflict check runs
    /// against the new date without excluding the record itself, so an
    /// update that keeps the date unchanged is rejected too. The store is
    /// only written after the check passes; `existing` is a detached copy.
    pub async fn update(
        &self,
        id: i64,
        replacement: ReservationUpdate,
    ) -> Result<Reservation, ReservationError> {
        let mut existing = self.repository.find_by_id(id).await?.ok_or_else(|| {
            ReservationError::NotFound(format!("Reservación con ID {id} no encontrada."))
        })?;

        existing.table_number = replacement.table_number;
        existing.holder_name = replacement.holder_name;
        existing.is_active = replacement.is_active;
        existing.date = replacement.date;
        existing.party_size = replacement.party_size;

        if self.repository.exists_by_date(replacement.date).await? {
            return Err(ReservationError::DateAlreadyReserved(
                "Ya existe una reservación para la nueva fecha.".into(),
            ));
        }

        Ok(self.repository.save(existing).await?)
    }

    /// Remove the reservation occupying the given date
    pub async fn delete_by_date(&self, date: NaiveDate) -> Result<(), ReservationError> {
        let found = self.repository.find_by_date(date).await?.ok_or_else(|| {
            ReservationError::NotFound(
                "No se encontró ninguna reservación para la fecha especificada.".into(),
            )
        })?;
        self.repository.delete(&found).await?;
        Ok(())
    }

    /// Whether a reservation occupies the given date
    pub async fn exists_by_date(&self, date: NaiveDate) -> Result<bool, ReservationError> {
        Ok(self.repository.exists_by_date(date).await?)
    }
}
