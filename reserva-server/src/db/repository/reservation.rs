//! Reservation Repository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::Reservation;

/// Store contract consumed by the reservation service.
///
/// Any engine that satisfies these operations is interchangeable; the
/// service never sees SQL.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Whether a reservation occupies the exact date
    async fn exists_by_date(&self, date: NaiveDate) -> RepoResult<bool>;

    /// The reservation occupying the date, if any
    async fn find_by_date(&self, date: NaiveDate) -> RepoResult<Option<Reservation>>;

    /// All reservations whose holder name matches exactly (case-sensitive)
    async fn find_by_holder_name(&self, name: &str) -> RepoResult<Vec<Reservation>>;

    /// Every reservation, in id order
    async fn find_all(&self) -> RepoResult<Vec<Reservation>>;

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Reservation>>;

    /// Insert when `id` is `None`, otherwise replace the whole row.
    /// Returns the persisted record with its id populated.
    async fn save(&self, reservation: Reservation) -> RepoResult<Reservation>;

    /// Physical removal
    async fn delete(&self, reservation: &Reservation) -> RepoResult<()>;
}

/// SQLite-backed reservation store
#[derive(Clone)]
pub struct SqliteReservationRepository {
    pool: SqlitePool,
}

impl SqliteReservationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for SqliteReservationRepository {
    async fn exists_by_date(&self, date: NaiveDate) -> RepoResult<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM reservation WHERE date = ?",
        )
        .bind(date)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    async fn find_by_date(&self, date: NaiveDate) -> RepoResult<Option<Reservation>> {
        let reservation = sqlx::query_as::<_, Reservation>(
            "SELECT id, table_number, holder_name, is_active, date, party_size, services \
             FROM reservation WHERE date = ?",
        )
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;
        Ok(reservation)
    }

    async fn find_by_holder_name(&self, name: &str) -> RepoResult<Vec<Reservation>> {
        // BINARY collation: exact, case-sensitive match
        let reservations = sqlx::query_as::<_, Reservation>(
            "SELECT id, table_number, holder_name, is_active, date, party_size, services \
             FROM reservation WHERE holder_name = ? ORDER BY id",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;
        Ok(reservations)
    }

    async fn find_all(&self) -> RepoResult<Vec<Reservation>> {
        let reservations = sqlx::query_as::<_, Reservation>(
            "SELECT id, table_number, holder_name, is_active, date, party_size, services \
             FROM reservation ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(reservations)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Reservation>> {
        let reservation = sqlx::query_as::<_, Reservation>(
            "SELECT id, table_number, holder_name, is_active, date, party_size, services \
             FROM reservation WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(reservation)
    }

    async fn save(&self, reservation: Reservation) -> RepoResult<Reservation> {
        let id = match reservation.id {
            None => {
                sqlx::query_scalar::<_, i64>(
                    "INSERT INTO reservation \
                     (table_number, holder_name, is_active, date, party_size, services) \
                     VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
                )
                .bind(reservation.table_number)
                .bind(&reservation.holder_name)
                .bind(reservation.is_active)
                .bind(reservation.date)
                .bind(reservation.party_size)
                .bind(&reservation.services)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                let rows = sqlx::query(
                    "UPDATE reservation SET table_number = ?, holder_name = ?, \
                     is_active = ?, date = ?, party_size = ?, services = ? WHERE id = ?",
                )
                .bind(reservation.table_number)
                .bind(&reservation.holder_name)
                .bind(reservation.is_active)
                .bind(reservation.date)
                .bind(reservation.party_size)
                .bind(&reservation.services)
                .bind(id)
                .execute(&self.pool)
                .await?;
                if rows.rows_affected() == 0 {
                    return Err(RepoError::NotFound(format!("Reservation {id} not found")));
                }
                id
            }
        };

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::Database("Failed to persist reservation".into()))
    }

    async fn delete(&self, reservation: &Reservation) -> RepoResult<()> {
        let Some(id) = reservation.id else {
            return Err(RepoError::Validation(
                "Cannot delete a reservation that was never saved".into(),
            ));
        };
        sqlx::query("DELETE FROM reservation WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
