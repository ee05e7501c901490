use crate::domain::{Appointment, AppointmentId, NewAppointment, VisitDate};
use crate::ports::appointment_store::{
    AppointmentStore as AppointmentStoreTrait, Result, StoreError,
};
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

/// Map a PostgreSQL row to an Appointment
fn map_row_to_appointment(row: &PgRow) -> Appointment {
    Appointment {
        id: AppointmentId::from_i64(row.get("id")),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        visit_date: VisitDate::from_naive_date(row.get("visit_date")),
        created_at: row.get("created_at"),
    }
}

/// Translate an insert failure, surfacing unique violations on visit_date as conflicts
fn map_insert_error(err: sqlx::Error, visit_date: VisitDate) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            StoreError::Conflict(visit_date)
        }
        other => StoreError::backend(other),
    }
}

/// PostgreSQL implementation of AppointmentStore
///
/// The `appointments.visit_date` column carries a UNIQUE constraint, which is
/// the actual guarantee that no two appointments share a date. Concurrent
/// inserts for the same date are serialised by the index; the loser receives
/// SQLSTATE 23505 and is reported as `StoreError::Conflict`.
pub struct AppointmentStore {
    pool: PgPool,
}

impl AppointmentStore {
    /// Create a new AppointmentStore with a PostgreSQL connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentStoreTrait for AppointmentStore {
    /// Check whether any appointment occupies the date
    async fn exists(&self, visit_date: VisitDate) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM appointments
                WHERE visit_date = $1
            )
            "#,
        )
        .bind(visit_date.value())
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        Ok(exists)
    }

    /// Insert a new appointment inside a transaction
    ///
    /// The id is assigned by the BIGSERIAL sequence and created_at defaults to now().
    async fn insert(&self, appointment: NewAppointment) -> Result<Appointment> {
        let visit_date = appointment.visit_date;

        let mut tx = self.pool.begin().await.map_err(StoreError::backend)?;

        let row = sqlx::query(
            r#"
            INSERT INTO appointments (
                first_name,
                last_name,
                visit_date
            )
            VALUES ($1, $2, $3)
            RETURNING id, first_name, last_name, visit_date, created_at
            "#,
        )
        .bind(&appointment.first_name)
        .bind(&appointment.last_name)
        .bind(visit_date.value())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_insert_error(e, visit_date))?;

        let created = map_row_to_appointment(&row);

        tx.commit()
            .await
            .map_err(|e| map_insert_error(e, visit_date))?;

        Ok(created)
    }
}
