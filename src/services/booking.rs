use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::models::{Booking, BookingInput, BookingStatus, WeeklyScheduleEntry};
use crate::database::types::BookingRow;
use crate::error::AppError;
use crate::services::availability::{self, InvalidIntervalError};

/// Booking-creation workflow. The availability check and the insert run on
/// the same transaction, so another writer cannot slip a conflicting booking
/// in between them.
#[derive(Clone)]
pub struct BookingService {
    pool: SqlitePool,
}

impl BookingService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_booking(&self, input: BookingInput) -> Result<Booking, AppError> {
        if input.end_time <= input.start_time {
            return Err(InvalidIntervalError.into());
        }

        let mut tx = self.pool.begin().await?;

        let field_id = sqlx::query_scalar::<_, i64>("SELECT id FROM fields WHERE id = ?")
            .bind(input.field_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Field not found: {}", input.field_id)))?;

        let day_of_week = availability::iso_weekday(input.booking_date);
        let schedule_entries = sqlx::query_as::<_, WeeklyScheduleEntry>(
            r#"
            SELECT id, field_id, day_of_week, start_time, end_time, created_at, updated_at
            FROM field_schedule_entries WHERE field_id = ? AND day_of_week = ?
            ORDER BY start_time
            "#,
        )
        .bind(field_id)
        .bind(day_of_week)
        .fetch_all(&mut *tx)
        .await?;

        let rows = sqlx::query_as::<_, BookingRow>(
            "SELECT id, field_id, customer_name, notes, booking_date, start_time, end_time, status, created_at, updated_at FROM bookings WHERE field_id = ? AND booking_date = ? ORDER BY start_time"
        )
        .bind(field_id)
        .bind(input.booking_date)
        .fetch_all(&mut *tx)
        .await?;
        let existing_bookings: Vec<Booking> = rows.into_iter().map(|row| row.into()).collect();

        let available = availability::is_slot_available(
            field_id,
            input.booking_date,
            input.start_time,
            input.end_time,
            &schedule_entries,
            &existing_bookings,
        )?;
        if !available {
            return Err(AppError::Conflict(format!(
                "Field {} is not available on {} from {} to {}",
                field_id, input.booking_date, input.start_time, input.end_time
            )));
        }

        let now = Utc::now().naive_utc();
        let row = sqlx::query_as::<_, BookingRow>(
            r#"
            INSERT INTO bookings (field_id, customer_name, notes, booking_date, start_time, end_time, status, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, field_id, customer_name, notes, booking_date, start_time, end_time, status, created_at, updated_at
            "#,
        )
        .bind(field_id)
        .bind(&input.customer_name)
        .bind(&input.notes)
        .bind(input.booking_date)
        .bind(input.start_time)
        .bind(input.end_time)
        .bind(BookingStatus::Pending.to_string())
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.into())
    }

    pub async fn transition_status(
        &self,
        booking_id: i64,
        next: BookingStatus,
    ) -> Result<Booking, AppError> {
        let current: Booking = sqlx::query_as::<_, BookingRow>(
            "SELECT id, field_id, customer_name, notes, booking_date, start_time, end_time, status, created_at, updated_at FROM bookings WHERE id = ?"
        )
        .bind(booking_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking not found: {}", booking_id)))?
        .into();

        if !current.status.can_transition_to(&next) {
            return Err(AppError::Conflict(format!(
                "Booking {} cannot go from {} to {}",
                booking_id, current.status, next
            )));
        }

        // Guard on the status we read, in case another request transitioned
        // the booking in the meantime
        let now = Utc::now().naive_utc();
        let row = sqlx::query_as::<_, BookingRow>(
            r#"
            UPDATE bookings SET status = ?, updated_at = ?
            WHERE id = ? AND status = ?
            RETURNING id, field_id, customer_name, notes, booking_date, start_time, end_time, status, created_at, updated_at
            "#,
        )
        .bind(next.to_string())
        .bind(now)
        .bind(booking_id)
        .bind(current.status.to_string())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::Conflict(format!("Booking {} was updated concurrently", booking_id))
        })?;

        Ok(row.into())
    }
}
