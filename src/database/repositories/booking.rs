use anyhow::Result;
use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::database::models::Booking;
use crate::database::types::BookingRow;

#[derive(Clone)]
pub struct BookingRepository {
    pool: SqlitePool,
}

impl BookingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_booking_by_id(&self, id: i64) -> Result<Option<Booking>> {
        let row = sqlx::query_as::<_, BookingRow>(
            "SELECT id, field_id, customer_name, notes, booking_date, start_time, end_time, status, created_at, updated_at FROM bookings WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into()))
    }

    pub async fn get_bookings(&self) -> Result<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRow>(
            "SELECT id, field_id, customer_name, notes, booking_date, start_time, end_time, status, created_at, updated_at FROM bookings ORDER BY booking_date, start_time"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|row| row.into()).collect())
    }

    pub async fn get_bookings_by_field(&self, field_id: i64) -> Result<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRow>(
            "SELECT id, field_id, customer_name, notes, booking_date, start_time, end_time, status, created_at, updated_at FROM bookings WHERE field_id = ? ORDER BY booking_date, start_time"
        )
        .bind(field_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|row| row.into()).collect())
    }

    pub async fn get_bookings_by_field_and_date(
        &self,
        field_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRow>(
            "SELECT id, field_id, customer_name, notes, booking_date, start_time, end_time, status, created_at, updated_at FROM bookings WHERE field_id = ? AND booking_date = ? ORDER BY start_time"
        )
        .bind(field_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|row| row.into()).collect())
    }
}
