use anyhow::Result;
use chrono::{NaiveTime, Utc};
use sqlx::SqlitePool;

use crate::database::models::{WeeklyScheduleEntry, WeeklyScheduleEntryInput};

#[derive(Clone)]
pub struct ScheduleRepository {
    pool: SqlitePool,
}

impl ScheduleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_entry(
        &self,
        field_id: i64,
        input: WeeklyScheduleEntryInput,
    ) -> Result<WeeklyScheduleEntry> {
        let now = Utc::now().naive_utc();
        let entry = sqlx::query_as::<_, WeeklyScheduleEntry>(
            r#"
            INSERT INTO field_schedule_entries (field_id, day_of_week, start_time, end_time, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, field_id, day_of_week, start_time, end_time, created_at, updated_at
            "#,
        )
        .bind(field_id)
        .bind(input.day_of_week)
        .bind(input.start_time)
        .bind(input.end_time)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(entry)
    }

    pub async fn get_entries_for_field(&self, field_id: i64) -> Result<Vec<WeeklyScheduleEntry>> {
        let entries = sqlx::query_as::<_, WeeklyScheduleEntry>(
            r#"
            SELECT id, field_id, day_of_week, start_time, end_time, created_at, updated_at
            FROM field_schedule_entries WHERE field_id = ?
            ORDER BY day_of_week, start_time
            "#,
        )
        .bind(field_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    pub async fn get_entries_for_weekday(
        &self,
        field_id: i64,
        day_of_week: i64,
    ) -> Result<Vec<WeeklyScheduleEntry>> {
        let entries = sqlx::query_as::<_, WeeklyScheduleEntry>(
            r#"
            SELECT id, field_id, day_of_week, start_time, end_time, created_at, updated_at
            FROM field_schedule_entries WHERE field_id = ? AND day_of_week = ?
            ORDER BY start_time
            "#,
        )
        .bind(field_id)
        .bind(day_of_week)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// Entries for one field and weekday must not overlap each other. Times
    /// are stored as HH:MM:SS text, so the half-open overlap test works as a
    /// plain string comparison.
    pub async fn find_overlapping(
        &self,
        field_id: i64,
        day_of_week: i64,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Option<WeeklyScheduleEntry>> {
        let entry = sqlx::query_as::<_, WeeklyScheduleEntry>(
            r#"
            SELECT id, field_id, day_of_week, start_time, end_time, created_at, updated_at
            FROM field_schedule_entries
            WHERE field_id = ? AND day_of_week = ? AND start_time < ? AND end_time > ?
            ORDER BY start_time LIMIT 1
            "#,
        )
        .bind(field_id)
        .bind(day_of_week)
        .bind(end_time)
        .bind(start_time)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entry)
    }

    pub async fn delete_entry(&self, field_id: i64, entry_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM field_schedule_entries WHERE id = ? AND field_id = ?")
            .bind(entry_id)
            .bind(field_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
