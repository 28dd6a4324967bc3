use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

// Database row types that match the exact SQLite schema; the status column
// is stored as TEXT and parsed on the way out.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BookingRow {
    pub id: i64,
    pub field_id: i64,
    pub customer_name: String,
    pub notes: Option<String>,
    pub booking_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<BookingRow> for super::models::Booking {
    fn from(row: BookingRow) -> Self {
        Self {
            id: row.id,
            field_id: row.field_id,
            customer_name: row.customer_name,
            notes: row.notes,
            booking_date: row.booking_date,
            start_time: row.start_time,
            end_time: row.end_time,
            status: row
                .status
                .parse()
                .unwrap_or(super::models::BookingStatus::Pending),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
