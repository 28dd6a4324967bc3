use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// One recurring weekly operating window for a field.
///
/// `day_of_week` follows ISO numbering (1 = Monday .. 7 = Sunday). A field
/// may carry several entries for the same weekday (split shifts), but entries
/// for one field and weekday never overlap each other.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyScheduleEntry {
    pub id: i64,
    pub field_id: i64,
    pub day_of_week: i64,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyScheduleEntryInput {
    pub day_of_week: i64,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}
