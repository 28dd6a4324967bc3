use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: i64,
    pub name: String,
    pub sport: Option<String>,
    pub address: Option<String>,
    pub hourly_rate: Option<f64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldInput {
    pub name: String,
    pub sport: Option<String>,
    pub address: Option<String>,
    pub hourly_rate: Option<f64>,
}
