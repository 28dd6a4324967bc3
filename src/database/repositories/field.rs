use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::models::{Field, FieldInput};

#[derive(Clone)]
pub struct FieldRepository {
    pool: SqlitePool,
}

impl FieldRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_field(&self, input: FieldInput) -> Result<Field> {
        let now = Utc::now().naive_utc();
        let field = sqlx::query_as::<_, Field>(
            r#"
            INSERT INTO fields (name, sport, address, hourly_rate, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, name, sport, address, hourly_rate, created_at, updated_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.sport)
        .bind(&input.address)
        .bind(input.hourly_rate)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(field)
    }

    pub async fn get_field_by_id(&self, id: i64) -> Result<Option<Field>> {
        let field = sqlx::query_as::<_, Field>(
            "SELECT id, name, sport, address, hourly_rate, created_at, updated_at FROM fields WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(field)
    }

    pub async fn get_fields(&self) -> Result<Vec<Field>> {
        let fields = sqlx::query_as::<_, Field>(
            "SELECT id, name, sport, address, hourly_rate, created_at, updated_at FROM fields ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(fields)
    }

    pub async fn update_field(&self, id: i64, input: FieldInput) -> Result<Option<Field>> {
        let now = Utc::now().naive_utc();
        let field = sqlx::query_as::<_, Field>(
            r#"
            UPDATE fields SET name = ?, sport = ?, address = ?, hourly_rate = ?, updated_at = ?
            WHERE id = ?
            RETURNING id, name, sport, address, hourly_rate, created_at, updated_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.sport)
        .bind(&input.address)
        .bind(input.hourly_rate)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(field)
    }

    pub async fn delete_field(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM fields WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
