use actix_web::{HttpResponse, Result, web};

use crate::database::models::WeeklyScheduleEntryInput;
use crate::database::repositories::{FieldRepository, ScheduleRepository};
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::services::availability::InvalidIntervalError;

pub async fn create_schedule_entry(
    field_repo: web::Data<FieldRepository>,
    schedule_repo: web::Data<ScheduleRepository>,
    path: web::Path<i64>,
    input: web::Json<WeeklyScheduleEntryInput>,
) -> Result<HttpResponse> {
    let field_id = path.into_inner();

    field_repo
        .get_field_by_id(field_id)
        .await
        .map_err(|e| {
            log::error!("Failed to get field: {}", e);
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Field not found: {}", field_id)))?;

    if !(1..=7).contains(&input.day_of_week) {
        return Err(AppError::BadRequest(
            "Day of week must be 1 (Monday) through 7 (Sunday)".to_string(),
        )
        .into());
    }
    if input.end_time <= input.start_time {
        return Err(AppError::from(InvalidIntervalError).into());
    }

    if let Some(existing) = schedule_repo
        .find_overlapping(field_id, input.day_of_week, input.start_time, input.end_time)
        .await
        .map_err(|e| {
            log::error!("Failed to check schedule overlap: {}", e);
            AppError::from(e)
        })?
    {
        return Err(AppError::Conflict(format!(
            "Schedule entry overlaps an existing window ({} to {})",
            existing.start_time, existing.end_time
        ))
        .into());
    }

    let entry = schedule_repo
        .create_entry(field_id, input.into_inner())
        .await
        .map_err(|e| {
            log::error!("Failed to create schedule entry: {}", e);
            AppError::from(e)
        })?;

    Ok(ApiResponse::success(entry))
}

pub async fn get_field_schedule(
    field_repo: web::Data<FieldRepository>,
    schedule_repo: web::Data<ScheduleRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let field_id = path.into_inner();

    field_repo
        .get_field_by_id(field_id)
        .await
        .map_err(|e| {
            log::error!("Failed to get field: {}", e);
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Field not found: {}", field_id)))?;

    let entries = schedule_repo
        .get_entries_for_field(field_id)
        .await
        .map_err(|e| {
            log::error!("Failed to list schedule entries: {}", e);
            AppError::from(e)
        })?;

    Ok(ApiResponse::success(entries))
}

pub async fn delete_schedule_entry(
    schedule_repo: web::Data<ScheduleRepository>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse> {
    let (field_id, entry_id) = path.into_inner();

    let deleted = schedule_repo
        .delete_entry(field_id, entry_id)
        .await
        .map_err(|e| {
            log::error!("Failed to delete schedule entry: {}", e);
            AppError::from(e)
        })?;

    if !deleted {
        return Err(
            AppError::NotFound(format!("Schedule entry not found: {}", entry_id)).into(),
        );
    }

    Ok(ApiResponse::success_message(
        "Schedule entry deleted successfully",
    ))
}
