use actix_web::{HttpResponse, Result, web};

use crate::database::models::FieldInput;
use crate::database::repositories::FieldRepository;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;

pub async fn create_field(
    field_repo: web::Data<FieldRepository>,
    input: web::Json<FieldInput>,
) -> Result<HttpResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("Field name must not be empty".to_string()).into());
    }

    let field = field_repo
        .create_field(input.into_inner())
        .await
        .map_err(|e| {
            log::error!("Failed to create field: {}", e);
            AppError::from(e)
        })?;

    Ok(ApiResponse::success(field))
}

pub async fn get_fields(field_repo: web::Data<FieldRepository>) -> Result<HttpResponse> {
    let fields = field_repo.get_fields().await.map_err(|e| {
        log::error!("Failed to list fields: {}", e);
        AppError::from(e)
    })?;

    Ok(ApiResponse::success(fields))
}

pub async fn get_field(
    field_repo: web::Data<FieldRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let field_id = path.into_inner();

    let field = field_repo
        .get_field_by_id(field_id)
        .await
        .map_err(|e| {
            log::error!("Failed to get field: {}", e);
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Field not found: {}", field_id)))?;

    Ok(ApiResponse::success(field))
}

pub async fn update_field(
    field_repo: web::Data<FieldRepository>,
    path: web::Path<i64>,
    input: web::Json<FieldInput>,
) -> Result<HttpResponse> {
    let field_id = path.into_inner();

    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("Field name must not be empty".to_string()).into());
    }

    let field = field_repo
        .update_field(field_id, input.into_inner())
        .await
        .map_err(|e| {
            log::error!("Failed to update field: {}", e);
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Field not found: {}", field_id)))?;

    Ok(ApiResponse::success(field))
}

pub async fn delete_field(
    field_repo: web::Data<FieldRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let field_id = path.into_inner();

    let deleted = field_repo.delete_field(field_id).await.map_err(|e| {
        log::error!("Failed to delete field: {}", e);
        AppError::from(e)
    })?;

    if !deleted {
        return Err(AppError::NotFound(format!("Field not found: {}", field_id)).into());
    }

    Ok(ApiResponse::success_message("Field deleted successfully"))
}
