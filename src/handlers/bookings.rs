use actix_web::{HttpResponse, Result, web};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::database::models::{BookingInput, BookingStatus};
use crate::database::repositories::{BookingRepository, FieldRepository, ScheduleRepository};
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::services::BookingService;
use crate::services::availability::{self, AvailabilityRequest, TimeSlot};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStatusRequest {
    pub status: BookingStatus,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingListQuery {
    pub field_id: Option<i64>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
    pub desired_start_time: Option<NaiveTime>,
    pub desired_end_time: Option<NaiveTime>,
    pub duration_minutes: Option<i64>,
    pub extra_hour_minutes: Option<i64>,
}

pub async fn create_booking(
    booking_service: web::Data<BookingService>,
    input: web::Json<BookingInput>,
) -> Result<HttpResponse> {
    if input.customer_name.trim().is_empty() {
        return Err(AppError::BadRequest("Customer name must not be empty".to_string()).into());
    }

    let booking = booking_service.create_booking(input.into_inner()).await?;

    Ok(ApiResponse::success(booking))
}

pub async fn get_booking(
    booking_repo: web::Data<BookingRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let booking_id = path.into_inner();

    let booking = booking_repo
        .get_booking_by_id(booking_id)
        .await
        .map_err(|e| {
            log::error!("Failed to get booking: {}", e);
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Booking not found: {}", booking_id)))?;

    Ok(ApiResponse::success(booking))
}

pub async fn get_bookings(
    booking_repo: web::Data<BookingRepository>,
    query: web::Query<BookingListQuery>,
) -> Result<HttpResponse> {
    let bookings = match (query.field_id, query.date) {
        (Some(field_id), Some(date)) => booking_repo
            .get_bookings_by_field_and_date(field_id, date)
            .await,
        (Some(field_id), None) => booking_repo.get_bookings_by_field(field_id).await,
        (None, None) => booking_repo.get_bookings().await,
        (None, Some(_)) => {
            return Err(
                AppError::BadRequest("Date filter requires a fieldId filter".to_string()).into(),
            );
        }
    }
    .map_err(|e| {
        log::error!("Failed to list bookings: {}", e);
        AppError::from(e)
    })?;

    Ok(ApiResponse::success(bookings))
}

pub async fn update_booking_status(
    booking_service: web::Data<BookingService>,
    path: web::Path<i64>,
    input: web::Json<BookingStatusRequest>,
) -> Result<HttpResponse> {
    let booking_id = path.into_inner();

    let booking = booking_service
        .transition_status(booking_id, input.into_inner().status)
        .await?;

    Ok(ApiResponse::success(booking))
}

pub async fn cancel_booking(
    booking_service: web::Data<BookingService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let booking_id = path.into_inner();

    let booking = booking_service
        .transition_status(booking_id, BookingStatus::Cancelled)
        .await?;

    Ok(ApiResponse::success(booking))
}

pub async fn get_field_availability(
    field_repo: web::Data<FieldRepository>,
    schedule_repo: web::Data<ScheduleRepository>,
    booking_repo: web::Data<BookingRepository>,
    path: web::Path<i64>,
    query: web::Query<AvailabilityQuery>,
) -> Result<HttpResponse> {
    let field_id = path.into_inner();
    let query = query.into_inner();

    field_repo
        .get_field_by_id(field_id)
        .await
        .map_err(|e| {
            log::error!("Failed to get field: {}", e);
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Field not found: {}", field_id)))?;

    let desired_slot = match (query.desired_start_time, query.desired_end_time) {
        (Some(start), Some(end)) => Some(TimeSlot::new(start, end)),
        (None, None) => None,
        _ => {
            return Err(AppError::BadRequest(
                "desiredStartTime and desiredEndTime must be supplied together".to_string(),
            )
            .into());
        }
    };

    let day_of_week = availability::iso_weekday(query.date);
    let schedule_entries = schedule_repo
        .get_entries_for_weekday(field_id, day_of_week)
        .await
        .map_err(|e| {
            log::error!("Failed to load schedule entries: {}", e);
            AppError::from(e)
        })?;
    let bookings = booking_repo
        .get_bookings_by_field_and_date(field_id, query.date)
        .await
        .map_err(|e| {
            log::error!("Failed to load bookings: {}", e);
            AppError::from(e)
        })?;

    let request = AvailabilityRequest {
        field_id,
        date: query.date,
        desired_slot,
        duration_minutes: query.duration_minutes,
        extra_hour_minutes: query.extra_hour_minutes,
    };
    let result =
        availability::resolve(&request, &schedule_entries, &bookings).map_err(AppError::from)?;

    Ok(ApiResponse::success(result))
}
