use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::database::models::{Booking, WeeklyScheduleEntry};

/// Raised when a candidate interval's end is not strictly after its start,
/// before any slot computation happens. Every other outcome, including a
/// fully booked field, is an ordinary result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Booking interval end must be strictly after its start")]
pub struct InvalidIntervalError;

/// A half-open `[start, end)` time-of-day interval. Touching endpoints never
/// count as overlap, so back-to-back bookings don't conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        other.start < self.end && other.end > self.start
    }

    pub fn contains(&self, other: &TimeSlot) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

#[derive(Debug, Clone)]
pub struct AvailabilityRequest {
    pub field_id: i64,
    pub date: NaiveDate,
    pub desired_slot: Option<TimeSlot>,
    pub duration_minutes: Option<i64>,
    pub extra_hour_minutes: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResult {
    pub free_slots: Vec<TimeSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookable_slots: Option<Vec<TimeSlot>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_requested_slot_available: Option<bool>,
}

/// ISO weekday number for a date: 1 = Monday .. 7 = Sunday.
pub fn iso_weekday(date: NaiveDate) -> i64 {
    date.weekday().number_from_monday() as i64
}

/// Compute the free windows for a field on a date by subtracting occupying
/// bookings (pending or confirmed, same field and date) from the weekly
/// schedule windows matching the date's weekday.
///
/// No schedule entries for the weekday means the field is closed that day
/// and the result is empty. Output is ordered by start time ascending and
/// never contains zero-length slots.
pub fn resolve_free_slots(
    field_id: i64,
    date: NaiveDate,
    schedule_entries: &[WeeklyScheduleEntry],
    bookings: &[Booking],
) -> Vec<TimeSlot> {
    let day_of_week = iso_weekday(date);

    let mut windows: Vec<TimeSlot> = schedule_entries
        .iter()
        .filter(|entry| entry.field_id == field_id && entry.day_of_week == day_of_week)
        .map(|entry| TimeSlot::new(entry.start_time, entry.end_time))
        .collect();
    windows.sort_by_key(|window| window.start);

    let mut occupied: Vec<TimeSlot> = bookings
        .iter()
        .filter(|booking| {
            booking.field_id == field_id
                && booking.booking_date == date
                && booking.status.is_occupying()
        })
        .map(|booking| TimeSlot::new(booking.start_time, booking.end_time))
        .collect();
    occupied.sort_by_key(|slot| slot.start);

    let mut free_slots = Vec::new();
    for window in windows {
        // Schedule windows don't overlap each other, so each one can be
        // swept independently.
        let mut cursor = window.start;
        for busy in occupied.iter().filter(|busy| busy.overlaps(&window)) {
            if busy.start > cursor {
                free_slots.push(TimeSlot::new(cursor, busy.start));
            }
            if busy.end > cursor {
                cursor = busy.end;
            }
            if cursor >= window.end {
                break;
            }
        }
        if cursor < window.end {
            free_slots.push(TimeSlot::new(cursor, window.end));
        }
    }

    free_slots
}

/// A desired interval is bookable only when it fits entirely inside a single
/// free slot. Partial overlap with a free slot is a rejection.
pub fn is_slot_available(
    field_id: i64,
    date: NaiveDate,
    desired_start: NaiveTime,
    desired_end: NaiveTime,
    schedule_entries: &[WeeklyScheduleEntry],
    bookings: &[Booking],
) -> Result<bool, InvalidIntervalError> {
    if desired_end <= desired_start {
        return Err(InvalidIntervalError);
    }

    let desired = TimeSlot::new(desired_start, desired_end);
    let free_slots = resolve_free_slots(field_id, date, schedule_entries, bookings);

    Ok(free_slots.iter().any(|slot| slot.contains(&desired)))
}

pub fn resolve(
    request: &AvailabilityRequest,
    schedule_entries: &[WeeklyScheduleEntry],
    bookings: &[Booking],
) -> Result<AvailabilityResult, InvalidIntervalError> {
    if let Some(desired) = &request.desired_slot {
        if desired.end <= desired.start {
            return Err(InvalidIntervalError);
        }
    }
    if request.duration_minutes.is_some_and(|minutes| minutes <= 0)
        || request.extra_hour_minutes.is_some_and(|minutes| minutes < 0)
    {
        return Err(InvalidIntervalError);
    }

    let free_slots = resolve_free_slots(request.field_id, request.date, schedule_entries, bookings);

    let is_requested_slot_available = request
        .desired_slot
        .map(|desired| free_slots.iter().any(|slot| slot.contains(&desired)));

    let bookable_slots = request.duration_minutes.map(|duration| {
        enumerate_bookable_slots(
            &free_slots,
            duration,
            request.extra_hour_minutes.unwrap_or(0),
        )
    });

    Ok(AvailabilityResult {
        free_slots,
        bookable_slots,
        is_requested_slot_available,
    })
}

/// Chop each free window into candidate bookings of `duration + extra`
/// minutes, with consecutive candidates one duration apart.
fn enumerate_bookable_slots(
    free_slots: &[TimeSlot],
    duration_minutes: i64,
    extra_minutes: i64,
) -> Vec<TimeSlot> {
    let step = Duration::minutes(duration_minutes);
    let total = Duration::minutes(duration_minutes + extra_minutes);

    let mut candidates = Vec::new();
    for window in free_slots {
        let mut start = window.start;
        loop {
            let (end, end_wrap) = start.overflowing_add_signed(total);
            if end_wrap != 0 || end > window.end {
                break;
            }
            candidates.push(TimeSlot::new(start, end));

            let (next, next_wrap) = start.overflowing_add_signed(step);
            if next_wrap != 0 {
                break;
            }
            start = next;
        }
    }

    candidates
}
