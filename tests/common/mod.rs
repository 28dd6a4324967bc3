#![allow(dead_code)]

use actix_web::{App, web};
use anyhow::Result;
use chrono::{NaiveDate, NaiveTime, Utc};
use fake::Fake;
use fake::faker::address::en::StreetName;
use fake::faker::company::en::CompanyName;
use fake::faker::name::en::Name;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tempfile::NamedTempFile;

use fieldbook::Config;
use fieldbook::database::models::{
    BookingInput, BookingStatus, Field, FieldInput, WeeklyScheduleEntry, WeeklyScheduleEntryInput,
};
use fieldbook::database::repositories::{BookingRepository, FieldRepository, ScheduleRepository};
use fieldbook::handlers::{bookings, fields, schedules};
use fieldbook::services::BookingService;

/// Test database wrapper that provides an isolated testing environment
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_file: NamedTempFile,
}

impl TestDb {
    /// Create a new test database with fresh schema
    pub async fn new() -> Result<Self> {
        let temp_file = NamedTempFile::new()?;
        let database_url = format!("sqlite:{}", temp_file.path().display());

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(&database_url)
            .await?;

        // Run migrations
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(TestDb {
            pool,
            _temp_file: temp_file,
        })
    }
}

/// Test application factory that creates a configured Actix app for testing
pub struct TestApp {
    pub db: TestDb,
    pub config: Config,
}

impl TestApp {
    pub async fn new() -> Result<Self> {
        let db = TestDb::new().await?;
        let config = Config::test_config();

        Ok(TestApp { db, config })
    }

    /// Create an Actix web app wired like the production server
    pub async fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        let field_repository = FieldRepository::new(self.db.pool.clone());
        let schedule_repository = ScheduleRepository::new(self.db.pool.clone());
        let booking_repository = BookingRepository::new(self.db.pool.clone());
        let booking_service = BookingService::new(self.db.pool.clone());

        App::new()
            .app_data(web::Data::new(field_repository))
            .app_data(web::Data::new(schedule_repository))
            .app_data(web::Data::new(booking_repository))
            .app_data(web::Data::new(booking_service))
            .app_data(web::Data::new(self.config.clone()))
            .service(
                web::scope("/api/v1")
                    .service(
                        web::scope("/fields")
                            .route("", web::post().to(fields::create_field))
                            .route("", web::get().to(fields::get_fields))
                            .route("/{id}", web::get().to(fields::get_field))
                            .route("/{id}", web::put().to(fields::update_field))
                            .route("/{id}", web::delete().to(fields::delete_field))
                            .route(
                                "/{id}/availability",
                                web::get().to(bookings::get_field_availability),
                            )
                            .route(
                                "/{id}/schedule",
                                web::post().to(schedules::create_schedule_entry),
                            )
                            .route(
                                "/{id}/schedule",
                                web::get().to(schedules::get_field_schedule),
                            )
                            .route(
                                "/{id}/schedule/{entry_id}",
                                web::delete().to(schedules::delete_schedule_entry),
                            ),
                    )
                    .service(
                        web::scope("/bookings")
                            .route("", web::post().to(bookings::create_booking))
                            .route("", web::get().to(bookings::get_bookings))
                            .route("/{id}", web::get().to(bookings::get_booking))
                            .route(
                                "/{id}/status",
                                web::post().to(bookings::update_booking_status),
                            )
                            .route("/{id}/cancel", web::post().to(bookings::cancel_booking)),
                    ),
            )
    }
}

/// Mock data builders
pub struct MockData;

impl MockData {
    pub fn field() -> FieldInput {
        FieldInput {
            name: format!("{} Arena", CompanyName().fake::<String>()),
            sport: Some("football".to_string()),
            address: Some(StreetName().fake()),
            hourly_rate: Some(80.0),
        }
    }

    pub fn schedule_entry(
        day_of_week: i64,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> WeeklyScheduleEntryInput {
        WeeklyScheduleEntryInput {
            day_of_week,
            start_time,
            end_time,
        }
    }

    pub fn booking(
        field_id: i64,
        booking_date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> BookingInput {
        BookingInput {
            field_id,
            customer_name: Name().fake(),
            notes: None,
            booking_date,
            start_time,
            end_time,
        }
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// 2024-01-01 was a Monday
pub fn monday() -> NaiveDate {
    date(2024, 1, 1)
}

pub async fn create_test_field(pool: &SqlitePool) -> Field {
    FieldRepository::new(pool.clone())
        .create_field(MockData::field())
        .await
        .expect("Failed to create test field")
}

pub async fn create_test_schedule_entry(
    pool: &SqlitePool,
    field_id: i64,
    day_of_week: i64,
    start_time: NaiveTime,
    end_time: NaiveTime,
) -> WeeklyScheduleEntry {
    ScheduleRepository::new(pool.clone())
        .create_entry(
            field_id,
            MockData::schedule_entry(day_of_week, start_time, end_time),
        )
        .await
        .expect("Failed to create test schedule entry")
}

/// Insert a booking row directly, bypassing the availability check. Used to
/// seed arbitrary statuses.
pub async fn insert_test_booking_with_status(
    pool: &SqlitePool,
    field_id: i64,
    booking_date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    status: BookingStatus,
) -> i64 {
    let now = Utc::now().naive_utc();
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO bookings (field_id, customer_name, notes, booking_date, start_time, end_time, status, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(field_id)
    .bind("Seeded customer")
    .bind(None::<String>)
    .bind(booking_date)
    .bind(start_time)
    .bind(end_time)
    .bind(status.to_string())
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
    .expect("Failed to insert test booking")
}
