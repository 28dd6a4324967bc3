use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, middleware::Logger, web};
use anyhow::Result;

use fieldbook::database::{
    init_database,
    repositories::{BookingRepository, FieldRepository, ScheduleRepository},
};
use fieldbook::handlers::{bookings, fields, schedules};
use fieldbook::middleware::RequestId;
use fieldbook::services::BookingService;
use fieldbook::Config;

#[get("/")]
async fn hello() -> impl Responder {
    HttpResponse::Ok().body("FieldBook API v1.0")
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now()
    }))
}

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init();

    println!("🚀 Starting FieldBook API server...");

    // Load configuration
    let config = Config::from_env()?;
    println!(
        "📋 Configuration loaded (environment: {})",
        config.environment
    );

    // Initialize database
    let pool = init_database(&config.database_url).await?;
    println!("✅ Database initialized");

    // Initialize repositories and services
    let field_repository = FieldRepository::new(pool.clone());
    let schedule_repository = ScheduleRepository::new(pool.clone());
    let booking_repository = BookingRepository::new(pool.clone());
    let booking_service = BookingService::new(pool.clone());

    let field_repo_data = web::Data::new(field_repository);
    let schedule_repo_data = web::Data::new(schedule_repository);
    let booking_repo_data = web::Data::new(booking_repository);
    let booking_service_data = web::Data::new(booking_service);
    let config_data = web::Data::new(config.clone());

    let server_address = config.server_address();
    let client_base_url = config.client_base_url.clone();
    println!("🌐 Server starting on http://{}", server_address);

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(field_repo_data.clone())
            .app_data(schedule_repo_data.clone())
            .app_data(booking_repo_data.clone())
            .app_data(booking_service_data.clone())
            .app_data(config_data.clone())
            .wrap(
                Cors::default()
                    .allowed_origin(&client_base_url)
                    .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                    .allowed_headers(vec![
                        "Authorization",
                        "Content-Type",
                        "Accept",
                        "X-Requested-With",
                        "X-Correlation-ID",
                    ])
                    .max_age(3600),
            )
            .wrap(RequestId)
            .wrap(Logger::new(
                r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T correlation_id=%{x-correlation-id}o"#,
            ))
            .service(hello)
            .service(health)
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
    })
    .bind(&server_address)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
