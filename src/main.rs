use civic_appointments::{
    adapters::{
        clock::{FixedClock, SystemClock},
        memory::InMemoryAppointmentStore,
        nager::NagerHolidaySource,
        postgres::PostgresAppointmentStore,
    },
    api::{handlers::AppState, router::create_router},
    application::{booking::ServiceDependencies, holidays::load_blocked_dates},
    config::{Config, StoreKind},
    ports::{AppointmentStore, Clock},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "civic_appointments=debug,tower_http=debug,axum=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().unwrap_or_else(|e| {
        tracing::error!("{}", e);
        std::process::exit(2);
    });

    tracing::info!(
        year = config.operating_year,
        country = %config.country_code,
        store = ?config.store,
        "Starting appointment service"
    );

    // 祝日は起動時に一度だけ取得する
    let holiday_source =
        NagerHolidaySource::new(&config.holiday_api_url).expect("Failed to build holiday client");
    let blocked_dates = load_blocked_dates(
        &holiday_source,
        config.operating_year,
        &config.country_code,
    )
    .await
    .expect("Failed to load public holidays");

    // Initialize the appointment store
    let store: Arc<dyn AppointmentStore> = match config.store {
        StoreKind::Postgres => {
            tracing::info!("Database URL: {}", config.database_url);

            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(5)
                .connect(&config.database_url)
                .await
                .expect("Failed to connect to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .expect("Failed to run migrations");

            Arc::new(PostgresAppointmentStore::new(pool))
        }
        StoreKind::Memory => {
            tracing::warn!("Using in-memory appointment store; bookings are lost on restart");
            Arc::new(InMemoryAppointmentStore::new())
        }
    };

    let clock: Arc<dyn Clock> = match config.today_override {
        Some(today) => {
            tracing::info!("Simulated today pinned to {}", today);
            Arc::new(FixedClock::new(today))
        }
        None => Arc::new(SystemClock),
    };

    // Create service dependencies
    let service_deps = ServiceDependencies {
        store,
        clock,
        operating_year: config.operating_year,
        blocked_dates: Arc::new(blocked_dates),
    };

    // Create application state
    let app_state = Arc::new(AppState { service_deps });

    // Create router
    let app = create_router(app_state);

    // Server configuration
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
