use axum::{Json, Router, extract::Path, http::StatusCode, routing::get};
use civic_appointments::adapters::mock::HolidaySource as MockHolidaySource;
use civic_appointments::adapters::nager::NagerHolidaySource;
use civic_appointments::application::holidays::load_blocked_dates;
use civic_appointments::domain::VisitDate;
use civic_appointments::ports::HolidaySource;
use serde_json::{Value, json};

mod common;

/// Nager.Date APIを模したローカルサーバーを起動し、ベースURLを返す
async fn spawn_fake_nager() -> String {
    async fn public_holidays(
        Path((year, country)): Path<(i32, String)>,
    ) -> Result<Json<Value>, StatusCode> {
        if country != "GB" {
            return Err(StatusCode::NOT_FOUND);
        }

        Ok(Json(json!([
            {
                "date": format!("{year}-12-25"),
                "localName": "Christmas Day",
                "name": "Christmas Day",
                "countryCode": "GB",
                "fixed": false,
                "global": true,
                "counties": null,
                "launchYear": null,
                "types": ["Public"]
            },
            {
                "date": format!("{year}-12-26"),
                "localName": "Boxing Day",
                "name": "St. Stephen's Day",
                "countryCode": "GB",
                "fixed": false,
                "global": true,
                "counties": null,
                "launchYear": null,
                "types": ["Public"]
            }
        ])))
    }

    let app = Router::new().route(
        "/api/v3/PublicHolidays/:year/:country",
        get(public_holidays),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_nager_source_fetches_holidays() {
    let base_url = spawn_fake_nager().await;
    let source = NagerHolidaySource::new(base_url).unwrap();

    let holidays = source.public_holidays(2075, "GB").await.unwrap();

    assert_eq!(holidays.len(), 2);
    assert_eq!(holidays[0].date, common::ymd(2075, 12, 25));
    assert_eq!(holidays[0].name, "Christmas Day");
    assert_eq!(holidays[1].name, "Boxing Day");
}

#[tokio::test]
async fn test_nager_source_non_success_status_is_error() {
    let base_url = spawn_fake_nager().await;
    let source = NagerHolidaySource::new(base_url).unwrap();

    let result = source.public_holidays(2075, "XX").await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("404"), "{}", err);
}

#[tokio::test]
async fn test_load_blocked_dates_from_nager() {
    let base_url = spawn_fake_nager().await;
    let source = NagerHolidaySource::new(base_url).unwrap();

    let blocked = load_blocked_dates(&source, 2075, "GB").await.unwrap();

    assert_eq!(blocked.len(), 2);
    assert!(blocked.contains(VisitDate::parse("2075-12-25").unwrap()));
    assert!(!blocked.contains(VisitDate::parse("2075-06-15").unwrap()));
}

#[tokio::test]
async fn test_load_blocked_dates_reports_source_failure() {
    let base_url = spawn_fake_nager().await;
    let source = NagerHolidaySource::new(base_url).unwrap();

    let err = load_blocked_dates(&source, 2075, "XX").await.unwrap_err();

    assert_eq!(err.year, 2075);
    assert_eq!(err.country_code, "XX");
}

#[tokio::test]
async fn test_load_blocked_dates_from_mock_source() {
    let source = MockHolidaySource::new(common::gb_holidays_2075());

    let blocked = load_blocked_dates(&source, 2075, "GB").await.unwrap();
    assert_eq!(blocked.len(), 13);
    assert!(blocked.contains(VisitDate::parse("2075-01-01").unwrap()));

    let other_year = load_blocked_dates(&source, 2076, "GB").await.unwrap();
    assert!(other_year.is_empty());
}
