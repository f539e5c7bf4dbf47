use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use serde::{Deserialize, Serialize};

/// Fixed reply for every forecast request ("future data table").
pub const FORECAST_PLACEHOLDER: &str = "ตารางข้อมูลในอนาคต";

// ============================================================================
// Request/Response DTOs
// ============================================================================

#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastQuery {
    pub vegetable_name: Option<String>,
    pub start_date: Option<String>, // Not validated
    pub end_date: Option<String>,   // Not validated
}

impl ForecastQuery {
    /// Parse a raw query string, falling back to an empty query on any error.
    pub fn lenient(query_string: &str) -> Self {
        match web::Query::<ForecastQuery>::from_query(query_string) {
            Ok(query) => query.into_inner(),
            Err(e) => {
                log::debug!("Ignoring unparsable forecast query {:?}: {}", query_string, e);
                Self::default()
            }
        }
    }
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ForecastResponse {
    pub message: String,
}

impl ForecastResponse {
    pub fn placeholder() -> Self {
        Self {
            message: FORECAST_PLACEHOLDER.to_string(),
        }
    }
}

// ============================================================================
// Endpoints
// ============================================================================

/// Accepts a vegetable name and date range; always answers with the placeholder.
#[get("/priceforecast")]
pub async fn price_forecast(req: HttpRequest) -> impl Responder {
    let query = ForecastQuery::lenient(req.query_string());

    log::debug!(
        "Price forecast requested: vegetable={:?} start={:?} end={:?}",
        query.vegetable_name,
        query.start_date,
        query.end_date
    );

    HttpResponse::Ok().json(ForecastResponse::placeholder())
}

// ============================================================================
// Tests
// ============================================================================
