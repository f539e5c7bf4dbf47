use crate::state::AppState;
use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;

pub const SERVICE_NAME: &str = "Vegetable Price Forecast Backend";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub data_loaded: bool,
}

#[get("/")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        data_loaded: state.data_loaded(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok",
            service: SERVICE_NAME,
            version: "0.1.0",
            data_loaded: false,
        };
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], "0.1.0");
        assert_eq!(json["data_loaded"], false);
    }
}
