use crate::state::AppState;
use actix_cors::Cors;
use actix_web::{
    App, Error,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web,
};

pub mod forecast;
pub mod health;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health_check);

    // Forecast routes (public, no validation)
    cfg.service(web::scope("/api").service(forecast::price_forecast));
}

/// Any origin may call the API.
pub fn cors() -> Cors {
    Cors::permissive()
}

/// Full application: CORS, request logging and every route.
pub fn app(
    state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(cors())
        .wrap(Logger::default())
        .app_data(state)
        .configure(config)
}
