use actix_web::web;

use crate::web::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/chat", web::post().to(handlers::chat))
            .route("/converse", web::post().to(handlers::converse)),
    )
    .route("/", web::get().to(handlers::index))
    .route("/health", web::get().to(handlers::health_check));
}

/// Malformed request bodies become a 400 with the deserializer's field-level
/// detail, before any handler runs.
pub fn json_error_handler() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            actix_web::HttpResponse::BadRequest().json(serde_json::json!({ "error": detail })),
        )
        .into()
    })
}
