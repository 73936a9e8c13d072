//! API used by data scientists to further improve an existing chatbot.
//!
//! A background job pushes customer dialogue text here as it happens and the
//! customer's consent decision once the dialogue ends. Inputs are staged in
//! the database on submission; a positive consent keeps them, a negative one
//! purges everything staged for that dialogue.

use actix_web::{HttpResponse, error::InternalError, web};

pub mod config;
pub mod consent;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;

/// Route table and payload error handling, shared between `main` and the
/// HTTP-level tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .route(
            "/data/{customer_id}/{dialogue_id}",
            web::post().to(handlers::input_handlers::submit),
        )
        .route("/data", web::get().to(handlers::input_handlers::list))
        .route(
            "/consents/{dialogue_id}",
            web::post().to(handlers::consent_handlers::submit),
        );
}

// Malformed bodies (bad JSON, unknown language code, missing fields) are a
// validation concern of the boundary: reject with 422 and a JSON error body
// instead of actix's default 400 plain-text response.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        InternalError::from_response(
            err,
            HttpResponse::UnprocessableEntity().json(serde_json::json!({ "error": detail })),
        )
        .into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        InternalError::from_response(
            err,
            HttpResponse::UnprocessableEntity().json(serde_json::json!({ "error": detail })),
        )
        .into()
    })
}
