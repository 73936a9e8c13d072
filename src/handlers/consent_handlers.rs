use actix_web::{HttpResponse, web};

use crate::consent;
use crate::db::DbPool;
use crate::errors::AppError;

/// Request body for a consent decision.
#[derive(serde::Deserialize)]
pub struct CustomerConsent {
    pub consent: bool,
}

/// POST /consents/{dialogue_id} — resolve the consent decision for a
/// dialogue. 201 when consent is granted, 200 when it is refused, 404 when
/// the dialogue has no staged inputs.
pub async fn submit(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    body: web::Json<CustomerConsent>,
) -> Result<HttpResponse, AppError> {
    let dialogue_id = path.into_inner();
    let conn = pool.get()?;

    let resolution = consent::resolve(&conn, dialogue_id, body.consent)?;

    if resolution.consent {
        Ok(HttpResponse::Created().json(resolution))
    } else {
        Ok(HttpResponse::Ok().json(resolution))
    }
}
