use actix_web::{HttpResponse, web};

use crate::consent;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::customer_input::{self, CompleteCustomerInput, CustomerInput, Language};

/// Query params for GET /data.
#[derive(serde::Deserialize)]
pub struct ListQuery {
    pub language: Option<Language>,
    pub customer_id: Option<i64>,
}

/// POST /data/{customer_id}/{dialogue_id} — stage a customer input pending
/// the dialogue's consent decision. Echoes the complete input back.
pub async fn submit(
    pool: web::Data<DbPool>,
    path: web::Path<(i64, i64)>,
    body: web::Json<CustomerInput>,
) -> Result<HttpResponse, AppError> {
    let (customer_id, dialogue_id) = path.into_inner();
    let input = body.into_inner();

    if input.text.trim().is_empty() {
        return Err(AppError::Validation("text must not be empty".to_string()));
    }

    let conn = pool.get()?;
    let stored = consent::submit_input(
        &conn,
        &CompleteCustomerInput {
            customer_id,
            dialogue_id,
            text: input.text,
            language: input.language,
        },
    )?;

    Ok(HttpResponse::Ok().json(CompleteCustomerInput {
        customer_id: stored.customer_id,
        dialogue_id: stored.dialogue_id,
        text: stored.text,
        language: stored.language,
    }))
}

/// GET /data — list stored inputs, optionally filtered by customer and/or
/// language.
pub async fn list(
    pool: web::Data<DbPool>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let listing = customer_input::list(&conn, query.customer_id, query.language)?;
    Ok(HttpResponse::Ok().json(listing))
}
