use actix_web::{web, HttpResponse, Result, ResponseError};
use crate::models::*;
use crate::services::LookupService;

#[utoipa::path(
    get,
    path = "/lookups",
    tag = "lookup",
    responses(
        (status = 200, description = "Gender, disability and payment method choices", body = LookupResponse)
    )
)]
pub async fn get_lookups(lookup_service: web::Data<LookupService>) -> Result<HttpResponse> {
    match lookup_service.get_lookups().await {
        Ok(lookups) => Ok(HttpResponse::Ok().json(ApiResponse::success(lookups))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn lookup_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/lookups", web::get().to(get_lookups));
}
