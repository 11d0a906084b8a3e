use actix_web::{web, HttpResponse, Result, ResponseError};
use crate::models::*;
use crate::services::ReportService;

#[utoipa::path(
    get,
    path = "/reports",
    tag = "report",
    responses(
        (status = 200, description = "Member totals grouped by gender, age group, disability, district and payment method", body = ReportSummary)
    )
)]
pub async fn get_reports(report_service: web::Data<ReportService>) -> Result<HttpResponse> {
    match report_service.get_reports().await {
        Ok(summary) => Ok(HttpResponse::Ok().json(ApiResponse::success(summary))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn report_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/reports", web::get().to(get_reports));
}
