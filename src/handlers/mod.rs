pub mod lookup;
pub mod member;
pub mod report;

pub use lookup::lookup_config;
pub use member::member_config;
pub use report::report_config;

use crate::error::AppError;
use actix_web::web;

/// Routes mounted under `/api/v1`, with body extractor errors rendered in
/// the same envelope as every other error.
pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    )
    .app_data(
        web::FormConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    )
    .configure(member_config)
    .configure(report_config)
    .configure(lookup_config);
}
