use actix_cors::Cors;

/// The registration front-end is served from its own origin and only needs
/// the verbs the member API exposes.
pub fn create_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allow_any_header()
        .expose_headers(vec![actix_web::http::header::CONTENT_DISPOSITION])
        .max_age(3600)
}
