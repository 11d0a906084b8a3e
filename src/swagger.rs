use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::member::list_members,
        handlers::member::create_member,
        handlers::member::get_member,
        handlers::member::update_member,
        handlers::member::delete_member,
        handlers::member::export_members,
        handlers::report::get_reports,
        handlers::lookup::get_lookups,
    ),
    components(
        schemas(
            MemberResponse,
            MemberRequest,
            MemberFilter,
            AgeGroup,
            GroupCount,
            ReportSummary,
            LookupResponse,
            ApiError,
        )
    ),
    tags(
        (name = "member", description = "Member registry API"),
        (name = "report", description = "Aggregate reports API"),
        (name = "lookup", description = "Form choice lists API"),
    ),
    info(
        title = "MamaNet Registry API",
        version = "1.0.0",
        description = "MamaNet member registry REST API documentation"
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_member_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in ["/members", "/members/{id}", "/members/export", "/reports", "/lookups"] {
            assert!(paths.iter().any(|p| p.as_str() == expected), "missing {expected}");
        }
    }
}
