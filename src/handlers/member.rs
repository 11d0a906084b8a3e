use actix_web::http::header;
use actix_web::{Either, HttpResponse, ResponseError, Result, web};
use crate::models::*;
use crate::services::MemberService;
use crate::utils::{EXPORT_FILENAME, render_members_csv};

type MemberBody = Either<web::Json<MemberRequest>, web::Form<MemberRequest>>;

#[utoipa::path(
    get,
    path = "/members",
    tag = "member",
    params(
        ("age_group" = Option<String>, Query, description = "Age bracket: under18, 18-35, 36-59 or 60+"),
        ("district" = Option<String>, Query, description = "Exact district name"),
        ("payment" = Option<String>, Query, description = "Exact payment method")
    ),
    responses(
        (status = 200, description = "Members matching the filters, newest first", body = [MemberResponse])
    )
)]
pub async fn list_members(
    member_service: web::Data<MemberService>,
    query: web::Query<MemberFilter>,
) -> Result<HttpResponse> {
    match member_service.list_members(&query).await {
        Ok(members) => Ok(HttpResponse::Ok().json(ApiResponse::success(members))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/members",
    tag = "member",
    request_body = MemberRequest,
    responses(
        (status = 201, description = "Member added", body = MemberResponse),
        (status = 400, description = "Malformed request body")
    )
)]
pub async fn create_member(
    member_service: web::Data<MemberService>,
    body: MemberBody,
) -> Result<HttpResponse> {
    match member_service.create_member(body.into_inner()).await {
        Ok(member) => Ok(HttpResponse::Created().json(ApiResponse::success_with_message(
            member,
            "Member added successfully!",
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/members/{id}",
    tag = "member",
    params(
        ("id" = i32, Path, description = "Member id")
    ),
    responses(
        (status = 200, description = "Member found", body = MemberResponse),
        (status = 404, description = "No member with this id")
    )
)]
pub async fn get_member(
    member_service: web::Data<MemberService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match member_service.get_member(path.into_inner()).await {
        Ok(member) => Ok(HttpResponse::Ok().json(ApiResponse::success(member))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/members/{id}",
    tag = "member",
    request_body = MemberRequest,
    params(
        ("id" = i32, Path, description = "Member id")
    ),
    responses(
        (status = 200, description = "Member updated; an unknown id is accepted and changes nothing"),
        (status = 400, description = "Malformed request body")
    )
)]
pub async fn update_member(
    member_service: web::Data<MemberService>,
    path: web::Path<i32>,
    body: MemberBody,
) -> Result<HttpResponse> {
    match member_service
        .update_member(path.into_inner(), body.into_inner())
        .await
    {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::message("Member updated successfully!"))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/members/{id}",
    tag = "member",
    params(
        ("id" = i32, Path, description = "Member id")
    ),
    responses(
        (status = 200, description = "Member deleted; an unknown id is accepted and changes nothing")
    )
)]
pub async fn delete_member(
    member_service: web::Data<MemberService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match member_service.delete_member(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::message("Member deleted successfully!"))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/members/export",
    tag = "member",
    params(
        ("age_group" = Option<String>, Query, description = "Age bracket: under18, 18-35, 36-59 or 60+"),
        ("district" = Option<String>, Query, description = "Exact district name"),
        ("payment" = Option<String>, Query, description = "Exact payment method")
    ),
    responses(
        (status = 200, description = "CSV attachment, oldest member first", body = String, content_type = "text/csv")
    )
)]
pub async fn export_members(
    member_service: web::Data<MemberService>,
    query: web::Query<MemberFilter>,
) -> Result<HttpResponse> {
    let csv = match member_service.export_members(&query).await {
        Ok(members) => render_members_csv(&members),
        Err(e) => Err(e),
    };

    match csv {
        Ok(bytes) => Ok(HttpResponse::Ok()
            .content_type("text/csv")
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={EXPORT_FILENAME}"),
            ))
            .body(bytes)),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn member_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/members")
            .route("", web::get().to(list_members))
            .route("", web::post().to(create_member))
            // before /{id}, which would otherwise claim "export"
            .route("/export", web::get().to(export_members))
            .route("/{id}", web::get().to(get_member))
            .route("/{id}", web::put().to(update_member))
            // edit form posts
            .route("/{id}", web::post().to(update_member))
            .route("/{id}", web::delete().to(delete_member)),
    );
}
