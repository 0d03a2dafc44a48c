//! Token Validation HTTP Handler
//!
//! `Authorization: Bearer <token>` 헤더를 검증하고 JSON `true`를 반환합니다.

use actix_web::{HttpRequest, HttpResponse, http::header, post, web};

use crate::{core::errors::AppError, services::authz::ValidateService};

/// # Endpoint
/// `POST /api/v1/authz/validate`
#[post("/validate")]
pub async fn validate(
    service: web::Data<ValidateService>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let is_valid = service.validate(auth_header)?;

    Ok(HttpResponse::Ok().json(is_valid))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test, web};
    use serde_json::Value;

    use crate::domain::entities::users::Role;
    use crate::routes::configure_authz_routes;
    use crate::services::{auth::TokenService, authz::ValidateService};
    use crate::test_support::{expired_access_token, jwt_config, sample_user};

    #[actix_web::test]
    async fn test_valid_token_returns_true() {
        let tokens = TokenService::new(jwt_config());
        let token = tokens
            .issue_access_token(&sample_user("a@b.com", Role::Employer))
            .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ValidateService::new(tokens)))
                .configure(configure_authz_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/authz/validate")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, Value::Bool(true));
    }

    #[actix_web::test]
    async fn test_missing_header_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ValidateService::new(TokenService::new(jwt_config()))))
                .configure(configure_authz_routes),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/v1/authz/validate").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Token is not present");
    }

    #[actix_web::test]
    async fn test_expired_token_is_unauthorized() {
        let tokens = TokenService::new(jwt_config());
        let token = expired_access_token(&sample_user("a@b.com", Role::Employer));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ValidateService::new(tokens)))
                .configure(configure_authz_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/authz/validate")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid Token");
    }
}
