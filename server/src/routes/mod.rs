use actix_cors::Cors;
use actix_web::{
    error::{JsonPayloadError, PathError, QueryPayloadError},
    http::header,
    middleware::DefaultHeaders,
    web, HttpRequest, HttpResponse, Resource,
};

use errors::Error;

pub mod categories;
pub mod questions;
pub mod quizzes;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .app_data(web::PathConfig::default().error_handler(path_error))
        .service(resource("/categories").route(web::get().to(categories::get_all)))
        .service(
            resource("/categories/{id}/questions")
                .route(web::get().to(categories::get_questions)),
        )
        .service(
            resource("/questions")
                .route(web::get().to(questions::get_all))
                .route(web::post().to(questions::create)),
        )
        .service(resource("/questions/{id}").route(web::delete().to(questions::delete)))
        .service(resource("/search").route(web::post().to(questions::search)))
        .service(resource("/quizzes").route(web::post().to(quizzes::play)));
}

/// Any origin may call the API; preflight answers are cached for an hour.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "PATCH", "POST", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(3600)
}

/// Headers the web client expects on every response, errors included.
pub fn default_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((
            "Access-Control-Allow-Headers",
            "Content-Type,Authorization,true",
        ))
        .add((
            "Access-Control-Allow-Methods",
            "GET,PATCH,POST,DELETE,OPTIONS",
        ))
}

pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, Error> {
    Err(Error::NotFound(format!("no route for {}", req.path())))
}

async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, Error> {
    debug!("{} is not routed for {}", req.method(), req.path());
    Err(Error::MethodNotAllowed)
}

// a known path with an unrouted verb answers 405 instead of falling through to 404
fn resource(path: &str) -> Resource {
    web::resource(path).default_service(web::route().to(method_not_allowed))
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::UnprocessableEntity(err.to_string()).into()
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::BadRequest(err.to_string()).into()
}

fn path_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    Error::NotFound(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use actix_web::{http::Method, test::TestRequest};
    use errors::ErrorResponse;

    use crate::tests::helpers::tests::{seeded_store, send, test_get};

    #[actix_rt::test]
    async fn test_unknown_route_is_not_found() {
        let store = seeded_store(1);
        let (status, body): (u16, ErrorResponse) = test_get(&store, "/nowhere").await;

        assert_eq!(status, 404);
        assert!(!body.success);
        assert_eq!(body.error, 404);
        assert_eq!(body.message, "Resource not found");
    }

    #[actix_rt::test]
    async fn test_cors_headers_on_every_response() {
        let store = seeded_store(1);

        for req in vec![
            TestRequest::get().uri("/categories"),
            TestRequest::get().uri("/questions?page=50"),
            TestRequest::put().uri("/questions"),
        ] {
            let (_, headers, _) = send(&store, req).await;

            assert_eq!(
                headers.get("Access-Control-Allow-Headers").unwrap(),
                "Content-Type,Authorization,true"
            );
            assert_eq!(
                headers.get("Access-Control-Allow-Methods").unwrap(),
                "GET,PATCH,POST,DELETE,OPTIONS"
            );
        }
    }

    #[actix_rt::test]
    async fn test_preflight_is_answered_for_any_origin() {
        let store = seeded_store(1);
        let req = TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/questions")
            .insert_header(("Origin", "http://localhost:3000"))
            .insert_header(("Access-Control-Request-Method", "POST"))
            .insert_header(("Access-Control-Request-Headers", "content-type"));
        let (status, headers, _) = send(&store, req).await;

        assert_eq!(status, 200);
        let origin = headers.get("Access-Control-Allow-Origin").unwrap();
        assert!(origin == "http://localhost:3000" || origin == "*");
        assert!(headers.contains_key("Access-Control-Allow-Methods"));
        assert_eq!(headers.get("Access-Control-Max-Age").unwrap(), "3600");
    }

    #[actix_rt::test]
    async fn test_cross_origin_request_gets_allow_origin() {
        let store = seeded_store(1);
        let req = TestRequest::get()
            .uri("/categories")
            .insert_header(("Origin", "http://localhost:3000"));
        let (status, headers, _) = send(&store, req).await;

        assert_eq!(status, 200);
        assert!(headers.contains_key("Access-Control-Allow-Origin"));
    }

    #[actix_rt::test]
    async fn test_unrouted_verb_is_method_not_allowed() {
        let store = seeded_store(1);
        let (status, _, body) = send(&store, TestRequest::put().uri("/quizzes")).await;
        let body: ErrorResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(status, 405);
        assert_eq!(body.error, 405);
        assert_eq!(body.message, "Method not allowed");
    }
}
