use actix_cors::Cors;
use actix_web::{http::header, web};

use crate::web::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::health_check))
        .route("/chat", web::post().to(handlers::chat));
}

// Open to any origin; the survey widget is embedded on third-party pages
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["POST", "OPTIONS", "GET"])
        .allowed_header(header::CONTENT_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CompletionGateway, GatewayError};
    use crate::web::models::Message;
    use crate::AppState;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct Unreachable;

    #[async_trait]
    impl CompletionGateway for Unreachable {
        async fn complete(&self, _messages: &[Message]) -> Result<String, GatewayError> {
            Err(GatewayError::MalformedResponse("not called".to_string()))
        }
    }

    #[actix_web::test]
    async fn preflight_allows_any_origin() {
        let state = web::Data::new(AppState {
            gateway: Arc::new(Unreachable),
        });
        let app = test::init_service(
            App::new()
                .app_data(state)
                .wrap(cors())
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/chat")
            .insert_header((header::ORIGIN, "https://survey.example.com"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let allowed = resp
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(allowed == "*" || allowed == "https://survey.example.com");
    }

    #[actix_web::test]
    async fn unknown_path_is_not_found() {
        let state = web::Data::new(AppState {
            gateway: Arc::new(Unreachable),
        });
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::get().uri("/history").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
