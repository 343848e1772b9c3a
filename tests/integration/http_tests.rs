//! HTTP surface tests
//!
//! In-process app tests use the recording backend; the full-stack tests run
//! the real Gemini client against a wiremock upstream.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{self, PNG_BASE64};
    use crate::common::{EnvelopeAssertions, RecordingBackend};
    use actix_web::http::{Method, StatusCode};
    use actix_web::{test, web};
    use groovegen::config::Config;
    use groovegen::core::dispatch::Dispatcher;
    use groovegen::core::providers::gemini::{GeminiConfig, GeminiModels};
    use groovegen::server::server::HttpServer;
    use groovegen::server::state::AppState;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn app_state(backend: &Arc<RecordingBackend>) -> web::Data<AppState> {
        let dispatcher = Dispatcher::new(backend.clone(), GeminiModels::default());
        web::Data::new(AppState::new(Config::default(), dispatcher))
    }

    fn upstream_state(server: &MockServer) -> web::Data<AppState> {
        let mut config = Config::default();
        config.gateway.gemini = GeminiConfig::new("integration-key").with_base_url(server.uri());
        let dispatcher = Dispatcher::from_config(config.gemini()).unwrap();
        web::Data::new(AppState::new(config, dispatcher))
    }

    // ==================== Method handling ====================

    #[actix_web::test]
    async fn test_non_post_methods_never_dispatch() {
        let backend = Arc::new(RecordingBackend::new());
        let app = test::init_service(HttpServer::create_app(app_state(&backend))).await;

        for method in [Method::GET, Method::PUT, Method::DELETE, Method::HEAD, Method::OPTIONS] {
            let req = test::TestRequest::default()
                .method(method.clone())
                .uri("/api/gemini")
                .set_json(json!({"action": "generateFastText", "payload": {"prompt": "hi"}}))
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED, "{}", method);
        }
        assert_eq!(backend.call_count(), 0);
    }

    // ==================== Envelopes ====================

    #[actix_web::test]
    async fn test_every_response_is_exactly_one_envelope() {
        let backend = Arc::new(
            RecordingBackend::new()
                .respond(fixtures::response(fixtures::text_body("ok")))
                .respond(fixtures::response(fixtures::empty_body())),
        );
        let app = test::init_service(HttpServer::create_app(app_state(&backend))).await;

        let ok = test::TestRequest::post()
            .uri("/api/gemini")
            .set_json(json!({"action": "analyzeContent", "payload": {
                "fileBase64": PNG_BASE64, "mimeType": "image/png", "prompt": "what?"
            }}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, ok).await;
        assert_eq!(body.assert_result(), "ok");

        let failed = test::TestRequest::post()
            .uri("/api/gemini")
            .set_json(json!({"action": "generateImage", "payload": {"prompt": "x"}}))
            .to_request();
        let res = test::call_service(&app, failed).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body.assert_error(), "No image generated.");
    }

    #[actix_web::test]
    async fn test_invalid_payload_is_400() {
        let backend = Arc::new(RecordingBackend::new());
        let app = test::init_service(HttpServer::create_app(app_state(&backend))).await;

        let req = test::TestRequest::post()
            .uri("/api/gemini")
            .set_json(json!({"action": "editImage", "payload": {"prompt": "hat"}}))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert!(body.assert_error().contains("editImage"));
        assert_eq!(backend.call_count(), 0);
    }

    #[actix_web::test]
    async fn test_malformed_json_reports_undefined_action() {
        let backend = Arc::new(RecordingBackend::new());
        let app = test::init_service(HttpServer::create_app(app_state(&backend))).await;

        let req = test::TestRequest::post()
            .uri("/api/gemini")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body.assert_error(), "Unknown action: undefined");
    }

    #[actix_web::test]
    async fn test_missing_credential_is_500_config_error() {
        let dispatcher = Dispatcher::unconfigured(GeminiModels::default());
        let state = web::Data::new(AppState::new(Config::default(), dispatcher));
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/api/gemini")
            .set_json(json!({"action": "generateFastText", "payload": {"prompt": "hi"}}))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(res).await;
        assert!(body.assert_error().contains("GEMINI_API_KEY environment variable is not set"));
    }

    #[actix_web::test]
    async fn test_cors_preflight() {
        let backend = Arc::new(RecordingBackend::new());
        let app = test::init_service(HttpServer::create_app(app_state(&backend))).await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/gemini")
            .insert_header(("Origin", "https://app.example"))
            .insert_header(("Access-Control-Request-Method", "POST"))
            .insert_header(("Access-Control-Request-Headers", "content-type"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert!(res.status().is_success());
        assert_eq!(res.headers().get("access-control-allow-origin").unwrap(), "*");
        assert_eq!(backend.call_count(), 0);
    }

    // ==================== Full stack against a mock upstream ====================

    #[actix_web::test]
    async fn test_full_stack_image_generation() {
        let upstream = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.5-flash-image:generateContent"))
            .and(header("x-goog-api-key", "integration-key"))
            .and(body_partial_json(json!({"contents": [{"parts": [{"text": "disco ball"}]}]})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(fixtures::image_body("image/png", PNG_BASE64)),
            )
            .expect(1)
            .mount(&upstream)
            .await;

        let app = test::init_service(HttpServer::create_app(upstream_state(&upstream))).await;
        let req = test::TestRequest::post()
            .uri("/api/gemini")
            .set_json(json!({"action": "generateImage", "payload": {"prompt": "disco ball", "size": "4K"}}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body.assert_result(),
            &json!(format!("data:image/png;base64,{}", PNG_BASE64))
        );
    }

    #[actix_web::test]
    async fn test_full_stack_upstream_rejection_is_500() {
        let upstream = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {
                    "code": 400,
                    "message": "API key not valid. Please pass a valid API key.",
                    "status": "INVALID_ARGUMENT"
                }
            })))
            .expect(1)
            .mount(&upstream)
            .await;

        let app = test::init_service(HttpServer::create_app(upstream_state(&upstream))).await;
        let req = test::TestRequest::post()
            .uri("/api/gemini")
            .set_json(json!({"action": "generateFastText", "payload": {"prompt": "hi"}}))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(res).await;
        assert!(body.assert_error().contains("API key not valid"));
    }

    #[actix_web::test]
    async fn test_full_stack_chat_grounding() {
        let upstream = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-3-flash-preview:generateContent"))
            .and(body_partial_json(json!({"tools": [{"googleSearch": {}}]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::grounded_body(
                "Found it.",
                &["https://a.com", "https://b.com", "https://a.com"],
            )))
            .expect(1)
            .mount(&upstream)
            .await;

        let app = test::init_service(HttpServer::create_app(upstream_state(&upstream))).await;
        let req = test::TestRequest::post()
            .uri("/api/gemini")
            .set_json(json!({"action": "chatWithSearch", "payload": {
                "history": [{"role": "model", "text": "hi"}],
                "newMessage": "find X"
            }}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body.assert_result(),
            &json!({
                "text": "Found it.",
                "groundingUrls": ["https://a.com", "https://b.com", "https://a.com"]
            })
        );
    }
}
