//! HTTP Routes
//!
//! API Endpoints:
//! - /                   GET     欢迎信息
//! - /health             GET     健康检查（含语言加载报告）
//! - /generate           POST    合成语音，返回 audio_id
//! - /audio/{audio_id}   GET     下载 WAV
//! - /audio/{audio_id}   DELETE  删除 WAV 与句柄

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/generate", post(handlers::generate_speech))
        .route(
            "/audio/:audio_id",
            get(handlers::get_audio).delete(handlers::cleanup_audio),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::util::ServiceExt;

    use crate::application::{AudioStorePort, GenerateDefaults};
    use crate::infrastructure::adapters::{FakeTtsClient, FakeTtsClientConfig, FileAudioStore};
    use crate::infrastructure::http::server::build_router;
    use crate::infrastructure::memory::InMemoryModelRegistry;

    struct TestApp {
        router: Router,
        store: Arc<FileAudioStore>,
        _temp_dir: TempDir,
    }

    /// EN 与 EN_V2 可用，EN_NEWEST 加载失败
    async fn test_app() -> TestApp {
        let temp_dir = tempfile::tempdir().unwrap();
        let loader = FakeTtsClient::new(FakeTtsClientConfig {
            unavailable_languages: vec!["EN_NEWEST".to_string()],
            ..Default::default()
        });
        let languages = vec![
            "EN".to_string(),
            "EN_NEWEST".to_string(),
            "EN_V2".to_string(),
        ];
        let registry = Arc::new(InMemoryModelRegistry::load(&languages, &loader).await);
        let store = Arc::new(FileAudioStore::new(temp_dir.path()).await.unwrap());
        let state = AppState::new(registry, store.clone(), GenerateDefaults::default());

        TestApp {
            router: build_router(Arc::new(state)),
            store,
            _temp_dir: temp_dir,
        }
    }

    async fn send(app: &TestApp, method: Method, uri: &str, body: Option<Value>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };
        app.router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap()
    }

    async fn send_raw(app: &TestApp, uri: &str, content_type: Option<&str>, body: &str) -> Response {
        let mut builder = Request::builder().method(Method::POST).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        app.router
            .clone()
            .oneshot(builder.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn generate(app: &TestApp, text: &str) -> String {
        let response = send(app, Method::POST, "/generate", Some(json!({ "text": text }))).await;
        assert_eq!(response.status(), StatusCode::OK);
        json_body(response).await["audio_id"]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_root() {
        let app = test_app().await;
        let response = send(&app, Method::GET, "/", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert!(body["message"].as_str().unwrap().starts_with("Welcome"));
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_health_lists_loaded_languages() {
        let app = test_app().await;
        let response = send(&app, Method::GET, "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["loaded_languages"], json!(["EN", "EN_V2"]));
        assert_eq!(body["failed_languages"][0]["language"], "EN_NEWEST");
        assert_eq!(body["stored_audio"], 0);
    }

    #[tokio::test]
    async fn test_generate_then_download() {
        let app = test_app().await;

        let response = send(
            &app,
            Method::POST,
            "/generate",
            Some(json!({ "text": "Hello world", "language": "EN_V2", "speaker": "EN-BR", "speed": 1.0 })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(
            body["message"],
            "Speech generated successfully for text: 'Hello world...'"
        );
        let audio_id = body["audio_id"].as_str().unwrap().to_string();

        let response = send(&app, Method::GET, &format!("/audio/{}", audio_id), None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "audio/wav");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            format!("attachment; filename=\"speech_{}.wav\"", audio_id).as_str()
        );

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");
    }

    #[tokio::test]
    async fn test_unsupported_language_is_bad_request() {
        let app = test_app().await;

        for language in ["FR", "EN_NEWEST"] {
            let response = send(
                &app,
                Method::POST,
                "/generate",
                Some(json!({ "text": "Bonjour", "language": language })),
            )
            .await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let body = json_body(response).await;
            assert!(body["detail"].as_str().unwrap().contains("not supported"));
        }
        assert!(app.store.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_speaker_is_bad_request() {
        let app = test_app().await;
        let response = send(
            &app,
            Method::POST,
            "/generate",
            Some(json!({ "text": "Hello", "speaker": "EN-Mars" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert!(body["detail"].as_str().unwrap().starts_with("Speaker EN-Mars not found"));
        assert!(app.store.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_speed_is_bad_request() {
        let app = test_app().await;

        for payload in [
            json!({ "text": "Hello", "speed": 0.0 }),
            json!({ "text": "Hello", "speed": -1.5 }),
        ] {
            let response = send(&app, Method::POST, "/generate", Some(payload)).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_blank_text_is_generation_failure() {
        let app = test_app().await;

        let response = send(&app, Method::POST, "/generate", Some(json!({ "text": "   " }))).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert!(body["detail"].as_str().unwrap().starts_with("Generation failed:"));
        assert!(app.store.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_generate_body_uses_detail_format() {
        let app = test_app().await;

        for payload in [json!({}), json!({ "text": "hi", "speed": "fast" })] {
            let response = send(&app, Method::POST, "/generate", Some(payload)).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let body = json_body(response).await;
            assert!(!body["detail"].as_str().unwrap().is_empty());
        }

        for content_type in [Some("application/json"), None] {
            let response = send_raw(&app, "/generate", content_type, "not json").await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                response.headers()[header::CONTENT_TYPE],
                "application/json"
            );
            let body = json_body(response).await;
            assert!(body["detail"].is_string());
        }
        assert!(app.store.is_empty());
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let app = test_app().await;
        let audio_id = generate(&app, "Delete me").await;
        let id = crate::domain::AudioId::parse(&audio_id).unwrap();
        let path = app.store.lookup(id).unwrap();
        assert!(path.exists());

        let uri = format!("/audio/{}", audio_id);
        let response = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["message"], "Audio file cleaned up");
        assert!(!path.exists());

        let response = send(&app, Method::GET, &uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["detail"], "Audio file not found.");

        let response = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_file_is_reported() {
        let app = test_app().await;
        let audio_id = generate(&app, "Vanishing").await;
        let id = crate::domain::AudioId::parse(&audio_id).unwrap();
        std::fs::remove_file(app.store.lookup(id).unwrap()).unwrap();

        let response = send(&app, Method::GET, &format!("/audio/{}", audio_id), None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["detail"], "Audio file no longer exists.");
    }

    #[tokio::test]
    async fn test_unknown_ids_are_never_server_errors() {
        let app = test_app().await;
        let random = uuid::Uuid::new_v4().to_string();

        for id in [random.as_str(), "not-a-uuid", "12345"] {
            let uri = format!("/audio/{}", id);
            for method in [Method::GET, Method::DELETE] {
                let response = send(&app, method, &uri, None).await;
                assert_eq!(response.status(), StatusCode::NOT_FOUND);
            }
        }
    }

    #[tokio::test]
    async fn test_health_counts_stored_audio() {
        let app = test_app().await;
        generate(&app, "one").await;
        generate(&app, "two").await;

        let body = json_body(send(&app, Method::GET, "/health", None).await).await;
        assert_eq!(body["stored_audio"], 2);
    }
}
