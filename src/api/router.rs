use axum::{
    extract::DefaultBodyLimit,
    http::HeaderName,
    middleware,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{logging::REQUEST_ID_HEADER, logging_middleware};
use super::news;
use super::state::AppState;

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState, max_upload_bytes: usize) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // News and detection endpoints
        .nest("/api/News", news::create_news_router())
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::domain::corpus::Article;
    use crate::domain::detection::{
        ClassifierScorer, LabelMapping, MockTextClassifier, SimilarityScorer,
    };
    use crate::domain::document::mock::MockDocumentTextExtractor;
    use crate::domain::news::mock::MockNewsProvider;
    use crate::infrastructure::corpus::InMemoryCorpusRepository;
    use crate::infrastructure::services::{DetectionService, DetectionServiceDeps};

    fn app(news: MockNewsProvider, extractor: MockDocumentTextExtractor) -> Router {
        let service = DetectionService::new(DetectionServiceDeps {
            news_provider: Arc::new(news),
            corpus_repository: Arc::new(InMemoryCorpusRepository::new()),
            extractor: Arc::new(extractor),
            classifier: ClassifierScorer::new(
                Arc::new(MockTextClassifier::new("REAL", 0.87)),
                LabelMapping::default(),
            ),
            similarity: SimilarityScorer::default(),
        });

        create_router_with_state(AppState::new(Arc::new(service)), DEFAULT_MAX_UPLOAD_BYTES)
    }

    fn default_app() -> Router {
        app(
            MockNewsProvider::new().with_articles(vec![Article::with_content(
                "The central bank raised interest rates today.",
            )]),
            MockDocumentTextExtractor::with_text("The central bank raised interest rates today."),
        )
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn multipart_request(field: &str, content: &[u8]) -> Request<Body> {
        let boundary = "X-TEST-BOUNDARY";
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"news.pdf\"\r\n",
                field
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/pdf\r\n\r\n");
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/News/checkPdf")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = default_app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn test_ready_reports_empty_corpus() {
        let response = default_app()
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["checks"][0]["name"], "corpus");
    }

    #[tokio::test]
    async fn test_ready_is_healthy_once_corpus_is_fetched() {
        let router = default_app();

        let check = router
            .clone()
            .oneshot(
                Request::get("/api/News/checkNews?query=central%20bank")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(check.status(), StatusCode::OK);

        let response = router
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["checks"][0]["message"], "1 articles in snapshot");
    }

    #[tokio::test]
    async fn test_get_all() {
        let response = default_app()
            .oneshot(Request::get("/api/News/getAll").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["totalResults"], 1);
    }

    #[tokio::test]
    async fn test_check_news_returns_decision() {
        let response = default_app()
            .oneshot(
                Request::get("/api/News/checkNews?query=Central%20bank%20raises%20interest%20rates")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["result"], "Réel");
        assert_eq!(json["similarity_check"]["result"], "Réel");
        assert_eq!(json["bert_check"]["confidence"], 0.87);
    }

    #[tokio::test]
    async fn test_check_news_without_query_is_bad_request() {
        let response = default_app()
            .oneshot(Request::get("/api/News/checkNews").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["type"], "invalid_request_error");
    }

    #[tokio::test]
    async fn test_check_news_upstream_failure_is_server_error() {
        let router = app(
            MockNewsProvider::new().with_error("Failed to fetch news"),
            MockDocumentTextExtractor::with_text(""),
        );

        let response = router
            .oneshot(
                Request::get("/api/News/checkNews?query=anything")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"]["message"], "Failed to fetch news");
    }

    #[tokio::test]
    async fn test_check_pdf() {
        let response = default_app()
            .oneshot(multipart_request("file", b"%PDF-1.4 fake"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["result"], "Réel");
    }

    #[tokio::test]
    async fn test_check_pdf_without_file_is_bad_request() {
        let response = default_app()
            .oneshot(multipart_request("other", b"%PDF-1.4"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_check_pdf_extraction_failure_is_server_error() {
        let router = app(
            MockNewsProvider::new(),
            MockDocumentTextExtractor::failing("Uploaded document is not a PDF"),
        );

        let response = router
            .oneshot(multipart_request("file", b"plain text"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "extraction_failure");
    }
}
