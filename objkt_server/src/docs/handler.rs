use axum::Json;
use utoipa::{OpenApi, openapi::OpenApi as OpenApiDocument};

use super::dto::ApiDoc;

pub async fn api_docs() -> Json<OpenApiDocument> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use wiremock::MockServer;

    use crate::test_utils::{TestApp, get_json};

    #[tokio::test]
    async fn test_docs_list_every_endpoint() {
        let upstream = MockServer::start().await;
        let app = TestApp::new(&upstream);

        let (status, doc) = get_json(&app.router, "/docs").await;

        assert_eq!(status, StatusCode::OK);
        for path in [
            "/api/get-tokens",
            "/api/saved-data",
            "/api/collection",
            "/api/collection/add",
            "/api/collection/remove",
        ] {
            assert!(doc["paths"][path].is_object(), "missing {path}");
        }
    }
}
