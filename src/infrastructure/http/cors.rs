//! CORS Layer
//!
//! 根据 [`CorsConfig`] 构建跨域中间件。
//!
//! 浏览器不接受 `*` 与凭证同时出现，因此在允许凭证时，
//! 任意来源/方法/请求头通过回显请求中的对应值实现。

use http::HeaderValue;
use std::time::Duration;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

use crate::config::CorsConfig;

/// 预检结果缓存时间
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(600);

/// 构建 CORS 中间件
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_origin(allow_origin(config))
        .max_age(PREFLIGHT_MAX_AGE);

    if config.allow_credentials {
        layer
            .allow_credentials(true)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
    } else {
        layer.allow_methods(Any).allow_headers(Any)
    }
}

fn allow_origin(config: &CorsConfig) -> AllowOrigin {
    if config.allows_any_origin() {
        return if config.allow_credentials {
            AllowOrigin::mirror_request()
        } else {
            AllowOrigin::any()
        };
    }

    let origins: Vec<HeaderValue> = config
        .allow_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Skipping invalid CORS origin");
                None
            }
        })
        .collect();

    AllowOrigin::list(origins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
        routing::get,
        Router,
    };
    use tower::util::ServiceExt;

    fn create_test_router(config: &CorsConfig) -> Router {
        Router::new()
            .route("/api/names", get(|| async { "[]" }).post(|| async { "ok" }))
            .layer(cors_layer(config))
    }

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/names")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type,x-custom")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_default_policy_mirrors_any_origin_with_credentials() {
        let app = create_test_router(&CorsConfig::default());

        let response = app.oneshot(preflight("http://localhost:5173")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let headers = response.headers();
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5173"
        );
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST");
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
            "content-type,x-custom"
        );
    }

    #[tokio::test]
    async fn test_simple_request_gets_origin_header() {
        let app = create_test_router(&CorsConfig::default());

        let request = Request::builder()
            .uri("/api/names")
            .header(header::ORIGIN, "https://frontend.example.com")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://frontend.example.com"
        );
    }

    #[tokio::test]
    async fn test_wildcard_without_credentials() {
        let config = CorsConfig {
            allow_origins: vec!["*".to_string()],
            allow_credentials: false,
        };
        let app = create_test_router(&config);

        let response = app.oneshot(preflight("https://a.example.com")).await.unwrap();
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert!(headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).is_none());
    }

    #[tokio::test]
    async fn test_origin_list_only_admits_listed_origins() {
        let config = CorsConfig {
            allow_origins: vec!["https://app.example.com".to_string()],
            allow_credentials: true,
        };

        let response = create_test_router(&config)
            .oneshot(preflight("https://app.example.com"))
            .await
            .unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://app.example.com"
        );

        let response = create_test_router(&config)
            .oneshot(preflight("https://evil.example.com"))
            .await
            .unwrap();
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}
