//! Shared harness for integration tests.
//!
//! Mounts the full router in-process and threads the session cookie
//! between requests the way a browser would.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use axum_todo::{
    app,
    config::{AuthConfig, Config, RedisConfig, ServerConfig, SessionConfig},
    services::RedisService,
};
use tower::ServiceExt;

pub struct TestApp {
    app: Router,
    cookie: Option<String>,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = test_config();
        let client = Arc::new(
            redis::Client::open(config.redis.url.clone()).expect("Failed to open Redis client"),
        );
        let redis_service = RedisService::new(client);

        Self {
            app: app(redis_service, config),
            cookie: None,
        }
    }

    pub async fn get(&mut self, path: &str) -> (StatusCode, serde_json::Value) {
        self.request("GET", path, None).await
    }

    pub async fn post(
        &mut self,
        path: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        self.request("POST", path, Some(body)).await
    }

    pub async fn put(
        &mut self,
        path: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        self.request("PUT", path, Some(body)).await
    }

    pub async fn delete(&mut self, path: &str) -> (StatusCode, serde_json::Value) {
        self.request("DELETE", path, None).await
    }

    async fn request(
        &mut self,
        method: &str,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie.clone());
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();

        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let value = set_cookie.to_str().unwrap();
            self.cookie = value.split(';').next().map(str::to_string);
        }

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };
        (status, json)
    }
}

fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_body_limit: 65536,
        },
        redis: RedisConfig {
            url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string()),
        },
        session: SessionConfig {
            cookie_name: "session".to_string(),
            expiry_secs: 3600,
        },
        auth: AuthConfig {
            // Minimum bcrypt cost keeps the suite fast.
            bcrypt_cost: 4,
        },
    }
}

/// Usernames are shared across runs against one Redis instance, so every
/// test registers a fresh one.
pub fn unique_username(prefix: &str) -> String {
    format!("{}_{}", prefix, uuid::Uuid::new_v4())
}

/// Registers and logs in a fresh user, returning the username.
pub async fn register_and_login(app: &mut TestApp, prefix: &str) -> String {
    let username = unique_username(prefix);
    let credentials = serde_json::json!({ "username": username, "password": "pw1" });

    let (status, _) = app.post("/register", credentials.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = app.post("/login", credentials).await;
    assert_eq!(status, StatusCode::OK);

    username
}
