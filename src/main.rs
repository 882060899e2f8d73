use std::sync::Arc;

use axum_todo::{app, config::Config, services::RedisService};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::load().expect("Failed to load configuration");

    let redis_client = Arc::new(
        redis::Client::open(config.redis.url.clone()).expect("Failed to connect to Redis"),
    );
    let redis_service = RedisService::new(redis_client);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = app(redis_service, config);

    tracing::info!("Server running on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Failed to start server");
}
