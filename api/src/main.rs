mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3001".into())
        .parse()
        .expect("invalid PORT");

    // Non-fatal: the public endpoint still works without introspection
    // credentials; the private one answers 503.
    let introspection = services::introspect::IntrospectionConfig::from_env();
    if introspection.is_none() {
        tracing::warn!("ZITADEL_* env vars not set — /api/private will answer 503");
    }

    let state = state::AppState::new(introspection);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "sup-api listening");
    axum::serve(listener, app).await.expect("server failed");
}
