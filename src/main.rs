mod api;
mod config;
mod guard;
mod routes;
mod session;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");
    let api = api::ApiClient::new(config.api_base_url.clone());
    let state = state::AppState::new(api);
    let guard = guard::RouteGuard::new(&config.protected_paths, &config.login_path);

    let app = routes::app(state, guard);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, api = %config.api_base_url, "albaranes gateway listening");
    axum::serve(listener, app).await.expect("server failed");
}
