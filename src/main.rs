use shortlink_catalog::config::{self, AppEnv};
use shortlink_catalog::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let app_env = std::env::var("APP_ENV")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(AppEnv::Local);
    init_tracing(app_env);

    let config = match config::load_from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {:#}", e);
            std::process::exit(1);
        }
    };
    config.print_summary();

    if let Err(e) = server::run(config).await {
        tracing::error!("Server error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(app_env: AppEnv) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(app_env.default_log_level()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if app_env.json_logs() {
        builder.json().init();
    } else {
        builder.pretty().init();
    }
}
