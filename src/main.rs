use std::sync::Arc;

use hugin::{
    config::Config,
    hash::AssetHashes,
    model::app::AppState,
    observability::{self, NoopObservability},
    router,
    scheduler::cron::start_scheduler,
    service::{
        api::Registry,
        share::{NoopShareClient, ShareClient},
    },
    startup,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    observability::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // A missing tracked asset aborts startup before the listener binds
    let assets = AssetHashes::load(&config).unwrap();
    let templates = Arc::new(startup::build_templates(&config).unwrap());
    let session = startup::connect_to_session(&config).await.unwrap();

    let share_client: Arc<dyn ShareClient> = Arc::new(NoopShareClient);
    let _scheduler = start_scheduler(&config, share_client).await.unwrap();

    let state = AppState {
        config: config.clone(),
        templates,
        assets,
        api: Arc::new(Registry::new()),
        observability: Arc::new(NoopObservability),
    };

    tracing::info!("Starting server on {}", config.bind_addr());

    let app = router::app(state, session).unwrap();
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .unwrap();

    axum::serve(listener, app).await.unwrap();
}
