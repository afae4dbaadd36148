use assetsearch_core::config;
use assetsearch_core::rank::Ranker;
use assetsearch_server::api::create_router;
use assetsearch_server::api::handlers::AppState;
use assetsearch_server::config::ServerConfig;
use assetsearch_server::providers::{OpenAiEmbedder, PineconeIndex};
use assetsearch_server::search::SearchService;
use clap::Parser;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "assetsearch", about = "Hybrid search API for the asset catalog")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// Bind address
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(
                    "assetsearch_server=info"
                        .parse()
                        .expect("valid directive literal"),
                )
                .add_directive(
                    "tower_http=info"
                        .parse()
                        .expect("valid directive literal"),
                ),
        )
        .init();

    let args = Args::parse();
    let cfg = ServerConfig::from_env()?;

    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()?;

    let embedder = Arc::new(OpenAiEmbedder::new(cfg.openai_api_key.clone()));
    let index = Arc::new(PineconeIndex::new(
        cfg.pinecone_api_key.clone(),
        cfg.pinecone_index_host.clone(),
        cfg.pinecone_namespace.clone(),
    ));
    let ranker = Ranker::new(cfg.asset_base_url.clone());
    let service = Arc::new(SearchService::new(embedder, index, ranker));

    let state = AppState {
        service,
        prometheus_handle,
        start_time: Instant::now(),
    };
    let app = create_router(state);

    let addr = format!("{}:{}", args.bind, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        addr = %addr,
        model = config::EMBEDDING_MODEL,
        index_host = %cfg.pinecone_index_host,
        "Asset search API listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Received shutdown signal");
    }
}
