use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use guagua_server::telegram::{AppState, BotClient, BotConfig, create_router};
use guagua_server::titsa::{TitsaApi, TitsaConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Get the bot token from the environment
    let token = std::env::var("BOT_TOKEN").unwrap_or_else(|_| {
        tracing::warn!("BOT_TOKEN not set; replies to Telegram will fail");
        String::new()
    });

    let api = TitsaApi::new(TitsaConfig::new()).expect("Failed to create TITSA client");
    let bot = BotClient::new(BotConfig::new(token)).expect("Failed to create Telegram client");

    let state = AppState::new(api, bot);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    tracing::info!("guagua bot listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
