use tracing_subscriber::EnvFilter;

use vitalis_lambda::config::Config;
use vitalis_lambda::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env();
    let state = AppState::from_config(&config)?;
    let app = vitalis_lambda::app(state, &config);

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
