use anyhow::Context;
use axum::http::HeaderValue;
use portfolio_relay::{router, AppState, RelayConfig, SmtpMailer};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = RelayConfig::from_env()?;
    let mailer = SmtpMailer::new(
        &config.smtp_host,
        &config.smtp_user,
        &config.smtp_password,
        &config.recipient,
    )?;
    let origin: HeaderValue = config
        .allowed_origin
        .parse()
        .context("invalid RELAY_ALLOWED_ORIGIN")?;

    let app = router(
        AppState {
            mailer: Arc::new(mailer),
        },
        origin,
        &config.public_dir,
    );

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    log::info!(
        "contact relay listening on http://localhost:{}",
        config.port
    );
    axum::serve(listener, app).await?;
    Ok(())
}
