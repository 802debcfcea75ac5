use std::sync::Arc;

use tga_auth::HttpAuthForwarder;

use tga_core::{auth::AuthForwarder, config::Config};

#[tokio::main]
async fn main() -> Result<(), tga_core::Error> {
    tga_core::logging::init("tga")?;

    let cfg = Arc::new(Config::load()?);

    // Deployments without the website handshake treat `/start auth_x` as plain `/start`.
    let auth: Option<Arc<dyn AuthForwarder>> = if cfg.auth_forwarding {
        Some(Arc::new(HttpAuthForwarder::new(cfg.auth_complete_url())))
    } else {
        None
    };

    tga_telegram::router::run_polling(cfg, auth)
        .await
        .map_err(|e| tga_core::Error::External(format!("telegram bot failed: {e:#}")))?;

    println!("\n👋 Bot stopped");
    Ok(())
}
