use std::sync::Arc;

use anyhow::Context;
use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use tga_core::{
    auth::AuthForwarder,
    config::Config,
    messaging::port::MessagingPort,
    photo::{FileUrlBase, ProfilePhotoSource},
    service::BotService,
};

use crate::{handlers, TelegramMessenger, TelegramPhotoSource};

/// Authenticate, print operator status lines and run long polling until Ctrl+C.
pub async fn run_polling(
    cfg: Arc<Config>,
    auth: Option<Arc<dyn AuthForwarder>>,
) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.bot_token.clone());

    println!("🚀 Bot is starting...");
    let me = bot
        .get_me()
        .await
        .context("telegram rejected the bot token")?;
    println!("✅ Authorized as @{}", me.username());
    if auth.is_some() {
        println!("🔐 Browser login enabled: {}", cfg.auth_complete_url());
    }
    println!("📝 Use /start or /info to see your profile data");
    println!("⏹️  Press Ctrl+C to stop\n");

    if cfg.drop_pending_updates {
        if let Err(e) = bot.delete_webhook().drop_pending_updates(true).await {
            tracing::warn!(error = %e, "failed to drop pending updates");
        }
    }

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));
    let photos: Arc<dyn ProfilePhotoSource> = Arc::new(TelegramPhotoSource::new(bot.clone()));
    let service = BotService::new(
        messenger,
        photos,
        FileUrlBase::new(cfg.telegram_file_base.clone(), cfg.bot_token.clone()),
        auth,
    )
    .with_bot_username(me.username());
    let service = Arc::new(service);

    let handler = dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![service])
        .default_handler(|upd| async move {
            tracing::trace!(update_id = upd.id, "unhandled update");
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
