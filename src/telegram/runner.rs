//! Dispatcher runner: converts teloxide messages and channel posts to core
//! updates and passes them to the forwarding pipeline (spawned per update).

use std::sync::Arc;

use anyhow::Result;
use teloxide::dispatching::UpdateFilterExt;
use teloxide::prelude::*;
use teloxide::types::Update as TgUpdate;
use tracing::info;

use crate::core::ToCoreUpdate;
use crate::pipeline::ForwardPipeline;

use super::adapters::TelegramUpdateWrapper;

/// Starts the teloxide dispatcher with message and channel-post branches
/// routed through the same pipeline. Runs until the process is stopped.
pub async fn run_dispatcher(bot: teloxide::Bot, pipeline: Arc<ForwardPipeline>) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        info!(username = ?me.user.username, "telegram identity confirmed");
    }

    let handler = dptree::entry()
        .branch(TgUpdate::filter_message().endpoint(on_update))
        .branch(TgUpdate::filter_channel_post().endpoint(on_update));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![pipeline])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

async fn on_update(msg: Message, pipeline: Arc<ForwardPipeline>) -> ResponseResult<()> {
    let update = TelegramUpdateWrapper(&msg).to_core();
    info!(
        chat_id = update.chat.id,
        update_id = %update.id,
        has_text = update.text.is_some(),
        "received update"
    );

    // Handle in a spawned task so the dispatcher keeps draining updates.
    tokio::spawn(async move {
        pipeline.handle(&update).await;
    });

    Ok(())
}
