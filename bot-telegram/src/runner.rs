//! Long-polling runner: converts each teloxide message to a core Message and
//! hands it to the HandlerChain. External: teloxide REPL, bot_core::HandlerChain.

use anyhow::Result;
use bot_core::{HandlerChain, ToCoreMessage};
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Starts the REPL with the given teloxide Bot and HandlerChain.
/// Each text message is converted to a core Message and processed in its own
/// task; a failed handler invocation is logged and aborts only that message.
/// Non-text messages are ignored.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        info!(username = ?me.user.username, "Bot connected");
    }

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            if msg.text().is_none() {
                return Ok(());
            }

            let wrapper = TelegramMessageWrapper(&msg);
            let core_msg = wrapper.to_core();

            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_content = %core_msg.content,
                "Received message"
            );

            tokio::spawn(async move {
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
