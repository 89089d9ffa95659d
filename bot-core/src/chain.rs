//! # Handler chain
//!
//! Runs a sequence of handlers for each message in registration order; the first
//! handler that returns Stop or Reply consumes the message. No match means the
//! message was ignored (the bots register a catch-all last, so this is rare).

use crate::error::Result;
use crate::types::{Handler, HandlerResponse, Message};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Ordered chain of handlers; first Stop/Reply wins.
#[derive(Clone)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler. Registration order is routing priority.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Runs handlers in order and returns the first Stop or Reply, or Continue
    /// if no handler consumed the message.
    #[instrument(skip(self, message))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            "step: handler chain started"
        );

        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            let response = handler.handle(message).await?;
            debug!(
                handler = %handler_name,
                response = ?response,
                "Handler processed"
            );

            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    info!(
                        user_id = message.user.id,
                        handler = %handler_name,
                        "step: handler chain stopped by handler"
                    );
                    return Ok(response);
                }
                HandlerResponse::Continue => continue,
            }
        }

        info!(
            user_id = message.user.id,
            "step: handler chain finished, no handler consumed the message"
        );
        Ok(HandlerResponse::Continue)
    }
}

impl Default for HandlerChain {
    fn default() -> Self {
        Self::new()
    }
}
