use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::core::command_processor::CommandProcessor;
use crate::model::{MessageIn, MessageOut};
use crate::state::BotState;

/// Transport-side reply channel. Fire-and-forget from the engine's point of
/// view; failures are logged and the loop moves on.
#[async_trait]
pub trait Sender: Send + Sync {
    async fn send(&self, out: MessageOut) -> Result<()>;
}

/// Drains the inbound channel and runs one command at a time to completion.
/// Owns the `BotState`, so handler mutations need no locking.
pub struct MessageDispatcher {
    processor: CommandProcessor,
    sender: Arc<dyn Sender>,
    state: BotState,
}

impl MessageDispatcher {
    pub fn new(processor: CommandProcessor, sender: Arc<dyn Sender>, state: BotState) -> Self {
        Self {
            processor,
            sender,
            state,
        }
    }

    pub async fn run(mut self, mut rx: mpsc::UnboundedReceiver<MessageIn>) {
        while let Some(input) = rx.recv().await {
            info!(
                "IN <- peer={} text=\"{}\"",
                input.caller.number, input.text
            );

            let t0 = Instant::now();
            let outs = self.processor.handle(&mut self.state, input);
            let cost_ms = t0.elapsed().as_millis();

            if outs.is_empty() {
                info!("PIPELINE result: empty ({cost_ms} ms)");
                continue;
            }

            info!("PIPELINE result: {} message(s) ({cost_ms} ms)", outs.len());

            for out in outs {
                info!("OUT -> peer={} text=\"{}\"", out.caller.number, out.text);
                if let Err(e) = self.sender.send(out).await {
                    error!("send failed: {e:#}");
                }
            }
        }
    }
}
