use anyhow::Result;
use async_trait::async_trait;

use crate::core::message_dispatcher::Sender;
use crate::model::MessageOut;

#[derive(Clone)]
pub struct ConsoleSender;

#[async_trait]
impl Sender for ConsoleSender {
    async fn send(&self, out: MessageOut) -> Result<()> {
        if !out.text.is_empty() {
            println!("{}", out.text);
        }
        Ok(())
    }
}
