use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::core::message_dispatcher::Sender;
use crate::lifecycle::Closeable;
use crate::model::{CallerId, MessageIn};

use super::sender::ConsoleSender;

pub type InSink = mpsc::UnboundedSender<MessageIn>;

/// Reads stdin lines and feeds them into the inbound channel as messages
/// from one fixed local peer. Mainly for running the agent interactively;
/// real transports plug in the same way.
pub struct ConsoleReceiver {
    caller: CallerId,
    sink: Arc<Mutex<Option<InSink>>>,
    task: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl ConsoleReceiver {
    pub fn new(caller: CallerId) -> Self {
        Self {
            caller,
            sink: Arc::new(Mutex::new(None)),
            task: Arc::new(Mutex::new(None)),
        }
    }

    pub async fn bind(&self, sink: InSink) {
        *self.sink.lock().unwrap() = Some(sink);
    }

    pub async fn start(&self) -> Result<()> {
        if self.task.lock().unwrap().is_some() {
            return Ok(());
        }

        let sink = self
            .sink
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| anyhow!("ConsoleReceiver.start() called before bind()"))?;

        let caller = self.caller.clone();

        let jh = tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if sink.send(MessageIn::new(caller.clone(), line)).is_err() {
                    break;
                }
            }
        });

        *self.task.lock().unwrap() = Some(jh);
        Ok(())
    }

    pub async fn sender(&self) -> Result<Arc<dyn Sender>> {
        self.start().await?;
        Ok(Arc::new(ConsoleSender))
    }
}

impl Closeable for ConsoleReceiver {
    fn close(&self) {
        if let Some(jh) = self.task.lock().unwrap().take() {
            jh.abort();
        }
    }
}
